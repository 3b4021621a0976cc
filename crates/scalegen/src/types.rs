//! Type Emitter: one source definition per type id.
//!
//! Rendering dispatches on [`Shape`]. Primitives produce nothing; every other
//! shape renders a named `export` block that builds on the codec runtime:
//!
//! | Shape | Output |
//! |-------|--------|
//! | composite | `class X extends Struct`, or `U8aFixed.with(bits)` for byte wrappers |
//! | tagged union | `class X extends Enum` |
//! | optional | `class X extends Option.with(T)` |
//! | result | `class X extends Result.with({ Ok: T, Err: E })` |
//! | sequence | `const X = Vec.with(T)` |
//! | fixed array | `const X = U8aFixed.with(bits)` |
//! | tuple | `const X = Tuple.with([..])`, or a `Null` alias for extra unit types |

use crate::naming::{ResolvedNames, UNIT_NAME, object_key};
use crate::shape::{OptionalShape, ResultShape, Shape, byte_wrapper_bits};
use scalegen_core::{Field, PortableType, SchemaModel, TypeId, Variant};
use std::collections::HashSet;

/// Inner type used when an optional wrapper names none
const OPTION_FALLBACK: &str = "Text";
/// Ok type used when a result wrapper names none
const OK_FALLBACK: &str = "Null";
/// Err type used when a result wrapper names none
const ERR_FALLBACK: &str = "Text";

/// Names already emitted during one generation run.
///
/// Owned by the caller and threaded through every [`TypeEmitter::emit`] call,
/// so a fresh run always starts from an empty set.
#[derive(Debug, Default)]
pub struct EmittedNames {
    names: HashSet<String>,
}

impl EmittedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Record `name`; returns `false` if it was already emitted
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Renders type definitions using a resolved name map
pub struct TypeEmitter<'a> {
    model: &'a SchemaModel,
    names: &'a ResolvedNames,
    debug: bool,
}

impl<'a> TypeEmitter<'a> {
    pub fn new(model: &'a SchemaModel, names: &'a ResolvedNames) -> Self {
        Self {
            model,
            names,
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Render the definition of `id`.
    ///
    /// Returns `None` for primitives, for the canonical unit type, and for any
    /// name already present in `emitted`.
    pub fn emit(&self, id: TypeId, ty: &PortableType, emitted: &mut EmittedNames) -> Option<String> {
        let shape = Shape::of(ty);
        if let Shape::Primitive(_) = shape {
            return None;
        }

        let name = self.names.name_of(id);
        if !emitted.insert(&name) {
            if self.debug {
                tracing::debug!(type_id = id, name = %name, "skipping already emitted name");
            }
            return None;
        }

        if self.debug {
            tracing::debug!(type_id = id, name = %name, kind = ty.def.kind(), "emitting type");
        }

        match shape {
            Shape::Primitive(_) => None,
            Shape::Composite(fields) => Some(match byte_wrapper_bits(self.model, ty) {
                Some(bits) => byte_wrapper(&name, bits),
                None => self.struct_class(&name, fields),
            }),
            Shape::TaggedUnion(variants) => Some(self.enum_class(&name, variants)),
            Shape::Optional(optional) => Some(self.option_class(&name, optional)),
            Shape::Result(result) => Some(self.result_class(&name, result)),
            Shape::Sequence(element) => Some(format!(
                "export const {} = Vec.with({});",
                name,
                self.names.name_of(element)
            )),
            Shape::FixedArray { len, .. } => Some(byte_wrapper(&name, u64::from(len) * 8)),
            Shape::Tuple([]) if name == UNIT_NAME => None,
            Shape::Tuple([]) => Some(format!("export const {name} = {UNIT_NAME};")),
            Shape::Tuple(slots) => {
                let slots: Vec<_> = slots.iter().map(|&t| self.names.name_of(t)).collect();
                Some(format!(
                    "export const {} = Tuple.with([{}]);",
                    name,
                    slots.join(", ")
                ))
            }
        }
    }

    fn struct_class(&self, name: &str, fields: &[Field]) -> String {
        let mut code = class_open(name, "Struct");
        code.push_str("    super(registry, {\n");

        for (index, field) in fields.iter().enumerate() {
            let key = match &field.name {
                Some(field_name) => object_key(field_name).into_owned(),
                None => format!("field{index}"),
            };
            code.push_str(&format!(
                "      {}: {},\n",
                key,
                self.names.name_of(field.ty)
            ));
        }

        code.push_str("    }, value);\n");
        code.push_str(CLASS_CLOSE);
        code
    }

    fn enum_class(&self, name: &str, variants: &[Variant]) -> String {
        let mut code = class_open(name, "Enum");
        code.push_str("    super(registry, {\n");

        for variant in variants {
            let key = object_key(&variant.name);
            match variant.fields.as_slice() {
                [] => code.push_str(&format!("      {key}: {UNIT_NAME},\n")),
                [field] => match &field.name {
                    Some(field_name) => {
                        code.push_str(&format!("      {key}: Struct.with({{\n"));
                        code.push_str(&format!(
                            "        {}: {},\n",
                            object_key(field_name),
                            self.names.name_of(field.ty)
                        ));
                        code.push_str("      }),\n");
                    }
                    None => code.push_str(&format!(
                        "      {}: {},\n",
                        key,
                        self.names.name_of(field.ty)
                    )),
                },
                fields => {
                    code.push_str(&format!("      {key}: Struct.with({{\n"));
                    for field in fields {
                        code.push_str(&format!(
                            "        {}: {},\n",
                            variant_field_key(field),
                            self.names.name_of(field.ty)
                        ));
                    }
                    code.push_str("      }),\n");
                }
            }
        }

        code.push_str("    }, value);\n");
        code.push_str(CLASS_CLOSE);
        code
    }

    fn option_class(&self, name: &str, optional: OptionalShape) -> String {
        let inner = self.name_or(optional.inner, OPTION_FALLBACK);
        wrapper_class(name, &format!("Option.with({inner})"))
    }

    fn result_class(&self, name: &str, result: ResultShape) -> String {
        let ok = self.name_or(result.ok, OK_FALLBACK);
        let err = self.name_or(result.err, ERR_FALLBACK);
        wrapper_class(name, &format!("Result.with({{ Ok: {ok}, Err: {err} }})"))
    }

    fn name_or(&self, id: Option<TypeId>, fallback: &str) -> String {
        match id {
            Some(id) => self.names.name_of(id).into_owned(),
            None => fallback.to_string(),
        }
    }
}

const CLASS_CLOSE: &str = "  }\n}";

fn class_open(name: &str, base: &str) -> String {
    format!("export class {name} extends {base} {{\n  constructor(registry: Registry, value?: any) {{\n")
}

fn wrapper_class(name: &str, base: &str) -> String {
    let mut code = class_open(name, base);
    code.push_str("    super(registry, value);\n");
    code.push_str(CLASS_CLOSE);
    code
}

fn byte_wrapper(name: &str, bits: u64) -> String {
    format!("export const {name} = U8aFixed.with({bits} as U8aBitLength);")
}

/// Key of a field inside a multi-field variant: name, then source type name,
/// then `field<type id>`.
fn variant_field_key(field: &Field) -> String {
    match (&field.name, &field.type_name) {
        (Some(name), _) => object_key(name).into_owned(),
        (None, Some(type_name)) => object_key(type_name).into_owned(),
        (None, None) => format!("field{}", field.ty),
    }
}
