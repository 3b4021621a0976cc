//! Name resolution for type ids.
//!
//! Every type id in the schema gets exactly one display name, assigned once
//! before any code is emitted. Names come from, in order of precedence:
//!
//! 1. Wrapper shapes: `CustomResult<id>` / `CustomOption<id>`, so they never
//!    collide with the runtime's own `Result` and `Option`.
//! 2. The last path segment, with the id appended when the type is a generic
//!    instantiation or another type shares the same last segment.
//! 3. The primitive lexicon (`str` → `Text`, integers and `bool` as-is).
//! 4. Synthetic names: `U8Array<len>`, `Vec<element>`, `Null` for the empty
//!    tuple, `TupleType<id>`, and `Type<id>` for everything else.
//!
//! A final uniqueness pass appends the id to any non-primitive name that is
//! already taken or that would shadow an identifier the generated code uses.
//!
//! # Examples
//!
//! ```
//! use scalegen::naming::NameResolver;
//! use scalegen_core::{Field, PortableType, SchemaModel, TypeDef, TypeEntry, TypeInfoData};
//!
//! let data = TypeInfoData {
//!     functions: vec![],
//!     types: vec![
//!         TypeEntry::new(5, PortableType::new(TypeDef::primitive("bool"))),
//!         TypeEntry::new(
//!             7,
//!             PortableType::new(TypeDef::composite(vec![Field::named("x", 5)]))
//!                 .with_path(["pkg", "Foo"]),
//!         ),
//!     ],
//! };
//! let model = SchemaModel::new(&data);
//! let names = NameResolver::new(&model).resolve();
//!
//! assert_eq!(names.name_of(5), "bool");
//! assert_eq!(names.name_of(7), "Foo");
//! assert_eq!(names.name_of(99), "Type99");
//! ```

use crate::prelude::is_runtime_identifier;
use crate::shape::Shape;
use scalegen_core::{PortableType, SchemaModel, TypeId};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Name of the canonical unit type (the empty tuple)
pub const UNIT_NAME: &str = "Null";

/// Map a registry primitive kind to its codec name.
///
/// Unknown kinds pass through unchanged.
pub fn primitive_name(kind: &str) -> &str {
    match kind {
        "str" => "Text",
        "bool" => "bool",
        "u8" => "u8",
        "u16" => "u16",
        "u32" => "u32",
        "u64" => "u64",
        "u128" => "u128",
        "i8" => "i8",
        "i16" => "i16",
        "i32" => "i32",
        "i64" => "i64",
        "i128" => "i128",
        other => other,
    }
}

/// Name used for an id that has no resolved name
pub fn placeholder_name(id: TypeId) -> String {
    format!("Type{id}")
}

/// Whether `s` is usable as a bare identifier in generated code
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Render `s` as an object literal key, quoting it when it is not an identifier
pub fn object_key(s: &str) -> Cow<'_, str> {
    if is_identifier(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")))
    }
}

/// The immutable id → name map produced by [`NameResolver::resolve`]
#[derive(Debug, Clone, Default)]
pub struct ResolvedNames {
    names: HashMap<TypeId, String>,
    disambiguated: Vec<TypeId>,
    placeholders: Vec<TypeId>,
}

impl ResolvedNames {
    /// Resolved name for `id`, or the `Type<id>` placeholder for unknown ids
    pub fn name_of(&self, id: TypeId) -> Cow<'_, str> {
        match self.names.get(&id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(placeholder_name(id)),
        }
    }

    /// Resolved name for `id`, if the id exists in the schema
    pub fn get(&self, id: TypeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Whether `id` has a resolved name
    pub fn contains(&self, id: TypeId) -> bool {
        self.names.contains_key(&id)
    }

    /// Ids whose candidate name was taken and had the id appended
    pub fn disambiguated_ids(&self) -> &[TypeId] {
        &self.disambiguated
    }

    /// Referenced ids that are missing from the schema, in first-seen order.
    ///
    /// Covers type definitions and function signatures; each of these ids is
    /// rendered as its `Type<id>` placeholder.
    pub fn placeholder_ids(&self) -> &[TypeId] {
        &self.placeholders
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Assigns names to every type id of a [`SchemaModel`].
///
/// One resolver is used for one run; [`resolve`](Self::resolve) consumes it.
pub struct NameResolver<'a> {
    model: &'a SchemaModel,
    debug: bool,
    path_name_counts: HashMap<&'a str, usize>,
    names: HashMap<TypeId, String>,
    claimed: HashSet<String>,
    disambiguated: Vec<TypeId>,
}

impl<'a> NameResolver<'a> {
    pub fn new(model: &'a SchemaModel) -> Self {
        let mut path_name_counts: HashMap<&'a str, usize> = HashMap::new();
        let mut claimed = HashSet::new();

        for entry in model.entries() {
            if let Some(base) = usable_path_name(&entry.ty) {
                *path_name_counts.entry(base).or_insert(0) += 1;
            }
            if let Shape::Primitive(kind) = Shape::of(&entry.ty) {
                claimed.insert(primitive_name(kind).to_string());
            }
        }

        Self {
            model,
            debug: false,
            path_name_counts,
            names: HashMap::with_capacity(model.len()),
            claimed,
            disambiguated: Vec::new(),
        }
    }

    /// Emit a debug event for every resolved name
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Resolve every id, in population order
    pub fn resolve(mut self) -> ResolvedNames {
        let model = self.model;
        for id in model.ids() {
            self.resolve_id(id);
        }

        let mut seen = HashSet::new();
        let referenced = model
            .entries()
            .iter()
            .flat_map(|entry| entry.ty.references())
            .map(|r| r.ty)
            .chain(
                model
                    .functions()
                    .iter()
                    .flat_map(|f| f.param_types.iter().copied().chain([f.return_type])),
            );
        let placeholders = referenced
            .filter(|&id| !model.contains(id))
            .filter(|&id| seen.insert(id))
            .collect();

        ResolvedNames {
            names: self.names,
            disambiguated: self.disambiguated,
            placeholders,
        }
    }

    fn resolve_id(&mut self, id: TypeId) -> String {
        if let Some(name) = self.names.get(&id) {
            return name.clone();
        }

        // Nested sequences embed their element's name, so walk the chain
        // down first and name it innermost out.
        let mut chain = vec![id];
        let mut on_chain = HashSet::from([id]);
        let mut current = id;
        while let Some(element) = self.pathless_sequence_element(current) {
            if self.names.contains_key(&element) || !on_chain.insert(element) {
                break;
            }
            chain.push(element);
            current = element;
        }

        let mut name = placeholder_name(id);
        while let Some(next) = chain.pop() {
            name = self.resolve_one(next);
        }
        name
    }

    fn pathless_sequence_element(&self, id: TypeId) -> Option<TypeId> {
        let ty = self.model.get(id)?;
        if usable_path_name(ty).is_some() {
            return None;
        }
        match Shape::of(ty) {
            Shape::Sequence(element) => Some(element),
            _ => None,
        }
    }

    fn resolve_one(&mut self, id: TypeId) -> String {
        if let Some(name) = self.names.get(&id) {
            return name.clone();
        }
        let model = self.model;
        let Some(ty) = model.get(id) else {
            return placeholder_name(id);
        };

        let shape = Shape::of(ty);
        let candidate = self.candidate_name(id, ty, shape);

        let name = match shape {
            Shape::Primitive(_) => candidate,
            Shape::Tuple([]) => self.claim(id, candidate, true),
            Shape::Composite(_)
            | Shape::TaggedUnion(_)
            | Shape::Optional(_)
            | Shape::Result(_)
            | Shape::Sequence(_)
            | Shape::FixedArray { .. }
            | Shape::Tuple(_) => self.claim(id, candidate, false),
        };

        if self.debug {
            tracing::debug!(
                type_id = id,
                kind = ty.def.kind(),
                name = %name,
                "resolved type name"
            );
        }

        self.names.insert(id, name.clone());
        name
    }

    fn candidate_name(&self, id: TypeId, ty: &PortableType, shape: Shape<'_>) -> String {
        if !shape.is_wrapper() {
            if let Some(base) = usable_path_name(ty) {
                let shared = self.path_name_counts.get(base).copied().unwrap_or(0) > 1;
                return if !ty.params.is_empty() || shared {
                    format!("{base}{id}")
                } else {
                    base.to_string()
                };
            }
        }

        match shape {
            Shape::Result(_) => format!("CustomResult{id}"),
            Shape::Optional(_) => format!("CustomOption{id}"),
            Shape::Primitive(kind) => primitive_name(kind).to_string(),
            Shape::FixedArray { len, .. } => format!("U8Array{len}"),
            // A sequence nested in itself cannot embed its own name.
            Shape::Sequence(element) => format!("Vec{}", self.name_or_placeholder(element)),
            Shape::Tuple([]) => UNIT_NAME.to_string(),
            Shape::Tuple(_) => format!("TupleType{id}"),
            Shape::Composite(_) | Shape::TaggedUnion(_) => placeholder_name(id),
        }
    }

    fn name_or_placeholder(&self, id: TypeId) -> Cow<'_, str> {
        match self.names.get(&id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(placeholder_name(id)),
        }
    }

    /// Reserve `candidate` for `id`, appending the id when it is already taken.
    fn claim(&mut self, id: TypeId, candidate: String, is_unit: bool) -> String {
        let taken = |claimed: &HashSet<String>, name: &str| {
            let reserved = is_runtime_identifier(name) && !(is_unit && name == UNIT_NAME);
            claimed.contains(name) || reserved
        };

        let name = if taken(&self.claimed, &candidate) {
            let mut name = format!("{candidate}{id}");
            while taken(&self.claimed, &name) {
                name.push('_');
            }
            self.disambiguated.push(id);
            name
        } else {
            candidate
        };

        self.claimed.insert(name.clone());
        name
    }
}

fn usable_path_name(ty: &PortableType) -> Option<&str> {
    ty.path_name().filter(|name| !name.is_empty())
}
