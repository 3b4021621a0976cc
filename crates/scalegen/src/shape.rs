//! Structural classification of type definitions.
//!
//! The registry has six definition kinds, but code generation distinguishes
//! eight shapes: tagged unions shaped exactly like `{None, Some(T)}` or
//! `{Ok(T), Err(E)}` are generic wrappers and get their own templates.
//!
//! | Definition | Shape |
//! |------------|-------|
//! | `primitive` | [`Shape::Primitive`] |
//! | `composite` | [`Shape::Composite`] |
//! | `variant` `{None, Some}` | [`Shape::Optional`] |
//! | `variant` `{Ok, Err}` | [`Shape::Result`] |
//! | other `variant` | [`Shape::TaggedUnion`] |
//! | `sequence` | [`Shape::Sequence`] |
//! | `array` | [`Shape::FixedArray`] |
//! | `tuple` | [`Shape::Tuple`] |

use once_cell::sync::Lazy;
use regex::Regex;
use scalegen_core::{Field, PortableType, SchemaModel, TypeDef, TypeId, Variant};

/// Hash aliases that are always fixed-width byte wrappers, with their width in bytes.
const HASH_ALIASES: &[(&str, u32)] = &[("H160", 20), ("H256", 32), ("H512", 64)];

#[allow(clippy::expect_used)] // Safe: the pattern is a literal
static BYTE_ARRAY_TYPE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[u8;\s*(\d+)\]").expect("byte array pattern compiles"));

/// The eight shapes a type definition can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    Primitive(&'a str),
    Composite(&'a [Field]),
    TaggedUnion(&'a [Variant]),
    Optional(OptionalShape),
    Result(ResultShape),
    Sequence(TypeId),
    FixedArray { len: u32, element: TypeId },
    Tuple(&'a [TypeId]),
}

/// Where a wrapper's inner types were taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InnerSource {
    /// The definition's generic parameters
    Params,
    /// The first field of each relevant variant
    Fields,
}

/// `{None, Some(T)}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalShape {
    /// `None` when neither params nor the `Some` variant name a type
    pub inner: Option<TypeId>,
    pub source: InnerSource,
}

/// `{Ok(T), Err(E)}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultShape {
    pub ok: Option<TypeId>,
    pub err: Option<TypeId>,
    pub source: InnerSource,
}

/// Which generic wrapper a variant set matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
    Optional,
    Result,
}

impl<'a> Shape<'a> {
    /// Classify a type definition
    pub fn of(ty: &'a PortableType) -> Self {
        match &ty.def {
            TypeDef::Primitive(kind) => Shape::Primitive(kind),
            TypeDef::Composite(composite) => Shape::Composite(&composite.fields),
            TypeDef::Variant(variant) => match wrapper_kind(&variant.variants) {
                Some(WrapperKind::Result) => Shape::Result(result_shape(ty, &variant.variants)),
                Some(WrapperKind::Optional) => {
                    Shape::Optional(optional_shape(ty, &variant.variants))
                }
                None => Shape::TaggedUnion(&variant.variants),
            },
            TypeDef::Sequence(seq) => Shape::Sequence(seq.ty),
            TypeDef::Array(array) => Shape::FixedArray {
                len: array.len,
                element: array.ty,
            },
            TypeDef::Tuple(slots) => Shape::Tuple(slots),
        }
    }

    /// Whether this shape is one of the generic wrappers
    pub fn is_wrapper(&self) -> bool {
        matches!(self, Shape::Optional(_) | Shape::Result(_))
    }
}

/// Detect the optional/result wrapper shapes by variant names.
///
/// Both require exactly two variants; order does not matter.
pub fn wrapper_kind(variants: &[Variant]) -> Option<WrapperKind> {
    if variants.len() != 2 {
        return None;
    }
    let has = |name: &str| variants.iter().any(|v| v.name == name);

    if has("Ok") && has("Err") {
        Some(WrapperKind::Result)
    } else if has("None") && has("Some") {
        Some(WrapperKind::Optional)
    } else {
        None
    }
}

fn first_field_of(variants: &[Variant], name: &str) -> Option<TypeId> {
    variants
        .iter()
        .find(|v| v.name == name)
        .and_then(|v| v.fields.first())
        .map(|f| f.ty)
}

fn optional_shape(ty: &PortableType, variants: &[Variant]) -> OptionalShape {
    let params = ty.param_ids();
    if let Some(&inner) = params.first() {
        return OptionalShape {
            inner: Some(inner),
            source: InnerSource::Params,
        };
    }
    OptionalShape {
        inner: first_field_of(variants, "Some"),
        source: InnerSource::Fields,
    }
}

fn result_shape(ty: &PortableType, variants: &[Variant]) -> ResultShape {
    let params = ty.param_ids();
    if params.len() >= 2 {
        return ResultShape {
            ok: Some(params[0]),
            err: Some(params[1]),
            source: InnerSource::Params,
        };
    }
    ResultShape {
        ok: first_field_of(variants, "Ok"),
        err: first_field_of(variants, "Err"),
        source: InnerSource::Fields,
    }
}

/// Element count declared by a `[u8; N]` source type name
pub fn byte_array_len(type_name: &str) -> Option<u32> {
    BYTE_ARRAY_TYPE_NAME
        .captures(type_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Bit length of a composite that should be emitted as a fixed-width byte wrapper.
///
/// Applies to known hash aliases (`H160`, `H256`, `H512`) and to composites with
/// a single field that is either declared as `[u8; N]` or is itself a fixed array.
/// Returns `None` for every other definition.
pub fn byte_wrapper_bits(model: &SchemaModel, ty: &PortableType) -> Option<u64> {
    let TypeDef::Composite(composite) = &ty.def else {
        return None;
    };

    let single = match composite.fields.as_slice() {
        [field] => Some(field),
        _ => None,
    };
    let from_array = single.and_then(|f| match model.get(f.ty).map(|t| &t.def) {
        Some(TypeDef::Array(array)) => Some(array.len),
        _ => None,
    });
    let from_type_name = single
        .and_then(|f| f.type_name.as_deref())
        .and_then(byte_array_len);

    let alias_len = ty.path_name().and_then(|name| {
        HASH_ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|&(_, len)| len)
    });

    let len = match alias_len {
        Some(len) => Some(from_array.or(from_type_name).unwrap_or(len)),
        None => from_array.or(from_type_name),
    }?;

    Some(u64::from(len) * 8)
}
