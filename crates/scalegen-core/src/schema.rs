//! Deserialized type registry and function signatures
//!
//! These types mirror the JSON produced by scale-info style registries:
//!
//! ```json
//! {
//!   "functions": [{"method": "post", "name": "hello", "param_types": [0], "return_type": 1}],
//!   "types": [
//!     {"id": 0, "type": {"def": {"composite": {"fields": [{"name": "id", "type": 1}]}},
//!                        "path": ["pkg", "Skp"]}},
//!     {"id": 1, "type": {"def": {"primitive": "u64"}}}
//!   ]
//! }
//! ```
//!
//! Type entries are also accepted in the flat layout `{"id": 1, "def": {...}}`.

use crate::error::ScalegenResult;
use serde::{Deserialize, Serialize};

/// Integer key naming a node in the type graph
pub type TypeId = u32;

/// Top-level schema: function signatures plus the type registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeInfoData {
    #[serde(default)]
    pub functions: Vec<FunctionInfo>,

    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

impl TypeInfoData {
    /// Parse schema JSON text
    pub fn from_json(text: &str) -> ScalegenResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse schema JSON bytes
    pub fn from_slice(bytes: &[u8]) -> ScalegenResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// A remote-callable function signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Dispatch method tag (e.g. `post`, `get`)
    pub method: String,

    pub name: String,

    #[serde(default)]
    pub param_types: Vec<TypeId>,

    pub return_type: TypeId,
}

impl FunctionInfo {
    pub fn new(
        method: impl Into<String>,
        name: impl Into<String>,
        param_types: Vec<TypeId>,
        return_type: TypeId,
    ) -> Self {
        Self {
            method: method.into(),
            name: name.into(),
            param_types,
            return_type,
        }
    }
}

/// One registry entry: an id and its definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TypeEntryRepr")]
pub struct TypeEntry {
    pub id: TypeId,

    #[serde(rename = "type")]
    pub ty: PortableType,
}

impl TypeEntry {
    pub fn new(id: TypeId, ty: PortableType) -> Self {
        Self { id, ty }
    }
}

/// Both accepted JSON layouts of a registry entry
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeEntryRepr {
    Nested {
        id: TypeId,
        #[serde(rename = "type", alias = "ty")]
        ty: PortableType,
    },
    Flat {
        id: TypeId,
        #[serde(flatten)]
        ty: PortableType,
    },
}

impl From<TypeEntryRepr> for TypeEntry {
    fn from(repr: TypeEntryRepr) -> Self {
        match repr {
            TypeEntryRepr::Nested { id, ty } | TypeEntryRepr::Flat { id, ty } => {
                TypeEntry { id, ty }
            }
        }
    }
}

/// A type definition together with its optional path and generic parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableType {
    pub def: TypeDef,

    /// Namespace segments; the last one is the preferred display name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,

    /// Generic arguments of an instantiated generic type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypeParam>,
}

impl PortableType {
    pub fn new(def: TypeDef) -> Self {
        Self {
            def,
            path: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = TypeParam>,
    {
        self.params = params.into_iter().collect();
        self
    }

    /// Last path segment, if the type has a non-empty path
    pub fn path_name(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Bound generic parameter ids, in declaration order
    pub fn param_ids(&self) -> Vec<TypeId> {
        self.params.iter().filter_map(|p| p.ty).collect()
    }

    /// Every type id this definition refers to, with where the reference sits
    pub fn references(&self) -> Vec<TypeRef> {
        let mut refs = Vec::new();

        match &self.def {
            TypeDef::Primitive(_) => {}
            TypeDef::Composite(composite) => {
                for (index, field) in composite.fields.iter().enumerate() {
                    refs.push(TypeRef::new(field.ty, RefSite::Field { index }));
                }
            }
            TypeDef::Variant(variant) => {
                for v in &variant.variants {
                    for (index, field) in v.fields.iter().enumerate() {
                        refs.push(TypeRef::new(
                            field.ty,
                            RefSite::VariantField {
                                variant: v.name.clone(),
                                index,
                            },
                        ));
                    }
                }
            }
            TypeDef::Sequence(seq) => refs.push(TypeRef::new(seq.ty, RefSite::Element)),
            TypeDef::Array(array) => refs.push(TypeRef::new(array.ty, RefSite::Element)),
            TypeDef::Tuple(slots) => {
                for (index, &ty) in slots.iter().enumerate() {
                    refs.push(TypeRef::new(ty, RefSite::TupleSlot { index }));
                }
            }
        }

        for (index, param) in self.params.iter().enumerate() {
            if let Some(ty) = param.ty {
                refs.push(TypeRef::new(ty, RefSite::Param { index }));
            }
        }

        refs
    }
}

/// A reference from one definition to another type id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    pub ty: TypeId,
    pub site: RefSite,
}

impl TypeRef {
    fn new(ty: TypeId, site: RefSite) -> Self {
        Self { ty, site }
    }
}

/// Where inside a definition a reference appears
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RefSite {
    Field { index: usize },
    VariantField { variant: String, index: usize },
    Element,
    TupleSlot { index: usize },
    Param { index: usize },
}

/// Generic parameter of an instantiated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParam {
    pub name: String,

    /// Unbound parameters are exported as `null`
    #[serde(rename = "type", default)]
    pub ty: Option<TypeId>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }
}

/// The six structural definition kinds of the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeDef {
    /// Leaf numeric, boolean, or text kind (`u32`, `bool`, `str`, ...)
    Primitive(String),

    /// Product type
    Composite(CompositeDef),

    /// Sum type
    Variant(VariantDef),

    /// Variable-length homogeneous list
    Sequence(SequenceDef),

    /// Fixed-length homogeneous list
    Array(ArrayDef),

    /// Positional product; empty is the unit type
    Tuple(Vec<TypeId>),
}

impl TypeDef {
    /// Short kind label, used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            TypeDef::Primitive(_) => "primitive",
            TypeDef::Composite(_) => "composite",
            TypeDef::Variant(_) => "variant",
            TypeDef::Sequence(_) => "sequence",
            TypeDef::Array(_) => "array",
            TypeDef::Tuple(_) => "tuple",
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDef::Primitive(name.into())
    }

    pub fn composite(fields: Vec<Field>) -> Self {
        TypeDef::Composite(CompositeDef { fields })
    }

    pub fn variant(variants: Vec<Variant>) -> Self {
        TypeDef::Variant(VariantDef { variants })
    }

    pub fn sequence(ty: TypeId) -> Self {
        TypeDef::Sequence(SequenceDef { ty })
    }

    pub fn array(len: u32, ty: TypeId) -> Self {
        TypeDef::Array(ArrayDef { len, ty })
    }

    pub fn tuple(slots: Vec<TypeId>) -> Self {
        TypeDef::Tuple(slots)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeDef {
    #[serde(default)]
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDef {
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDef {
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayDef {
    /// Length in elements
    pub len: u32,

    #[serde(rename = "type")]
    pub ty: TypeId,
}

/// A field of a composite or of a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: TypeId,

    /// Source-level type name, e.g. `[u8; 32]`
    #[serde(
        default,
        rename = "typeName",
        alias = "type_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_name: Option<String>,
}

impl Field {
    pub fn named(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            type_name: None,
        }
    }

    pub fn unnamed(ty: TypeId) -> Self {
        Self {
            name: None,
            ty,
            type_name: None,
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

/// One case of a sum type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,

    #[serde(default)]
    pub index: u8,

    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Variant {
    pub fn new(name: impl Into<String>, index: u8, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            index,
            fields,
        }
    }

    pub fn unit(name: impl Into<String>, index: u8) -> Self {
        Self::new(name, index, Vec::new())
    }
}
