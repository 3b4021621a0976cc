//! scalegen-core - Schema model, configuration, and error types
//!
//! This crate provides the foundational types shared by the scalegen pipeline:
//! - [`TypeInfoData`] and friends: the deserialized type registry and function list
//! - [`SchemaModel`] for id-keyed, input-ordered access to type definitions
//! - [`GeneratorConfig`] for generation options
//! - [`ScalegenError`] for error handling

mod config;
mod error;
mod model;
mod schema;

pub use config::GeneratorConfig;
pub use error::{ScalegenError, ScalegenResult};
pub use model::SchemaModel;
pub use schema::{
    ArrayDef, CompositeDef, Field, FunctionInfo, PortableType, RefSite, SequenceDef, TypeDef,
    TypeEntry, TypeId, TypeInfoData, TypeParam, TypeRef, Variant, VariantDef,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Field, FunctionInfo, GeneratorConfig, PortableType, ScalegenError, ScalegenResult,
        SchemaModel, TypeDef, TypeEntry, TypeId, TypeInfoData, Variant,
    };
}
