//! scalegen - Typed codec definitions and RPC stubs from a type registry
//!
//! Turns a registry of structural type definitions plus a list of function
//! signatures into `@polkadot/types` TypeScript: one definition per type and
//! one async stub per function.
//!
//! # Architecture
//!
//! Generation is a one-shot synchronous pipeline:
//!
//! ```text
//! TypeInfoData
//!     ↓
//!  [SchemaModel]          id → definition, input order kept
//!     ↓
//!  [NameResolver]         one unique name per id
//!     ↓
//!  [emission_order]       dependencies first, cycles appended
//!     ↓
//!  ├─→ [TypeEmitter]      type blocks, dependency order
//!  └─→ [FunctionEmitter]  stub blocks, input order
//!     ↓
//!  String
//! ```
//!
//! Nothing is shared between runs: every call builds its own model, names and
//! emitted-name accumulator.
//!
//! # Usage
//!
//! ```rust
//! use scalegen_core::TypeInfoData;
//!
//! let data = TypeInfoData::from_json(
//!     r#"{"functions":[{"method":"get","name":"ping","param_types":[],"return_type":0}],
//!         "types":[{"id":0,"type":{"def":{"primitive":"bool"}}}]}"#,
//! )?;
//!
//! let code = scalegen::generate(&data, false);
//! assert!(code.starts_with("export async function ping(nucleusId: string): Promise<bool> {"));
//!
//! let report = scalegen::validate(&data);
//! assert!(report.is_clean());
//! # Ok::<(), scalegen_core::ScalegenError>(())
//! ```
//!
//! # Malformed input
//!
//! Generation never fails on data. References to missing ids render as
//! `Type<id>` and dependency cycles fall back to input order; use
//! [`validate()`] to find out whether either happened.

pub mod functions;
pub mod generator;
pub mod naming;
pub mod order;
pub mod prelude;
pub mod shape;
pub mod types;
pub mod validate;

pub use functions::{ArgNamer, FunctionEmitter, HeuristicArgNamer};
pub use generator::{CodeGenerator, generate, validate};
pub use naming::{NameResolver, ResolvedNames};
pub use order::{EmissionOrder, emission_order};
pub use shape::Shape;
pub use types::{EmittedNames, TypeEmitter};
pub use validate::{PlaceholderRef, RefOwner, ValidationReport};
