//! Id-keyed, input-ordered view over a parsed schema

use crate::schema::{FunctionInfo, PortableType, TypeDef, TypeEntry, TypeId, TypeInfoData};
use std::collections::HashMap;

/// In-memory schema: type definitions keyed by id, plus function signatures.
///
/// Populated once from [`TypeInfoData`] and read-only afterwards. Entries keep
/// the order in which they first appear in the input. When an id is repeated,
/// the later definition wins but keeps the earlier position.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    entries: Vec<TypeEntry>,
    index: HashMap<TypeId, usize>,
    functions: Vec<FunctionInfo>,
    duplicate_ids: Vec<TypeId>,
}

impl SchemaModel {
    /// Build the model from parsed schema data
    pub fn new(data: &TypeInfoData) -> Self {
        let mut model = Self {
            entries: Vec::with_capacity(data.types.len()),
            index: HashMap::with_capacity(data.types.len()),
            functions: data.functions.clone(),
            duplicate_ids: Vec::new(),
        };

        for entry in &data.types {
            match model.index.get(&entry.id) {
                Some(&pos) => {
                    model.entries[pos] = entry.clone();
                    model.duplicate_ids.push(entry.id);
                }
                None => {
                    model.index.insert(entry.id, model.entries.len());
                    model.entries.push(entry.clone());
                }
            }
        }

        model
    }

    /// Look up a type definition
    pub fn get(&self, id: TypeId) -> Option<&PortableType> {
        self.index.get(&id).map(|&pos| &self.entries[pos].ty)
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Type ids in input order
    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Type entries in input order
    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    pub fn functions(&self) -> &[FunctionInfo] {
        &self.functions
    }

    /// Ids that appeared more than once in the input
    pub fn duplicate_ids(&self) -> &[TypeId] {
        &self.duplicate_ids
    }

    /// Number of distinct type ids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `id` exists and is a primitive
    pub fn is_primitive(&self, id: TypeId) -> bool {
        matches!(self.get(id).map(|t| &t.def), Some(TypeDef::Primitive(_)))
    }

    /// Whether `id` exists and must be emitted before anything referencing it
    pub fn needs_definition(&self, id: TypeId) -> bool {
        self.contains(id) && !self.is_primitive(id)
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
