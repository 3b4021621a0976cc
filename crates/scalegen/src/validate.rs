//! Post-hoc consistency report over one schema.
//!
//! Generation never fails on bad data: missing ids become `Type<id>`
//! placeholders and cycles are broken by input order. The report makes those
//! fallbacks observable so callers can reject a malformed schema themselves.

use crate::naming::{ResolvedNames, placeholder_name};
use crate::order::EmissionOrder;
use scalegen_core::{RefSite, SchemaModel, TypeId};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

/// What refers to a missing type id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "owner", rename_all = "snake_case")]
pub enum RefOwner {
    /// A type definition
    Type { id: TypeId, site: RefSite },
    /// A function parameter
    FunctionParam { function: String, index: usize },
    /// A function return type
    FunctionReturn { function: String },
}

/// A reference to an id that is not in the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderRef {
    pub owner: RefOwner,
    pub missing: TypeId,
    /// Name emitted in place of the missing type
    pub placeholder: String,
}

/// A name that had the type id appended to stay unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisambiguatedName {
    pub id: TypeId,
    pub name: String,
}

/// Several ids sharing one resolved name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    pub name: String,
    pub ids: Vec<TypeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub type_count: usize,
    pub function_count: usize,
    pub duplicate_type_ids: Vec<TypeId>,
    pub duplicate_function_names: Vec<String>,
    pub placeholder_refs: Vec<PlaceholderRef>,
    pub cycle_broken: Vec<TypeId>,
    pub disambiguated: Vec<DisambiguatedName>,
    /// Non-primitive names shared by several ids; always empty unless the
    /// resolver's uniqueness pass is bypassed
    pub name_collisions: Vec<NameCollision>,
}

impl ValidationReport {
    /// Build the report from the artifacts of one run
    pub fn build(model: &SchemaModel, names: &ResolvedNames, order: &EmissionOrder) -> Self {
        Self {
            type_count: model.len(),
            function_count: model.functions().len(),
            duplicate_type_ids: model.duplicate_ids().to_vec(),
            duplicate_function_names: duplicate_function_names(model),
            placeholder_refs: placeholder_refs(model),
            cycle_broken: order.cycle_broken.clone(),
            disambiguated: names
                .disambiguated_ids()
                .iter()
                .map(|&id| DisambiguatedName {
                    id,
                    name: names.name_of(id).into_owned(),
                })
                .collect(),
            name_collisions: name_collisions(model, names),
        }
    }

    /// Whether generation needed no fallback.
    ///
    /// Disambiguated names are expected output and do not count.
    pub fn is_clean(&self) -> bool {
        self.duplicate_type_ids.is_empty()
            && self.duplicate_function_names.is_empty()
            && self.placeholder_refs.is_empty()
            && self.cycle_broken.is_empty()
            && self.name_collisions.is_empty()
    }

    /// Distinct missing ids, in first-seen order
    pub fn placeholder_ids(&self) -> Vec<TypeId> {
        let mut seen = HashSet::new();
        self.placeholder_refs
            .iter()
            .map(|r| r.missing)
            .filter(|&id| seen.insert(id))
            .collect()
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} types, {} functions",
            self.type_count, self.function_count
        );

        if self.is_clean() {
            out.push_str("ok: no issues found\n");
        }
        if !self.duplicate_type_ids.is_empty() {
            let _ = writeln!(out, "duplicate type ids: {}", join(&self.duplicate_type_ids));
        }
        if !self.duplicate_function_names.is_empty() {
            let _ = writeln!(
                out,
                "duplicate function names: {}",
                self.duplicate_function_names.join(", ")
            );
        }
        for r in &self.placeholder_refs {
            let _ = writeln!(
                out,
                "missing type {} ({}) referenced by {}",
                r.missing,
                r.placeholder,
                describe_owner(&r.owner)
            );
        }
        if !self.cycle_broken.is_empty() {
            let _ = writeln!(out, "cycle-broken ids: {}", join(&self.cycle_broken));
        }
        for collision in &self.name_collisions {
            let _ = writeln!(
                out,
                "name {} shared by ids {}",
                collision.name,
                join(&collision.ids)
            );
        }
        if !self.disambiguated.is_empty() {
            let renamed: Vec<String> = self
                .disambiguated
                .iter()
                .map(|d| format!("{}={}", d.id, d.name))
                .collect();
            let _ = writeln!(out, "disambiguated: {}", renamed.join(", "));
        }

        out
    }
}

fn join(ids: &[TypeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_owner(owner: &RefOwner) -> String {
    match owner {
        RefOwner::Type { id, site } => match site {
            RefSite::Field { index } => format!("type {id} field {index}"),
            RefSite::VariantField { variant, index } => {
                format!("type {id} variant {variant} field {index}")
            }
            RefSite::Element => format!("type {id} element"),
            RefSite::TupleSlot { index } => format!("type {id} tuple slot {index}"),
            RefSite::Param { index } => format!("type {id} param {index}"),
        },
        RefOwner::FunctionParam { function, index } => {
            format!("function {function} param {index}")
        }
        RefOwner::FunctionReturn { function } => format!("function {function} return"),
    }
}

fn duplicate_function_names(model: &SchemaModel) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    model
        .functions()
        .iter()
        .map(|f| f.name.as_str())
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .map(str::to_string)
        .collect()
}

fn placeholder_refs(model: &SchemaModel) -> Vec<PlaceholderRef> {
    let missing = |id: TypeId| !model.contains(id);
    let mut refs = Vec::new();

    for entry in model.entries() {
        for r in entry.ty.references() {
            if missing(r.ty) {
                refs.push(PlaceholderRef {
                    owner: RefOwner::Type {
                        id: entry.id,
                        site: r.site,
                    },
                    missing: r.ty,
                    placeholder: placeholder_name(r.ty),
                });
            }
        }
    }

    for function in model.functions() {
        for (index, &param) in function.param_types.iter().enumerate() {
            if missing(param) {
                refs.push(PlaceholderRef {
                    owner: RefOwner::FunctionParam {
                        function: function.name.clone(),
                        index,
                    },
                    missing: param,
                    placeholder: placeholder_name(param),
                });
            }
        }
        if missing(function.return_type) {
            refs.push(PlaceholderRef {
                owner: RefOwner::FunctionReturn {
                    function: function.name.clone(),
                },
                missing: function.return_type,
                placeholder: placeholder_name(function.return_type),
            });
        }
    }

    refs
}

fn name_collisions(model: &SchemaModel, names: &ResolvedNames) -> Vec<NameCollision> {
    let mut by_name: BTreeMap<&str, Vec<TypeId>> = BTreeMap::new();
    for id in model.ids() {
        if model.is_primitive(id) {
            continue;
        }
        if let Some(name) = names.get(id) {
            by_name.entry(name).or_default().push(id);
        }
    }

    by_name
        .into_iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(name, ids)| NameCollision {
            name: name.to_string(),
            ids,
        })
        .collect()
}
