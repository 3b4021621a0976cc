//! Dependency analysis and emission order.
//!
//! A type must be emitted after every non-primitive type it structurally
//! references: composite fields, variant fields, sequence and array elements,
//! tuple slots, and (for tagged unions only) generic parameters.
//!
//! Ordering is Kahn's algorithm with a FIFO worklist seeded in input order,
//! so ids that become ready together keep their relative input order. Ids left
//! over when the worklist drains (cycles) are appended in input order.

use scalegen_core::{PortableType, RefSite, SchemaModel, TypeDef, TypeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// The order in which type definitions are emitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmissionOrder {
    /// Every id of the model, exactly once
    pub ids: Vec<TypeId>,

    /// Ids that could not be ordered and were appended in input order
    pub cycle_broken: Vec<TypeId>,
}

/// Direct dependencies of a definition that must be emitted first.
///
/// Primitive and unknown ids are excluded; order follows the definition and
/// each id appears once.
pub fn dependencies(model: &SchemaModel, ty: &PortableType) -> Vec<TypeId> {
    let params_count = matches!(ty.def, TypeDef::Variant(_));
    let mut seen = HashSet::new();

    ty.references()
        .into_iter()
        .filter(|r| params_count || !matches!(r.site, RefSite::Param { .. }))
        .map(|r| r.ty)
        .filter(|&id| model.needs_definition(id))
        .filter(|&id| seen.insert(id))
        .collect()
}

/// Compute the emission order for every type in the model
pub fn emission_order(model: &SchemaModel) -> EmissionOrder {
    let ids: Vec<TypeId> = model.ids().collect();

    let mut in_degree: Vec<usize> = Vec::with_capacity(ids.len());
    let mut dependents: HashMap<TypeId, Vec<usize>> = HashMap::new();

    for (pos, entry) in model.entries().iter().enumerate() {
        let deps = dependencies(model, &entry.ty);
        in_degree.push(deps.len());
        for dep in deps {
            dependents.entry(dep).or_default().push(pos);
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(pos, _)| pos)
        .collect();
    let mut emitted = vec![false; ids.len()];
    let mut order = Vec::with_capacity(ids.len());

    while let Some(pos) = queue.pop_front() {
        emitted[pos] = true;
        order.push(ids[pos]);

        if let Some(waiting) = dependents.get(&ids[pos]) {
            for &dependent in waiting {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }
    }

    let cycle_broken: Vec<TypeId> = ids
        .iter()
        .zip(&emitted)
        .filter(|&(_, &done)| !done)
        .map(|(&id, _)| id)
        .collect();
    order.extend(&cycle_broken);

    EmissionOrder {
        ids: order,
        cycle_broken,
    }
}
