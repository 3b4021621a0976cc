//! Property-based tests for the generation pipeline
//!
//! Registries are generated with arbitrary shapes, shared path names, missing
//! references and cycles. The pipeline must stay total and deterministic.

use proptest::prelude::*;
use scalegen::naming::NameResolver;
use scalegen::order::{dependencies, emission_order};
use scalegen::shape::Shape;
use scalegen::{generate, validate};
use scalegen_core::{
    Field, PortableType, SchemaModel, TypeDef, TypeEntry, TypeId, TypeInfoData, TypeParam,
    Variant,
};
use std::collections::{HashMap, HashSet};

const MAX_TYPES: u32 = 12;

// Strategy: ids mostly inside the registry, sometimes past its end
fn arb_ref() -> impl Strategy<Value = TypeId> {
    0..MAX_TYPES + 3
}

fn arb_field() -> impl Strategy<Value = Field> {
    (arb_ref(), prop::option::of("[a-z]{1,6}")).prop_map(|(ty, name)| match name {
        Some(name) => Field::named(name, ty),
        None => Field::unnamed(ty),
    })
}

fn arb_def() -> impl Strategy<Value = TypeDef> {
    prop_oneof![
        prop::sample::select(vec!["u8", "u32", "u64", "bool", "str"])
            .prop_map(|kind: &str| TypeDef::primitive(kind)),
        prop::collection::vec(arb_field(), 0..4).prop_map(TypeDef::composite),
        prop::collection::vec(
            ("[A-Z][a-z]{0,4}", prop::collection::vec(arb_field(), 0..3)),
            0..4
        )
        .prop_map(|variants| TypeDef::variant(
            variants
                .into_iter()
                .enumerate()
                .map(|(i, (name, fields))| Variant::new(name, i as u8, fields))
                .collect()
        )),
        arb_ref().prop_map(|ty| TypeDef::variant(vec![
            Variant::unit("None", 0),
            Variant::new("Some", 1, vec![Field::unnamed(ty)]),
        ])),
        (arb_ref(), arb_ref()).prop_map(|(ok, err)| TypeDef::variant(vec![
            Variant::new("Ok", 0, vec![Field::unnamed(ok)]),
            Variant::new("Err", 1, vec![Field::unnamed(err)]),
        ])),
        arb_ref().prop_map(TypeDef::sequence),
        (1u32..65, arb_ref()).prop_map(|(len, ty)| TypeDef::array(len, ty)),
        prop::collection::vec(arb_ref(), 0..4).prop_map(TypeDef::tuple),
    ]
}

// Strategy: small pool of path names so collisions are common
fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::option::of(prop::sample::select(vec!["Foo", "Bar", "Struct", "Null", "u8"])).prop_map(
        |name| match name {
            Some(name) => vec!["pkg".to_string(), name.to_string()],
            None => vec![],
        },
    )
}

fn arb_registry() -> impl Strategy<Value = TypeInfoData> {
    prop::collection::vec(
        (arb_def(), arb_path(), prop::option::of(arb_ref())),
        1..MAX_TYPES as usize,
    )
    .prop_map(|defs| TypeInfoData {
        functions: vec![],
        types: defs
            .into_iter()
            .enumerate()
            .map(|(id, (def, path, param))| {
                let mut ty = PortableType::new(def).with_path(path);
                if let Some(param) = param {
                    ty = ty.with_params([TypeParam::new("T", param)]);
                }
                TypeEntry::new(id as TypeId, ty)
            })
            .collect(),
    })
}

proptest! {
    /// Property: two runs over the same input produce identical text
    #[test]
    fn proptest_generation_is_deterministic(data in arb_registry()) {
        prop_assert_eq!(generate(&data, false), generate(&data, false));
        prop_assert_eq!(validate(&data), validate(&data));
    }

    /// Property: every id gets exactly one name and non-primitive names are unique
    #[test]
    fn proptest_names_are_total_and_unique(data in arb_registry()) {
        let model = SchemaModel::new(&data);
        let names = NameResolver::new(&model).resolve();

        prop_assert_eq!(names.len(), model.len());

        let mut owners: HashMap<&str, TypeId> = HashMap::new();
        for id in model.ids() {
            let name = names.get(id);
            prop_assert!(name.is_some());
            if model.is_primitive(id) {
                continue;
            }
            if let Some(name) = name {
                if let Some(previous) = owners.insert(name, id) {
                    prop_assert!(false, "ids {} and {} share name {}", previous, id, name);
                }
            }
        }
        prop_assert!(validate(&data).name_collisions.is_empty());
    }

    /// Property: emission order is a permutation with dependencies first
    #[test]
    fn proptest_dependencies_precede_dependents(data in arb_registry()) {
        let model = SchemaModel::new(&data);
        let order = emission_order(&model);

        let mut sorted = order.ids.clone();
        sorted.sort_unstable();
        let mut expected: Vec<TypeId> = model.ids().collect();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);

        let position: HashMap<TypeId, usize> =
            order.ids.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();
        let broken: HashSet<TypeId> = order.cycle_broken.iter().copied().collect();

        for entry in model.entries() {
            if broken.contains(&entry.id) {
                continue;
            }
            for dep in dependencies(&model, &entry.ty) {
                prop_assert!(position[&dep] < position[&entry.id]);
            }
        }
    }

    /// Property: params and fields agree on the wrapped type of a consistent optional
    #[test]
    fn proptest_wrapper_classification_is_source_independent(inner in arb_ref()) {
        let by_fields = PortableType::new(TypeDef::variant(vec![
            Variant::new("Some", 1, vec![Field::unnamed(inner)]),
            Variant::unit("None", 0),
        ]));
        let by_params = by_fields.clone().with_params([TypeParam::new("T", inner)]);

        let (Shape::Optional(a), Shape::Optional(b)) = (Shape::of(&by_fields), Shape::of(&by_params)) else {
            return Err(TestCaseError::fail("not classified as optional"));
        };
        prop_assert_eq!(a.inner, b.inner);
    }

    /// Property: generation never panics and ends every block with a blank line
    #[test]
    fn proptest_output_blocks_are_separated(data in arb_registry()) {
        let out = generate(&data, true);

        prop_assert!(out.is_empty() || out.ends_with("\n\n"));
    }
}
