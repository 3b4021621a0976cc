#![allow(non_snake_case)]

use super::*;
use crate::schema::{Field, PortableType};

fn entry(id: TypeId, def: TypeDef) -> TypeEntry {
    TypeEntry::new(id, PortableType::new(def))
}

fn sample() -> TypeInfoData {
    TypeInfoData {
        functions: vec![FunctionInfo::new("get", "get_value", vec![], 5)],
        types: vec![
            entry(9, TypeDef::composite(vec![Field::named("x", 5)])),
            entry(5, TypeDef::primitive("bool")),
            entry(2, TypeDef::sequence(5)),
        ],
    }
}

#[test]
fn SchemaModel___new___keeps_input_order() {
    let model = SchemaModel::new(&sample());

    let ids: Vec<TypeId> = model.ids().collect();

    assert_eq!(ids, vec![9, 5, 2]);
}

#[test]
fn SchemaModel___new___copies_functions() {
    let model = SchemaModel::new(&sample());

    assert_eq!(model.functions().len(), 1);
    assert_eq!(model.functions()[0].name, "get_value");
}

#[test]
fn SchemaModel___get___returns_definition() {
    let model = SchemaModel::new(&sample());

    assert_eq!(model.get(2).map(|t| &t.def), Some(&TypeDef::sequence(5)));
    assert!(model.get(42).is_none());
}

#[test]
fn SchemaModel___duplicate_id___later_definition_wins_at_first_position() {
    let mut data = sample();
    data.types.push(entry(9, TypeDef::primitive("u32")));

    let model = SchemaModel::new(&data);

    let ids: Vec<TypeId> = model.ids().collect();
    assert_eq!(ids, vec![9, 5, 2]);
    assert_eq!(model.get(9).map(|t| &t.def), Some(&TypeDef::primitive("u32")));
    assert_eq!(model.duplicate_ids(), &[9]);
}

#[test]
fn SchemaModel___is_primitive___distinguishes_kinds() {
    let model = SchemaModel::new(&sample());

    assert!(model.is_primitive(5));
    assert!(!model.is_primitive(9));
    assert!(!model.is_primitive(404));
}

#[test]
fn SchemaModel___needs_definition___false_for_primitives_and_missing() {
    let model = SchemaModel::new(&sample());

    assert!(model.needs_definition(9));
    assert!(model.needs_definition(2));
    assert!(!model.needs_definition(5));
    assert!(!model.needs_definition(404));
}

#[test]
fn SchemaModel___empty_input___is_empty() {
    let model = SchemaModel::new(&TypeInfoData::default());

    assert!(model.is_empty());
    assert_eq!(model.len(), 0);
}
