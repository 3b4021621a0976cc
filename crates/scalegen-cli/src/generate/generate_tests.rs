#![allow(non_snake_case)]

use super::*;

const SCHEMA: &str = r#"{
  "functions": [{"method": "get", "name": "ping", "param_types": [], "return_type": 1}],
  "types": [
    {"id": 0, "type": {"def": {"primitive": "u32"}}},
    {"id": 1, "type": {"def": {"sequence": {"type": 0}}}}
  ]
}"#;

// resolve_config tests

#[test]
fn resolve_config___no_file_no_flags___is_default() {
    let config = resolve_config(&GenerateArgs::default()).unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn resolve_config___file___is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scalegen.toml");
    std::fs::write(&path, "prelude = true\nrpc_namespace = \"vault\"\nlog_level = \"warn\"\n").unwrap();

    let config = resolve_config(&GenerateArgs {
        config: Some(path),
        ..Default::default()
    })
    .unwrap();

    assert!(config.prelude);
    assert_eq!(config.rpc_namespace, "vault");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn resolve_config___flags___override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scalegen.toml");
    std::fs::write(&path, "debug = false\nrpc_namespace = \"vault\"\n").unwrap();

    let config = resolve_config(&GenerateArgs {
        config: Some(path),
        debug: true,
        namespace: Some("app".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert!(config.debug);
    assert_eq!(config.rpc_namespace, "app");
}

#[test]
fn resolve_config___invalid_file___is_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scalegen.toml");
    std::fs::write(&path, "prelude = \"sometimes\"\n").unwrap();

    let err = resolve_config(&GenerateArgs {
        config: Some(path),
        ..Default::default()
    })
    .unwrap_err();

    let inner = err.downcast_ref::<scalegen_core::ScalegenError>().unwrap();
    assert_eq!(inner.error_code(), 3);
}

// run tests

#[test]
fn run___file_to_file___writes_generated_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    let output = dir.path().join("api.ts");
    std::fs::write(&input, SCHEMA).unwrap();

    run(GenerateArgs {
        input: Some(input),
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.starts_with("export const Vecu32 = Vec.with(u32);\n\n"));
    assert!(code.contains("export async function ping(nucleusId: string): Promise<Vecu32> {"));
}

#[test]
fn run___prelude_flag___prepends_imports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    let output = dir.path().join("api.ts");
    std::fs::write(&input, SCHEMA).unwrap();

    run(GenerateArgs {
        input: Some(input),
        output: Some(output.clone()),
        prelude: true,
        ..Default::default()
    })
    .unwrap();

    let code = std::fs::read_to_string(&output).unwrap();
    assert!(code.starts_with("import type { Registry }"));
}

#[test]
fn run___malformed_schema___fails_with_schema_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("schema.json");
    std::fs::write(&input, "not json").unwrap();

    let err = run(GenerateArgs {
        input: Some(input),
        output: Some(dir.path().join("api.ts")),
        ..Default::default()
    })
    .unwrap_err();

    assert_eq!(crate::exit_code(&err), 2);
}
