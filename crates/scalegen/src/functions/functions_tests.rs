#![allow(non_snake_case)]

use super::*;
use crate::naming::NameResolver;
use scalegen_core::{Field, PortableType, SchemaModel, TypeDef, TypeEntry, TypeInfoData};
use test_case::test_case;

/// Registry used by the stub tests: 0 = (), 1 = u64, 2 = Text, 3 = Member
fn names() -> ResolvedNames {
    let model = SchemaModel::new(&TypeInfoData {
        functions: vec![],
        types: vec![
            TypeEntry::new(0, PortableType::new(TypeDef::tuple(vec![]))),
            TypeEntry::new(1, PortableType::new(TypeDef::primitive("u64"))),
            TypeEntry::new(2, PortableType::new(TypeDef::primitive("str"))),
            TypeEntry::new(
                3,
                PortableType::new(TypeDef::composite(vec![Field::named("id", 1)]))
                    .with_path(["pkg", "Member"]),
            ),
        ],
    });
    NameResolver::new(&model).resolve()
}

/// Labels every argument `p<position>`
struct PositionNamer;

impl ArgNamer for PositionNamer {
    fn label(&self, _function_name: &str, position: usize, _count: usize) -> String {
        format!("p{position}")
    }
}

// HeuristicArgNamer tests

#[test_case("get_account_info", "account_id")]
#[test_case("join_community", "community_id")]
#[test_case("ban_user", "user")]
#[test_case("rotate_key", "key")]
#[test_case("change_mode", "args")]
#[test_case("set_alias", "args")]
#[test_case("open_thread", "args")]
#[test_case("add_comment", "args")]
#[test_case("invite", "args")]
#[test_case("create_post", "args")]
#[test_case("activate", "arg")]
#[test_case("pay", "arg")]
#[test_case("reset", "args")]
#[test_case("generate_report", "args")]
#[test_case("get_balance", "id")]
#[test_case("hello", "arg")]
fn HeuristicArgNamer___single_param___uses_name_hints(function: &str, expected: &str) {
    assert_eq!(HeuristicArgNamer.label(function, 0, 1), expected);
}

#[test]
fn HeuristicArgNamer___earlier_hints___take_precedence() {
    // "account" is checked before "get"
    assert_eq!(HeuristicArgNamer.label("get_account", 0, 1), "account_id");
}

#[test_case(0, "id")]
#[test_case(1, "arg")]
#[test_case(6, "account_id")]
#[test_case(13, "tx")]
#[test_case(14, "id2")]
#[test_case(29, "arg3")]
fn HeuristicArgNamer___several_params___cycle_positional_labels(position: usize, expected: &str) {
    assert_eq!(HeuristicArgNamer.label("get_account", position, 30), expected);
}

#[test]
fn HeuristicArgNamer___several_params___labels_are_distinct() {
    let labels: Vec<String> = (0..40)
        .map(|p| HeuristicArgNamer.label("anything", p, 40))
        .collect();
    let unique: std::collections::HashSet<_> = labels.iter().collect();

    assert_eq!(unique.len(), labels.len());
}

// FunctionEmitter tests

#[test]
fn emit___zero_params___sends_empty_marker_without_encoding() {
    let names = names();
    let config = GeneratorConfig::default();
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("get", "ping", vec![], 2));

    let expected = "\
export async function ping(nucleusId: string): Promise<Text> {
  if (!api) throw new Error('API not initialized');
  const response = await api.rpc('nucleus_get', nucleusId, 'ping', u8aToHex(new Uint8Array([0])));

  const responseBytes = Buffer.from(response as string, \"hex\");
  return new Text(registry, responseBytes);
}";
    assert_eq!(out, expected);
}

#[test]
fn emit___one_param___encodes_single_value() {
    let names = names();
    let config = GeneratorConfig::default();
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("post", "hello", vec![3], 0));

    let expected = "\
export async function hello(nucleusId: string, argArg: any): Promise<Null> {
  if (!api) throw new Error('API not initialized');
  const arg = new Member(registry, argArg);
  const response = await api.rpc('nucleus_post', nucleusId, 'hello', u8aToHex(arg.toU8a()));

  const responseBytes = Buffer.from(response as string, \"hex\");
  return new Null(registry, responseBytes);
}";
    assert_eq!(out, expected);
}

#[test]
fn emit___two_params___packs_tuple_in_declared_order() {
    let names = names();
    let config = GeneratorConfig::default();
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("post", "transfer", vec![2, 1], 0));

    assert!(out.contains("(nucleusId: string, idArg: any, argArg: any)"));
    assert!(out.contains("  const args = new Tuple(registry, [Text, u64], [idArg, argArg]);\n"));
    assert!(out.contains(", u8aToHex(args.toU8a()));\n"));
}

#[test]
fn emit___missing_types___use_placeholders() {
    let names = names();
    let config = GeneratorConfig::default();
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("get", "lookup", vec![40], 41));

    assert!(out.contains("const arg = new Type40(registry, argArg);"));
    assert!(out.contains("Promise<Type41>"));
    assert!(out.contains("return new Type41(registry, responseBytes);"));
}

#[test]
fn emit___configured_namespace_and_target___are_used() {
    let names = names();
    let config = GeneratorConfig::default().with_rpc_namespace("app");
    let config = GeneratorConfig {
        target_param: "appId".to_string(),
        ..config
    };
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("get", "ping", vec![], 1));

    assert!(out.starts_with("export async function ping(appId: string): Promise<u64> {"));
    assert!(out.contains("api.rpc('app_get', appId, 'ping', "));
}

#[test]
fn emit___custom_namer___changes_labels_only() {
    let names = names();
    let config = GeneratorConfig::default();
    let function = FunctionInfo::new("post", "transfer", vec![2, 1], 0);

    let default = FunctionEmitter::new(&names, &config).emit(&function);
    let custom = FunctionEmitter::new(&names, &config)
        .with_namer(PositionNamer)
        .emit(&function);

    assert!(custom.contains("p0Arg: any, p1Arg: any"));
    assert!(custom.contains("new Tuple(registry, [Text, u64], [p0Arg, p1Arg])"));
    assert_eq!(
        default.replace("idArg", "p0Arg").replace("argArg", "p1Arg"),
        custom
    );
}

#[test]
fn emit___quote_in_name___is_escaped_in_literal() {
    let names = names();
    let config = GeneratorConfig::default();
    let emitter = FunctionEmitter::new(&names, &config);

    let out = emitter.emit(&FunctionInfo::new("get", "it's", vec![], 1));

    assert!(out.contains("nucleusId, 'it\\'s', "));
}
