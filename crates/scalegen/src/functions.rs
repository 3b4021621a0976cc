//! Function Emitter: one callable stub per function signature.
//!
//! A stub encodes its arguments with the resolved parameter types, calls
//! `api.rpc("<namespace>_<method>", target, "<name>", payload)` and decodes
//! the hex response as the resolved return type. The parameter count picks
//! the encoding:
//!
//! - none: no local encoding; the payload is the one-byte empty marker `0x00`
//! - one: a single value built from the parameter type
//! - several: a `Tuple` over every parameter, in declared order
//!
//! Argument labels only affect readability. They come from an [`ArgNamer`],
//! which can be swapped without touching the encoding.

use crate::naming::ResolvedNames;
use scalegen_core::{FunctionInfo, GeneratorConfig};

/// Chooses the label of a stub argument.
///
/// Implementations must be pure: the same inputs always yield the same label.
pub trait ArgNamer {
    /// Label for the parameter at `position` of a function with `count` parameters
    fn label(&self, function_name: &str, position: usize, count: usize) -> String;
}

/// Labels cycled through by position when a function has several parameters
const POSITIONAL_LABELS: &[&str] = &[
    "id",
    "arg",
    "args",
    "param",
    "data",
    "value",
    "account_id",
    "community_id",
    "user",
    "limit",
    "gt",
    "account_ids",
    "community",
    "tx",
];

/// Substring → label table for single-parameter functions, checked in order
const NAME_HINTS: &[(&str, &str)] = &[
    ("account", "account_id"),
    ("community", "community_id"),
    ("user", "user"),
    ("key", "key"),
    ("mode", "args"),
    ("alias", "args"),
    ("thread", "args"),
    ("comment", "args"),
    ("invite", "args"),
    ("create", "args"),
    ("activate", "arg"),
    ("pay", "arg"),
    ("set", "args"),
    ("post", "args"),
    ("generate", "args"),
    ("get", "id"),
];

const DEFAULT_LABEL: &str = "arg";

/// Default labels: hints from the function name for a single parameter,
/// positional labels otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicArgNamer;

impl ArgNamer for HeuristicArgNamer {
    fn label(&self, function_name: &str, position: usize, count: usize) -> String {
        if count == 1 {
            return NAME_HINTS
                .iter()
                .find(|(hint, _)| function_name.contains(hint))
                .map_or(DEFAULT_LABEL, |&(_, label)| label)
                .to_string();
        }

        let base = POSITIONAL_LABELS[position % POSITIONAL_LABELS.len()];
        match position / POSITIONAL_LABELS.len() {
            0 => base.to_string(),
            lap => format!("{base}{}", lap + 1),
        }
    }
}

/// Renders function stubs using a resolved name map
pub struct FunctionEmitter<'a, N: ArgNamer = HeuristicArgNamer> {
    names: &'a ResolvedNames,
    namer: N,
    rpc_namespace: &'a str,
    target_param: &'a str,
    debug: bool,
}

impl<'a> FunctionEmitter<'a, HeuristicArgNamer> {
    pub fn new(names: &'a ResolvedNames, config: &'a GeneratorConfig) -> Self {
        Self {
            names,
            namer: HeuristicArgNamer,
            rpc_namespace: &config.rpc_namespace,
            target_param: &config.target_param,
            debug: config.debug,
        }
    }
}

impl<'a, N: ArgNamer> FunctionEmitter<'a, N> {
    /// Replace the argument label strategy
    pub fn with_namer<M: ArgNamer>(self, namer: M) -> FunctionEmitter<'a, M> {
        FunctionEmitter {
            names: self.names,
            namer,
            rpc_namespace: self.rpc_namespace,
            target_param: self.target_param,
            debug: self.debug,
        }
    }

    /// Render the stub for one function signature
    pub fn emit(&self, function: &FunctionInfo) -> String {
        let count = function.param_types.len();
        let labels: Vec<String> = (0..count)
            .map(|position| self.namer.label(&function.name, position, count))
            .collect();
        let return_type = self.names.name_of(function.return_type);

        if self.debug {
            tracing::debug!(
                function = %function.name,
                method = %function.method,
                params = count,
                return_type = %return_type,
                "emitting function"
            );
        }

        let params: String = labels.iter().map(|l| format!(", {l}Arg: any")).collect();

        let mut code = format!(
            "export async function {}({}: string{}): Promise<{}> {{\n",
            function.name, self.target_param, params, return_type
        );
        code.push_str("  if (!api) throw new Error('API not initialized');\n");

        let payload = match (function.param_types.as_slice(), labels.as_slice()) {
            ([], _) => "u8aToHex(new Uint8Array([0]))".to_string(),
            ([param], [label]) => {
                code.push_str(&format!(
                    "  const {label} = new {}(registry, {label}Arg);\n",
                    self.names.name_of(*param)
                ));
                format!("u8aToHex({label}.toU8a())")
            }
            (param_types, labels) => {
                let types: Vec<_> = param_types.iter().map(|&t| self.names.name_of(t)).collect();
                let args: Vec<String> = labels.iter().map(|l| format!("{l}Arg")).collect();
                code.push_str(&format!(
                    "  const args = new Tuple(registry, [{}], [{}]);\n",
                    types.join(", "),
                    args.join(", ")
                ));
                "u8aToHex(args.toU8a())".to_string()
            }
        };

        code.push_str(&format!(
            "  const response = await api.rpc({}, {}, {}, {});\n",
            string_literal(&format!("{}_{}", self.rpc_namespace, function.method)),
            self.target_param,
            string_literal(&function.name),
            payload
        ));
        code.push('\n');
        code.push_str("  const responseBytes = Buffer.from(response as string, \"hex\");\n");
        code.push_str(&format!("  return new {return_type}(registry, responseBytes);\n"));
        code.push('}');

        code
    }
}

/// Single-quoted string literal
fn string_literal(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

#[cfg(test)]
#[path = "functions/functions_tests.rs"]
mod functions_tests;
