//! Import header for generated code.
//!
//! Generated definitions and stubs build on the `@polkadot/types` codec classes.
//! The header is optional (see `GeneratorConfig::prelude`); callers that splice
//! the output into an existing module usually provide their own imports.

/// Codec classes and primitive kinds referenced by generated code.
const CODEC_IMPORTS: &[&str] = &[
    "Text", "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128", "bool", "Null",
    "Enum", "Result", "Vec", "Tuple", "Option", "Struct", "Bytes", "U8aFixed", "VecFixed",
];

/// Type-only imports referenced by generated code.
const TYPE_IMPORTS: &[&str] = &["Registry", "U8aBitLength"];

/// Globals the function stubs use, imported or expected in scope.
const STUB_GLOBALS: &[&str] = &[
    "api", "registry", "u8aToHex", "Buffer", "Error", "Promise", "Uint8Array",
];

/// Identifiers the generated code imports from the codec runtime
pub fn required_imports() -> &'static [&'static str] {
    CODEC_IMPORTS
}

/// Whether a generated type name would shadow an identifier the generated code uses
pub fn is_runtime_identifier(name: &str) -> bool {
    CODEC_IMPORTS.contains(&name) || TYPE_IMPORTS.contains(&name) || STUB_GLOBALS.contains(&name)
}

/// Render the import header
pub fn header() -> String {
    let mut out = String::new();

    out.push_str("import type { Registry } from '@polkadot/types/types';\n");
    out.push_str("import type { U8aBitLength } from '@polkadot/types-codec/types';\n");
    out.push_str("import {\n");
    for name in CODEC_IMPORTS {
        out.push_str(&format!("  {},\n", name));
    }
    out.push_str("} from '@polkadot/types';\n");
    out.push_str("import { u8aToHex } from '@polkadot/util';\n");

    out
}
