//! Orchestrator: schema in, generated text out.

use crate::functions::FunctionEmitter;
use crate::naming::NameResolver;
use crate::order::emission_order;
use crate::prelude;
use crate::types::{EmittedNames, TypeEmitter};
use crate::validate::ValidationReport;
use scalegen_core::{GeneratorConfig, SchemaModel, TypeInfoData};

/// Separator written after every emitted block
const BLOCK_SEPARATOR: &str = "\n\n";

/// Runs the generation pipeline with a fixed configuration.
///
/// Each call builds its own model, name map, emission order and emitted-name
/// accumulator, so one generator can serve any number of independent runs.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    config: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate type definitions followed by function stubs.
    ///
    /// Types come in dependency order, functions in input order, every block
    /// followed by a blank line. With `prelude` enabled the import header comes
    /// first.
    pub fn generate(&self, data: &TypeInfoData) -> String {
        let debug = self.config.debug;
        let span = tracing::debug_span!(
            "generate",
            types = data.types.len(),
            functions = data.functions.len()
        );
        let _guard = span.enter();

        let model = SchemaModel::new(data);
        let names = NameResolver::new(&model).with_debug(debug).resolve();
        let order = emission_order(&model);

        if debug {
            tracing::debug!(
                names = names.len(),
                disambiguated = names.disambiguated_ids().len(),
                placeholders = names.placeholder_ids().len(),
                cycle_broken = order.cycle_broken.len(),
                "resolved names and emission order"
            );
        }

        let mut out = String::new();
        if self.config.prelude {
            out.push_str(&prelude::header());
            out.push('\n');
        }

        let type_emitter = TypeEmitter::new(&model, &names).with_debug(debug);
        let mut emitted = EmittedNames::new();
        for &id in &order.ids {
            let Some(ty) = model.get(id) else {
                continue;
            };
            if let Some(block) = type_emitter.emit(id, ty, &mut emitted) {
                out.push_str(&block);
                out.push_str(BLOCK_SEPARATOR);
            }
        }

        let function_emitter = FunctionEmitter::new(&names, &self.config);
        for function in model.functions() {
            out.push_str(&function_emitter.emit(function));
            out.push_str(BLOCK_SEPARATOR);
        }

        if debug {
            tracing::debug!(
                emitted_names = emitted.len(),
                function_blocks = model.functions().len(),
                bytes = out.len(),
                "generation finished"
            );
        }

        out
    }

    /// Re-derive the consistency facts of a schema without emitting code
    pub fn validate(&self, data: &TypeInfoData) -> ValidationReport {
        let _guard = tracing::debug_span!("validate").entered();

        let model = SchemaModel::new(data);
        let names = NameResolver::new(&model)
            .with_debug(self.config.debug)
            .resolve();
        let order = emission_order(&model);

        ValidationReport::build(&model, &names, &order)
    }
}

/// Generate code for `data` with default settings and the given debug flag
pub fn generate(data: &TypeInfoData, debug: bool) -> String {
    CodeGenerator::new(GeneratorConfig::default().with_debug(debug)).generate(data)
}

/// Validate `data` with default settings
pub fn validate(data: &TypeInfoData) -> ValidationReport {
    CodeGenerator::default().validate(data)
}
