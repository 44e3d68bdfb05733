//! Batch driver
//!
//! Generates one file per selected class, sequentially. A failure aborts
//! only the class at hand; files already written are left in place.

use std::path::PathBuf;

use entigen_core::{ClassDescriptor, ClassOutcome, Config, GenerationReport, ModelReader};

use crate::emitter::ClassEmitter;
use crate::error::GenerateError;
use crate::output::{HeaderProvider, OutputSink};

/// Runs generation over a selection of classes
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generate `selection` (every class when empty) and report per-class outcomes
    pub fn run(
        &self,
        reader: &(impl ModelReader + ?Sized),
        selection: &[String],
        header: &(impl HeaderProvider + ?Sized),
        sink: &mut (impl OutputSink + ?Sized),
    ) -> GenerationReport {
        let mut report = GenerationReport::new();

        let names: Vec<String> = if selection.is_empty() {
            reader.classes().iter().map(|c| c.name.clone()).collect()
        } else {
            selection.to_vec()
        };

        for name in names {
            let result = match reader.class(&name) {
                Some(class) => self.generate_class(reader, class, header, &mut *sink),
                None => Err(GenerateError::ClassNotFound(name.clone())),
            };

            let outcome = match result {
                Ok(path) => {
                    tracing::info!(class = %name, path = %path.display(), "generated");
                    ClassOutcome::Generated { class: name, path }
                }
                Err(e) => {
                    tracing::warn!(class = %name, error = %e, "generation failed");
                    ClassOutcome::Failed {
                        class: name,
                        message: e.to_string(),
                    }
                }
            };
            report.add_outcome(outcome);
        }

        report
    }

    /// Emit and write a single class
    pub fn generate_class(
        &self,
        reader: &(impl ModelReader + ?Sized),
        class: &ClassDescriptor,
        header: &(impl HeaderProvider + ?Sized),
        sink: &mut (impl OutputSink + ?Sized),
    ) -> Result<PathBuf, GenerateError> {
        let header = header.header()?;
        let text = ClassEmitter::new(self.config).emit(reader, class, &header)?;
        let file_name = format!("{}.java", class.name);

        sink.write(&class.package, &file_name, &text)
            .map_err(|source| GenerateError::Io {
                class: class.name.clone(),
                source,
            })
    }
}
