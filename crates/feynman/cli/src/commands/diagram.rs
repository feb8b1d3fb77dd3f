//! `feynman diagram`: TikZ-Feynman source for a classified reaction

use std::path::Path;

use feynman_classifier::Classifier;
use feynman_diagram::{write_tex, DiagramRenderer, TexCompiler, TexOutput};
use feynman_types::ParticleTable;
use tracing::info;

use crate::error::CliResult;
use crate::output::{print_document, print_field, print_success, print_warning, OutputFormat};

/// Where and how to write the diagram.
pub struct DiagramTarget<'a> {
    pub out_dir: &'a Path,
    pub name: &'a str,
    /// TeX engine to run over the source, if any
    pub engine: Option<&'a str>,
}

pub fn execute(
    words: &[String],
    table: &ParticleTable,
    classifier: &Classifier,
    target: &DiagramTarget<'_>,
    format: OutputFormat,
) -> CliResult<()> {
    let reaction = super::read_reaction(words, table)?;
    let report = classifier.classify(&reaction, table)?;
    let source = DiagramRenderer::default().render(&report, table)?;

    let tex = write_tex(target.out_dir, target.name, &source)?;
    info!(reaction = %reaction, path = %tex.display(), "Diagram written");

    let pdf = match target.engine {
        Some(engine) => Some(TexCompiler::new(engine).compile(&tex)?),
        None => None,
    };
    let written = TexOutput { tex, pdf };

    match format {
        OutputFormat::Table => {
            if !report.is_allowed() {
                print_warning("Reaction is forbidden; drawing the pairs found anyway");
            }
            print_success(&format!("Wrote {}", written.tex.display()));
            if let Some(pdf) = &written.pdf {
                print_field("PDF", pdf.display());
            }
        }
        _ => print_document(&written, format)?,
    }
    Ok(())
}
