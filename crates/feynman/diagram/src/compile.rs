//! Writing `.tex` files and running a TeX engine over them.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{DiagramError, DiagramResult};

/// Auxiliary files a TeX run leaves next to the PDF.
pub const AUX_EXTENSIONS: [&str; 7] = ["aux", "log", "out", "fls", "fdb_latexmk", "toc", "gz"];

/// Files produced for one diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TexOutput {
    pub tex: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<PathBuf>,
}

/// Write `source` to `<dir>/<stem>.tex`, creating `dir` if needed.
pub fn write_tex(dir: &Path, stem: &str, source: &str) -> DiagramResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.tex", stem));
    fs::write(&path, source)?;
    debug!(path = %path.display(), bytes = source.len(), "TeX source written");
    Ok(path)
}

/// Remove `<dir>/<stem>.<ext>` for every auxiliary extension. Returns how many existed.
pub fn clean_aux_files(dir: &Path, stem: &str) -> DiagramResult<usize> {
    let mut removed = 0;
    for ext in AUX_EXTENSIONS {
        let path = dir.join(format!("{}.{}", stem, ext));
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(removed)
}

/// Runs a TeX engine (`lualatex` by default) in the source's directory.
#[derive(Clone, Debug)]
pub struct TexCompiler {
    engine: String,
}

impl Default for TexCompiler {
    fn default() -> Self {
        Self::new("lualatex")
    }
}

impl TexCompiler {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Compile `tex_path` to a PDF next to it.
    ///
    /// Auxiliary files are removed whether or not the engine succeeds.
    pub fn compile(&self, tex_path: &Path) -> DiagramResult<PathBuf> {
        let (Some(file_name), Some(stem)) = (
            tex_path.file_name().and_then(|n| n.to_str()),
            tex_path.file_stem().and_then(|s| s.to_str()),
        ) else {
            return Err(DiagramError::InvalidPath(tex_path.to_path_buf()));
        };
        let dir = match tex_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        info!(engine = %self.engine, file = file_name, "Compiling diagram");
        let status = Command::new(&self.engine)
            .arg("-interaction=nonstopmode")
            .arg(file_name)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        let removed = clean_aux_files(dir, stem)?;
        debug!(removed, "Auxiliary files cleaned");

        let status = match status {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DiagramError::EngineNotFound(self.engine.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        if !status.success() {
            warn!(engine = %self.engine, %status, "TeX engine failed");
            return Err(DiagramError::CompileFailed {
                engine: self.engine.clone(),
                status: status.to_string(),
            });
        }

        Ok(dir.join(format!("{}.pdf", stem)))
    }
}
