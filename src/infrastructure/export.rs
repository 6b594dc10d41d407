use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::pdf::{render_pdf, ExportedDocument};
use crate::domain::ExportError;

/// Renders letters to PDF and writes them into an output directory.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes the letter to `<output_dir>/<name> - cover letter.pdf` and
    /// returns the written path.
    pub fn export(&self, letter: &str, name: &str) -> Result<PathBuf, ExportError> {
        let document = render_pdf(letter, name)?;
        self.save(&document)
    }

    pub fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)?;
        // never more than one component below output_dir
        let filename = Path::new(&document.filename)
            .file_name()
            .ok_or_else(|| ExportError::Pdf(format!("invalid file name: {}", document.filename)))?;
        let path = self.output_dir.join(filename);
        fs::write(&path, &document.bytes)?;
        info!(path = %path.display(), bytes = document.bytes.len(), "saved pdf");
        Ok(path)
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(".")
    }
}
