use crate::artifacts::core::GlbError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A rendered document on disk, removed when dropped
///
/// Both scratch files of a diff live on the stack of the command running it, so
/// they are deleted on every return path, including errors from the diff itself.
#[derive(Debug)]
pub struct ScratchFile {
    label: String,
    file: NamedTempFile,
}

impl ScratchFile {
    pub fn create(label: &str, contents: &str) -> Result<Self, GlbError> {
        let to_error = |source| GlbError::Scratch {
            label: label.to_string(),
            source,
        };

        let mut file = tempfile::Builder::new()
            .prefix("glbdiff-")
            .suffix(".json")
            .tempfile()
            .map_err(to_error)?;
        file.write_all(contents.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)?;

        Ok(ScratchFile {
            label: label.to_string(),
            file,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
