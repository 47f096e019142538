use crate::areas::scratch::ScratchFile;
use crate::areas::session::Session;
use crate::artifacts::core::GlbError;
use crate::artifacts::diff::diff_tool::DiffTool;
use crate::artifacts::diff::highlight::HighlightWriter;
use crate::artifacts::glb::RenderOptions;
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};

/// git passes this for the missing side of an added or deleted file
const NULL_PATH: &str = "/dev/null";

/// One input of a diff and the name shown for it in the diff header
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffSide {
    pub(crate) path: PathBuf,
    pub(crate) label: String,
}

impl DiffSide {
    pub fn from_path(path: &str) -> Self {
        DiffSide {
            path: PathBuf::from(path),
            label: path.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.path == Path::new(NULL_PATH)
    }
}

#[derive(Debug, Clone, Default, new)]
pub struct DiffOptions {
    pub render: RenderOptions,
    pub tool: DiffTool,
}

impl Session {
    /// Diffs the renderings of two containers and returns the diff utility's exit code
    pub fn diff(&self, old: &DiffSide, new: &DiffSide, options: &DiffOptions) -> anyhow::Result<i32> {
        // both sides are extracted before the diff utility runs, so a broken
        // file never leaves a half-written diff on stdout
        let old_text = self.render_side(old, &options.render)?;
        let new_text = self.render_side(new, &options.render)?;

        let old_file = ScratchFile::create(&old.label, &old_text)?;
        let new_file = ScratchFile::create(&new.label, &new_text)?;

        let mut writer = self.writer();
        let code = if self.color() {
            let mut highlighted = HighlightWriter::new(&mut **writer);
            let code = options.tool.run(&old_file, &new_file, &mut highlighted)?;
            highlighted.flush()?;
            code
        } else {
            options.tool.run(&old_file, &new_file, &mut **writer)?
        };
        writer.flush()?;

        Ok(code)
    }

    fn render_side(&self, side: &DiffSide, options: &RenderOptions) -> Result<String, GlbError> {
        if side.is_null() {
            return Ok(String::new());
        }

        self.render(&side.path, options)
    }
}
