use crate::areas::session::Session;
use crate::artifacts::core::GlbError;
use crate::artifacts::glb::RenderOptions;
use crate::artifacts::glb::container::GlbContainer;
use std::io::Write;
use std::path::Path;

impl Session {
    pub fn textconv(&self, file: &Path, options: &RenderOptions) -> anyhow::Result<()> {
        let text = self.render(file, options)?;

        let mut writer = self.writer();
        writer.write_all(text.as_bytes())?;
        writer.flush()?;

        Ok(())
    }

    pub fn render(&self, file: &Path, options: &RenderOptions) -> Result<String, GlbError> {
        let container = GlbContainer::from_file(file)?;

        Ok(container.render(options)?)
    }
}
