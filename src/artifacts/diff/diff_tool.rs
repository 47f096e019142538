use crate::areas::scratch::ScratchFile;
use crate::artifacts::core::GlbError;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::debug;

const DEFAULT_PROGRAM: &str = "diff";

/// The unified-diff utility the two renderings are handed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTool {
    program: String,
    args: Vec<String>,
    labelled: bool,
}

impl Default for DiffTool {
    fn default() -> Self {
        Self::unified()
    }
}

impl DiffTool {
    /// `diff -u`, with the original file names as labels instead of the scratch paths
    pub fn unified() -> Self {
        DiffTool {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["-u".to_string()],
            labelled: true,
        }
    }

    /// A user-supplied command line; the two scratch paths are appended to it
    pub fn parse(command: &str) -> Result<Self, String> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| "diff command must not be empty".to_string())?;

        Ok(DiffTool {
            program,
            args: words.collect(),
            labelled: false,
        })
    }

    pub fn command_line(&self, old: &ScratchFile, new: &ScratchFile) -> Vec<String> {
        let mut args = self.args.clone();
        if self.labelled {
            args.extend([
                "--label".to_string(),
                old.label().to_string(),
                "--label".to_string(),
                new.label().to_string(),
            ]);
        }
        args.push(old.path().display().to_string());
        args.push(new.path().display().to_string());
        args
    }

    /// Runs the tool, copying its stdout into `out` as it is produced, and
    /// returns its exit code
    pub fn run(
        &self,
        old: &ScratchFile,
        new: &ScratchFile,
        out: &mut dyn Write,
    ) -> Result<i32, GlbError> {
        let args = self.command_line(old, new);
        debug!(program = %self.program, ?args, "running diff");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| GlbError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let copied = match child.stdout.take() {
            Some(mut stdout) => io::copy(&mut stdout, out),
            None => Ok(0),
        };
        // reap the child even when the copy failed
        let status = child.wait().map_err(|source| GlbError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let bytes = copied.map_err(|source| GlbError::Output { source })?;

        let code = status.code().ok_or_else(|| GlbError::Terminated {
            program: self.program.clone(),
        })?;
        debug!(code, bytes, "diff finished");

        Ok(code)
    }
}
