use crate::commands::diff::DiffSide;
use std::path::PathBuf;

/// The invocation shape, decided from the mode flags and positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `glbdiff OLD NEW`
    Diff { old: DiffSide, new: DiffSide },
    /// `glbdiff --textconv FILE`
    Textconv { file: PathBuf },
    /// `glbdiff --git [PATH] OLD_FILE OLD_HEX OLD_MODE NEW_FILE NEW_HEX NEW_MODE`
    Git { old: DiffSide, new: DiffSide },
}

impl Mode {
    pub fn select(textconv: bool, git: bool, args: &[String]) -> Result<Self, String> {
        match (textconv, git, args) {
            (true, true, _) => Err("--textconv and --git cannot be used together".to_string()),
            (true, false, [file]) => Ok(Mode::Textconv {
                file: PathBuf::from(file),
            }),
            (false, true, [path, old, _old_hex, _old_mode, new, _new_hex, _new_mode]) => {
                Ok(Mode::Git {
                    old: DiffSide::new(PathBuf::from(old), format!("a/{path}")),
                    new: DiffSide::new(PathBuf::from(new), format!("b/{path}")),
                })
            }
            (false, true, [old, _old_hex, _old_mode, new, _new_hex, _new_mode]) => Ok(Mode::Git {
                old: DiffSide::from_path(old),
                new: DiffSide::from_path(new),
            }),
            (false, false, [old, new]) => Ok(Mode::Diff {
                old: DiffSide::from_path(old),
                new: DiffSide::from_path(new),
            }),
            (_, _, args) => Err(format!("incorrect arguments: '{}'", args.join(" "))),
        }
    }
}
