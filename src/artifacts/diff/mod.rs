//! External diff utility support
//!
//! - `diff_tool`: builds and runs the diff command line over two scratch files
//! - `highlight`: git-style coloring of unified diff output

pub mod diff_tool;
pub mod highlight;
