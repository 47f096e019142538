//! Command implementations
//!
//! - `mode`: picks one of the three invocation shapes from the arguments
//! - `textconv`: prints one rendered container (git `textconv` driver)
//! - `diff`: diffs two rendered containers (direct use and git `command` driver)

pub mod diff;
pub mod mode;
pub mod textconv;
