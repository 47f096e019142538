#![allow(dead_code)]

pub mod command;
pub mod glb;

use assert_fs::TempDir;
use rstest::fixture;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Names of leftover scratch files in `dir`
pub fn scratch_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("Failed to list dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("glbdiff-"))
        .collect()
}
