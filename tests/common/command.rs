use assert_cmd::Command;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn scene_0() -> String {
    r#"{"asset":{"version":"2.0"},"scene":0}"#.to_string()
}

#[fixture]
pub fn scene_1() -> String {
    r#"{"asset":{"version":"2.0"},"scene":1}"#.to_string()
}

#[fixture]
pub fn scene_diff_output() -> String {
    "--- a.glb\n+++ b.glb\n@@ -2,5 +2,5 @@\n   \"asset\": {\n     \"version\": \"2.0\"\n   },\n-  \"scene\": 0\n+  \"scene\": 1\n }\n"
        .to_string()
}

/// Runs the binary in `dir`, with scratch files kept inside `dir` as well
pub fn run_glbdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("glbdiff").expect("Failed to find glbdiff binary");
    cmd.env("TMPDIR", dir);
    cmd.env("GLBDIFF_LOG", "off");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> std::process::Command {
    let mut cmd = std::process::Command::new("git");
    cmd.current_dir(dir);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "glbdiff"),
        ("GIT_AUTHOR_EMAIL", "glbdiff@example.com"),
        ("GIT_COMMITTER_NAME", "glbdiff"),
        ("GIT_COMMITTER_EMAIL", "glbdiff@example.com"),
        ("GIT_CONFIG_NOSYSTEM", "1"),
    ]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
