use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::run_glbdiff_command;
use common::work_dir;

#[rstest]
fn print_usage_with_all_modes(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_glbdiff_command(work_dir.path(), &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glbdiff [OPTIONS] OLD_FILE NEW_FILE"))
        .stdout(predicate::str::contains("--textconv"))
        .stdout(predicate::str::contains("--git"));

    Ok(())
}

#[rstest]
#[case::no_arguments(&[])]
#[case::single_file(&["a.glb"])]
#[case::three_files(&["a.glb", "b.glb", "c.glb"])]
#[case::textconv_without_file(&["--textconv"])]
#[case::textconv_and_git(&["--textconv", "--git", "a.glb"])]
fn reject_incorrect_arguments(
    work_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    run_glbdiff_command(work_dir.path(), args)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[rstest]
fn reject_empty_diff_command(work_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_glbdiff_command(work_dir.path(), &["--diff-command", " ", "a.glb", "b.glb"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("diff command must not be empty"));

    Ok(())
}

#[rstest]
#[case::far_too_wide("100000")]
#[case::just_past_limit("17")]
fn reject_out_of_range_indent(
    work_dir: TempDir,
    #[case] indent: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_glbdiff_command(work_dir.path(), &["--indent", indent, "--textconv", "a.glb"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--indent"));

    Ok(())
}
