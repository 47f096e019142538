use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use glbdiff::ColorChoice;
use glbdiff::areas::session::Session;
use glbdiff::artifacts::diff::diff_tool::DiffTool;
use glbdiff::artifacts::glb::RenderOptions;
use glbdiff::commands::diff::DiffOptions;
use glbdiff::commands::mode::Mode;
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for usage, extraction and subprocess errors, as `diff` uses it
const EXIT_ERROR: u8 = 2;
const MAX_INDENT: i64 = 16;

#[derive(Parser)]
#[command(
    name = "glbdiff",
    version = "0.1.0",
    about = "Diff the JSON in binary glTF (.glb) files",
    long_about = "Extracts the JSON chunk of .glb files, pretty-prints it and diffs it. \
    Can be used directly on two files, or from git as a textconv filter \
    (diff.glbdiff.textconv = glbdiff --textconv) or as an external diff command \
    (diff.glbdiff.command = glbdiff --git) together with '*.glb diff=glbdiff' in .gitattributes.",
    override_usage = "glbdiff [OPTIONS] OLD_FILE NEW_FILE\n       \
    glbdiff [OPTIONS] --textconv FILE\n       \
    glbdiff [OPTIONS] --git [PATH] OLD_FILE OLD_HEX OLD_MODE NEW_FILE NEW_HEX NEW_MODE",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        help = "Convert a single file to text (for git's textconv diff driver)"
    )]
    textconv: bool,
    #[arg(long, help = "Git mode (for use as git's external diff command)")]
    git: bool,
    #[arg(
        long,
        value_name = "N",
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=MAX_INDENT),
        help = "Number of spaces per JSON indentation level (0-16)"
    )]
    indent: u8,
    #[arg(
        long,
        help = "Append SHA-256 digests of the binary and extra chunks after the JSON"
    )]
    digests: bool,
    #[arg(
        long,
        value_name = "CMD",
        value_parser = DiffTool::parse,
        help = "Diff command to run instead of 'diff -u'; the two files are appended"
    )]
    diff_command: Option<DiffTool>,
    #[arg(
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to color diff output"
    )]
    color: ColorChoice,
    #[arg(index = 1, value_name = "FILE")]
    files: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mode = match Mode::select(cli.textconv, cli.git, &cli.files) {
        Ok(mode) => mode,
        Err(message) => Cli::command()
            .error(ErrorKind::WrongNumberOfValues, message)
            .exit(),
    };

    match run(&cli, mode) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("glbdiff: {error:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli, mode: Mode) -> Result<u8> {
    let color = cli.color.enabled(std::io::stdout().is_terminal());
    colored::control::set_override(color);

    let session = Session::new(Box::new(std::io::stdout()), color);
    let render = RenderOptions {
        indent: cli.indent,
        digests: cli.digests,
    };

    match mode {
        Mode::Textconv { file } => {
            session.textconv(&file, &render)?;
            Ok(0)
        }
        Mode::Diff { old, new } | Mode::Git { old, new } => {
            let options = DiffOptions::new(render, cli.diff_command.clone().unwrap_or_default());
            let code = session.diff(&old, &new, &options)?;

            Ok(u8::try_from(code).unwrap_or(EXIT_ERROR))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GLBDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
