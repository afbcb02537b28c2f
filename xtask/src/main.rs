#![warn(clippy::pedantic)]
#![warn(unused_crate_dependencies)]
/// Developer tasks for the dynamic-array crate: the pre-push checks and coverage reports.
use std::env::set_current_dir;
use std::path::{Path, PathBuf};

use anyhow::{Error, bail};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use duct::{Expression, cmd};
use fs_extra::dir::{create_all, get_dir_content};
use fs_extra::file::remove;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    subcommand: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check formatting, run clippy with warnings denied, then run every test
    Ci,
    /// Run tests under instrumentation and compile coverage reports
    Coverage {
        /// Output coverage results as HTML rather than .lcov
        #[arg(short, long)]
        readable: bool,
        /// Whether to open HTML reports - only used if `readable` is true.
        #[arg(short, long)]
        open_report: bool,
    },
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    set_current_dir(root_crate_dir())?;

    match cli.subcommand {
        Commands::Ci => ci(),
        Commands::Coverage {
            readable,
            open_report,
        } => coverage(readable, open_report),
    }
}

fn step(label: &str, expression: &Expression) -> Result<(), Error> {
    print!("{label}... ");
    let output = expression.unchecked().stderr_to_stdout().stdout_capture().run()?;
    if output.status.success() {
        println!("{}", "ok".color(Color::Green));
        Ok(())
    } else {
        println!("{}", "failed".color(Color::Red));
        println!("{}", String::from_utf8_lossy(&output.stdout));
        bail!("{label} failed")
    }
}

fn ci() -> Result<(), Error> {
    step("Checking formatting", &cmd!("cargo", "fmt", "--all", "--check"))?;
    step(
        "Running clippy",
        &cmd!(
            "cargo",
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings"
        ),
    )?;
    step("Running tests", &cmd!("cargo", "test", "--workspace"))?;
    step("Running doc tests", &cmd!("cargo", "test", "--doc"))?;
    Ok(())
}

fn coverage(readable: bool, open_report: bool) -> Result<(), Error> {
    create_all("coverage", true)?;

    step(
        "Running instrumented tests",
        &cmd!("cargo", "test", "--package", "dynamic-array")
            .env("CARGO_INCREMENTAL", "0")
            .env("RUSTFLAGS", "-Cinstrument-coverage")
            .env("LLVM_PROFILE_FILE", "coverage/cargo-test-%p-%m.profraw"),
    )?;

    let (fmt, file) = if readable {
        ("html", "coverage/html")
    } else {
        ("lcov", "coverage/tests.lcov")
    };

    let commit = cmd!("git", "rev-parse", "HEAD")
        .stdout_capture()
        .unchecked()
        .run()
        .ok()
        .filter(|result| result.status.success())
        .map(|result| String::from_utf8_lossy(&result.stdout).trim().to_owned());

    let mut grcov_args = vec![
        ".",
        "--binary-path",
        "./target/debug/deps",
        "-s",
        ".",
        "-t",
        fmt,
        "-o",
        file,
        "--branch",
        "--llvm",
        "--ignore-not-existing",
        "--ignore",
        "**/tests/*",
        "--ignore",
        "xtask/*",
        "--ignore",
        "src/proptesting.rs",
        "--excl-start",
        "mod tests?",
        "--excl-line",
        "derive|unreachable|panic!",
    ];
    if let Some(hash) = &commit {
        grcov_args.extend(["--commit-sha", hash.as_str()]);
    }
    step(
        &format!("Generating reports as {fmt}"),
        &duct::cmd("grcov", grcov_args),
    )?;

    if readable {
        report_location(file, open_report)?;
    }

    print!("Cleaning up... ");
    let dir_content = get_dir_content(".")?;
    for prof_file in dir_content.files.iter().filter(|s| s.ends_with("profraw")) {
        remove(prof_file)?;
    }
    println!("{}", "ok".color(Color::Green));
    Ok(())
}

fn report_location(report_dir: &str, open_report: bool) -> Result<(), Error> {
    let index_file = format!("{report_dir}/index.html");

    if open_report {
        match open::that(&index_file) {
            Ok(()) => println!("{}", "Opened".color(Color::Green)),
            Err(e) => eprintln!("{e}\n{} to open reports", "Failure".color(Color::Red)),
        }
    } else {
        let abs_path = Path::new(&index_file).canonicalize()?;
        println!("report location: {}", abs_path.to_string_lossy());
    }
    Ok(())
}

/// The workspace root, one level above this crate's manifest
fn root_crate_dir() -> PathBuf {
    let mut xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    xtask_dir.pop();
    xtask_dir
}
