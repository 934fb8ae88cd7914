use std::path::{Path, PathBuf};

use anyhow::Result;
use athena_app::cli::Cli;
use athena_app::commands::{Context, run};
use athena_core::config::Settings;
use clap::Parser;
use tempfile::TempDir;

/// Runs the command line `args` (without the program name) and returns
/// what the command wrote to standard output.
pub fn athena(args: &[&str]) -> Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("athena").chain(args.iter().copied()))?;
    let settings = Settings::load(cli.config.as_deref())?;
    let ctx = Context::new(&cli, settings)?;

    let mut out = Vec::new();
    run(&cli.command, &ctx, &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// A scratch directory holding the input files of one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("should create temp dir"),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("should write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
