use hlogo_codegen::Compiler;
use hlogo_common::error::{self, ErrorS};
use hlogo_syntax::dump;

use anyhow::{Context, Result};
use clap::Parser;
use tempfile::NamedTempFile;
use termcolor::{ColorChoice, StandardStream};

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Cmd {
    /// High-LOGO source file to translate.
    pub input: PathBuf,
    /// Where to write the generated Python [default: <INPUT>.py]
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Print the syntax tree to stdout.
    #[clap(long)]
    pub ast: bool,
    /// Write the syntax tree as a Graphviz DOT file.
    #[clap(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,
}

impl Cmd {
    pub fn run(&self) -> Result<ExitCode> {
        let name = self.input.display().to_string();
        let source = fs::read_to_string(&self.input)
            .with_context(|| format!("could not read source file: {name}"))?;

        let program = match hlogo_syntax::parse(&source) {
            Ok(program) => program,
            Err(e) => return report(&name, &source, &[e]),
        };

        if self.ast {
            print!("{}", dump::pretty(&program));
        }
        if let Some(path) = &self.dot {
            fs::write(path, dump::dot(&program))
                .with_context(|| format!("could not write graph: {}", path.display()))?;
            log::info!("wrote syntax tree graph to {}", path.display());
        }

        let python = match Compiler::compile(&program) {
            Ok(python) => python,
            Err(errors) => return report(&name, &source, &errors),
        };

        let output = self.output.clone().unwrap_or_else(|| default_output(&self.input));
        write_atomic(&output, &python)?;
        log::info!("wrote {}", output.display());
        Ok(ExitCode::SUCCESS)
    }
}

fn report(name: &str, source: &str, errors: &[ErrorS]) -> Result<ExitCode> {
    for (e, span) in errors {
        let (line, column) = error::location(source, span.start);
        log::debug!("{name}:{line}:{column}: {e}");
    }
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    error::report_err(&mut stderr, name, source, errors)
        .context("could not write diagnostics")?;
    Ok(ExitCode::FAILURE)
}

fn default_output(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".py");
    path.into()
}

/// Writes through a temporary file in the destination directory, so the target
/// path only ever holds a complete translation.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("could not create temporary file in: {}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    Ok(())
}
