//! Render command
//!
//! Usage: faultline render <FILE> [--color <MODE>] [--search-root <DIR>]...
//! [--cwd <DIR>] [--config <FILE>] [--output <FILE>]

use clap::{Args, ValueEnum};
use std::fs;
use std::io::{BufWriter, IsTerminal};
use std::path::{Path, PathBuf};

use faultline_core::errors::FaultlineError;
use faultline_core::{
    ClassifierConfig, ColorMode, FailureNode, FsSourceProvider, RenderOptions, ReportHandler,
    ReportSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Color when writing to a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON file describing the failure chain
    pub input: PathBuf,

    /// When to emit ANSI escapes
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Module search root, in precedence order (repeatable)
    #[arg(long = "search-root")]
    pub search_roots: Vec<PathBuf>,

    /// Top-level module name belonging to the standard library (repeatable)
    #[arg(long = "stdlib-module")]
    pub stdlib_modules: Vec<String>,

    /// Directory whose files count as user code (default: current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// TOML file with render options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of chained failures to render
    #[arg(long)]
    pub max_chain_depth: Option<usize>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute render command
pub fn execute(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let failure = load_failure(&args.input)?;

    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => RenderOptions::default(),
    };
    if args.max_chain_depth.is_some() {
        options.max_chain_depth = args.max_chain_depth;
    }

    let cwd = match args.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir()?,
    };
    let settings = ReportSettings {
        color: args.color.into(),
        options,
        classifier: ClassifierConfig::new(args.search_roots, cwd.clone())
            .with_stdlib_modules(args.stdlib_modules),
    };
    let sources = FsSourceProvider::with_base_dir(cwd);

    match args.output {
        Some(path) => {
            let file = BufWriter::new(fs::File::create(&path)?);
            ReportHandler::from_settings(file, &settings, false)
                .with_sources(sources)
                .report(&failure)?;
        }
        None => {
            let stdout = std::io::stdout();
            let is_terminal = stdout.is_terminal();
            ReportHandler::from_settings(stdout.lock(), &settings, is_terminal)
                .with_sources(sources)
                .report(&failure)?;
        }
    }

    Ok(())
}

fn load_failure(path: &Path) -> Result<FailureNode, FaultlineError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read render options; keys missing from the file keep their defaults
fn load_options(path: &Path) -> Result<RenderOptions, FaultlineError> {
    let text = fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|e| FaultlineError::InvalidConfig {
        reason: format!("{}: {}", path.display(), e),
    })
}
