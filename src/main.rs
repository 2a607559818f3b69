mod actions;
mod host;
mod logging;
mod quickfix;
mod tool;

#[cfg(test)]
mod test_utils;

use clap::{Parser, Subcommand};
use logging::{LogConfig, init_logging};
use std::path::PathBuf;
use tracing::info;

use crate::host::StdioHost;
use crate::tool::{ToolConfig, VimvsTool};

/// Editor integration bridge for the vimvs project tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the vimvs executable (overrides VIMVS_EXE env var)
    #[arg(long, value_name = "PATH")]
    exe: Option<String>,

    /// Build configuration name passed to the tool (e.g. Debug, Release)
    #[arg(long, value_name = "NAME")]
    configuration: Option<String>,

    /// Target platform name passed to the tool (e.g. x64, Win32)
    #[arg(long, value_name = "NAME")]
    platform: Option<String>,

    /// Log level (overrides RUST_LOG env var)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file path (overrides VIMVS_LOG_FILE env var)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Resolve the project root for the current directory
    Root {
        /// Only report whether a root exists (prints true/false)
        #[arg(long)]
        exists: bool,
    },
    /// Resolve the companion file (header/implementation) for a source file
    Alt {
        /// Source file to find the alternate of
        file: PathBuf,
    },
    /// Load the diagnostics file and emit quickfix records as JSON
    Quickfix,
    /// Trigger a build of the project, or of a single file
    Build {
        /// Restrict the build to this file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Fetch completion flags for a source file, one per line
    Flags {
        /// Source file to fetch flags for
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let log_config = LogConfig::from_env().with_overrides(args.log_level, args.log_file);
    if let Err(e) = init_logging(log_config) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = ToolConfig {
        exe: ToolConfig::resolve_exe(args.exe),
        configuration: args.configuration,
        platform: args.platform,
    };
    info!("Using tool: {}", config.exe.display());

    let tool = VimvsTool::new(config);
    let mut host = StdioHost::new();

    let ok = match args.action {
        Action::Root { exists: true } => actions::check_root(&tool, &mut host),
        Action::Root { exists: false } => actions::resolve_root(&tool, &mut host),
        Action::Alt { file } => actions::resolve_alt(&tool, &mut host, &file),
        Action::Quickfix => actions::load_quickfix(&tool, &mut host),
        Action::Build { file } => actions::build(&tool, &mut host, file.as_deref()),
        Action::Flags { file } => actions::resolve_flags(&tool, &mut host, &file),
    };

    if !ok {
        std::process::exit(1);
    }
}
