//! Feature adapters over the tool protocol
//!
//! Each adapter issues one request to the tool, parses the tagged response and
//! hands back a structured result. Negative responses (no project root, no
//! alternate file) are distinguished from protocol failures: the former are
//! ordinary results, the latter are errors.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::tool::error::ToolError;
use crate::tool::invoker::{ToolOutput, invoke};
use crate::tool::response::{Tag, extract_tag};

/// Suffix appended to the project root to locate the diagnostics file the
/// tool writes after a build. The format is owned by the tool's writer.
pub const QUICKFIX_SUFFIX: &str = ".vimvs.quickfix";

/// Explicit configuration for one tool client
///
/// Built once at startup from CLI arguments and the environment; adapters
/// never reach for globals.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Path to the vimvs executable
    pub exe: PathBuf,
    /// Build configuration name forwarded to `-build` (e.g. "Debug")
    pub configuration: Option<String>,
    /// Target platform name forwarded to `-build` (e.g. "x64")
    pub platform: Option<String>,
}

impl ToolConfig {
    /// Resolve the executable path: CLI arg > VIMVS_EXE env var > "vimvs"
    pub fn resolve_exe(exe_arg: Option<String>) -> PathBuf {
        exe_arg
            .or_else(|| std::env::var("VIMVS_EXE").ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("vimvs"))
    }
}

/// Client for the external vimvs tool
pub struct VimvsTool {
    config: ToolConfig,
}

impl VimvsTool {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    fn run(&self, args: Vec<String>) -> Result<ToolOutput, ToolError> {
        invoke(&self.config.exe, &args)?.check()
    }

    /// Resolve the project root for the current working directory.
    ///
    /// An empty `ROOT:` payload is the tool's explicit "not inside a project"
    /// answer and maps to [`ToolError::NoRoot`].
    pub fn get_root(&self) -> Result<PathBuf, ToolError> {
        let output = self.run(vec!["-getroot".to_string()])?;
        let payload = extract_tag(&output.stdout, Tag::Root)?;
        if payload.is_empty() {
            return Err(ToolError::NoRoot);
        }
        debug!("Project root: {}", payload);
        Ok(PathBuf::from(payload))
    }

    /// Whether the current directory is inside a recognized project
    pub fn has_root(&self) -> bool {
        self.get_root().is_ok()
    }

    /// Resolve the companion file (header/implementation pair) for `file`.
    ///
    /// Returns `Ok(None)` when the tool answers that no alternate exists; an
    /// answer that cannot be parsed at all is a protocol error.
    pub fn get_alt(&self, file: &Path) -> Result<Option<PathBuf>, ToolError> {
        let output = self.run(vec![format!("-getalt={}", file.display())])?;
        let payload = match extract_tag(&output.stdout, Tag::Alt) {
            Ok(payload) => payload,
            Err(ToolError::TagNotFound { .. }) => {
                return Err(ToolError::Protocol {
                    reason: format!("-getalt output had no ALT line for {}", file.display()),
                });
            }
            Err(e) => return Err(e),
        };
        if payload.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(payload)))
        }
    }

    /// Fetch the completion flags for `file`.
    ///
    /// The tool joins flags with `|` in its `YCM_CMD` payload; empty pieces
    /// are dropped, order is preserved.
    pub fn get_ycm_flags(&self, file: &Path) -> Result<Vec<String>, ToolError> {
        let output = self.run(vec![format!("-getycm={}", file.display())])?;
        let payload = match extract_tag(&output.stdout, Tag::YcmCmd) {
            Ok(payload) => payload,
            Err(ToolError::TagNotFound { .. }) => {
                return Err(ToolError::Protocol {
                    reason: format!("-getycm output had no YCM_CMD line for {}", file.display()),
                });
            }
            Err(e) => return Err(e),
        };
        Ok(payload
            .split('|')
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Trigger a build of the whole project, or of a single file.
    ///
    /// The tool's output is display-only; it is returned as raw text and
    /// never structurally parsed.
    pub fn build(&self, file: Option<&Path>) -> Result<String, ToolError> {
        let mut args = Vec::new();
        match file {
            Some(file) => args.push(format!("-build=file:{}", file.display())),
            None => args.push("-build".to_string()),
        }
        if let Some(cfg) = &self.config.configuration {
            args.push(format!("-configuration={cfg}"));
        }
        if let Some(plat) = &self.config.platform {
            args.push(format!("-platform={plat}"));
        }

        info!("Starting build: {:?}", args);
        let output = self.run(args)?;
        Ok(output.stdout)
    }

    /// Path of the diagnostics file the tool writes next to the project root
    pub fn quickfix_path(&self) -> Result<PathBuf, ToolError> {
        let root = self.get_root()?;
        let mut path = root.into_os_string();
        path.push(QUICKFIX_SUFFIX);
        Ok(PathBuf::from(path))
    }
}
