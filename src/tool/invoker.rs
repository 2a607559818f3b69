//! Single-shot synchronous invocation of the external tool
//!
//! Spawns one child process per call, waits for it to exit and captures both
//! output pipes in full. There is deliberately no retry and no timeout; each
//! adapter issues exactly one invocation and blocks until it completes.

use std::path::Path;
use std::process::Command;
use tracing::{debug, trace};

use crate::tool::error::ToolError;

/// Captured result of one tool invocation
///
/// Transient by design: consumed immediately by the response parser and never
/// persisted.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit status code; -1 when the process was killed by a signal
    pub status: i32,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Promote a non-zero exit into the error taxonomy
    pub fn check(self) -> Result<Self, ToolError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ToolError::ToolExit {
                status: self.status,
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Run the tool once with the given arguments and capture its output.
///
/// Arguments are passed through argv as-is; there is no shell involved, so
/// paths and quote characters never get re-split.
pub fn invoke(exe: &Path, args: &[String]) -> Result<ToolOutput, ToolError> {
    debug!("Invoking tool: {} {:?}", exe.display(), args);

    let mut command = Command::new(exe);
    command.args(args);

    // Keep the tool from flashing a console window when the host is a GUI
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        command.creation_flags(CREATE_NO_WINDOW);
    }

    // .output() drains both pipes to EOF and reaps the child on every path
    let output = command.output().map_err(|e| ToolError::Spawn {
        exe: exe.to_path_buf(),
        source: e,
    })?;

    let result = ToolOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status.code().unwrap_or(-1),
    };

    trace!(
        status = result.status,
        stdout_len = result.stdout.len(),
        stderr_len = result.stderr.len(),
        "Tool invocation finished"
    );

    Ok(result)
}
