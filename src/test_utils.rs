//! Test utilities and global setup
//!
//! Provides centralized test logging configuration and the stub tool helper
//! used by adapter tests.

/// Test logging utilities
#[cfg(all(test, feature = "test-logging"))]
pub mod logging {
    use std::sync::Once;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: Once = Once::new();

    /// Initialize test logging globally - safe to call multiple times
    ///
    /// Respects RUST_LOG with a debug default and uses the test writer so
    /// logs do not interfere with test output.
    pub fn init() {
        INIT.call_once(|| {
            let env_filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

            fmt()
                .with_env_filter(env_filter)
                .with_test_writer()
                .with_target(true)
                .compact()
                .try_init()
                .ok();
        });
    }
}

/// Stand-in for the external vimvs tool
///
/// Writes a small shell script into a temp directory and hands out its path,
/// so adapter tests can script arbitrary stdout/stderr/exit behavior without
/// a real tool installation.
#[cfg(test)]
pub mod stub {
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub struct StubTool {
        _temp_dir: TempDir, // Underscore prefix keeps it alive until drop
        exe: PathBuf,
    }

    impl StubTool {
        /// Create a stub whose invocation runs `body` as a shell script.
        ///
        /// The script receives the invocation arguments in `$@`, so bodies
        /// like `printf '%s\n' "$@"` can echo the request back.
        #[cfg(unix)]
        pub fn new(body: &str) -> Self {
            use std::os::unix::fs::PermissionsExt;

            let temp_dir = TempDir::new().expect("failed to create temp dir");
            let exe = temp_dir.path().join("vimvs-stub");
            std::fs::write(&exe, format!("#!/bin/sh\n{body}\n")).expect("failed to write stub");

            let mut perms = std::fs::metadata(&exe).expect("stub metadata").permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&exe, perms).expect("failed to mark stub executable");

            Self {
                _temp_dir: temp_dir,
                exe,
            }
        }

        pub fn exe(&self) -> &Path {
            &self.exe
        }
    }
}
