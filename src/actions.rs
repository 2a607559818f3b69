//! Host-triggered actions
//!
//! One function per editor action. This layer owns the error propagation
//! policy: every fatal failure is written to the host error slot exactly once
//! before control returns, while expected negatives (no alternate file, no
//! diagnostics yet) come back as ordinary empty results. Returns `true` on
//! success so the caller can derive a process exit code.

use std::path::Path;
use tracing::info;

use crate::host::Host;
use crate::quickfix;
use crate::tool::VimvsTool;

/// Resolve and display the project root
pub fn resolve_root(tool: &VimvsTool, host: &mut dyn Host) -> bool {
    match tool.get_root() {
        Ok(root) => {
            host.show(&root.display().to_string());
            true
        }
        Err(e) => {
            host.report_error(format!("-getroot failed: {e}"));
            false
        }
    }
}

/// Display whether the current directory is inside a recognized project.
///
/// Never reports: absence of a root is the answer, not a failure.
pub fn check_root(tool: &VimvsTool, host: &mut dyn Host) -> bool {
    host.show(if tool.has_root() { "true" } else { "false" });
    true
}

/// Resolve and display the companion file for `file`.
///
/// "No alternate exists" shows an empty line; only unparseable responses and
/// tool failures are reported.
pub fn resolve_alt(tool: &VimvsTool, host: &mut dyn Host, file: &Path) -> bool {
    match tool.get_alt(file) {
        Ok(Some(alt)) => {
            host.show(&alt.display().to_string());
            true
        }
        Ok(None) => {
            host.show("");
            true
        }
        Err(e) => {
            host.report_error(format!("-getalt failed for {}: {e}", file.display()));
            false
        }
    }
}

/// Load the diagnostics file and hand its records to the host quickfix list
pub fn load_quickfix(tool: &VimvsTool, host: &mut dyn Host) -> bool {
    match quickfix::load_quickfix(tool) {
        Ok(records) => {
            info!("Setting quickfix list with {} records", records.len());
            host.set_quickfix(&records);
            true
        }
        Err(e) => {
            host.report_error(format!("Loading quickfix failed: {e}"));
            false
        }
    }
}

/// Trigger a build and display the tool's output verbatim
pub fn build(tool: &VimvsTool, host: &mut dyn Host, file: Option<&Path>) -> bool {
    match tool.build(file) {
        Ok(output) => {
            host.show(output.trim_end());
            true
        }
        Err(e) => {
            host.report_error(format!("-build failed: {e}"));
            false
        }
    }
}

/// Fetch and display the completion flags for `file`, one per line
pub fn resolve_flags(tool: &VimvsTool, host: &mut dyn Host, file: &Path) -> bool {
    match tool.get_ycm_flags(file) {
        Ok(flags) => {
            for flag in &flags {
                host.show(flag);
            }
            true
        }
        Err(e) => {
            host.report_error(format!("-getycm failed for {}: {e}", file.display()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;
    use crate::test_utils::stub::StubTool;
    use crate::tool::ToolConfig;

    // Auto-initialize logging for all tests in this module
    #[cfg(feature = "test-logging")]
    #[ctor::ctor]
    fn init_test_logging() {
        crate::test_utils::logging::init();
    }

    fn tool(stub: &StubTool) -> VimvsTool {
        VimvsTool::new(ToolConfig {
            exe: stub.exe().to_path_buf(),
            configuration: None,
            platform: None,
        })
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_root_shows_path_without_reporting() {
        let stub = StubTool::new("echo 'ROOT:/proj/src'");
        let mut host = RecordingHost::default();

        assert!(resolve_root(&tool(&stub), &mut host));
        assert_eq!(host.shown, vec!["/proj/src"]);
        assert_eq!(host.reports, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_root_failure_reports_exactly_once() {
        let stub = StubTool::new("exit 1");
        let mut host = RecordingHost::default();

        assert!(!resolve_root(&tool(&stub), &mut host));
        assert_eq!(host.reports, 1);
        assert!(!host.error_slot.as_deref().unwrap().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_check_root_never_reports() {
        let stub = StubTool::new("exit 1");
        let mut host = RecordingHost::default();

        assert!(check_root(&tool(&stub), &mut host));
        assert_eq!(host.shown, vec!["false"]);
        assert_eq!(host.reports, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_alt_negative_is_not_reported() {
        let stub = StubTool::new("echo 'ALT:'");
        let mut host = RecordingHost::default();

        assert!(resolve_alt(&tool(&stub), &mut host, Path::new("a.md")));
        assert_eq!(host.shown, vec![""]);
        assert_eq!(host.reports, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_alt_protocol_error_is_reported() {
        let stub = StubTool::new("echo 'garbage'");
        let mut host = RecordingHost::default();

        assert!(!resolve_alt(&tool(&stub), &mut host, Path::new("a.cpp")));
        assert_eq!(host.reports, 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_load_quickfix_missing_file_sets_empty_list() {
        // Root resolves but no diagnostics file was ever written
        let stub = StubTool::new("echo 'ROOT:/nonexistent/proj'");
        let mut host = RecordingHost::default();

        assert!(load_quickfix(&tool(&stub), &mut host));
        assert!(host.quickfix.is_empty());
        assert_eq!(host.reports, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_load_quickfix_reads_records_end_to_end() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("proj");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(
            dir.path().join("proj.vimvs.quickfix"),
            "src\\a.cpp|42|3|E|C2039|'foo' undeclared\n",
        )
        .unwrap();

        let stub = StubTool::new(&format!("echo 'ROOT:{}'", root.display()));
        let mut host = RecordingHost::default();

        assert!(load_quickfix(&tool(&stub), &mut host));
        assert_eq!(host.quickfix.len(), 1);
        assert_eq!(host.quickfix[0].filename, "src/a.cpp");
        assert_eq!(host.quickfix[0].nr, 2039);
    }

    #[test]
    #[cfg(unix)]
    fn test_load_quickfix_malformed_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("proj");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(dir.path().join("proj.vimvs.quickfix"), "broken|line\n").unwrap();

        let stub = StubTool::new(&format!("echo 'ROOT:{}'", root.display()));
        let mut host = RecordingHost::default();

        assert!(!load_quickfix(&tool(&stub), &mut host));
        assert!(host.quickfix.is_empty());
        assert_eq!(host.reports, 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_build_shows_output_verbatim() {
        let stub = StubTool::new("echo 'Build succeeded.'");
        let mut host = RecordingHost::default();

        assert!(build(&tool(&stub), &mut host, None));
        assert_eq!(host.shown, vec!["Build succeeded."]);
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_flags_shows_one_per_line() {
        let stub = StubTool::new("echo 'YCM_CMD:-std=c++14|-Wall'");
        let mut host = RecordingHost::default();

        assert!(resolve_flags(&tool(&stub), &mut host, Path::new("a.cpp")));
        assert_eq!(host.shown, vec!["-std=c++14", "-Wall"]);
    }
}
