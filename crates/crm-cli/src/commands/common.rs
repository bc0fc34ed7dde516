//! Shared utilities for CLI commands

use std::fmt;
use std::path::Path;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Empty: the command has already printed its own diagnostic.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Print a message to stderr when verbose output is enabled.
pub(crate) fn verbose(enabled: bool, msg: &str) {
    if enabled {
        eprintln!("[verbose] {}", msg);
    }
}

/// Render a path the way it should appear in a `--file=` argument.
///
/// Bare relative paths get a `./` prefix; absolute or already-dotted paths
/// are shown as-is.
pub(crate) fn file_arg(path: &Path) -> String {
    let shown = path.display().to_string();
    if path.is_absolute() || shown.starts_with('.') {
        shown
    } else {
        format!("./{}", shown)
    }
}

/// Horizontal rule used around the banner and summary.
pub(crate) fn rule() -> String {
    "=".repeat(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_arg_prefixes_bare_relative_paths() {
        assert_eq!(file_arg(&PathBuf::from("import.sql")), "./import.sql");
        assert_eq!(file_arg(&PathBuf::from("out/seed.sql")), "./out/seed.sql");
    }

    #[test]
    fn test_file_arg_keeps_dotted_and_absolute_paths() {
        assert_eq!(file_arg(&PathBuf::from("./import.sql")), "./import.sql");
        assert_eq!(file_arg(&PathBuf::from("../seed.sql")), "../seed.sql");
        assert_eq!(file_arg(&PathBuf::from("/tmp/seed.sql")), "/tmp/seed.sql");
    }

    #[test]
    fn test_exit_code_displays_nothing() {
        assert_eq!(ExitCode(1).to_string(), "");
    }
}
