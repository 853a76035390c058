//! Constants used throughout promptkit

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["promptkit.json", "promptkit.yaml", "promptkit.yml"];

/// Default template file suffix
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".tmpl";

/// Default subdirectory holding include fragments
pub const DEFAULT_INCLUDES_DIR: &str = "includes";

/// Default template root used by the CLI
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Line that opens and closes a frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Name under which a template body is registered in the render environment
pub const BODY_TEMPLATE_NAME: &str = "<body>";

/// Appended by `truncate` when text is cut
pub const ELLIPSIS: &str = "...";

/// Approximate number of characters per model token
pub const CHARS_PER_TOKEN: usize = 4;

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
