/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Characters that start the dynamic part of a source pattern
///
/// Everything before the first of these is treated as a literal path when
/// deciding where the filesystem walk starts.
pub const REGEX_METACHARACTERS: &str = ".*+?[]()|{}";

/// End-of-string anchor appended to source patterns that lack one
pub const END_ANCHOR: char = '$';

/// Placeholder replaced by the position inside the current step bucket
pub const STEP_COUNT_PLACEHOLDER: &str = "$STEP_COUNT";

/// Placeholder replaced by the current step bucket number
pub const STEP_PLACEHOLDER: &str = "$STEP";

/// Paths longer than this are shortened for display
pub const DISPLAY_MAX_WIDTH: usize = 45;

/// Number of leading characters kept when a path is shortened for display
pub const DISPLAY_KEEP_WIDTH: usize = 40;

/// Marker inserted where a shortened path was cut
pub const DISPLAY_ELLIPSIS: &str = "(...)";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is used for the per-user data directory that holds log files.
pub const APPLICATION: &str = "supalink";

/// Help text for the source positional argument
pub const SOURCE_HELP: &str =
    "Regular expression matched against source paths (capture groups feed $1, $2, ...)";

/// Help text for the destination positional argument
pub const DESTINATION_HELP: &str =
    "Destination path template using $1, $2, ..., $STEP and $STEP_COUNT";

/// Help text for the step command-line option
pub const STEP_HELP: &str =
    "Capacity of a step bucket used for $STEP/$STEP_COUNT (can be used multiple times)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Perform a trial run with no changes made";

/// Help text for the confirm command-line option
pub const CONFIRM_HELP: &str = "Ask for confirmation before creating symlinks";

/// Help text for the format command-line option
pub const FORMAT_HELP: &str = "How to display the planned symlinks";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read default settings from a YAML file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Keep the log file in the working directory instead of the application data directory";
