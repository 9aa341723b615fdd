//! Links files matched by a regular expression into a templated destination layout.
//!
//! A run derives a directory to walk from the literal start of the source
//! pattern, matches every path below it, and expands a destination template
//! with the capture groups of each match:
//!
//! ```no_run
//! use supalink::workflow::build_mapping;
//!
//! # fn main() -> supalink::errors::Result<()> {
//! let mapping = build_mapping(
//!     r"media/ShowA/.*S([0-9]{2})E([0-9]{2}).*\.mkv",
//!     "out/Season $1/ShowA S$1E$2.mkv",
//!     &[],
//! )?;
//! for (source, destination) in &mapping {
//!     println!("{} -> {}", source.display(), destination.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod output;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{OutputFormat, Settings};
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, invalid_pattern_error,
        invalid_step_error, no_steps_error, step_exhausted_error, symlink_creation_error,
        template_parameter_error, traversal_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{Mapping, ProcessingOptions, RunOutcome, build_mapping, run};
}
