use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;
use log::{debug, warn};

use supalink::cli::{get_log_file, get_matches, get_processing_options, get_verbosity};
use supalink::logging::{format_message, init_logger};
use supalink::workflow::{RunOutcome, run};

fn main() -> ExitCode {
    setup_panic!();

    match try_main() {
        Ok(outcome) => {
            debug!("Finished with {outcome:?}");
            let failed = outcome.failures();
            if failed > 0 {
                warn!("{failed} symlink(s) could not be created, see the errors above");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = format!("Error: {e:#}");
            let colored_message = format!("{} {e:#}", "Error:".red().bold());
            eprintln!("{}", format_message(&message, &colored_message));
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<RunOutcome> {
    let matches = get_matches();

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    let options = get_processing_options(&matches)?;
    debug!("Running with {options:?}");

    run(&options)
}
