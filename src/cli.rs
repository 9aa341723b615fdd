use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::config::{
    OutputFormat, Settings, SettingsOverrides, load_settings_file, parse_step,
};
use crate::constants::{
    CONFIG_HELP, CONFIRM_HELP, DESTINATION_HELP, DRY_RUN_HELP, FORMAT_HELP, LOCAL_LOGGING_HELP,
    LOG_FILE_HELP, SOURCE_HELP, STEP_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `source`: Regular expression matched against source paths
/// - `destination`: Destination path template
/// - `step`: Step bucket capacities, repeatable
/// - `dry_run`, `confirm`, `format`: What to do with the mapping
/// - `config`: Optional settings file
/// - `verbose`, `log_file`, `log_locally`: Logging
pub fn build_command() -> Command {
    let arg_source = Arg::new("source")
        .value_name("SOURCE")
        .help(SOURCE_HELP)
        .required(true);

    let arg_destination = Arg::new("destination")
        .value_name("DESTINATION")
        .help(DESTINATION_HELP)
        .required(true);

    let arg_step = Arg::new("step")
        .short('s')
        .long("step")
        .value_name("N")
        .help(STEP_HELP)
        .action(ArgAction::Append);

    let arg_dry = Arg::new("dry_run")
        .short('d')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_confirm = Arg::new("confirm")
        .short('c')
        .long("confirm")
        .help(CONFIRM_HELP)
        .action(ArgAction::SetTrue);

    let arg_format = Arg::new("format")
        .short('f')
        .long("format")
        .help(FORMAT_HELP)
        .value_parser(["tree", "table"]);

    let arg_config = Arg::new("config")
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .arg(arg_source)
        .arg(arg_destination)
        .arg(arg_step)
        .arg(arg_dry)
        .arg(arg_confirm)
        .arg(arg_format)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the log file to write to, if any
///
/// Unless `--log-locally` is given, the file lives in the application data directory.
///
/// # Errors
/// Returns an error if the application data directory cannot be created
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let Some(filename) = matches.get_one::<String>("log_file") else {
        return Ok(None);
    };

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.data_dir().join(filename)))
    }
}

/// Gets the settings of the run
///
/// Reads the settings file when one is given and lets the command-line values
/// override it.
///
/// # Errors
/// * Returns an error if a step value is not a positive integer
/// * Returns an error if the settings file cannot be read or parsed
pub fn get_settings(matches: &ArgMatches) -> Result<Settings> {
    let steps = matches
        .get_many::<String>("step")
        .unwrap_or_default()
        .map(|value| parse_step(value))
        .collect::<Result<Vec<usize>>>()?;

    let format = matches
        .get_one::<String>("format")
        .map(|value| value.parse::<OutputFormat>())
        .transpose()
        .map_err(|e| generic_error(&e))?;

    let overrides = SettingsOverrides {
        steps,
        dry_run: matches.get_flag("dry_run"),
        confirm: matches.get_flag("confirm"),
        format,
    };

    let file = matches
        .get_one::<String>("config")
        .map(|path| load_settings_file(&PathBuf::from(expand_path(path))))
        .transpose()?;

    Settings::resolve(file, overrides)
}

/// Gets everything a run needs from the command-line arguments
///
/// A leading `~` in the source pattern and destination template is expanded,
/// since both are usually quoted and never see the shell's own expansion.
///
/// # Errors
/// Returns an error if the settings cannot be resolved
pub fn get_processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let source = matches
        .get_one::<String>("source")
        .ok_or_else(|| generic_error("Source pattern not found"))?;
    let destination = matches
        .get_one::<String>("destination")
        .ok_or_else(|| generic_error("Destination template not found"))?;

    Ok(ProcessingOptions {
        source_pattern: expand_path(source),
        destination_template: expand_path(destination),
        settings: get_settings(matches)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        build_command()
            .try_get_matches_from(std::iter::once("supalink").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_is_consistent() {
        build_command().debug_assert();
    }

    #[test]
    fn test_processing_options() {
        let matches = parse(&[
            "media/.*S([0-9]{2})E([0-9]{2}).*",
            "out/Season $STEP/S$1E$2",
            "-s",
            "12",
            "--step",
            "10",
            "-d",
            "-f",
            "table",
        ]);

        let options = get_processing_options(&matches).unwrap();
        assert_eq!(options.source_pattern, "media/.*S([0-9]{2})E([0-9]{2}).*");
        assert_eq!(options.destination_template, "out/Season $STEP/S$1E$2");
        assert_eq!(options.settings.steps, vec![12, 10]);
        assert!(options.settings.dry_run);
        assert!(!options.settings.confirm);
        assert_eq!(options.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        let matches = parse(&["a", "b", "-s", "0"]);
        assert!(get_settings(&matches).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = build_command().try_get_matches_from(["supalink", "a", "b", "-f", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_and_log_file() {
        let matches = parse(&["a", "b", "-vv", "-L", "-l", "run.log"]);
        assert_eq!(get_verbosity(&matches), LogLevel::Trace);
        assert_eq!(
            get_log_file(&matches).unwrap(),
            Some(PathBuf::from("run.log"))
        );

        let quiet = parse(&["a", "b"]);
        assert_eq!(get_verbosity(&quiet), LogLevel::Info);
        assert_eq!(get_log_file(&quiet).unwrap(), None);
    }
}
