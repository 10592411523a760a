use clap::builder::NonEmptyStringValueParser;
use clap::{Arg, Command, crate_name};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments for the artifact bundle tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Path to the prebuilt sur executable
    pub executable: PathBuf,

    /// Version recorded in the bundle name and descriptor
    pub version: String,
}

impl Args {
    /// Parse command-line arguments, exiting with a usage message on failure
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse an explicit argument list
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        // Both arguments are required, so clap has already rejected their absence.
        Self {
            executable: matches
                .get_one::<String>("executable")
                .map(PathBuf::from)
                .unwrap_or_default(),
            version: matches
                .get_one::<String>("version")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

fn command() -> Command {
    Command::new(crate_name!())
        .about("Create an artifact bundle for the sur executable")
        // `-v/--version` carries the bundle version, not clap's version flag
        .disable_version_flag(true)
        .arg(
            Arg::new("executable")
                .short('e')
                .long("executable")
                .value_name("PATH")
                .required(true)
                .value_parser(NonEmptyStringValueParser::new())
                .help("The path to the sur executable")
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .value_name("VERSION")
                .required(true)
                .value_parser(NonEmptyStringValueParser::new())
                .help("The version of the sur executable")
        )
}
