#![forbid(unsafe_code)]

//! Command-line argument parsing for the `loom` binary.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `LOOM_*` prefix; explicit flags win.

use std::env;
use std::fmt;
use std::process;

use loom::ColorProfile;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
loom: preview a rainbow loom bracelet and print easy instructions

USAGE:
    loom [OPTIONS]

OPTIONS:
    --colors=LIST        Comma-separated band colors, repeated along the ring
    --color=NAME         Append one band color (may be repeated)
    --message=TEXT       Bead message (first 20 characters are kept)
    --note=TEXT          Extra note appended to the instructions
    --profile=PROFILE    Color output: truecolor, 256, 16, or mono
    --format=FORMAT      Output format: 'text' (default) or 'json'
    --palette            List the available band colors and exit
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    LOOM_COLORS          Default for --colors
    LOOM_MESSAGE         Default for --message
    LOOM_NOTE            Default for --note
    LOOM_PROFILE         Default for --profile
    LOOM_FORMAT          Default for --format
    LOOM_LOG             Log filter for stderr diagnostics (e.g. 'debug')
    NO_COLOR             Force monochrome output unless a profile is given";

/// How the design is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Ring preview, pattern summary, and instructions.
    #[default]
    Text,
    /// One JSON document with the layout and instructions.
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Band color names, in pattern order.
    pub colors: Vec<String>,
    /// Raw bead message.
    pub message: String,
    /// Raw note.
    pub note: String,
    /// Explicit color profile; `None` means detect from the terminal.
    pub profile: Option<ColorProfile>,
    /// Output format.
    pub format: OutputFormat,
    /// List the palette instead of rendering a design.
    pub list_palette: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// Rejected command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag nobody recognizes.
    UnknownArgument(String),
    /// A recognized flag with an unusable value.
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
        }
    }
}

impl std::error::Error for CliError {}

fn split_colors(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn profile_value(flag: &'static str, value: &str) -> Result<ColorProfile, CliError> {
    ColorProfile::from_name(value).ok_or_else(|| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn format_value(flag: &'static str, value: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::from_name(value).ok_or_else(|| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

impl Opts {
    /// Parse process arguments and environment variables.
    ///
    /// Prints help or version and exits when asked; exits with status 1 on
    /// a bad argument.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("loom {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` with `env` as the environment lookup.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse_from<I, S, F>(args: I, env: F) -> Result<Command, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("LOOM_COLORS") {
            opts.colors = split_colors(&val);
        }
        if let Some(val) = env("LOOM_MESSAGE") {
            opts.message = val;
        }
        if let Some(val) = env("LOOM_NOTE") {
            opts.note = val;
        }
        if let Some(val) = env("LOOM_PROFILE") {
            opts.profile = Some(profile_value("LOOM_PROFILE", &val)?);
        }
        if let Some(val) = env("LOOM_FORMAT") {
            opts.format = format_value("LOOM_FORMAT", &val)?;
        }

        // Appending with --color starts from scratch rather than from LOOM_COLORS.
        let mut colors_from_flags = false;
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--palette" => opts.list_palette = true,
                other => {
                    if let Some(val) = other.strip_prefix("--colors=") {
                        opts.colors = split_colors(val);
                        colors_from_flags = true;
                    } else if let Some(val) = other.strip_prefix("--color=") {
                        if !colors_from_flags {
                            opts.colors.clear();
                            colors_from_flags = true;
                        }
                        opts.colors.extend(split_colors(val));
                    } else if let Some(val) = other.strip_prefix("--message=") {
                        opts.message = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--note=") {
                        opts.note = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--profile=") {
                        opts.profile = Some(profile_value("--profile", val)?);
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = format_value("--format", val)?;
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        if opts.profile.is_none() && env("NO_COLOR").is_some_and(|val| !val.is_empty()) {
            opts.profile = Some(ColorProfile::Mono);
        }

        Ok(Command::Run(opts))
    }
}
