//! CLI definition and parsing.
//! The tool itself is interactive; flags only configure the ambient bits
//! (logging and a default download proxy).

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Interactive filesystem operations and directory change watching"
)]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Default proxy host used by the download action when the interactive
    /// proxy prompt is left blank.
    #[arg(
        long,
        value_name = "HOST",
        help = "Default proxy for downloads (the interactive prompt overrides this)"
    )]
    pub proxy: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
