//! Application orchestrator.
//! Initializes logging, installs the signal handler, and hands stdin to the
//! interactive menu loop.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use dirwatch::menu::Menu;
use dirwatch::output as out;
use dirwatch::shutdown;

use crate::cli::Args;
use crate::logging::{self, LogLevel};

/// Run the interactive application.
pub fn run(args: Args) -> Result<()> {
    let level = if let Some(s) = args.log_level.as_deref() {
        LogLevel::parse(s).unwrap_or_default()
    } else if args.debug {
        LogLevel::Debug
    } else {
        LogLevel::default()
    };

    logging::init_tracing(level, args.json)?;
    debug!(%level, "logging initialized");

    ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Received interrupt; press enter to leave the menu...");
    })
    .context("failed to install signal handler")?;

    let stdin = io::stdin().lock();
    let mut menu = Menu::new(stdin, args.proxy);
    menu.run().context("menu loop failed")
}
