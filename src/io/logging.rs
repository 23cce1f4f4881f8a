//! Logger installation for the command-line binary
//!
//! Library code only uses the `log` macros; the binary decides where records
//! go by installing a `fern` dispatcher once at startup.

use log::LevelFilter;

use crate::io::error::Result;

/// Map the number of `-v` flags to a level filter
///
/// `quiet` wins over any verbosity and only lets errors through.
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the stderr dispatcher without installing it
pub fn dispatcher(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
}

/// Install the global logger
///
/// # Errors
///
/// Returns `Logging` if a logger has already been installed
pub fn init(level: LevelFilter) -> Result<()> {
    dispatcher(level).apply()?;
    Ok(())
}
