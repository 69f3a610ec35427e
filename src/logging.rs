//! Logger setup for the binaries.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Install the stderr logger.
///
/// Without `-v`, `RUST_LOG` decides and defaults to warnings only. `-v` shows
/// debug output (every git command and API call), `-vv` adds trace output.
pub fn init(verbose: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false);
    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
