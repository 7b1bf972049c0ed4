pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod model;
pub mod processor;
pub mod writer;

use crate::config::{BACKUP_FILE, Config, OUTPUT_FILE};
use crate::driver::Driver;
use crate::processor::ElmTranslator;

/// Run one conversion in the current directory, print the outcome and
/// return the process exit status.
pub fn run() -> i32 {
    // 1. ── Read + translate + write ──────────────────────────────────
    let result = Driver::new(Config::current_dir(), ElmTranslator).run();

    // 2. ── Report ────────────────────────────────────────────────────
    match result {
        Ok(report) => {
            if report.backed_up {
                println!("Info: Old version of ./{OUTPUT_FILE} moved to ./{BACKUP_FILE}");
            }
            println!("Success: types and decoders written to ./{OUTPUT_FILE}");
            0
        }
        Err(e) => {
            log::debug!("conversion failed: {e:?}");
            eprintln!("{e}");
            e.exit_code()
        }
    }
}
