//! Conversion driver: read `enums.defs`, translate once, back up and write
//! `Enums.elm`.

use std::fs;

use log::{debug, info};

use crate::config::{BACKUP_FILE, Config, INPUT_FILE, OUTPUT_FILE};
use crate::error::DriverError;
use crate::processor::Translator;

/// What a successful run did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// An older `Enums.elm` was moved to `Enums.elm.bak`.
    pub backed_up: bool,
}

pub struct Driver<T> {
    config: Config,
    translator: T,
}

impl<T: Translator> Driver<T> {
    pub fn new(config: Config, translator: T) -> Self {
        Self { config, translator }
    }

    /// Perform the single request/response cycle of one invocation.
    /// Consumes the driver so a second request cannot be issued.
    pub fn run(self) -> Result<Report, DriverError> {
        let input = self.config.input_path();
        debug!("reading {}", input.display());
        let contents = fs::read_to_string(&input)
            .map_err(|e| DriverError::from_read_error(INPUT_FILE, e))?;
        info!("read {} bytes from ./{INPUT_FILE}", contents.len());

        let generated =
            self.translator
                .translate(&contents)
                .map_err(|source| DriverError::Syntax {
                    path: INPUT_FILE.to_string(),
                    source,
                })?;
        debug!("translator produced {} bytes", generated.len());

        let output = self.config.output_path();
        let backed_up = output.exists();
        if backed_up {
            fs::rename(&output, self.config.backup_path()).map_err(|source| {
                DriverError::Backup {
                    from: OUTPUT_FILE.to_string(),
                    to: BACKUP_FILE.to_string(),
                    source,
                }
            })?;
            info!("moved ./{OUTPUT_FILE} to ./{BACKUP_FILE}");
        }

        fs::write(&output, &generated).map_err(|source| DriverError::Write {
            path: OUTPUT_FILE.to_string(),
            source,
        })?;
        info!("wrote {} bytes to ./{OUTPUT_FILE}", generated.len());

        Ok(Report { backed_up })
    }
}
