//! Generation logging for reproducibility
//!
//! Appends the parameters of every successful run to a JSON log so any
//! produced bitmap can be regenerated exactly. Logging failures are
//! reported but never fail the run.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read as _};
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::{CliOptions, GradientConfig};

const LOG_FILE_PATH: &str = "generation_log.json";
const LOCK_FILE_PATH: &str = "generation_log.json.lock";

/// Complete record of one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub timestamp: String,
    pub output_file: String,
    pub width_inches: f64,
    pub height_inches: f64,
    pub width_pixels: u32,
    pub height_pixels: u32,
    pub resolution_dpi: u32,
    pub brightness_coefficient: f64,
    pub brightness_power: f64,
    pub reflection: bool,
}

impl GenerationRecord {
    /// Build a record with the current timestamp.
    pub fn new(options: &CliOptions, config: &GradientConfig) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            output_file: options.output_path.display().to_string(),
            width_inches: options.width_inches,
            height_inches: options.height_inches,
            width_pixels: config.width_pixels,
            height_pixels: config.height_pixels,
            resolution_dpi: config.resolution_dpi,
            brightness_coefficient: config.coefficient,
            brightness_power: config.power,
            reflection: config.reflection,
        }
    }
}

/// Log manager for generation records.
///
/// Uses file locking (`File::lock`) so concurrent runs in the same
/// directory cannot corrupt the log.
pub struct GenerationLogger {
    log_file_path: String,
    lock_file_path: String,
}

impl GenerationLogger {
    pub fn new() -> Self {
        Self {
            log_file_path: LOG_FILE_PATH.to_string(),
            lock_file_path: LOCK_FILE_PATH.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_paths(log_path: String, lock_path: String) -> Self {
        Self { log_file_path: log_path, lock_file_path: lock_path }
    }

    /// Append a record, holding an exclusive lock for the whole
    /// read-modify-write cycle.
    pub fn log_generation(&self, record: GenerationRecord) {
        let lock_file = match OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.lock_file_path)
        {
            Ok(f) => f,
            Err(e) => {
                error!("Failed to create lock file {}: {}", self.lock_file_path, e);
                return;
            }
        };

        if let Err(e) = lock_file.lock() {
            error!("Failed to acquire lock on {}: {}", self.lock_file_path, e);
            return;
        }

        match self.locked_append(&record) {
            Ok(_) => info!("Generation logged: {}", record.output_file),
            Err(e) => error!("Failed to save generation log: {}", e),
        }
    }

    fn locked_append(&self, record: &GenerationRecord) -> std::io::Result<()> {
        let mut records = self.load_records();
        records.push(record.clone());

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.log_file_path)?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &records).map_err(std::io::Error::other)
    }

    fn load_records(&self) -> Vec<GenerationRecord> {
        let path = Path::new(&self.log_file_path);

        if !path.exists() {
            return Vec::new();
        }

        let mut file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                error!("Failed to open generation log: {}", e);
                return Vec::new();
            }
        };

        let mut contents = String::new();
        if let Err(e) = file.read_to_string(&mut contents) {
            error!("Failed to read generation log: {}", e);
            return Vec::new();
        }

        let contents = contents.trim();
        if contents.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(contents) {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to parse generation log, starting fresh: {}", e);
                Vec::new()
            }
        }
    }
}

impl Default for GenerationLogger {
    fn default() -> Self {
        Self::new()
    }
}
