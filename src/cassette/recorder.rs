//! Records content exchanges into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Exchange};

/// Collects exchanges and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    exchanges: Vec<Exchange>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), exchanges: Vec::new(), next_seq: 0 }
    }

    /// Records one exchange. The `seq` field is assigned automatically.
    pub fn record(
        &mut self,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let exchange = Exchange { seq: self.next_seq, method: method.into(), input, output };
        self.next_seq += 1;
        self.exchanges.push(exchange);
    }

    /// Finishes recording and writes the cassette YAML file to disk.
    ///
    /// Drains the collected exchanges; a recorder can be finished once.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(&mut self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: std::mem::take(&mut self.name),
            recorded_at: Utc::now(),
            exchanges: std::mem::take(&mut self.exchanges),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}
