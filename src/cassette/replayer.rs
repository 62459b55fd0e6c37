//! Replays recorded content exchanges from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Exchange};

/// Serves recorded exchanges sequentially per method name.
pub struct CassetteReplayer {
    /// Per-method queue of exchanges, in recorded order.
    queues: HashMap<String, Vec<Exchange>>,
    /// Per-method cursor tracking position.
    cursors: HashMap<String, usize>,
}

impl CassetteReplayer {
    /// Creates a replayer over a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<String, Vec<Exchange>> = HashMap::new();
        for exchange in &cassette.exchanges {
            queues.entry(exchange.method.clone()).or_default().push(exchange.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Loads a cassette file and creates a replayer over it.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read cassette {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("failed to parse cassette {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Returns the next recorded exchange for the given method.
    ///
    /// # Panics
    ///
    /// Panics when the cassette has no (more) exchanges for the method,
    /// printing what was requested versus what the cassette holds.
    pub fn next_exchange(&mut self, method: &str) -> &Exchange {
        let queue = self.queues.get(method).unwrap_or_else(|| {
            let available: Vec<&str> = self.queues.keys().map(String::as_str).collect();
            panic!(
                "Cassette exhausted: no exchanges recorded for method {method:?}. \
                 Available methods: [{}]",
                available.join(", ")
            );
        });

        let cursor = self.cursors.get_mut(method).expect("cursor must exist");
        assert!(
            *cursor < queue.len(),
            "Cassette exhausted: all {count} exchanges for method {method:?} have been \
             consumed. Last exchange was seq={last_seq}.",
            count = queue.len(),
            last_seq = queue.last().map_or(0, |e| e.seq),
        );

        let exchange = &queue[*cursor];
        *cursor += 1;
        exchange
    }
}
