use log::{debug, info};

/// Scoped logger that tags every record with the pipeline step producing it.
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &'static str {
        self.scope
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    /// Logs the length and value range of a computed series.
    pub fn record_series(&self, label: &str, values: &[f64]) {
        match (values.first(), values.last()) {
            (Some(first), Some(last)) => debug!(
                "[{}] {} -> {} points, first {:.4}, last {:.4}",
                self.scope,
                label,
                values.len(),
                first,
                last
            ),
            _ => debug!("[{}] {} -> empty", self.scope, label),
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("curves")
    }
}
