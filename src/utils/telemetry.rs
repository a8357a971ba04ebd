// file: src/utils/telemetry.rs
// description: timing of individual pipeline stages
// reference: Production observability best practices

use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct StageTimer {
    stage: &'static str,
    start: Instant,
}

impl StageTimer {
    pub fn new(stage: &'static str) -> Self {
        debug!("Starting stage: {}", stage);
        Self {
            stage,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish_with_count(self, count: usize, unit: &str) -> Duration {
        let elapsed = self.elapsed();
        info!(
            "Completed stage: {} - {} {} in {:.3}s",
            self.stage,
            count,
            unit,
            elapsed.as_secs_f64()
        );
        elapsed
    }
}
