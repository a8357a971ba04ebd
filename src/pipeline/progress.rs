// file: src/pipeline/progress.rs
// description: stage progress display and per-run statistics
// reference: uses indicatif for progress bars and tracks processing metrics

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub const STAGE_COUNT: u64 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub pages: usize,
    pub raw_chars: usize,
    pub cleaned_chars: usize,
    pub tokens: usize,
    pub tokens_kept: usize,
    pub lemmas: usize,
    pub duration_ms: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of tokens removed as stopwords, 0.0 when there were none.
    pub fn stopword_ratio(&self) -> f64 {
        if self.tokens == 0 {
            return 0.0;
        }
        (self.tokens - self.tokens_kept) as f64 / self.tokens as f64
    }

    pub fn retained_char_ratio(&self) -> f64 {
        if self.raw_chars == 0 {
            return 0.0;
        }
        self.cleaned_chars as f64 / self.raw_chars as f64
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(colored: bool) -> Self {
        let bar = ProgressBar::new(STAGE_COUNT);
        bar.set_style(stage_style(colored));
        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            start_time: Instant::now(),
        }
    }

    pub fn begin_stage(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    pub fn complete_stage(&self) {
        self.bar.inc(1);
    }

    pub fn completed_stages(&self) -> u64 {
        self.bar.position()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    pub fn finish(&self) {
        if self.completed_stages() >= STAGE_COUNT {
            self.bar.finish_with_message("done");
        } else {
            self.bar.abandon_with_message("aborted".red().to_string());
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.finish();
        }
    }
}

fn stage_style(colored: bool) -> ProgressStyle {
    if colored {
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:20.cyan/blue}] {pos}/{len} {msg}")
            .expect("Failed to create progress bar template")
            .progress_chars("█▓▒░")
    } else {
        ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] [{bar:20}] {pos}/{len} {msg}")
            .expect("Failed to create progress bar template")
            .progress_chars("=>-")
    }
}
