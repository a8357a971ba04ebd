// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod progress;
mod stage;

pub use orchestrator::{PipelineOutput, PreprocessPipeline};
pub use progress::{ProgressTracker, RunStats, STAGE_COUNT};
pub use stage::Stage;
