// file: src/pipeline/stage.rs
// description: typed stage boundary shared by all five pipeline steps
// reference: pipeline orchestration

use crate::error::Result;

/// One step of the preprocessing pipeline.
///
/// Each stage consumes the previous stage's output by value, so the order
/// extract -> clean -> tokenize -> remove stopwords -> lemmatize is enforced
/// by the `Input`/`Output` types at compile time.
pub trait Stage {
    type Input;
    type Output;

    fn name(&self) -> &'static str;

    fn run(&self, input: Self::Input) -> Result<Self::Output>;
}
