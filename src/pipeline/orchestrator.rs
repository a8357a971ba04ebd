// file: src/pipeline/orchestrator.rs
// description: runs the five preprocessing stages over one PDF
// reference: orchestrates the extract, clean, tokenize, filter, lemmatize workflow

use crate::config::Config;
use crate::error::Result;
use crate::exporter::save_raw_text;
use crate::extractor::PdfExtractor;
use crate::models::{LemmaRecord, LemmaSequence};
use crate::nlp::{LanguageModel, Lemmatizer, StopwordFilter, StopwordSet, Tokenizer, load_model};
use crate::parser::TextCleaner;
use crate::pipeline::progress::{ProgressTracker, RunStats};
use crate::pipeline::stage::Stage;
use crate::utils::StageTimer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub source: PathBuf,
    pub content_hash: String,
    pub lemmas: LemmaSequence,
    pub stats: RunStats,
}

impl PipelineOutput {
    pub fn into_record(self, model: &str) -> LemmaRecord {
        LemmaRecord::new(
            self.source.display().to_string(),
            self.content_hash,
            model.to_string(),
            self.stats,
            self.lemmas,
        )
    }
}

/// Holds the loaded model and stopword list so every run reuses them.
pub struct PreprocessPipeline {
    extractor: PdfExtractor,
    cleaner: TextCleaner,
    tokenizer: Tokenizer,
    stopword_filter: StopwordFilter,
    lemmatizer: Lemmatizer,
    model_name: String,
    raw_text_path: Option<PathBuf>,
    show_progress: bool,
    colored: bool,
}

impl PreprocessPipeline {
    pub fn new(model: Arc<dyn LanguageModel>, stopwords: StopwordSet) -> Self {
        Self {
            extractor: PdfExtractor::default(),
            cleaner: TextCleaner::new(),
            tokenizer: Tokenizer::new(Arc::clone(&model)),
            stopword_filter: StopwordFilter::new(stopwords),
            lemmatizer: Lemmatizer::new(Arc::clone(&model)),
            model_name: model.name().to_string(),
            raw_text_path: None,
            show_progress: false,
            colored: true,
        }
    }

    /// Loads the stopword list and the language model. Either one missing
    /// aborts here, before any PDF is opened.
    pub fn from_config(config: &Config) -> Result<Self> {
        let stopwords = StopwordSet::load(&config.language.stopwords_path)?;
        let model = load_model(&config.language.model, &config.language.model_dir)?;

        Ok(Self::new(model, stopwords)
            .with_max_file_size(config.input.max_file_size_mb)
            .with_raw_text_output(config.output.raw_text_path.clone())
            .with_progress(config.output.progress))
    }

    pub fn with_max_file_size(mut self, max_file_size_mb: usize) -> Self {
        self.extractor = PdfExtractor::new(max_file_size_mb);
        self
    }

    pub fn with_raw_text_output(mut self, path: Option<PathBuf>) -> Self {
        self.raw_text_path = path;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn stopword_count(&self) -> usize {
        self.stopword_filter.stopwords().len()
    }

    pub fn run(&self, pdf_path: &Path) -> Result<PipelineOutput> {
        info!("Preprocessing {}", pdf_path.display());

        let progress = if self.show_progress {
            ProgressTracker::new(self.colored)
        } else {
            ProgressTracker::hidden()
        };
        let mut stats = RunStats::new();

        let extracted = run_stage(&self.extractor, pdf_path.to_path_buf(), &progress, |pdf| {
            (pdf.text.char_count(), "chars")
        })?;
        stats.pages = extracted.page_count;
        stats.raw_chars = extracted.text.char_count();

        if let Some(path) = &self.raw_text_path {
            save_raw_text(path, &extracted.text)?;
        }

        let cleaned = run_stage(&self.cleaner, extracted.text, &progress, |text| {
            (text.char_count(), "chars")
        })?;
        stats.cleaned_chars = cleaned.char_count();

        let tokens = run_stage(&self.tokenizer, cleaned, &progress, |tokens| {
            (tokens.len(), "tokens")
        })?;
        stats.tokens = tokens.len();

        let filtered = run_stage(&self.stopword_filter, tokens, &progress, |text| {
            (text.as_str().split_whitespace().count(), "tokens kept")
        })?;
        stats.tokens_kept = filtered.as_str().split_whitespace().count();

        let lemmas = run_stage(&self.lemmatizer, filtered, &progress, |lemmas| {
            (lemmas.len(), "lemmas")
        })?;
        stats.lemmas = lemmas.len();
        stats.duration_ms = progress.elapsed_ms();

        progress.finish();
        log_run_stats(&stats);

        Ok(PipelineOutput {
            source: extracted.path,
            content_hash: extracted.content_hash,
            lemmas,
            stats,
        })
    }
}

fn run_stage<S: Stage>(
    stage: &S,
    input: S::Input,
    progress: &ProgressTracker,
    measure: impl Fn(&S::Output) -> (usize, &'static str),
) -> Result<S::Output> {
    progress.begin_stage(stage.name());
    let timer = StageTimer::new(stage.name());

    let output = stage.run(input)?;

    let (count, unit) = measure(&output);
    timer.finish_with_count(count, unit);
    progress.complete_stage();
    Ok(output)
}

fn log_run_stats(stats: &RunStats) {
    info!("=== Preprocessing Summary ===");
    info!("Duration: {} ms", stats.duration_ms);
    info!("Pages: {}", stats.pages);
    info!(
        "Characters: {} raw, {} cleaned ({:.1}% retained)",
        stats.raw_chars,
        stats.cleaned_chars,
        stats.retained_char_ratio() * 100.0
    );
    info!(
        "Tokens: {} ({} kept, {:.1}% stopwords)",
        stats.tokens,
        stats.tokens_kept,
        stats.stopword_ratio() * 100.0
    );
    info!("Lemmas: {}", stats.lemmas);
    info!("=============================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PipelineError, ResourceKind};
    use crate::extractor::pdf::fixtures;
    use crate::nlp::{BlankModel, LexiconModel};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn blank_pipeline(stopwords: &[&str]) -> PreprocessPipeline {
        PreprocessPipeline::new(
            Arc::new(BlankModel::new("sv")),
            StopwordSet::from_list(stopwords),
        )
    }

    #[test]
    fn test_zero_page_document_flows_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.pdf");
        fixtures::save(fixtures::empty_pdf(), &path);

        let output = blank_pipeline(&["och"]).run(&path).unwrap();

        assert!(output.lemmas.is_empty());
        assert_eq!(output.stats.pages, 0);
        assert_eq!(output.stats.raw_chars, 0);
        assert_eq!(output.stats.tokens, 0);
        assert_eq!(output.stats.tokens_kept, 0);
    }

    #[test]
    fn test_text_document_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.pdf");
        fixtures::save(fixtures::text_pdf("Hello (draft) World"), &path);

        let model = LexiconModel::from_entries("test", [("World", "world")]);
        let pipeline = PreprocessPipeline::new(Arc::new(model), StopwordSet::from_list(&["hello"]));
        let output = pipeline.run(&path).unwrap();

        assert!(output.lemmas.iter().any(|l| l == "world"));
        assert!(!output.lemmas.iter().any(|l| l.eq_ignore_ascii_case("hello")));
        assert!(!output.lemmas.iter().any(|l| l.contains("draft")));
        assert_eq!(output.stats.pages, 1);
    }

    #[test]
    fn test_restricted_pdf_denied_without_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("restricted.pdf");
        let raw_text_path = dir.path().join("pdf_as_text.txt");
        fixtures::save(
            fixtures::with_permissions(fixtures::text_pdf("Secret"), -64),
            &path,
        );

        let pipeline = blank_pipeline(&[]).with_raw_text_output(Some(raw_text_path.clone()));
        let result = pipeline.run(&path);

        assert!(matches!(result, Err(PipelineError::ExtractionDenied { .. })));
        assert!(!raw_text_path.exists());
    }

    #[test]
    fn test_raw_text_saved_before_cleaning() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.pdf");
        let raw_text_path = dir.path().join("text/pdf_as_text.txt");
        fixtures::save(fixtures::empty_pdf(), &path);

        blank_pipeline(&[])
            .with_raw_text_output(Some(raw_text_path.clone()))
            .run(&path)
            .unwrap();

        assert_eq!(fs::read_to_string(&raw_text_path).unwrap(), "");
    }

    #[test]
    fn test_from_config_missing_stopwords() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default_config();
        config.language.model = "blank:sv".to_string();
        config.language.stopwords_path = dir.path().join("stoppord.csv");

        let result = PreprocessPipeline::from_config(&config);
        assert!(matches!(
            result,
            Err(PipelineError::ResourceMissing {
                kind: ResourceKind::StopwordList,
                ..
            })
        ));
    }

    #[test]
    fn test_from_config_missing_model() {
        let dir = TempDir::new().unwrap();
        let stopwords = dir.path().join("stoppord.csv");
        fs::write(&stopwords, "och\natt\n").unwrap();

        let mut config = Config::default_config();
        config.language.stopwords_path = stopwords;
        config.language.model_dir = dir.path().join("models");

        let result = PreprocessPipeline::from_config(&config);
        assert!(matches!(
            result,
            Err(PipelineError::ResourceMissing {
                kind: ResourceKind::LanguageModel,
                ..
            })
        ));
    }

    #[test]
    fn test_from_config_loads_resources() {
        let dir = TempDir::new().unwrap();
        let stopwords = dir.path().join("stoppord.csv");
        fs::write(&stopwords, "och\natt\n").unwrap();

        let mut config = Config::default_config();
        config.language.model = "blank:sv".to_string();
        config.language.stopwords_path = stopwords;

        let pipeline = PreprocessPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.model_name(), "blank:sv");
        assert_eq!(pipeline.stopword_count(), 2);
    }

    #[test]
    fn test_output_into_record() {
        let output = PipelineOutput {
            source: PathBuf::from("ica2021.pdf"),
            content_hash: "abc".to_string(),
            lemmas: LemmaSequence::new(vec!["butik".to_string()]),
            stats: RunStats::default(),
        };

        let record = output.into_record("blank:sv");
        assert_eq!(record.source_path, "ica2021.pdf");
        assert_eq!(record.model, "blank:sv");
        assert_eq!(record.lemmas.len(), 1);
    }
}
