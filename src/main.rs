// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pdf_keyprep::utils::logging::{format_error, format_info, format_success};
use pdf_keyprep::{
    Config, OutputFormat, PreprocessPipeline, StopwordSet, TextCleaner, Validator,
    export_record, load_model,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pdf_keyprep")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract, clean and lemmatize PDF text for keyword analysis", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all five stages over one PDF
    Run {
        /// PDF to process (defaults to input.pdf_path)
        pdf: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        stopwords: Option<PathBuf>,

        #[arg(short, long, value_name = "NAME")]
        model: Option<String>,

        #[arg(long, value_name = "DIR")]
        model_dir: Option<PathBuf>,

        /// Also write the raw extracted text to this file
        #[arg(long, value_name = "FILE")]
        save_text: Option<PathBuf>,

        /// Write the lemmas here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long)]
        no_progress: bool,
    },

    /// Run only the cleaning stage over a text file
    Clean { file: PathBuf },

    /// Check that the configured stopword list and model can be loaded
    Verify,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pdf_keyprep::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Run {
            pdf,
            stopwords,
            model,
            model_dir,
            save_text,
            output,
            format,
            pretty,
            no_progress,
        } => {
            let mut config = config;
            if let Some(pdf) = pdf {
                config.input.pdf_path = pdf;
            }
            if let Some(stopwords) = stopwords {
                config.language.stopwords_path = stopwords;
            }
            if let Some(model) = model {
                config.language.model = model;
            }
            if let Some(model_dir) = model_dir {
                config.language.model_dir = model_dir;
            }
            if save_text.is_some() {
                config.output.raw_text_path = save_text;
            }
            if output.is_some() {
                config.output.lemmas_path = output;
            }
            if let Some(format) = format {
                config.output.format = format.into();
            }
            config.output.pretty |= pretty;
            config.output.progress &= !no_progress;

            cmd_run(&config, cli.color)?;
        }
        Commands::Clean { file } => {
            cmd_clean(&file)?;
        }
        Commands::Verify => {
            cmd_verify(&config)?;
        }
    }

    Ok(())
}

fn cmd_run(config: &Config, colored: bool) -> Result<()> {
    config.validate()?;

    let pipeline = PreprocessPipeline::from_config(config)
        .context("Failed to load language resources")?
        .with_color(colored);

    let output = pipeline
        .run(&config.input.pdf_path)
        .with_context(|| format!("Failed to preprocess {}", config.input.pdf_path.display()))?;

    let lemma_count = output.lemmas.len();
    let record = output.into_record(pipeline.model_name());

    match &config.output.lemmas_path {
        Some(path) => {
            export_record(path, config.output.format, config.output.pretty, &record)
                .context("Failed to write lemma output")?;
            eprintln!(
                "{}",
                format_success(&format!("{} lemmas written to {}", lemma_count, path.display()))
            );
        }
        None => {
            println!("{}", record.lemmas.joined());
        }
    }

    Ok(())
}

fn cmd_clean(file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let cleaned = TextCleaner::new().clean(&text);
    info!(
        "Cleaned {} -> {} characters: {}",
        text.chars().count(),
        cleaned.chars().count(),
        Validator::truncate_text(&cleaned, 60)
    );
    println!("{}", cleaned);

    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    let mut failures = 0;

    match StopwordSet::load(&config.language.stopwords_path) {
        Ok(stopwords) => eprintln!(
            "{}",
            format_success(&format!(
                "{} stopwords in {}",
                stopwords.len(),
                config.language.stopwords_path.display()
            ))
        ),
        Err(e) => {
            failures += 1;
            eprintln!("{}", format_error(&e.to_string()));
        }
    }

    match load_model(&config.language.model, &config.language.model_dir) {
        Ok(model) => eprintln!(
            "{}",
            format_success(&format!("language model '{}' loaded", model.name()))
        ),
        Err(e) => {
            failures += 1;
            eprintln!("{}", format_error(&e.to_string()));
        }
    }

    eprintln!(
        "{}",
        format_info(&format!("input: {}", config.input.pdf_path.display()))
    );

    if failures > 0 {
        return Err(anyhow::anyhow!("{} resource(s) could not be loaded", failures));
    }

    Ok(())
}
