//! Command-line interface to the trigram encoding detector.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use encoding_detector::{train, LanguageModel};

#[derive(Debug, Parser)]
/// Detect the character encoding of text files by comparing their
/// letter-trigram statistics against trained language models. UTF-8 is
/// never tested; try that first.
#[command(name = "encdetect", version)]
enum Args {
    /// Rank every candidate encoding for a file.
    #[command(name = "detect")]
    Detect {
        /// Path to the file to examine.
        file: PathBuf,

        /// Trained model files (JSON) to test against, instead of the
        /// built-in English and Russian models. May be repeated.
        #[arg(long = "model")]
        models: Vec<PathBuf>,

        /// Show only the best N candidates.
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Detect the encoding of a file and print it decoded to UTF-8.
    #[command(name = "decode")]
    Decode {
        /// Path to the file to decode.
        file: PathBuf,

        /// Trained model files (JSON) to test against. May be repeated.
        #[arg(long = "model")]
        models: Vec<PathBuf>,
    },

    /// List the names of every encoding the registry knows about.
    #[command(name = "list")]
    List,

    /// Train a language model from UTF-8 corpus files and write it as JSON.
    #[command(name = "train")]
    Train {
        /// Name of the language being trained, e.g. "French".
        language: String,

        /// UTF-8 text files to learn from.
        corpus: Vec<PathBuf>,

        /// Discard trigrams rarer than this share of the corpus.
        #[arg(long, default_value_t = train::DEFAULT_PRUNE_SHARE)]
        prune_share: f64,

        /// Where to write the model (defaults to <language>.json).
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args {
        Args::Detect { file, models, top } => cmd_detect(&file, &models, top),
        Args::Decode { file, models } => cmd_decode(&file, &models),
        Args::List => {
            for name in encoding_detector::codecs::encoding_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Args::Train {
            language,
            corpus,
            prune_share,
            output,
        } => cmd_train(&language, &corpus, prune_share, output),
    }
}

/// Load the models named on the command line; an empty list means "use the
/// built-in defaults" further down the stack.
fn load_models(paths: &[PathBuf]) -> Result<Vec<LanguageModel>> {
    paths
        .iter()
        .map(|p| {
            LanguageModel::from_path(p)
                .with_context(|| format!("could not load model {}", p.display()))
        })
        .collect()
}

fn cmd_detect(file: &PathBuf, model_paths: &[PathBuf], top: usize) -> Result<()> {
    let models = load_models(model_paths)?;
    let results = encoding_detector::detect_path(file, &models)?;
    if results.is_empty() {
        bail!("no candidate encoding produced any text");
    }
    for result in results.iter().take(top) {
        println!(
            "{:<16} {:<12} {:.6}",
            result.encoding, result.language, result.score
        );
    }
    Ok(())
}

fn cmd_decode(file: &PathBuf, model_paths: &[PathBuf]) -> Result<()> {
    let models = load_models(model_paths)?;
    match encoding_detector::decode_path(file, &models)? {
        Some(decoded) => {
            eprintln!("# {} ({})", decoded.encoding, decoded.language);
            io::stdout().write_all(decoded.text.as_bytes())?;
            Ok(())
        }
        None => bail!("could not confidently determine the encoding"),
    }
}

fn cmd_train(
    language: &str,
    corpus: &[PathBuf],
    prune_share: f64,
    output: Option<PathBuf>,
) -> Result<()> {
    if corpus.is_empty() {
        bail!("no corpus files given");
    }
    let model = train::train(
        language,
        corpus.iter().map(|p| p.as_path()),
        prune_share,
    )
    .with_context(|| format!("could not train a model for {}", language))?;
    let output =
        output.unwrap_or_else(|| PathBuf::from(format!("{}.json", language.to_lowercase())));
    model
        .write_to(&output)
        .with_context(|| format!("could not write {}", output.display()))?;
    println!(
        "{}: {} trigrams kept, written to {}",
        language,
        model.table.distinct(),
        output.display()
    );
    Ok(())
}
