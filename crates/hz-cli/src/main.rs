//! hzwords: suggest new Chinese words made of characters already studied.
//!
//! Reads the Anki review history, a global word frequency list and CC-CEDICT,
//! then prints either the selected words or tab-separated note records.

use anyhow::{Context, Result};
use clap::Parser;
use hz_core::{Dictionary, HzWordsConfig};
use hz_selector::{SelectionPipeline, SelectionReport};
use hz_sources::output::{write_notes, write_word_list};
use hz_sources::{
    AudioSynthesizer, CorpusSource, DictionaryNoteAuthor, DictionarySource, MediaDirAudio, NoSound,
    ReviewSource,
};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing_subscriber::{fmt, EnvFilter};

/// Hanzi Words
#[derive(Parser, Debug)]
#[command(name = "hzwords")]
#[command(version)]
#[command(about = "Select new vocabulary built from known Hanzi")]
struct Cli {
    /// Config file (defaults to hzwords.toml, from $HOME, ~, .)
    #[arg(short = 'i', long = "config", value_name = "CONFIGFILE")]
    config: Option<PathBuf>,

    /// Output file (default is stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTFILE")]
    output: Option<PathBuf>,

    /// Just output words (no other note fields)
    #[arg(short = 'j', long)]
    justwords: bool,

    /// Verbose output (overrides config)
    #[arg(short, long)]
    verbose: bool,

    /// Don't look up sound files (overrides config)
    #[arg(short = 'n', long)]
    nosounds: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = HzWordsConfig::discover(cli.config.as_deref()).context("reading config")?;
    config.verbose |= cli.verbose;
    config.no_sounds |= cli.nosounds;
    init_logging(config.verbose);

    // Validate everything before touching the inputs.
    let corpus_path = config.global_word_freq_path()?;
    let dictionary_path = config.cc_cedict_path()?;
    let collection = config.anki_collection_path()?;
    let note_type_id = config.require_vocab_deck_id()?;

    let corpus = CorpusSource::new(corpus_path)
        .with_snapshot(config.cache_corpus)
        .load()
        .context("loading global word freq")?;
    let dictionary = DictionarySource::new(dictionary_path)
        .include_proper_nouns(config.include_proper_nouns)
        .load()
        .context("loading CC-CEDICT")?;
    let reviews = ReviewSource::new(collection, note_type_id, config.card_ordinal)
        .load()
        .context("loading Anki vocabulary")?;

    let report = SelectionPipeline::new(config.selection).run(&corpus, &reviews, &dictionary);
    eprintln!();
    for line in report.summary_lines() {
        eprintln!("{line}");
    }

    match &cli.output {
        // Written beside the target and moved into place only once complete.
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let mut tmp = NamedTempFile::new_in(dir)
                .with_context(|| format!("creating {}", path.display()))?;
            write_output(&cli, &config, &report, &dictionary, BufWriter::new(tmp.as_file_mut()))?;
            tmp.persist(path)
                .map_err(|e| e.error)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => write_output(&cli, &config, &report, &dictionary, io::stdout().lock())?,
    }
    Ok(())
}

fn write_output(
    cli: &Cli,
    config: &HzWordsConfig,
    report: &SelectionReport,
    dictionary: &Dictionary,
    out: impl Write,
) -> Result<()> {
    if cli.justwords {
        write_word_list(out, &report.new_words)?;
    } else {
        let audio: Box<dyn AudioSynthesizer> = if config.no_sounds {
            Box::new(NoSound)
        } else {
            Box::new(MediaDirAudio::new(
                config.anki_media_dir()?,
                &config.audio.service,
                &config.audio.lang,
            ))
        };
        let author = DictionaryNoteAuthor::new(dictionary, audio);
        write_notes(out, &report.new_words, &author)?;
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the word list.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
