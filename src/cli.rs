// src/cli.rs
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    config::{CorpusConfig, consts::{DEFAULT_CLEAN_DIR, DEFAULT_OUT_DIR}},
    error::{CorpusError, Result},
    extract::extract_filings,
    progress::{LogProgress, format_tallies},
    runner,
    sink::DirectorySink,
    source::{DirSource, Document, FilingSource, JsonlSource},
};

#[derive(Parser, Debug)]
#[command(name = "legal_corpus")]
#[command(about = "Build labeled legal test matters from corpus dumps and EDGAR filings")]
#[command(version)]
pub struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan sources and write matters
    Build(BuildArgs),
    /// Split raw EDGAR submissions into cleaned text files
    Extract(ExtractArgs),
    /// Print the default configuration as TOML
    Config,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// JSON Lines file or directory (`.jsonl`, `.jsonl.gz`)
    #[arg(long = "jsonl", value_name = "PATH")]
    pub jsonl: Vec<PathBuf>,

    /// Directory of `.txt` / `.htm` documents
    #[arg(long = "dir", value_name = "PATH")]
    pub dirs: Vec<PathBuf>,

    /// EDGAR download tree containing `full-submission.txt` files
    #[arg(long = "filings", value_name = "PATH")]
    pub filings: Vec<PathBuf>,

    /// Output directory for matters
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub target_matters: Option<usize>,

    #[arg(long)]
    pub docs_per_matter: Option<usize>,

    #[arg(long)]
    pub min_length: Option<usize>,

    /// JSON field holding the document text
    #[arg(long)]
    pub text_field: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Root of the raw download (`<ticker>/<form>/<accession>/full-submission.txt`)
    #[arg(long)]
    pub filings: PathBuf,

    #[arg(short, long, default_value = DEFAULT_CLEAN_DIR)]
    pub out: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    crate::log::init(cli.verbose);
    match cli.command {
        Command::Build(args) => build(args),
        Command::Extract(args) => {
            let mut progress = LogProgress::new(1);
            let summary = extract_filings(&args.filings, &args.out, Some(&mut progress))?;
            println!("Submissions: {}", summary.submissions);
            println!("Files written: {}", summary.files_written.len());
            println!("Output: {}", args.out.display());
            Ok(())
        }
        Command::Config => {
            print!("{}", CorpusConfig::default().to_toml()?);
            Ok(())
        }
    }
}

/// File config (or defaults) with command-line overrides applied.
pub fn effective_config(args: &BuildArgs) -> Result<CorpusConfig> {
    let mut cfg = match &args.config {
        Some(path) => CorpusConfig::load(path)?,
        None => CorpusConfig::default(),
    };
    if let Some(n) = args.target_matters { cfg.target_matters = n; }
    if let Some(n) = args.docs_per_matter { cfg.docs_per_matter = n; }
    if let Some(n) = args.min_length { cfg.min_doc_length = n; }
    cfg.validate()?;
    Ok(cfg)
}

fn open_sources(args: &BuildArgs) -> Result<Box<dyn Iterator<Item = Document>>> {
    if args.jsonl.is_empty() && args.dirs.is_empty() && args.filings.is_empty() {
        return Err(CorpusError::Config(s!("no input given (use --jsonl, --dir or --filings)")));
    }

    let mut chain: Box<dyn Iterator<Item = Document>> = Box::new(std::iter::empty());
    for p in &args.jsonl {
        let mut src = JsonlSource::open(p)?;
        if let Some(field) = &args.text_field {
            src = src.with_field(field.clone());
        }
        chain = Box::new(chain.chain(src));
    }
    for p in &args.dirs {
        chain = Box::new(chain.chain(DirSource::open(p)?));
    }
    for p in &args.filings {
        chain = Box::new(chain.chain(FilingSource::open(p)?));
    }
    Ok(chain)
}

fn build(args: BuildArgs) -> Result<()> {
    let cfg = effective_config(&args)?;
    let source = open_sources(&args)?;
    let mut sink = DirectorySink::new(&args.out);
    let mut progress = LogProgress::new(cfg.progress_every);

    let summary = runner::run(source, &cfg, &mut sink, Some(&mut progress))?;

    println!("{}", "=".repeat(50));
    println!("DATASET GENERATION COMPLETE");
    println!("{}", "=".repeat(50));
    println!("Documents scanned: {}", summary.docs_scanned);
    println!("Matters: {}", format_tallies(&summary.matters));
    println!("Saved to: {}/", sink.root().display());
    Ok(())
}
