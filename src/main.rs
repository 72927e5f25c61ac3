use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use affixing::config::{
    Config, Granularity, DEFAULT_FINAL_OUT, DEFAULT_INPUT, DEFAULT_PREFIX_OUT, DEFAULT_SUFFIX_OUT,
};
use affixing::split::{ScoringConfig, BRANCH_THRESHOLD, EPSILON};

/// Split every word of a word list into stem and affix using trie statistics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line (a missing file is treated as empty)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory receiving the output files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File name for forward (prefix trie) segmentations
    #[arg(long, default_value = DEFAULT_PREFIX_OUT)]
    prefix_out: PathBuf,

    /// File name for backward (suffix trie) segmentations
    #[arg(long, default_value = DEFAULT_SUFFIX_OUT)]
    suffix_out: PathBuf,

    /// File name receiving a copy of the winning segmentations
    #[arg(long, default_value = DEFAULT_FINAL_OUT)]
    final_out: PathBuf,

    /// Minimum number of distinct continuations at a split point
    #[arg(long, default_value_t = BRANCH_THRESHOLD)]
    threshold: usize,

    /// Tolerance when comparing split scores
    #[arg(long, default_value_t = EPSILON)]
    epsilon: f64,

    /// Use grapheme clusters rather than chars as trie atoms
    #[arg(long)]
    graphemes: bool,

    /// Score words on all available cores
    #[arg(long)]
    threads: bool,

    /// Only report errors
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Debug output
    #[arg(long, short = 'd')]
    debug: bool,

    /// Trace output
    #[arg(long)]
    trace: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }

    fn into_config(self) -> Config {
        Config {
            input: self.input,
            output_dir: self.out_dir,
            prefix_out: self.prefix_out,
            suffix_out: self.suffix_out,
            final_out: self.final_out,
            scoring: ScoringConfig {
                branch_threshold: self.threshold,
                epsilon: self.epsilon,
            },
            granularity: if self.graphemes {
                Granularity::Graphemes
            } else {
                Granularity::Chars
            },
            parallel: self.threads,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = args.into_config();
    let summary = affixing::run(&config)
        .with_context(|| format!("Segmenting {} failed", config.input.display()))?;
    info!("{summary}");
    Ok(())
}
