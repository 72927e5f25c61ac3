//! The end-to-end run: load, segment both ways, write.

use log::debug;

use crate::config::Config;
use crate::corpus::{load_corpus, write_report};
use crate::decision::{segment_corpus, Report, Summary};
use crate::error::Result;

/// Segment the configured word list and write all three output files.
pub fn run(config: &Config) -> Result<Summary> {
    run_with_report(config).map(|report| report.summary())
}

/// As [`run`], also handing back every record.
pub fn run_with_report(config: &Config) -> Result<Report> {
    config.validate()?;
    let words = load_corpus(&config.input);
    debug!(
        "segmenting {} words (threshold {}, {:?}, parallel: {})",
        words.len(),
        config.scoring.branch_threshold,
        config.granularity,
        config.parallel
    );
    let report = segment_corpus(&words, &config.scoring, config.granularity, config.parallel);
    write_report(config, &report)?;
    Ok(report)
}
