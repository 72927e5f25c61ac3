//! Pipeline configuration.
//!
//! [`Config::default`] reads `brown_nouns.txt` from the working directory,
//! scores with a branch threshold of 15 and writes `prefix_out.txt`,
//! `suffix_out.txt` and the winner's copy `trie_q1_output.txt` next to it.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::segment::Direction;
use crate::split::ScoringConfig;

pub const DEFAULT_INPUT: &str = "brown_nouns.txt";
pub const DEFAULT_PREFIX_OUT: &str = "prefix_out.txt";
pub const DEFAULT_SUFFIX_OUT: &str = "suffix_out.txt";
pub const DEFAULT_FINAL_OUT: &str = "trie_q1_output.txt";

/// What a trie edge is labelled with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub prefix_out: PathBuf,
    pub suffix_out: PathBuf,
    pub final_out: PathBuf,
    pub scoring: ScoringConfig,
    pub granularity: Granularity,
    /// Score words on the rayon thread pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            prefix_out: PathBuf::from(DEFAULT_PREFIX_OUT),
            suffix_out: PathBuf::from(DEFAULT_SUFFIX_OUT),
            final_out: PathBuf::from(DEFAULT_FINAL_OUT),
            scoring: ScoringConfig::default(),
            granularity: Granularity::default(),
            parallel: false,
        }
    }
}

impl Config {
    /// Default configuration writing into `output_dir`.
    pub fn with_output_dir<I: AsRef<Path>, O: AsRef<Path>>(input: I, output_dir: O) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Where the records of `direction` are written.
    pub fn output_path(&self, direction: Direction) -> PathBuf {
        match direction {
            Direction::Forward => self.output_dir.join(&self.prefix_out),
            Direction::Backward => self.output_dir.join(&self.suffix_out),
        }
    }

    /// Where the winning records are copied.
    pub fn final_path(&self) -> PathBuf {
        self.output_dir.join(&self.final_out)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        if self.output_path(Direction::Forward) == self.output_path(Direction::Backward) {
            return Err(Error::Config(format!(
                "prefix and suffix output both point at {}",
                self.output_path(Direction::Forward).display()
            )));
        }
        // the final copy must not overwrite another output or the word list
        let final_path = self.final_path();
        for direction in [Direction::Forward, Direction::Backward] {
            if final_path == self.output_path(direction) {
                return Err(Error::Config(format!(
                    "final output {} is also the {direction} output",
                    final_path.display()
                )));
            }
        }
        if final_path == self.input {
            return Err(Error::Config(format!(
                "final output {} would overwrite the input",
                final_path.display()
            )));
        }
        Ok(())
    }
}
