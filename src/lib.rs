//! Unsupervised stem/affix segmentation of a word list.
//!
//! Every word of a corpus is inserted into two counting tries: one over the
//! words as written, one over the reversed words. Walking a word down a
//! trie, the node where continuations are both numerous and evenly used is
//! taken as the boundary between stem and affix. The forward trie finds
//! trailing material after a shared start, the reversed trie finds shared
//! endings. Whichever direction splits more words wins.
//!
//! The crate is organised leaves first:
//! * trie : [`crate::trie`] counting trie and its builder
//! * iterator : [`crate::iterator`] walking every node of a trie
//! * split : [`crate::split`] best split point of a word
//! * segment : [`crate::segment`] stem/affix records
//! * decision : [`crate::decision`] whole-corpus segmentation and the winner
//! * corpus : [`crate::corpus`] word list input and record output
//!
//! ```
//! use affixing::config::Granularity;
//! use affixing::decision::segment_corpus;
//! use affixing::segment::Direction;
//! use affixing::split::ScoringConfig;
//!
//! let words = ["cat", "cats", "dog", "dogs", "dogma"];
//! let config = ScoringConfig::with_threshold(1);
//! let report = segment_corpus(&words, &config, Granularity::Chars, false);
//!
//! assert_eq!(report.winner, Direction::Forward);
//! assert_eq!(report.forward[1].to_string(), "cats=cat+s  # score=0.5 support=2");
//! ```

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod config;

pub mod corpus;

pub mod decision;

mod error;

pub mod iterator;

pub mod pipeline;

pub mod segment;

pub mod split;

pub mod trie;

pub use error::{Error, Result};
pub use pipeline::{run, run_with_report};
