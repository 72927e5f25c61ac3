//! Split scoring over a counting trie.
//!
//! Walking a word down a trie, each node reached offers a candidate split
//! point: the word's atoms up to and including that node form the stem,
//! the rest form the affix. A candidate is only considered when the node
//! branches into at least `branch_threshold` distinct continuations. It is
//! then scored as
//!
//! ```text
//! score = (1 - max_child_count / node_count) * branching
//! ```
//!
//! so nodes whose continuations are both numerous and evenly used score
//! highest. Scores within `epsilon` of each other are ties, and ties go to
//! the deeper node.
//!
//! ```
//! use affixing::split::ScoringConfig;
//! use affixing::trie::Trie;
//!
//! let trie: Trie<char> = ["cat", "cats", "dog", "dogs", "dogma"]
//!     .iter()
//!     .map(|w| w.chars())
//!     .collect();
//! let config = ScoringConfig::with_threshold(1);
//! let split = trie.best_split("cats".chars(), &config);
//! assert_eq!(split.index, Some(2));
//! assert_eq!(split.score, 0.5);
//! assert_eq!(split.support, 2);
//! ```

use crate::error::{Error, Result};
use crate::trie::{Trie, TrieAtom};

/// Minimum number of distinct continuations a node needs to be a split
/// candidate.
pub const BRANCH_THRESHOLD: usize = 15;

/// Tolerance used when comparing scores.
pub const EPSILON: f64 = 1e-9;

/// Parameters of the split scorer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringConfig {
    pub branch_threshold: usize,
    pub epsilon: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            branch_threshold: BRANCH_THRESHOLD,
            epsilon: EPSILON,
        }
    }
}

impl ScoringConfig {
    /// Default scoring with a different branch threshold.
    pub fn with_threshold(branch_threshold: usize) -> Self {
        Self {
            branch_threshold,
            ..Default::default()
        }
    }

    /// Reject an epsilon which would make every comparison meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::Config(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Best split point found for a word.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplitResult {
    /// Index of the last atom of the stem, `None` if no node qualified.
    pub index: Option<usize>,
    pub score: f64,
    /// Pass count of the node at `index`.
    pub support: usize,
}

impl SplitResult {
    // A missing index compares as -1, so any qualifying depth wins a tie
    // against it.
    fn improved_by(&self, index: usize, score: f64, epsilon: f64) -> bool {
        score > self.score + epsilon
            || ((score - self.score).abs() < epsilon && self.index.map_or(true, |b| index > b))
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Find the best split point of `key`. The walk stops at the first
    /// atom which has no matching child.
    pub fn best_split<K: IntoIterator<Item = A>>(
        &self,
        key: K,
        config: &ScoringConfig,
    ) -> SplitResult {
        let mut node = &self.head;
        let mut best = SplitResult::default();

        for (i, atom) in key.into_iter().enumerate() {
            node = match node.child(atom) {
                Some(n) => n,
                None => break,
            };
            let branching = node.children.len();
            if branching < config.branch_threshold {
                continue;
            }
            if node.count == 0 {
                continue;
            }

            let frac = 1.0 - node.max_child_count() as f64 / node.count as f64;
            let score = frac * branching as f64;

            if best.improved_by(i, score, config.epsilon) {
                best = SplitResult {
                    index: Some(i),
                    score,
                    support: node.count,
                };
            }
        }
        best
    }
}
