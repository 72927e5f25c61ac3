//! Turns a [`SplitResult`] into a stem/affix pair.
//!
//! In the forward direction the split is computed over the word as written
//! and the stem is everything up to and including the split atom. In the
//! backward direction the split is computed over the reversed word; the
//! atoms walked in the reversed trie become the affix (put back into
//! reading order) and the remainder of the word becomes the stem.
//!
//! Splits leaving a stem shorter than [`MIN_STEM_LEN`] atoms, or no affix
//! at all, are discarded.

use std::fmt;

use crate::split::SplitResult;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Shortest stem, in atoms, that a split may leave behind.
pub const MIN_STEM_LEN: usize = 2;

/// Which end of the word a trie is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Direction {
    /// Trie over words as written; splits off trailing material after a
    /// common prefix.
    #[default]
    Forward,
    /// Trie over reversed words; finds common suffixes.
    Backward,
}

impl Direction {
    /// Name used for output files and reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Forward => "prefix",
            Direction::Backward => "suffix",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Segmentation of a single word.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct SegmentationRecord {
    pub word: String,
    pub stem: String,
    /// Empty when the word was not split.
    pub affix: String,
    pub score: f64,
    pub support: usize,
}

impl SegmentationRecord {
    /// The record for a word which is left whole.
    pub fn nosplit(word: &str) -> Self {
        Self {
            word: word.to_string(),
            stem: word.to_string(),
            ..Default::default()
        }
    }

    /// Was the word split into a stem and a non-empty affix?
    #[inline]
    pub fn is_split(&self) -> bool {
        !self.affix.is_empty()
    }
}

impl fmt::Display for SegmentationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_split() {
            write!(
                f,
                "{}={}+{}  # score={} support={}",
                self.word, self.stem, self.affix, self.score, self.support
            )
        } else {
            write!(f, "{}={}+  # nosplit", self.word, self.word)
        }
    }
}

/// Segment `word`, whose atoms in reading order are `atoms`, at `split`.
///
/// For [`Direction::Backward`] the split must have been computed over the
/// reversed atoms.
pub fn segment<A: fmt::Display>(
    word: &str,
    atoms: &[A],
    split: SplitResult,
    direction: Direction,
) -> SegmentationRecord {
    let Some(index) = split.index else {
        return SegmentationRecord::nosplit(word);
    };
    let stem_len = match direction {
        Direction::Forward => index + 1,
        Direction::Backward => match atoms.len().checked_sub(index + 1) {
            Some(len) => len,
            None => return SegmentationRecord::nosplit(word),
        },
    };
    if stem_len < MIN_STEM_LEN || stem_len >= atoms.len() {
        return SegmentationRecord::nosplit(word);
    }

    let (stem, affix) = atoms.split_at(stem_len);
    SegmentationRecord {
        word: word.to_string(),
        stem: itertools::join(stem, ""),
        affix: itertools::join(affix, ""),
        score: split.score,
        support: split.support,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_segmentation::UnicodeSegmentation;

    fn split_at(index: usize) -> SplitResult {
        SplitResult {
            index: Some(index),
            score: 1.5,
            support: 4,
        }
    }

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn it_splits_forward_after_the_index() {
        let record = segment("dogma", &chars("dogma"), split_at(2), Direction::Forward);
        assert_eq!(record.stem, "dog");
        assert_eq!(record.affix, "ma");
        assert_eq!(record.score, 1.5);
        assert_eq!(record.support, 4);
        assert!(record.is_split());
    }

    #[test]
    fn it_splits_backward_from_the_end() {
        // index 0 over "sgod" means the affix is the final "s"
        let record = segment("dogs", &chars("dogs"), split_at(0), Direction::Backward);
        assert_eq!(record.stem, "dog");
        assert_eq!(record.affix, "s");

        let record = segment("walking", &chars("walking"), split_at(2), Direction::Backward);
        assert_eq!(record.stem, "walk");
        assert_eq!(record.affix, "ing");
    }

    #[test]
    fn it_leaves_words_without_a_split_whole() {
        let record = segment("dogs", &chars("dogs"), SplitResult::default(), Direction::Forward);
        assert_eq!(record, SegmentationRecord::nosplit("dogs"));
        assert_eq!(record.stem, "dogs");
        assert_eq!(record.score, 0.0);
        assert_eq!(record.support, 0);
    }

    #[test]
    fn it_rejects_single_atom_stems() {
        let record = segment("dogs", &chars("dogs"), split_at(0), Direction::Forward);
        assert_eq!(record, SegmentationRecord::nosplit("dogs"));

        let record = segment("dogs", &chars("dogs"), split_at(2), Direction::Backward);
        assert_eq!(record, SegmentationRecord::nosplit("dogs"));
    }

    #[test]
    fn it_leaves_words_whole_for_out_of_range_splits() {
        let record = segment("dog", &chars("dog"), split_at(7), Direction::Backward);
        assert_eq!(record, SegmentationRecord::nosplit("dog"));

        let record = segment("dog", &chars("dog"), split_at(7), Direction::Forward);
        assert_eq!(record, SegmentationRecord::nosplit("dog"));
    }

    #[test]
    fn it_rejects_empty_affixes() {
        let record = segment("dog", &chars("dog"), split_at(2), Direction::Forward);
        assert_eq!(record, SegmentationRecord::nosplit("dog"));

        let record = segment("dog", &chars("dog"), split_at(2), Direction::Backward);
        assert_eq!(record, SegmentationRecord::nosplit("dog"));
    }

    #[test]
    fn it_measures_stems_in_graphemes() {
        let word = "a̐éö̲s";
        let atoms = word.graphemes(true).collect::<Vec<_>>();
        assert_eq!(atoms.len(), 4);

        let record = segment(word, &atoms, split_at(0), Direction::Backward);
        assert_eq!(record.stem, atoms[..3].concat());
        assert_eq!(record.affix, "s");

        let record = segment(word, &atoms, split_at(1), Direction::Forward);
        assert_eq!(record.stem, atoms[..2].concat());
        assert_eq!(record.affix, atoms[2..].concat());
    }

    #[test]
    fn it_formats_output_lines() {
        let record = segment("cats", &chars("cats"), split_at(2), Direction::Forward);
        let record = SegmentationRecord {
            score: 0.5,
            support: 2,
            ..record
        };
        assert_eq!(record.to_string(), "cats=cat+s  # score=0.5 support=2");
        assert_eq!(
            SegmentationRecord::nosplit("cat").to_string(),
            "cat=cat+  # nosplit"
        );
        assert_eq!(SegmentationRecord::nosplit("").to_string(), "=+  # nosplit");
    }

    #[test]
    fn it_formats_whole_scores_without_a_fraction() {
        let record = segment("dogs", &chars("dogs"), split_at(0), Direction::Backward);
        let record = SegmentationRecord {
            score: 15.0,
            ..record
        };
        assert_eq!(record.to_string(), "dogs=dog+s  # score=15 support=4");
    }

    #[test]
    fn it_names_directions() {
        assert_eq!(Direction::Forward.to_string(), "prefix");
        assert_eq!(Direction::Backward.to_string(), "suffix");
    }
}
