//! Segments a whole corpus in both directions and picks the direction which
//! explains more of it.
//!
//! Both tries are built from the full word list before any word is scored.
//! The winning direction is the one with more split words; on equal counts
//! the backward direction needs a strictly higher score sum to win.

use std::fmt;

use log::debug;
use rayon::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::Granularity;
use crate::segment::{segment, Direction, SegmentationRecord};
use crate::split::ScoringConfig;
use crate::trie::{Trie, TrieAtom};

/// Split statistics of one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tally {
    /// Records with a non-empty affix.
    pub splits: usize,
    pub score_sum: f64,
}

impl Tally {
    pub fn add(&mut self, record: &SegmentationRecord) {
        if record.is_split() {
            self.splits += 1;
            self.score_sum += record.score;
        }
    }

    /// Tally records in order, so equal inputs give bit-equal sums.
    pub fn from_records(records: &[SegmentationRecord]) -> Self {
        let mut tally = Tally::default();
        for record in records {
            tally.add(record);
        }
        tally
    }
}

/// Forward wins unless backward splits more words, or as many words with a
/// higher score sum.
pub fn choose_winner(forward: &Tally, backward: &Tally) -> Direction {
    if backward.splits > forward.splits
        || (backward.splits == forward.splits && backward.score_sum > forward.score_sum)
    {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Segmentations of a corpus in both directions, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub forward: Vec<SegmentationRecord>,
    pub backward: Vec<SegmentationRecord>,
    pub forward_tally: Tally,
    pub backward_tally: Tally,
    pub winner: Direction,
}

impl Report {
    fn new(forward: Vec<SegmentationRecord>, backward: Vec<SegmentationRecord>) -> Self {
        let forward_tally = Tally::from_records(&forward);
        let backward_tally = Tally::from_records(&backward);
        Self {
            winner: choose_winner(&forward_tally, &backward_tally),
            forward,
            backward,
            forward_tally,
            backward_tally,
        }
    }

    pub fn records(&self, direction: Direction) -> &[SegmentationRecord] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    pub fn winning_records(&self) -> &[SegmentationRecord] {
        self.records(self.winner)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            forward_splits: self.forward_tally.splits,
            backward_splits: self.backward_tally.splits,
            winner: self.winner,
        }
    }
}

/// One-line outcome of a run, for the operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub forward_splits: usize,
    pub backward_splits: usize,
    pub winner: Direction,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "written {}_out={} {}_out={} winner={}",
            Direction::Forward,
            self.forward_splits,
            Direction::Backward,
            self.backward_splits,
            self.winner
        )
    }
}

/// Segment every word of `words` in both directions.
///
/// Words are used as given; case folding belongs to whoever loaded them.
/// With `parallel` the words are scored on the rayon pool, which yields the
/// same report as a serial run.
pub fn segment_corpus<S: AsRef<str> + Sync>(
    words: &[S],
    scoring: &ScoringConfig,
    granularity: Granularity,
    parallel: bool,
) -> Report {
    match granularity {
        Granularity::Chars => {
            let atoms = words
                .iter()
                .map(|w| w.as_ref().chars().collect::<Vec<char>>())
                .collect::<Vec<_>>();
            segment_atoms(words, &atoms, scoring, parallel)
        }
        Granularity::Graphemes => {
            let atoms = words
                .iter()
                .map(|w| w.as_ref().graphemes(true).collect::<Vec<&str>>())
                .collect::<Vec<_>>();
            segment_atoms(words, &atoms, scoring, parallel)
        }
    }
}

fn segment_atoms<S, A>(
    words: &[S],
    atoms: &[Vec<A>],
    scoring: &ScoringConfig,
    parallel: bool,
) -> Report
where
    S: AsRef<str> + Sync,
    A: TrieAtom + fmt::Display + Send + Sync,
{
    let forward: Trie<A> = atoms.iter().map(|a| a.iter().copied()).collect();
    let backward: Trie<A> = atoms.iter().map(|a| a.iter().rev().copied()).collect();
    debug!(
        "built tries over {} words ({} forward nodes, {} backward nodes)",
        forward.count(),
        forward.iter().count(),
        backward.iter().count()
    );

    let score_word = |(word, word_atoms): (&S, &Vec<A>)| {
        let word = word.as_ref();
        let fwd = forward.best_split(word_atoms.iter().copied(), scoring);
        let bwd = backward.best_split(word_atoms.iter().rev().copied(), scoring);
        (
            segment(word, word_atoms, fwd, Direction::Forward),
            segment(word, word_atoms, bwd, Direction::Backward),
        )
    };
    let pairs: Vec<(SegmentationRecord, SegmentationRecord)> = if parallel {
        words.par_iter().zip(atoms.par_iter()).map(score_word).collect()
    } else {
        words.iter().zip(atoms.iter()).map(score_word).collect()
    };

    let (forward_records, backward_records) = pairs.into_iter().unzip();
    let report = Report::new(forward_records, backward_records);
    debug!(
        "prefix splits={} score_sum={} suffix splits={} score_sum={}",
        report.forward_tally.splits,
        report.forward_tally.score_sum,
        report.backward_tally.splits,
        report.backward_tally.score_sum
    );
    report
}
