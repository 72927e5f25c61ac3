//! End-to-end runs through real files.

use std::fs;
use std::path::Path;

use affixing::config::{Config, Granularity};
use affixing::segment::Direction;
use affixing::split::ScoringConfig;
use affixing::{run, run_with_report, Error};

fn write_words(dir: &Path, words: &[&str]) -> std::path::PathBuf {
    let path = dir.join("words.txt");
    fs::write(&path, words.join("\n") + "\n").expect("writing corpus");
    path
}

fn config_for(dir: &Path, input: &Path, threshold: usize) -> Config {
    Config {
        scoring: ScoringConfig::with_threshold(threshold),
        ..Config::with_output_dir(input, dir)
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("reading output")
}

#[test]
fn it_writes_prefix_suffix_and_final_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["Cat", "CATS", "dog", "dogs", "dogma"]);
    let config = config_for(dir.path(), &input, 1);

    let summary = run(&config).unwrap();
    assert_eq!(summary.forward_splits, 3);
    assert_eq!(summary.backward_splits, 2);
    assert_eq!(summary.winner, Direction::Forward);
    assert_eq!(
        summary.to_string(),
        "written prefix_out=3 suffix_out=2 winner=prefix"
    );

    let prefix = read(&config.output_path(Direction::Forward));
    let lines = prefix.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "cat=cat+  # nosplit");
    assert_eq!(lines[1], "cats=cat+s  # score=0.5 support=2");

    let suffix = read(&config.output_path(Direction::Backward));
    assert_eq!(suffix.lines().nth(3), Some("dogs=dog+s  # score=1 support=2"));

    assert_eq!(fs::read(config.final_path()).unwrap(), prefix.into_bytes());
}

#[test]
fn it_copies_the_suffix_file_when_backward_wins() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["dogs", "cats", "pens", "cups"]);
    let config = config_for(dir.path(), &input, 2);

    let report = run_with_report(&config).unwrap();
    assert_eq!(report.forward_tally.splits, 0);
    assert_eq!(report.backward_tally.splits, 4);
    assert_eq!(report.winner, Direction::Backward);
    assert_eq!(
        fs::read(config.final_path()).unwrap(),
        fs::read(config.output_path(Direction::Backward)).unwrap()
    );
    let suffix = read(&config.output_path(Direction::Backward));
    assert_eq!(suffix.lines().next(), Some("dogs=dog+s  # score=3 support=4"));
    assert_eq!(suffix.lines().last(), Some("cups=cup+s  # score=3 support=4"));
}

#[test]
fn it_treats_a_missing_corpus_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path(), &dir.path().join("absent.txt"), 15);

    let summary = run(&config).unwrap();
    assert_eq!(summary.forward_splits, 0);
    assert_eq!(summary.backward_splits, 0);
    assert_eq!(summary.winner, Direction::Forward);
    for path in [
        config.output_path(Direction::Forward),
        config.output_path(Direction::Backward),
        config.final_path(),
    ] {
        assert_eq!(read(&path), "");
    }
}

#[test]
fn it_leaves_small_corpora_whole_at_the_default_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["cat", "cats"]);
    let config = Config::with_output_dir(input.as_path(), dir.path());

    run(&config).unwrap();
    assert_eq!(
        read(&config.final_path()),
        "cat=cat+  # nosplit\ncats=cats+  # nosplit\n"
    );
}

#[test]
fn it_produces_identical_files_on_rerun() {
    let dir = tempfile::tempdir().unwrap();
    let stems = ["walk", "talk", "jump", "play", "cook", "look"];
    let endings = ["", "s", "ed", "ing", "er", "ers"];
    let words = stems
        .iter()
        .flat_map(|s| endings.iter().map(move |e| format!("{s}{e}")))
        .collect::<Vec<_>>();
    let refs = words.iter().map(String::as_str).collect::<Vec<_>>();
    let input = write_words(dir.path(), &refs);

    let first = config_for(dir.path(), &input, 3);
    run(&first).unwrap();
    let second = Config {
        output_dir: dir.path().join("again"),
        parallel: true,
        ..first.clone()
    };
    run(&second).unwrap();

    for direction in [Direction::Forward, Direction::Backward] {
        assert_eq!(
            fs::read(first.output_path(direction)).unwrap(),
            fs::read(second.output_path(direction)).unwrap()
        );
    }
    assert_eq!(
        fs::read(first.final_path()).unwrap(),
        fs::read(second.final_path()).unwrap()
    );
}

#[test]
fn it_segments_grapheme_clusters() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["ab̃x", "ab̃y", "ab̃z"]);
    let config = Config {
        granularity: Granularity::Graphemes,
        ..config_for(dir.path(), &input, 3)
    };

    let report = run_with_report(&config).unwrap();
    assert_eq!(report.forward_tally.splits, 3);
    assert_eq!(report.forward[0].affix, "x");
    assert_eq!(report.forward[0].stem, "ab̃");
}

#[test]
fn it_rejects_an_invalid_epsilon() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["cat"]);
    let config = Config {
        scoring: ScoringConfig {
            branch_threshold: 15,
            epsilon: f64::INFINITY,
        },
        ..Config::with_output_dir(input.as_path(), dir.path())
    };
    assert!(matches!(run(&config), Err(Error::Config(_))));
}

#[test]
fn it_refuses_a_final_output_that_overwrites_a_direction_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_words(dir.path(), &["cat", "cats", "dog", "dogs", "dogma"]);
    let config = Config {
        final_out: "suffix_out.txt".into(),
        ..config_for(dir.path(), &input, 1)
    };

    assert!(matches!(run(&config), Err(Error::Config(_))));
    assert!(!config.output_path(Direction::Backward).exists());
    assert!(!config.output_path(Direction::Forward).exists());
}
