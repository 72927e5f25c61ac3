//! Reading word lists and writing segmentation records.
//!
//! A word list holds one word per line. Each line is lowercased once, as it
//! is loaded. A word list which cannot be read is treated as empty.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::config::Config;
use crate::decision::Report;
use crate::error::{Error, Result};
use crate::segment::{Direction, SegmentationRecord};

/// Read one lowercased word per line. Line endings (`\n` or `\r\n`) are
/// stripped, invalid UTF-8 is replaced, and empty lines are kept as empty
/// words.
pub fn read_corpus<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut words = vec![];
    let mut buf = vec![];
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        words.push(String::from_utf8_lossy(&buf).to_lowercase());
    }
    Ok(words)
}

/// Load the word list at `path`. Missing or unreadable files yield an empty
/// corpus.
pub fn load_corpus(path: &Path) -> Vec<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("cannot open {}: {e}; continuing with an empty corpus", path.display());
            return vec![];
        }
    };
    match read_corpus(BufReader::new(file)) {
        Ok(words) => {
            debug!("loaded {} words from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            warn!("cannot read {}: {e}; continuing with an empty corpus", path.display());
            vec![]
        }
    }
}

/// Write one formatted line per record.
pub fn write_records<W: Write>(mut writer: W, records: &[SegmentationRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()
}

fn write_file(path: &Path, records: &[SegmentationRecord]) -> Result<()> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    write_records(BufWriter::new(file), records).map_err(to_error)
}

/// Write both directions' records, then copy the winner's file to the final
/// output.
pub fn write_report(config: &Config, report: &Report) -> Result<()> {
    fs::create_dir_all(&config.output_dir).map_err(|source| Error::Write {
        path: config.output_dir.clone(),
        source,
    })?;
    for direction in [Direction::Forward, Direction::Backward] {
        let path = config.output_path(direction);
        write_file(&path, report.records(direction))?;
        debug!("wrote {} records to {}", report.records(direction).len(), path.display());
    }

    let chosen = config.output_path(report.winner);
    let final_path = config.final_path();
    fs::copy(&chosen, &final_path).map_err(|source| Error::Copy {
        from: chosen.clone(),
        to: final_path.clone(),
        source,
    })?;
    Ok(())
}
