//! Append-only log of the distances and paths computed for every source.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path as FilePath, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    graphs::{Distance, Vertex},
    search::dijkstra_data::{DijkstraDataVec, Path},
};

/// Shortest paths from one source in one iteration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub iteration: u32,
    pub source: Vertex,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub distances: Vec<Option<Distance>>,
    pub paths: Vec<Option<Path>>,
}

impl SourceRecord {
    pub fn new(iteration: u32, source: Vertex, data: &DijkstraDataVec) -> SourceRecord {
        SourceRecord {
            iteration,
            source,
            timestamp: now(),
            distances: data.get_distances(),
            paths: data.get_paths(),
        }
    }
}

fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

pub trait HistorySink {
    fn record(&mut self, record: &SourceRecord) -> Result<()>;

    /// Flushes everything recorded so far.
    fn finish(&mut self) -> Result<()>;
}

/// Keeps every record in memory.
impl HistorySink for Vec<SourceRecord> {
    fn record(&mut self, record: &SourceRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryFormat {
    /// Human readable blocks, one per source.
    Text,
    /// One JSON object per source and line.
    Json,
}

/// Opens `path` for writing, truncating it, and wraps it in a sink of the
/// given format.
pub fn create_history(path: &FilePath, format: HistoryFormat) -> Result<Box<dyn HistorySink>> {
    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    let writer = BufWriter::new(file);
    let sink: Box<dyn HistorySink> = match format {
        HistoryFormat::Text => Box::new(TextHistory::new(writer, path)),
        HistoryFormat::Json => Box::new(JsonHistory::new(writer, path)),
    };
    Ok(sink)
}

/// Writes one block per record:
///
/// ```text
/// --------------------------------------------------
/// 1700000000.000000
///
/// Router --- Minimum Distance --- Path
/// 0 -> 0		0		0
/// 0 -> 1		5		0 1
/// ```
///
/// Unreachable destinations show the distance `Distance::MAX` and no path.
pub struct TextHistory<W: Write> {
    writer: W,
    path: PathBuf,
}

impl<W: Write> TextHistory<W> {
    /// `path` only names the destination in error messages.
    pub fn new(writer: W, path: &FilePath) -> TextHistory<W> {
        TextHistory {
            writer,
            path: path.to_path_buf(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, record: &SourceRecord) -> std::io::Result<()> {
        write!(self.writer, "\n{}", "-".repeat(50))?;
        write!(self.writer, "\n{:.6}", record.timestamp)?;
        write!(self.writer, "\n\nRouter --- Minimum Distance --- Path")?;

        for (destination, distance) in record.distances.iter().enumerate() {
            write!(
                self.writer,
                "\n{} -> {}\t\t{}\t\t{}",
                record.source,
                destination,
                distance.unwrap_or(Distance::MAX),
                record.source
            )?;
            if let Some(Some(path)) = record.paths.get(destination) {
                let rest = path
                    .vertices
                    .iter()
                    .skip(1)
                    .map(|vertex| format!(" {}", vertex))
                    .join("");
                write!(self.writer, "{}", rest)?;
            }
        }

        Ok(())
    }
}

impl<W: Write> HistorySink for TextHistory<W> {
    fn record(&mut self, record: &SourceRecord) -> Result<()> {
        self.write_record(record)
            .map_err(|source| Error::io(&self.path, source))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .map_err(|source| Error::io(&self.path, source))
    }
}

/// Writes one JSON object per record and line.
pub struct JsonHistory<W: Write> {
    writer: W,
    path: PathBuf,
}

impl<W: Write> JsonHistory<W> {
    /// `path` only names the destination in error messages.
    pub fn new(writer: W, path: &FilePath) -> JsonHistory<W> {
        JsonHistory {
            writer,
            path: path.to_path_buf(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HistorySink for JsonHistory<W> {
    fn record(&mut self, record: &SourceRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record).map_err(|error| {
            if error.is_io() {
                Error::io(&self.path, error.into())
            } else {
                Error::Json(error)
            }
        })?;
        self.writer
            .write_all(b"\n")
            .map_err(|source| Error::io(&self.path, source))
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|source| Error::io(&self.path, source))
    }
}
