// =============================================================================
// CHART.RS — Chart text → ordered spawn/wait events
//
// A chart is plain text, one `<KIND> <VALUE>` record per line:
//
//   X L        spawn a note in the left lane
//   X R        spawn a note in the right lane
//   X DOUBLE   spawn one note in each lane
//   X 0.5      wait half a second before the next record
//   END 0      end of chart
//
// Only VALUE is inspected, except for the END kind.
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

/// One scheduling instruction from a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    SpawnLeft,
    SpawnRight,
    SpawnDouble,
    /// Seconds to wait before the next event is consumed.
    Wait(f32),
    End,
}

#[derive(Error, Debug)]
pub enum ChartError {
    /// A record that is not a `<KIND> <VALUE>` pair, or whose value is
    /// neither a known token nor a number.
    #[error("chart format error on line {line}: {reason} ({text:?})")]
    Format {
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("failed to read chart '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("chart has no records")]
    Empty,

    #[error("chart does not finish with an END record")]
    MissingEnd,
}

/// Parse chart source text into its event sequence.
///
/// Pure: the same source always yields the same events.
pub fn parse_events(source: &str) -> Result<Vec<ChartEvent>, ChartError> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| parse_record(i + 1, line))
        .collect()
}

fn parse_record(line_no: usize, line: &str) -> Result<ChartEvent, ChartError> {
    let format_error = |reason| ChartError::Format {
        line: line_no,
        text: line.to_string(),
        reason,
    };

    let mut tokens = line.split_whitespace();
    let (Some(kind), Some(value), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(format_error("expected exactly two tokens"));
    };

    let event = match value {
        "L" => ChartEvent::SpawnLeft,
        "R" => ChartEvent::SpawnRight,
        _ if kind == "END" || value == "END" => ChartEvent::End,
        "DOUBLE" => ChartEvent::SpawnDouble,
        _ => match value.parse::<f32>() {
            Ok(secs) if secs.is_finite() => ChartEvent::Wait(secs),
            Ok(_) => return Err(format_error("wait duration must be finite")),
            Err(_) => return Err(format_error("unrecognized value token")),
        },
    };
    Ok(event)
}

// ── Chart ────────────────────────────────────────────────────────────────────

/// An immutable chart source. Every run re-parses it, so a retry always
/// replays the same schedule.
#[derive(Debug, Clone)]
pub struct Chart {
    name: String,
    source: String,
}

impl Chart {
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    /// Read a chart file from disk. The contents are not validated until
    /// [`Chart::events`] is called.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, source })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn source(&self) -> &str { &self.source }

    /// Parse and validate the full schedule before a run starts.
    ///
    /// Besides per-line format errors this rejects empty charts and charts
    /// whose last record is not END, so a run never starts on a schedule
    /// that would run dry.
    pub fn events(&self) -> Result<Vec<ChartEvent>, ChartError> {
        let events = parse_events(&self.source)?;
        match events.last() {
            None => Err(ChartError::Empty),
            Some(ChartEvent::End) => {
                info!("chart '{}' loaded: {} events", self.name, events.len());
                Ok(events)
            }
            Some(_) => Err(ChartError::MissingEnd),
        }
    }
}
