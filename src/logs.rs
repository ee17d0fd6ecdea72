use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named scope a structured log line was emitted within. Spans carry their
/// own attributes; the one we care about is the swap id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSpan {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_id: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The `fields` object of a structured log record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFields {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_id: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A log line the daemon emitted in its structured JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredLog {
    pub timestamp: String,
    pub level: String,
    pub fields: LogFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spans: Option<Vec<LogSpan>>,
}

/// One log line as held by the UI: decoded when the daemon's structured
/// format parses, kept verbatim otherwise. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogRecord {
    Structured(StructuredLog),
    Raw(String),
}

impl LogRecord {
    /// Whether this record pertains to the given swap.
    ///
    /// Structured records match on `fields.swap_id` or on any span carrying
    /// the swap id. Raw lines fall back to substring matching, deliberately
    /// loose for old log files that predate the structured format. Anything
    /// that is not clearly a match is not a match.
    pub fn belongs_to_swap(&self, swap_id: &str) -> bool {
        match self {
            LogRecord::Raw(line) => line.contains(swap_id),
            LogRecord::Structured(record) => {
                record.fields.swap_id.as_deref() == Some(swap_id)
                    || record
                        .spans
                        .as_deref()
                        .unwrap_or_default()
                        .iter()
                        .any(|span| span.swap_id.as_deref() == Some(swap_id))
            }
        }
    }
}

/// Decode one raw line from the daemon's log stream.
///
/// A line that does not parse as a [`StructuredLog`] (bad syntax, wrong
/// shape) is kept verbatim as [`LogRecord::Raw`]. That fallback is a normal
/// outcome, not an error, and is never surfaced to the user. Pure; feeding a
/// re-serialized structured record back in reproduces it field for field.
pub fn parse_log_line(raw: &str) -> LogRecord {
    match serde_json::from_str::<StructuredLog>(raw) {
        Ok(record) => LogRecord::Structured(record),
        Err(_) => LogRecord::Raw(raw.to_string()),
    }
}

/// Decode a newline-delimited buffer as pushed over the daemon's event
/// channel. Each line is parsed independently; blank lines are dropped.
pub fn parse_log_buffer(buffer: &str) -> Vec<LogRecord> {
    buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_log_line)
        .collect()
}
