//! Line-delimited JSON sink: a header line followed by one change per line.

use crate::diff::{DiffError, DocumentDiff, IdentifiedChange};
use crate::sink::DiffSink;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonLinesHeader {
    kind: &'static str,
    version: &'static str,
}

pub struct JsonLinesSink<W: Write> {
    w: W,
    wrote_header: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            wrote_header: false,
        }
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<(), DiffError> {
        serde_json::to_writer(&mut self.w, value).map_err(|e| DiffError::SinkError {
            message: e.to_string(),
        })?;
        self.w.write_all(b"\n").map_err(|e| DiffError::SinkError {
            message: e.to_string(),
        })
    }
}

impl<W: Write> DiffSink for JsonLinesSink<W> {
    fn begin(&mut self) -> Result<(), DiffError> {
        if self.wrote_header {
            return Ok(());
        }
        let header = JsonLinesHeader {
            kind: "Header",
            version: DocumentDiff::SCHEMA_VERSION,
        };
        self.write_line(&header)?;
        self.wrote_header = true;
        Ok(())
    }

    fn emit(&mut self, change: IdentifiedChange) -> Result<(), DiffError> {
        self.write_line(&change)
    }

    fn finish(&mut self) -> Result<(), DiffError> {
        self.w.flush().map_err(|e| DiffError::SinkError {
            message: e.to_string(),
        })
    }
}
