//! Parsing of decompressed CDX blocks.
//!
//! Each line is `<surt> <timestamp> <json>`, where the JSON object carries the
//! capture metadata (url, mime, status, digest, WARC filename/offset/length).

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CdxError {
    #[error("malformed CDX line: {0:?}")]
    Malformed(String),
    #[error("invalid CDX JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One capture from a CDX block.
#[derive(Debug, Clone, PartialEq)]
pub struct CdxRecord {
    pub surt: String,
    pub timestamp: String,
    pub fields: Map<String, Value>,
}

impl CdxRecord {
    pub fn parse(line: &str) -> Result<Self, CdxError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut parts = line.splitn(3, ' ');
        let (Some(surt), Some(timestamp), Some(json)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CdxError::Malformed(line.to_string()));
        };
        let fields = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => map,
            _ => return Err(CdxError::Malformed(line.to_string())),
        };
        Ok(Self {
            surt: surt.to_string(),
            timestamp: timestamp.to_string(),
            fields,
        })
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    // Numeric fields are serialised as strings in the index.
    fn num_field(&self, key: &str) -> Option<u64> {
        match self.fields.get(key)? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    pub fn mime(&self) -> Option<&str> {
        self.str_field("mime")
    }

    pub fn status(&self) -> Option<u16> {
        self.num_field("status").and_then(|s| u16::try_from(s).ok())
    }

    pub fn digest(&self) -> Option<&str> {
        self.str_field("digest")
    }

    /// WARC file holding the capture.
    pub fn filename(&self) -> Option<&str> {
        self.str_field("filename")
    }

    /// Byte offset of the capture inside its WARC file.
    pub fn offset(&self) -> Option<u64> {
        self.num_field("offset")
    }

    /// Compressed length of the capture inside its WARC file.
    pub fn length(&self) -> Option<u64> {
        self.num_field("length")
    }
}

/// Iterate the records of a decompressed block, skipping blank lines.
pub fn parse_block(block: &[u8]) -> impl Iterator<Item = Result<CdxRecord, CdxError>> + '_ {
    block
        .split(|b| *b == b'\n')
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .map(|line| CdxRecord::parse(&String::from_utf8_lossy(line)))
}
