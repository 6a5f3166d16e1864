use std::fs::File;
use std::io::{BufReader, Read};
use anyhow::{Context, Result};
use brotli::Decompressor;
use serde::Deserialize;
use crate::error::SourceError;
use crate::traits::{DynSource, SourceReader, TemperatureSource};

/// Readings captured earlier and played back in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSource {
    name: String,
    values: Vec<f64>,
    index: usize,
}

impl RecordedSource {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            index: 0,
        }
    }
}

impl TemperatureSource for RecordedSource {
    fn next_value(&mut self) -> Option<f64> {
        let value = self.values.get(self.index).copied()?;
        self.index += 1;
        Some(value)
    }

    fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordingLayout {
    Bare(Vec<serde_json::Value>),
    Wrapped { samples: Vec<serde_json::Value> },
}

/// Decodes recording text into a list of readings.
///
/// Two layouts are accepted: a bare JSON array of numbers, or an object with a
/// `samples` array. Every entry must be a finite number and at least one is
/// required.
pub fn parse_recording(text: &str) -> std::result::Result<Vec<f64>, SourceError> {
    let layout: serde_json::Value = serde_json::from_str(text)?;
    let samples = match serde_json::from_value::<RecordingLayout>(layout) {
        Ok(RecordingLayout::Bare(samples)) => samples,
        Ok(RecordingLayout::Wrapped { samples }) => samples,
        Err(_) => return Err(SourceError::UnsupportedLayout),
    };

    if samples.is_empty() {
        return Err(SourceError::Empty);
    }

    samples
        .iter()
        .enumerate()
        .map(|(index, raw)| match raw.as_f64() {
            Some(value) if value.is_finite() => Ok(value),
            Some(value) => Err(SourceError::NonFinite { index, value }),
            None => Err(SourceError::NonFinite { index, value: f64::NAN }),
        })
        .collect()
}

/// Reads recordings from disk.
///
/// Supported formats:
///
/// - `.json` — plain JSON
/// - `.json.br` — Brotli-compressed JSON
pub struct RecordedSourceReader;

impl RecordedSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RecordedSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for RecordedSourceReader {
    fn read(&self, file_path: &str) -> Result<DynSource> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open recording: {}", file_path))?;

        let mut reader: Box<dyn Read> = if file_path.ends_with(".br") {
            Box::new(Decompressor::new(file, 4096))
        } else {
            Box::new(BufReader::new(file))
        };

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("Failed to read recording: {}", file_path))?;

        let values = parse_recording(&text)
            .with_context(|| format!("Invalid recording: {}", file_path))?;

        let name = std::path::Path::new(file_path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Recorded".to_string());

        Ok(DynSource::Recorded(RecordedSource::new(name, values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let values = parse_recording("[25, 30.5, 41]").unwrap();
        assert_eq!(values, vec![25.0, 30.5, 41.0]);
    }

    #[test]
    fn test_parse_wrapped_samples() {
        let values = parse_recording(r#"{"samples": [100, 101]}"#).unwrap();
        assert_eq!(values, vec![100.0, 101.0]);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_recording("[]"), Err(SourceError::Empty)));
    }

    #[test]
    fn test_parse_rejects_non_numeric_entry() {
        let err = parse_recording(r#"[1, "hot", 3]"#).unwrap_err();
        assert!(matches!(err, SourceError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(matches!(parse_recording(r#"{"temps": [1]}"#), Err(SourceError::UnsupportedLayout)));
        assert!(matches!(parse_recording("not json"), Err(SourceError::Decode(_))));
    }

    #[test]
    fn test_recorded_source_plays_then_exhausts() {
        let mut source = RecordedSource::new("run.json", vec![1.0, 2.0]);
        assert_eq!(source.name(), "run.json");
        assert_eq!(source.next_value(), Some(1.0));
        assert!(!source.is_exhausted());
        assert_eq!(source.next_value(), Some(2.0));
        assert!(source.is_exhausted());
        assert_eq!(source.next_value(), None);
    }
}
