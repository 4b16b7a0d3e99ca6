//! Label lookup for classifier output indices.
//!
//! Label files hold one entry per line, either `<id> <label>` / `<id>: <label>`
//! or a bare label whose id is its line number.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::inference_pipeline::common::error::{ClassifyError, Result};

#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    labels: HashMap<usize, String>,
}

impl LabelMap {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ClassifyError::Labels(format!("{}: {}", path.display(), e)))?;
        let labels = Self::parse(&contents);
        if labels.is_empty() {
            return Err(ClassifyError::Labels(path.display().to_string()));
        }
        debug!("Loaded {} labels from {}", labels.len(), path.display());
        Ok(labels)
    }

    pub fn parse(contents: &str) -> Self {
        let mut labels = HashMap::new();
        for (line_number, line) in contents.lines().enumerate() {
            let line = line.trim();
            let (id, label) = match split_id(line) {
                Some((id, label)) => (id, label),
                None => (line_number, line),
            };
            labels.insert(id, label.to_string());
        }
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label for `index`, or the index itself when the file has no entry for it.
    pub fn get(&self, index: usize) -> Cow<'_, str> {
        match self.labels.get(&index) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(index.to_string()),
        }
    }
}

fn split_id(line: &str) -> Option<(usize, &str)> {
    let (id, rest) = line.split_once(|c: char| c == ':' || c.is_whitespace())?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let label = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
    Some((id.parse().ok()?, label.trim_end()))
}
