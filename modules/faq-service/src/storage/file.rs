//! Flat-file storage: one FAQ entry or unanswered question per line.

use super::{FaqStorage, format_faq_line, parse_faq_line};
use crate::error::{StoreError, StoreResult};
use faq_types::FaqEntry;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct FileStorage {
    faq_path: PathBuf,
    unanswered_path: PathBuf,
}

impl FileStorage {
    pub fn new(faq_path: impl Into<PathBuf>, unanswered_path: impl Into<PathBuf>) -> Self {
        Self {
            faq_path: faq_path.into(),
            unanswered_path: unanswered_path.into(),
        }
    }

    pub fn faq_path(&self) -> &Path {
        &self.faq_path
    }

    pub fn unanswered_path(&self) -> &Path {
        &self.unanswered_path
    }
}

/// Read a whole file, treating a missing file as empty.
fn read_or_empty(path: &Path) -> StoreResult<String> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

fn append_line(path: &Path, line: &str) -> StoreResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    file.write_all(line.as_bytes())
        .map_err(|e| StoreError::io(path, e))
}

impl FaqStorage for FileStorage {
    fn load_faq(&self) -> StoreResult<Vec<FaqEntry>> {
        let content = read_or_empty(&self.faq_path)?;
        Ok(content.lines().filter_map(parse_faq_line).collect())
    }

    fn append_faq(&self, entry: &FaqEntry) -> StoreResult<()> {
        append_line(&self.faq_path, &format_faq_line(entry))
    }

    fn load_unanswered(&self) -> StoreResult<Vec<String>> {
        let content = read_or_empty(&self.unanswered_path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn append_unanswered(&self, question: &str) -> StoreResult<()> {
        append_line(&self.unanswered_path, &format!("{}\n", question))
    }

    fn rewrite_unanswered(&self, questions: &[String]) -> StoreResult<()> {
        let mut content = String::new();
        for q in questions {
            content.push_str(q);
            content.push('\n');
        }
        fs::write(&self.unanswered_path, content)
            .map_err(|e| StoreError::io(&self.unanswered_path, e))
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}
