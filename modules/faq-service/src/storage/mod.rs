//! Storage backends for FAQ entries and unanswered questions.
//!
//! The knowledge store never touches files directly; it talks to a
//! [`FaqStorage`] so tests and ephemeral runs can swap in memory-backed state.
//!
//! - **file** (default): `faq.txt` + `unanswered_questions.txt`, line oriented
//! - **memory**: process-local vectors, lost on exit

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::Config;
use crate::error::StoreResult;
use faq_types::FaqEntry;
use std::sync::Arc;

/// Separator between question and answer on a `faq.txt` line.
pub const SEPARATOR: char = '-';

/// Backend for the two collections behind the knowledge store.
///
/// Implementations do no locking of their own across calls; the knowledge
/// store serialises every read-modify-write sequence.
pub trait FaqStorage: Send + Sync {
    /// All FAQ entries in append order.
    fn load_faq(&self) -> StoreResult<Vec<FaqEntry>>;

    fn append_faq(&self, entry: &FaqEntry) -> StoreResult<()>;

    /// All unanswered questions in insertion order, blank entries dropped.
    fn load_unanswered(&self) -> StoreResult<Vec<String>>;

    fn append_unanswered(&self, question: &str) -> StoreResult<()>;

    /// Replace the whole unanswered collection.
    fn rewrite_unanswered(&self, questions: &[String]) -> StoreResult<()>;

    /// Backend name for logging
    fn kind(&self) -> &'static str;
}

/// Build the backend selected by `FAQ_STORAGE`.
pub fn create_storage(config: &Config) -> Result<Arc<dyn FaqStorage>, String> {
    match config.storage.as_str() {
        "file" => {
            let storage = FileStorage::new(&config.faq_path, &config.unanswered_path);
            log::info!(
                "Using file storage (faq: {}, unanswered: {})",
                storage.faq_path().display(),
                storage.unanswered_path().display()
            );
            Ok(Arc::new(storage))
        }
        "memory" => {
            log::warn!("Using in-memory storage; answers are lost on restart");
            Ok(Arc::new(MemoryStorage::default()))
        }
        other => Err(format!(
            "Unknown FAQ_STORAGE '{}'. Use 'file' or 'memory'.",
            other
        )),
    }
}

/// Parse one `faq.txt` line. Splits on the first separator only and trims
/// both halves; lines without a separator yield `None`.
pub fn parse_faq_line(line: &str) -> Option<FaqEntry> {
    let (question, answer) = line.trim().split_once(SEPARATOR)?;
    Some(FaqEntry::new(question.trim(), answer.trim()))
}

pub fn format_faq_line(entry: &FaqEntry) -> String {
    format!("{} {} {}\n", entry.question, SEPARATOR, entry.answer)
}
