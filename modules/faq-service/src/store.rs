//! Knowledge store: FAQ lookup and the unanswered-question queue.

use crate::error::{StoreError, StoreResult};
use crate::storage::FaqStorage;
use faq_types::{FALLBACK_ANSWER, FaqEntry, FaqStats};
use std::sync::{Arc, Mutex};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing question or answer.";
pub const ANSWER_SAVED_MESSAGE: &str = "Answer saved successfully.";
pub const MULTILINE_MESSAGE: &str = "Question and answer must fit on a single line.";

pub struct KnowledgeStore {
    storage: Arc<dyn FaqStorage>,
    /// Held across every read-modify-write so concurrent requests can't
    /// interleave them.
    write_lock: Mutex<()>,
}

impl KnowledgeStore {
    pub fn new(storage: Arc<dyn FaqStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }

    /// All FAQ entries in append order. Read failures yield an empty list.
    pub fn list_faq(&self) -> Vec<FaqEntry> {
        self.storage.load_faq().unwrap_or_else(|e| {
            log::warn!("Failed to load FAQ, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Distinct unanswered questions, first occurrence wins.
    pub fn list_unanswered(&self) -> Vec<String> {
        let questions = self.storage.load_unanswered().unwrap_or_else(|e| {
            log::warn!("Failed to load unanswered questions, treating as empty: {}", e);
            Vec::new()
        });
        let mut distinct: Vec<String> = Vec::with_capacity(questions.len());
        for q in questions {
            if !distinct.contains(&q) {
                distinct.push(q);
            }
        }
        distinct
    }

    /// Answer of the first entry whose question contains `question`
    /// (case-insensitive). On a miss the question is queued once and the
    /// fallback sentence is returned.
    pub fn ask(&self, question: &str) -> StoreResult<String> {
        let question = single_line(question);
        let question = question.as_str();
        if let Some(entry) = find_match(&self.list_faq(), question) {
            return Ok(entry.answer.clone());
        }

        // Blank queries are never queued; the unanswered file can't hold them.
        if question.is_empty() {
            return Ok(FALLBACK_ANSWER.to_string());
        }

        let _guard = self.write_lock.lock().unwrap();
        if !self.list_unanswered().iter().any(|q| q == question) {
            self.storage.append_unanswered(question)?;
            log::info!("Recorded unanswered question: {}", question);
        }
        Ok(FALLBACK_ANSWER.to_string())
    }

    /// Store a new FAQ entry and drop every unanswered entry equal to
    /// `question`. Both fields are trimmed the way the files read them back.
    pub fn answer(&self, question: &str, answer: &str) -> StoreResult<&'static str> {
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() || answer.is_empty() {
            return Err(StoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        if has_line_break(question) || has_line_break(answer) {
            return Err(StoreError::Validation(MULTILINE_MESSAGE.to_string()));
        }

        let _guard = self.write_lock.lock().unwrap();
        self.storage.append_faq(&FaqEntry::new(question, answer))?;

        let remaining: Vec<String> = self
            .storage
            .load_unanswered()?
            .into_iter()
            .filter(|q| q != question)
            .collect();
        self.storage.rewrite_unanswered(&remaining)?;

        log::info!("Saved answer for question: {}", question);
        Ok(ANSWER_SAVED_MESSAGE)
    }

    pub fn stats(&self) -> FaqStats {
        FaqStats {
            faq_count: self.list_faq().len(),
            unanswered_count: self.list_unanswered().len(),
        }
    }
}

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// Trimmed query with line breaks folded into single spaces, so it is stored
/// as exactly one line of the unanswered file.
fn single_line(question: &str) -> String {
    question
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn find_match<'a>(faq: &'a [FaqEntry], question: &str) -> Option<&'a FaqEntry> {
    let needle = question.to_lowercase();
    faq.iter()
        .find(|entry| entry.question.to_lowercase().contains(&needle))
}
