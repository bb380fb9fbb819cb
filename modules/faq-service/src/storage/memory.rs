//! In-memory storage, used by tests and `FAQ_STORAGE=memory`.

use super::FaqStorage;
use crate::error::StoreResult;
use faq_types::FaqEntry;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStorage {
    faq: Mutex<Vec<FaqEntry>>,
    unanswered: Mutex<Vec<String>>,
}

impl MemoryStorage {
    #[cfg(test)]
    pub fn with_entries(entries: Vec<FaqEntry>) -> Self {
        Self {
            faq: Mutex::new(entries),
            unanswered: Mutex::new(Vec::new()),
        }
    }
}

impl FaqStorage for MemoryStorage {
    fn load_faq(&self) -> StoreResult<Vec<FaqEntry>> {
        Ok(self.faq.lock().unwrap().clone())
    }

    fn append_faq(&self, entry: &FaqEntry) -> StoreResult<()> {
        self.faq.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn load_unanswered(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .unanswered
            .lock()
            .unwrap()
            .iter()
            .filter(|q| !q.trim().is_empty())
            .cloned()
            .collect())
    }

    fn append_unanswered(&self, question: &str) -> StoreResult<()> {
        self.unanswered.lock().unwrap().push(question.to_string());
        Ok(())
    }

    fn rewrite_unanswered(&self, questions: &[String]) -> StoreResult<()> {
        *self.unanswered.lock().unwrap() = questions.to_vec();
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
