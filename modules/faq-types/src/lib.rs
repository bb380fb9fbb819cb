//! Shared types for the FAQ service and its HTTP clients.

use serde::{Deserialize, Serialize};

/// Answer returned by `/ask` when no stored question matches.
pub const FALLBACK_ANSWER: &str = "Unfortunately, we don't have an answer for this question.";

// =====================================================
// Domain Types
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqStats {
    pub faq_count: usize,
    pub unanswered_count: usize,
}

// =====================================================
// Request Types
// =====================================================

/// Query string of `GET /ask`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AskQuery {
    #[serde(default)]
    pub question: Option<String>,
}

/// Body of `POST /answer`. Both fields are optional on the wire so that a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =====================================================
// Service Status
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
    pub faq_count: usize,
    pub unanswered_count: usize,
}
