use serde::{Deserialize, Serialize};

use super::language::Language;

/// One language's transcription of the uploaded audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub lang: Language,
    pub text: String,
    /// Response body exactly as the transcription backend returned it.
    pub raw: serde_json::Value,
}

impl Candidate {
    pub fn new(lang: Language, text: String, raw: serde_json::Value) -> Self {
        Self { lang, text, raw }
    }
}
