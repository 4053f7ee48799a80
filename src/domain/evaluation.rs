use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::language::Language;

/// The evaluator's verdict on each candidate plus its merged transcripts.
///
/// Keys the evaluator leaves out stay `None` and are omitted again when the
/// evaluation is serialized back to the client. Keys outside the schema are
/// kept in `extra` and returned as they came.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluations: Option<Vec<CandidateVerdict>>,
    #[serde(rename = "final", default, skip_serializing_if = "Option::is_none")]
    pub merged: Option<MergedTranscripts>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateVerdict {
    pub lang: String,
    pub quality: Quality,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Good,
    Bad,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedTranscripts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MergedTranscripts {
    pub fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Japanese => self.ja.as_deref(),
            Language::English => self.en.as_deref(),
            Language::Chinese => self.zh.as_deref(),
        }
    }
}

impl Evaluation {
    pub fn verdict_for(&self, language: Language) -> Option<Quality> {
        self.evaluations
            .as_ref()?
            .iter()
            .find(|v| v.lang == language.code())
            .map(|v| v.quality)
    }

    /// Lists the parts a complete evaluation of `languages` would carry but this one lacks.
    pub fn missing_parts(&self, languages: &[Language]) -> Vec<String> {
        let mut missing = Vec::new();

        if self.evaluations.is_none() {
            missing.push("evaluations".to_string());
        } else {
            for language in languages {
                if self.verdict_for(*language).is_none() {
                    missing.push(format!("evaluations[{}]", language));
                }
            }
        }

        match &self.merged {
            None => missing.push("final".to_string()),
            Some(merged) => {
                for language in languages {
                    if merged.get(*language).is_none() {
                        missing.push(format!("final.{}", language));
                    }
                }
            }
        }

        missing
    }
}
