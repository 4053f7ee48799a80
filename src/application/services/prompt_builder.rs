use crate::domain::Candidate;

pub const SYSTEM_PROMPT: &str =
    "You are a strict evaluator and translator. You must respond with valid JSON only.";

/// Response shape the evaluator is asked to produce.
pub const RESPONSE_SCHEMA: &str = r#"{
  "evaluations": [
    { "lang": "ja", "quality": "good" | "bad" },
    { "lang": "en", "quality": "good" | "bad" },
    { "lang": "zh", "quality": "good" | "bad" }
  ],
  "final": {
    "ja": "<final merged Japanese>",
    "en": "<final merged English>",
    "zh": "<final merged Chinese>"
  }
}"#;

const PREAMBLE: &str = "We have three candidate transcripts for the same audio.";

const INSTRUCTIONS: &str = "For each candidate, decide if it is \"good\" (linguistically coherent and meaningful) or \"bad\" (nonsense, wrong language, or unusable). \
Using only the \"good\" candidates, reconstruct the best possible content of the original speech and produce final merged versions in Japanese (ja), English (en), and Chinese (zh). \
Return JSON only with this schema:";

pub fn build_user_prompt(candidates: &[Candidate]) -> String {
    let candidate_lines = candidates
        .iter()
        .enumerate()
        .map(|(idx, c)| format!("{}) lang: {}, text: \"{}\"", idx + 1, c.lang, c.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PREAMBLE}\n{candidate_lines}\n{INSTRUCTIONS}\n{RESPONSE_SCHEMA}")
}
