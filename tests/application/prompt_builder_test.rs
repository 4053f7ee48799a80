use triscribe::application::services::{RESPONSE_SCHEMA, SYSTEM_PROMPT, build_user_prompt};
use triscribe::domain::{Candidate, Language};

const EXPECTED_SCHEMA: &str = "{\n  \"evaluations\": [\n    { \"lang\": \"ja\", \"quality\": \"good\" | \"bad\" },\n    { \"lang\": \"en\", \"quality\": \"good\" | \"bad\" },\n    { \"lang\": \"zh\", \"quality\": \"good\" | \"bad\" }\n  ],\n  \"final\": {\n    \"ja\": \"<final merged Japanese>\",\n    \"en\": \"<final merged English>\",\n    \"zh\": \"<final merged Chinese>\"\n  }\n}";

fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(Language::Japanese, "Aあ".to_string(), serde_json::Value::Null),
        Candidate::new(Language::English, "Hi".to_string(), serde_json::Value::Null),
        Candidate::new(Language::Chinese, "你好".to_string(), serde_json::Value::Null),
    ]
}

#[test]
fn given_three_candidates_when_building_prompt_then_lists_each_numbered_line() {
    let prompt = build_user_prompt(&sample_candidates());

    assert!(prompt.contains("\n1) lang: ja, text: \"Aあ\"\n"));
    assert!(prompt.contains("\n2) lang: en, text: \"Hi\"\n"));
    assert!(prompt.contains("\n3) lang: zh, text: \"你好\"\n"));
}

#[test]
fn given_three_candidates_when_building_prompt_then_schema_block_is_verbatim() {
    let prompt = build_user_prompt(&sample_candidates());

    assert_eq!(RESPONSE_SCHEMA, EXPECTED_SCHEMA);
    assert!(prompt.ends_with(&format!(
        "Return JSON only with this schema:\n{}",
        EXPECTED_SCHEMA
    )));
}

#[test]
fn given_three_candidates_when_building_prompt_then_full_text_matches() {
    let prompt = build_user_prompt(&sample_candidates());

    let expected = format!(
        "We have three candidate transcripts for the same audio.\n\
         1) lang: ja, text: \"Aあ\"\n\
         2) lang: en, text: \"Hi\"\n\
         3) lang: zh, text: \"你好\"\n\
         For each candidate, decide if it is \"good\" (linguistically coherent and meaningful) or \"bad\" (nonsense, wrong language, or unusable). \
         Using only the \"good\" candidates, reconstruct the best possible content of the original speech and produce final merged versions in Japanese (ja), English (en), and Chinese (zh). \
         Return JSON only with this schema:\n{}",
        EXPECTED_SCHEMA
    );
    assert_eq!(prompt, expected);
}

#[test]
fn given_same_candidates_when_building_twice_then_output_is_identical() {
    let candidates = sample_candidates();
    assert_eq!(build_user_prompt(&candidates), build_user_prompt(&candidates));
}

#[test]
fn given_system_prompt_when_read_then_demands_json_only() {
    assert_eq!(
        SYSTEM_PROMPT,
        "You are a strict evaluator and translator. You must respond with valid JSON only."
    );
}
