//! Exercise block extraction from lesson HTML
//!
//! Lessons embed a JSON array of quiz items inside a custom
//! `<activities>...</activities>` delimiter. Extraction is fail-soft: a
//! missing block, malformed JSON, or invalid entries degrade to "no
//! exercises" rather than erroring, since the quiz is a non-critical
//! presentation feature. The reason for an empty result goes to the
//! tracing channel so it stays debuggable.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The embedded exercise region. Non-greedy, dot-matches-newline; only the
/// first region in a lesson is honored.
static ACTIVITIES_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<activities>(.*?)</activities>").expect("valid regex"));

/// Kind of quiz exercise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Pick one answer from the options list
    #[default]
    MultipleChoice,
    /// Type the missing word
    FillBlank,
    /// True or false statement
    TrueFalse,
}

/// A quiz exercise embedded in lesson content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise kind; content that omits it means multiple choice
    #[serde(rename = "type", default)]
    pub kind: ExerciseKind,

    /// Question text
    pub question: String,

    /// Answer options, in display order
    pub options: Vec<String>,

    /// The correct answer
    pub correct_answer: String,

    /// Explanation shown after answering
    pub explanation: String,
}

/// Extract the exercises embedded in lesson content.
///
/// Returns an empty vec when no `<activities>` block exists, when the block
/// isn't a JSON array, and for every entry that fails validation (entries
/// are dropped individually, not repaired). Never returns an error — the
/// caller can't distinguish "absent" from "malformed" except via logs,
/// which is the intended fail-soft contract.
#[must_use]
pub fn parse_exercises_from_content(content: &str) -> Vec<Exercise> {
    match try_parse_exercises(content) {
        Ok(exercises) => exercises,
        Err(e) => {
            tracing::warn!(error = %e, "malformed exercise block, showing no exercises");
            Vec::new()
        }
    }
}

/// Remove the first `<activities>` block from lesson content for display.
///
/// Content without a block comes back trimmed but otherwise unchanged.
#[must_use]
pub fn clean_content_from_exercises(content: &str) -> String {
    ACTIVITIES_BLOCK.replacen(content, 1, "").trim().to_string()
}

/// Fallible core of [`parse_exercises_from_content`]
fn try_parse_exercises(content: &str) -> Result<Vec<Exercise>> {
    let Some(caps) = ACTIVITIES_BLOCK.captures(content) else {
        tracing::debug!("no activities block in lesson content");
        return Ok(Vec::new());
    };

    if ACTIVITIES_BLOCK.find_iter(content).count() > 1 {
        tracing::debug!("multiple activities blocks, honoring the first only");
    }

    let raw: Value = serde_json::from_str(caps[1].trim())?;
    let Value::Array(items) = raw else {
        return Err(Error::Exercise(
            "activities block is not a JSON array".to_string(),
        ));
    };

    let total = items.len();
    let exercises: Vec<Exercise> = items.iter().filter_map(validate_exercise).collect();

    if exercises.len() < total {
        tracing::debug!(
            dropped = total - exercises.len(),
            kept = exercises.len(),
            "dropped malformed exercise entries"
        );
    }

    Ok(exercises)
}

/// Validate and normalize one raw exercise entry.
///
/// Requires non-empty `question`, `correct_answer`, and `explanation`, and
/// an array-typed `options`. Anything else means the entry is dropped.
fn validate_exercise(value: &Value) -> Option<Exercise> {
    let question = non_empty_str(value, "question")?;
    let correct_answer = non_empty_str(value, "correct_answer")?;
    let explanation = non_empty_str(value, "explanation")?;
    let options = value.get("options")?.as_array()?;

    // Unknown or missing kinds fall back to multiple choice
    let kind = value
        .get("type")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default();

    Some(Exercise {
        kind,
        question: question.to_string(),
        options: options.iter().map(option_text).collect(),
        correct_answer: correct_answer.to_string(),
        explanation: explanation.to_string(),
    })
}

/// Fetch a required non-empty string field
fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.get(field)?.as_str().filter(|s| !s.is_empty())
}

/// Render an options entry as display text (content occasionally emits
/// numbers or booleans for true/false options)
fn option_text(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"<activities>[{"question":"Q?","correct_answer":"A","explanation":"E","options":["A","B"]}]</activities>"#;

    #[test]
    fn parses_well_formed_block_with_default_kind() {
        let exercises = parse_exercises_from_content(WELL_FORMED);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].kind, ExerciseKind::MultipleChoice);
        assert_eq!(exercises[0].question, "Q?");
        assert_eq!(exercises[0].options, vec!["A", "B"]);
    }

    #[test]
    fn missing_block_yields_empty() {
        assert!(parse_exercises_from_content("no tag here").is_empty());
        assert!(parse_exercises_from_content("").is_empty());
    }

    #[test]
    fn malformed_json_yields_empty_without_panicking() {
        assert!(parse_exercises_from_content("<activities>{not json</activities>").is_empty());
        assert!(parse_exercises_from_content("<activities>42</activities>").is_empty());
        assert!(
            parse_exercises_from_content(r#"<activities>{"question":"Q"}</activities>"#)
                .is_empty()
        );
    }

    #[test]
    fn invalid_entries_are_dropped_individually() {
        let content = r#"<activities>[
            {"question":"Q1?","correct_answer":"A","explanation":"E","options":["A","B"]},
            {"question":"","correct_answer":"A","explanation":"E","options":["A"]},
            {"question":"Q3?","correct_answer":"A","explanation":"E","options":"oops"},
            {"question":"Q4?","explanation":"E","options":["A"]},
            {"question":"Q5?","correct_answer":"A","explanation":"E","options":[],
             "type":"true_false"}
        ]</activities>"#;

        let exercises = parse_exercises_from_content(content);
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].question, "Q1?");
        assert_eq!(exercises[1].question, "Q5?");
        assert_eq!(exercises[1].kind, ExerciseKind::TrueFalse);
    }

    #[test]
    fn unknown_kind_defaults_to_multiple_choice() {
        let content = r#"<activities>[{"question":"Q?","correct_answer":"A","explanation":"E","options":["A"],"type":"essay"}]</activities>"#;
        let exercises = parse_exercises_from_content(content);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].kind, ExerciseKind::MultipleChoice);
    }

    #[test]
    fn block_spanning_newlines_is_found() {
        let content = "<activities>\n[{\"question\":\"Q?\",\"correct_answer\":\"A\",\"explanation\":\"E\",\"options\":[\"A\"]}]\n</activities>";
        assert_eq!(parse_exercises_from_content(content).len(), 1);
    }

    #[test]
    fn only_first_block_is_consulted() {
        let content = format!(
            "{WELL_FORMED}<activities>[{{\"question\":\"Q2?\",\"correct_answer\":\"A\",\"explanation\":\"E\",\"options\":[\"A\"]}}]</activities>"
        );
        let exercises = parse_exercises_from_content(&content);
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].question, "Q?");
    }

    #[test]
    fn clean_removes_block_and_trims() {
        let content = format!("<p>Lesson</p>{WELL_FORMED}");
        assert_eq!(clean_content_from_exercises(&content), "<p>Lesson</p>");
    }

    #[test]
    fn clean_without_block_trims_only() {
        assert_eq!(
            clean_content_from_exercises("  <p>Lesson</p>  "),
            "<p>Lesson</p>"
        );
    }

    #[test]
    fn clean_removes_only_first_block() {
        let content = format!("{WELL_FORMED}<p>middle</p>{WELL_FORMED}");
        let cleaned = clean_content_from_exercises(&content);
        assert!(cleaned.starts_with("<p>middle</p>"));
        assert!(cleaned.contains("<activities>"));
    }

    #[test]
    fn exercise_serde_round_trip() {
        let exercise = Exercise {
            kind: ExerciseKind::FillBlank,
            question: "Complete: I ___ to school".to_string(),
            options: vec!["go".to_string(), "goes".to_string()],
            correct_answer: "go".to_string(),
            explanation: "First person singular".to_string(),
        };

        let json = serde_json::to_string(&exercise).expect("serializes");
        assert!(json.contains("\"type\":\"fill_blank\""));

        let back: Exercise = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, exercise);
    }
}
