//! Request and response types for the Gemini summarisation pipeline.

use crate::text::count_words;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inputs above this many words are treated as long text.
pub const LONG_TEXT_THRESHOLD: usize = 500;

const TEMPERATURE: f32 = 0.3;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const SHORT_MAX_OUTPUT_TOKENS: u32 = 1024;
const LONG_MAX_OUTPUT_TOKENS: u32 = 1536;

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Prose paragraphs grouped by topic
    #[default]
    Professional,
    /// Concise, scannable bullet points
    Bullet,
}

impl SummaryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => "professional",
            SummaryStyle::Bullet => "bullet",
        }
    }

    /// Human-facing label, e.g. for status lines
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => "Professional",
            SummaryStyle::Bullet => "Bullet point",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Ok(SummaryStyle::Professional),
            "bullet" | "bullets" => Ok(SummaryStyle::Bullet),
            other => Err(format!(
                "unknown summary style '{}', expected 'professional' or 'bullet'",
                other
            )),
        }
    }
}

/// A single summarisation request: the text and the style to render it in.
#[derive(Debug, Clone)]
pub struct SummarizationRequest {
    pub source_text: String,
    pub style: SummaryStyle,
}

impl SummarizationRequest {
    pub fn new(source_text: impl Into<String>, style: SummaryStyle) -> Self {
        Self {
            source_text: source_text.into(),
            style,
        }
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.source_text)
    }

    /// Long inputs get a larger word cap and output token budget
    pub fn is_long_text(&self) -> bool {
        self.word_count() > LONG_TEXT_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Sampling parameters sent alongside the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub fn for_length(is_long_text: bool) -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: if is_long_text {
                LONG_MAX_OUTPUT_TOKENS
            } else {
                SHORT_MAX_OUTPUT_TOKENS
            },
        }
    }
}

/// Body of a `generateContent` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPayload {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl PromptPayload {
    pub fn new(prompt: String, is_long_text: bool) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::for_length(is_long_text),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Response of a `generateContent` call. Every level is optional so that
/// structurally unexpected bodies still deserialize and can be reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if present and not blank
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!("Bullet".parse::<SummaryStyle>(), Ok(SummaryStyle::Bullet));
        assert_eq!(
            " professional ".parse::<SummaryStyle>(),
            Ok(SummaryStyle::Professional)
        );
        assert!("haiku".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn long_text_boundary() {
        let exactly = SummarizationRequest::new("word ".repeat(500), SummaryStyle::Bullet);
        assert_eq!(exactly.word_count(), 500);
        assert!(!exactly.is_long_text());

        let over = SummarizationRequest::new("word ".repeat(501), SummaryStyle::Bullet);
        assert!(over.is_long_text());
    }

    #[test]
    fn payload_serializes_in_gemini_shape() {
        let payload = PromptPayload::new("hi".to_string(), true);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1536);
        assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn first_text_handles_missing_levels() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);

        let no_parts: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{}}]}"#).unwrap();
        assert_eq!(no_parts.first_text(), None);

        let blank: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.first_text(), None);

        let ok: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#)
                .unwrap();
        assert_eq!(ok.first_text(), Some("Hello"));
    }
}
