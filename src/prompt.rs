//! Prompt templates for the two summary styles.

use crate::summary::SummaryStyle;

const FRAMING: &str =
    "You are a professional assistant specializing in creating clear, concise summaries.";

/// Word cap given to the model for the summary
pub fn word_limit(is_long_text: bool) -> u32 {
    if is_long_text {
        300
    } else {
        200
    }
}

/// Build the instruction text sent to the model.
///
/// The source text is interpolated verbatim at the end. No validation happens
/// here; callers are expected to have rejected empty input already.
pub fn build_prompt(source_text: &str, style: SummaryStyle, is_long_text: bool) -> String {
    let limit = word_limit(is_long_text);

    match style {
        SummaryStyle::Professional => format!(
            r#"{FRAMING}

Write a professional summary of the following text. Include all important details and deadlines. Use paragraphs grouped by topic and highlight any action items clearly.

Guidelines:
- Start with a bold heading summarizing the main topic
- Focus on key points, main ideas, and important facts
- Remove filler words and redundant information
- Retain action items, decisions, and critical details
- Use a professional and readable tone
- Keep the summary under {limit} words
- Use clear paragraphs for readability

Text to summarize:
{source_text}"#
        ),
        SummaryStyle::Bullet => format!(
            r#"{FRAMING}

Summarize the following text in concise bullet points. Focus on key facts, decisions, deadlines, and action items. Omit filler and group related info.

Guidelines:
- Use bullet points for easy scanning
- Focus on key points, decisions, and action items
- Remove filler words and redundant information
- Group related information together
- Keep each bullet point concise and clear
- Keep the summary under {limit} words
- Use clear, scannable formatting

Text to summarize:
{source_text}"#
        ),
    }
}
