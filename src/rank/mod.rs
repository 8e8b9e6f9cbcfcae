//! Ranking-stage response parsing and scoring.
//!
//! Model output at the ranking stage is JSON in intent but not in
//! guarantee: it arrives as a bare array, wrapped under an `ideas`/
//! `results`/`result` key, as a lone object, fenced in Markdown, or as
//! something unparseable. All of those degrade gracefully; the worst case
//! is a single diagnostic entry carrying the raw text, never an error.

use std::cmp::Ordering;

use serde_json::Value;

/// Combined scores are out of 20 (two 1-10 dimensions)
const MAX_COMBINED: u32 = 20;

/// One scored idea extracted from the ranking payload
#[derive(Debug, Clone, PartialEq)]
pub struct RankedIdea {
    pub idea: String,
    pub relevance: f64,
    pub plausibility: f64,
    pub reasoning: Option<String>,
}

impl RankedIdea {
    /// Combined score, range 2-20 for well-formed scores
    pub fn combined(&self) -> f64 {
        self.relevance + self.plausibility
    }
}

/// Parse the raw ranking payload and return the top `top` ideas as display
/// strings, best first.
///
/// Never fails: unparseable or unscoreable payloads produce one diagnostic
/// entry embedding the raw text.
pub fn rank_ideas(raw: &str, top: usize) -> Vec<String> {
    let candidates = match parse_candidates(raw) {
        Ok(candidates) => candidates,
        Err(err) => {
            tracing::warn!(%err, "ranking payload was not valid JSON");
            return vec![format!(
                "Could not parse the ranking response ({}). Raw output:\n{}",
                err, raw
            )];
        }
    };

    let mut ideas: Vec<RankedIdea> = candidates.iter().filter_map(extract_idea).collect();
    if ideas.is_empty() {
        tracing::warn!("ranking payload held no scoreable ideas");
        return vec![format!(
            "The ranking response held no scoreable ideas. Raw output:\n{}",
            raw
        )];
    }

    // Stable sort: ties keep the model's original order
    ideas.sort_by(|a, b| {
        b.combined()
            .partial_cmp(&a.combined())
            .unwrap_or(Ordering::Equal)
    });
    ideas.truncate(top);

    ideas.iter().map(format_idea).collect()
}

/// Normalize the payload to a flat candidate list.
fn parse_candidates(raw: &str) -> serde_json::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))?;

    Ok(match value {
        Value::Array(items) => items,
        Value::Object(map) => {
            for key in ["ideas", "results", "result"] {
                if let Some(Value::Array(items)) = map.get(key) {
                    return Ok(items.clone());
                }
            }
            // A lone object still counts as a one-element list
            vec![Value::Object(map)]
        }
        other => vec![other],
    })
}

/// Models wrap JSON in Markdown fences often enough to handle it inline.
fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Keep an entry only if `idea` is text and both scores are finite numbers.
fn extract_idea(value: &Value) -> Option<RankedIdea> {
    let idea = value.get("idea")?.as_str()?.to_string();
    let relevance = finite_number(value.get("relevance")?)?;
    let plausibility = finite_number(value.get("plausibility")?)?;
    let reasoning = value
        .get("reasoning")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|text| !text.trim().is_empty());

    Some(RankedIdea {
        idea,
        relevance,
        plausibility,
        reasoning,
    })
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

fn format_idea(idea: &RankedIdea) -> String {
    let mut entry = format!(
        "{} [{}/{}]",
        idea.idea,
        format_score(idea.combined()),
        MAX_COMBINED
    );
    if let Some(reasoning) = &idea.reasoning {
        entry.push_str(&format!("\n     {}", reasoning));
    }
    entry
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}
