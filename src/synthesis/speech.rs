//! Speech builder
//!
//! Assembles a four-block speech from fixed phrase pools. All sub-generators
//! draw from one [`SeededRng`] in a fixed order: salutation, axes, measures,
//! closing. Blocks are separated by a blank line and never contain one.

use super::phrases::{
    ACTION_AXES, CLOSINGS, KEYWORD_POOL, MEASURES, SALUTATIONS, THANKS, TITLE_PHRASE,
};
use super::strategy::normalize_for_matching;
use crate::rng::SeededRng;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const AXES_SAMPLED: usize = 3;
const AXES_WITH_KEYWORDS: usize = 3;
const MEASURES_SAMPLED: usize = 4;
const KEYWORD_BULLETS: usize = 4;
const PLAN_BULLETS: usize = 5;
const MAX_DERIVED_KEYWORDS: usize = 10;

/// Block separator
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Prefix of the plan block
pub const PLAN_HEADING: &str = "Plano imediato:";

/// A generated speech with its title and keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechContent {
    pub title: String,
    pub content: String,
    pub keywords: Vec<String>,
}

/// Build the speech body for `topic`, weaving in `keywords` when present.
pub fn build_speech(topic: &str, keywords: &[String], rng: &mut SeededRng) -> String {
    let opening = opening_block(topic, keywords, rng);
    let axes = axes_block(keywords, rng);
    let plan = plan_block(keywords, rng);
    let closing = closing_block(keywords, rng);

    [opening, axes, plan, closing].join(PARAGRAPH_BREAK)
}

/// Draw the three action axes.
pub fn sample_axes(rng: &mut SeededRng) -> Vec<&'static str> {
    rng.sample(&ACTION_AXES, AXES_SAMPLED)
}

/// Draw the four plan measures.
pub fn sample_measures(rng: &mut SeededRng) -> Vec<&'static str> {
    rng.sample(&MEASURES, MEASURES_SAMPLED)
}

fn opening_block(topic: &str, keywords: &[String], rng: &mut SeededRng) -> String {
    let salutation = rng.pick(&SALUTATIONS);
    let focus = if keywords.is_empty() {
        String::new()
    } else {
        format!(", com foco em {}", keywords.join(", "))
    };

    format!(
        "{}\nHoje venho falar-vos de {}{}. Este é um compromisso com todas as famílias \
         e com o futuro de Portugal.",
        salutation,
        topic.trim_end_matches('.'),
        focus
    )
}

fn axes_block(keywords: &[String], rng: &mut SeededRng) -> String {
    let mut lines = vec!["Proponho três eixos de ação:".to_string()];
    for (i, axis) in sample_axes(rng).into_iter().enumerate() {
        let mut line = format!("{}. {}", i + 1, capitalize(axis));
        if i == 0 && !keywords.is_empty() {
            let focus = keywords
                .iter()
                .take(AXES_WITH_KEYWORDS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            line.push_str(&format!(", com atenção a {}", focus));
        }
        line.push(';');
        lines.push(line);
    }
    lines.join("\n")
}

fn plan_block(keywords: &[String], rng: &mut SeededRng) -> String {
    let measures = sample_measures(rng);
    let bullets = measures
        .into_iter()
        .map(str::to_string)
        .chain(
            keywords
                .iter()
                .take(KEYWORD_BULLETS)
                .map(|keyword| format!("prioridade a {}", keyword)),
        )
        .take(PLAN_BULLETS)
        .map(|bullet| format!("- {}", capitalize(&bullet)));

    std::iter::once(PLAN_HEADING.to_string())
        .chain(bullets)
        .collect::<Vec<_>>()
        .join("\n")
}

fn closing_block(keywords: &[String], rng: &mut SeededRng) -> String {
    let mut closing = rng.pick(&CLOSINGS).to_string();
    if let Some(first) = keywords.first() {
        closing.push_str(&format!(
            " E começamos já por aquilo que nos trouxe aqui: {}.",
            first
        ));
    }
    format!("{}\n{}", closing, THANKS)
}

/// Title from the first keyword, a fixed phrase and a `YYYYMMDD-HHMM` stamp.
pub fn speech_title(keywords: &[String], now: NaiveDateTime) -> String {
    let stamp = now.format("%Y%m%d-%H%M");
    match keywords.first() {
        Some(keyword) => format!("{}: {} {}", capitalize(keyword), TITLE_PHRASE, stamp),
        None => format!("{} {}", TITLE_PHRASE, stamp),
    }
}

/// Pool terms present in a generated body, in pool order.
pub fn derive_keywords(body: &str) -> Vec<String> {
    let text = normalize_for_matching(body);
    KEYWORD_POOL
        .iter()
        .filter(|term| text.contains(&normalize_for_matching(term)))
        .take(MAX_DERIVED_KEYWORDS)
        .map(|term| term.to_string())
        .collect()
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
