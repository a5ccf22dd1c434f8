//! Content strategy selection and prompt parsing.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Maximum keywords taken from a prompt's keyword list
pub const MAX_PROMPT_KEYWORDS: usize = 12;

/// Maximum characters of topic text carried into a speech
pub const MAX_TOPIC_CHARS: usize = 160;

/// Mutually exclusive local content strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStrategy {
    TitledContent,
    SpeechOnly,
    MeetingMinutes,
    TaskList,
}

const TITLED_MARKERS: &[&str] = &[
    "título",
    "titulo",
    "title",
    "palavras-chave",
    "palavras chave",
    "keywords",
    "temas",
    "themes",
];

const SPEECH_MARKERS: &[&str] = &["discurso", "speech"];

const MINUTES_MARKERS: &[&str] = &[
    "minuta",
    "reunião",
    "reuniao",
    "meeting",
    "minutes",
];

const TASK_MARKERS: &[&str] = &[
    "tarefa",
    "task",
    "to-do",
    "plano de ação",
    "plano de acção",
    "plan",
];

impl ContentStrategy {
    /// Pick the first strategy, in priority order, whose markers appear in the prompt.
    pub fn detect(prompt: &str) -> Option<Self> {
        let text = normalize_for_matching(prompt);
        let matches = |markers: &[&str]| markers.iter().any(|marker| text.contains(marker));

        if matches(TITLED_MARKERS) {
            Some(ContentStrategy::TitledContent)
        } else if matches(SPEECH_MARKERS) {
            Some(ContentStrategy::SpeechOnly)
        } else if matches(MINUTES_MARKERS) || minutes_word_pattern().is_match(&text) {
            Some(ContentStrategy::MeetingMinutes)
        } else if matches(TASK_MARKERS) {
            Some(ContentStrategy::TaskList)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContentStrategy::TitledContent => "titled_content",
            ContentStrategy::SpeechOnly => "speech_only",
            ContentStrategy::MeetingMinutes => "meeting_minutes",
            ContentStrategy::TaskList => "task_list",
        }
    }
}

/// NFC-normalize and lowercase, so composed and decomposed accents match alike.
pub fn normalize_for_matching(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Collapse every whitespace run into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max` characters of `text`, and whether anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> (String, bool) {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}

/// "ata"/"atas" as whole words only, so "data da" does not count
fn minutes_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\batas?\b").expect("minutes pattern is valid"))
}

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:palavras[\s-]*chave|keywords)\s*:[ \t]*([^\n]*)")
            .expect("keyword pattern is valid")
    })
}

fn topic_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:tema|t[oó]pico|topic)\s*:[ \t]*([^\n]+)").expect("topic pattern is valid")
    })
}

/// Comma-separated keywords following a `palavras-chave:` marker.
///
/// Prompts phrased any other way yield an empty list.
pub fn extract_keywords(prompt: &str) -> Vec<String> {
    let prompt = prompt.nfc().collect::<String>();
    let Some(captures) = keyword_pattern().captures(&prompt) else {
        return Vec::new();
    };

    captures[1]
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .take(MAX_PROMPT_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Topic text for a speech: the `tema:` line if present, else the whole prompt.
pub fn extract_topic(prompt: &str) -> String {
    let prompt = prompt.nfc().collect::<String>();
    let topic = topic_pattern()
        .captures(&prompt)
        .map(|captures| collapse_whitespace(&captures[1]))
        .filter(|topic| !topic.is_empty())
        .unwrap_or_else(|| collapse_whitespace(&prompt));

    truncate_chars(&topic, MAX_TOPIC_CHARS).0
}
