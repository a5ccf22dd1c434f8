//! Local Synthesis Engine
//!
//! Fabricates campaign content without a language model. The prompt text is
//! the only input signal: it selects one content strategy, the strategy
//! produces a typed variant, and the variant is projected onto the caller's
//! shape. Randomness comes from an explicit seed so output is reproducible.

use crate::backend::GenerationBackend;
use crate::error::BridgeError;
use crate::message::{ChatMessage, GenerationRequest, MessageRole};
use crate::rng::SeededRng;
use crate::shape::{ExpectedShape, SynthesisResult};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use serde_json::{Map, Value};
use tracing::debug;

pub mod minutes;
pub mod phrases;
pub mod reply;
pub mod speech;
pub mod strategy;
pub mod tasks;

pub use minutes::{ActionItem, MeetingMinutes, Priority};
pub use reply::local_reply;
pub use speech::SpeechContent;
pub use strategy::ContentStrategy;
pub use tasks::{PlannedTask, TaskList};

/// Inputs that vary between otherwise identical synthesis calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Seed for the prose generator
    pub seed: u64,
    /// Wall-clock time used for dates and title stamps
    pub now: NaiveDateTime,
}

impl SynthesisOptions {
    pub fn new(seed: u64, now: NaiveDateTime) -> Self {
        Self { seed, now }
    }

    /// Seed and time taken from the local clock.
    pub fn current() -> Self {
        let now = Local::now();
        Self {
            seed: now.timestamp_millis().unsigned_abs(),
            now: now.naive_local(),
        }
    }

    /// Fixed seed, current time.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            now: Local::now().naive_local(),
        }
    }
}

/// Output of one content strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesizedContent {
    TitledContent(SpeechContent),
    SpeechOnly(SpeechContent),
    MeetingMinutes(MeetingMinutes),
    TaskList(TaskList),
}

impl SynthesizedContent {
    pub fn strategy(&self) -> ContentStrategy {
        match self {
            SynthesizedContent::TitledContent(_) => ContentStrategy::TitledContent,
            SynthesizedContent::SpeechOnly(_) => ContentStrategy::SpeechOnly,
            SynthesizedContent::MeetingMinutes(_) => ContentStrategy::MeetingMinutes,
            SynthesizedContent::TaskList(_) => ContentStrategy::TaskList,
        }
    }

    /// Every field this variant can produce, as a JSON object.
    pub fn to_fields(&self) -> Result<Map<String, Value>, BridgeError> {
        let value = match self {
            SynthesizedContent::TitledContent(speech) | SynthesizedContent::SpeechOnly(speech) => {
                serde_json::to_value(speech)?
            }
            SynthesizedContent::MeetingMinutes(minutes) => serde_json::to_value(minutes)?,
            SynthesizedContent::TaskList(list) => serde_json::to_value(list)?,
        };

        match value {
            Value::Object(map) => Ok(map),
            other => Err(BridgeError::ShapeMismatch {
                field: "<root>".to_string(),
                expected: "object".to_string(),
                actual: other.to_string(),
            }),
        }
    }

    /// Project onto a caller shape.
    pub fn project(&self, shape: &ExpectedShape) -> Result<SynthesisResult, BridgeError> {
        shape.project(&self.to_fields()?)
    }
}

/// Run the strategy matching `prompt`.
///
/// Fails with [`BridgeError::UnsupportedContent`] when no strategy matches;
/// the same prompt always fails the same way.
pub fn synthesize(
    prompt: &str,
    options: &SynthesisOptions,
) -> Result<SynthesizedContent, BridgeError> {
    let strategy = ContentStrategy::detect(prompt).ok_or_else(BridgeError::unsupported_content)?;
    Ok(synthesize_as(strategy, prompt, options))
}

/// Run `strategy` on `prompt` without detection.
pub fn synthesize_as(
    strategy: ContentStrategy,
    prompt: &str,
    options: &SynthesisOptions,
) -> SynthesizedContent {
    debug!(strategy = strategy.name(), seed = options.seed, "Local synthesis");

    let mut rng = SeededRng::new(options.seed);
    match strategy {
        ContentStrategy::TitledContent => {
            let keywords = strategy::extract_keywords(prompt);
            let topic = strategy::extract_topic(prompt);
            let content = speech::build_speech(&topic, &keywords, &mut rng);
            SynthesizedContent::TitledContent(SpeechContent {
                title: speech::speech_title(&keywords, options.now),
                content,
                keywords,
            })
        }
        ContentStrategy::SpeechOnly => {
            let topic = strategy::extract_topic(prompt);
            let content = speech::build_speech(&topic, &[], &mut rng);
            SynthesizedContent::SpeechOnly(SpeechContent {
                title: speech::speech_title(&[], options.now),
                keywords: speech::derive_keywords(&content),
                content,
            })
        }
        ContentStrategy::MeetingMinutes => {
            SynthesizedContent::MeetingMinutes(minutes::build_minutes(options.now.date()))
        }
        ContentStrategy::TaskList => SynthesizedContent::TaskList(tasks::build_task_list()),
    }
}

/// Backend served entirely by the local engine
#[derive(Debug, Clone, Default)]
pub struct LocalEngine {
    fixed_seed: Option<u64>,
}

impl LocalEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose every call uses `seed` instead of a clock-derived one.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            fixed_seed: Some(seed),
        }
    }

    fn options(&self) -> SynthesisOptions {
        match self.fixed_seed {
            Some(seed) => SynthesisOptions::with_seed(seed),
            None => SynthesisOptions::current(),
        }
    }
}

#[async_trait]
impl GenerationBackend for LocalEngine {
    fn backend_name(&self) -> &str {
        "local"
    }

    async fn send_message(&self, messages: &[ChatMessage]) -> Result<String, BridgeError> {
        let input = messages
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::User)
            .map(ChatMessage::text)
            .unwrap_or_default();
        Ok(local_reply(&input))
    }

    async fn generate_object(
        &self,
        request: &GenerationRequest,
        shape: &ExpectedShape,
    ) -> Result<SynthesisResult, BridgeError> {
        let prompt = request.prompt();
        let content = match request.strategy {
            Some(strategy) => synthesize_as(strategy, &prompt, &self.options()),
            None => synthesize(&prompt, &self.options())?,
        };
        content.project(shape)
    }

    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, BridgeError> {
        Ok(local_reply(&request.prompt()))
    }
}
