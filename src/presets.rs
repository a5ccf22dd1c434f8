//! Caller presets
//!
//! Typed front doors for the content the field app asks for: speeches,
//! meeting minutes and task plans. Each preset builds its prompt, declares its
//! shape, and rejects blank output instead of handing it on to be saved.

use crate::error::BridgeError;
use crate::message::GenerationRequest;
use crate::resolver::CapabilityResolver;
use crate::shape::{ExpectedShape, FieldSpec, FieldType, SynthesisResult};
use crate::synthesis::{ContentStrategy, MeetingMinutes, SpeechContent, TaskList};
use serde::de::DeserializeOwned;
use serde_json::Value;

const PRIORITIES: [&str; 3] = ["high", "medium", "low"];

/// Shape of a generated speech
pub fn speech_shape() -> ExpectedShape {
    ExpectedShape::new(vec![
        FieldSpec::required("title", FieldType::String),
        FieldSpec::required("content", FieldType::String),
        FieldSpec::required("keywords", FieldType::string_list()),
    ])
}

/// Shape of structured meeting minutes
pub fn minutes_shape() -> ExpectedShape {
    ExpectedShape::new(vec![
        FieldSpec::required("date", FieldType::String),
        FieldSpec::required("attendees", FieldType::string_list()),
        FieldSpec::required("topics", FieldType::string_list()),
        FieldSpec::required("summary", FieldType::String),
        FieldSpec::required(
            "tasks",
            FieldType::object_list(vec![
                FieldSpec::required("task", FieldType::String),
                FieldSpec::required("priority", FieldType::enumeration(&PRIORITIES)),
                FieldSpec::optional("assignee", FieldType::String),
                FieldSpec::optional("deadline", FieldType::String),
            ]),
        ),
    ])
}

/// Shape of a task plan
pub fn task_plan_shape() -> ExpectedShape {
    ExpectedShape::new(vec![
        FieldSpec::required("title", FieldType::String),
        FieldSpec::required("description", FieldType::String),
        FieldSpec::required(
            "tasks",
            FieldType::object_list(vec![
                FieldSpec::required("title", FieldType::String),
                FieldSpec::required("description", FieldType::String),
                FieldSpec::required("priority", FieldType::enumeration(&PRIORITIES)),
                FieldSpec::optional("deadline", FieldType::String),
                FieldSpec::optional("assignee", FieldType::String),
            ]),
        ),
    ])
}

fn decode<T: DeserializeOwned>(result: SynthesisResult) -> Result<T, BridgeError> {
    Ok(serde_json::from_value(Value::Object(result))?)
}

/// Generate a titled speech on `topic`, steering it with `keywords`.
pub async fn generate_speech(
    resolver: &CapabilityResolver,
    topic: &str,
    keywords: &[String],
) -> Result<SpeechContent, BridgeError> {
    let mut prompt = format!(
        "Escreve um discurso político com título e palavras-chave.\nTema: {}",
        topic.trim()
    );
    if !keywords.is_empty() {
        prompt.push_str(&format!("\nPalavras-chave: {}", keywords.join(", ")));
    }

    let result = resolver
        .generate_structured_object(
            &GenerationRequest::from_prompt(prompt).with_strategy(ContentStrategy::TitledContent),
            &speech_shape(),
        )
        .await?;
    let speech: SpeechContent = decode(result)?;

    if speech.content.trim().is_empty() {
        return Err(BridgeError::EmptyGenerationResult);
    }
    Ok(speech)
}

/// Turn free-form meeting notes into structured minutes.
pub async fn generate_meeting_minutes(
    resolver: &CapabilityResolver,
    notes: &str,
) -> Result<MeetingMinutes, BridgeError> {
    let prompt = format!(
        "Gera a minuta da reunião a partir destas notas:\n{}",
        notes.trim()
    );
    let result = resolver
        .generate_structured_object(
            &GenerationRequest::from_prompt(prompt).with_strategy(ContentStrategy::MeetingMinutes),
            &minutes_shape(),
        )
        .await?;
    let minutes: MeetingMinutes = decode(result)?;

    if minutes.summary.trim().is_empty() {
        return Err(BridgeError::EmptyGenerationResult);
    }
    Ok(minutes)
}

/// Break `goal` down into a prioritized task plan.
pub async fn generate_task_plan(
    resolver: &CapabilityResolver,
    goal: &str,
) -> Result<TaskList, BridgeError> {
    let prompt = format!("Cria uma lista de tarefas para: {}", goal.trim());
    let result = resolver
        .generate_structured_object(
            &GenerationRequest::from_prompt(prompt).with_strategy(ContentStrategy::TaskList),
            &task_plan_shape(),
        )
        .await?;
    let plan: TaskList = decode(result)?;

    if plan.tasks.is_empty() {
        return Err(BridgeError::EmptyGenerationResult);
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::ScriptedBackend;
    use crate::backend::SharedBackend;
    use crate::config::BridgeConfig;
    use crate::synthesis::Priority;
    use serde_json::json;
    use std::sync::Arc;

    fn remote_with(object: Value) -> CapabilityResolver {
        let mut config = BridgeConfig::default();
        config.backend.endpoint = Some("https://toolkit.example.org".to_string());
        CapabilityResolver::resolve(&config, move |_| {
            let object = object.as_object().cloned().unwrap();
            Some(Arc::new(ScriptedBackend::new(vec![], object)) as SharedBackend)
        })
    }

    #[test]
    fn test_preset_shapes_are_valid() {
        assert!(speech_shape().validate().is_ok());
        assert!(minutes_shape().validate().is_ok());
        assert!(task_plan_shape().validate().is_ok());
    }

    #[tokio::test]
    async fn test_local_speech_keeps_keywords() {
        let resolver = CapabilityResolver::local();
        let speech = generate_speech(
            &resolver,
            "Prioridades para o próximo orçamento",
            &["economia".to_string(), "saúde".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(speech.keywords, vec!["economia", "saúde"]);
        assert!(speech.title.starts_with("Economia: "));
        assert!(speech.content.contains("Prioridades para o próximo orçamento"));
    }

    #[tokio::test]
    async fn test_blank_remote_speech_is_rejected() {
        let resolver = remote_with(json!({ "title": "Vazio", "content": "  \n ", "keywords": [] }));
        let result = generate_speech(&resolver, "tema", &[]).await;
        assert!(matches!(result, Err(BridgeError::EmptyGenerationResult)));
    }

    #[tokio::test]
    async fn test_local_minutes() {
        let resolver = CapabilityResolver::local();
        let minutes = generate_meeting_minutes(&resolver, "Balanço da campanha de rua.")
            .await
            .unwrap();
        assert_eq!(minutes.tasks.len(), 3);
        assert_eq!(minutes.tasks[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_local_task_plan() {
        let resolver = CapabilityResolver::local();
        let plan = generate_task_plan(&resolver, "as autárquicas em Braga")
            .await
            .unwrap();
        assert_eq!(plan.tasks.len(), 8);
        assert_eq!(plan.title, "Plano de Ação da Campanha");
    }

    #[tokio::test]
    async fn test_minutes_notes_mentioning_a_speech() {
        let resolver = CapabilityResolver::local();
        let minutes = generate_meeting_minutes(
            &resolver,
            "Discutimos o discurso do presidente da concelhia",
        )
        .await
        .unwrap();
        assert_eq!(minutes.tasks.len(), 3);
    }

    #[tokio::test]
    async fn test_task_goal_mentioning_a_meeting() {
        let resolver = CapabilityResolver::local();
        let plan = generate_task_plan(&resolver, "preparar a reunião com os autarcas")
            .await
            .unwrap();
        assert_eq!(plan.tasks.len(), 8);
    }

    #[tokio::test]
    async fn test_empty_remote_task_plan_is_rejected() {
        let resolver = remote_with(json!({ "title": "Plano", "description": "", "tasks": [] }));
        let result = generate_task_plan(&resolver, "objetivo").await;
        assert!(matches!(result, Err(BridgeError::EmptyGenerationResult)));
    }
}
