//! Integration tests for the local synthesis engine

use ai_bridge::rng::SeededRng;
use ai_bridge::shape::{ExpectedShape, FieldSpec, FieldType};
use ai_bridge::synthesis::speech::{build_speech, PARAGRAPH_BREAK, PLAN_HEADING};
use ai_bridge::synthesis::{synthesize, ContentStrategy, Priority, SynthesisOptions, SynthesizedContent};
use ai_bridge::BridgeError;
use chrono::NaiveDate;
use serde_json::json;

fn options(seed: u64) -> SynthesisOptions {
    let now = NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    SynthesisOptions::new(seed, now)
}

#[test]
fn test_strategy_priority_order() {
    // Title markers win over every other cue
    assert_eq!(
        ContentStrategy::detect("Discurso com título para a reunião"),
        Some(ContentStrategy::TitledContent)
    );
    assert_eq!(
        ContentStrategy::detect("Discurso para a reunião"),
        Some(ContentStrategy::SpeechOnly)
    );
    assert_eq!(
        ContentStrategy::detect("Minuta com as tarefas da reunião"),
        Some(ContentStrategy::MeetingMinutes)
    );
    assert_eq!(
        ContentStrategy::detect("Lista de TAREFAS"),
        Some(ContentStrategy::TaskList)
    );
    assert_eq!(ContentStrategy::detect("Resume este artigo"), None);
}

#[test]
fn test_same_seed_same_object() {
    let prompt = "Discurso com título.\nTema: mobilidade\nPalavras-chave: comboios, autocarros";
    let a = synthesize(prompt, &options(9)).unwrap();
    let b = synthesize(prompt, &options(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_speech_frame() {
    let body = build_speech("a reforma da justiça", &[], &mut SeededRng::new(3));
    let blocks: Vec<&str> = body.split(PARAGRAPH_BREAK).collect();
    assert_eq!(blocks.len(), 4);
    assert!(blocks[0].contains("Hoje venho falar-vos de a reforma da justiça."));
    assert!(blocks[1].starts_with("Proponho três eixos de ação:"));
    assert_eq!(blocks[1].lines().count(), 4);
    assert!(blocks[2].starts_with(PLAN_HEADING));
    assert!(blocks[3].ends_with("Muito obrigado."));
}

#[test]
fn test_minutes_fixed_structure() {
    let content = synthesize("Prepara a ata da reunião", &options(1)).unwrap();
    let SynthesizedContent::MeetingMinutes(minutes) = content else {
        panic!("expected meeting minutes");
    };

    assert_eq!(minutes.date, "05/01/2026");
    assert_eq!(minutes.attendees.len(), 3);
    assert_eq!(minutes.topics.len(), 3);
    let priorities: Vec<Priority> = minutes.tasks.iter().map(|t| t.priority).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    assert!(minutes.tasks[2].assignee.is_none());
    assert!(minutes.tasks[2].deadline.is_none());
}

#[test]
fn test_task_list_is_seed_independent() {
    let a = synthesize("Plano de ação para setembro", &options(1)).unwrap();
    let b = synthesize("Plano de ação para setembro", &options(999)).unwrap();
    assert_eq!(a, b);
    let SynthesizedContent::TaskList(list) = a else {
        panic!("expected task list");
    };
    assert_eq!(list.tasks.len(), 8);
}

#[test]
fn test_projection_keeps_only_requested_fields() {
    let content = synthesize("Cria as tarefas da semana", &options(4)).unwrap();
    let shape = ExpectedShape::new(vec![
        FieldSpec::required("title", FieldType::String),
        FieldSpec::optional("owner", FieldType::String),
    ]);
    let result = content.project(&shape).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result["title"], json!("Plano de Ação da Campanha"));
}

#[test]
fn test_projection_type_mismatch() {
    let content = synthesize("Escreve um discurso", &options(4)).unwrap();
    let shape = ExpectedShape::new(vec![FieldSpec::required("content", FieldType::Number)]);
    assert!(matches!(
        content.project(&shape),
        Err(BridgeError::ShapeMismatch { .. })
    ));
}
