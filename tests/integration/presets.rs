//! Integration tests for caller presets on the local engine

use ai_bridge::config::BridgeConfig;
use ai_bridge::presets::{generate_meeting_minutes, generate_speech, generate_task_plan};
use ai_bridge::CapabilityResolver;

fn seeded_resolver(seed: u64) -> CapabilityResolver {
    let mut config = BridgeConfig::default();
    config.synthesis.seed = Some(seed);
    CapabilityResolver::from_config(&config)
}

#[tokio::test]
async fn test_seeded_speech_is_reproducible_across_resolvers() {
    let keywords = vec!["educação".to_string()];
    let a = generate_speech(&seeded_resolver(11), "Escola pública", &keywords)
        .await
        .unwrap();
    let b = generate_speech(&seeded_resolver(11), "Escola pública", &keywords)
        .await
        .unwrap();
    assert_eq!(a.content, b.content);
    assert!(a.content.contains("Escola pública"));
    assert!(a.content.contains("Prioridade a educação"));
}

#[tokio::test]
async fn test_speech_without_keywords() {
    let speech = generate_speech(&seeded_resolver(5), "Interior do país", &[])
        .await
        .unwrap();
    assert!(speech.keywords.is_empty());
    assert!(speech.title.starts_with("Discurso de Compromisso"));
}

#[tokio::test]
async fn test_minutes_and_plan_from_presets() {
    let resolver = seeded_resolver(3);
    let minutes = generate_meeting_minutes(&resolver, "").await.unwrap();
    assert!(!minutes.summary.is_empty());

    let plan = generate_task_plan(&resolver, "eleições autárquicas").await.unwrap();
    assert_eq!(plan.tasks.len(), 8);
    assert!(plan.tasks.iter().all(|t| !t.title.is_empty()));
}
