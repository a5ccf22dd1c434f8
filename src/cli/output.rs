//! CLI output: error mapping and text rendering of generated content.

use crate::error::BridgeError;
use crate::resolver::CapabilityResolver;
use crate::synthesis::{MeetingMinutes, SpeechContent, TaskList};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &BridgeError) -> String {
    e.to_string()
}

fn format_section_heading(title: &str, color: bool) -> String {
    if color {
        format!("{}", title.bold().underline())
    } else {
        title.to_string()
    }
}

/// Pretty JSON for `--json` output.
pub(crate) fn format_json<T: Serialize>(value: &T) -> Result<String, BridgeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(crate) fn format_status(resolver: &CapabilityResolver, seed: Option<u64>) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["Mode", resolver.state().as_str()]);
    table.add_row(vec!["Backend", resolver.backend_name()]);
    table.add_row(vec!["Endpoint", resolver.endpoint().unwrap_or("-")]);
    let seed = seed.map(|s| s.to_string()).unwrap_or_else(|| "clock".to_string());
    table.add_row(vec!["Seed", seed.as_str()]);
    table.to_string()
}

pub(crate) fn format_speech(speech: &SpeechContent, color: bool) -> String {
    let mut out = format_section_heading(&speech.title, color);
    out.push_str("\n\n");
    out.push_str(&speech.content);
    if !speech.keywords.is_empty() {
        out.push_str("\n\n");
        out.push_str(&format!("Palavras-chave: {}", speech.keywords.join(", ")));
    }
    out
}

pub(crate) fn format_minutes(minutes: &MeetingMinutes, color: bool) -> String {
    let mut out = format_section_heading(&format!("Minuta de {}", minutes.date), color);
    out.push_str("\n\n");
    out.push_str(&format!("Presentes: {}\n", minutes.attendees.join(", ")));
    out.push_str("Temas:\n");
    for topic in &minutes.topics {
        out.push_str(&format!("  - {}\n", topic));
    }
    out.push('\n');
    out.push_str(&minutes.summary);
    out.push_str("\n\n");

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Tarefa", "Prioridade", "Responsável", "Prazo"]);
    for item in &minutes.tasks {
        table.add_row(vec![
            item.task.as_str(),
            item.priority.as_str(),
            item.assignee.as_deref().unwrap_or("-"),
            item.deadline.as_deref().unwrap_or("-"),
        ]);
    }
    out.push_str(&table.to_string());
    out
}

pub(crate) fn format_task_plan(plan: &TaskList, color: bool) -> String {
    let mut out = format_section_heading(&plan.title, color);
    out.push_str("\n\n");
    if !plan.description.is_empty() {
        out.push_str(&plan.description);
        out.push_str("\n\n");
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Tarefa", "Prioridade", "Prazo", "Responsável"]);
    for (index, task) in plan.tasks.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            task.title.clone(),
            task.priority.as_str().to_string(),
            task.deadline.clone().unwrap_or_else(|| "-".to_string()),
            task.assignee.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    out.push_str(&table.to_string());
    out
}
