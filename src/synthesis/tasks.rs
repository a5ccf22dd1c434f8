//! Fixed campaign task list.

use super::minutes::Priority;
use serde::{Deserialize, Serialize};

const DEFAULT_DEADLINE: &str = "2 semanas";
const DEFAULT_ASSIGNEE: &str = "Equipa";

// (title, priority, carries deadline and assignee)
const TASKS: [(&str, Priority, bool); 8] = [
    ("Definir a mensagem central da campanha", Priority::High, true),
    ("Mapear as freguesias prioritárias", Priority::High, true),
    ("Organizar a equipa de voluntários", Priority::High, true),
    ("Preparar materiais de comunicação", Priority::Medium, true),
    ("Calendarizar as ações de rua", Priority::Medium, true),
    ("Reforçar a presença nas redes sociais", Priority::Medium, true),
    ("Angariar fundos e controlar o orçamento", Priority::High, true),
    ("Avaliar resultados e ajustar a estratégia", Priority::Medium, false),
];

/// One entry of a task plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

/// Structured task plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub title: String,
    pub description: String,
    pub tasks: Vec<PlannedTask>,
}

pub fn build_task_list() -> TaskList {
    let tasks = TASKS
        .iter()
        .map(|(title, priority, scheduled)| PlannedTask {
            title: title.to_string(),
            description: format!(
                "{} — detalhar responsáveis, prazos e métricas de sucesso",
                title
            ),
            priority: *priority,
            deadline: scheduled.then(|| DEFAULT_DEADLINE.to_string()),
            assignee: scheduled.then(|| DEFAULT_ASSIGNEE.to_string()),
        })
        .collect();

    TaskList {
        title: "Plano de Ação da Campanha".to_string(),
        description: "Plano de trabalho para organizar as próximas semanas de atividade \
                      política no terreno."
            .to_string(),
        tasks,
    }
}
