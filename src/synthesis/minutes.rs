//! Fixed meeting minutes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Action item agreed in a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Structured meeting minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMinutes {
    pub date: String,
    pub attendees: Vec<String>,
    pub topics: Vec<String>,
    pub summary: String,
    pub tasks: Vec<ActionItem>,
}

pub fn build_minutes(today: NaiveDate) -> MeetingMinutes {
    MeetingMinutes {
        date: today.format("%d/%m/%Y").to_string(),
        attendees: vec![
            "Ana Martins (Presidente da Concelhia)".to_string(),
            "João Ferreira (Secretário)".to_string(),
            "Rita Sousa (Coordenadora Autárquica)".to_string(),
        ],
        topics: vec![
            "Balanço das ações de rua do último mês".to_string(),
            "Preparação das eleições autárquicas".to_string(),
            "Comunicação e presença nas redes sociais".to_string(),
        ],
        summary: "A reunião fez o balanço da atividade recente, alinhou as prioridades para \
                  a preparação autárquica e definiu responsáveis pelas próximas ações de \
                  comunicação e mobilização."
            .to_string(),
        tasks: vec![
            ActionItem {
                task: "Preparar o calendário de ações de rua".to_string(),
                priority: Priority::High,
                assignee: Some("Ana Martins".to_string()),
                deadline: Some("Próxima semana".to_string()),
            },
            ActionItem {
                task: "Rever o plano de comunicação digital".to_string(),
                priority: Priority::Medium,
                assignee: None,
                deadline: Some("30 dias".to_string()),
            },
            ActionItem {
                task: "Atualizar a base de contactos de militantes".to_string(),
                priority: Priority::Low,
                assignee: None,
                deadline: None,
            },
        ],
    }
}
