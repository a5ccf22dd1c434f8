//! CLI route: single route table and run context. Dispatches to the resolver and presets.

use crate::config::{BridgeConfig, ConfigLoader};
use crate::error::BridgeError;
use crate::message::GenerationRequest;
use crate::presets::{generate_meeting_minutes, generate_speech, generate_task_plan};
use crate::resolver::CapabilityResolver;
use crate::session::ChatSession;
use crate::shape::ExpectedShape;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cli::output::{
    format_json, format_minutes, format_speech, format_status, format_task_plan,
};
use crate::cli::parse::{parse_keyword_list, Commands};

/// Typing this in chat ends the session
const CHAT_EXIT: &str = "/sair";

/// Runtime context for CLI execution: resolved configuration, the resolver and
/// the async runtime generation calls run on.
pub struct RunContext {
    config: BridgeConfig,
    resolver: CapabilityResolver,
    runtime: tokio::runtime::Runtime,
    json: bool,
    color: bool,
}

impl RunContext {
    /// Create run context from an already loaded configuration.
    pub fn from_config(config: BridgeConfig, json: bool) -> Result<Self, BridgeError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| BridgeError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        let resolver = CapabilityResolver::from_config(&config);
        info!(mode = resolver.state().as_str(), "Run context initialized");

        Ok(Self {
            config,
            resolver,
            runtime,
            json,
            color: std::io::stdout().is_terminal(),
        })
    }

    /// Load configuration (explicit file, else layered from `base_dir`) and
    /// build the context. `seed` overrides the configured local seed.
    pub fn new(
        base_dir: &Path,
        config_path: Option<PathBuf>,
        seed: Option<u64>,
        json: bool,
    ) -> Result<Self, BridgeError> {
        let mut config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(base_dir)?,
        };
        if seed.is_some() {
            config.synthesis.seed = seed;
        }
        if let Err(errors) = config.validate() {
            for e in &errors {
                warn!(error = %e, "Invalid configuration value");
            }
        }
        Self::from_config(config, json)
    }

    pub fn resolver(&self) -> &CapabilityResolver {
        &self.resolver
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, BridgeError> {
        debug!(json = self.json, "Executing command");
        match command {
            Commands::Status => Ok(format_status(&self.resolver, self.config.synthesis.seed)),
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| BridgeError::ConfigError(format!("Failed to render config: {}", e))),
            Commands::Speech { topic, keywords } => {
                let keywords = parse_keyword_list(keywords.as_deref());
                let speech = self
                    .runtime
                    .block_on(generate_speech(&self.resolver, topic, &keywords))?;
                if self.json {
                    format_json(&speech)
                } else {
                    Ok(format_speech(&speech, self.color))
                }
            }
            Commands::Minutes { notes } => {
                let minutes = self
                    .runtime
                    .block_on(generate_meeting_minutes(&self.resolver, notes))?;
                if self.json {
                    format_json(&minutes)
                } else {
                    Ok(format_minutes(&minutes, self.color))
                }
            }
            Commands::Tasks { goal } => {
                let plan = self
                    .runtime
                    .block_on(generate_task_plan(&self.resolver, goal))?;
                if self.json {
                    format_json(&plan)
                } else {
                    Ok(format_task_plan(&plan, self.color))
                }
            }
            Commands::Object { shape, prompt } => {
                let shape = read_shape(shape)?;
                let object = self.runtime.block_on(
                    self.resolver
                        .generate_structured_object(&GenerationRequest::from_prompt(prompt.as_str()), &shape),
                )?;
                format_json(&object)
            }
            Commands::Text { prompt } => self.runtime.block_on(
                self.resolver
                    .generate_free_text(&GenerationRequest::from_prompt(prompt.as_str())),
            ),
            Commands::Chat { system } => self.run_chat(system.as_deref()),
        }
    }

    fn run_chat(&self, system: Option<&str>) -> Result<String, BridgeError> {
        let mut session = match system {
            Some(prompt) => ChatSession::with_system_prompt(prompt),
            None => ChatSession::new(),
        };

        println!(
            "Conversa em modo {} (escreva {} para sair)",
            self.resolver.state().as_str(),
            CHAT_EXIT
        );
        loop {
            let input: String = dialoguer::Input::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| BridgeError::ConfigError(format!("Failed to get user input: {}", e)))?;
            let input = input.trim();
            if input == CHAT_EXIT {
                break;
            }
            if input.is_empty() {
                continue;
            }

            session = self
                .runtime
                .block_on(self.resolver.send_conversational_message(&session, input))?;
            if let Some(reply) = session.last() {
                println!("\n{}\n", reply.text());
            }
        }

        Ok(format!("Sessão terminada com {} mensagens.", session.len()))
    }
}

/// Read an object shape definition from a JSON file.
fn read_shape(path: &Path) -> Result<ExpectedShape, BridgeError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        BridgeError::ConfigError(format!("Failed to read shape file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| BridgeError::InvalidShape(format!("{}: {}", path.display(), e)))
}
