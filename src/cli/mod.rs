//! Terminal chat surface: a line-oriented REPL over the chat router.
//!
//! Interactive mode uses rustyline with history; setting
//! `FINBOT_CORE_CLI_SCRIPT` switches to script mode, which consumes stdin
//! line by line (used by integration tests and piping).

mod output;

use std::io::{self, BufRead};

use chrono::Utc;
use dialoguer::{theme::ColorfulTheme, Input};
use rustyline::{error::ReadlineError, DefaultEditor};
use thiserror::Error;

use crate::chat::{BotReply, ChatRouter, ReplyKind};
use crate::config::{ConfigManager, TrackerConfig};
use crate::errors::CoreError;
use crate::ledger::Ledger;
use crate::storage::{JsonStore, LedgerStore};

/// Chat verbs the near-miss suggester knows about.
const KNOWN_VERBS: &[&str] = &[
    "undo", "summary", "total", "chart", "graph", "biggest", "highest",
];

/// User-facing failures from the chat shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliMode {
    Interactive,
    Script,
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("FINBOT_CORE_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut session = ChatSession::open()?;
    match mode {
        CliMode::Interactive => session.run_interactive(),
        CliMode::Script => session.run_script(),
    }
}

struct ChatSession {
    router: ChatRouter,
    store: JsonStore,
    ledger: Ledger,
    config: TrackerConfig,
}

impl ChatSession {
    fn open() -> Result<Self, CliError> {
        let store = JsonStore::default_location()?;
        let ledger = store.load()?;
        let config = ConfigManager::default_location()?.load()?;
        Ok(Self {
            router: ChatRouter::new(),
            store,
            ledger,
            config,
        })
    }

    fn run_interactive(&mut self) -> Result<(), CliError> {
        output::banner();
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline("you> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    editor.add_history_entry(trimmed).ok();
                    if is_exit(trimmed) {
                        output::info("Bye!");
                        break;
                    }
                    self.handle_line(trimmed, true)?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    output::info("Bye!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    fn run_script(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(CoreError::Io)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if is_exit(trimmed) {
                break;
            }
            self.handle_line(trimmed, false)?;
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, interactive: bool) -> Result<(), CliError> {
        let now = Utc::now();
        let reply = self
            .router
            .route(line, &self.ledger.transactions, &self.config, now);

        if interactive && reply.kind == ReplyKind::NeedsAmount {
            output::bot(&reply.message);
            let amount: f64 = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Amount")
                .interact_text()
                .map_err(|err| CoreError::InvalidInput(err.to_string()))?;
            let augmented = format!("{line} {amount}");
            let retry = self
                .router
                .route(&augmented, &self.ledger.transactions, &self.config, now);
            return self.render(retry, line, interactive);
        }

        self.render(reply, line, interactive)
    }

    fn render(&mut self, reply: BotReply, line: &str, interactive: bool) -> Result<(), CliError> {
        if let Some(action) = reply.action {
            self.ledger.apply(action);
            self.store.save(&self.ledger)?;
        }
        output::bot(&reply.message);
        if let Some(chart) = &reply.chart {
            output::chart(chart, &self.config.currency);
        }
        if interactive && reply.kind == ReplyKind::Help {
            if let Some(verb) = suggest(line) {
                output::hint(&format!("Did you mean \"{verb}\"?"));
            }
        }
        Ok(())
    }
}

fn is_exit(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower == "exit" || lower == "quit"
}

/// Closest known verb within edit distance two of the first word, if any.
fn suggest(input: &str) -> Option<&'static str> {
    let first = input.split_whitespace().next()?.to_lowercase();
    KNOWN_VERBS
        .iter()
        .map(|verb| (strsim::levenshtein(&first, verb), verb))
        .filter(|(distance, _)| *distance > 0 && *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, verb)| *verb)
}
