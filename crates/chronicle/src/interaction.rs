use chronicle_core::Severity;
use dialoguer::{Confirm, Input, Select};

use crate::error::{CliError, Result};

/// Answers the author-facing questions of the change flow. Implemented by
/// the terminal prompter here and by scripted providers in tests.
pub trait Prompter {
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be completed.
    fn ask_comment(&self) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the prompt cannot be completed or is dismissed.
    fn ask_severity(&self) -> Result<Severity>;

    /// # Errors
    ///
    /// Returns an error if the prompt cannot be completed or is dismissed.
    fn confirm(&self, message: &str) -> Result<bool>;
}

pub struct TerminalPrompter;

const SEVERITY_CHOICES: [Severity; 5] = [
    Severity::Patch,
    Severity::Minor,
    Severity::Major,
    Severity::None,
    Severity::Dependency,
];

impl Prompter for TerminalPrompter {
    fn ask_comment(&self) -> Result<String> {
        Input::<String>::new()
            .with_prompt("Describe the change")
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_to_cli_error)
    }

    fn ask_severity(&self) -> Result<Severity> {
        let items: Vec<String> = SEVERITY_CHOICES
            .iter()
            .map(|severity| format!("{severity} - {}", severity.description()))
            .collect();

        let selection = Select::new()
            .with_prompt("Select the change type")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(dialoguer_to_cli_error)?;

        match selection {
            Some(0) => Ok(Severity::Patch),
            Some(1) => Ok(Severity::Minor),
            Some(2) => Ok(Severity::Major),
            Some(3) => Ok(Severity::None),
            Some(4) => Ok(Severity::Dependency),
            _ => Err(CliError::Cancelled),
        }
    }

    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(message)
            .interact_opt()
            .map_err(dialoguer_to_cli_error)?;

        answer.ok_or(CliError::Cancelled)
    }
}

fn dialoguer_to_cli_error(e: dialoguer::Error) -> CliError {
    match e {
        dialoguer::Error::IO(io_err) => CliError::Io(io_err),
    }
}
