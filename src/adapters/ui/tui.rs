//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Menu loop: calculate BMI, ask the assistant, show category tips, quit.

use crate::adapters::ui::gauge;
use crate::domain::{BmiResult, DomainError, Measurement};
use crate::ports::InputPort;
use crate::usecases::{AdviceService, Session};
use async_trait::async_trait;
use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::validator::Validation;
use inquire::{CustomType, InquireError, Select, Text};
use std::fmt;
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Plausible input ranges offered as hints. Values outside only trigger a warning.
const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);
const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 300.0);
const DEFAULT_HEIGHT_CM: f64 = 170.0;
const DEFAULT_WEIGHT_KG: f64 = 70.0;

const CLOSING_LINE: &str =
    "Good luck on your wellness journey! Remember, small steps lead to big changes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Calculate,
    AskAssistant,
    ShowTips,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Calculate => "Calculate BMI",
            MenuAction::AskAssistant => "Ask the health assistant",
            MenuAction::ShowTips => "Show tips for my category",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Menu entries. The assistant is hidden when advice is disabled.
pub fn menu_options(advice_enabled: bool) -> Vec<MenuAction> {
    let mut options = vec![MenuAction::Calculate];
    if advice_enabled {
        options.push(MenuAction::AskAssistant);
    }
    options.push(MenuAction::ShowTips);
    options.push(MenuAction::Quit);
    options
}

/// Warning for values that are positive but outside the usual human range.
pub fn range_warning(m: &Measurement) -> Option<String> {
    let mut notes = Vec::new();
    if m.height_cm < HEIGHT_RANGE_CM.0 || m.height_cm > HEIGHT_RANGE_CM.1 {
        notes.push(format!(
            "height {} cm is outside {}-{} cm",
            m.height_cm, HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1
        ));
    }
    if m.weight_kg < WEIGHT_RANGE_KG.0 || m.weight_kg > WEIGHT_RANGE_KG.1 {
        notes.push(format!(
            "weight {} kg is outside {}-{} kg",
            m.weight_kg, WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1
        ));
    }
    if notes.is_empty() {
        None
    } else {
        Some(format!("Please double-check: {}.", notes.join(", ")))
    }
}

fn prompt_err(e: InquireError) -> DomainError {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            DomainError::Cancelled
        }
        other => DomainError::Ui(other.to_string()),
    }
}

fn print_colored(color: Color, text: &str) {
    let mut out = stdout();
    let _ = out.queue(SetForegroundColor(color));
    let _ = out.queue(Print(text));
    let _ = out.queue(ResetColor);
    let _ = out.queue(Print("\r\n"));
    let _ = out.flush();
}

fn print_error(text: &str) {
    print_colored(Color::Red, text);
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    advice: Arc<AdviceService>,
}

impl TuiInputPort {
    pub fn new(advice: Arc<AdviceService>) -> Self {
        Self { advice }
    }

    /// Ask for height and weight until the engine accepts them or the user cancels.
    fn calculate(&self, session: &mut Session) -> Result<(), DomainError> {
        loop {
            let height_cm = CustomType::<f64>::new("Enter your height in cm:")
                .with_default(DEFAULT_HEIGHT_CM)
                .with_help_message("Typical range 50-250 cm")
                .with_error_message("Please type a number")
                .prompt()
                .map_err(prompt_err)?;
            let weight_kg = CustomType::<f64>::new("Enter your weight in kg:")
                .with_default(DEFAULT_WEIGHT_KG)
                .with_help_message("Typical range 10-300 kg")
                .with_error_message("Please type a number")
                .prompt()
                .map_err(prompt_err)?;

            let measurement = Measurement::new(height_cm, weight_kg);
            match session.recompute(&measurement) {
                Ok(result) => {
                    if let Some(note) = range_warning(&measurement) {
                        print_colored(Color::Yellow, &note);
                    }
                    show_result(&result);
                    return Ok(());
                }
                Err(e @ DomainError::InvalidMeasurement { .. }) => {
                    debug!(error = %e, "rejected measurement");
                    print_error("Please enter a positive value for height and weight.");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn ask(&self, session: &Session) -> Result<(), DomainError> {
        if session.last_result().is_none() {
            print_colored(Color::Yellow, "Calculate your BMI first.");
            return Ok(());
        }

        let question = Text::new("Ask your question here:")
            .with_validator(|s: &str| {
                if s.trim().is_empty() {
                    Ok(Validation::Invalid("Please type a question".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt()
            .map_err(prompt_err)?;

        let Some(request) = session.advice_request(question) else {
            return Ok(());
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Generating response... (Ctrl+C to cancel)");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = self
            .advice
            .generate_advice_until(&request, tokio::signal::ctrl_c())
            .await;
        spinner.finish_and_clear();

        let response = outcome?;
        println!();
        println!("{}", response.text);
        println!();
        print_colored(Color::Green, CLOSING_LINE);
        Ok(())
    }

    fn show_tips(&self, session: &Session) {
        match session.last_result() {
            Some(result) => {
                print_colored(
                    gauge::band_color(result.category),
                    &format!("Tips for the {} range:", result.category),
                );
                for tip in result.category.tips() {
                    println!("  - {}", tip);
                }
            }
            None => print_colored(Color::Yellow, "Calculate your BMI first."),
        }
    }
}

fn show_result(result: &BmiResult) {
    println!();
    println!("Your BMI is {:.2}", result.value);
    print_colored(
        gauge::band_color(result.category),
        result.category.description(),
    );
    if let Err(e) = gauge::render(&mut stdout(), result) {
        warn!(error = %e, "failed to draw gauge");
    }
    println!();
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut session = Session::new();
        let advice_enabled = self.advice.is_enabled();
        if advice_enabled {
            debug!(provider = self.advice.provider_name(), "advice enabled");
        } else {
            print_colored(
                Color::Yellow,
                "API key not found. AI advice is disabled; category tips are still available.",
            );
        }

        loop {
            let action = match Select::new("What would you like to do?", menu_options(advice_enabled))
                .prompt()
            {
                Ok(action) => action,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    MenuAction::Quit
                }
                Err(e) => return Err(prompt_err(e)),
            };

            let outcome = match action {
                MenuAction::Calculate => self.calculate(&mut session),
                MenuAction::AskAssistant => self.ask(&session).await,
                MenuAction::ShowTips => {
                    self.show_tips(&session);
                    Ok(())
                }
                MenuAction::Quit => return Ok(()),
            };

            match outcome {
                Ok(()) => {}
                Err(DomainError::Cancelled) => print_colored(Color::Yellow, "Cancelled."),
                Err(e) if e.is_terminal() => return Err(e),
                Err(e) => {
                    debug!(error = %e, "action failed");
                    print_error(&e.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_hides_assistant_when_disabled() {
        assert!(!menu_options(false).contains(&MenuAction::AskAssistant));
        assert!(menu_options(true).contains(&MenuAction::AskAssistant));
        assert_eq!(menu_options(false).last(), Some(&MenuAction::Quit));
    }

    #[test]
    fn test_range_warning() {
        assert!(range_warning(&Measurement::new(170.0, 70.0)).is_none());
        let note = range_warning(&Measurement::new(30.0, 400.0)).unwrap();
        assert!(note.contains("height"));
        assert!(note.contains("weight"));
    }

    #[test]
    fn test_prompt_cancel_maps_to_cancelled() {
        assert_eq!(
            prompt_err(InquireError::OperationCanceled),
            DomainError::Cancelled
        );
        assert!(prompt_err(InquireError::NotTTY).is_terminal());
    }
}
