//! Everything the calculator writes to the user, as plain text.
//!
//! Consoles may decorate these strings but must not change their content.

use crate::error::{CalcError, Result};
use crate::operation::Operation;
use crate::outcome::Outcome;

pub const MENU_TITLE: &str = "MENU";
pub const CHOICE_PROMPT: &str = "Enter your choice:";
pub const FIRST_OPERAND_PROMPT: &str = "\nEnter first operand:";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second operand:";

macro_rules! error_line {
    ($msg:literal) => {
        concat!("!! ERROR: ", $msg)
    };
}

pub const INVALID_CHOICE_MESSAGE: &str = error_line!("Please choose one of the options in the menu!");
pub const INVALID_NUMBER_MESSAGE: &str = error_line!("Please enter a valid number!");
pub const DIVIDE_BY_ZERO_MESSAGE: &str = error_line!("You are not allowed to divide by 0 !!");
pub const MODULO_ZERO_MESSAGE: &str = error_line!("You are not allowed to get the modulo of 0 !!");

/// The menu block: a blank line, the title, one line per entry, a blank line.
pub fn render_menu() -> String {
    let mut menu = format!("\n{}\n", MENU_TITLE);
    for op in Operation::MENU_ORDER {
        menu.push_str(&format!("{}\n", op));
    }
    menu.push('\n');
    menu
}

pub fn validate_choice(choice: i32) -> Result<Operation> {
    Operation::from_choice(choice).ok_or(CalcError::InvalidChoice(choice))
}

/// `>> Result: <first> <op> <second> = <value>`, one decimal place each.
pub fn format_result(first: f32, second: f32, operator: char, value: f32) -> String {
    format!(
        ">> Result: {:.1} {} {:.1} = {:.1}",
        first, operator, second, value
    )
}

/// Renders the line for an outcome, or `None` when the outcome prints nothing.
pub fn render_outcome(first: f32, second: f32, outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Success { value, operator } => {
            Some(format_result(first, second, *operator, *value))
        }
        Outcome::DivideByZero => Some(DIVIDE_BY_ZERO_MESSAGE.to_string()),
        Outcome::ModuloZero => Some(MODULO_ZERO_MESSAGE.to_string()),
        Outcome::Exit | Outcome::UnknownError => None,
    }
}

/// User-facing line for a recoverable input error.
pub fn render_input_error(error: &CalcError) -> Option<&'static str> {
    match error {
        CalcError::InvalidChoice(_) => Some(INVALID_CHOICE_MESSAGE),
        CalcError::InvalidNumber(_) => Some(INVALID_NUMBER_MESSAGE),
        CalcError::EndOfInput | CalcError::Io(_) => None,
    }
}
