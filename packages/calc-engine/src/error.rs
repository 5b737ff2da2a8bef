use thiserror::Error;

/// Failures the calculator loop can run into while talking to the console.
///
/// Arithmetic faults (division by zero, modulo of zero) are not errors here;
/// they are ordinary [`crate::outcome::Outcome`] variants.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("choice {0} is not one of the menu options")]
    InvalidChoice(i32),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("input ended")]
    EndOfInput,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Errors the loop recovers from by starting a fresh iteration.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidChoice(_) | Self::InvalidNumber(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
