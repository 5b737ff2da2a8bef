use std::fmt;

/// Result of a single dispatch. Only `Success` carries a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Success { value: f32, operator: char },
    DivideByZero,
    ModuloZero,
    Exit,
    UnknownError,
}

/// Fieldless tag of an [`Outcome`], used for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    Success,
    DivideByZero,
    ModuloZero,
    Exit,
    UnknownError,
}

impl Outcome {
    pub fn success(value: f32, operator: char) -> Self {
        Self::Success { value, operator }
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            Self::Success { .. } => OutcomeStatus::Success,
            Self::DivideByZero => OutcomeStatus::DivideByZero,
            Self::ModuloZero => OutcomeStatus::ModuloZero,
            Self::Exit => OutcomeStatus::Exit,
            Self::UnknownError => OutcomeStatus::UnknownError,
        }
    }

    /// Whether this outcome ends the calculator session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exit | Self::UnknownError)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::DivideByZero => "divide_by_zero",
            Self::ModuloZero => "modulo_zero",
            Self::Exit => "exit",
            Self::UnknownError => "unknown_error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags() {
        assert_eq!(Outcome::success(1.0, '+').status(), OutcomeStatus::Success);
        assert_eq!(Outcome::DivideByZero.status(), OutcomeStatus::DivideByZero);
        assert_eq!(Outcome::ModuloZero.status(), OutcomeStatus::ModuloZero);
        assert_eq!(Outcome::Exit.status(), OutcomeStatus::Exit);
        assert_eq!(Outcome::UnknownError.status(), OutcomeStatus::UnknownError);
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(Outcome::Exit.is_terminal());
        assert!(Outcome::UnknownError.is_terminal());
        assert!(!Outcome::DivideByZero.is_terminal());
        assert!(!Outcome::ModuloZero.is_terminal());
        assert!(!Outcome::success(0.0, '*').is_terminal());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(OutcomeStatus::DivideByZero.to_string(), "divide_by_zero");
        assert_eq!(OutcomeStatus::Success.to_string(), "success");
    }
}
