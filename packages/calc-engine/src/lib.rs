pub mod arithmetic;
pub mod calculator;
pub mod console;
pub mod error;
pub mod operation;
pub mod outcome;
pub mod render;

pub use calculator::{Calculator, SessionSummary, StopReason};
pub use console::{CalculatorConsole, LineConsole};
pub use error::{CalcError, Result};
pub use operation::Operation;
pub use outcome::{Outcome, OutcomeStatus};
