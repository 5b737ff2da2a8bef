use crate::arithmetic::perform_calculation;
use crate::console::CalculatorConsole;
use crate::error::{CalcError, Result};
use crate::outcome::{Outcome, OutcomeStatus};
use crate::render::{self, CHOICE_PROMPT, FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Stopped,
}

/// Why a session left the `Running` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Exit,
    UnknownError,
    EndOfInput,
    IterationLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub iterations: usize,
    pub calculations: usize,
    pub rejected_choices: usize,
    pub recoverable_errors: usize,
    pub stop_reason: StopReason,
}

impl SessionSummary {
    fn new() -> Self {
        Self {
            iterations: 0,
            calculations: 0,
            rejected_choices: 0,
            recoverable_errors: 0,
            stop_reason: StopReason::EndOfInput,
        }
    }
}

/// Result of one pass through the loop body.
enum Step {
    Continue,
    Stop(StopReason),
}

/// Drives the menu / read / dispatch / report loop against a console.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    max_iterations: Option<usize>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after this many iterations. `None` runs until the user exits.
    pub fn with_max_iterations(mut self, max_iterations: Option<usize>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Runs until the user exits, the input ends, or the iteration cap is hit.
    ///
    /// Only console I/O failures are returned as errors; every other way of
    /// stopping is reported through [`SessionSummary::stop_reason`].
    pub async fn run(&self, console: &impl CalculatorConsole) -> Result<SessionSummary> {
        info!("Calculator session started");
        let mut summary = SessionSummary::new();
        let mut state = RunState::Running;

        while state == RunState::Running {
            if self
                .max_iterations
                .is_some_and(|max| summary.iterations >= max)
            {
                summary.stop_reason = StopReason::IterationLimit;
                state = RunState::Stopped;
                continue;
            }

            summary.iterations += 1;
            debug!("Loop iteration {}", summary.iterations);

            match self.step(console, &mut summary).await {
                Ok(Step::Continue) => {}
                Ok(Step::Stop(reason)) => {
                    summary.stop_reason = reason;
                    state = RunState::Stopped;
                }
                Err(CalcError::EndOfInput) => {
                    info!("Input ended, stopping");
                    summary.stop_reason = StopReason::EndOfInput;
                    state = RunState::Stopped;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Calculator session stopped ({:?}) after {} iterations, {} calculations",
            summary.stop_reason, summary.iterations, summary.calculations
        );
        Ok(summary)
    }

    async fn step(
        &self,
        console: &impl CalculatorConsole,
        summary: &mut SessionSummary,
    ) -> Result<Step> {
        console.show_menu(&render::render_menu()).await?;

        let choice = match console
            .read_choice(CHOICE_PROMPT)
            .await
            .and_then(|c| render::validate_choice(c).map(|_| c))
        {
            Ok(choice) => choice,
            Err(e) if e.is_recoverable() => {
                warn!("Rejected menu choice: {}", e);
                summary.rejected_choices += 1;
                console.show_error(render::INVALID_CHOICE_MESSAGE).await?;
                return Ok(Step::Continue);
            }
            Err(e) => return Err(e),
        };

        let operands = async {
            let first = console.read_operand(FIRST_OPERAND_PROMPT).await?;
            let second = console.read_operand(SECOND_OPERAND_PROMPT).await?;
            Ok::<_, CalcError>((first, second))
        };
        let (first, second) = match operands.await {
            Ok(pair) => pair,
            Err(e) if e.is_recoverable() => {
                warn!("Rejected operand: {}", e);
                summary.recoverable_errors += 1;
                if let Some(line) = render::render_input_error(&e) {
                    console.show_error(line).await?;
                }
                return Ok(Step::Continue);
            }
            Err(e) => return Err(e),
        };

        let outcome = perform_calculation(choice, first, second);
        debug!(
            "choice={} first={} second={} status={}",
            choice,
            first,
            second,
            outcome.status()
        );

        if outcome.is_terminal() {
            let reason = match outcome {
                Outcome::Exit => StopReason::Exit,
                _ => StopReason::UnknownError,
            };
            return Ok(Step::Stop(reason));
        }

        if let Some(line) = render::render_outcome(first, second, &outcome) {
            if outcome.status() == OutcomeStatus::Success {
                summary.calculations += 1;
                console.show_result(&line).await?;
            } else {
                summary.recoverable_errors += 1;
                console.show_error(&line).await?;
            }
        }
        Ok(Step::Continue)
    }
}
