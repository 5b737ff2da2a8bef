use crate::error::{CalcError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::sync::{Mutex, PoisonError};

/// The only place the calculator touches the user.
#[async_trait]
pub trait CalculatorConsole: Send + Sync {
    /// Display the rendered menu block.
    async fn show_menu(&self, menu: &str) -> Result<()>;

    /// Prompt for and read the menu number.
    async fn read_choice(&self, prompt: &str) -> Result<i32>;

    /// Prompt for and read one operand.
    async fn read_operand(&self, prompt: &str) -> Result<f32>;

    /// Display a successful result line.
    async fn show_result(&self, line: &str) -> Result<()>;

    /// Display an `!! ERROR:` line.
    async fn show_error(&self, line: &str) -> Result<()>;
}

pub(crate) fn parse_choice(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| CalcError::InvalidNumber(token.to_string()))
}

pub(crate) fn parse_operand(token: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| CalcError::InvalidNumber(token.to_string()))
}

struct LineConsoleInner<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

/// Token-oriented console over any reader and writer.
///
/// Input is split on whitespace regardless of line breaks, so `1 2 3` typed on
/// one line answers the choice and both operands. Prompts are written without
/// a newline and flushed before reading.
pub struct LineConsole<R, W> {
    inner: Mutex<LineConsoleInner<R, W>>,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            inner: Mutex::new(LineConsoleInner {
                reader,
                writer,
                pending: VecDeque::new(),
            }),
        }
    }

    /// Consumes the console and hands back the writer, e.g. to inspect a transcript.
    pub fn into_writer(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn prompt_and_read(&self, prompt: &str) -> Result<String> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.writer.write_all(prompt.as_bytes())?;
        inner.writer.flush()?;

        loop {
            if let Some(token) = inner.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if inner.reader.read_line(&mut line)? == 0 {
                return Err(CalcError::EndOfInput);
            }
            inner
                .pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn write_line(&self, text: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(inner.writer, "{}", text)?;
        inner.writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl<R, W> CalculatorConsole for LineConsole<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    async fn show_menu(&self, menu: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.writer.write_all(menu.as_bytes())?;
        inner.writer.flush()?;
        Ok(())
    }

    async fn read_choice(&self, prompt: &str) -> Result<i32> {
        let token = self.prompt_and_read(prompt)?;
        parse_choice(&token)
    }

    async fn read_operand(&self, prompt: &str) -> Result<f32> {
        let token = self.prompt_and_read(prompt)?;
        parse_operand(&token)
    }

    async fn show_result(&self, line: &str) -> Result<()> {
        self.write_line(line)
    }

    async fn show_error(&self, line: &str) -> Result<()> {
        self.write_line(line)
    }
}

// Exposed for testing
pub mod mocks {
    use super::*;
    use std::sync::Arc;

    /// What a [`MockConsole`] was asked to do, in order.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ConsoleEvent {
        Menu,
        Prompt(String),
        Result(String),
        Error(String),
    }

    /// Console fed from a queue of typed answers. An empty queue reads as end of input.
    #[derive(Default, Clone)]
    pub struct MockConsole {
        pub answers: Arc<Mutex<VecDeque<String>>>,
        pub events: Arc<Mutex<Vec<ConsoleEvent>>>,
    }

    impl MockConsole {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_answers<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let console = Self::new();
            for answer in answers {
                console.add_answer(answer);
            }
            console
        }

        pub fn add_answer(&self, answer: impl Into<String>) {
            self.answers.lock().unwrap().push_back(answer.into());
        }

        pub fn events(&self) -> Vec<ConsoleEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn prompts(&self) -> Vec<String> {
            self.collect(|e| match e {
                ConsoleEvent::Prompt(p) => Some(p.clone()),
                _ => None,
            })
        }

        pub fn results(&self) -> Vec<String> {
            self.collect(|e| match e {
                ConsoleEvent::Result(r) => Some(r.clone()),
                _ => None,
            })
        }

        pub fn errors(&self) -> Vec<String> {
            self.collect(|e| match e {
                ConsoleEvent::Error(r) => Some(r.clone()),
                _ => None,
            })
        }

        pub fn menu_count(&self) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| **e == ConsoleEvent::Menu)
                .count()
        }

        fn collect<F>(&self, pick: F) -> Vec<String>
        where
            F: Fn(&ConsoleEvent) -> Option<String>,
        {
            self.events.lock().unwrap().iter().filter_map(pick).collect()
        }

        fn record(&self, event: ConsoleEvent) {
            self.events.lock().unwrap().push(event);
        }

        fn next_answer(&self, prompt: &str) -> Result<String> {
            self.record(ConsoleEvent::Prompt(prompt.to_string()));
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(CalcError::EndOfInput)
        }
    }

    #[async_trait]
    impl CalculatorConsole for MockConsole {
        async fn show_menu(&self, _menu: &str) -> Result<()> {
            self.record(ConsoleEvent::Menu);
            Ok(())
        }

        async fn read_choice(&self, prompt: &str) -> Result<i32> {
            let answer = self.next_answer(prompt)?;
            parse_choice(answer.trim())
        }

        async fn read_operand(&self, prompt: &str) -> Result<f32> {
            let answer = self.next_answer(prompt)?;
            parse_operand(answer.trim())
        }

        async fn show_result(&self, line: &str) -> Result<()> {
            self.record(ConsoleEvent::Result(line.to_string()));
            Ok(())
        }

        async fn show_error(&self, line: &str) -> Result<()> {
            self.record(ConsoleEvent::Error(line.to_string()));
            Ok(())
        }
    }
}
