use anyhow::{Context, Result};
use async_trait::async_trait;
use calc_engine::{CalcError, Calculator, CalculatorConsole, LineConsole, render};
use clap::Parser;
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{self, BufReader, IsTerminal};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Interactive five-operation calculator", long_about = None)]
struct Args {
    /// Enable debug logging (written to stderr)
    #[arg(long)]
    debug: bool,

    /// Use the plain line console even on a terminal
    #[arg(long)]
    plain: bool,

    /// Stop after this many menu rounds
    #[arg(long)]
    max_iterations: Option<usize>,
}

/// Terminal console backed by dialoguer prompts and styled output.
struct TerminalConsole {
    theme: ColorfulTheme,
}

impl TerminalConsole {
    fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

/// dialoguer draws its own separator, so drop the layout newline and trailing colon.
fn dialoguer_prompt(prompt: &str) -> &str {
    prompt.trim().trim_end_matches(':')
}

fn console_error(err: dialoguer::Error) -> CalcError {
    let err = io::Error::from(err);
    if err.kind() == io::ErrorKind::UnexpectedEof {
        CalcError::EndOfInput
    } else {
        CalcError::Io(err)
    }
}

#[async_trait]
impl CalculatorConsole for TerminalConsole {
    async fn show_menu(&self, menu: &str) -> calc_engine::Result<()> {
        for line in menu.lines() {
            if line == render::MENU_TITLE {
                println!("{}", style(line).bold().cyan());
            } else {
                println!("{}", line);
            }
        }
        Ok(())
    }

    async fn read_choice(&self, prompt: &str) -> calc_engine::Result<i32> {
        Input::<i32>::with_theme(&self.theme)
            .with_prompt(dialoguer_prompt(prompt))
            .interact_text()
            .map_err(console_error)
    }

    async fn read_operand(&self, prompt: &str) -> calc_engine::Result<f32> {
        Input::<f32>::with_theme(&self.theme)
            .with_prompt(dialoguer_prompt(prompt))
            .interact_text()
            .map_err(console_error)
    }

    async fn show_result(&self, line: &str) -> calc_engine::Result<()> {
        println!("{}", style(line).bold().green());
        Ok(())
    }

    async fn show_error(&self, line: &str) -> calc_engine::Result<()> {
        println!("{}", style(line).red());
        Ok(())
    }
}

fn log_filter(debug: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if debug {
        EnvFilter::new("info,calc_cli=debug,calc_engine=debug")
    } else {
        EnvFilter::new("warn")
    }
}

fn setup_logging(debug: bool) {
    // stdout belongs to the calculator transcript
    fmt::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn use_terminal_console(args: &Args) -> bool {
    !args.plain && io::stdin().is_terminal() && console::user_attended()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.debug);

    let calculator = Calculator::new().with_max_iterations(args.max_iterations);
    debug!("Iteration limit: {:?}", calculator.max_iterations());

    let summary = if use_terminal_console(&args) {
        info!("Using terminal console");
        calculator
            .run(&TerminalConsole::new())
            .await
            .context("Calculator session failed")?
    } else {
        info!("Using line console");
        let console = LineConsole::new(BufReader::new(io::stdin()), io::stdout());
        calculator
            .run(&console)
            .await
            .context("Calculator session failed")?
    };

    info!("Session summary: {:?}", summary);
    Ok(())
}
