use anyhow::Result;
use calc_engine::render::{self, render_menu};
use calc_engine::{Calculator, LineConsole, SessionSummary, StopReason};
use std::io::Cursor;

async fn run_session(input: &str) -> Result<(String, SessionSummary)> {
    let console = LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let summary = Calculator::new().run(&console).await?;
    let transcript = String::from_utf8(console.into_writer())?;
    Ok((transcript, summary))
}

fn round_with_operands() -> String {
    format!(
        "{}{}{}{}",
        render_menu(),
        render::CHOICE_PROMPT,
        render::FIRST_OPERAND_PROMPT,
        render::SECOND_OPERAND_PROMPT
    )
}

#[tokio::test]
async fn test_addition_scenario() -> Result<()> {
    let (transcript, summary) = run_session("1\n2.0\n3.0\n0\n0\n0\n").await?;

    let round = round_with_operands();
    assert_eq!(
        transcript,
        format!("{round}>> Result: 2.0 + 3.0 = 5.0\n{round}")
    );
    assert_eq!(summary.stop_reason, StopReason::Exit);
    Ok(())
}

#[tokio::test]
async fn test_divide_by_zero_scenario() -> Result<()> {
    let (transcript, summary) = run_session("4 5.0 0.0\n").await?;

    assert!(transcript.contains(&format!("{}\n", render::DIVIDE_BY_ZERO_MESSAGE)));
    // still running: the menu came back before input ran out
    assert_eq!(transcript.matches("MENU").count(), 2);
    assert_eq!(summary.stop_reason, StopReason::EndOfInput);
    assert_eq!(summary.recoverable_errors, 1);
    Ok(())
}

#[tokio::test]
async fn test_modulo_of_zero_scenario() -> Result<()> {
    let (transcript, summary) = run_session("5 0.0 3.0\n").await?;

    assert!(transcript.contains(render::MODULO_ZERO_MESSAGE));
    assert_eq!(transcript.matches("MENU").count(), 2);
    assert_eq!(summary.calculations, 0);
    Ok(())
}

#[tokio::test]
async fn test_modulus_truncation_scenario() -> Result<()> {
    let (transcript, _) = run_session("5 7.5 2.0\n").await?;

    assert!(transcript.contains(">> Result: 7.5 % 2.0 = 1.0\n"));
    Ok(())
}

#[tokio::test]
async fn test_exit_scenario() -> Result<()> {
    let (transcript, summary) = run_session("0 1 1\n1 2 3\n").await?;

    assert_eq!(transcript, round_with_operands());
    assert_eq!(summary.stop_reason, StopReason::Exit);
    assert_eq!(summary.iterations, 1);
    Ok(())
}

#[tokio::test]
async fn test_invalid_choice_scenario() -> Result<()> {
    let (transcript, summary) = run_session("9\n").await?;

    let expected = format!(
        "{menu}{ask}{err}\n{menu}{ask}",
        menu = render_menu(),
        ask = render::CHOICE_PROMPT,
        err = render::INVALID_CHOICE_MESSAGE,
    );
    assert_eq!(transcript, expected);
    assert!(!transcript.contains("operand"));
    assert_eq!(summary.rejected_choices, 1);
    Ok(())
}

#[tokio::test]
async fn test_all_operations_in_one_session() -> Result<()> {
    let input = "1 1.5 2.5\n2 10 4.5\n3 -2 8\n4 9 2\n5 17 5\n0 0 0\n";
    let (transcript, summary) = run_session(input).await?;

    let results: Vec<&str> = transcript
        .lines()
        .filter_map(|l| l.find(">> ").map(|i| &l[i..]))
        .collect();
    assert_eq!(
        results,
        vec![
            ">> Result: 1.5 + 2.5 = 4.0",
            ">> Result: 10.0 - 4.5 = 5.5",
            ">> Result: -2.0 * 8.0 = -16.0",
            ">> Result: 9.0 / 2.0 = 4.5",
            ">> Result: 17.0 % 5.0 = 2.0",
        ]
    );
    assert_eq!(summary.calculations, 5);
    assert_eq!(summary.iterations, 6);
    assert_eq!(summary.stop_reason, StopReason::Exit);
    Ok(())
}
