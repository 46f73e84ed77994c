//! The `verbquiz play` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use verbquiz_core::config::load_config_from;
use verbquiz_core::model::AnswerResult;
use verbquiz_core::{Advance, RoundController, RoundSummary};

pub async fn execute(
    verbs_path: Option<PathBuf>,
    questions: Option<usize>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let verbs_path = verbs_path.or(config.verbs_path);
    let max_questions = questions.unwrap_or(config.max_questions);
    let seed = seed.or(config.seed);

    let mut bank = super::load_bank(verbs_path.as_deref()).await?;
    if let Some(seed) = seed {
        bank = bank.with_seed(seed);
    }
    tracing::debug!(verbs = bank.len(), max_questions, ?seed, "starting session");

    let mut controller = RoundController::new(bank, max_questions)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut controller, stdin.lock(), stdout.lock())
}

/// Drive rounds from line-based input until the player quits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    controller: &mut RoundController,
    input: R,
    mut out: W,
) -> Result<()> {
    let mut lines = input.lines();

    writeln!(
        out,
        "Irregular verbs: {} questions per round. Type the preterit and the participle.",
        controller.max_questions()
    )?;

    'session: loop {
        controller.start_round()?;
        show_question(controller, &mut out)?;

        // Answer / review cycle; a blank field is asked again, the other is kept
        let mut preterit = String::new();
        let mut participle = String::new();
        loop {
            for (label, answer) in [("preterit", &mut preterit), ("participle", &mut participle)] {
                if !answer.trim().is_empty() {
                    continue;
                }
                let Some(line) = prompt(&mut lines, &mut out, label)? else {
                    writeln!(out, "\nRound abandoned.")?;
                    return Ok(());
                };
                *answer = line;
            }

            let Some(result) = controller.submit_answer(&preterit, &participle)? else {
                writeln!(out, "Both forms are needed.")?;
                continue;
            };
            show_result(&result, controller.score(), &mut out)?;
            preterit.clear();
            participle.clear();

            match controller.advance()? {
                Advance::NextQuestion { .. } => show_question(controller, &mut out)?,
                Advance::RoundOver(summary) => {
                    show_summary(&summary, &mut out)?;
                    break;
                }
            }
        }

        // Post-round menu
        loop {
            write!(
                out,
                "Review a step (1-{}), 'n' for a new round, Enter to quit: ",
                controller.history().len()
            )?;
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                writeln!(out)?;
                return Ok(());
            };

            match line.trim() {
                "" | "q" => return Ok(()),
                "n" => continue 'session,
                choice => match choice.parse::<usize>() {
                    Ok(step) if step >= 1 => match controller.review_step(step - 1) {
                        Ok(review) => writeln!(out, "  {}", review.text)?,
                        Err(e) if !e.is_fatal() => writeln!(out, "  No such step: {step}")?,
                        Err(e) => return Err(e.into()),
                    },
                    _ => writeln!(out, "  Unrecognized choice: {choice}")?,
                },
            }
        }
    }
}

fn prompt<I, W>(lines: &mut I, out: &mut W, label: &str) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
    W: Write,
{
    write!(out, "  {label}> ")?;
    out.flush()?;
    Ok(lines.next().transpose()?)
}

fn show_question<W: Write>(controller: &RoundController, out: &mut W) -> Result<()> {
    let view = controller.view();
    let present = view.present.unwrap_or_default();
    writeln!(
        out,
        "\nQuestion {}/{}: {present}",
        view.questions_asked, view.max_questions
    )?;
    Ok(())
}

fn show_result<W: Write>(result: &AnswerResult, score: u32, out: &mut W) -> Result<()> {
    let fields = [
        ("preterit", result.preterit_correct, &result.verb.preterit),
        ("participle", result.participle_correct, &result.verb.participle),
    ];
    for (label, correct, accepted) in fields {
        let status = if correct { "OK" } else { "WRONG" };
        writeln!(out, "  {label:<10} {status:<5} {accepted}")?;
    }
    writeln!(out, "  Score: {score}")?;
    Ok(())
}

fn show_summary<W: Write>(summary: &RoundSummary, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Verb", "Preterit", "Participle", "Result"]);
    for (i, result) in summary.history.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            result.verb.present.clone(),
            result.user_preterit.clone(),
            result.user_participle.clone(),
            result.mark().to_string(),
        ]);
    }

    let stats = &summary.stats;
    let elapsed = summary.finished_at - summary.started_at;

    writeln!(out, "\n{table}")?;
    writeln!(
        out,
        "Preterits {}/{}, participles {}/{}, accuracy {:.0}% ({}s)",
        stats.preterit_correct,
        stats.answered,
        stats.participle_correct,
        stats.answered,
        stats.accuracy * 100.0,
        elapsed.num_seconds()
    )?;
    writeln!(out, "{}", summary.message)?;
    Ok(())
}
