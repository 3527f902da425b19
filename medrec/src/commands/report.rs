//! Batch and interactive report runs.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use medrec_core::{ReportEngine, Session};

use crate::menu::{self, MenuChoice};

/// Run a single report code against stdin/stdout.
pub fn run_batch<S: Session>(session: &mut S, code: u8) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    batch(session, code, stdin.lock(), stdout.lock())
}

/// Show the menu on stdin/stdout until the operator exits.
pub fn run_interactive<S: Session>(session: &mut S) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    interactive(session, stdin.lock(), stdout.lock())
}

/// Close the session and print the farewell line.
pub fn finish<S: Session, W: Write>(session: &mut S, mut output: W) -> Result<()> {
    session.close();
    writeln!(output, "Finishing...")?;
    output.flush()?;
    Ok(())
}

pub fn batch<S, R, W>(session: &mut S, code: u8, input: R, output: W) -> Result<()>
where
    S: Session,
    R: BufRead,
    W: Write,
{
    ReportEngine::new(session, input, output).execute_code(code);
    Ok(())
}

pub fn interactive<S, R, W>(session: &mut S, mut input: R, mut output: W) -> Result<()>
where
    S: Session,
    R: BufRead,
    W: Write,
{
    loop {
        match menu::prompt_choice(&mut input, &mut output)? {
            MenuChoice::Exit => break,
            MenuChoice::Report(selector) => {
                ReportEngine::new(&mut *session, &mut input, &mut output).execute(selector);
            }
        }
    }
    Ok(())
}
