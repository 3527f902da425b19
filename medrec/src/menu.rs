//! Interactive report menu.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use medrec_core::ReportSelector;

/// What the operator picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Report(ReportSelector),
}

/// Parse one menu line. Only whole numbers 0-4 are accepted.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().parse::<u8>().ok()? {
        0 => Some(MenuChoice::Exit),
        code => ReportSelector::from_code(code).map(MenuChoice::Report),
    }
}

pub fn print_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", "Enter the number of your choice".bold())?;
    writeln!(output)?;
    writeln!(output, "0- Exit the program")?;
    for selector in ReportSelector::ALL {
        writeln!(output, "{}- {}", selector.code(), selector.description())?;
    }
    Ok(())
}

/// Show the menu and read until a valid choice is entered.
///
/// End of input counts as choosing to exit.
pub fn prompt_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<MenuChoice> {
    print_menu(output)?;

    let mut line = String::new();
    loop {
        write!(output, "? ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Exit);
        }
        if let Some(choice) = parse_choice(&line) {
            return Ok(choice);
        }
    }
}
