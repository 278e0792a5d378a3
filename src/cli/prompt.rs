//! Yes/no confirmation prompt

use dialoguer::Confirm;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{Result, UpdateError};

/// True when the first character of the trimmed answer is `y` or `Y`
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Print `question` to `writer` and read one answer line from `reader`
///
/// End of input counts as a refusal.
pub fn read_confirmation<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    question: &str,
) -> io::Result<bool> {
    write!(writer, "{} (y/n): ", question)?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn confirm_prompt(question: &str) -> Confirm<'static> {
    Confirm::new()
        .with_prompt(question)
        .default(false)
        .wait_for_newline(true)
}

/// Ask `question` on the console
///
/// Uses an interactive prompt on a terminal and a plain line read otherwise.
/// Both wait for Enter.
pub fn confirm(question: &str) -> Result<bool> {
    if io::stdin().is_terminal() {
        confirm_prompt(question)
            .interact()
            .map_err(UpdateError::Prompt)
    } else {
        let answer = read_confirmation(io::stdin().lock(), io::stdout(), question)
            .map_err(UpdateError::PromptInput)?;
        println!();
        Ok(answer)
    }
}
