//! Interactive stdin prompts.
//!
//! Answers are read line-by-line and trimmed; EOF reads as an empty answer
//! so piped input works the same as a terminal.

use anyhow::Result;
use std::io::{self, Write};

/// Print a question and read one trimmed line from stdin.
pub fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Like [`ask`], but an empty answer falls back to `default`.
pub fn ask_or(question: &str, default: &str) -> Result<String> {
    let answer = ask(question)?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Yes/no question. Anything other than an affirmative answer is a no.
pub fn confirm(question: &str) -> Result<bool> {
    Ok(is_yes(&ask(question)?))
}

/// Only `y` or `yes` (any case) count as yes.
pub fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
