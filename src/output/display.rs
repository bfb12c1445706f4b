//! Display functions for command results

use crate::commands::SolveResult;
use colored::Colorize;
use std::io::{self, Write};

/// Write one word per line
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_words<W: Write>(mut writer: W, words: &[String]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()
}

/// Print matching words to stdout, one per line
///
/// # Errors
///
/// Returns an error if stdout cannot be written, e.g. a closed pipe.
pub fn print_words(words: &[String]) -> io::Result<()> {
    write_words(io::stdout().lock(), words)
}

/// Print a run summary to stderr
///
/// Kept off stdout so the word list stays machine-readable.
pub fn print_summary(result: &SolveResult) {
    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(
        " {} {} ",
        "ANAGRAMS OF".bright_cyan().bold(),
        result.letters.bright_yellow().bold()
    );
    eprintln!("{}", "─".repeat(60).cyan());

    eprintln!("   Dictionary:    {} words", result.dictionary_words);
    eprintln!(
        "   Candidates:    {} generated, {} unique",
        result.generated, result.unique
    );
    eprintln!(
        "   Matches:       {}",
        format!("{}", result.words.len()).green().bold()
    );
    eprintln!("   Time taken:    {:.3}s", result.elapsed.as_secs_f64());

    if result.words.is_empty() {
        return;
    }

    eprintln!("\n📈 {}", "By length:".bright_cyan().bold());
    for (length, count) in length_histogram(&result.words) {
        eprintln!("   {length:2}: {count}");
    }
}

/// Count words per character length, shortest first
fn length_histogram(words: &[String]) -> Vec<(usize, usize)> {
    let mut histogram: Vec<(usize, usize)> = Vec::new();
    for word in words {
        let length = word.chars().count();
        match histogram.iter_mut().find(|(l, _)| *l == length) {
            Some((_, count)) => *count += 1,
            None => histogram.push((length, 1)),
        }
    }
    histogram.sort_unstable();
    histogram
}
