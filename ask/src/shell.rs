use postfind_core::Outcome;

const QUIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    /// Blank line, nothing to do.
    Skip,
    Quit,
    Ask(&'a str),
}

impl<'a> ShellCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ShellCommand::Skip
        } else if QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
            ShellCommand::Quit
        } else {
            ShellCommand::Ask(line)
        }
    }
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Answer(answer) => format!(
            "\n--- Answer (from your file) ---\n{}\n-------------------------------\n",
            answer.text
        ),
        Outcome::EmptyQuery => "\nSorry, no meaningful words found in your query.\n".to_string(),
        Outcome::NoMatch { .. } => "\nSorry, I couldn't find an answer in the file.\n".to_string(),
        Outcome::EmptyCorpus => "\nNo documents are loaded.\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postfind_core::Answer;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(ShellCommand::parse(""), ShellCommand::Skip);
        assert_eq!(ShellCommand::parse("   \t"), ShellCommand::Skip);
    }

    #[test]
    fn quit_words_are_case_insensitive() {
        for w in ["exit", "QUIT", " q ", "Exit"] {
            assert_eq!(ShellCommand::parse(w), ShellCommand::Quit);
        }
        assert_eq!(ShellCommand::parse("quit smoking"), ShellCommand::Ask("quit smoking"));
    }

    #[test]
    fn questions_are_trimmed() {
        assert_eq!(ShellCommand::parse("  where is the cat?\n"), ShellCommand::Ask("where is the cat?"));
    }

    #[test]
    fn renders_each_outcome() {
        let answer = Outcome::Answer(Answer { index: 0, score: 0.9, text: "the cat sat".into() });
        assert!(render_outcome(&answer).contains("--- Answer (from your file) ---\nthe cat sat\n"));
        assert!(render_outcome(&Outcome::EmptyQuery).contains("no meaningful words"));
        assert!(render_outcome(&Outcome::NoMatch { best: None }).contains("couldn't find an answer"));
        assert!(render_outcome(&Outcome::EmptyCorpus).contains("No documents"));
    }
}
