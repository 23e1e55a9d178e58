//! Interactive input, kept behind a trait so that commands can be driven by scripted input.

use std::io::{BufRead, IsTerminal, Write};

/// Reads a line of user input after displaying a prompt
pub trait LineReader {
    /// Reads a value that should not be echoed, like a token.
    fn read_secret(&mut self, prompt: &str) -> std::io::Result<String>;

    fn read_line(&mut self, prompt: &str) -> std::io::Result<String>;
}

/// Reads from the controlling terminal, or line by line from stdin when it's piped
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    fn is_interactive() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl LineReader for Terminal {
    fn read_secret(&mut self, prompt: &str) -> std::io::Result<String> {
        if !Self::is_interactive() {
            return read_piped(std::io::stdin().lock(), std::io::stderr(), prompt);
        }
        dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
    }

    fn read_line(&mut self, prompt: &str) -> std::io::Result<String> {
        if !Self::is_interactive() {
            return read_piped(std::io::stdin().lock(), std::io::stderr(), prompt);
        }
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }
}

/// Displays the prompt and reads one line, an exhausted input giving an empty answer.
fn read_piped(
    mut input: impl BufRead,
    mut prompt_output: impl Write,
    prompt: &str,
) -> std::io::Result<String> {
    write!(prompt_output, "{prompt}: ")?;
    prompt_output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Returns true when the answer is `y` or `yes`, whatever the case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::{is_affirmative, read_piped};
    use std::io::Cursor;

    #[test]
    fn should_accept_yes_in_any_case() {
        for answer in ["y", "Y", "yes", "YES", "Yes", " yes\n"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn should_refuse_anything_else() {
        for answer in ["", "n", "no", "yess", "ye", "sure", "oui"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }

    #[test]
    fn should_read_piped_answer() {
        let mut prompt = Vec::new();
        let answer = read_piped(
            Cursor::new("yes\r\nignored\n"),
            &mut prompt,
            "Are you sure you want to delete '/x'? [y/N]",
        )
        .unwrap();
        assert_eq!(answer, "yes");
        assert!(is_affirmative(&answer));
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "Are you sure you want to delete '/x'? [y/N]: "
        );
    }

    #[test]
    fn should_read_empty_answer_from_exhausted_input() {
        let answer = read_piped(Cursor::new(""), std::io::sink(), "Token").unwrap();
        assert!(answer.is_empty());
        assert!(!is_affirmative(&answer));
    }
}
