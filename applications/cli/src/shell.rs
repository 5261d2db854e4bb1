/// Line-oriented shell over a single session
use crate::commands::{ShellCommand, ShellLine};
use crate::error::{CliError, Result};
use crate::Session;
use clap::Parser;
use flowdesk_client::UserGateway;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

const PROMPT: &str = "flowdesk> ";

/// Split a line into words the way a POSIX shell would.
///
/// Single quotes keep everything literal. Inside double quotes a backslash
/// only escapes `"` and `\`; outside quotes it escapes any character.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(q), _) if ch == q => quote = None,
            (Some('"'), '\\') => match chars.peek() {
                Some(&next) if next == '"' || next == '\\' => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(ch),
            },
            (Some(_), _) => current.push(ch),
            (None, '\\') => {
                let Some(next) = chars.next() else {
                    return Err(CliError::Usage("line ends with an escape".to_string()));
                };
                current.push(next);
                in_word = true;
            }
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, _) if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CliError::Usage(format!("unterminated {} quote", q)));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Read commands from `input` until end of input or `exit`.
///
/// A failing command is reported on `out` and the loop carries on.
pub async fn run<G, R, W>(session: &mut Session<G>, input: R, out: &mut W) -> Result<()>
where
    G: UserGateway + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(err) => {
                write!(out, "{}", err)?;
                continue;
            }
        };

        debug!(command = ?parsed.command, "Shell command");
        let result = match parsed.command {
            ShellCommand::Users(command) => session.users(command, out).await,
            ShellCommand::Dashboard => session.dashboard(out).await,
            ShellCommand::Exit => return Ok(()),
        };

        if let Err(err) = result {
            writeln!(out, "Error: {}", err)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_words("  list   --search  bret ").unwrap(),
            vec!["list", "--search", "bret"]
        );
    }

    #[test]
    fn test_split_quoted_words() {
        let words = split_words(r#"create --name "Ann Lee" --phone '555 01'"#).unwrap();
        assert_eq!(words, vec!["create", "--name", "Ann Lee", "--phone", "555 01"]);
    }

    #[test]
    fn test_split_empty_quotes_make_empty_word() {
        assert_eq!(
            split_words(r#"update 1 --name """#).unwrap(),
            vec!["update", "1", "--name", ""]
        );
    }

    #[test]
    fn test_split_blank_line() {
        assert!(split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_escaped_quotes() {
        assert_eq!(split_words(r#""a\"b""#).unwrap(), vec![r#"a"b"#]);
        assert_eq!(split_words(r#"Ann\ Lee"#).unwrap(), vec!["Ann Lee"]);
        assert_eq!(split_words(r#"'a\b'"#).unwrap(), vec![r#"a\b"#]);
        assert_eq!(split_words(r#""c:\d""#).unwrap(), vec![r#"c:\d"#]);
    }

    #[test]
    fn test_split_dangling_escape() {
        assert!(matches!(split_words("show 1\\"), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(matches!(split_words("show \"1"), Err(CliError::Usage(_))));
    }
}
