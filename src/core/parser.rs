//! Command-line parser.
//!
//! Tokenizes a raw shell line (respecting quotes and escapes), confirms it
//! is an invocation of the tool, and splits it into main command, optional
//! subcommand, positional args, long options, and boolean flags.

use std::collections::HashMap;

use super::types::{ParseError, ParsedInvocation};

/// The short set of bare `--name` flags that never consume a following
/// token as a value, even without `=`.
pub const KNOWN_FLAGS: &[&str] = &[
    "force", "dry-run", "verbose", "quiet", "help", "version", "no-color", "debug",
];

/// Parses invocation lines for a given tool name (default: `usacloud`).
pub struct Parser {
    tool_name: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new("usacloud")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    None,
    Single,
    Double,
}

impl Parser {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self { tool_name: tool_name.into() }
    }

    /// Full parse pipeline.
    pub fn parse(&self, line: &str) -> Result<ParsedInvocation, ParseError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let tokens = self.tokenize(trimmed)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        if !self.starts_with_tool(&tokens) {
            return Err(ParseError::NotATool);
        }

        let rest = &tokens[1..];
        if rest.is_empty() {
            return Ok(ParsedInvocation {
                raw: line.to_string(),
                main: String::new(),
                sub: String::new(),
                args: Vec::new(),
                options: HashMap::new(),
                flags: Vec::new(),
            });
        }

        let main = rest[0].clone();
        let mut idx = 1;
        let mut sub = String::new();
        if idx < rest.len() && !rest[idx].starts_with("--") {
            sub = rest[idx].clone();
            idx += 1;
        }

        let mut args = Vec::new();
        let mut options = HashMap::new();
        let mut flags = Vec::new();

        while idx < rest.len() {
            let token = &rest[idx];
            if let Some(stripped) = token.strip_prefix("--") {
                if let Some(eq_pos) = stripped.find('=') {
                    let (key, value) = stripped.split_at(eq_pos);
                    let value = &value[1..];
                    if key.is_empty() {
                        return Err(ParseError::InvalidSyntax {
                            position: idx,
                            reason: "empty option key",
                        });
                    }
                    options.insert(key.to_string(), value.to_string());
                    idx += 1;
                } else if KNOWN_FLAGS.contains(&stripped) {
                    flags.push(stripped.to_string());
                    idx += 1;
                } else if idx + 1 < rest.len() && !rest[idx + 1].starts_with("--") {
                    options.insert(stripped.to_string(), rest[idx + 1].clone());
                    idx += 2;
                } else {
                    flags.push(stripped.to_string());
                    idx += 1;
                }
            } else {
                args.push(token.clone());
                idx += 1;
            }
        }

        Ok(ParsedInvocation {
            raw: line.to_string(),
            main,
            sub,
            args,
            options,
            flags,
        })
    }

    fn starts_with_tool(&self, tokens: &[String]) -> bool {
        tokens.first().map(|t| t.as_str()) == Some(self.tool_name.as_str())
    }

    /// Character-by-character tokenizer with a small state machine tracking
    /// single-quote, double-quote, and backslash-escape states.
    fn tokenize(&self, line: &str) -> Result<Vec<String>, ParseError> {
        let chars: Vec<char> = line.chars().collect();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut has_current = false;
        let mut quote = QuoteState::None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match quote {
                QuoteState::None => match c {
                    ' ' | '\t' => {
                        if has_current {
                            tokens.push(std::mem::take(&mut current));
                            has_current = false;
                        }
                    }
                    '\'' => {
                        quote = QuoteState::Single;
                        has_current = true;
                    }
                    '"' => {
                        quote = QuoteState::Double;
                        has_current = true;
                    }
                    '\\' => {
                        i = self.consume_escape(&chars, i, &mut current)?;
                        has_current = true;
                        continue;
                    }
                    _ => {
                        current.push(c);
                        has_current = true;
                    }
                },
                QuoteState::Single => {
                    if c == '\'' {
                        quote = QuoteState::None;
                    } else {
                        // Double-quote characters and backslashes are literal
                        // inside single quotes.
                        current.push(c);
                    }
                }
                QuoteState::Double => match c {
                    '"' => quote = QuoteState::None,
                    '\\' => {
                        i = self.consume_escape(&chars, i, &mut current)?;
                        continue;
                    }
                    _ => current.push(c),
                },
            }
            i += 1;
        }

        if quote != QuoteState::None {
            return Err(ParseError::InvalidSyntax {
                position: chars.len(),
                reason: "unterminated quote",
            });
        }

        if has_current {
            tokens.push(current);
        }

        Ok(tokens)
    }

    /// Consumes a `\X` escape sequence starting at `i` (which must point at
    /// the backslash), pushing the decoded character(s) onto `current`, and
    /// returns the index just past the sequence.
    fn consume_escape(
        &self,
        chars: &[char],
        i: usize,
        current: &mut String,
    ) -> Result<usize, ParseError> {
        if i + 1 >= chars.len() {
            return Err(ParseError::InvalidSyntax {
                position: i,
                reason: "trailing backslash",
            });
        }
        let next = chars[i + 1];
        match next {
            'n' => current.push('\n'),
            't' => current.push('\t'),
            'r' => current.push('\r'),
            '\\' => current.push('\\'),
            '"' => current.push('"'),
            '\'' => current.push('\''),
            other => {
                current.push('\\');
                current.push(other);
            }
        }
        Ok(i + 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser {
        Parser::default()
    }

    #[test]
    fn empty_line_is_empty_error() {
        assert_eq!(parser().parse(""), Err(ParseError::Empty));
        assert_eq!(parser().parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn tool_name_alone_is_empty_invocation() {
        let parsed = parser().parse("usacloud").unwrap();
        assert!(parsed.is_empty_invocation());
    }

    #[test]
    fn not_a_tool_command() {
        assert_eq!(parser().parse("ls -la"), Err(ParseError::NotATool));
    }

    #[test]
    fn basic_main_and_sub() {
        let parsed = parser().parse("usacloud server list").unwrap();
        assert_eq!(parsed.main, "server");
        assert_eq!(parsed.sub, "list");
    }

    #[test]
    fn configurable_tool_name_matches_spec_s4() {
        let p = Parser::new("tool");
        let parsed = p.parse("tool version list").unwrap();
        assert_eq!(parsed.main, "version");
        assert_eq!(parsed.sub, "list");
    }

    #[test]
    fn option_with_equals() {
        let parsed = parser().parse("usacloud server list --output-type=csv").unwrap();
        assert_eq!(parsed.options.get("output-type"), Some(&"csv".to_string()));
    }

    #[test]
    fn option_empty_key_is_error() {
        let err = parser().parse("usacloud server list --=csv").unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn known_flag_does_not_consume_next_token() {
        let parsed = parser().parse("usacloud server list --force extra").unwrap();
        assert!(parsed.flags.contains(&"force".to_string()));
        assert_eq!(parsed.args, vec!["extra".to_string()]);
    }

    #[test]
    fn unknown_bare_option_consumes_following_value_heuristic() {
        let parsed = parser().parse("usacloud server list --zone tk1a").unwrap();
        assert_eq!(parsed.options.get("zone"), Some(&"tk1a".to_string()));
    }

    #[test]
    fn unknown_bare_option_at_end_is_a_flag() {
        let parsed = parser().parse("usacloud server list --zone").unwrap();
        assert!(parsed.flags.contains(&"zone".to_string()));
    }

    #[test]
    fn quoted_arguments_with_spaces() {
        let parsed = parser()
            .parse(r#"usacloud server update 123 --name="my server""#)
            .unwrap();
        assert_eq!(parsed.options.get("name"), Some(&"my server".to_string()));
    }

    #[test]
    fn single_quotes_preserve_double_quote_chars_literally() {
        let parsed = parser().parse(r#"usacloud server read 'say "hi"'"#).unwrap();
        assert_eq!(parsed.sub, r#"say "hi""#);
    }

    #[test]
    fn escape_sequences_decode_in_unquoted_and_double_quoted_regions() {
        let parsed = parser().parse(r#"usacloud server read a\tb"#).unwrap();
        assert_eq!(parsed.sub, "a\tb");
    }

    #[test]
    fn unknown_escape_passes_through_verbatim() {
        let parsed = parser().parse(r#"usacloud server read a\zb"#).unwrap();
        assert_eq!(parsed.sub, "a\\zb");
    }

    #[test]
    fn unterminated_quote_is_positioned_error() {
        let err = parser().parse(r#"usacloud server read "unterminated"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    /// Happy-path parse round-trip: rebuilding the line from its parts
    /// reproduces the original tokens.
    #[test]
    fn happy_path_round_trip() {
        let line = "usacloud server create --force --zone tk1a name";
        let parsed = parser().parse(line).unwrap();

        let mut rebuilt = vec!["usacloud".to_string(), parsed.main.clone()];
        if !parsed.sub.is_empty() {
            rebuilt.push(parsed.sub.clone());
        }
        rebuilt.extend(parsed.args.clone());
        for (k, v) in &parsed.options {
            rebuilt.push(format!("--{k}"));
            rebuilt.push(v.clone());
        }
        for f in &parsed.flags {
            rebuilt.push(format!("--{f}"));
        }
        let rejoined = rebuilt.join(" ");
        let reparsed = parser().parse(&rejoined).unwrap();

        assert_eq!(parsed.main, reparsed.main);
        assert_eq!(parsed.sub, reparsed.sub);
        assert_eq!(parsed.options, reparsed.options);
        let mut a = parsed.flags.clone();
        let mut b = reparsed.flags.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
