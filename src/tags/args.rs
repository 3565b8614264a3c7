//! Tag argument parsing.
//!
//! One tokenizer serves every tag. Markup is split on whitespace with
//! single- and double-quoted tokens kept intact; a `key:value` token is a
//! named option when the key is word-like and the value does not start with
//! `//` (so bare URLs stay positional).

/// One parsed argument token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// `key:value` option.
    Named { key: String, value: String },
    /// Positional argument; also answers flag queries.
    Bare(String),
}

/// Parsed tag arguments.
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    tokens: Vec<Token>,
}

impl TagArgs {
    /// Parse argument markup.
    pub fn parse(markup: &str) -> Self {
        let tokens = split_tokens(markup).into_iter().map(classify).collect();
        Self { tokens }
    }

    /// First positional argument.
    pub fn argv1(&self) -> Option<&str> {
        self.positionals().into_iter().next()
    }

    /// All positional arguments, in order.
    pub fn positionals(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Bare(s) => Some(s.as_str()),
                Token::Named { .. } => None,
            })
            .collect()
    }

    /// Named option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tokens.iter().find_map(|t| match t {
            Token::Named { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether a bare token equal to `name` is present.
    pub fn flag(&self, name: &str) -> bool {
        self.tokens
            .iter()
            .any(|t| matches!(t, Token::Bare(s) if s == name))
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split markup on whitespace, honoring quotes.
///
/// Quotes are removed; an unterminated quote runs to the end of the markup.
fn split_tokens(markup: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = markup.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                in_token = true;
                for q in chars.by_ref() {
                    if q == c {
                        break;
                    }
                    current.push(q);
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Classify a token as a named option or a positional argument.
fn classify(token: String) -> Token {
    if let Some((key, value)) = token.split_once(':')
        && is_word_like(key)
        && !value.starts_with("//")
    {
        return Token::Named {
            key: key.to_string(),
            value: value.to_string(),
        };
    }
    Token::Bare(token)
}

/// Word-like option keys: letters, digits, `_` and `-`, starting with a letter.
fn is_word_like(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
