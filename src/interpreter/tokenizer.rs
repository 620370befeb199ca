use logos::Logos;

/// Represents a single token of a tokenized line.
///
/// A line splits into tokens on runs of blanks, except that a double-quoted
/// span (from a `"` to the next `"`) is one token regardless of embedded
/// spaces. Both variants carry the raw source slice; a `Quoted` token keeps
/// its enclosing quote markers.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\f]+")]
pub enum Token {
    /// A double-quoted span, quote markers included, such as `"hello world"`.
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_string(), priority = 10)]
    Quoted(String),
    /// Any other run of non-blank characters, such as `x`, `+=` or `42`.
    #[regex(r"[^ \t\f]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

impl Token {
    /// Returns the raw text of the token, quote markers included.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Quoted(slice) | Self::Word(slice) => slice,
        }
    }

    /// Returns the text of the token with the enclosing quote markers
    /// stripped. Bare words are returned unchanged.
    #[must_use]
    pub fn unquoted(&self) -> &str {
        match self {
            Self::Quoted(slice) => &slice[1..slice.len() - 1],
            Self::Word(slice) => slice,
        }
    }

    /// Returns `true` if the token is a quote-delimited span.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        matches!(self, Self::Quoted(_))
    }
}

/// Tokenizes one line of source text.
///
/// The whole line is consumed into an ordered token sequence before any
/// evaluation takes place. A line with no blanks yields a single token; a
/// blank line yields none. An unterminated quote does not match the quoted
/// pattern and falls through to the word pattern, so lexing cannot fail.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    Token::lexer(line).filter_map(Result::ok).collect()
}
