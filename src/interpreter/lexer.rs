use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a source line.
///
/// Every variant keeps the exact source text it was produced from, so a line
/// can be rejoined from its tokens and lexed again with the same result. The
/// parser and evaluator dispatch on both the shape and the text.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Float(String),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Quoted text, with its quotes: `'abc'` or `"abc"`. No escapes.
    #[regex(r"'[^'\n]*'", |lex| lex.slice().to_string())]
    #[regex(r#""[^"\n]*""#, |lex| lex.slice().to_string())]
    Text(String),
    /// `->`
    #[token("->")]
    Arrow,
    /// A bracket-indexed name such as `scores[i add 1]`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*\[[^\[\]\n]*\]", |lex| lex.slice().to_string())]
    Indexed(String),
    /// A call form such as `len(items)`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*\([^()\n]*\)", |lex| lex.slice().to_string())]
    Call(String),
    /// A parenthesized group such as `(1, 2, 3)` or `(x add 1)`.
    #[regex(r"\([^()\n]*\)", |lex| lex.slice().to_string())]
    Group(String),
    /// Slash-joined names, used for parameter lists: `a/b/c`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(/[a-zA-Z0-9_]+)+", |lex| lex.slice().to_string())]
    ParamList(String),
    /// Identifier and keyword tokens such as `var`, `total` or `greater`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// Any other single character: `,`, `+`, `*`, ...
    #[regex(r"[^ \t\f\r\na-zA-Z0-9_]", |lex| lex.slice().to_string())]
    Symbol(String),
    /// Spaces and tabs.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the source text of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Float(s)
            | Self::Integer(s)
            | Self::Text(s)
            | Self::Indexed(s)
            | Self::Call(s)
            | Self::Group(s)
            | Self::ParamList(s)
            | Self::Word(s)
            | Self::Symbol(s) => s,
            Self::Arrow => "->",
            Self::Ignored => "",
        }
    }

    /// Returns `true` if this token is the word or symbol `text`.
    #[must_use]
    pub fn is(&self, text: &str) -> bool {
        self.as_str() == text
    }

    /// Returns the identifier if this token is a plain word.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contents of a quoted text token without its quotes.
    #[must_use]
    pub fn unquoted(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(&s[1..s.len() - 1]),
            _ => None,
        }
    }

    /// Returns `true` for the boolean literal words.
    #[must_use]
    pub fn is_bool_literal(&self) -> bool {
        matches!(self.as_word(), Some("True" | "False" | "true" | "false"))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tokens of one non-blank source line together with its 1-based line
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    /// The line's tokens, never empty.
    pub tokens: Vec<Token>,
    /// The 1-based source line number.
    pub line:   usize,
}

/// Tokenizes a whole program.
///
/// Everything from the first `#` on a line is a comment. Lines that are blank
/// once the comment is removed produce no entry, but line numbers still count
/// them.
///
/// # Errors
/// Returns `ParseError::UnrecognizedToken` if a line contains text no token
/// shape accepts.
///
/// # Example
/// ```
/// use clu::interpreter::lexer::tokenize;
///
/// let lines = tokenize(&["# greeting", "", "output 'hi'  # trailing"]).unwrap();
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].line, 3);
/// assert_eq!(lines[0].tokens.len(), 2);
/// ```
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Result<Vec<TokenizedLine>, ParseError> {
    let mut tokenized = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let line = index + 1;
        let raw = raw.as_ref();
        let code = raw.find('#').map_or(raw, |at| &raw[..at]).trim();

        if code.is_empty() {
            continue;
        }

        let tokens = tokenize_line(code, line)?;
        if !tokens.is_empty() {
            tokenized.push(TokenizedLine { tokens, line });
        }
    }

    Ok(tokenized)
}

/// Tokenizes a single fragment of source text.
///
/// Used for whole lines as well as for the text the evaluator re-reads at
/// runtime: `output` expressions, group contents and index expressions.
///
/// # Errors
/// Returns `ParseError::UnrecognizedToken` carrying `line` if the fragment
/// contains unrecognized text.
///
/// # Example
/// ```
/// use clu::interpreter::lexer::{Token, tokenize_line};
///
/// let tokens = tokenize_line("function greet -> first/last", 1).unwrap();
///
/// assert_eq!(tokens[2], Token::Arrow);
/// assert_eq!(tokens[3], Token::ParamList("first/last".to_string()));
/// ```
pub fn tokenize_line(text: &str, line: usize) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnrecognizedToken { token: lexer.slice().to_string(),
                                                           line });
            },
        }
    }

    Ok(tokens)
}

/// Joins tokens back into source text, separated by single spaces.
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_str).collect::<Vec<_>>().join(" ")
}
