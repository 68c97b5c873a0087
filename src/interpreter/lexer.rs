use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// The literal text is kept next to the kind in [`Token`]; numeric values are
/// decoded by the parser.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Float literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*")]
    Float,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// `def`
    #[token("def")]
    Def,
    /// Variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z]+")]
    Symbol,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A token together with its source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The exact source text of the token.
    pub text:     String,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.text)
    }
}

/// A lazy token stream over a source string.
///
/// The stream is finite and can be restarted by cloning it before it is
/// consumed. The first unrecognized character yields a [`LexError`].
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a token stream positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let position = self.inner.span().start;
        let text = self.inner.slice();

        Some(match kind {
            Ok(kind) => Ok(Token { kind,
                                   text: text.to_string(),
                                   position }),
            Err(()) => Err(LexError::UnexpectedCharacter { character: text.chars()
                                                                          .next()
                                                                          .unwrap_or_default(),
                                                           position }),
        })
    }
}

/// Tokenizes the whole source, stopping at the first lexical error.
///
/// # Example
/// ```
/// use calcite::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("x == 2.5").unwrap().into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Symbol, TokenKind::EqualEqual, TokenKind::Float]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn numbers_are_split_by_decimal_point() {
        assert_eq!(kinds("12 3.5 7."),
                   [TokenKind::Int, TokenKind::Float, TokenKind::Float]);
    }

    #[test]
    fn double_equals_wins_over_assignment() {
        assert_eq!(kinds("a==b=c"),
                   [TokenKind::Symbol,
                    TokenKind::EqualEqual,
                    TokenKind::Symbol,
                    TokenKind::Equals,
                    TokenKind::Symbol]);
    }

    #[test]
    fn def_is_a_keyword_only_as_a_whole_word() {
        assert_eq!(kinds("def define"), [TokenKind::Def, TokenKind::Symbol]);
    }

    #[test]
    fn punctuation_and_text_are_kept() {
        let tokens = tokenize("f(1, 2);").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["f", "(", "1", ",", "2", ")", ";"]);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn unknown_character_reports_position() {
        assert_eq!(tokenize("1 + $"),
                   Err(LexError::UnexpectedCharacter { character: '$',
                                                       position:  4, }));
    }

    #[test]
    fn lexer_can_be_restarted_by_cloning() {
        let lexer = Lexer::new("1 + 2");
        let first: Vec<_> = lexer.clone().collect();
        let second: Vec<_> = lexer.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
