//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized in a normalized filename stem.
///
/// The lexer runs after periods have been replaced by spaces, so every
/// token is a whitespace-separated word. Specific patterns outrank the
/// generic [`Token::Word`] only when they cover the whole word: `Round04`
/// is a round marker, `Roundabout` is a word.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Round marker with its number attached (e.g., Round04, Round7)
    #[regex(r"Round[0-9]{1,2}", priority = 10)]
    Round(&'src str),

    /// Bare "Round" keyword, the number follows as a separate token
    #[token("Round", priority = 9)]
    RoundWord,

    /// Season year (1900-2099)
    #[regex(r"(19|20)[0-9]{2}", priority = 5)]
    Year(&'src str),

    /// Numeric token
    #[regex(r"[0-9]+", priority = 2)]
    Number(&'src str),

    /// Generic word token (lowest priority)
    #[regex(r"[^ \t]+", priority = 1)]
    Word(&'src str),
}

impl<'src> Token<'src> {
    /// The word text for [`Token::Word`] tokens.
    pub fn word(&self) -> Option<&'src str> {
        match self {
            Token::Word(text) => Some(text),
            _ => None,
        }
    }
}
