//! Logos-based lexer for normalized filename stems.
//!
//! Extraction passes share one token list so that the season, round,
//! host-country and notebook passes all agree on word boundaries.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// A lexer that tokenizes a normalized filename stem using Logos.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    ///
    /// Tokenizes the entire input immediately. Byte ranges index into the
    /// input, which has the same length as the original stem because
    /// normalization only swaps periods for spaces.
    pub fn new(input: &'src str) -> Self {
        let tokens: Vec<_> = Token::lexer(input)
            .spanned()
            .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
            .collect();
        Self { tokens, input }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Span of the first word token equal to `word` (case-sensitive) that
    /// lies entirely inside `window`.
    pub fn find_word(&self, word: &str, window: Range<usize>) -> Option<Range<usize>> {
        self.tokens
            .iter()
            .find(|(token, span)| {
                token.word() == Some(word) && span.start >= window.start && span.end <= window.end
            })
            .map(|(_, span)| span.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input)
            .tokens()
            .iter()
            .map(|(t, _)| t.clone())
            .collect()
    }

    #[test]
    fn test_lexer_basic() {
        let tokens = kinds("Formula1 2022 Round04 Example FP1");
        assert_eq!(
            tokens,
            vec![
                Token::Word("Formula1"),
                Token::Year("2022"),
                Token::Round("Round04"),
                Token::Word("Example"),
                Token::Word("FP1"),
            ]
        );
    }

    #[test]
    fn test_year_must_cover_whole_word() {
        assert_eq!(kinds("1080p"), vec![Token::Word("1080p")]);
        assert_eq!(kinds("20221"), vec![Token::Number("20221")]);
        assert_eq!(kinds("1899"), vec![Token::Number("1899")]);
    }

    #[test]
    fn test_round_variants() {
        assert_eq!(kinds("Round7"), vec![Token::Round("Round7")]);
        assert_eq!(
            kinds("Round 12"),
            vec![Token::RoundWord, Token::Number("12")]
        );
        assert_eq!(kinds("Roundabout"), vec![Token::Word("Roundabout")]);
        assert_eq!(kinds("Round123"), vec![Token::Word("Round123")]);
    }

    #[test]
    fn test_spans_index_input() {
        let lexer = Lexer::new("WEC 2023 Round04 France Le Mans Race");
        let span = lexer.find_word("France", 0..lexer.input().len()).unwrap();
        assert_eq!(&lexer.input()[span], "France");
        assert!(lexer.find_word("France", 0..20).is_none());
        assert!(lexer.find_word("USA", 0..lexer.input().len()).is_none());
    }
}
