//! Season and round passes.
//!
//! Both passes only look at whole tokens, so resolutions like `1080p` or
//! words like `Roundabout` never produce a season or a round.

use std::ops::Range;

use crate::lexer::{Lexer, Token};

/// A season year and where it sits in the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonMarker {
    pub year: String,
    pub span: Range<usize>,
}

/// A round number and the byte offset right after the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundMarker {
    /// Zero-padded two digit round number
    pub number: String,
    pub end: usize,
}

/// First `(19|20)\d\d` token in the stem.
pub fn extract_season(lexer: &Lexer) -> Option<SeasonMarker> {
    lexer.tokens().iter().find_map(|(token, span)| match token {
        Token::Year(text) => Some(SeasonMarker {
            year: text.to_string(),
            span: span.clone(),
        }),
        _ => None,
    })
}

/// First `Round` marker followed by one or two digits.
///
/// Handles both `Round04` and `Round 4` (from `Round.4` after period
/// normalization). A bare `Round` without digits is not a round.
pub fn extract_round(lexer: &Lexer) -> Option<RoundMarker> {
    let tokens = lexer.tokens();

    for (i, (token, span)) in tokens.iter().enumerate() {
        match token {
            Token::Round(text) => {
                let digits = text.trim_start_matches("Round");
                return Some(RoundMarker {
                    number: pad_round(digits),
                    end: span.end,
                });
            }
            Token::RoundWord => {
                if let Some((Token::Number(digits), number_span)) = tokens.get(i + 1) {
                    if digits.len() <= 2 {
                        return Some(RoundMarker {
                            number: pad_round(digits),
                            end: number_span.end,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Zero-pad a round number to two digits.
pub fn pad_round(digits: &str) -> String {
    format!("{:0>2}", digits)
}
