//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::code::{CodeList, SgrCode};
use crate::consts::{ESC, SGR_FINAL, SGR_SEPARATOR};
use crate::{StyleError, StyleResult};

/// One element of a decoded string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// The parameter list of one `ESC [ ... m` sequence.
    Codes(CodeList),
    /// A run of plain text between sequences.
    Text(String),
}

impl Token {
    /// Returns the codes if this is a [`Token::Codes`].
    pub fn codes(&self) -> Option<&CodeList> {
        match self {
            Token::Codes(codes) => Some(codes),
            Token::Text(_) => None,
        }
    }

    /// Returns the text if this is a [`Token::Text`].
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Codes(_) => None,
            Token::Text(text) => Some(text),
        }
    }
}

impl std::fmt::Display for Token {
    /// Writes the token back in its encoded form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Codes(codes) => f.write_str(&codes.to_sequence()),
            Token::Text(text) => f.write_str(text),
        }
    }
}

impl From<CodeList> for Token {
    fn from(codes: CodeList) -> Self {
        Token::Codes(codes)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::Text(text.to_string())
    }
}

/// Decoder states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Accumulating plain text.
    Scanning,
    /// Inside a sequence that started at the given byte offset.
    InEscape { start: usize },
}

/// Splits an encoded string into alternating code and text tokens.
///
/// Adjacent plain characters always collapse into one [`Token::Text`], so two text
/// tokens are never adjacent. An empty input gives an empty list.
///
/// Fails with [`StyleError::MalformedSequence`] if an `ESC` is not followed by `[`, or
/// if a sequence reaches the end of input before its `m`.
///
/// ```rust
/// use termionix_ansistyle::{tokenize, CodeList, Token};
///
/// let tokens = tokenize("\x1B[31mTEXT\x1B[0m").unwrap();
/// assert_eq!(tokens, vec![
///     Token::Codes(CodeList::from([31])),
///     Token::Text("TEXT".to_string()),
///     Token::Codes(CodeList::reset()),
/// ]);
/// ```
pub fn tokenize(source: &str) -> StyleResult<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut state = State::Scanning;
    let mut text_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match state {
            State::Scanning => {
                if bytes[index] == ESC {
                    if bytes.get(index + 1) != Some(&b'[') {
                        return Err(StyleError::MalformedSequence {
                            position: index,
                            description: "escape is not followed by '['".to_string(),
                        });
                    }
                    if text_start < index {
                        tokens.push(Token::Text(source[text_start..index].to_string()));
                    }
                    state = State::InEscape { start: index };
                    index += 2;
                    continue;
                }
            }
            State::InEscape { start } => {
                if bytes[index] == SGR_FINAL {
                    tokens.push(Token::Codes(parse_parameters(&source[start + 2..index])));
                    state = State::Scanning;
                    text_start = index + 1;
                }
            }
        }
        index += 1;
    }

    match state {
        State::Scanning => {
            if text_start < bytes.len() {
                tokens.push(Token::Text(source[text_start..].to_string()));
            }
            Ok(tokens)
        }
        State::InEscape { start } => Err(StyleError::MalformedSequence {
            position: start,
            description: "sequence is not terminated by 'm'".to_string(),
        }),
    }
}

/// Parses the text between `ESC [` and `m` into codes.
///
/// Each `;`-separated group parses as its leading decimal digits, so an empty group
/// is `0`. An empty parameter string is the reset list `[0]`. Groups too large for
/// an [`SgrCode`] saturate.
pub(crate) fn parse_parameters(parameters: &str) -> CodeList {
    if parameters.is_empty() {
        return CodeList::reset();
    }
    parameters
        .split(SGR_SEPARATOR)
        .map(|group| {
            group
                .bytes()
                .take_while(u8::is_ascii_digit)
                .fold(0 as SgrCode, |value, digit| {
                    value
                        .saturating_mul(10)
                        .saturating_add(SgrCode::from(digit - b'0'))
                })
        })
        .collect()
}

/// Writes tokens back into an encoded string.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes<const N: usize>(values: [SgrCode; N]) -> Token {
        Token::Codes(CodeList::from(values))
    }

    fn text(value: &str) -> Token {
        Token::Text(value.to_string())
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_unencoded_input() {
        assert_eq!(tokenize("something").unwrap(), vec![text("something")]);
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(
            tokenize("\x1B[31mTEXT\x1B[0m").unwrap(),
            vec![codes([31]), text("TEXT"), codes([0])]
        );
        assert_eq!(
            tokenize("\x1B[31;99mTEXT\x1B[0m").unwrap(),
            vec![codes([31, 99]), text("TEXT"), codes([0])]
        );
    }

    #[test]
    fn test_multiple_segments() {
        let source = "\x1B[33mYELLOW\x1B[0m\x1B[31;33mRED\x1B[0m\x1B[34;33mBLUE\x1B[0m";
        assert_eq!(
            tokenize(source).unwrap(),
            vec![
                codes([33]),
                text("YELLOW"),
                codes([0]),
                codes([31, 33]),
                text("RED"),
                codes([0]),
                codes([34, 33]),
                text("BLUE"),
                codes([0]),
            ]
        );
    }

    #[test]
    fn test_text_around_sequences() {
        assert_eq!(
            tokenize("a\x1B[1mb\x1B[0mc").unwrap(),
            vec![text("a"), codes([1]), text("b"), codes([0]), text("c")]
        );
    }

    #[test]
    fn test_empty_groups_parse_as_zero() {
        assert_eq!(tokenize("\x1B[;31m").unwrap(), vec![codes([0, 31])]);
        assert_eq!(tokenize("\x1B[1;;4m").unwrap(), vec![codes([1, 0, 4])]);
        assert_eq!(tokenize("\x1B[m").unwrap(), vec![codes([0])]);
    }

    #[test]
    fn test_large_codes_pass_through() {
        assert_eq!(
            tokenize("\x1B[38;2;900;800;700mX").unwrap(),
            vec![codes([38, 2, 900, 800, 700]), text("X")]
        );
    }

    #[test]
    fn test_unterminated_sequence() {
        let err = tokenize("ok\x1B[31").unwrap_err();
        assert_eq!(
            err,
            StyleError::MalformedSequence {
                position: 2,
                description: "sequence is not terminated by 'm'".to_string(),
            }
        );
        assert!(tokenize("\x1B[").is_err());
    }

    #[test]
    fn test_bare_escape() {
        assert!(matches!(
            tokenize("a\x1Bb"),
            Err(StyleError::MalformedSequence { position: 1, .. })
        ));
        assert!(tokenize("\x1B").is_err());
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            tokenize("\x1B[35mhéllo wörld\x1B[0m").unwrap(),
            vec![codes([35]), text("héllo wörld"), codes([0])]
        );
    }

    #[test]
    fn test_render_reverses_tokenize() {
        let source = "a\x1B[31;1mRED\x1B[0m\x1B[34mBLUE\x1B[0m";
        assert_eq!(render(&tokenize(source).unwrap()), source);
    }
}
