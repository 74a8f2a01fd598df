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

use crate::consts::{ESC, MAX_SEQUENCE_LENGTH, SGR_FINAL};
use crate::tokenizer::{Token, parse_parameters};
use crate::{StyleError, StyleResult};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{instrument, trace};

/// Streaming counterpart of [`tokenize`](crate::tokenize).
///
/// Decodes a byte stream of encoded text into [`Token`]s and encodes tokens back into
/// bytes. Plain text is held back until the next `ESC` or the end of the stream, so
/// the decoder never yields two text tokens in a row for text that arrived in pieces.
///
/// Error positions are byte offsets from the start of the stream.
#[derive(Clone, Debug)]
pub struct TokenCodec {
    max_sequence_length: usize,
    consumed: usize,
}

impl TokenCodec {
    /// Creates a codec with the default sequence length limit.
    pub fn new() -> Self {
        Self::with_max_sequence_length(MAX_SEQUENCE_LENGTH)
    }

    /// Creates a codec that rejects sequences longer than `max` bytes.
    pub fn with_max_sequence_length(max: usize) -> Self {
        Self {
            max_sequence_length: max,
            consumed: 0,
        }
    }

    /// Number of bytes consumed from the stream so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn take_text(&mut self, src: &mut BytesMut, len: usize) -> StyleResult<Token> {
        let run = src.split_to(len);
        let text = String::from_utf8(run.to_vec()).map_err(|error| StyleError::InvalidUtf8 {
            position: self.consumed + error.utf8_error().valid_up_to(),
        })?;
        self.consumed += len;
        Ok(Token::Text(text))
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for TokenCodec {
    type Item = Token;
    type Error = StyleError;

    #[instrument(skip_all)]
    fn decode(&mut self, src: &mut BytesMut) -> StyleResult<Option<Token>> {
        if src.is_empty() {
            return Ok(None);
        }

        if src[0] == ESC {
            if src.len() < 2 {
                return Ok(None);
            }
            if src[1] != b'[' {
                return Err(StyleError::MalformedSequence {
                    position: self.consumed,
                    description: "escape is not followed by '['".to_string(),
                });
            }
            return match src[2..].iter().position(|byte| *byte == SGR_FINAL) {
                Some(offset) => {
                    let end = offset + 2;
                    let sequence = src.split_to(end + 1);
                    self.consumed += end + 1;
                    let codes = parse_parameters(&String::from_utf8_lossy(&sequence[2..end]));
                    trace!(codes = %codes, "Decoded sequence");
                    Ok(Some(Token::Codes(codes)))
                }
                None if src.len() > self.max_sequence_length => Err(StyleError::SequenceTooLong {
                    length: src.len(),
                    max: self.max_sequence_length,
                }),
                None => Ok(None),
            };
        }

        match src.iter().position(|byte| *byte == ESC) {
            Some(len) => self.take_text(src, len).map(Some),
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> StyleResult<Option<Token>> {
        if let Some(token) = self.decode(src)? {
            return Ok(Some(token));
        }
        if src.is_empty() {
            return Ok(None);
        }
        if src[0] == ESC {
            return Err(StyleError::MalformedSequence {
                position: self.consumed,
                description: "stream ended inside an escape sequence".to_string(),
            });
        }
        let len = src.len();
        self.take_text(src, len).map(Some)
    }
}

impl Encoder<Token> for TokenCodec {
    type Error = StyleError;

    fn encode(&mut self, item: Token, dst: &mut BytesMut) -> StyleResult<()> {
        match item {
            Token::Codes(codes) => {
                dst.reserve(codes.encoded_len());
                codes.encode(dst);
            }
            Token::Text(text) => dst.extend_from_slice(text.as_bytes()),
        }
        Ok(())
    }
}

impl Encoder<&str> for TokenCodec {
    type Error = StyleError;

    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> StyleResult<()> {
        dst.extend_from_slice(item.as_bytes());
        Ok(())
    }
}
