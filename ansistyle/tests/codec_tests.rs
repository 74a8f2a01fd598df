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

//! Tests for TokenCodec over byte buffers and framed streams

use futures::{SinkExt, StreamExt};
use termionix_ansistyle::{CodeList, StyleError, Token, TokenCodec, tokenize};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder, FramedRead, FramedWrite};

// ============================================================================
// Helper Functions
// ============================================================================

fn decode_chunks(chunks: &[&[u8]]) -> Result<Vec<Token>, StyleError> {
    let mut codec = TokenCodec::new();
    let mut buffer = BytesMut::new();
    let mut tokens = Vec::new();
    for chunk in chunks {
        buffer.extend_from_slice(chunk);
        while let Some(token) = codec.decode(&mut buffer)? {
            tokens.push(token);
        }
    }
    while let Some(token) = codec.decode_eof(&mut buffer)? {
        tokens.push(token);
    }
    Ok(tokens)
}

// ============================================================================
// Buffer Decoding
// ============================================================================

#[test]
fn test_decode_matches_tokenize() {
    let source = "\x1B[33mYELLOW\x1B[0m plain \x1B[31;33mRED\x1B[0m";
    let bytes = source.as_bytes();
    assert_eq!(decode_chunks(&[bytes]).unwrap(), tokenize(source).unwrap());
}

#[test]
fn test_decode_one_byte_at_a_time() {
    let source = "\x1B[38;2;242;156;10mTEXT\x1B[0m";
    let chunks: Vec<&[u8]> = source.as_bytes().chunks(1).collect();
    assert_eq!(
        decode_chunks(&chunks).unwrap(),
        vec![
            Token::Codes(CodeList::from([38, 2, 242, 156, 10])),
            Token::Text("TEXT".to_string()),
            Token::Codes(CodeList::reset()),
        ]
    );
}

#[test]
fn test_decode_multibyte_text_split_across_chunks() {
    let source = "\x1B[31mgrün\x1B[0m".as_bytes();
    let (head, tail) = source.split_at(8);
    assert_eq!(
        decode_chunks(&[head, tail]).unwrap(),
        vec![
            Token::Codes(CodeList::from([31])),
            Token::Text("grün".to_string()),
            Token::Codes(CodeList::reset()),
        ]
    );
}

#[test]
fn test_decode_empty_parameters() {
    assert_eq!(
        decode_chunks(&[b"\x1B[mX".as_slice()]).unwrap(),
        vec![Token::Codes(CodeList::reset()), Token::Text("X".to_string())]
    );
}

#[test]
fn test_decode_unterminated_sequence() {
    let result = decode_chunks(&[b"TEXT\x1B[31".as_slice()]);
    assert!(matches!(
        result,
        Err(StyleError::MalformedSequence { position: 4, .. })
    ));
}

#[test]
fn test_decode_escape_without_bracket() {
    let result = decode_chunks(&[b"\x1BXTEXT".as_slice()]);
    assert!(matches!(
        result,
        Err(StyleError::MalformedSequence { position: 0, .. })
    ));
}

#[test]
fn test_decode_sequence_too_long() {
    let mut codec = TokenCodec::with_max_sequence_length(8);
    let mut buffer = BytesMut::from("\x1B[1;2;3;4;5;6");
    assert!(matches!(
        codec.decode(&mut buffer),
        Err(StyleError::SequenceTooLong { max: 8, .. })
    ));
}

#[test]
fn test_decode_invalid_utf8() {
    let result = decode_chunks(&[b"AB\xFF\x1B[0m".as_slice()]);
    assert!(matches!(result, Err(StyleError::InvalidUtf8 { position: 2 })));
}

// ============================================================================
// Buffer Encoding
// ============================================================================

#[test]
fn test_encode_tokens() {
    let mut codec = TokenCodec::new();
    let mut buffer = BytesMut::new();
    codec
        .encode(Token::Codes(CodeList::from([31, 47])), &mut buffer)
        .unwrap();
    codec
        .encode(Token::Text("TEXT".to_string()), &mut buffer)
        .unwrap();
    codec
        .encode(Token::Codes(CodeList::reset()), &mut buffer)
        .unwrap();
    assert_eq!(&buffer[..], b"\x1B[31;47mTEXT\x1B[0m");
}

#[test]
fn test_encode_plain_str() {
    let mut codec = TokenCodec::new();
    let mut buffer = BytesMut::new();
    codec.encode("Hello, World!", &mut buffer).unwrap();
    assert_eq!(&buffer[..], b"Hello, World!");
}

// ============================================================================
// Framed Streams
// ============================================================================

#[tokio::test]
async fn test_framed_read() {
    let bytes = b"\x1B[33mYELLOW\x1B[0m\x1B[34;33mBLUE\x1B[0m";
    let mut reader = FramedRead::new(&bytes[..], TokenCodec::new());

    let mut tokens = Vec::new();
    while let Some(token) = reader.next().await {
        tokens.push(token.unwrap());
    }

    assert_eq!(
        tokens,
        vec![
            Token::Codes(CodeList::from([33])),
            Token::Text("YELLOW".to_string()),
            Token::Codes(CodeList::reset()),
            Token::Codes(CodeList::from([34, 33])),
            Token::Text("BLUE".to_string()),
            Token::Codes(CodeList::reset()),
        ]
    );
    assert_eq!(reader.decoder().consumed(), bytes.len());
}

#[tokio::test]
async fn test_framed_read_reports_errors() {
    let bytes = b"TEXT\x1B[31";
    let mut reader = FramedRead::new(&bytes[..], TokenCodec::new());

    assert_eq!(
        reader.next().await.unwrap().unwrap(),
        Token::Text("TEXT".to_string())
    );
    assert!(matches!(
        reader.next().await,
        Some(Err(StyleError::MalformedSequence { position: 4, .. }))
    ));
}

#[tokio::test]
async fn test_framed_write_then_read() {
    let tokens = vec![
        Token::Codes(CodeList::from([1, 31])),
        Token::Text("TEXT".to_string()),
        Token::Codes(CodeList::reset()),
    ];

    let mut writer = FramedWrite::new(Vec::new(), TokenCodec::new());
    for token in tokens.clone() {
        writer.send(token).await.unwrap();
    }
    let bytes = writer.into_inner();
    assert_eq!(bytes, b"\x1B[1;31mTEXT\x1B[0m");

    let decoded: Vec<Token> = FramedRead::new(&bytes[..], TokenCodec::new())
        .map(|token| token.unwrap())
        .collect()
        .await;
    assert_eq!(decoded, tokens);
}
