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

//! Error types for the ansistyle crate.
//!
//! Every operation either produces its complete output or one of these errors.
//! Nothing in the crate returns a partially styled string or a truncated token list.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`StyleError`].
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors raised while resolving, encoding or decoding styled text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// Wrong argument arity, type or shape.
    ///
    /// Raised for a missing argument, an RGB triplet of the wrong length, a negative
    /// component, or a text style used as a background.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// A color or style name that matches no resolution rule.
    ///
    /// Carries the offending literal exactly as the caller supplied it.
    #[error("Unrecognized color: '{0}'")]
    UnrecognizedColor(String),

    /// An escape sequence that never reaches its terminating `m`.
    #[error("Malformed SGR sequence at position {position}: {description}")]
    MalformedSequence {
        /// Byte position where the sequence starts
        position: usize,
        /// What is wrong with the sequence
        description: String,
    },

    /// A sequence exceeded [`MAX_SEQUENCE_LENGTH`](crate::consts::MAX_SEQUENCE_LENGTH)
    /// while streaming.
    #[error("Sequence too long: {length} bytes (maximum allowed: {max})")]
    SequenceTooLong {
        /// The number of bytes buffered for the sequence
        length: usize,
        /// The maximum allowed length
        max: usize,
    },

    /// Text between sequences was not valid UTF-8.
    #[error("Invalid UTF-8 sequence at position {position}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid byte within the text run
        position: usize,
    },

    /// An I/O error surfaced through a framed reader or writer.
    #[error("I/O error: {kind:?} ({message})")]
    Io {
        /// The kind of I/O error that occurred
        kind: std::io::ErrorKind,
        /// The error's own description
        message: String,
    },

    /// Registering a color would replace an accessor it does not own.
    #[error("Cannot define color accessor '{0}' as that would overwrite an existing accessor")]
    AccessorConflict(String),
}

impl StyleError {
    /// Shorthand for building an [`StyleError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        StyleError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if the error was caused by a bad style argument
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            StyleError::InvalidArgument { .. }
                | StyleError::UnrecognizedColor(_)
                | StyleError::AccessorConflict(_)
        )
    }

    /// Check if the error was raised while decoding encoded text
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            StyleError::MalformedSequence { .. }
                | StyleError::SequenceTooLong { .. }
                | StyleError::InvalidUtf8 { .. }
        )
    }
}

impl From<std::io::Error> for StyleError {
    fn from(error: std::io::Error) -> Self {
        StyleError::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
