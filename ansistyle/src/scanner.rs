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

use crate::consts::{ESC, RESET, SGR_FINAL};

/// Internal states of the sequence matcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Outside any sequence.
    Text,
    /// Saw `ESC`, waiting for `[`.
    Escape,
    /// Inside `ESC [`, waiting for the first digit of a parameter.
    ParameterStart,
    /// Inside a parameter's digits.
    Parameter,
}

/// Finds every open SGR sequence in `text`.
///
/// A sequence is `ESC [ digit+ (';' digit+)* m`. Every match other than the literal
/// reset `ESC [ 0 m` is open. The returned offsets are the byte positions of each
/// open sequence's terminating `m`, in ascending order. Inserting at an offset places
/// text immediately before the `m`, inside the parameter list.
///
/// Anything that does not complete the grammar is ordinary text; scanning resumes at
/// the byte that broke the match.
pub fn open_sequence_ends(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut ends = Vec::new();
    let mut state = State::Text;
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        state = match (state, byte) {
            (_, ESC) => {
                start = index;
                State::Escape
            }
            (State::Escape, b'[') => State::ParameterStart,
            (State::ParameterStart, b'0'..=b'9') => State::Parameter,
            (State::Parameter, b'0'..=b'9') => State::Parameter,
            (State::Parameter, b';') => State::ParameterStart,
            (State::Parameter, SGR_FINAL) => {
                if &text[start..=index] != RESET {
                    ends.push(index);
                }
                State::Text
            }
            _ => State::Text,
        };
        index += 1;
    }

    ends
}
