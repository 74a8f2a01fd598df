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

use crate::consts::{ESC, SGR_FINAL};
use std::borrow::Cow;

/// Removes SGR escape sequences from a string.
///
/// Only `ESC [ <digits and ;> m` sequences are removed. Any other escape, or a
/// sequence that never reaches its `m`, is left in place.
///
/// # Performance
///
/// If the input has no escape byte it is returned borrowed, without copying.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use termionix_ansistyle::strip_sgr;
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_sgr(colored), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_sgr(plain), Cow::Borrowed(_)));
/// ```
pub fn strip_sgr(str: &str) -> Cow<'_, str> {
    if !str.as_bytes().contains(&ESC) {
        return Cow::Borrowed(str);
    }

    let bytes = str.as_bytes();
    let mut result = String::with_capacity(str.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC && bytes.get(i + 1) == Some(&b'[') {
            let parameters = bytes[i + 2..]
                .iter()
                .position(|byte| !(byte.is_ascii_digit() || *byte == b';'));
            if let Some(length) = parameters {
                let end = i + 2 + length;
                if bytes[end] == SGR_FINAL {
                    result.push_str(&str[copied..i]);
                    i = end + 1;
                    copied = i;
                    continue;
                }
            }
        }
        i += 1;
    }
    result.push_str(&str[copied..]);

    Cow::Owned(result)
}
