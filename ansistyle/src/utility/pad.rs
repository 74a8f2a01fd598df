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

/// Where padding goes relative to the text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Padding before the text, so the text is right-aligned.
    #[default]
    Left,
    /// Padding after the text.
    Right,
    /// Split around the text, the larger half on the left.
    Center,
    /// Same as [`Align::Center`].
    CenterLeft,
    /// Split around the text, the larger half on the right.
    CenterRight,
}

/// Adds `padding` copies of `spacer` around `text`.
///
/// Counts characters, not display columns, and does not skip escape sequences.
pub fn pad(text: &str, padding: usize, align: Align, spacer: char) -> String {
    if padding < 1 {
        return text.to_owned();
    }
    let (left, right) = match align {
        Align::Left => (padding, 0),
        Align::Right => (0, padding),
        Align::Center | Align::CenterLeft => (padding.div_ceil(2), padding / 2),
        Align::CenterRight => (padding / 2, padding.div_ceil(2)),
    };
    let mut padded = String::with_capacity(text.len() + padding * spacer.len_utf8());
    padded.extend(std::iter::repeat_n(spacer, left));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(spacer, right));
    padded
}

/// Pads `text` with `spacer` until it is `width` characters long.
///
/// Text that is already wide enough is returned unchanged.
pub fn pad_to(text: &str, width: usize, align: Align, spacer: char) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_owned();
    }
    pad(text, width - length, align, spacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left_is_default() {
        assert_eq!(pad("ab", 3, Align::default(), ' '), "   ab");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad("ab", 2, Align::Right, '.'), "ab..");
    }

    #[test]
    fn test_pad_center() {
        assert_eq!(pad("ab", 3, Align::Center, '-'), "--ab-");
        assert_eq!(pad("ab", 3, Align::CenterLeft, '-'), "--ab-");
        assert_eq!(pad("ab", 3, Align::CenterRight, '-'), "-ab--");
        assert_eq!(pad("ab", 4, Align::CenterRight, '-'), "--ab--");
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(pad("ab", 0, Align::Right, ' '), "ab");
    }

    #[test]
    fn test_pad_to() {
        assert_eq!(pad_to("ab", 5, Align::Right, ' '), "ab   ");
        assert_eq!(pad_to("abcdef", 5, Align::Right, ' '), "abcdef");
        assert_eq!(pad_to("é", 3, Align::Left, '*'), "**é");
    }

    #[test]
    fn test_pad_to_counts_escape_bytes() {
        let styled = "\x1B[31mX\x1B[0m";
        assert_eq!(pad_to(styled, 5, Align::Right, ' '), styled);
    }
}
