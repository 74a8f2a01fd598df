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

use crate::code::{CodeList, Target};
use crate::encoder::ansify;
use crate::style::BaseColor;

const RAINBOW: [BaseColor; 6] = [
    BaseColor::Red,
    BaseColor::Green,
    BaseColor::Yellow,
    BaseColor::Blue,
    BaseColor::Magenta,
    BaseColor::Cyan,
];

/// Colors each piece of `text` with the next rainbow color.
///
/// Pieces are characters when `delimiter` is empty, otherwise the parts between
/// delimiters. The delimiters themselves are kept unstyled. An empty piece between
/// two delimiters still gets its own empty segment. Empty text stays empty.
pub fn rainbow(text: &str, delimiter: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let paint = |(index, piece): (usize, &str)| {
        let color = RAINBOW[index % RAINBOW.len()];
        ansify(piece, &CodeList::from([color.code_for(Target::Foreground)]))
    };

    if delimiter.is_empty() {
        text.char_indices()
            .map(|(offset, ch)| &text[offset..offset + ch.len_utf8()])
            .enumerate()
            .map(paint)
            .collect()
    } else {
        text.split(delimiter)
            .enumerate()
            .map(paint)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_character_is_colored() {
        assert_eq!(
            rainbow("abc", ""),
            "\x1B[31ma\x1B[0m\x1B[32mb\x1B[0m\x1B[33mc\x1B[0m"
        );
    }

    #[test]
    fn test_colors_cycle() {
        let styled = rainbow("abcdefg", "");
        assert!(styled.ends_with("\x1B[31mg\x1B[0m"));
    }

    #[test]
    fn test_delimited_words() {
        assert_eq!(
            rainbow("one two", " "),
            "\x1B[31mone\x1B[0m \x1B[32mtwo\x1B[0m"
        );
    }

    #[test]
    fn test_empty_pieces_get_empty_segments() {
        assert_eq!(
            rainbow("a,,b", ","),
            "\x1B[31ma\x1B[0m,\x1B[32m\x1B[0m,\x1B[33mb\x1B[0m"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(rainbow("", ""), "");
        assert_eq!(rainbow("", ","), "");
    }
}
