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

use crate::code::{SgrCode, Target};
use crate::{StyleError, StyleResult};
use std::str::FromStr;

/// A named text attribute.
///
/// Text styles only make sense in the foreground; resolving one against
/// [`Target::Background`] is an argument error.
///
/// | Name            | Code |
/// |-----------------|------|
/// | `default`       | `0`  |
/// | `bold`          | `1`  |
/// | `dim`           | `2`  |
/// | `italic`        | `3`  |
/// | `underline`     | `4`  |
/// | `inverse`       | `7`  |
/// | `invisible`     | `8`  |
/// | `strikethrough` | `9`  |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Reset all attributes (`0`).
    Default,
    /// Bold or increased intensity (`1`).
    Bold,
    /// Faint or decreased intensity (`2`).
    Dim,
    /// Italic (`3`).
    Italic,
    /// Single underline (`4`).
    Underline,
    /// Swap foreground and background (`7`).
    Inverse,
    /// Concealed text (`8`).
    Invisible,
    /// Crossed-out text (`9`).
    Strikethrough,
}

impl TextStyle {
    /// Every text style, in code order.
    pub const ALL: [TextStyle; 8] = [
        TextStyle::Default,
        TextStyle::Bold,
        TextStyle::Dim,
        TextStyle::Italic,
        TextStyle::Underline,
        TextStyle::Inverse,
        TextStyle::Invisible,
        TextStyle::Strikethrough,
    ];

    /// The SGR code for this style.
    pub fn code(&self) -> SgrCode {
        match self {
            TextStyle::Default => 0,
            TextStyle::Bold => 1,
            TextStyle::Dim => 2,
            TextStyle::Italic => 3,
            TextStyle::Underline => 4,
            TextStyle::Inverse => 7,
            TextStyle::Invisible => 8,
            TextStyle::Strikethrough => 9,
        }
    }

    /// The canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            TextStyle::Default => "default",
            TextStyle::Bold => "bold",
            TextStyle::Dim => "dim",
            TextStyle::Italic => "italic",
            TextStyle::Underline => "underline",
            TextStyle::Inverse => "inverse",
            TextStyle::Invisible => "invisible",
            TextStyle::Strikethrough => "strikethrough",
        }
    }

    /// Looks a style up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<TextStyle> {
        let normalized = name.to_ascii_lowercase();
        TextStyle::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
    }
}

impl FromStr for TextStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        TextStyle::from_name(s).ok_or_else(|| StyleError::UnrecognizedColor(s.to_string()))
    }
}

impl std::fmt::Display for TextStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the sixteen standard terminal colors.
///
/// The actual rendered color is chosen by the terminal's palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseColor {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,
    /// Bright Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Magenta - Color #13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Bright Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #15 (FG `97`, BG `107`).
    BrightWhite,
}

impl BaseColor {
    /// Every base color, in palette order.
    pub const ALL: [BaseColor; 16] = [
        BaseColor::Black,
        BaseColor::Red,
        BaseColor::Green,
        BaseColor::Yellow,
        BaseColor::Blue,
        BaseColor::Magenta,
        BaseColor::Cyan,
        BaseColor::White,
        BaseColor::BrightBlack,
        BaseColor::BrightRed,
        BaseColor::BrightGreen,
        BaseColor::BrightYellow,
        BaseColor::BrightBlue,
        BaseColor::BrightMagenta,
        BaseColor::BrightCyan,
        BaseColor::BrightWhite,
    ];

    /// The foreground SGR code.
    pub fn code(&self) -> SgrCode {
        match self {
            BaseColor::Black => 30,
            BaseColor::Red => 31,
            BaseColor::Green => 32,
            BaseColor::Yellow => 33,
            BaseColor::Blue => 34,
            BaseColor::Magenta => 35,
            BaseColor::Cyan => 36,
            BaseColor::White => 37,
            BaseColor::BrightBlack => 90,
            BaseColor::BrightRed => 91,
            BaseColor::BrightGreen => 92,
            BaseColor::BrightYellow => 93,
            BaseColor::BrightBlue => 94,
            BaseColor::BrightMagenta => 95,
            BaseColor::BrightCyan => 96,
            BaseColor::BrightWhite => 97,
        }
    }

    /// The SGR code for this color on the given target.
    pub fn code_for(&self, target: Target) -> SgrCode {
        self.code() + target.offset()
    }

    /// The canonical lower-case name, e.g. `bright_blue`.
    pub fn name(&self) -> &'static str {
        match self {
            BaseColor::Black => "black",
            BaseColor::Red => "red",
            BaseColor::Green => "green",
            BaseColor::Yellow => "yellow",
            BaseColor::Blue => "blue",
            BaseColor::Magenta => "magenta",
            BaseColor::Cyan => "cyan",
            BaseColor::White => "white",
            BaseColor::BrightBlack => "bright_black",
            BaseColor::BrightRed => "bright_red",
            BaseColor::BrightGreen => "bright_green",
            BaseColor::BrightYellow => "bright_yellow",
            BaseColor::BrightBlue => "bright_blue",
            BaseColor::BrightMagenta => "bright_magenta",
            BaseColor::BrightCyan => "bright_cyan",
            BaseColor::BrightWhite => "bright_white",
        }
    }

    /// Looks a color up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<BaseColor> {
        let normalized = name.to_ascii_lowercase();
        BaseColor::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
    }
}

impl FromStr for BaseColor {
    type Err = StyleError;

    fn from_str(s: &str) -> StyleResult<Self> {
        BaseColor::from_name(s).ok_or_else(|| StyleError::UnrecognizedColor(s.to_string()))
    }
}

impl std::fmt::Display for BaseColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_codes() {
        assert_eq!(TextStyle::Default.code(), 0);
        assert_eq!(TextStyle::Bold.code(), 1);
        assert_eq!(TextStyle::Underline.code(), 4);
        assert_eq!(TextStyle::Inverse.code(), 7);
        assert_eq!(TextStyle::Strikethrough.code(), 9);
    }

    #[test]
    fn test_text_style_names_are_case_insensitive() {
        assert_eq!(TextStyle::from_name("BOLD"), Some(TextStyle::Bold));
        assert_eq!(TextStyle::from_name("Italic"), Some(TextStyle::Italic));
        assert_eq!(TextStyle::from_name("blink"), None);
        assert_eq!("underline".parse::<TextStyle>(), Ok(TextStyle::Underline));
    }

    #[test]
    fn test_base_color_codes() {
        assert_eq!(BaseColor::Black.code(), 30);
        assert_eq!(BaseColor::White.code(), 37);
        assert_eq!(BaseColor::BrightBlack.code(), 90);
        assert_eq!(BaseColor::BrightWhite.code(), 97);
    }

    #[test]
    fn test_base_color_background_offset() {
        assert_eq!(BaseColor::Red.code_for(Target::Background), 41);
        assert_eq!(BaseColor::BrightRed.code_for(Target::Background), 101);
        assert_eq!(BaseColor::Cyan.code_for(Target::Foreground), 36);
    }

    #[test]
    fn test_base_color_names_round_trip() {
        for color in BaseColor::ALL {
            assert_eq!(BaseColor::from_name(color.name()), Some(color));
        }
        assert_eq!(BaseColor::from_name("Bright_Cyan"), Some(BaseColor::BrightCyan));
        let err = "bright_flarg".parse::<BaseColor>().unwrap_err();
        assert!(err.to_string().contains("bright_flarg"));
    }
}
