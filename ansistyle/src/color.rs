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

use crate::code::SgrCode;
use crate::style::{BaseColor, TextStyle};
use crate::{StyleError, StyleResult};

/// A 24-bit color triplet.
///
/// Components are not clamped. `Rgb::new(900, 800, 700)` is a legal value and is
/// emitted exactly as given; terminals decide what to make of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component
    pub red: SgrCode,
    /// Green component
    pub green: SgrCode,
    /// Blue component
    pub blue: SgrCode,
}

impl Rgb {
    /// Creates a triplet from its components.
    pub const fn new(red: SgrCode, green: SgrCode, blue: SgrCode) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RRGGBB` or `#RGB`, ignoring case.
    ///
    /// The short form duplicates each nibble, so `#ABC` is `#AABBCC`.
    /// Returns `None` for anything else, including a missing `#`.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let component = |slice: &str| SgrCode::from_str_radix(slice, 16).ok();
        match digits.len() {
            6 => Some(Rgb::new(
                component(&digits[0..2])?,
                component(&digits[2..4])?,
                component(&digits[4..6])?,
            )),
            3 => {
                let nibble = |slice: &str| component(slice).map(|value| value * 0x11);
                Some(Rgb::new(
                    nibble(&digits[0..1])?,
                    nibble(&digits[1..2])?,
                    nibble(&digits[2..3])?,
                ))
            }
            _ => None,
        }
    }

    /// The components in `[red, green, blue]` order.
    pub fn components(&self) -> [SgrCode; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<(SgrCode, SgrCode, SgrCode)> for Rgb {
    fn from((red, green, blue): (SgrCode, SgrCode, SgrCode)) -> Self {
        Rgb::new(red, green, blue)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// A caller-supplied description of a color or style.
///
/// Built per call and consumed immediately by the
/// [`ColorResolver`](crate::ColorResolver).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// An index into the terminal's 256-color table. Not range checked.
    Palette256(SgrCode),
    /// A 24-bit color. Not range checked.
    Rgb(Rgb),
    /// A text style, base color or named color. Matched case-insensitively.
    NamedStyleOrColor(String),
    /// `#RRGGBB` or `#RGB`.
    HexColor(String),
    /// A text style, already typed.
    Style(TextStyle),
    /// A base color, already typed.
    Base(BaseColor),
}

impl ColorSpec {
    /// Builds a spec from an untyped list of integers.
    ///
    /// One value selects a palette index and three values an RGB triplet. Anything
    /// else is rejected, as is a negative component.
    pub fn from_components(values: &[i64]) -> StyleResult<ColorSpec> {
        let mut codes = Vec::with_capacity(values.len());
        for value in values {
            let code = SgrCode::try_from(*value).map_err(|_| {
                StyleError::invalid_argument(format!(
                    "Invalid color component: '{}' is not a non-negative integer",
                    value
                ))
            })?;
            codes.push(code);
        }
        match codes.as_slice() {
            [] => Err(StyleError::invalid_argument("Missing argument.")),
            [index] => Ok(ColorSpec::Palette256(*index)),
            [red, green, blue] => Ok(ColorSpec::Rgb(Rgb::new(*red, *green, *blue))),
            _ => Err(StyleError::invalid_argument(format!(
                "Invalid RGB color code: '{}'",
                values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl From<SgrCode> for ColorSpec {
    fn from(index: SgrCode) -> Self {
        ColorSpec::Palette256(index)
    }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self {
        ColorSpec::Palette256(SgrCode::from(index))
    }
}

impl From<Rgb> for ColorSpec {
    fn from(rgb: Rgb) -> Self {
        ColorSpec::Rgb(rgb)
    }
}

impl From<(SgrCode, SgrCode, SgrCode)> for ColorSpec {
    fn from(triplet: (SgrCode, SgrCode, SgrCode)) -> Self {
        ColorSpec::Rgb(Rgb::from(triplet))
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        if name.starts_with('#') {
            ColorSpec::HexColor(name.to_string())
        } else {
            ColorSpec::NamedStyleOrColor(name.to_string())
        }
    }
}

impl From<String> for ColorSpec {
    fn from(name: String) -> Self {
        if name.starts_with('#') {
            ColorSpec::HexColor(name)
        } else {
            ColorSpec::NamedStyleOrColor(name)
        }
    }
}

impl From<TextStyle> for ColorSpec {
    fn from(style: TextStyle) -> Self {
        ColorSpec::Style(style)
    }
}

impl From<BaseColor> for ColorSpec {
    fn from(color: BaseColor) -> Self {
        ColorSpec::Base(color)
    }
}

impl std::fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorSpec::Palette256(index) => write!(f, "{}", index),
            ColorSpec::Rgb(rgb) => write!(f, "{}", rgb),
            ColorSpec::NamedStyleOrColor(name) | ColorSpec::HexColor(name) => f.write_str(name),
            ColorSpec::Style(style) => write!(f, "{}", style),
            ColorSpec::Base(color) => write!(f, "{}", color),
        }
    }
}
