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

use crate::code::{CodeList, SgrCode, Target};
use crate::color::{ColorSpec, Rgb};
use crate::encoder::ansify;
use crate::registry::with_registry;
use crate::style::{BaseColor, TextStyle};
use crate::utility::{Align, pad, pad_to, rainbow};
use crate::StyleResult;

/// Styling methods for string slices.
///
/// Every method returns a new string; the receiver is never modified. Calls chain, and
/// each one adds its codes to the sequences already present instead of nesting a new
/// one.
///
/// Name-based methods resolve against the process-wide
/// [`StyleRegistry`](crate::StyleRegistry).
///
/// ```rust
/// use termionix_ansistyle::{BaseColor, Stylize, TextStyle};
///
/// let styled = "TEXT".color(BaseColor::Red).on_color(BaseColor::White);
/// assert_eq!(styled, "\x1B[31;47mTEXT\x1B[0m");
///
/// let bold = "TEXT".fg("#F29C0A").unwrap().style(TextStyle::Bold);
/// assert_eq!(bold, "\x1B[38;2;242;156;10;1mTEXT\x1B[0m");
/// ```
pub trait Stylize {
    /// Applies a foreground color or text style.
    fn fg(&self, spec: impl Into<ColorSpec>) -> StyleResult<String>;

    /// Applies a background color.
    fn on(&self, spec: impl Into<ColorSpec>) -> StyleResult<String>;

    /// Applies each foreground spec in turn, left to right.
    fn fg_all(&self, specs: &[ColorSpec]) -> StyleResult<String>;

    /// Applies the accessor called `name`, such as `bold`, `on_red` or `coral`.
    fn styled(&self, name: &str) -> StyleResult<String>;

    /// Applies a text style.
    fn style(&self, style: TextStyle) -> String;

    /// Applies a base foreground color.
    fn color(&self, color: BaseColor) -> String;

    /// Applies a base background color.
    fn on_color(&self, color: BaseColor) -> String;

    /// Applies a 256-color palette foreground.
    fn text_color(&self, index: SgrCode) -> String;

    /// Applies a 256-color palette background.
    fn bg_color(&self, index: SgrCode) -> String;

    /// Applies a 24-bit foreground.
    fn text_color_rgb(&self, red: SgrCode, green: SgrCode, blue: SgrCode) -> String;

    /// Applies a 24-bit background.
    fn bg_color_rgb(&self, red: SgrCode, green: SgrCode, blue: SgrCode) -> String;

    /// Colors each character in turn.
    fn rainbow(&self) -> String;

    /// Adds `padding` spaces around the text. Not ANSI aware.
    fn pad(&self, padding: usize, align: Align) -> String;

    /// Pads the text with spaces to `width` characters. Not ANSI aware.
    fn pad_to(&self, width: usize, align: Align) -> String;
}

fn palette(target: Target, index: SgrCode) -> CodeList {
    let mut codes = CodeList::from(target.palette_prefix());
    codes.push(index);
    codes
}

fn rgb(target: Target, rgb: Rgb) -> CodeList {
    let mut codes = CodeList::from(target.rgb_prefix());
    codes.extend(rgb.components());
    codes
}

impl Stylize for str {
    fn fg(&self, spec: impl Into<ColorSpec>) -> StyleResult<String> {
        let spec = spec.into();
        with_registry(|registry| registry.fg(self, &spec))
    }

    fn on(&self, spec: impl Into<ColorSpec>) -> StyleResult<String> {
        let spec = spec.into();
        with_registry(|registry| registry.on(self, &spec))
    }

    fn fg_all(&self, specs: &[ColorSpec]) -> StyleResult<String> {
        with_registry(|registry| registry.fg_all(self, specs))
    }

    fn styled(&self, name: &str) -> StyleResult<String> {
        with_registry(|registry| registry.apply(self, name))
    }

    fn style(&self, style: TextStyle) -> String {
        ansify(self, &CodeList::from([style.code()]))
    }

    fn color(&self, color: BaseColor) -> String {
        ansify(self, &CodeList::from([color.code_for(Target::Foreground)]))
    }

    fn on_color(&self, color: BaseColor) -> String {
        ansify(self, &CodeList::from([color.code_for(Target::Background)]))
    }

    fn text_color(&self, index: SgrCode) -> String {
        ansify(self, &palette(Target::Foreground, index))
    }

    fn bg_color(&self, index: SgrCode) -> String {
        ansify(self, &palette(Target::Background, index))
    }

    fn text_color_rgb(&self, red: SgrCode, green: SgrCode, blue: SgrCode) -> String {
        ansify(self, &rgb(Target::Foreground, Rgb::new(red, green, blue)))
    }

    fn bg_color_rgb(&self, red: SgrCode, green: SgrCode, blue: SgrCode) -> String {
        ansify(self, &rgb(Target::Background, Rgb::new(red, green, blue)))
    }

    fn rainbow(&self) -> String {
        rainbow(self, "")
    }

    fn pad(&self, padding: usize, align: Align) -> String {
        pad(self, padding, align, ' ')
    }

    fn pad_to(&self, width: usize, align: Align) -> String {
        pad_to(self, width, align, ' ')
    }
}
