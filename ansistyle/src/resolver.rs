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
use crate::color::{ColorSpec, Rgb};
use crate::named::NamedColors;
use crate::style::{BaseColor, TextStyle};
use crate::{StyleError, StyleResult};

/// Turns a [`ColorSpec`] into the SGR codes that select it.
///
/// String specs are matched case-insensitively in this order:
///
/// 1. Text style (`bold`, `italic`, ...). Foreground only.
/// 2. Base color (`red`, `bright_blue`, ...). Background adds `10`.
/// 3. An entry in the named-color table, resolved as RGB.
/// 4. A hex color, `#RRGGBB` or `#RGB`, resolved as RGB.
///
/// Numeric specs are emitted verbatim behind their prefix:
///
/// | Spec            | Foreground        | Background        |
/// |-----------------|-------------------|-------------------|
/// | `Palette256(n)` | `38;5;n`          | `48;5;n`          |
/// | `Rgb(r,g,b)`    | `38;2;r;g;b`      | `48;2;r;g;b`      |
#[derive(Copy, Clone, Debug)]
pub struct ColorResolver<'a> {
    named: &'a NamedColors,
}

impl<'a> ColorResolver<'a> {
    /// Creates a resolver that reads names from `named`.
    pub fn new(named: &'a NamedColors) -> Self {
        Self { named }
    }

    /// Resolves a single spec for `target`.
    pub fn resolve(&self, target: Target, spec: &ColorSpec) -> StyleResult<CodeList> {
        match spec {
            ColorSpec::Palette256(index) => {
                let mut codes = CodeList::from(target.palette_prefix());
                codes.push(*index);
                Ok(codes)
            }
            ColorSpec::Rgb(rgb) => Ok(Self::rgb(target, rgb)),
            ColorSpec::Style(style) => Self::style(target, *style),
            ColorSpec::Base(color) => Ok(CodeList::from([color.code_for(target)])),
            ColorSpec::NamedStyleOrColor(name) => self.resolve_name(target, name),
            ColorSpec::HexColor(hex) => Rgb::from_hex(hex)
                .map(|rgb| Self::rgb(target, &rgb))
                .ok_or_else(|| StyleError::UnrecognizedColor(hex.clone())),
        }
    }

    /// Resolves every spec in order, one code list per spec.
    ///
    /// Fails on the first spec that does not resolve. An empty slice is an argument
    /// error.
    pub fn resolve_all(&self, target: Target, specs: &[ColorSpec]) -> StyleResult<Vec<CodeList>> {
        if specs.is_empty() {
            return Err(StyleError::invalid_argument("Requires at least one argument."));
        }
        specs.iter().map(|spec| self.resolve(target, spec)).collect()
    }

    fn resolve_name(&self, target: Target, name: &str) -> StyleResult<CodeList> {
        let normalized = name.to_ascii_lowercase();

        if let Some(style) = TextStyle::from_name(&normalized) {
            return Self::style(target, style);
        }
        if let Some(color) = BaseColor::from_name(&normalized) {
            return Ok(CodeList::from([color.code_for(target)]));
        }
        if let Some(rgb) = self.named.get(&normalized) {
            return Ok(Self::rgb(target, &rgb));
        }
        if let Some(rgb) = Rgb::from_hex(&normalized) {
            return Ok(Self::rgb(target, &rgb));
        }
        Err(StyleError::UnrecognizedColor(name.to_string()))
    }

    fn style(target: Target, style: TextStyle) -> StyleResult<CodeList> {
        match target {
            Target::Foreground => Ok(CodeList::from([style.code()])),
            Target::Background => Err(StyleError::invalid_argument(format!(
                "'{}' is a text style and cannot be used as a background",
                style
            ))),
        }
    }

    fn rgb(target: Target, rgb: &Rgb) -> CodeList {
        let mut codes = CodeList::from(target.rgb_prefix());
        codes.extend(rgb.components());
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(target: Target, spec: impl Into<ColorSpec>) -> StyleResult<CodeList> {
        let named = NamedColors::builtin();
        ColorResolver::new(&named).resolve(target, &spec.into())
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(resolve(Target::Foreground, 99u32).unwrap(), [38, 5, 99]);
        assert_eq!(resolve(Target::Background, 99u32).unwrap(), [48, 5, 99]);
        assert_eq!(resolve(Target::Foreground, 4096u32).unwrap(), [38, 5, 4096]);
    }

    #[test]
    fn test_rgb_is_not_clamped() {
        assert_eq!(
            resolve(Target::Foreground, Rgb::new(900, 800, 700)).unwrap(),
            [38, 2, 900, 800, 700]
        );
        assert_eq!(
            resolve(Target::Background, Rgb::new(99, 15, 187)).unwrap(),
            [48, 2, 99, 15, 187]
        );
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            resolve(Target::Foreground, "#F29C0A").unwrap(),
            [38, 2, 242, 156, 10]
        );
        assert_eq!(resolve(Target::Foreground, "#F20").unwrap(), [38, 2, 255, 34, 0]);
        assert_eq!(
            resolve(Target::Background, "#f20").unwrap(),
            [48, 2, 255, 34, 0]
        );
        assert_eq!(
            resolve(Target::Foreground, ColorSpec::NamedStyleOrColor("#F20".into())).unwrap(),
            [38, 2, 255, 34, 0]
        );
    }

    #[test]
    fn test_invalid_hex_names_input() {
        assert_eq!(
            resolve(Target::Foreground, "#F2"),
            Err(StyleError::UnrecognizedColor("#F2".to_string()))
        );
    }

    #[test]
    fn test_styles_foreground_only() {
        assert_eq!(resolve(Target::Foreground, "bold").unwrap(), [1]);
        assert_eq!(resolve(Target::Foreground, "UNDERLINE").unwrap(), [4]);
        assert!(matches!(
            resolve(Target::Background, "bold"),
            Err(StyleError::InvalidArgument { .. })
        ));
        assert!(matches!(
            resolve(Target::Background, TextStyle::Italic),
            Err(StyleError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_base_colors() {
        assert_eq!(resolve(Target::Foreground, "red").unwrap(), [31]);
        assert_eq!(resolve(Target::Foreground, "Bright_Cyan").unwrap(), [96]);
        assert_eq!(resolve(Target::Background, "green").unwrap(), [42]);
        assert_eq!(resolve(Target::Background, "bright_blue").unwrap(), [104]);
        assert_eq!(resolve(Target::Background, BaseColor::White).unwrap(), [47]);
    }

    #[test]
    fn test_base_colors_shadow_named_table() {
        // `red` is also a CSS name; the base color wins.
        assert_eq!(resolve(Target::Foreground, "red").unwrap(), [31]);
    }

    #[test]
    fn test_named_table_lookup() {
        assert_eq!(
            resolve(Target::Foreground, "Orange").unwrap(),
            [38, 2, 255, 165, 0]
        );
        assert_eq!(
            resolve(Target::Background, "indigo").unwrap(),
            [48, 2, 75, 0, 130]
        );
    }

    #[test]
    fn test_unrecognized_names() {
        let err = resolve(Target::Foreground, "banana").unwrap_err();
        assert_eq!(err, StyleError::UnrecognizedColor("banana".to_string()));
        assert!(err.to_string().contains("banana"));

        let err = resolve(Target::Background, "bright_flarg").unwrap_err();
        assert!(err.to_string().contains("bright_flarg"));
    }

    #[test]
    fn test_resolve_all() {
        let named = NamedColors::new();
        let resolver = ColorResolver::new(&named);
        let lists = resolver
            .resolve_all(
                Target::Foreground,
                &["italic".into(), Rgb::new(52, 144, 6).into()],
            )
            .unwrap();
        assert_eq!(lists, vec![CodeList::from([3]), CodeList::from([38, 2, 52, 144, 6])]);
        assert!(matches!(
            resolver.resolve_all(Target::Foreground, &[]),
            Err(StyleError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_empty_table_falls_through_to_error() {
        let named = NamedColors::new();
        let resolver = ColorResolver::new(&named);
        assert_eq!(
            resolver.resolve(Target::Foreground, &"orange".into()),
            Err(StyleError::UnrecognizedColor("orange".to_string()))
        );
    }
}
