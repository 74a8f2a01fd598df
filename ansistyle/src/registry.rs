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

//! Named accessors and the process-wide style registry.
//!
//! An accessor is a name such as `bold`, `red` or `on_coral` bound to a target and a
//! [`ColorSpec`]. [`StyleRegistry::apply`] is the single dispatch point that looks a
//! name up and styles text with it. Registering a named color can add a `<name>` and
//! `on_<name>` accessor pair, but never over a built-in one.
//!
//! The process-wide registry is built from [`RegistryConfig::default`] on first use.
//! Lookups take a shared lock and registration takes an exclusive one.

use crate::code::Target;
use crate::color::{ColorSpec, Rgb};
use crate::config::RegistryConfig;
use crate::encoder::{ansify, ansify_each};
use crate::named::NamedColors;
use crate::resolver::ColorResolver;
use crate::style::{BaseColor, TextStyle};
use crate::{StyleError, StyleResult};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::debug;

/// Who created an accessor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorOrigin {
    /// A text style or base color accessor. Never replaced.
    Builtin,
    /// Created by registering the named color it carries. Only a later registration
    /// of that same color may replace it.
    Registered(String),
}

impl AccessorOrigin {
    fn is_owned_by(&self, owner: &str) -> bool {
        matches!(self, AccessorOrigin::Registered(name) if name == owner)
    }
}

/// A named shortcut for one style or color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Accessor {
    /// Foreground or background
    pub target: Target,
    /// What the accessor applies
    pub spec: ColorSpec,
    /// Who created it
    pub origin: AccessorOrigin,
}

/// Named colors plus the accessors that dispatch to them.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    colors: NamedColors,
    accessors: HashMap<String, Accessor>,
}

impl StyleRegistry {
    /// Creates a registry using [`RegistryConfig::default`].
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry according to `config`.
    ///
    /// Built-in colors whose accessors would collide with a text style or base color
    /// accessor are recorded without accessors.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self {
            colors: NamedColors::new(),
            accessors: HashMap::new(),
        };
        registry.install_builtin_accessors();

        if config.builtin_colors {
            for (name, rgb) in NamedColors::builtin().iter() {
                if config.named_accessors && registry.define_color(name, rgb, true).is_ok() {
                    continue;
                }
                registry.colors.insert(name, rgb);
            }
        }

        debug!(
            colors = registry.colors.len(),
            accessors = registry.accessors.len(),
            "Style registry initialized"
        );
        registry
    }

    fn install_builtin_accessors(&mut self) {
        for style in TextStyle::ALL {
            self.insert_builtin(style.name().to_string(), Target::Foreground, style.into());
        }
        for color in BaseColor::ALL {
            self.insert_builtin(color.name().to_string(), Target::Foreground, color.into());
            self.insert_builtin(format!("on_{}", color.name()), Target::Background, color.into());
        }
    }

    fn insert_builtin(&mut self, name: String, target: Target, spec: ColorSpec) {
        self.accessors.insert(
            name,
            Accessor {
                target,
                spec,
                origin: AccessorOrigin::Builtin,
            },
        );
    }

    /// The named-color table.
    pub fn colors(&self) -> &NamedColors {
        &self.colors
    }

    /// A resolver reading this registry's named colors.
    pub fn resolver(&self) -> ColorResolver<'_> {
        ColorResolver::new(&self.colors)
    }

    /// Looks an accessor up by name, ignoring case.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(&name.to_ascii_lowercase())
    }

    /// Every accessor name, in no particular order.
    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    /// Returns true if registering `name` with accessors would succeed.
    ///
    /// That is the case when neither `<name>` nor `on_<name>` exists, or when the
    /// existing ones were created by an earlier registration of `name` itself.
    pub fn can_define_accessors(&self, name: &str) -> bool {
        self.conflicting_accessor(&name.to_ascii_lowercase()).is_none()
    }

    fn conflicting_accessor(&self, normalized: &str) -> Option<String> {
        [normalized.to_string(), format!("on_{}", normalized)]
            .into_iter()
            .find(|accessor| {
                self.accessors
                    .get(accessor)
                    .is_some_and(|existing| !existing.origin.is_owned_by(normalized))
            })
    }

    /// Records a named color, optionally with `<name>` and `on_<name>` accessors.
    ///
    /// Fails with [`StyleError::AccessorConflict`] if an accessor would replace one
    /// that `name` does not own, either built-in or registered for another color.
    /// Nothing is recorded in that case.
    pub fn define_color(&mut self, name: &str, rgb: Rgb, create_accessors: bool) -> StyleResult<()> {
        let normalized = name.to_ascii_lowercase();

        if create_accessors {
            if let Some(conflict) = self.conflicting_accessor(&normalized) {
                return Err(StyleError::AccessorConflict(conflict));
            }
            for (accessor, target) in [
                (normalized.clone(), Target::Foreground),
                (format!("on_{}", normalized), Target::Background),
            ] {
                self.accessors.insert(
                    accessor,
                    Accessor {
                        target,
                        spec: ColorSpec::Rgb(rgb),
                        origin: AccessorOrigin::Registered(normalized.clone()),
                    },
                );
            }
        }

        let previous = self.colors.insert(&normalized, rgb);
        debug!(
            name = %normalized,
            rgb = %rgb,
            replaced = previous.is_some(),
            accessors = create_accessors,
            "Registered named color"
        );
        Ok(())
    }

    /// Records every color in `table`.
    ///
    /// All accessor conflicts are checked before anything is recorded, including two
    /// entries of `table` whose accessors would collide, such as `foo` and `on_foo`.
    pub fn define_colors(&mut self, table: &NamedColors, create_accessors: bool) -> StyleResult<()> {
        if create_accessors {
            let conflict = table.iter().find_map(|(name, _)| {
                let background = format!("on_{}", name);
                if table.contains(&background) {
                    return Some(background);
                }
                self.conflicting_accessor(name)
            });
            if let Some(conflict) = conflict {
                return Err(StyleError::AccessorConflict(conflict));
            }
        }
        for (name, rgb) in table.iter() {
            self.define_color(name, rgb, create_accessors)?;
        }
        Ok(())
    }

    /// Styles `text` with the accessor called `name`.
    pub fn apply(&self, text: &str, name: &str) -> StyleResult<String> {
        let accessor = self
            .accessor(name)
            .ok_or_else(|| StyleError::UnrecognizedColor(name.to_string()))?;
        let codes = self.resolver().resolve(accessor.target, &accessor.spec)?;
        Ok(ansify(text, &codes))
    }

    /// Styles the foreground of `text`.
    pub fn fg(&self, text: &str, spec: &ColorSpec) -> StyleResult<String> {
        let codes = self.resolver().resolve(Target::Foreground, spec)?;
        Ok(ansify(text, &codes))
    }

    /// Styles the background of `text`.
    pub fn on(&self, text: &str, spec: &ColorSpec) -> StyleResult<String> {
        let codes = self.resolver().resolve(Target::Background, spec)?;
        Ok(ansify(text, &codes))
    }

    /// Applies each foreground spec in turn, left to right.
    ///
    /// Every spec is resolved before any is applied.
    pub fn fg_all(&self, text: &str, specs: &[ColorSpec]) -> StyleResult<String> {
        let lists = self.resolver().resolve_all(Target::Foreground, specs)?;
        Ok(ansify_each(text, &lists))
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: LazyLock<RwLock<StyleRegistry>> =
    LazyLock::new(|| RwLock::new(StyleRegistry::new()));

/// Runs `f` with shared access to the process-wide registry.
pub fn with_registry<R>(f: impl FnOnce(&StyleRegistry) -> R) -> R {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    f(&registry)
}

/// Records a named color in the process-wide registry.
///
/// See [`StyleRegistry::define_color`].
pub fn define_color(name: &str, rgb: Rgb, create_accessors: bool) -> StyleResult<()> {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    registry.define_color(name, rgb, create_accessors)
}

/// Records every color in `table` in the process-wide registry.
pub fn define_colors(table: &NamedColors, create_accessors: bool) -> StyleResult<()> {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    registry.define_colors(table, create_accessors)
}

/// Styles `text` with a process-wide accessor.
pub fn apply(text: &str, name: &str) -> StyleResult<String> {
    with_registry(|registry| registry.apply(text, name))
}
