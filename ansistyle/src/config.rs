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

/// Settings for building a [`StyleRegistry`](crate::StyleRegistry).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Seed the named-color table with the built-in color names
    pub builtin_colors: bool,
    /// Create `<name>` and `on_<name>` accessors for every seeded color
    pub named_accessors: bool,
}

impl RegistryConfig {
    /// Built-in colors with accessors
    pub fn full() -> RegistryConfig {
        RegistryConfig {
            builtin_colors: true,
            named_accessors: true,
        }
    }
    /// Built-in colors, reachable only through `fg`/`on`
    pub fn colors_only() -> RegistryConfig {
        RegistryConfig {
            builtin_colors: true,
            named_accessors: false,
        }
    }
    /// Only text style and base color accessors
    pub fn minimal() -> RegistryConfig {
        RegistryConfig {
            builtin_colors: false,
            named_accessors: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::full()
    }
}
