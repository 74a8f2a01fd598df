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

mod code;
mod codec;
mod color;
mod config;
pub mod consts;
mod encoder;
mod named;
mod registry;
mod resolver;
mod result;
mod scanner;
mod style;
mod stylize;
mod tokenizer;
pub mod utility;

pub use self::code::{CodeList, SgrCode, Target};
pub use self::codec::TokenCodec;
pub use self::color::{ColorSpec, Rgb};
pub use self::config::RegistryConfig;
pub use self::encoder::{ansify, ansify_each};
pub use self::named::NamedColors;
pub use self::registry::{
    Accessor, AccessorOrigin, StyleRegistry, apply, define_color, define_colors, with_registry,
};
pub use self::resolver::ColorResolver;
pub use self::result::{StyleError, StyleResult};
pub use self::scanner::open_sequence_ends;
pub use self::style::{BaseColor, TextStyle};
pub use self::stylize::Stylize;
pub use self::tokenizer::{Token, render, tokenize};
pub use self::utility::{Align, pad, pad_to, rainbow, strip_sgr};
