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

/// The escape byte that starts every ANSI sequence.
pub const ESC: u8 = 0x1B;

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = "\x1B[";

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_FINAL: u8 = b'm';

/// Separator between SGR parameters.
pub const SGR_SEPARATOR: char = ';';

/// The reset sequence. Never a merge target.
pub const RESET: &str = "\x1B[0m";

/// Maximum length of an SGR sequence accepted by the streaming codec, in bytes.
///
/// Sequences produced by the encoder are short, but merged styles grow with every
/// call, so the limit is generous. Anything longer is treated as garbage input.
pub const MAX_SEQUENCE_LENGTH: usize = 256;

/// Prefix selecting an extended foreground color.
pub const FOREGROUND_EXTENDED: u32 = 38;

/// Prefix selecting an extended background color.
pub const BACKGROUND_EXTENDED: u32 = 48;

/// Extended color mode selector for the 256-color palette (`38;5;n`).
pub const MODE_PALETTE: u32 = 5;

/// Extended color mode selector for 24-bit color (`38;2;r;g;b`).
pub const MODE_RGB: u32 = 2;

/// Distance between a basic foreground color code and its background code.
pub const BACKGROUND_OFFSET: u32 = 10;
