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

use crate::consts::{
    BACKGROUND_EXTENDED, BACKGROUND_OFFSET, CSI, FOREGROUND_EXTENDED, MODE_PALETTE, MODE_RGB,
    SGR_FINAL, SGR_SEPARATOR,
};
use bytes::BufMut;

/// A single SGR parameter.
///
/// No upper bound is enforced. Values outside the range a terminal understands
/// (for example an RGB component of `900`) are carried through verbatim.
pub type SgrCode = u32;

/// Which half of the cell a color applies to.
///
/// | Target       | 256-color prefix | RGB prefix | Basic offset |
/// |--------------|------------------|------------|--------------|
/// | `Foreground` | `38;5`           | `38;2`     | `+0`         |
/// | `Background` | `48;5`           | `48;2`     | `+10`        |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Text color and text styles.
    Foreground,
    /// Cell background color. Text styles have no background meaning.
    Background,
}

impl Target {
    /// Codes that introduce a 256-color palette index.
    pub fn palette_prefix(&self) -> [SgrCode; 2] {
        [self.extended(), MODE_PALETTE]
    }

    /// Codes that introduce a 24-bit RGB triplet.
    pub fn rgb_prefix(&self) -> [SgrCode; 2] {
        [self.extended(), MODE_RGB]
    }

    /// Offset added to a basic foreground color code.
    pub fn offset(&self) -> SgrCode {
        match self {
            Target::Foreground => 0,
            Target::Background => BACKGROUND_OFFSET,
        }
    }

    fn extended(&self) -> SgrCode {
        match self {
            Target::Foreground => FOREGROUND_EXTENDED,
            Target::Background => BACKGROUND_EXTENDED,
        }
    }
}

/// The ordered parameter list of one `ESC [ ... m` sequence.
///
/// Order is significant: codes are emitted and merged in the order they were supplied.
/// The list `[0]` is the reset sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeList(Vec<SgrCode>);

impl CodeList {
    /// Creates an empty code list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The reset list `[0]`.
    pub fn reset() -> Self {
        Self(vec![0])
    }

    /// Returns true if this is exactly the reset list `[0]`.
    pub fn is_reset(&self) -> bool {
        self.0.as_slice() == [0]
    }

    /// Number of codes in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no codes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a single code.
    pub fn push(&mut self, code: SgrCode) {
        self.0.push(code);
    }

    /// Appends every code from `other`, preserving order.
    pub fn append(&mut self, other: &CodeList) {
        self.0.extend_from_slice(&other.0);
    }

    /// Borrow the codes as a slice.
    pub fn as_slice(&self) -> &[SgrCode] {
        &self.0
    }

    /// Iterate over the codes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SgrCode> {
        self.0.iter()
    }

    /// Consumes the list, returning the underlying codes.
    pub fn into_vec(self) -> Vec<SgrCode> {
        self.0
    }

    /// Length in bytes of the full opening sequence `ESC [ <codes> m`.
    pub fn encoded_len(&self) -> usize {
        let digits: usize = self.0.iter().map(|code| decimal_width(*code)).sum();
        let separators = self.0.len().saturating_sub(1);
        CSI.len() + digits + separators + 1
    }

    /// Writes the full opening sequence `ESC [ <codes> m` into `dst`.
    pub fn encode<T: BufMut>(&self, dst: &mut T) {
        dst.put_slice(CSI.as_bytes());
        for (index, code) in self.0.iter().enumerate() {
            if index > 0 {
                dst.put_u8(SGR_SEPARATOR as u8);
            }
            dst.put_slice(code.to_string().as_bytes());
        }
        dst.put_u8(SGR_FINAL);
    }

    /// Renders the full opening sequence as a string.
    pub fn to_sequence(&self) -> String {
        format!("{}{}m", CSI, self)
    }
}

fn decimal_width(mut value: SgrCode) -> usize {
    let mut width = 1;
    while value >= 10 {
        value /= 10;
        width += 1;
    }
    width
}

impl std::fmt::Display for CodeList {
    /// Formats the codes joined by `;`, without the surrounding `ESC [` and `m`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, code) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", SGR_SEPARATOR)?;
            }
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}

impl From<Vec<SgrCode>> for CodeList {
    fn from(codes: Vec<SgrCode>) -> Self {
        Self(codes)
    }
}

impl From<&[SgrCode]> for CodeList {
    fn from(codes: &[SgrCode]) -> Self {
        Self(codes.to_vec())
    }
}

impl<const N: usize> From<[SgrCode; N]> for CodeList {
    fn from(codes: [SgrCode; N]) -> Self {
        Self(codes.to_vec())
    }
}

impl FromIterator<SgrCode> for CodeList {
    fn from_iter<I: IntoIterator<Item = SgrCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<SgrCode> for CodeList {
    fn extend<I: IntoIterator<Item = SgrCode>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CodeList {
    type Item = &'a SgrCode;
    type IntoIter = std::slice::Iter<'a, SgrCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[SgrCode]> for CodeList {
    fn eq(&self, other: &[SgrCode]) -> bool {
        self.0.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[SgrCode; N]> for CodeList {
    fn eq(&self, other: &[SgrCode; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}
