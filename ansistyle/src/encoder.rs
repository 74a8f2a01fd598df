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

use crate::code::CodeList;
use crate::consts::{RESET, SGR_SEPARATOR};
use crate::scanner::open_sequence_ends;
use tracing::trace;

/// Applies `codes` to `text`, returning the new encoded string.
///
/// If `text` carries no open SGR sequence it is wrapped in a fresh segment:
/// `ESC [ codes m` + text + `ESC [ 0 m`. Otherwise `;codes` is spliced into every open
/// sequence just before its `m`, so styling is additive instead of nested. A string
/// built from several styled segments gets the codes in each of them.
///
/// An empty code list leaves the text as it is.
///
/// ```rust
/// use termionix_ansistyle::{ansify, CodeList};
///
/// let red = ansify("TEXT", &CodeList::from([31]));
/// assert_eq!(red, "\x1B[31mTEXT\x1B[0m");
/// assert_eq!(ansify(&red, &CodeList::from([47])), "\x1B[31;47mTEXT\x1B[0m");
/// ```
pub fn ansify(text: &str, codes: &CodeList) -> String {
    if codes.is_empty() {
        return text.to_owned();
    }

    let ends = open_sequence_ends(text);
    if ends.is_empty() {
        trace!(codes = %codes, "Wrapping unstyled text");
        return format!("{}{}{}", codes.to_sequence(), text, RESET);
    }

    trace!(codes = %codes, sequences = ends.len(), "Merging into open sequences");
    let insertion = format!("{}{}", SGR_SEPARATOR, codes);
    let mut merged = String::with_capacity(text.len() + insertion.len() * ends.len());
    merged.push_str(text);
    // Highest offset first so earlier offsets stay valid.
    for end in ends.into_iter().rev() {
        merged.insert_str(end, &insertion);
    }
    merged
}

/// Applies each code list in turn, left to right.
///
/// Equivalent to calling [`ansify`] once per list on the previous result.
pub fn ansify_each<'a, I>(text: &str, lists: I) -> String
where
    I: IntoIterator<Item = &'a CodeList>,
{
    lists
        .into_iter()
        .fold(text.to_owned(), |styled, codes| ansify(&styled, codes))
}
