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

//! Property-based tests for the encoder and tokenizer

use proptest::prelude::*;
use termionix_ansistyle::{
    CodeList, Token, ansify, open_sequence_ends, render, strip_sgr, tokenize,
};

// ============================================================================
// Strategies
// ============================================================================

fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!äöü]{1,24}"
}

// Starts at 1 so a list is never the reset sequence, which is not a merge target.
fn code_list() -> impl Strategy<Value = CodeList> {
    prop::collection::vec(1u32..256, 1..6).prop_map(CodeList::from)
}

fn styled_segment() -> impl Strategy<Value = String> {
    (plain_text(), code_list()).prop_map(|(text, codes)| ansify(&text, &codes))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn test_wrapping_round_trips(text in plain_text(), codes in code_list()) {
        let tokens = tokenize(&ansify(&text, &codes)).unwrap();
        prop_assert_eq!(
            tokens,
            vec![Token::Codes(codes), Token::Text(text), Token::Codes(CodeList::reset())]
        );
    }

    #[test]
    fn test_merge_distributes_over_segments(
        first in styled_segment(),
        second in styled_segment(),
        codes in code_list(),
    ) {
        let combined = format!("{}{}", first, second);
        prop_assert_eq!(
            ansify(&combined, &codes),
            format!("{}{}", ansify(&first, &codes), ansify(&second, &codes))
        );
    }

    #[test]
    fn test_merge_never_adds_sequences(segment in styled_segment(), codes in code_list()) {
        let before = open_sequence_ends(&segment).len();
        let after = open_sequence_ends(&ansify(&segment, &codes)).len();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_merge_preserves_visible_text(segment in styled_segment(), codes in code_list()) {
        let merged = ansify(&segment, &codes);
        prop_assert_eq!(strip_sgr(&merged), strip_sgr(&segment));
    }

    #[test]
    fn test_render_inverts_tokenize(segments in prop::collection::vec(styled_segment(), 0..5)) {
        let source = segments.concat();
        prop_assert_eq!(render(&tokenize(&source).unwrap()), source);
    }

    #[test]
    fn test_input_is_not_modified(text in plain_text(), codes in code_list()) {
        let original = text.clone();
        let _ = ansify(&text, &codes);
        prop_assert_eq!(text, original);
    }
}
