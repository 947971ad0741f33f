// Property-based tests using proptest
// These cover the find/replace and persistence guarantees over random input

use proptest::prelude::*;
use notepad::buffer::DocumentBuffer;
use notepad::persistence;
use notepad::search::{find_all, replace_all};
use tempfile::TempDir;

// Property: matches are sorted, disjoint and each one is the needle
proptest! {
    #[test]
    fn find_all_spans_are_ordered_and_exact(
        text in "[ab\\n]{0,60}",
        needle in "[ab]{1,3}"
    ) {
        let spans = find_all(&text, &needle);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for span in &spans {
            prop_assert_eq!(&text[span.start..span.end], needle.as_str());
        }
    }
}

// Property: the empty needle never matches
proptest! {
    #[test]
    fn empty_needle_finds_nothing(text in "\\PC{0,40}") {
        prop_assert!(find_all(&text, "").is_empty());
        prop_assert_eq!(replace_all(&text, "", "x"), text);
    }
}

// Property: after replacing with text from a disjoint alphabet, the needle is gone
proptest! {
    #[test]
    fn replace_all_removes_every_match(
        text in "[abc]{0,60}",
        needle in "[abc]{1,3}",
        replacement in "[xyz]{1,3}"
    ) {
        let replaced = replace_all(&text, &needle, &replacement);
        prop_assert!(find_all(&replaced, &needle).is_empty());

        let count = find_all(&text, &needle).len();
        prop_assert_eq!(
            replaced.len() + count * needle.len(),
            text.len() + count * replacement.len()
        );
    }
}

// Property: replacing with the needle itself changes nothing
proptest! {
    #[test]
    fn replace_with_self_is_identity(text in "[ab]{0,40}", needle in "[ab]{1,2}") {
        prop_assert_eq!(replace_all(&text, &needle, &needle), text);
    }
}

// Property: saving then loading returns the exact text
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn save_load_roundtrip(text in "\\PC{0,80}(\\n\\PC{0,20}){0,4}\\n?") {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        persistence::save(&path, &text).unwrap();
        prop_assert_eq!(persistence::load(&path).unwrap(), text);
    }
}

// Property: any edit marks the buffer dirty and content round-trips verbatim
proptest! {
    #[test]
    fn set_content_is_verbatim_and_dirty(text in "\\PC{0,60}(\\r?\\n\\PC{0,10}){0,3}") {
        let mut buffer = DocumentBuffer::new();
        prop_assert!(!buffer.is_dirty());
        buffer.set_content(&text);
        prop_assert!(buffer.is_dirty());
        prop_assert_eq!(buffer.get_content(), text);
    }
}

// Property: byte offsets of matches map to positions and back
proptest! {
    #[test]
    fn match_offsets_map_to_positions(
        text in "[aé\\n]{0,40}",
    ) {
        let mut buffer = DocumentBuffer::new();
        buffer.set_content(&text);
        for span in find_all(&text, "é") {
            let pos = buffer.position_of_byte(span.start);
            prop_assert_eq!(buffer.byte_of_position(pos), span.start);
        }
    }
}
