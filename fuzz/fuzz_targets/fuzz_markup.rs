#![no_main]
use libfuzzer_sys::fuzz_target;
use tagfilter::{sanitize_markup, Scanner, Segment, DENIED_ATTRIBUTES};

fuzz_target!(|data: &str| {
    // Segments must reassemble the input exactly.
    let joined: String = Scanner::new(data).map(|s| s.as_str()).collect();
    assert_eq!(joined, data);

    let output = sanitize_markup(data);
    for segment in Scanner::new(&output) {
        if let Segment::Tag(tag) = segment {
            // Tags whose name never ends are passed through untouched.
            if !tag.contains(|c: char| c == '>' || c.is_whitespace()) {
                continue;
            }
            for keyword in DENIED_ATTRIBUTES {
                assert!(!tag.contains(keyword), "{keyword} survived in {tag:?}");
            }
        }
    }
});
