#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::panic)]

use std::thread;

use tagfilter::{
    neutralize_script, sanitize_markup, scan, validate_color, OutputContext, Policy, Sanitizer,
    Segment, ALLOWED_TAGS, DENIED_ATTRIBUTES,
};

#[test]
fn documented_examples() {
    assert_eq!(sanitize_markup("hello"), "hello");
    assert_eq!(sanitize_markup("<b>hi</b>"), "<b>hi</b>");

    let output = sanitize_markup("<img onclick=\"x()\">");
    assert!(!output.contains("onclick"));
    assert!(output.contains("blocked"));

    assert_eq!(validate_color("#FEFFFF"), "#FEFFFF");
    assert_eq!(validate_color("red"), "red");
    assert_eq!(validate_color("javascript:alert(1)"), "invalid");

    assert_eq!(neutralize_script("<SCRIPT>"), "<span>");
}

#[test]
fn every_allowed_tag_survives() {
    for tag in ALLOWED_TAGS {
        let markup = format!("<{tag}>x</{tag}>");
        assert_eq!(sanitize_markup(&markup), markup, "tag {tag}");
    }
}

#[test]
fn every_denied_keyword_is_masked() {
    for keyword in DENIED_ATTRIBUTES {
        let upper = keyword.to_uppercase();
        let output = sanitize_markup(&format!("<p {upper}=\"go()\">text</p>"));
        assert_eq!(output, "<p blocked=\"go()\">text</p>", "keyword {keyword}");
    }
}

#[test]
fn output_never_carries_denied_keywords_in_tags() {
    let inputs = [
        "<div onmouseover=steal()>hover</div>",
        "<A HREF=# OnFocus=x()>",
        "<table><tr><td onDblClick=y>1</td></tr></table>",
        "<p title='onkeyup onkeydown'>",
        "<img src=x onload=a onunload=b",
    ];
    for input in inputs {
        for segment in scan(&sanitize_markup(input)) {
            if let Segment::Tag(tag) = segment {
                for keyword in DENIED_ATTRIBUTES {
                    assert!(!tag.contains(keyword), "{keyword} left in {tag}");
                }
            }
        }
    }
}

#[test]
fn context_dispatch() {
    let sanitizer = Sanitizer::new();
    assert_eq!(
        sanitizer.sanitize(OutputContext::Html, "<object data=x>"),
        "<blocked data=x>"
    );
    assert_eq!(sanitizer.sanitize(OutputContext::Color, "#00ff00"), "#00ff00");
    assert_eq!(sanitizer.sanitize(OutputContext::Color, "red;x:y"), "invalid");
    assert_eq!(
        sanitizer.sanitize(OutputContext::Script, "document.write('<SCRIPT>')"),
        "document.write('<span>')"
    );
}

#[test]
fn policy_from_json_drives_sanitizer() {
    let policy = Policy::from_json(
        r#"{ "allowed_tags": ["b", "blockquote"], "denied_attributes": ["style"] }"#,
    )
    .unwrap();
    let sanitizer = Sanitizer::with_policy(policy);
    assert_eq!(
        sanitizer.sanitize_markup("<blockquote STYLE=x><i>"),
        "<blockquote blocked=x><blocked>"
    );
}

#[test]
fn concurrent_calls_agree() {
    let input = "<SCRIPT>a</SCRIPT><b onclick=c>d</b>";
    let expected = sanitize_markup(input);

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || sanitize_markup(input)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn version_is_set() {
    assert!(!tagfilter::version().is_empty());
}
