/// Returned by [`validate_color`] for anything that is not a color token.
pub const INVALID_COLOR: &str = "invalid";

/// Returns `true` for an optional leading `#` followed by ASCII letters and
/// digits only. The empty string qualifies.
pub fn is_color_token(input: &str) -> bool {
    let body = input.strip_prefix('#').unwrap_or(input);
    body.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Passes a plausible CSS color through unchanged, or returns `"invalid"`.
///
/// The sentinel lets a style sheet fall back to an earlier declaration, as in
/// `color:default; color:{{value}}`.
///
/// ```
/// use tagfilter::validate_color;
///
/// assert_eq!(validate_color("#FEFFFF"), "#FEFFFF");
/// assert_eq!(validate_color("red"), "red");
/// assert_eq!(validate_color("javascript:alert(1)"), "invalid");
/// ```
pub fn validate_color(input: &str) -> String {
    if is_color_token(input) {
        input.to_owned()
    } else {
        INVALID_COLOR.to_owned()
    }
}
