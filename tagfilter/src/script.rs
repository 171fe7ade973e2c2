/// Lowercases `input` and rewrites every `script` to `span`.
///
/// This is a single substring pass with no knowledge of script syntax, so it
/// only stops the most literal `<script>` payloads.
///
/// ```
/// use tagfilter::neutralize_script;
///
/// assert_eq!(neutralize_script("<SCRIPT>"), "<span>");
/// ```
pub fn neutralize_script(input: &str) -> String {
    input.to_lowercase().replace("script", "span")
}
