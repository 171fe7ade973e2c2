pub use self::report::{MarkupReport, Rewrites};
pub use self::scanner::{scan, Scanner, Segment};
pub use self::tag::TagOutcome;

pub(crate) use self::tag::sanitize_tag_with;

mod report;
mod scanner;
mod tag;


/// Runs every tag segment of `input` through the tag filter and joins the
/// results with the untouched plain text between them.
///
/// Plain text is copied verbatim; no escaping is applied outside tags.
pub(crate) fn sanitize_markup_with<A, D>(input: &str, allowed: &[A], denied: &[D]) -> MarkupReport
where
    A: AsRef<str>,
    D: AsRef<str>,
{
    let mut report = MarkupReport::new(input.len());

    for segment in Scanner::new(input) {
        match segment {
            Segment::PlainText(text) => report.output.push_str(text),
            Segment::Tag(tag) => {
                let outcome = sanitize_tag_with(tag, allowed, denied);
                report.tags = report.tags.saturating_add(1);
                if outcome.rewrites.contains(Rewrites::TAG_BLOCKED) {
                    report.blocked_tags = report.blocked_tags.saturating_add(1);
                }
                report.blocked_attributes =
                    report.blocked_attributes.saturating_add(outcome.blocked_attributes);
                report.rewrites |= outcome.rewrites;
                report.output.push_str(&outcome.output);
            }
        }
    }

    report
}
