use tracing::{debug, trace};

use super::report::Rewrites;
use crate::policy::{is_listed, BLOCKED};

/// Result of filtering a single tag segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    pub output: String,
    pub rewrites: Rewrites,
    /// Deny-list keyword occurrences replaced across all passes.
    pub blocked_attributes: usize,
}

impl TagOutcome {
    fn unchanged(tag: &str) -> Self {
        TagOutcome {
            output: tag.to_owned(),
            rewrites: Rewrites::empty(),
            blocked_attributes: 0,
        }
    }
}

/// Filters one tag segment against an allow-list of names and a deny-list
/// of attribute keywords.
///
/// The name is read from a folded copy of the tag (every `</` turned into
/// `<`, then lowercased). When the name is not allowed, the character span
/// it occupies in that copy is overwritten with `blocked` in the original
/// tag. Because the fold shortens closing tags, `</script>` comes out as
/// `<blockedt>`.
///
/// Each deny-list keyword then gets its own pass that lowercases the whole
/// tag before replacing every occurrence of the keyword.
pub(crate) fn sanitize_tag_with<A, D>(tag: &str, allowed: &[A], denied: &[D]) -> TagOutcome
where
    A: AsRef<str>,
    D: AsRef<str>,
{
    let folded = tag.replace("</", "<").to_lowercase();
    let Some((start, end)) = name_span(&folded) else {
        return TagOutcome::unchanged(tag);
    };

    let mut rewrites = Rewrites::empty();
    let name = folded.get(start..end).unwrap_or_default();

    let mut output = if is_listed(allowed, name) {
        tag.to_owned()
    } else {
        debug!(tag_name = name, "tag name not allowed");
        rewrites |= Rewrites::TAG_BLOCKED;

        // Offsets from the folded copy are character positions; in the
        // original they clamp to the end of the tag.
        let start_char = folded.get(..start).map_or(0, |s| s.chars().count());
        let end_char = start_char.saturating_add(name.chars().count());
        let (head, _) = tag.split_at(byte_offset(tag, start_char));
        let (_, tail) = tag.split_at(byte_offset(tag, end_char));

        let mut rewritten = String::with_capacity(tag.len().saturating_add(BLOCKED.len()));
        rewritten.push_str(head);
        rewritten.push_str(BLOCKED);
        rewritten.push_str(tail);
        rewritten
    };

    let mut blocked_attributes = 0usize;
    for keyword in denied {
        let keyword = keyword.as_ref();
        let lowered = output.to_lowercase();
        if lowered != output {
            rewrites |= Rewrites::CASE_FOLDED;
        }

        let hits = lowered.matches(keyword).count();
        if hits > 0 {
            trace!(keyword, hits, "masking denied attribute keyword");
            rewrites |= Rewrites::ATTRIBUTE_BLOCKED;
            blocked_attributes = blocked_attributes.saturating_add(hits);
            output = lowered.replace(keyword, BLOCKED);
        } else {
            output = lowered;
        }
    }

    TagOutcome {
        output,
        rewrites,
        blocked_attributes,
    }
}

/// Byte range of the tag name in a folded tag: everything after a leading
/// `<` up to the first whitespace or `>`. `None` when the tag does not start
/// with `<` or the name is never terminated.
fn name_span(folded: &str) -> Option<(usize, usize)> {
    let rest = folded.strip_prefix('<')?;
    let len = rest.find(is_name_terminator)?;
    Some((1, len.saturating_add(1)))
}

fn is_name_terminator(c: char) -> bool {
    // The information separators U+001C..U+001F count as whitespace too.
    c == '>' || c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}
