use core::fmt;

bitflags::bitflags! {
    /// Kinds of rewrite applied while filtering markup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rewrites: u8 {
        /// A tag name outside the allow-list was replaced.
        const TAG_BLOCKED = 1 << 0;
        /// At least one deny-list keyword was replaced.
        const ATTRIBUTE_BLOCKED = 1 << 1;
        /// Upper-case characters inside a tag were folded to lower case.
        const CASE_FOLDED = 1 << 2;
    }
}

impl fmt::Display for Rewrites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Filtered markup plus what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupReport {
    pub output: String,
    /// Number of tag segments seen.
    pub tags: usize,
    /// Tag segments whose name was replaced.
    pub blocked_tags: usize,
    /// Deny-list keyword occurrences replaced.
    pub blocked_attributes: usize,
    pub rewrites: Rewrites,
}

impl MarkupReport {
    pub(crate) fn new(capacity: usize) -> Self {
        MarkupReport {
            output: String::with_capacity(capacity),
            tags: 0,
            blocked_tags: 0,
            blocked_attributes: 0,
            rewrites: Rewrites::empty(),
        }
    }

    /// Returns `true` if any tag was altered.
    pub fn is_modified(&self) -> bool {
        !self.rewrites.is_empty()
    }
}
