use core::fmt;

/// One piece of scanned markup.
///
/// Concatenating the segments of an input in order yields the input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any `<...>` pair.
    PlainText(&'a str),
    /// A `<` through the next `>`, or through end of input when no `>` follows.
    Tag(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::PlainText(text) | Segment::Tag(text) => text,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Segment::Tag(_))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::PlainText(text) => write!(f, "TEXT {:?}", text),
            Segment::Tag(text) => write!(f, "TAG  {:?}", text),
        }
    }
}

/// Splits markup into alternating plain-text and tag segments.
///
/// The scanner has no notion of quoting, comments or nesting: a tag starts
/// at the first `<` and ends at the first `>` after it.
///
/// ```
/// use tagfilter::{Scanner, Segment};
///
/// let segments: Vec<_> = Scanner::new("hi <b>there").collect();
/// assert_eq!(
///     segments,
///     [Segment::PlainText("hi "), Segment::Tag("<b>"), Segment::PlainText("there")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner { rest: input }
    }

    /// Input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.rest
    }

    fn take(&mut self, len: usize) -> &'a str {
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        head
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find('<') {
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Segment::PlainText(text))
            }
            Some(0) => {
                // `>` is a single byte, so the end index stays on a char boundary.
                let len = self
                    .rest
                    .find('>')
                    .map_or(self.rest.len(), |end| end.saturating_add(1));
                Some(Segment::Tag(self.take(len)))
            }
            Some(start) => Some(Segment::PlainText(self.take(start))),
        }
    }
}

impl core::iter::FusedIterator for Scanner<'_> {}

/// Collects the segments of `input`.
pub fn scan(input: &str) -> Vec<Segment<'_>> {
    Scanner::new(input).collect()
}
