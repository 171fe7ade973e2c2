use crate::color::validate_color;
use crate::context::OutputContext;
use crate::markup::{sanitize_markup_with, sanitize_tag_with, MarkupReport, TagOutcome};
use crate::policy::Policy;
use crate::script::neutralize_script;

/// Markup filter bound to a [`Policy`].
///
/// The free functions in the crate root behave like `Sanitizer::new()`
/// without building a policy first.
///
/// ```
/// use tagfilter::{Policy, Sanitizer};
///
/// let policy = Policy::new(["b"], ["onclick"]).unwrap();
/// let sanitizer = Sanitizer::with_policy(policy);
/// assert_eq!(sanitizer.sanitize_markup("<i>x</i>"), "<blocked>x<blockedi>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    policy: Policy,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        Sanitizer { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Filters a markup fragment. Text between tags is left as is.
    pub fn sanitize_markup(&self, input: &str) -> String {
        self.sanitize_markup_report(input).output
    }

    /// Like [`sanitize_markup`](Self::sanitize_markup), also counting the
    /// rewrites that were made.
    pub fn sanitize_markup_report(&self, input: &str) -> MarkupReport {
        sanitize_markup_with(
            input,
            self.policy.allowed_tags(),
            self.policy.denied_attributes(),
        )
    }

    /// Filters a single tag segment.
    pub fn sanitize_tag(&self, tag: &str) -> String {
        self.inspect_tag(tag).output
    }

    pub fn inspect_tag(&self, tag: &str) -> TagOutcome {
        sanitize_tag_with(
            tag,
            self.policy.allowed_tags(),
            self.policy.denied_attributes(),
        )
    }

    /// Applies the filter matching the place the value will be written.
    pub fn sanitize(&self, context: OutputContext, input: &str) -> String {
        match context {
            OutputContext::Html => self.sanitize_markup(input),
            OutputContext::Color => validate_color(input),
            OutputContext::Script => neutralize_script(input),
        }
    }
}
