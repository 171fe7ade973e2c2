use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Where a filtered value is going to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputContext {
    /// Markup in a document body.
    Html,
    /// A CSS color value inside a `style` declaration.
    Color,
    /// Text inside a script block.
    Script,
}

impl fmt::Display for OutputContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputContext::Html => "html",
            OutputContext::Color => "color",
            OutputContext::Script => "js",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputContext::Html),
            "color" => Ok(OutputContext::Color),
            "js" | "script" => Ok(OutputContext::Script),
            _ => Err(Error::UnknownContext(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_template_names() {
        assert_eq!("html".parse::<OutputContext>().unwrap(), OutputContext::Html);
        assert_eq!("COLOR".parse::<OutputContext>().unwrap(), OutputContext::Color);
        assert_eq!("js".parse::<OutputContext>().unwrap(), OutputContext::Script);
        assert_eq!("script".parse::<OutputContext>().unwrap(), OutputContext::Script);
    }

    #[test]
    fn display_round_trips() {
        for ctx in [OutputContext::Html, OutputContext::Color, OutputContext::Script] {
            assert_eq!(ctx.to_string().parse::<OutputContext>().unwrap(), ctx);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "url".parse::<OutputContext>().unwrap_err();
        assert_eq!(err.to_string(), "unknown output context `url`");
    }
}
