//! Text anchoring for `\Text` labels.
//!
//! `axodraw2` aligns a label relative to its reference point with a compass
//! code in brackets: `\Text(30,92)[lb]{...}` puts the label's left-bottom
//! corner on `(30,92)`.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Where a text label sits relative to its reference point.
///
/// Codes name the corner or edge of the label that touches the point. A
/// bracketed string is kept verbatim for alignment forms this enum does not
/// model.
///
/// Decay scripts spell anchors as strings and go through [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Anchor {
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
    /// An explicit bracketed alignment, written out unchanged.
    Bracketed(String),
}

impl Anchor {
    /// Returns the compass code without brackets, or the verbatim form.
    pub fn code(&self) -> &str {
        match self {
            Self::Left => "l",
            Self::Right => "r",
            Self::Top => "t",
            Self::Bottom => "b",
            Self::LeftTop => "lt",
            Self::LeftBottom => "lb",
            Self::RightTop => "rt",
            Self::RightBottom => "rb",
            Self::Bracketed(raw) => raw,
        }
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('[') && s.contains(']') {
            return Ok(Self::Bracketed(s.to_string()));
        }
        match s {
            "l" => Ok(Self::Left),
            "r" => Ok(Self::Right),
            "t" => Ok(Self::Top),
            "b" => Ok(Self::Bottom),
            "lt" | "tl" => Ok(Self::LeftTop),
            "lb" | "bl" => Ok(Self::LeftBottom),
            "rt" | "tr" => Ok(Self::RightTop),
            "rb" | "br" => Ok(Self::RightBottom),
            _ => Err(format!(
                "invalid text anchor `{s}`, expected a compass code or a bracketed form"
            )),
        }
    }
}

impl TryFrom<String> for Anchor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bracketed(raw) => f.write_str(raw),
            other => write!(f, "[{}]", other.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_codes_are_bracketed() {
        assert_eq!(Anchor::LeftBottom.to_string(), "[lb]");
        assert_eq!(Anchor::Right.to_string(), "[r]");
    }

    #[test]
    fn test_parse_compass_codes() {
        assert_eq!("lt".parse::<Anchor>(), Ok(Anchor::LeftTop));
        assert_eq!("br".parse::<Anchor>(), Ok(Anchor::RightBottom));
        assert_eq!("b".parse::<Anchor>(), Ok(Anchor::Bottom));
    }

    #[test]
    fn test_bracketed_form_passes_through() {
        let anchor: Anchor = "[lb]".parse().unwrap();
        assert_eq!(anchor, Anchor::Bracketed("[lb]".to_string()));
        assert_eq!(anchor.to_string(), "[lb]");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!("north".parse::<Anchor>().is_err());
        assert!(Anchor::try_from("north".to_string()).is_err());
    }

    #[test]
    fn test_try_from_owned_string() {
        assert_eq!(Anchor::try_from("rt".to_string()), Ok(Anchor::RightTop));
        assert_eq!(
            Anchor::try_from("[c]".to_string()),
            Ok(Anchor::Bracketed("[c]".to_string()))
        );
    }
}
