//! Theme — the two visual themes a page can be rendered in.

use std::str::FromStr;

use crate::error::ParseThemeError;

/// A visual theme. No other values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Serialized form, as stored in the preference record and written to
    /// the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Exact, case-sensitive match on `"light"` / `"dark"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn should_parse_exact_names() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn should_reject_other_casing() {
        let err = "Dark".parse::<Theme>().unwrap_err();
        assert_eq!(err.value, "Dark");
    }

    #[test]
    fn should_reject_garbage() {
        assert!("".parse::<Theme>().is_err());
        assert!("solarized".parse::<Theme>().is_err());
        assert!(" dark".parse::<Theme>().is_err());
    }
}
