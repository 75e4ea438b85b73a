use std::fmt;
use std::str::FromStr;

use super::error::LifeError;

/// How neighborhoods are built at the board boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// Toroidal board: the far edge touches the near edge.
    #[default]
    Wrap,
    /// Everything past the edge is permanently dead.
    Zeros,
}

impl EdgeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeMode::Wrap => "wrap",
            EdgeMode::Zeros => "zeros",
        }
    }
}

impl FromStr for EdgeMode {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(EdgeMode::Wrap),
            "zeros" => Ok(EdgeMode::Zeros),
            other => Err(LifeError::EdgeMode(other.to_string())),
        }
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parses_known_modes() {
        assert_eq!("wrap".parse::<EdgeMode>(), Ok(EdgeMode::Wrap));
        assert_eq!("zeros".parse::<EdgeMode>(), Ok(EdgeMode::Zeros));
        assert_eq!(EdgeMode::Zeros.to_string(), "zeros");
    }

    #[test]
    fn unknown_mode_is_a_configuration_error() {
        let err = "nil".parse::<EdgeMode>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!("Wrap".parse::<EdgeMode>().is_err());
    }
}
