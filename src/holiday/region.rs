use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::holiday::BrazilianState;

/// The region whose public holidays are not worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    /// Only the national holidays of Brazil.
    National,
    /// The national holidays and the ones of a federative unit.
    State(BrazilianState),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region code `{0}`, expected `BR` or a brazilian state like `RJ`")]
pub struct UnknownRegion(pub String);

impl Region {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::National => "BR",
            Self::State(state) => state.code(),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::State(BrazilianState::RJ)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let code = string.trim().to_ascii_uppercase();

        match code.as_str() {
            "BR" => Ok(Self::National),
            _ => BrazilianState::from_code(&code)
                .map(Self::State)
                .ok_or_else(|| UnknownRegion(string.to_string())),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = UnknownRegion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
