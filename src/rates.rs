//! Static corridor rate table.
//! Each supported destination country carries one GBP exchange rate; the fee
//! percentage applies uniformly across corridors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported destination countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Somalia,
    Ethiopia,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::Somalia, Country::Ethiopia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Somalia => "Somalia",
            Country::Ethiopia => "Ethiopia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCountry(pub String);

impl fmt::Display for UnsupportedCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported country: {}", self.0)
    }
}

impl std::error::Error for UnsupportedCountry {}

impl FromStr for Country {
    type Err = UnsupportedCountry;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Somalia" => Ok(Country::Somalia),
            "Ethiopia" => Ok(Country::Ethiopia),
            other => Err(UnsupportedCountry(other.to_string())),
        }
    }
}

/// GBP exchange rates per corridor, plus the flat fee percentage taken off
/// the sent amount before conversion.
#[derive(Debug, Clone)]
pub struct RateTable {
    somalia_rate: f64,
    ethiopia_rate: f64,
    fee_percentage: f64,
}

impl RateTable {
    /// The fixed demo corridors: Somalia at 34, Ethiopia at 48.5, 2% fee.
    pub fn builtin() -> Self {
        Self {
            somalia_rate: 34.0,
            ethiopia_rate: 48.5,
            fee_percentage: 0.02,
        }
    }

    pub fn rate(&self, country: Country) -> f64 {
        match country {
            Country::Somalia => self.somalia_rate,
            Country::Ethiopia => self.ethiopia_rate,
        }
    }

    /// Fee fraction of the sent amount, e.g. 0.02 for 2%.
    pub fn fee_percentage(&self) -> f64 {
        self.fee_percentage
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
