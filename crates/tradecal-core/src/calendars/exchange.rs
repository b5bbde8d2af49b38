//! Exchange identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tables::{B3_TABLE, NSE_TABLE};
use crate::error::TradeCalError;

/// Exchange segments with a built-in holiday table.
///
/// Codes are matched case-insensitively. Codes outside this set are still
/// accepted by the registry; they resolve to the default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// NSE cash market.
    NseCm,
    /// NSE futures and options.
    NseFo,
    /// NSE currency derivatives.
    NseCd,
    /// BSE cash market.
    BseCm,
    /// BSE currency derivatives.
    BseCd,
    /// B3 futures and options.
    B3Fo,
    /// B3 currency derivatives.
    B3Cd,
    /// B3 (all segments).
    B3,
}

impl Exchange {
    /// All built-in exchanges.
    pub const ALL: [Exchange; 8] = [
        Exchange::NseCm,
        Exchange::NseFo,
        Exchange::NseCd,
        Exchange::BseCm,
        Exchange::BseCd,
        Exchange::B3Fo,
        Exchange::B3Cd,
        Exchange::B3,
    ];

    /// The canonical upper-case code, e.g. `NSEFO`.
    pub fn code(&self) -> &'static str {
        match self {
            Exchange::NseCm => "NSECM",
            Exchange::NseFo => "NSEFO",
            Exchange::NseCd => "NSECD",
            Exchange::BseCm => "BSECM",
            Exchange::BseCd => "BSECD",
            Exchange::B3Fo => "B3FO",
            Exchange::B3Cd => "B3CD",
            Exchange::B3 => "B3",
        }
    }

    /// Name of the built-in holiday table this exchange uses.
    pub fn builtin_table(&self) -> &'static str {
        match self {
            Exchange::NseCm
            | Exchange::NseFo
            | Exchange::NseCd
            | Exchange::BseCm
            | Exchange::BseCd => NSE_TABLE,
            Exchange::B3Fo | Exchange::B3Cd | Exchange::B3 => B3_TABLE,
        }
    }

    /// Looks up a built-in exchange by code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|exchange| exchange.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = TradeCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| TradeCalError::invalid_input(format!("Unknown exchange: {s}")))
    }
}
