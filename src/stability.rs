//! Stability verdict from the coefficient of variation

use serde::Serialize;
use std::fmt;

/// Qualitative stability verdict for the completed subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stability {
    /// CV < 0.10
    VeryStable,
    /// 0.10 <= CV <= 0.30
    AcceptableVariance,
    /// CV > 0.30
    Unstable,
    /// CV undefined (empty subset or zero mean)
    NotApplicable,
}

impl Stability {
    pub fn from_cv(cv: Option<f32>) -> Self {
        match cv {
            None => Stability::NotApplicable,
            Some(cv) if cv < 0.10 => Stability::VeryStable,
            Some(cv) if cv <= 0.30 => Stability::AcceptableVariance,
            Some(_) => Stability::Unstable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stability::VeryStable => "Very Stable",
            Stability::AcceptableVariance => "Acceptable Variance",
            Stability::Unstable => "Unstable / Unpredictable",
            Stability::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
