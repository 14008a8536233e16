// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length units and conversion to millimeters
//!
//! All node data is stored in millimeters. A graph remembers the unit it was
//! authored in so that coordinates added later can be normalized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit of a lattice graph
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters (storage unit)
    #[default]
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Feet
    Ft,
}

impl Units {
    /// Factor converting a value in this unit to millimeters
    pub fn scale(self) -> f64 {
        match self {
            Units::Mm => scales::MILLIMETRE,
            Units::Cm => scales::CENTIMETRE,
            Units::M => scales::METRE,
            Units::In => scales::INCH,
            Units::Ft => scales::FOOT,
        }
    }

    /// Attribute string used in `.ltcx` files
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Mm => "mm",
            Units::Cm => "cm",
            Units::M => "m",
            Units::In => "in",
            Units::Ft => "ft",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized unit string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnits(pub String);

impl fmt::Display for UnknownUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown units '{}'", self.0)
    }
}

impl std::error::Error for UnknownUnits {}

impl FromStr for Units {
    type Err = UnknownUnits;

    /// Parse the exact, case-sensitive attribute spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Units::Mm),
            "cm" => Ok(Units::Cm),
            "m" => Ok(Units::M),
            "in" => Ok(Units::In),
            "ft" => Ok(Units::Ft),
            other => Err(UnknownUnits(other.to_string())),
        }
    }
}

/// Convert a value expressed in `units` to millimeters
#[inline]
pub fn to_millimeters(value: f64, units: Units) -> f64 {
    value * units.scale()
}

/// Convert a millimeter value back into `units`
#[inline]
pub fn from_millimeters(value: f64, units: Units) -> f64 {
    value / units.scale()
}

/// Conversion factors to millimeters
pub mod scales {
    /// Millimeters (identity)
    pub const MILLIMETRE: f64 = 1.0;
    /// Centimeters
    pub const CENTIMETRE: f64 = 10.0;
    /// Meters, as scaled by existing `.ltcx` producers
    pub const METRE: f64 = 100.0;
    /// Inches
    pub const INCH: f64 = 25.4;
    /// Feet
    pub const FOOT: f64 = 304.8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_millimeters() {
        assert_relative_eq!(to_millimeters(3.0, Units::Mm), 3.0);
        assert_relative_eq!(to_millimeters(3.0, Units::Cm), 30.0);
        assert_relative_eq!(to_millimeters(3.0, Units::M), 300.0);
        assert_relative_eq!(to_millimeters(2.0, Units::In), 50.8);
        assert_relative_eq!(to_millimeters(1.0, Units::Ft), 304.8);
    }

    #[test]
    fn test_from_millimeters_inverts() {
        assert_relative_eq!(from_millimeters(25.4, Units::In), 1.0);
        assert_relative_eq!(from_millimeters(300.0, Units::M), 3.0);
        for units in [Units::Mm, Units::Cm, Units::M, Units::In, Units::Ft] {
            assert_relative_eq!(from_millimeters(to_millimeters(7.5, units), units), 7.5);
        }
    }

    #[test]
    fn test_negative_values_scale_too() {
        assert_relative_eq!(to_millimeters(-1.0, Units::Cm), -10.0);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("mm".parse::<Units>(), Ok(Units::Mm));
        assert_eq!("ft".parse::<Units>(), Ok(Units::Ft));
        assert!("MM".parse::<Units>().is_err());
        assert!(" in".parse::<Units>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for units in [Units::Mm, Units::Cm, Units::M, Units::In, Units::Ft] {
            assert_eq!(units.to_string().parse::<Units>(), Ok(units));
        }
    }
}
