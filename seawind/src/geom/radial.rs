// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::measurements::{normalize_bearing, FULL_CIRCLE};

/// A vector in radial form.
///
/// The vector is given as a magnitude and a compass-style bearing in degrees,
/// where 0° is either magnetic north or the bow depending on the context. A
/// wind's bearing is the direction it blows from and a velocity's bearing is
/// the direction the vessel moves to.
///
/// The bearing is always normalized into [0, 360) and the magnitude is never
/// negative. For a vector with zero magnitude the bearing carries no meaning.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRadialVector"))]
pub struct RadialVector {
    magnitude: f64,
    bearing: f64,
}

/// Radial vector as read, before it is normalized.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRadialVector {
    magnitude: f64,
    bearing: f64,
}

#[cfg(feature = "serde")]
impl From<RawRadialVector> for RadialVector {
    fn from(raw: RawRadialVector) -> Self {
        Self::new(raw.magnitude, raw.bearing)
    }
}

impl RadialVector {
    /// Creates a new radial vector.
    ///
    /// A negative magnitude is turned into a positive one pointing into the
    /// opposite direction.
    pub fn new(magnitude: f64, bearing: f64) -> Self {
        if magnitude < 0.0 {
            Self {
                magnitude: -magnitude,
                bearing: normalize_bearing(bearing + FULL_CIRCLE / 2.0),
            }
        } else {
            Self {
                magnitude,
                bearing: normalize_bearing(bearing),
            }
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Returns the vector with its bearing turned by `delta` degrees.
    ///
    /// Turning by the heading converts a bow-relative vector into a
    /// north-relative one, turning by the negative heading does the opposite.
    pub fn rotate(self, delta: f64) -> Self {
        Self::new(self.magnitude, self.bearing + delta)
    }
}

impl FromStr for RadialVector {
    type Err = Error;

    /// Parses a wind string `s` like `04515KT`.
    ///
    /// The first three figures are the bearing in degrees followed by two or
    /// three figures of the speed in knots.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value = s.strip_suffix("KT").ok_or(Error::UnexpectedString)?;

        if !(5..=6).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedString);
        }

        let bearing = value[0..3]
            .parse::<u16>()
            .map_err(|_| Error::UnexpectedString)?;
        let magnitude = value[3..]
            .parse::<u16>()
            .map_err(|_| Error::UnexpectedString)?;

        if bearing > 360 {
            return Err(Error::UnexpectedString);
        }

        Ok(Self::new(magnitude.into(), bearing.into()))
    }
}

impl Display for RadialVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tmp = if let Some(precision) = f.precision() {
            format!(
                "{:.precision$}@{:.precision$}°",
                self.magnitude, self.bearing
            )
        } else {
            format!("{}@{}°", self.magnitude, self.bearing)
        };

        f.pad_integral(true, "", &tmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_magnitude_is_flipped() {
        let v = RadialVector::new(-5.0, 90.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.bearing(), 270.0);
    }

    #[test]
    fn rotate_wraps_around_north() {
        let v = RadialVector::new(10.0, 350.0).rotate(20.0);
        assert!((v.bearing() - 10.0).abs() < 1e-9);

        let v = RadialVector::new(10.0, 10.0).rotate(-20.0);
        assert!((v.bearing() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn radial_vector_from_str() {
        assert_eq!(
            "04515KT".parse::<RadialVector>(),
            Ok(RadialVector::new(15.0, 45.0))
        );
        assert_eq!(
            "270105KT".parse::<RadialVector>(),
            Ok(RadialVector::new(105.0, 270.0))
        );
        assert_eq!(
            "36000KT".parse::<RadialVector>(),
            Ok(RadialVector::new(0.0, 0.0))
        );
        assert_eq!(
            "0451KT".parse::<RadialVector>(),
            Err(Error::UnexpectedString)
        );
        assert_eq!(
            "04515".parse::<RadialVector>(),
            Err(Error::UnexpectedString)
        );
        assert_eq!(
            "37015KT".parse::<RadialVector>(),
            Err(Error::UnexpectedString)
        );
        assert_eq!(
            "-4515KT".parse::<RadialVector>(),
            Err(Error::UnexpectedString)
        );
    }

    #[test]
    fn display_with_precision() {
        let v = RadialVector::new(15.27, 45.0);
        assert_eq!(format!("{v:.1}"), "15.3@45.0°");
        assert_eq!(format!("{v}"), "15.27@45°");
    }
}
