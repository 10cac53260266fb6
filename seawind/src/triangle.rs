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

use log::{info, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::{component_from_radial, diff_component, radial_from_component, RadialVector};
use crate::leeway::{Exponential, LeewayModel, Polynomial, WindReference};
use crate::measurements::RADIANS_PER_DEGREE;
use crate::{Velocity, Wind};

/// Leeway in degrees beyond which the estimate of a model is clamped.
pub const DEFAULT_LEEWAY_LIMIT: f64 = 60.0;

/// How leeway is applied to the heading to get the course over ground.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LeewayConvention {
    /// The course is heading + leeway. Used with models whose leeway is
    /// negative with the wind from starboard, like the [`Polynomial`].
    #[default]
    Add,
    /// The course is heading - leeway. Used with models that only yield
    /// positive leeway, like the [`Exponential`].
    Subtract,
}

impl LeewayConvention {
    /// Applies the `leeway` to the `heading`.
    pub fn apply(&self, heading: f64, leeway: f64) -> f64 {
        match self {
            Self::Add => heading + leeway,
            Self::Subtract => heading - leeway,
        }
    }
}

/// Calculates the wind triangle of a sailing vessel.
///
/// The triangle is made of the real wind, the vessel's velocity over ground
/// and the apparent wind, which is the sum of the other two. The velocity
/// over ground is derived from the velocity over water by turning it by the
/// leeway from the [`LeewayModel`] and stretching it by the distance the
/// vessel slips sideways.
///
/// Converting apparent to real wind and back is not an exact round trip. The
/// leeway is estimated from the apparent wind in one direction and from the
/// real wind in the other.
///
/// # Examples
///
/// ```
/// use seawind::prelude::*;
///
/// // a boat heading 000° at 6 kt in a 15 kt real wind from 045°
/// let triangle = WindTriangle::default();
/// let aw = triangle.apparent_from_real(radial!(15.0, 45.0), radial!(6.0, 0.0));
///
/// assert!((aw.magnitude() - 19.22).abs() < 0.01);
/// assert!((aw.bearing() - 30.22).abs() < 0.01);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawWindTriangle<M>",
        bound(deserialize = "M: Deserialize<'de>")
    )
)]
pub struct WindTriangle<M = Polynomial> {
    model: M,
    convention: LeewayConvention,
    leeway_limit: f64,
}

/// Wind triangle as read, before its leeway limit is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawWindTriangle<M> {
    model: M,
    convention: LeewayConvention,
    leeway_limit: f64,
}

#[cfg(feature = "serde")]
impl<M> TryFrom<RawWindTriangle<M>> for WindTriangle<M> {
    type Error = Error;

    fn try_from(raw: RawWindTriangle<M>) -> Result<Self> {
        Ok(Self {
            model: raw.model,
            convention: raw.convention,
            leeway_limit: check_leeway_limit(raw.leeway_limit)?,
        })
    }
}

/// Returns the `limit` if it is within (0°, 90°).
fn check_leeway_limit(limit: f64) -> Result<f64> {
    if limit > 0.0 && limit < 90.0 {
        Ok(limit)
    } else {
        Err(Error::InvalidLeewayLimit(limit))
    }
}

impl<M: LeewayModel> WindTriangle<M> {
    /// Creates a new wind triangle with the default leeway limit.
    pub fn new(model: M, convention: LeewayConvention) -> Self {
        Self {
            model,
            convention,
            leeway_limit: DEFAULT_LEEWAY_LIMIT,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn convention(&self) -> LeewayConvention {
        self.convention
    }

    pub fn leeway_limit(&self) -> f64 {
        self.leeway_limit
    }

    /// Returns the leeway in degrees for the wind `angle` off the bow.
    ///
    /// The model's estimate is clamped to the leeway limit, since the velocity
    /// over ground grows without bound as the leeway approaches 90°.
    pub fn leeway(&self, reference: WindReference, angle: f64) -> f64 {
        let leeway = self.model.leeway(reference, angle);

        if leeway.abs() > self.leeway_limit {
            warn!(
                "leeway of {leeway}° at {reference:?} wind angle {angle}° exceeds limit of {}°",
                self.leeway_limit
            );
            leeway.clamp(-self.leeway_limit, self.leeway_limit)
        } else {
            leeway
        }
    }

    /// Returns the north-relative velocity over ground based on the
    /// bow-relative apparent wind `aw` and the north-relative velocity over
    /// water `vow`.
    pub fn vog_from_apparent(&self, aw: Wind, vow: Velocity) -> Velocity {
        let leeway = self.leeway(WindReference::Apparent, aw.bearing());
        self.vog(leeway, vow)
    }

    /// Returns the north-relative velocity over ground based on the
    /// north-relative real wind `rw` and the north-relative velocity over water
    /// `vow`.
    pub fn vog_from_real(&self, rw: Wind, vow: Velocity) -> Velocity {
        let leeway = self.leeway(WindReference::Real, rw.bearing() - vow.bearing());
        self.vog(leeway, vow)
    }

    /// Returns the bow-relative apparent wind from the north-relative real wind
    /// `rw` and the north-relative velocity over water `vow`.
    ///
    /// The north-relative apparent wind is the sum of the real wind and the
    /// velocity over ground. Subtracting the heading gives the apparent wind
    /// relative to the bow.
    pub fn apparent_from_real(&self, rw: Wind, vow: Velocity) -> Wind {
        let vog = self.vog_from_real(rw, vow);
        let aw = radial_from_component(component_from_radial(rw) + component_from_radial(vog))
            .rotate(-vow.bearing());

        trace!("apparent wind {aw:.2} from real wind {rw:.2} with vow {vow:.2} and vog {vog:.2}");
        aw
    }

    /// Returns the north-relative real wind from the bow-relative apparent wind
    /// `aw` and the north-relative velocity over water `vow`.
    ///
    /// The apparent wind is turned by the heading to be relative to north.
    /// The real wind is the difference of the apparent wind and the velocity
    /// over ground.
    pub fn real_from_apparent(&self, aw: Wind, vow: Velocity) -> Wind {
        let north_relative_aw = aw.rotate(vow.bearing());
        let vog = self.vog_from_apparent(aw, vow);
        let rw = radial_from_component(diff_component(
            component_from_radial(north_relative_aw),
            component_from_radial(vog),
        ));

        trace!("real wind {rw:.2} from apparent wind {aw:.2} with vow {vow:.2} and vog {vog:.2}");
        rw
    }

    fn vog(&self, leeway: f64, vow: Velocity) -> Velocity {
        // stretched by the sideways slip
        RadialVector::new(
            vow.magnitude() / (leeway * RADIANS_PER_DEGREE).cos(),
            self.convention.apply(vow.bearing(), leeway),
        )
    }
}

impl Default for WindTriangle<Polynomial> {
    fn default() -> Self {
        Self::new(Polynomial::default(), LeewayConvention::Add)
    }
}

impl WindTriangle<Exponential> {
    /// Creates a wind triangle with the [`Exponential`] leeway model.
    pub fn exponential() -> Self {
        Self::new(Exponential::default(), LeewayConvention::Subtract)
    }
}

/// Wind triangle factory, which is used to configure a wind triangle.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WindTriangleBuilder {
    convention: Option<LeewayConvention>,
    leeway_limit: Option<f64>,
}

impl WindTriangleBuilder {
    /// Creates a new builder.
    pub fn new() -> WindTriangleBuilder {
        Self::default()
    }

    /// Builds a wind triangle using the leeway `model`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLeewayLimit`] if the limit isn't within (0°, 90°).
    ///
    /// [`InvalidLeewayLimit`]: Error::InvalidLeewayLimit
    pub fn build<M: LeewayModel>(&self, model: M) -> Result<WindTriangle<M>> {
        let leeway_limit =
            check_leeway_limit(self.leeway_limit.unwrap_or(DEFAULT_LEEWAY_LIMIT))?;

        let convention = self.convention.unwrap_or_default();
        info!("building wind triangle (convention={convention:?}, leeway_limit={leeway_limit}°)");

        Ok(WindTriangle {
            model,
            convention,
            leeway_limit,
        })
    }

    pub fn convention(&mut self, convention: LeewayConvention) -> &mut Self {
        self.convention = Some(convention);
        self
    }

    pub fn leeway_limit(&mut self, limit: f64) -> &mut Self {
        self.leeway_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leeway::NoLeeway;

    #[test]
    fn vog_equals_vow_without_leeway() {
        let triangle = WindTriangle::new(NoLeeway, LeewayConvention::Add);
        let vow = RadialVector::new(6.0, 120.0);

        let wind = RadialVector::new(15.0, 45.0);

        assert_eq!(triangle.vog_from_real(wind, vow), vow);
        assert_eq!(triangle.vog_from_apparent(wind, vow), vow);
    }

    #[test]
    fn starboard_wind_sets_course_to_port() {
        let triangle = WindTriangle::default();

        // leeway of -10° with the apparent wind 30° off the starboard bow
        let vog = triangle.vog_from_apparent(
            RadialVector::new(15.0, 30.0),
            RadialVector::new(6.0, 0.0),
        );

        assert!((vog.bearing() - 350.0).abs() < 1e-9);
        assert!((vog.magnitude() - 6.0 / (10.0 * RADIANS_PER_DEGREE).cos()).abs() < 1e-9);
    }

    #[test]
    fn subtract_convention_mirrors_course() {
        let triangle = WindTriangle::new(Polynomial::default(), LeewayConvention::Subtract);
        let vog = triangle.vog_from_apparent(
            RadialVector::new(15.0, 30.0),
            RadialVector::new(6.0, 0.0),
        );

        assert!((vog.bearing() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn exponential_sets_course_to_port() {
        let triangle = WindTriangle::exponential();

        // leeway of 10° with the real wind 45° off the bow
        let vog = triangle.vog_from_real(
            RadialVector::new(15.0, 135.0),
            RadialVector::new(6.0, 90.0),
        );

        assert!((vog.bearing() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn real_wind_angle_behind_heading_is_normalized() {
        let triangle = WindTriangle::default();

        // real wind from 300° off the bow, i.e. 60° off the port bow
        let vog = triangle.vog_from_real(
            RadialVector::new(15.0, 0.0),
            RadialVector::new(6.0, 60.0),
        );

        assert!((vog.bearing() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn leeway_is_clamped_to_limit() {
        let triangle = WindTriangle::exponential();

        // the exponential model yields 180° with the wind dead ahead
        let leeway = triangle.leeway(WindReference::Apparent, 0.0);
        assert_eq!(leeway, DEFAULT_LEEWAY_LIMIT);

        let vog = triangle.vog_from_apparent(
            RadialVector::new(15.0, 0.0),
            RadialVector::new(6.0, 0.0),
        );
        assert!((vog.magnitude() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn builder_rejects_invalid_leeway_limit() {
        assert_eq!(
            WindTriangleBuilder::new().leeway_limit(90.0).build(NoLeeway),
            Err(Error::InvalidLeewayLimit(90.0))
        );
        assert_eq!(
            WindTriangleBuilder::new().leeway_limit(0.0).build(NoLeeway),
            Err(Error::InvalidLeewayLimit(0.0))
        );
    }

    #[test]
    fn builder_applies_configuration() {
        let triangle = WindTriangleBuilder::new()
            .convention(LeewayConvention::Subtract)
            .leeway_limit(5.0)
            .build(Polynomial::default())
            .expect("triangle should build");

        assert_eq!(triangle.convention(), LeewayConvention::Subtract);
        assert_eq!(triangle.leeway(WindReference::Apparent, 30.0), -5.0);
    }
}
