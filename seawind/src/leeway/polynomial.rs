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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::{Matrix4, Vector4};

use super::{LeewayModel, WindReference};
use crate::error::{Error, Result};
use crate::measurements::{normalize_bearing, FULL_CIRCLE};

/// Leeway in degrees at the calibration points.
pub const LEEWAY_MAX: f64 = 10.0;

/// Normalized leeway at apparent wind angles.
pub const APPARENT_CALIBRATION: [(f64, f64); 5] = [
    (0.0, 0.0),
    (30.0, -1.0),
    (180.0, 0.0),
    (330.0, 1.0),
    (360.0, 0.0),
];

/// Normalized leeway at real wind minus heading angles.
pub const REAL_CALIBRATION: [(f64, f64); 5] = [
    (0.0, 0.0),
    (60.0, -1.0),
    (180.0, 0.0),
    (300.0, 1.0),
    (360.0, 0.0),
];

/// Exact fit of the [`APPARENT_CALIBRATION`].
const APPARENT_FIT: Cubic = Cubic::new([
    0.0,
    -48.0 / 1_100.0,
    4.0 / 11_000.0,
    -1.0 / 1_485_000.0,
]);

/// Exact fit of the [`REAL_CALIBRATION`].
const REAL_FIT: Cubic = Cubic::new([0.0, -0.03, 2.5e-4, -1.0 / 2_160_000.0]);

/// A cubic polynomial `c3·x³ + c2·x² + c1·x + c0`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cubic {
    coefficients: [f64; 4],
}

impl Cubic {
    /// Creates the polynomial from its coefficients `[c0, c1, c2, c3]`.
    pub const fn new(coefficients: [f64; 4]) -> Self {
        Self { coefficients }
    }

    /// Fits a cubic polynomial to the `points` by least squares.
    ///
    /// Each point is a wind angle in degrees with its normalized leeway.
    ///
    /// # Errors
    ///
    /// Returns [`InsufficientCalibration`] if less than four distinct angles
    /// are given and [`SingularCalibration`] if the points don't determine a
    /// curve.
    ///
    /// [`InsufficientCalibration`]: Error::InsufficientCalibration
    /// [`SingularCalibration`]: Error::SingularCalibration
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        let mut angles: Vec<f64> = points.iter().map(|(angle, _)| *angle).collect();
        angles.sort_by(f64::total_cmp);
        angles.dedup();

        if angles.len() < 4 {
            return Err(Error::InsufficientCalibration {
                required: 4,
                actual: angles.len(),
            });
        }

        // The angles are scaled down to [0, 1] to keep the normal equations
        // well conditioned.
        let mut ata = Matrix4::<f64>::zeros();
        let mut atb = Vector4::<f64>::zeros();

        for (angle, value) in points {
            let u = angle / FULL_CIRCLE;
            let row = Vector4::new(1.0, u, u * u, u * u * u);
            ata += row * row.transpose();
            atb += row * *value;
        }

        let scaled = ata.lu().solve(&atb).ok_or(Error::SingularCalibration)?;

        let mut coefficients = [0.0; 4];
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c = scaled[i] / FULL_CIRCLE.powi(i as i32);
        }

        Ok(Self { coefficients })
    }

    /// Returns the coefficients `[c0, c1, c2, c3]`.
    pub fn coefficients(&self) -> [f64; 4] {
        self.coefficients
    }

    /// Evaluates the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let [c0, c1, c2, c3] = self.coefficients;
        ((c3 * x + c2) * x + c1) * x + c0
    }
}

/// Leeway modeled as a cubic curve of the wind angle.
///
/// The curve is scaled by `max`. With the default calibration the leeway is
/// `max` at an apparent wind angle of 30° or a real wind angle of 60°, and is
/// zero with the wind dead ahead or astern. Between those points the curve
/// overshoots and peaks at an apparent wind angle of about 76°, where the
/// leeway is about 1.5 times `max`. The leeway is negative with the wind from
/// starboard and positive with the wind from port.
///
/// Both curves are zero at 0° and 360° with equal slope, thus the leeway is
/// continuous when the wind crosses the bow.
///
/// ```
/// use seawind::prelude::*;
///
/// let model = Polynomial::default();
/// assert!((model.leeway(WindReference::Apparent, 30.0) + 10.0).abs() < 1e-9);
/// assert!((model.leeway(WindReference::Real, 300.0) - 10.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    max: f64,
    apparent: Cubic,
    real: Cubic,
}

impl Polynomial {
    pub fn new(max: f64, apparent: Cubic, real: Cubic) -> Self {
        Self { max, apparent, real }
    }

    /// Creates the default calibrated model with a different maximum leeway.
    pub fn with_max(max: f64) -> Self {
        Self::new(max, APPARENT_FIT, REAL_FIT)
    }

    /// Fits the model to the apparent and real wind calibration points.
    ///
    /// # Errors
    ///
    /// Returns an error if either curve can't be fitted (see [`Cubic::fit`]).
    pub fn calibrate(max: f64, apparent: &[(f64, f64)], real: &[(f64, f64)]) -> Result<Self> {
        Ok(Self::new(max, Cubic::fit(apparent)?, Cubic::fit(real)?))
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn curve(&self, reference: WindReference) -> &Cubic {
        match reference {
            WindReference::Apparent => &self.apparent,
            WindReference::Real => &self.real,
        }
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::with_max(LEEWAY_MAX)
    }
}

impl LeewayModel for Polynomial {
    fn leeway(&self, reference: WindReference, angle: f64) -> f64 {
        self.max * self.curve(reference).eval(normalize_bearing(angle))
    }
}
