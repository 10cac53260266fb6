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

use super::{LeewayModel, WindReference};
use crate::measurements::normalize_bearing;

/// Leeway modeled as an inverse exponential of the wind angle.
///
/// The leeway is `scale · exp(-decay · angle)` with a different decay for
/// the apparent and the real wind. By default the leeway is 10° at an apparent
/// wind angle of 30° and at a real wind angle of 45°.
///
/// The model has no sign and no symmetry between port and starboard. Its
/// boundary is at the bow, where the leeway jumps from almost zero at 359° to
/// the full scale at 0°.
///
/// ```
/// use seawind::prelude::*;
///
/// let model = Exponential::default();
/// assert!((model.leeway(WindReference::Apparent, 30.0) - 10.0).abs() < 1e-9);
/// assert!((model.leeway(WindReference::Real, 45.0) - 10.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponential {
    scale: f64,
    apparent_decay: f64,
    real_decay: f64,
}

impl Exponential {
    pub fn new(scale: f64, apparent_decay: f64, real_decay: f64) -> Self {
        Self {
            scale,
            apparent_decay,
            real_decay,
        }
    }

    /// Creates a model where the leeway is `leeway` degrees at the
    /// `apparent_angle` and at the `real_angle`.
    pub fn calibrated(scale: f64, leeway: f64, apparent_angle: f64, real_angle: f64) -> Self {
        let ratio = (scale / leeway).ln();
        Self::new(scale, ratio / apparent_angle, ratio / real_angle)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn decay(&self, reference: WindReference) -> f64 {
        match reference {
            WindReference::Apparent => self.apparent_decay,
            WindReference::Real => self.real_decay,
        }
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::calibrated(180.0, 10.0, 30.0, 45.0)
    }
}

impl LeewayModel for Exponential {
    fn leeway(&self, reference: WindReference, angle: f64) -> f64 {
        self.scale * (-self.decay(reference) * normalize_bearing(angle)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decays() {
        let model = Exponential::default();
        assert!((model.decay(WindReference::Apparent) - 0.096).abs() < 1e-3);
        assert!((model.decay(WindReference::Real) - 0.064).abs() < 1e-3);
    }

    #[test]
    fn decreases_towards_the_stern() {
        let model = Exponential::default();
        let close_hauled = model.leeway(WindReference::Apparent, 40.0);
        let running = model.leeway(WindReference::Apparent, 170.0);
        assert!(close_hauled > running);
        assert!(running > 0.0);
    }
}
