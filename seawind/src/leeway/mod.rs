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

//! Leeway models.
//!
//! Leeway is the angle between the vessel's heading and its actual course
//! caused by the wind pushing the hull sideways. It is estimated from the
//! angle of the wind off the bow. A [`LeewayModel`] provides this estimate
//! either from the apparent wind angle or from the real wind angle, which is
//! the real wind's bearing minus the heading.
//!
//! The [`Polynomial`] model is the canonical one. It fits a cubic curve to
//! calibration points such that the leeway is largest with the wind forward
//! of the beam and vanishes with the wind dead ahead or astern. Its sign tells
//! on which side the wind comes from. The [`Exponential`] model is an
//! alternative that only yields the magnitude of the leeway, and
//! [`NoLeeway`] ignores leeway altogether.

mod exponential;
mod polynomial;

pub use exponential::Exponential;
pub use polynomial::{Cubic, Polynomial, APPARENT_CALIBRATION, LEEWAY_MAX, REAL_CALIBRATION};

/// The wind from which leeway is estimated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WindReference {
    /// The apparent wind angle relative to the bow.
    Apparent,
    /// The real wind's bearing minus the heading.
    Real,
}

/// A model that estimates leeway from a wind angle.
pub trait LeewayModel {
    /// Returns the leeway in degrees for the wind `angle` in degrees off the
    /// bow.
    ///
    /// The angle may be outside of [0, 360) and is normalized by the model.
    fn leeway(&self, reference: WindReference, angle: f64) -> f64;
}

impl<M: LeewayModel + ?Sized> LeewayModel for &M {
    fn leeway(&self, reference: WindReference, angle: f64) -> f64 {
        (**self).leeway(reference, angle)
    }
}

impl<M: LeewayModel + ?Sized> LeewayModel for Box<M> {
    fn leeway(&self, reference: WindReference, angle: f64) -> f64 {
        (**self).leeway(reference, angle)
    }
}

/// A model without any leeway.
///
/// The velocity over ground equals the velocity over water.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NoLeeway;

impl LeewayModel for NoLeeway {
    fn leeway(&self, _reference: WindReference, _angle: f64) -> f64 {
        0.0
    }
}
