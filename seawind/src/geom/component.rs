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

use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vector in component form.
///
/// The components decompose a [`RadialVector`] along a fixed orthogonal basis
/// with `x = magnitude · sin(bearing)` and `y = magnitude · cos(bearing)`.
/// Thus, `y` points to 0° and `x` to 90°.
///
/// [`RadialVector`]: crate::RadialVector
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentVector {
    pub x: f64,
    pub y: f64,
}

impl ComponentVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for ComponentVector {
    type Output = ComponentVector;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for ComponentVector {
    type Output = ComponentVector;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
