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

//! Vectors in radial and component form.
//!
//! Winds and velocities are usually given in [radial form] as magnitude and
//! bearing. Adding two radial vectors is done by converting them into
//! [component form], adding the components and converting the sum back:
//!
//! ```
//! use seawind::prelude::*;
//!
//! let sum = add_radial(radial!(10.0, 0.0), radial!(10.0, 90.0));
//!
//! assert!((sum.magnitude() - 200.0_f64.sqrt()).abs() < 1e-9);
//! assert!((sum.bearing() - 45.0).abs() < 1e-9);
//! ```
//!
//! [radial form]: RadialVector
//! [component form]: ComponentVector

use log::debug;

use crate::measurements::{DEGREES_PER_RADIAN, MIN_NORTH, RADIANS_PER_DEGREE};

mod component;
mod radial;

pub use component::ComponentVector;
pub use radial::RadialVector;

/// Degrees added to the arctangent of `x / y`, indexed by `[x < 0][y < 0]`.
///
/// The arctangent only covers -90° to 90°. With `y < 0` the vector points
/// south, thus we turn by 180°. With `x < 0` and `y >= 0` the arctangent is
/// negative and we turn by a full circle into the north-west quadrant.
const QUADRANT_OFFSET: [[f64; 2]; 2] = [
    // x >= 0
    [0.0, 180.0],
    // x < 0
    [360.0, 180.0],
];

/// Converts a radial vector into its components.
pub fn component_from_radial(v: RadialVector) -> ComponentVector {
    let bearing = v.bearing() * RADIANS_PER_DEGREE;

    ComponentVector {
        x: v.magnitude() * bearing.sin(),
        y: v.magnitude() * bearing.cos(),
    }
}

/// Converts components into a radial vector.
///
/// If `y` is close to zero the vector points east (90°) or west (270°)
/// depending on the sign of `x`. This includes the zero vector, which gets a
/// bearing of 90°.
pub fn radial_from_component(c: ComponentVector) -> RadialVector {
    if c.y.abs() < MIN_NORTH {
        debug!("component y={} is close to zero, resolving to east/west", c.y);

        let bearing = if c.x >= 0.0 { 90.0 } else { 270.0 };
        return RadialVector::new(c.x.abs(), bearing);
    }

    let offset = QUADRANT_OFFSET[(c.x < 0.0) as usize][(c.y < 0.0) as usize];

    RadialVector::new(
        c.x.hypot(c.y),
        (c.x / c.y).atan() * DEGREES_PER_RADIAN + offset,
    )
}

/// Returns the vector sum `a + b`.
pub fn add_component(a: ComponentVector, b: ComponentVector) -> ComponentVector {
    a + b
}

/// Returns the vector difference `a - b`.
pub fn diff_component(a: ComponentVector, b: ComponentVector) -> ComponentVector {
    a - b
}

/// Returns the vector sum `a + b` of two radial vectors.
pub fn add_radial(a: RadialVector, b: RadialVector) -> RadialVector {
    radial_from_component(add_component(
        component_from_radial(a),
        component_from_radial(b),
    ))
}

impl From<RadialVector> for ComponentVector {
    fn from(v: RadialVector) -> Self {
        component_from_radial(v)
    }
}

impl From<ComponentVector> for RadialVector {
    fn from(c: ComponentVector) -> Self {
        radial_from_component(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bearing_eq(actual: f64, expected: f64) {
        let diff = ((actual - expected + 180.0).rem_euclid(360.0) - 180.0).abs();
        assert!(diff < 1e-9, "bearing {actual}° should be {expected}°");
    }

    #[test]
    fn components_point_north_and_east() {
        let c = component_from_radial(RadialVector::new(2.0, 0.0));
        assert!(c.x.abs() < 1e-12);
        assert!((c.y - 2.0).abs() < 1e-12);

        let c = component_from_radial(RadialVector::new(2.0, 90.0));
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!(c.y.abs() < 1e-12);
    }

    #[test]
    fn east_and_west_without_north_component() {
        assert_eq!(
            radial_from_component(ComponentVector::new(5.0, 0.0)),
            RadialVector::new(5.0, 90.0)
        );
        assert_eq!(
            radial_from_component(ComponentVector::new(-5.0, 0.0)),
            RadialVector::new(5.0, 270.0)
        );
    }

    #[test]
    fn tiny_north_component_resolves_to_east_and_west() {
        assert_eq!(
            radial_from_component(ComponentVector::new(5.0, 1e-12)),
            RadialVector::new(5.0, 90.0)
        );
        assert_eq!(
            radial_from_component(ComponentVector::new(-5.0, -1e-12)),
            RadialVector::new(5.0, 270.0)
        );
    }

    #[test]
    fn from_conversions_match_functions() {
        let v = RadialVector::new(12.0, 300.0);
        let c = ComponentVector::from(v);
        assert_eq!(c, component_from_radial(v));

        let back = RadialVector::from(c);
        assert_eq!(back, radial_from_component(c));
        assert!((back.magnitude() - 12.0).abs() < 1e-9);
        assert_bearing_eq(back.bearing(), 300.0);
    }

    #[test]
    fn zero_vector_points_east() {
        assert_eq!(
            radial_from_component(ComponentVector::default()),
            RadialVector::new(0.0, 90.0)
        );
    }

    #[test]
    fn each_quadrant_is_resolved() {
        for (x, y, bearing) in [
            (1.0, 1.0, 45.0),
            (1.0, -1.0, 135.0),
            (-1.0, -1.0, 225.0),
            (-1.0, 1.0, 315.0),
            (0.0, 1.0, 0.0),
            (0.0, -1.0, 180.0),
        ] {
            let v = radial_from_component(ComponentVector::new(x, y));
            assert_bearing_eq(v.bearing(), bearing);
            assert!(v.bearing() >= 0.0 && v.bearing() < 360.0);
        }
    }

    #[test]
    fn diff_is_inverse_of_add() {
        let a = ComponentVector::new(3.0, -4.0);
        let b = ComponentVector::new(-1.5, 2.0);
        assert_eq!(diff_component(add_component(a, b), b), a);
    }

    #[test]
    fn add_opposite_radials_cancels() {
        let sum = add_radial(RadialVector::new(7.0, 30.0), RadialVector::new(7.0, 210.0));
        assert!(sum.magnitude() < 1e-9);
    }
}
