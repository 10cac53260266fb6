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

use proptest::prelude::*;
use seawind::prelude::*;

fn bearing_diff(a: f64, b: f64) -> f64 {
    ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
}

fn in_range(bearing: f64) -> bool {
    (0.0..360.0).contains(&bearing)
}

proptest! {
    #[test]
    fn prop_radial_round_trip(
        magnitude in 0.1f64..100.0,
        bearing in 0.0f64..360.0
    ) {
        let v = radial!(magnitude, bearing);
        let back = radial_from_component(component_from_radial(v));

        prop_assert!((back.magnitude() - magnitude).abs() < 1e-9);
        prop_assert!(bearing_diff(back.bearing(), bearing) < 1e-6,
            "bearing {} came back as {}", bearing, back.bearing());
        prop_assert!(in_range(back.bearing()));
    }
}

proptest! {
    #[test]
    fn prop_component_round_trip(
        x in -100.0f64..100.0,
        y in -100.0f64..100.0
    ) {
        let back = component_from_radial(radial_from_component(component!(x, y)));

        prop_assert!((back.x - x).abs() < 1e-6);
        prop_assert!((back.y - y).abs() < 1e-6);
    }
}

proptest! {
    #[test]
    fn prop_add_radial_commutes(
        (m1, b1) in (0.0f64..50.0, -720.0f64..720.0),
        (m2, b2) in (0.0f64..50.0, -720.0f64..720.0)
    ) {
        let a = radial!(m1, b1);
        let b = radial!(m2, b2);
        let ab = add_radial(a, b);
        let ba = add_radial(b, a);

        prop_assert!((ab.magnitude() - ba.magnitude()).abs() < 1e-9);
        prop_assert!(ab.magnitude() < 1e-6 || bearing_diff(ab.bearing(), ba.bearing()) < 1e-6);
    }
}

proptest! {
    #[test]
    fn prop_bearings_are_normalized(
        (rw_speed, rw_bearing) in (0.0f64..40.0, -360.0f64..720.0),
        (vow_speed, heading) in (0.0f64..12.0, -360.0f64..720.0)
    ) {
        let rw = radial!(rw_speed, rw_bearing);
        let vow = radial!(vow_speed, heading);

        for triangle in [
            WindTriangle::default(),
            WindTriangle::new(Polynomial::default(), LeewayConvention::Subtract),
        ] {
            let aw = triangle.apparent_from_real(rw, vow);
            prop_assert!(in_range(aw.bearing()));
            prop_assert!(aw.magnitude().is_finite());

            let rw_again = triangle.real_from_apparent(aw, vow);
            prop_assert!(in_range(rw_again.bearing()));
            prop_assert!(rw_again.magnitude().is_finite());

            prop_assert!(in_range(triangle.vog_from_real(rw, vow).bearing()));
            prop_assert!(in_range(triangle.vog_from_apparent(aw, vow).bearing()));
        }

        let exponential = WindTriangle::exponential();
        let aw = exponential.apparent_from_real(rw, vow);
        prop_assert!(in_range(aw.bearing()));
        prop_assert!(in_range(exponential.real_from_apparent(aw, vow).bearing()));
    }
}

proptest! {
    #[test]
    fn prop_polynomial_leeway_is_bounded(angle in -720.0f64..720.0) {
        let model = Polynomial::default();

        for reference in [WindReference::Apparent, WindReference::Real] {
            let leeway = model.leeway(reference, angle);
            prop_assert!(leeway.abs() <= 1.6 * LEEWAY_MAX, "leeway {} at {}°", leeway, angle);
        }
    }
}
