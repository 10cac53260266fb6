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

//! Angle constants and bearing normalization.

mod constants;

pub use constants::*;

/// Normalizes a bearing in degrees into the range [0, 360).
///
/// ```
/// use seawind::measurements::normalize_bearing;
///
/// assert_eq!(normalize_bearing(-30.0), 330.0);
/// assert_eq!(normalize_bearing(720.0), 0.0);
/// ```
pub fn normalize_bearing(bearing: f64) -> f64 {
    let bearing = bearing.rem_euclid(FULL_CIRCLE);

    // rem_euclid rounds tiny negative values up to a full circle
    if bearing >= FULL_CIRCLE {
        0.0
    } else {
        bearing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_negative_bearing() {
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(-450.0), 270.0);
    }

    #[test]
    fn keeps_full_circle_exclusive() {
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(-1e-15), 0.0);
        assert!(normalize_bearing(359.999) < FULL_CIRCLE);
    }
}
