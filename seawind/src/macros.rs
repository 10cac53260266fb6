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

/// Creates a [`RadialVector`] from magnitude and bearing in degrees.
///
/// ```
/// use seawind::radial;
///
/// let rw = radial!(15.0, 45.0);
/// assert_eq!(rw.bearing(), 45.0);
/// ```
///
/// [`RadialVector`]: crate::RadialVector
#[macro_export]
macro_rules! radial {
    ($magnitude:expr, $bearing:expr) => {
        $crate::RadialVector::new($magnitude, $bearing)
    };
}

/// Creates a [`ComponentVector`] from its two components.
///
/// [`ComponentVector`]: crate::ComponentVector
#[macro_export]
macro_rules! component {
    ($x:expr, $y:expr) => {
        $crate::ComponentVector { x: $x, y: $y }
    };
}
