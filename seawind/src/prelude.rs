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

pub use crate::geom::{
    add_component, add_radial, component_from_radial, diff_component, radial_from_component,
    ComponentVector, RadialVector,
};
pub use crate::leeway::{
    Cubic, Exponential, LeewayModel, NoLeeway, Polynomial, WindReference, APPARENT_CALIBRATION,
    LEEWAY_MAX, REAL_CALIBRATION,
};
pub use crate::{component, radial};
pub use crate::{Error, LeewayConvention, Velocity, Wind, WindTriangle, WindTriangleBuilder};
