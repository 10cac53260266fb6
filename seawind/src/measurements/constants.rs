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

pub const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;
pub const RADIANS_PER_DEGREE: f64 = std::f64::consts::PI / 180.0;
pub const FULL_CIRCLE: f64 = 360.0;
/// Components closer to zero than this are treated as zero to avoid dividing
/// by zero in the arctangent.
pub const MIN_NORTH: f64 = 1e-9;
