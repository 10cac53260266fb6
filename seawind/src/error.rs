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

use std::error;
use std::fmt;

/// Errors returned when configuring a wind triangle or parsing its inputs.
///
/// The conversions themselves never fail.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A string could not be parsed into a vector.
    UnexpectedString,
    /// A leeway curve needs more distinct wind angles to be fitted.
    InsufficientCalibration { required: usize, actual: usize },
    /// The calibration points don't determine a unique curve.
    SingularCalibration,
    /// The leeway limit in degrees is not within (0°, 90°).
    InvalidLeewayLimit(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString => write!(f, "unexpected string"),
            Self::InsufficientCalibration { required, actual } => {
                write!(
                    f,
                    "calibration needs {required} distinct wind angles but has {actual}"
                )
            }
            Self::SingularCalibration => write!(f, "calibration points are singular"),
            Self::InvalidLeewayLimit(limit) => {
                write!(f, "leeway limit should be within 0° and 90° but is {limit}°")
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
