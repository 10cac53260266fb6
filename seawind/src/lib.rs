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

//! Wind triangle calculator for sailing instruments.
//!
//! This crate converts between the _real wind_, the wind relative to the
//! water, and the _apparent wind_, the wind as it is felt on board relative to
//! the bow. The boat's velocity over water (VOW), as reported by paddle-wheel
//! and compass, is turned into its velocity over ground (VOG) by taking
//! [leeway] into account, the sideways slip caused by the wind pushing the
//! hull.
//!
//! Vectors are given in [radial form] as magnitude and bearing in degrees. For
//! addition and subtraction they are converted into [component form].
//!
//! # Examples
//!
//! Compute the apparent wind on a boat sailing north at 6 kt with a real wind
//! of 15 kt from north-east:
//!
//! ```
//! use seawind::prelude::*;
//!
//! let triangle = WindTriangle::default();
//! let aw = triangle.apparent_from_real(radial!(15.0, 45.0), radial!(6.0, 0.0));
//!
//! // the apparent wind is stronger and comes from further ahead
//! assert!(aw.magnitude() > 15.0);
//! assert!(aw.bearing() < 45.0);
//! ```
//!
//! Winds can also be read from the usual `DDDSSKT` notation:
//!
//! ```
//! # use seawind::prelude::*;
//! # fn main() -> Result<(), seawind::Error> {
//! let rw: Wind = "04515KT".parse()?;
//! let rw_again = WindTriangle::default().real_from_apparent(
//!     WindTriangle::default().apparent_from_real(rw, radial!(6.0, 0.0)),
//!     radial!(6.0, 0.0),
//! );
//!
//! // the two directions derive leeway from different winds
//! assert!((rw_again.magnitude() - rw.magnitude()).abs() < 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! [leeway]: crate::leeway
//! [radial form]: crate::geom::RadialVector
//! [component form]: crate::geom::ComponentVector

#[macro_use]
mod macros;

mod error;
pub mod geom;
pub mod leeway;
pub mod measurements;
pub mod prelude;
mod triangle;

pub use error::{Error, Result};
pub use geom::{ComponentVector, RadialVector};
pub use triangle::{LeewayConvention, WindTriangle, WindTriangleBuilder, DEFAULT_LEEWAY_LIMIT};

/// A wind given as speed and the bearing it blows from.
pub type Wind = RadialVector;

/// A velocity given as speed and the bearing the vessel is heading.
pub type Velocity = RadialVector;
