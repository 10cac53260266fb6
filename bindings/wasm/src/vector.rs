// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

use seawind::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = RadialVector)]
#[derive(Debug, Clone, Copy)]
pub struct JsRadialVector {
    inner: RadialVector,
}

#[wasm_bindgen(js_class = RadialVector)]
impl JsRadialVector {
    #[wasm_bindgen(constructor)]
    pub fn new(magnitude: f64, bearing: f64) -> Self {
        Self {
            inner: RadialVector::new(magnitude, bearing),
        }
    }

    /// Parses a wind like `04515KT`.
    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(s: &str) -> Result<JsRadialVector, JsError> {
        let inner = s
            .parse::<RadialVector>()
            .map_err(|e| JsError::new(&format!("invalid wind {s}: {e}")))?;

        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude()
    }

    #[wasm_bindgen(getter)]
    pub fn bearing(&self) -> f64 {
        self.inner.bearing()
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner)?)
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn display(&self) -> String {
        format!("{:.1}", self.inner)
    }
}

impl From<JsRadialVector> for RadialVector {
    fn from(value: JsRadialVector) -> Self {
        value.inner
    }
}

impl From<RadialVector> for JsRadialVector {
    fn from(value: RadialVector) -> Self {
        Self { inner: value }
    }
}
