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

use crate::JsRadialVector;

#[wasm_bindgen(js_name = WindTriangle)]
pub struct JsWindTriangle {
    inner: WindTriangle<Box<dyn LeewayModel>>,
}

#[wasm_bindgen(js_class = WindTriangle)]
impl JsWindTriangle {
    /// Creates a wind triangle with the leeway `model` being `polynomial`,
    /// `exponential` or `none` and the `convention` being `add` or `subtract`.
    #[wasm_bindgen(constructor)]
    pub fn new(model: String, convention: String) -> Result<Self, JsError> {
        let model: Box<dyn LeewayModel> = match model.as_ref() {
            "polynomial" => Box::new(Polynomial::default()),
            "exponential" => Box::new(Exponential::default()),
            "none" => Box::new(NoLeeway),
            _ => return Err(JsError::new(&format!("invalid leeway model: {model}"))),
        };

        let convention = match convention.as_ref() {
            "add" => LeewayConvention::Add,
            "subtract" => LeewayConvention::Subtract,
            _ => {
                return Err(JsError::new(&format!(
                    "invalid leeway convention: {convention}"
                )))
            }
        };

        let inner = WindTriangleBuilder::new()
            .convention(convention)
            .build(model)
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = apparentFromReal)]
    pub fn apparent_from_real(&self, rw: &JsRadialVector, vow: &JsRadialVector) -> JsRadialVector {
        self.inner
            .apparent_from_real((*rw).into(), (*vow).into())
            .into()
    }

    #[wasm_bindgen(js_name = realFromApparent)]
    pub fn real_from_apparent(&self, aw: &JsRadialVector, vow: &JsRadialVector) -> JsRadialVector {
        self.inner
            .real_from_apparent((*aw).into(), (*vow).into())
            .into()
    }

    #[wasm_bindgen(js_name = vogFromApparent)]
    pub fn vog_from_apparent(&self, aw: &JsRadialVector, vow: &JsRadialVector) -> JsRadialVector {
        self.inner
            .vog_from_apparent((*aw).into(), (*vow).into())
            .into()
    }

    #[wasm_bindgen(js_name = vogFromReal)]
    pub fn vog_from_real(&self, rw: &JsRadialVector, vow: &JsRadialVector) -> JsRadialVector {
        self.inner.vog_from_real((*rw).into(), (*vow).into()).into()
    }
}
