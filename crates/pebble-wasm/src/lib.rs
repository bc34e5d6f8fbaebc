//! WASM bindings for the pebble flux predictor.
//!
//! Inputs and outputs cross the boundary as plain JS objects through
//! `serde-wasm-bindgen`. Results are converted to AU, years and Earth
//! masses per Myr for plotting.

use wasm_bindgen::prelude::*;

mod pebbles;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
