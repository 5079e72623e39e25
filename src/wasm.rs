//! WebAssembly export of the ranking worker protocol.
//!
//! A Web Worker script forwards each `message` event's data to
//! [`rank_message`] and posts the return value back unchanged.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::McdaError;
use crate::worker::{handle_request, TopsisRequest, WorkerResponse};

/// Ranks one request object and returns the response object.
///
/// Input that does not decode as a request yields an `error` response.
/// Every map in the response, including each flattened ranked option,
/// arrives as a plain JS object.
#[wasm_bindgen(js_name = rankMessage)]
pub fn rank_message(input: JsValue) -> JsValue {
    let response = match serde_wasm_bindgen::from_value::<TopsisRequest>(input) {
        Ok(request) => handle_request(&request),
        Err(e) => WorkerResponse::error(McdaError::invalid(e.to_string()).to_string()),
    };
    to_js(&response)
}

/// JSON string form of [`rank_message`].
#[wasm_bindgen(js_name = rankJson)]
pub fn rank_json(input: &str) -> String {
    crate::worker::handle_message(input)
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}
