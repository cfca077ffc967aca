use crate::errors::GeometryError;
use wasm_bindgen::prelude::*;

pub mod matrix_js;
pub mod plane_js;
pub mod point_js;
pub mod vector_js;

/// Surface a geometry error as a thrown JS exception.
fn js_error(e: GeometryError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
