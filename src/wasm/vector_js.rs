use crate::float_types::Real;
use crate::vector::Vector3;
use crate::wasm::js_error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Vector3Js {
    pub(crate) inner: Vector3,
}

#[wasm_bindgen]
impl Vector3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3Js {
        Vector3Js {
            inner: Vector3::new(x as Real, y as Real, z as Real),
        }
    }

    /// Parse `"{x, y, z}"`.
    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(s: &str) -> Result<Vector3Js, JsValue> {
        s.parse::<Vector3>().map(Vector3Js::from).map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z as f64
    }

    pub fn magnitude(&self) -> f64 {
        self.inner.magnitude() as f64
    }

    pub fn unit(&self) -> Result<Vector3Js, JsValue> {
        self.inner.unit().map(Vector3Js::from).map_err(js_error)
    }

    pub fn dot(&self, other: &Vector3Js) -> f64 {
        self.inner.dot(&other.inner) as f64
    }

    pub fn cross(&self, other: &Vector3Js) -> Vector3Js {
        self.inner.cross(&other.inner).into()
    }

    pub fn add(&self, other: &Vector3Js) -> Vector3Js {
        (self.inner + other.inner).into()
    }

    pub fn sub(&self, other: &Vector3Js) -> Vector3Js {
        (self.inner - other.inner).into()
    }

    pub fn scale(&self, value: f64) -> Vector3Js {
        (self.inner * value as Real).into()
    }

    pub fn reverse(&self) -> Vector3Js {
        self.inner.reverse().into()
    }

    #[wasm_bindgen(js_name = isParallel)]
    pub fn is_parallel(&self, other: &Vector3Js) -> bool {
        self.inner.is_parallel(&other.inner)
    }

    #[wasm_bindgen(js_name = isOrthogonal)]
    pub fn is_orthogonal(&self, other: &Vector3Js) -> bool {
        self.inner.is_orthogonal(&other.inner)
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_array().to_vec()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions
impl From<Vector3> for Vector3Js {
    fn from(v: Vector3) -> Self {
        Vector3Js { inner: v }
    }
}

impl From<&Vector3Js> for Vector3 {
    fn from(v: &Vector3Js) -> Self {
        v.inner
    }
}
