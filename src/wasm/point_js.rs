use crate::float_types::Real;
use crate::point::Point3;
use crate::traits::Xyz;
use crate::wasm::{js_error, vector_js::Vector3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Point3Js {
    pub(crate) inner: Point3,
}

#[wasm_bindgen]
impl Point3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Point3Js {
        Point3Js {
            inner: Point3::new(x as Real, y as Real, z as Real),
        }
    }

    #[wasm_bindgen(js_name = fromString)]
    pub fn from_string(s: &str) -> Result<Point3Js, JsValue> {
        s.parse::<Point3>().map(Point3Js::from).map_err(js_error)
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

    pub fn distance(&self, other: &Point3Js) -> f64 {
        self.inner.distance(&other.inner) as f64
    }

    /// Vector from `other` to this point.
    #[wasm_bindgen(js_name = vectorFrom)]
    pub fn vector_from(&self, other: &Point3Js) -> Vector3Js {
        (self.inner - other.inner).into()
    }

    pub fn translate(&self, by: &Vector3Js) -> Point3Js {
        self.inner.translate(&by.inner).into()
    }

    /// Centroid of a flat `[x0, y0, z0, x1, y1, z1, ...]` array.
    pub fn average(flat: Vec<f64>) -> Result<Point3Js, JsValue> {
        let points = Point3::from_flat(&flat).map_err(js_error)?;
        Point3::average(&points).map(Point3Js::from).map_err(js_error)
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

// Rust-only conversions (not visible to JS)
impl From<Point3> for Point3Js {
    fn from(p: Point3) -> Self {
        Point3Js { inner: p }
    }
}

impl From<&Point3Js> for Point3 {
    fn from(p: &Point3Js) -> Self {
        p.inner
    }
}
