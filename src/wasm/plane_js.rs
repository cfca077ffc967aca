use crate::line::Line3;
use crate::plane::Plane;
use crate::wasm::{js_error, matrix_js::MatrixJs, point_js::Point3Js, vector_js::Vector3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PlaneJs {
    pub(crate) inner: Plane,
}

#[wasm_bindgen]
impl PlaneJs {
    // Constructor: the global XY plane
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Plane::xy() }
    }

    #[wasm_bindgen(js_name = fromPoints)]
    pub fn from_points(a: &Point3Js, b: &Point3Js, c: &Point3Js) -> Result<PlaneJs, JsValue> {
        Plane::from_points(a.inner, b.inner, c.inner)
            .map(PlaneJs::from)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = fromOriginAndAxes)]
    pub fn from_origin_and_axes(
        origin: &Point3Js,
        x_axis: &Vector3Js,
        y_axis: &Vector3Js,
    ) -> Result<PlaneJs, JsValue> {
        Plane::from_origin_and_axes(origin.inner, x_axis.inner, y_axis.inner)
            .map(PlaneJs::from)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = fromPointNormal)]
    pub fn from_point_normal(origin: &Point3Js, normal: &Vector3Js) -> Result<PlaneJs, JsValue> {
        Plane::from_point_normal(origin.inner, normal.inner)
            .map(PlaneJs::from)
            .map_err(js_error)
    }

    // Rotation frame along the segment start -> end
    #[wasm_bindgen(js_name = fromLine)]
    pub fn from_line(
        start: &Point3Js,
        end: &Point3Js,
        orientation: &Vector3Js,
        x_axis_along_line: bool,
    ) -> Result<PlaneJs, JsValue> {
        let line = Line3::new(start.inner, end.inner);
        Plane::from_line(&line, orientation.inner, x_axis_along_line)
            .map(PlaneJs::from)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = yz)]
    pub fn yz() -> PlaneJs {
        Plane::yz().into()
    }

    #[wasm_bindgen(js_name = xz)]
    pub fn xz() -> PlaneJs {
        Plane::xz().into()
    }

    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> Vector3Js {
        self.inner.origin().into()
    }

    #[wasm_bindgen(getter, js_name = xAxis)]
    pub fn x_axis(&self) -> Vector3Js {
        self.inner.x_axis().into()
    }

    #[wasm_bindgen(getter, js_name = yAxis)]
    pub fn y_axis(&self) -> Vector3Js {
        self.inner.y_axis().into()
    }

    #[wasm_bindgen(getter, js_name = zAxis)]
    pub fn z_axis(&self) -> Vector3Js {
        self.inner.z_axis().into()
    }

    // [a, b, c, d] of a*x + b*y + c*z + d = 0
    pub fn coefficients(&self) -> Vec<f64> {
        self.inner.coefficients().to_vec()
    }

    #[wasm_bindgen(js_name = signedDistance)]
    pub fn signed_distance(&self, point: &Point3Js) -> Result<f64, JsValue> {
        self.inner
            .signed_distance_to_point(&point.inner)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = projectPoint)]
    pub fn project_point(&self, point: &Point3Js) -> Result<Point3Js, JsValue> {
        self.inner
            .project_point(&point.inner)
            .map(Point3Js::from)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = rotationMatrix)]
    pub fn rotation_matrix(&self) -> MatrixJs {
        self.inner.to_rotation_matrix().into()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

impl Default for PlaneJs {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Plane> for PlaneJs {
    fn from(p: Plane) -> Self {
        PlaneJs { inner: p }
    }
}
