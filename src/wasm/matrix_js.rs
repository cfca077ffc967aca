use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::wasm::js_error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MatrixJs {
    pub(crate) inner: Matrix,
}

#[wasm_bindgen]
impl MatrixJs {
    /// `rows × columns` matrix from row-major `values`.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, columns: usize, values: Vec<f64>) -> Result<MatrixJs, JsValue> {
        if columns == 0 || values.len() != rows * columns {
            return Err(js_error(GeometryError::DimensionMismatch {
                op: "construction",
                left: (rows, columns),
                right: (1, values.len()),
            }));
        }
        let data: Vec<&[Real]> = values.chunks(columns).collect();
        Matrix::from_rows(&data).map(MatrixJs::from).map_err(js_error)
    }

    pub fn identity(rows: usize, columns: usize) -> MatrixJs {
        Matrix::identity(rows, columns).into()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.inner.row_count()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> usize {
        self.inner.column_count()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.inner.get(row, column).map(|v| v as f64)
    }

    pub fn transpose(&self) -> MatrixJs {
        self.inner.transpose().into()
    }

    pub fn add(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        self.inner.try_add(&other.inner).map(MatrixJs::from).map_err(js_error)
    }

    pub fn sub(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        self.inner.try_sub(&other.inner).map(MatrixJs::from).map_err(js_error)
    }

    pub fn mul(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        self.inner.try_mul(&other.inner).map(MatrixJs::from).map_err(js_error)
    }

    // Row-major copy of the entries
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_rows().into_iter().flatten().collect()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}

impl From<Matrix> for MatrixJs {
    fn from(m: Matrix) -> Self {
        MatrixJs { inner: m }
    }
}
