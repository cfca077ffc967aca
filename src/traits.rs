use crate::errors::GeometryError;
use crate::float_types::{Real, round_to};

/// Three-component coordinate access shared by [`Vector3`](crate::vector::Vector3)
/// and [`Point3`](crate::point::Point3).
///
/// Implementors only provide the raw accessors; array interchange and
/// digit-rounded comparison come for free.
pub trait Xyz: Sized + Copy {
    fn from_xyz(x: Real, y: Real, z: Real) -> Self;
    fn x(&self) -> Real;
    fn y(&self) -> Real;
    fn z(&self) -> Real;

    /// `[x, y, z]`
    fn to_array(&self) -> [Real; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Build from the first three values of `values`.
    fn from_slice(values: &[Real]) -> Result<Self, GeometryError> {
        Self::from_slice_at(values, 0)
    }

    /// Build from `values[start..start + 3]`.
    ///
    /// # Example
    /// ```
    /// # use sdgeom::{point::Point3, traits::Xyz};
    /// let packed = [9.0, 1.0, 2.0, 3.0];
    /// let p = Point3::from_slice_at(&packed, 1).unwrap();
    /// assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    /// assert!(Point3::from_slice_at(&packed, 2).is_err());
    /// ```
    fn from_slice_at(values: &[Real], start: usize) -> Result<Self, GeometryError> {
        match values.get(start..start.saturating_add(3)) {
            Some([x, y, z]) => Ok(Self::from_xyz(*x, *y, *z)),
            _ => Err(GeometryError::ArrayTooShort {
                len: values.len(),
                start,
            }),
        }
    }

    /// Split packed `[x0, y0, z0, x1, y1, z1, ...]` values into triples.
    ///
    /// # Errors
    /// [`GeometryError::ArrayTooShort`] when the length is not a multiple of
    /// three; `start` is the offset of the incomplete triple.
    fn from_flat(values: &[Real]) -> Result<Vec<Self>, GeometryError> {
        (0..values.len())
            .step_by(3)
            .map(|start| Self::from_slice_at(values, start))
            .collect()
    }

    /// Component-wise equality after rounding both sides to `digits` decimals.
    fn equals_rounded(&self, other: &Self, digits: u32) -> bool {
        round_to(self.x(), digits) == round_to(other.x(), digits)
            && round_to(self.y(), digits) == round_to(other.y(), digits)
            && round_to(self.z(), digits) == round_to(other.z(), digits)
    }

    /// True when every component is finite.
    fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite() && self.z().is_finite()
    }
}

/// Parse the `{x, y, z}` text form. Braces are optional.
pub(crate) fn parse_xyz<T: Xyz>(input: &str) -> Result<T, GeometryError> {
    let stripped: String = input.chars().filter(|c| *c != '{' && *c != '}').collect();
    let mut parts = stripped.split(',').map(str::trim);

    let mut next = || -> Result<Real, GeometryError> {
        parts
            .next()
            .and_then(|s| s.parse::<Real>().ok())
            .ok_or_else(|| GeometryError::Format(input.to_string()))
    };
    let (x, y, z) = (next()?, next()?, next()?);

    if parts.next().is_some() {
        return Err(GeometryError::Format(input.to_string()));
    }
    Ok(T::from_xyz(x, y, z))
}
