//! Building datasets from plain Rust collections.
//!
//! The clustering functions work on `ArrayView2<f64>` with one point per
//! row. These helpers validate and pack row-oriented points or per-axis
//! columns into that layout.

use crate::error::KMeansError;
use ndarray::Array2;

/// Pack a list of points into an `(n_points, dimension)` array.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if `points` is empty or the points
/// have no coordinates, and [`KMeansError::DimensionMismatch`] if two points
/// differ in length.
///
/// # Example
///
/// ```
/// use stablekmeans_rs::points::from_points;
///
/// let data = from_points(&[[5.0, 1.0], [4.0, 2.0], [8.0, 4.0]]).unwrap();
/// assert_eq!(data.dim(), (3, 2));
/// ```
pub fn from_points<P: AsRef<[f64]>>(points: &[P]) -> Result<Array2<f64>, KMeansError> {
    let first = points
        .first()
        .ok_or_else(|| KMeansError::InvalidInput("dataset is empty".to_string()))?;
    let dimension = first.as_ref().len();
    if dimension == 0 {
        return Err(KMeansError::InvalidInput(
            "points must have at least one dimension".to_string(),
        ));
    }

    let mut flat = Vec::with_capacity(points.len() * dimension);
    for (i, point) in points.iter().enumerate() {
        let point = point.as_ref();
        if point.len() != dimension {
            return Err(KMeansError::DimensionMismatch(format!(
                "point {} has {} coordinates, expected {}",
                i,
                point.len(),
                dimension
            )));
        }
        flat.extend_from_slice(point);
    }

    Array2::from_shape_vec((points.len(), dimension), flat)
        .map_err(|e| KMeansError::InvalidInput(e.to_string()))
}

/// Zip per-axis columns into points: the i-th point takes the i-th value of
/// every column, so `columns.len()` becomes the dimension.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if there are no columns or the
/// columns are empty, and [`KMeansError::DimensionMismatch`] if the columns
/// differ in length.
///
/// # Example
///
/// ```
/// use stablekmeans_rs::points::from_columns;
///
/// let xs = [5.0, 4.0, 8.0];
/// let ys = [1.0, 2.0, 4.0];
/// let data = from_columns(&[&xs[..], &ys[..]]).unwrap();
/// assert_eq!(data.row(1).to_vec(), vec![4.0, 2.0]);
/// ```
pub fn from_columns<C: AsRef<[f64]>>(columns: &[C]) -> Result<Array2<f64>, KMeansError> {
    let first = columns.first().ok_or_else(|| {
        KMeansError::InvalidInput("points must have at least one dimension".to_string())
    })?;
    let n_points = first.as_ref().len();
    if n_points == 0 {
        return Err(KMeansError::InvalidInput("dataset is empty".to_string()));
    }

    for (d, column) in columns.iter().enumerate() {
        let len = column.as_ref().len();
        if len != n_points {
            return Err(KMeansError::DimensionMismatch(format!(
                "column {} has {} values, expected {}",
                d, len, n_points
            )));
        }
    }

    Ok(Array2::from_shape_fn((n_points, columns.len()), |(i, d)| {
        columns[d].as_ref()[i]
    }))
}
