use crate::error::KMeansError;
use ndarray::{ArrayView1, ArrayView2};

/// Squared Euclidean distance between two points of equal dimension
#[inline]
pub fn squared_euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance between two points of equal dimension
#[inline]
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    squared_euclidean_distance(a, b).sqrt()
}

/// Find the center nearest to `point`.
///
/// Scans `centers` row by row starting from an infinite best distance and only
/// replaces the best on a strictly smaller distance, so ties resolve to the
/// lowest index. A NaN distance never wins: a point with a NaN coordinate is
/// reported against center 0 with an infinite distance.
///
/// # Returns
/// * `(index, distance)` - Row index of the nearest center and its Euclidean
///   distance, or `None` if `centers` has no rows
pub fn nearest_center(
    point: &ArrayView1<f64>,
    centers: &ArrayView2<f64>,
) -> Option<(usize, f64)> {
    if centers.nrows() == 0 {
        return None;
    }

    let mut best = (0, f64::INFINITY);
    for (j, center) in centers.outer_iter().enumerate() {
        let dist = euclidean_distance(point, &center);
        if dist < best.1 {
            best = (j, dist);
        }
    }

    Some(best)
}

/// Total within-cluster squared distance of `labels` with respect to `centers`
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if `labels` and `data` differ in
/// length or a label has no matching center row, and
/// [`KMeansError::DimensionMismatch`] if data and centers disagree on the
/// number of features.
pub fn within_cluster_sum_of_squares(
    data: &ArrayView2<f64>,
    centers: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> Result<f64, KMeansError> {
    if labels.len() != data.nrows() {
        return Err(KMeansError::InvalidInput(format!(
            "assignment vector has {} entries, dataset has {} points",
            labels.len(),
            data.nrows()
        )));
    }
    if data.ncols() != centers.ncols() {
        return Err(KMeansError::DimensionMismatch(format!(
            "data has {} features, centers have {}",
            data.ncols(),
            centers.ncols()
        )));
    }
    if let Some(&label) = labels.iter().find(|&&label| label >= centers.nrows()) {
        return Err(KMeansError::InvalidInput(format!(
            "label {} out of range for {} centers",
            label,
            centers.nrows()
        )));
    }

    Ok(data
        .outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_euclidean_distance(&point, &centers.row(label)))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 6.0, 3.0];

        assert_relative_eq!(squared_euclidean_distance(&a.view(), &b.view()), 25.0);
        assert_relative_eq!(euclidean_distance(&a.view(), &b.view()), 5.0);
        assert_relative_eq!(euclidean_distance(&a.view(), &a.view()), 0.0);
    }

    #[test]
    fn test_nearest_center() {
        let centers = array![[0.0, 0.0], [10.0, 10.0]];

        let (idx, dist) = nearest_center(&array![9.0, 10.0].view(), &centers.view()).unwrap();
        assert_eq!(idx, 1);
        assert_relative_eq!(dist, 1.0);

        // (5,5) is equidistant, the first center wins
        let (idx, _) = nearest_center(&array![5.0, 5.0].view(), &centers.view()).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_nearest_center_duplicate_centers() {
        let centers = array![[3.0, 3.0], [1.0, 1.0], [1.0, 1.0]];
        let (idx, _) = nearest_center(&array![0.0, 0.0].view(), &centers.view()).unwrap();
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_nearest_center_no_centers() {
        let centers = ndarray::Array2::<f64>::zeros((0, 2));
        assert!(nearest_center(&array![0.0, 0.0].view(), &centers.view()).is_none());
    }

    #[test]
    fn test_within_cluster_sum_of_squares() {
        let data = array![[0.0, 0.0], [2.0, 0.0], [10.0, 10.0]];
        let centers = array![[1.0, 0.0], [10.0, 10.0]];

        let labels = array![0, 0, 1];
        let wcss =
            within_cluster_sum_of_squares(&data.view(), &centers.view(), &labels.view()).unwrap();
        assert_relative_eq!(wcss, 2.0);
    }

    #[test]
    fn test_within_cluster_sum_of_squares_invalid_labels() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        let centers = array![[0.0, 0.0]];

        let out_of_range = array![0, 3];
        assert!(matches!(
            within_cluster_sum_of_squares(&data.view(), &centers.view(), &out_of_range.view()),
            Err(KMeansError::InvalidInput(_))
        ));

        let short = array![0];
        assert!(matches!(
            within_cluster_sum_of_squares(&data.view(), &centers.view(), &short.view()),
            Err(KMeansError::InvalidInput(_))
        ));

        let wide = array![[0.0, 0.0, 0.0]];
        let labels = array![0, 0];
        assert!(matches!(
            within_cluster_sum_of_squares(&data.view(), &wide.view(), &labels.view()),
            Err(KMeansError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_nearest_center_nan_point_keeps_first() {
        let centers = array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
        let (idx, dist) =
            nearest_center(&array![f64::NAN, 1.0].view(), &centers.view()).unwrap();
        assert_eq!(idx, 0);
        assert!(dist.is_infinite());
    }

    #[test]
    fn test_nearest_center_nan_center_skipped() {
        let centers = array![[f64::NAN, 0.0], [1.0, 1.0]];
        let (idx, _) = nearest_center(&array![0.0, 0.0].view(), &centers.view()).unwrap();
        assert_eq!(idx, 1);
    }
}
