use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Per-dimension extent of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    mins: Array1<f64>,
    maxs: Array1<f64>,
}

impl BoundingBox {
    /// Scan every point and record the minimum and maximum of each dimension.
    ///
    /// # Errors
    ///
    /// Returns [`KMeansError::InvalidInput`] if the dataset has no points, the
    /// points have no dimensions, or a dimension's bound is NaN or infinite.
    pub fn from_data(data: &ArrayView2<f64>) -> Result<Self, KMeansError> {
        let (n_samples, n_features) = data.dim();
        if n_samples == 0 {
            return Err(KMeansError::InvalidInput("dataset is empty".to_string()));
        }
        if n_features == 0 {
            return Err(KMeansError::InvalidInput(
                "points must have at least one dimension".to_string(),
            ));
        }

        let mut mins = data.row(0).to_owned();
        let mut maxs = data.row(0).to_owned();
        for point in data.outer_iter().skip(1) {
            for (d, &value) in point.iter().enumerate() {
                if value < mins[d] {
                    mins[d] = value;
                }
                if value > maxs[d] {
                    maxs[d] = value;
                }
            }
        }

        for (d, (&lo, &hi)) in mins.iter().zip(maxs.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(KMeansError::InvalidInput(format!(
                    "dimension {} has a non-finite bound [{}, {}]",
                    d, lo, hi
                )));
            }
        }

        Ok(Self { mins, maxs })
    }

    /// Lower bound of each dimension
    pub fn mins(&self) -> ArrayView1<'_, f64> {
        self.mins.view()
    }

    /// Upper bound of each dimension
    pub fn maxs(&self) -> ArrayView1<'_, f64> {
        self.maxs.view()
    }

    pub fn dimension(&self) -> usize {
        self.mins.len()
    }

    /// Whether `point` lies inside the box, bounds included.
    pub fn contains(&self, point: &ArrayView1<f64>) -> bool {
        point.len() == self.dimension()
            && point
                .iter()
                .zip(self.mins.iter().zip(self.maxs.iter()))
                .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// Draw `k` independent points uniformly from the box.
    ///
    /// Each coordinate is sampled from the closed interval `[min_d, max_d]`,
    /// so a dimension where every point agrees yields that exact value. The
    /// interval is interpolated from a unit draw, which keeps extents wider
    /// than `f64::MAX` (e.g. `[-f64::MAX, f64::MAX]`) samplable.
    pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Array2<f64> {
        let unit = Uniform::new_inclusive(0.0, 1.0);

        let mut centers = Array2::zeros((k, self.dimension()));
        for mut center in centers.outer_iter_mut() {
            for ((value, &lo), &hi) in center
                .iter_mut()
                .zip(self.mins.iter())
                .zip(self.maxs.iter())
            {
                *value = lerp(lo, hi, unit.sample(rng));
            }
        }

        centers
    }
}

/// Point at fraction `t` of `[lo, hi]`, clamped to the interval.
fn lerp(lo: f64, hi: f64, t: f64) -> f64 {
    let extent = hi - lo;
    let value = if extent.is_finite() {
        lo + t * extent
    } else {
        lo * (1.0 - t) + hi * t
    };
    value.clamp(lo, hi)
}

/// Initialize `k` centers uniformly at random inside the bounding box of `data`.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if `k` is 0 or the dataset is empty.
pub fn sample_centers<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    k: usize,
    rng: &mut R,
) -> Result<Array2<f64>, KMeansError> {
    if k == 0 {
        return Err(KMeansError::InvalidInput(
            "k must be greater than 0".to_string(),
        ));
    }

    let bounds = BoundingBox::from_data(data)?;
    Ok(bounds.sample(k, rng))
}
