use crate::bounds::sample_centers;
use crate::config::KMeansConfig;
use crate::distance::{nearest_center, within_cluster_sum_of_squares};
use crate::error::KMeansError;
use log::{debug, info, warn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::time::Instant;

/// Result of the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Cluster index of every data point, in data order
    pub labels: Array1<usize>,
    /// Centers that produced `labels`, one row per cluster index
    pub centroids: Array2<f64>,
    /// Number of re-aggregation passes performed
    pub n_iterations: usize,
    /// Whether the assignments stabilized before `max_iters` was reached
    pub converged: bool,
    /// Total within-cluster squared distance of `labels`
    pub inertia: f64,
}

/// Assign every data point to the index of its nearest center.
///
/// Ties resolve to the lowest center index. The output has one entry per row
/// of `data`, each in `0..centers.nrows()`.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if `centers` is empty and
/// [`KMeansError::DimensionMismatch`] if data and centers disagree on the
/// number of features.
pub fn assign_points(
    data: &ArrayView2<f64>,
    centers: &ArrayView2<f64>,
) -> Result<Array1<usize>, KMeansError> {
    if centers.nrows() == 0 {
        return Err(KMeansError::InvalidInput(
            "center set is empty".to_string(),
        ));
    }
    if data.ncols() != centers.ncols() {
        return Err(KMeansError::DimensionMismatch(format!(
            "data has {} features, centers have {}",
            data.ncols(),
            centers.ncols()
        )));
    }

    let mut labels = Array1::zeros(data.nrows());
    for (label, point) in labels.iter_mut().zip(data.outer_iter()) {
        // centers is non-empty, so a nearest center always exists
        if let Some((idx, _)) = nearest_center(&point, centers) {
            *label = idx;
        }
    }

    Ok(labels)
}

/// Recompute one center per distinct label as the mean of its member points.
///
/// Centers are emitted in the order their label first appears in `labels`.
/// Labels that own no point produce no center, so the returned set can be
/// shorter than the one that produced `labels`.
///
/// # Errors
///
/// Returns [`KMeansError::InvalidInput`] if `labels` is empty or its length
/// differs from the number of data points.
pub fn group_centers(
    data: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> Result<Array2<f64>, KMeansError> {
    if labels.is_empty() {
        return Err(KMeansError::InvalidInput(
            "assignment vector is empty".to_string(),
        ));
    }
    if labels.len() != data.nrows() {
        return Err(KMeansError::InvalidInput(format!(
            "assignment vector has {} entries, dataset has {} points",
            labels.len(),
            data.nrows()
        )));
    }

    // Map each label to its slot in first-seen order
    let mut slot_of: HashMap<usize, usize> = HashMap::new();
    let slots: Vec<usize> = labels
        .iter()
        .map(|&label| {
            let next = slot_of.len();
            *slot_of.entry(label).or_insert(next)
        })
        .collect();
    let n_groups = slot_of.len();

    let mut sums: Array2<f64> = Array2::zeros((n_groups, data.ncols()));
    let mut counts = vec![0usize; n_groups];
    for (point, &slot) in data.outer_iter().zip(slots.iter()) {
        counts[slot] += 1;
        let mut sum = sums.row_mut(slot);
        sum += &point;
    }

    for (mut sum, &count) in sums.outer_iter_mut().zip(counts.iter()) {
        sum /= count as f64;
    }

    Ok(sums)
}

/// Number of positions where two assignment vectors disagree
fn count_changes(previous: &Array1<usize>, current: &Array1<usize>) -> usize {
    previous
        .iter()
        .zip(current.iter())
        .filter(|(a, b)| a != b)
        .count()
}

/// Run Lloyd's k-means with bounding-box seeding drawn from `rng`.
///
/// Centers are initialized uniformly inside the per-dimension extent of the
/// data, then assignment and re-aggregation alternate until the assignment
/// vector is stable (see [`KMeansConfig::reassign_tol`]) or
/// [`KMeansConfig::max_iters`] passes have run.
pub fn k_means_with_rng<R: Rng + ?Sized>(
    data: &ArrayView2<f64>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<KMeansResult, KMeansError> {
    let (n_samples, n_features) = data.dim();
    let start = Instant::now();

    debug!(
        "Training k-means: {} samples, {} features, {} clusters",
        n_samples, n_features, config.k
    );

    let mut centroids = sample_centers(data, config.k, rng)?;
    let mut labels = assign_points(data, &centroids.view())?;
    let mut previous: Option<Array1<usize>> = None;

    let allowed_changes = config.allowed_changes(n_samples);
    let mut n_iterations = 0;
    let converged = loop {
        if let Some(prev) = &previous {
            let changes = count_changes(prev, &labels);
            debug!(
                "  Iteration {}: {} points reassigned, {} live clusters",
                n_iterations,
                changes,
                centroids.nrows()
            );
            if changes <= allowed_changes {
                break true;
            }
        }

        if n_iterations >= config.max_iters {
            break false;
        }

        let next_centroids = group_centers(data, &labels.view())?;
        if next_centroids.nrows() < centroids.nrows() {
            debug!(
                "  Dropped {} empty clusters",
                centroids.nrows() - next_centroids.nrows()
            );
        }
        centroids = next_centroids;
        let next_labels = assign_points(data, &centroids.view())?;
        previous = Some(std::mem::replace(&mut labels, next_labels));
        n_iterations += 1;
    };

    let inertia = within_cluster_sum_of_squares(data, &centroids.view(), &labels.view())?;

    if converged {
        info!(
            "k-means converged after {} iterations with {} clusters (inertia {:.6}, {:.4}s)",
            n_iterations,
            centroids.nrows(),
            inertia,
            start.elapsed().as_secs_f64()
        );
    } else {
        warn!(
            "k-means stopped after {} iterations without stable assignments",
            config.max_iters
        );
    }

    Ok(KMeansResult {
        labels,
        centroids,
        n_iterations,
        converged,
        inertia,
    })
}

/// Cluster `data` into at most `k` groups and return the cluster index of
/// every point.
///
/// Uses the default configuration with `k` set, seeding a [`ChaCha8Rng`]
/// from [`KMeansConfig::seed`].
pub fn k_means(data: &ArrayView2<f64>, k: usize) -> Result<Array1<usize>, KMeansError> {
    let config = KMeansConfig::new(k);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    Ok(k_means_with_rng(data, &config, &mut rng)?.labels)
}
