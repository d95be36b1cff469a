/// Configuration for the k-means algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters requested. The number of non-empty clusters after
    /// convergence may be smaller.
    pub k: usize,

    /// Maximum number of re-aggregation passes. When reached, training stops
    /// and the result is reported as not converged.
    pub max_iters: usize,

    /// Stability tolerance, as a fraction of the dataset size. The loop stops
    /// once at most `reassign_tol * n_samples` points changed their cluster
    /// index between two iterations. `0.0` requires identical assignments.
    pub reassign_tol: f64,

    /// Random seed for center initialization
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iters: 300,
            reassign_tol: 0.0,
            seed: 0,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the reassignment tolerance
    pub fn with_reassign_tol(mut self, reassign_tol: f64) -> Self {
        self.reassign_tol = reassign_tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Largest number of changed assignments still counted as stable for a
    /// dataset of `n_samples` points.
    pub(crate) fn allowed_changes(&self, n_samples: usize) -> usize {
        if self.reassign_tol <= 0.0 {
            return 0;
        }
        (self.reassign_tol * n_samples as f64).floor() as usize
    }
}
