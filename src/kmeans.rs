use crate::algorithm::{assign_points, k_means_with_rng, KMeansResult};
use crate::config::KMeansConfig;
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Lloyd's k-means clustering compatible with ndarray.
///
/// Centers start uniformly at random inside the bounding box of the training
/// data and are refined until no point changes cluster. Clusters that lose all
/// of their points are dropped, so a trained model may hold fewer than `k`
/// centroids. It provides an API similar to FAISS and scikit-learn.
///
/// # Example
///
/// ```
/// use stablekmeans_rs::KMeans;
/// use ndarray::Array2;
/// use ndarray_rand::RandomExt;
/// use ndarray_rand::rand_distr::Uniform;
///
/// // Generate random data
/// let data = Array2::random((1000, 8), Uniform::new(-1.0, 1.0));
///
/// // Create and train the model
/// let mut kmeans = KMeans::new(10);
/// kmeans.train(&data.view()).unwrap();
///
/// // Get cluster assignments
/// let labels = kmeans.predict(&data.view()).unwrap();
/// assert_eq!(labels.len(), 1000);
/// ```
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions), 0 until the first train call
    d: usize,

    /// Outcome of the last training run (None if not yet fitted)
    result: Option<KMeansResult>,
}

impl KMeans {
    /// Create a new KMeans instance with default configuration and `k`
    /// requested clusters.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new KMeans instance with custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            config,
            d: 0,
            result: None,
        }
    }

    /// Train the model on the given data.
    ///
    /// This method mimics the FAISS `train()` API. The random source is a
    /// [`ChaCha8Rng`] seeded from the configuration, so repeated calls on the
    /// same data produce the same model.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` is 0 or the data is empty
    /// - Data dimensions don't match (for subsequent calls)
    pub fn train(&mut self, data: &ArrayView2<f64>) -> Result<(), KMeansError> {
        let n_features = data.ncols();

        if self.d != 0 && n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let result = k_means_with_rng(data, &self.config, &mut rng)?;

        self.d = n_features;
        self.result = Some(result);
        Ok(())
    }

    /// Fit the model to the data.
    ///
    /// This method mimics the scikit-learn `fit()` API.
    /// It is equivalent to `train()` and returns `&mut Self` for chaining.
    pub fn fit(&mut self, data: &ArrayView2<f64>) -> Result<&mut Self, KMeansError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict cluster assignments for data using the trained centroids.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Data dimensions don't match the training data
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        let result = self.result.as_ref().ok_or(KMeansError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        assign_points(data, &result.centroids.view())
    }

    /// Fit the model and return the assignments of the training data.
    ///
    /// This method mimics the scikit-learn `fit_predict()` API.
    pub fn fit_predict(&mut self, data: &ArrayView2<f64>) -> Result<Array1<usize>, KMeansError> {
        self.train(data)?;
        self.labels().cloned().ok_or(KMeansError::NotFitted)
    }

    /// Centroids of the fitted model, one row per cluster index.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.result.as_ref().map(|r| &r.centroids)
    }

    /// Assignments of the training data from the last fit.
    pub fn labels(&self) -> Option<&Array1<usize>> {
        self.result.as_ref().map(|r| &r.labels)
    }

    /// Number of re-aggregation passes of the last fit.
    pub fn n_iterations(&self) -> Option<usize> {
        self.result.as_ref().map(|r| r.n_iterations)
    }

    /// Whether the last fit reached stable assignments.
    pub fn converged(&self) -> Option<bool> {
        self.result.as_ref().map(|r| r.converged)
    }

    /// Total within-cluster squared distance of the last fit.
    pub fn inertia(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.inertia)
    }

    /// Get the requested number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    #[test]
    fn test_kmeans_new() {
        let kmeans = KMeans::new(10);
        assert_eq!(kmeans.k(), 10);
        assert_eq!(kmeans.d(), 0);
        assert!(kmeans.centroids().is_none());
        assert!(kmeans.labels().is_none());
    }

    #[test]
    fn test_kmeans_train() {
        let data = Array2::random((500, 32), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeans::new(5);

        kmeans.train(&data.view()).unwrap();

        let centroids = kmeans.centroids().unwrap();
        assert!(centroids.nrows() >= 1 && centroids.nrows() <= 5);
        assert_eq!(centroids.ncols(), 32);
        assert_eq!(kmeans.d(), 32);
        assert!(kmeans.converged().is_some());
    }

    #[test]
    fn test_kmeans_fit_chaining() {
        let data = Array2::random((200, 4), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeans::new(3);

        let n_iterations = kmeans.fit(&data.view()).unwrap().n_iterations();
        assert!(n_iterations.unwrap() >= 1);
    }

    #[test]
    fn test_kmeans_predict() {
        let train_data = Array2::random((500, 16), Uniform::new(-1.0, 1.0));
        let test_data = Array2::random((100, 16), Uniform::new(-1.0, 1.0));

        let mut kmeans = KMeans::new(8);
        kmeans.train(&train_data.view()).unwrap();
        let n_centroids = kmeans.centroids().unwrap().nrows();

        let labels = kmeans.predict(&test_data.view()).unwrap();
        assert_eq!(labels.len(), 100);
        assert!(labels.iter().all(|&label| label < n_centroids));
    }

    #[test]
    fn test_kmeans_fit_predict_matches_predict() {
        let data = array![[5.0, 1.0], [4.0, 2.0], [8.0, 4.0], [9.0, 3.0], [6.0, 5.0], [8.0, 5.0]];
        let mut kmeans = KMeans::new(3);

        let labels = kmeans.fit_predict(&data.view()).unwrap();
        assert_eq!(labels, kmeans.predict(&data.view()).unwrap());
    }

    #[test]
    fn test_kmeans_predict_before_fit() {
        let data = Array2::random((100, 8), Uniform::new(-1.0, 1.0));
        let kmeans = KMeans::new(5);

        let result = kmeans.predict(&data.view());
        assert!(matches!(result, Err(KMeansError::NotFitted)));
    }

    #[test]
    fn test_kmeans_dimension_mismatch() {
        let train_data = Array2::random((100, 8), Uniform::new(-1.0, 1.0));
        let test_data = Array2::random((50, 16), Uniform::new(-1.0, 1.0));

        let mut kmeans = KMeans::new(5);
        kmeans.train(&train_data.view()).unwrap();

        let result = kmeans.predict(&test_data.view());
        assert!(matches!(result, Err(KMeansError::DimensionMismatch(_))));

        let result = kmeans.train(&test_data.view());
        assert!(matches!(result, Err(KMeansError::DimensionMismatch(_))));
    }

    #[test]
    fn test_kmeans_k_zero() {
        let data = Array2::random((10, 2), Uniform::new(-1.0, 1.0));
        let mut kmeans = KMeans::new(0);

        let result = kmeans.train(&data.view());
        assert!(matches!(result, Err(KMeansError::InvalidInput(_))));
        assert!(kmeans.centroids().is_none());
    }
}
