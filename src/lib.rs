//! # stablekmeans-rs
//!
//! Lloyd's k-means clustering in Rust, compatible with ndarray.
//!
//! ## Features
//!
//! - **Bounding-box seeding**: initial centers are drawn uniformly inside the
//!   per-dimension extent of the data
//! - **Assignment-stability convergence**: iteration stops when no point
//!   changes cluster, with an iteration cap and optional tolerance
//! - **Injectable randomness**: every run takes an explicit `Rng`, so results
//!   are reproducible from a seed
//! - **ndarray compatible**: datasets are `ArrayView2<f64>`, one point per row
//! - **FAISS/scikit-learn compatible API**: Familiar `train()`, `fit()`, `predict()` interface
//!
//! Clusters that attract no points are dropped rather than reseeded, so a run
//! may end with fewer than `k` clusters.
//!
//! ## Example
//!
//! ```rust
//! use stablekmeans_rs::{k_means, points::from_points};
//!
//! let data = from_points(&[
//!     [5.0, 1.0],
//!     [4.0, 2.0],
//!     [8.0, 4.0],
//!     [9.0, 3.0],
//!     [6.0, 5.0],
//!     [8.0, 5.0],
//! ])
//! .unwrap();
//!
//! let labels = k_means(&data.view(), 3).unwrap();
//! assert_eq!(labels.len(), 6);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use stablekmeans_rs::{k_means_with_rng, KMeansConfig};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let data = Array2::random((5000, 3), Uniform::new(-1.0, 1.0));
//!
//! let config = KMeansConfig {
//!     k: 20,
//!     max_iters: 100,
//!     reassign_tol: 0.001, // Stop once at most 5 points move
//!     seed: 42,
//! };
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
//! let result = k_means_with_rng(&data.view(), &config, &mut rng).unwrap();
//! assert!(result.centroids.nrows() <= 20);
//! ```

mod algorithm;
pub mod bounds;
mod config;
pub mod distance;
mod error;
mod kmeans;
pub mod points;

pub use algorithm::{assign_points, group_centers, k_means, k_means_with_rng, KMeansResult};
pub use bounds::{sample_centers, BoundingBox};
pub use config::KMeansConfig;
pub use error::KMeansError;
pub use kmeans::KMeans;
