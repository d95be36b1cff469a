//! Basic example demonstrating stablekmeans-rs usage
//!
//! Run with: RUST_LOG=debug cargo run --example basic

use stablekmeans_rs::points::{from_columns, from_points};
use stablekmeans_rs::{k_means, KMeans, KMeansConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== stablekmeans-rs example ===\n");

    // 2 dimensions: 6 points into 3 clusters, built from per-axis columns
    let xs = [5.0, 4.0, 8.0, 9.0, 6.0, 8.0];
    let ys = [1.0, 2.0, 4.0, 3.0, 5.0, 5.0];
    let points_2d = from_columns(&[&xs[..], &ys[..]])?;

    println!("Point set:");
    for point in points_2d.outer_iter() {
        println!("  ({:.1}, {:.1})", point[0], point[1]);
    }
    println!("Result: {:?}\n", k_means(&points_2d.view(), 3)?.to_vec());

    // 5 dimensions: 6 points into 3 clusters
    let points_5d = from_points(&[
        [5.0, 1.0, 1.0, 6.0, 7.0],
        [4.0, 2.0, 8.0, 6.0, 1.0],
        [8.0, 4.0, 1.0, 10.0, 5.0],
        [9.0, 3.0, 7.0, 5.0, 7.0],
        [5.0, 7.0, 5.0, 7.0, 5.0],
        [1.0, 1.0, 1.0, 1.0, 1.0],
    ])?;

    let mut kmeans = KMeans::with_config(KMeansConfig::new(3).with_seed(42));
    let labels = kmeans.fit_predict(&points_5d.view())?;

    println!("5-dimensional result: {:?}", labels.to_vec());
    println!(
        "Converged: {:?} after {:?} iterations, inertia {:.4}",
        kmeans.converged(),
        kmeans.n_iterations(),
        kmeans.inertia().unwrap_or_default()
    );

    if let Some(centroids) = kmeans.centroids() {
        println!("\nLearned centroids:");
        for (i, centroid) in centroids.outer_iter().enumerate() {
            println!("  Centroid {}: {:?}", i, centroid.to_vec());
        }
    }

    // Count samples per cluster
    let n_clusters = kmeans.centroids().map_or(0, |c| c.nrows());
    let mut cluster_counts = vec![0usize; n_clusters];
    for &label in labels.iter() {
        cluster_counts[label] += 1;
    }

    println!("\nCluster distribution:");
    for (i, count) in cluster_counts.iter().enumerate() {
        println!("  Cluster {}: {} samples", i, count);
    }

    println!("\n=== Done! ===");
    Ok(())
}
