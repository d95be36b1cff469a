//! Binary for clustering a matrix stored in a .npy file
//!
//! Reads an `f64` matrix (one point per row) from a .npy file, runs k-means,
//! and saves the cluster index of every row to another .npy file as `u64`.
//!
//! Usage: `cluster-npy <input.npy> <output.npy> <k> <seed> <max_iters>`

use ndarray::{Array1, Array2};
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stablekmeans_rs::{k_means_with_rng, KMeansConfig};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 6 {
        eprintln!(
            "Usage: {} <input.npy> <output.npy> <k> <seed> <max_iters>",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];
    let k: usize = args[3].parse()?;
    let seed: u64 = args[4].parse()?;
    let max_iters: usize = args[5].parse()?;

    let reader = BufReader::new(File::open(input_path)?);
    let data: Array2<f64> = Array2::read_npy(reader)?;

    eprintln!(
        "Loaded data: {} samples x {} features",
        data.nrows(),
        data.ncols()
    );
    eprintln!(
        "Running k-means with k={}, seed={}, max_iters={}",
        k, seed, max_iters
    );

    let config = KMeansConfig::new(k)
        .with_seed(seed)
        .with_max_iters(max_iters);
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let result = k_means_with_rng(&data.view(), &config, &mut rng)?;

    eprintln!(
        "{} after {} iterations: {} clusters, inertia {:.6}",
        if result.converged {
            "Converged"
        } else {
            "Stopped"
        },
        result.n_iterations,
        result.centroids.nrows(),
        result.inertia
    );

    let labels: Array1<u64> = result.labels.mapv(|label| label as u64);
    let writer = BufWriter::new(File::create(output_path)?);
    labels.write_npy(writer)?;

    eprintln!("Saved labels to {}", output_path);

    Ok(())
}
