//! Cosine-distance k-means with seeded centroid initialisation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use hindsight_text::similarity::cosine;

#[derive(Debug, Clone, PartialEq)]
pub struct KMeansOutcome {
    /// Centroid index per input vector.
    pub assignments: Vec<usize>,
    pub iterations: usize,
    pub converged: bool,
}

/// Cluster `vectors` (all of one length) into at most `k` groups.
///
/// Centroids start as `k` distinct input vectors picked by a `seed`ed shuffle.
/// Each round assigns every vector to the most cosine-similar centroid (lowest
/// index on ties), then moves each centroid to the mean of its members; a
/// centroid that lost all members stays where it was. Stops when no
/// assignment changes or after `max_iterations` rounds.
///
/// Requires `0 < k <= vectors.len()`.
pub fn kmeans(vectors: &[Vec<f64>], k: usize, max_iterations: usize, seed: u64) -> KMeansOutcome {
    let n = vectors.len();
    let dim = vectors.first().map_or(0, Vec::len);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);
    let mut centroids: Vec<Vec<f64>> = order.iter().take(k).map(|&i| vectors[i].clone()).collect();

    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;

        let mut changed = 0usize;
        for (i, vector) in vectors.iter().enumerate() {
            let nearest = nearest_centroid(vector, &centroids);
            if nearest != assignments[i] {
                assignments[i] = nearest;
                changed += 1;
            }
        }

        if changed == 0 {
            converged = true;
            break;
        }

        let mut sums = vec![vec![0.0f64; dim]; k];
        let mut counts = vec![0usize; k];
        for (vector, &c) in vectors.iter().zip(&assignments) {
            counts[c] += 1;
            for (slot, &w) in sums[c].iter_mut().zip(vector) {
                *slot += w;
            }
        }
        for ((centroid, sum), &count) in centroids.iter_mut().zip(sums).zip(&counts) {
            if count > 0 {
                *centroid = sum.into_iter().map(|s| s / count as f64).collect();
            }
        }

        debug!(iteration = iterations, changed, "k-means round");
    }

    KMeansOutcome {
        assignments,
        iterations,
        converged,
    }
}

fn nearest_centroid(vector: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_similarity = f64::NEG_INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let similarity = cosine(vector, centroid);
        if similarity > best_similarity {
            best_similarity = similarity;
            best = i;
        }
    }
    best
}
