/*!
# Random Instance Generators

Builder-style generators for random weighted digraphs, mainly used to create
test and benchmark instances.

The typical workflow is:

1. Create a generator instance (`RandomDigraph::new()`).
2. Set parameters using the builder methods (e.g. `.nodes(n).avg_deg(d)`).
3. Generate a graph via `generate(&mut rng)`.
*/

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Uniform};

use crate::{node::*, repr::AdjGraph};

/// Edge density can be given as a probability or as the average out-degree
/// which is more common in practice
#[derive(Debug, Copy, Clone, Default)]
enum DensityType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a vertex
    AvgDeg(f64),
}

/// Generates a `G(n,p)`-style directed graph where every ordered pair of
/// distinct vertices is connected with probability `p`, independent of each
/// other, and every edge draws its length uniformly from a configured range.
///
/// Self-loops are not generated as they can never lie on a shortest path.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
/// use upaths::gens::RandomDigraph;
///
/// let mut rng = Pcg64Mcg::seed_from_u64(42);
/// let g = RandomDigraph::new()
///     .nodes(20)
///     .avg_deg(3.0)
///     .lengths(1..=10)
///     .generate(&mut rng);
///
/// assert_eq!(g.number_of_nodes(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct RandomDigraph {
    n: u64,
    p: DensityType,
    lengths: RangeInclusive<EdgeLength>,
}

impl Default for RandomDigraph {
    fn default() -> Self {
        Self {
            n: 0,
            p: DensityType::default(),
            lengths: 1..=1,
        }
    }
}

impl RandomDigraph {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `n`
    pub fn nodes(mut self, n: usize) -> Self {
        self.n = n as u64;
        self
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob));
        self.p = DensityType::Prob(prob);
        self
    }

    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `generate`.
    pub fn avg_deg(mut self, deg: f64) -> Self {
        self.p = DensityType::AvgDeg(deg);
        self
    }

    /// Updates the inclusive range edge lengths are drawn from
    pub fn lengths(mut self, lengths: RangeInclusive<EdgeLength>) -> Self {
        assert!(!lengths.is_empty());
        self.lengths = lengths;
        self
    }

    /// Generates a random digraph with the configured parameters
    pub fn generate<R: Rng>(&self, rng: &mut R) -> AdjGraph<EdgeLength> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = match self.p {
            DensityType::NotSet => panic!("Edge density of RandomDigraph was not set!"),
            DensityType::Prob(p) => p,
            DensityType::AvgDeg(d) => {
                let p = d / (self.n - 1).max(1) as f64;
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        };

        let mut graph = AdjGraph::new(self.n as NumNodes);
        if p == 0.0 {
            return graph;
        }

        let coin = Bernoulli::new(p).unwrap();
        let length_gen =
            Uniform::new_inclusive(*self.lengths.start(), *self.lengths.end()).unwrap();

        for u in 0..self.n as NumNodes {
            for v in 0..self.n as NumNodes {
                if u != v && coin.sample(rng) {
                    graph.add_edge(u, v, length_gen.sample(rng));
                }
            }
        }

        graph
    }
}
