//! Seeded synthetic workloads.
//!
//! Generates call batches, catalogs and loan request batches for
//! benchmarks and property tests. The same seed always yields the same
//! batch.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::emergency::{EmergencyCall, Subtask};
use crate::library::{Book, Catalog, LoanRequest};

const CATEGORIES: [&str; 4] = ["medical", "fire", "police", "rescue"];
const LOCATIONS: [&str; 5] = ["north", "south", "east", "west", "center"];
const RESOURCES: [&str; 4] = ["ambulance", "engine", "patrol", "crew"];

/// Workload generation parameters.
///
/// # Examples
///
/// ```
/// use u_dispatch::workload::WorkloadConfig;
///
/// let config = WorkloadConfig::default().with_seed(7).with_max_subtask_depth(2);
/// let calls = config.calls(10);
/// assert_eq!(calls.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Random seed (None draws one from the thread RNG).
    pub seed: Option<u64>,
    /// Priorities are drawn from `1..=max_priority`.
    pub max_priority: i64,
    /// Maximum nesting of generated subtasks (0 disables subtasks).
    pub max_subtask_depth: usize,
    /// Probability that a generated link or request targets a missing id.
    pub dangling_ratio: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_priority: 5,
            max_subtask_depth: 3,
            dangling_ratio: 0.0,
        }
    }
}

impl WorkloadConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the upper bound of generated priorities.
    pub fn with_max_priority(mut self, max: i64) -> Self {
        self.max_priority = max;
        self
    }

    /// Sets the maximum subtask nesting.
    pub fn with_max_subtask_depth(mut self, depth: usize) -> Self {
        self.max_subtask_depth = depth;
        self
    }

    /// Sets the probability of dangling links and requests.
    pub fn with_dangling_ratio(mut self, ratio: f64) -> Self {
        self.dangling_ratio = ratio;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }

    fn priority<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(1..=self.max_priority.max(1))
    }

    fn dangling<R: Rng>(&self, rng: &mut R) -> bool {
        rng.random_bool(self.dangling_ratio.clamp(0.0, 1.0))
    }

    /// Generates `count` undispatched emergency calls with ids `C00000..`.
    pub fn calls(&self, count: usize) -> Vec<EmergencyCall> {
        let mut rng = self.rng();
        (0..count)
            .map(|i| {
                let priority = self.priority(&mut rng);
                let mut call = EmergencyCall::new(format!("C{i:05}"), priority, instant(&mut rng))
                    .with_category(pick(&mut rng, &CATEGORIES))
                    .with_location(pick(&mut rng, &LOCATIONS))
                    .with_response_time(rng.random_range(1..=60));
                if self.max_subtask_depth > 0 {
                    for _ in 0..rng.random_range(0..=2) {
                        call.subtasks.push(subtask(&mut rng, self.max_subtask_depth));
                    }
                }
                call
            })
            .collect()
    }

    /// Generates a catalog of `count` books with ids `B00000..`.
    pub fn catalog(&self, count: usize) -> Catalog {
        let mut rng = self.rng();
        (0..count)
            .map(|i| {
                let mut book = Book::new(
                    format!("B{i:05}"),
                    format!("Title {}", rng.random_range(0..count.max(1))),
                    rng.random_range(1900..=2024),
                )
                .with_copies(rng.random_range(0..=4))
                .with_popularity(rng.random_range(0..=100));
                for _ in 0..rng.random_range(0..=3) {
                    let target = if self.dangling(&mut rng) {
                        format!("X{}", rng.random_range(0..1000))
                    } else {
                        format!("B{:05}", rng.random_range(0..count.max(1)))
                    };
                    book = book.with_recommendation(target);
                }
                book
            })
            .collect()
    }

    /// Generates `count` loan requests against books `B00000..B{books}`.
    pub fn requests(&self, count: usize, books: usize) -> Vec<LoanRequest> {
        let mut rng = self.rng();
        (0..count)
            .map(|i| {
                let book_id = if self.dangling(&mut rng) {
                    format!("X{}", rng.random_range(0..1000))
                } else {
                    format!("B{:05}", rng.random_range(0..books.max(1)))
                };
                LoanRequest::new(
                    format!("S{i:05}"),
                    format!("U{}", rng.random_range(0..100)),
                    book_id,
                    self.priority(&mut rng),
                    instant(&mut rng),
                )
            })
            .collect()
    }
}

fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}

// Within one day of the epoch, second resolution.
fn instant<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    DateTime::<Utc>::default() + Duration::seconds(rng.random_range(0..86_400))
}

fn subtask<R: Rng>(rng: &mut R, depth: usize) -> Subtask {
    let mut node = Subtask::new(pick(rng, &CATEGORIES), pick(rng, &RESOURCES));
    if depth > 1 {
        for _ in 0..rng.random_range(0..=2) {
            node.subtasks.push(subtask(rng, depth - 1));
        }
    }
    node
}
