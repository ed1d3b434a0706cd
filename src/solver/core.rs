use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::solver::config::SearchOptions;
use crate::solver::generator::{Candidate, ExpressionGenerator};
use crate::solver::results::Equation;
use crate::utils::{Group, generate_partitions};

/// Wall-clock budget shared by all enumeration units of one search
#[derive(Debug, Clone)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }
}

/// Main solver: pairs left- and right-hand expressions over every partition
/// of the digit sequence.
pub struct EquationSolver {
    options: SearchOptions,
}

impl EquationSolver {
    /// Create a solver with default options
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    pub fn with_options(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Search all partitions of `digits` for expression pairs whose values
    /// agree within tolerance. The returned list preserves generation order
    /// and may contain repeated (left, right) pairs across partitions;
    /// deduplication happens when building a `SearchResult`.
    pub fn find_equations(&self, digits: &[u8]) -> Vec<Equation> {
        let deadline = self.options.time_budget.map(Deadline::new);
        let partitions = generate_partitions(digits, self.options.max_groups);
        info!(
            "Searching {} partitions of {} digits",
            partitions.len(),
            digits.len()
        );

        let per_partition: Vec<Vec<Equation>> = partitions
            .par_iter()
            .map(|partition| self.match_partition(partition, deadline.as_ref()))
            .collect();

        let equations: Vec<Equation> = per_partition.into_iter().flatten().collect();
        info!("Found {} raw equations", equations.len());
        equations
    }

    /// Try every split point of one partition
    fn match_partition(&self, partition: &[Group], deadline: Option<&Deadline>) -> Vec<Equation> {
        let mut found = Vec::new();

        for split in 1..partition.len() {
            if deadline.is_some_and(Deadline::expired) {
                debug!("Time budget exhausted, stopping partition early");
                break;
            }

            let left =
                ExpressionGenerator::expressions_for_groups(&partition[..split], &self.options, deadline);
            let right =
                ExpressionGenerator::expressions_for_groups(&partition[split..], &self.options, deadline);

            self.match_sides(&left, &right, &mut found);
        }

        found
    }

    /// Pair left and right candidates whose values agree within tolerance.
    ///
    /// Right-hand values are bucketed by quantized value so matching probes
    /// three buckets instead of scanning the full cross product; every
    /// candidate pair is still confirmed with the exact tolerance test.
    fn match_sides(&self, left: &[Candidate], right: &[Candidate], found: &mut Vec<Equation>) {
        let tolerance = self.options.tolerance;

        let mut buckets: HashMap<i64, Vec<usize>> = HashMap::new();
        for (idx, candidate) in right.iter().enumerate() {
            buckets
                .entry(quantize(candidate.value, tolerance))
                .or_default()
                .push(idx);
        }

        for l in left {
            let key = quantize(l.value, tolerance);

            let mut matches: Vec<usize> = [-1i64, 0, 1]
                .iter()
                .filter_map(|delta| buckets.get(&key.saturating_add(*delta)))
                .flatten()
                .copied()
                .collect();
            matches.sort_unstable();
            matches.dedup();

            for idx in matches {
                if let Some(r) = right.get(idx)
                    && (l.value - r.value).abs() <= tolerance
                {
                    found.push(Equation {
                        left: l.text.clone(),
                        right: r.text.clone(),
                        value: l.value,
                    });
                }
            }
        }
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a value onto a tolerance-wide bucket index; saturates at the i64 range
fn quantize(value: f64, tolerance: f64) -> i64 {
    (value / tolerance) as i64
}
