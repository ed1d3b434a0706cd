use std::collections::HashSet;

use serde::Serialize;

/// A matched identity: two expression texts sharing one value.
///
/// The stored value is the left-hand side's; both sides agree within the
/// search tolerance by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equation {
    pub left: String,
    pub right: String,
    pub value: f64,
}

/// The outcome of one search: the extracted digits and the deduplicated
/// equations in generation order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub digits: Vec<u8>,
    pub equations: Vec<Equation>,
}

impl SearchResult {
    pub fn new(digits: Vec<u8>, raw: Vec<Equation>) -> Self {
        Self {
            digits,
            equations: dedup_equations(raw),
        }
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}

/// Remove repeated (left, right) pairs, keeping the first value seen
pub fn dedup_equations(equations: Vec<Equation>) -> Vec<Equation> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    equations
        .into_iter()
        .filter(|eq| seen.insert((eq.left.clone(), eq.right.clone())))
        .collect()
}

/// Presentation orderings; the core itself keeps generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    ValueAscending,
    ValueDescending,
    LengthAscending,
    LengthDescending,
    Alphabetical,
    Insertion,
}

pub fn sort_equations(equations: &mut [Equation], policy: SortPolicy) {
    match policy {
        SortPolicy::ValueAscending => {
            equations.sort_by(|a, b| a.value.total_cmp(&b.value));
        }
        SortPolicy::ValueDescending => {
            equations.sort_by(|a, b| b.value.total_cmp(&a.value));
        }
        SortPolicy::LengthAscending => {
            equations.sort_by(|a, b| {
                combined_len(a)
                    .cmp(&combined_len(b))
                    .then(a.value.total_cmp(&b.value))
            });
        }
        SortPolicy::LengthDescending => {
            equations.sort_by(|a, b| {
                combined_len(b)
                    .cmp(&combined_len(a))
                    .then(b.value.total_cmp(&a.value))
            });
        }
        SortPolicy::Alphabetical => {
            equations.sort_by(|a, b| a.left.cmp(&b.left).then_with(|| a.right.cmp(&b.right)));
        }
        SortPolicy::Insertion => {}
    }
}

fn combined_len(eq: &Equation) -> usize {
    eq.left.len() + eq.right.len()
}
