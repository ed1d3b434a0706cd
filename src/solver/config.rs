use std::time::Duration;

use crate::solver::constants::{DEFAULT_MAX_GROUPS, DEFAULT_TOLERANCE};

/// A binary operator usable between two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Root,
}

/// Which operators the generator may place between operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorSet {
    /// `+ - * /` only
    Basic,
    /// `+ - * /` plus exponentiation and n-th roots
    #[default]
    Extended,
}

impl OperatorSet {
    pub fn operators(self) -> &'static [Operator] {
        match self {
            OperatorSet::Basic => &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div],
            OperatorSet::Extended => &[
                Operator::Add,
                Operator::Sub,
                Operator::Mul,
                Operator::Div,
                Operator::Pow,
                Operator::Root,
            ],
        }
    }
}

/// Knobs for a single equation search
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub operator_set: OperatorSet,
    /// Offer `fact(d)` as an alternative token for single-digit operands
    pub allow_factorial: bool,
    /// Maximum partition group count, clamped to 2..=6
    pub max_groups: usize,
    /// Two sides match when their values differ by at most this much
    pub tolerance: f64,
    /// Optional wall-clock budget; enumeration stops once exceeded and the
    /// (possibly truncated) results collected so far are returned
    pub time_budget: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            operator_set: OperatorSet::default(),
            allow_factorial: true,
            max_groups: DEFAULT_MAX_GROUPS,
            tolerance: DEFAULT_TOLERANCE,
            time_budget: None,
        }
    }
}
