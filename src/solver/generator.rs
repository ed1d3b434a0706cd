use std::collections::HashSet;

use rayon::prelude::*;

use crate::expression::Expression;
use crate::solver::config::{Operator, SearchOptions};
use crate::solver::core::Deadline;
use crate::solver::tokens::token_combinations;
use crate::utils::Group;

/// One surviving candidate: rendered text plus its evaluated value
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub value: f64,
}

/// Every operator sequence of the given length, repetition allowed.
///
/// Grows as |ops|^len; callers bound `len` through the partition group caps.
pub fn operator_sequences(ops: &[Operator], len: usize) -> Vec<Vec<Operator>> {
    let mut sequences = Vec::new();
    let mut stack: Vec<Vec<Operator>> = vec![Vec::new()];

    while let Some(current) = stack.pop() {
        if current.len() == len {
            sequences.push(current);
            continue;
        }

        for &op in ops.iter().rev() {
            let mut next = current.clone();
            next.push(op);
            stack.push(next);
        }
    }

    sequences
}

fn binding_power(op: Operator) -> u8 {
    match op {
        Operator::Add | Operator::Sub => 1,
        Operator::Mul | Operator::Div => 2,
        Operator::Pow => 3,
        // Root never sits on the pending stack; it collapses eagerly.
        Operator::Root => 4,
    }
}

fn is_left_associative(op: Operator) -> bool {
    !matches!(op, Operator::Pow)
}

fn apply_binary(op: Operator, left: Expression, right: Expression) -> Expression {
    let (left, right) = (Box::new(left), Box::new(right));
    match op {
        Operator::Add => Expression::Add(left, right),
        Operator::Sub => Expression::Sub(left, right),
        Operator::Mul => Expression::Mul(left, right),
        Operator::Div => Expression::Div(left, right),
        Operator::Pow => Expression::Pow(left, right),
        Operator::Root => Expression::Root(left, right),
    }
}

fn reduce_once(operands: &mut Vec<Expression>, pending: &mut Vec<Operator>) -> Option<()> {
    let op = pending.pop()?;
    let right = operands.pop()?;
    let left = operands.pop()?;
    operands.push(apply_binary(op, left, right));
    Some(())
}

fn reduce_all(operands: &mut Vec<Expression>, pending: &mut Vec<Operator>) -> Option<()> {
    while !pending.is_empty() {
        reduce_once(operands, pending)?;
    }
    Some(())
}

/// Keep a candidate unless an identical (text, value) pair was already seen
fn keep(
    seen: &mut HashSet<(String, u64)>,
    candidates: &mut Vec<Candidate>,
    candidate: Candidate,
) {
    if seen.insert((candidate.text.clone(), candidate.value.to_bits())) {
        candidates.push(candidate);
    }
}

/// Builds candidate expression trees from token lists and operator sequences
/// under the four grouping strategies.
pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// The tree a parser would produce from the flat infix text: `*` and `/`
    /// bind tighter than `+` and `-`, `^` tighter still and right-associative.
    /// `Root` wraps the whole expression accumulated so far and the result
    /// becomes an atom for whatever follows.
    fn build_natural(tokens: &[Expression], ops: &[Operator]) -> Option<Expression> {
        let mut operands: Vec<Expression> = vec![tokens.first()?.clone()];
        let mut pending: Vec<Operator> = Vec::new();

        for (op, token) in ops.iter().zip(tokens.iter().skip(1)) {
            if *op == Operator::Root {
                reduce_all(&mut operands, &mut pending)?;
                let radicand = operands.pop()?;
                operands.push(Expression::Root(
                    Box::new(radicand),
                    Box::new(token.clone()),
                ));
                continue;
            }

            while let Some(&top) = pending.last() {
                let reduces = binding_power(top) > binding_power(*op)
                    || (binding_power(top) == binding_power(*op) && is_left_associative(*op));
                if !reduces {
                    break;
                }
                reduce_once(&mut operands, &mut pending)?;
            }
            pending.push(*op);
            operands.push(token.clone());
        }

        reduce_all(&mut operands, &mut pending)?;
        operands.pop()
    }

    /// Strict left-to-right fold; every partial result combines directly with
    /// the next operator regardless of precedence.
    fn build_left_folded(tokens: &[Expression], ops: &[Operator]) -> Option<Expression> {
        let mut acc = tokens.first()?.clone();
        for (op, token) in ops.iter().zip(tokens.iter().skip(1)) {
            acc = apply_binary(*op, acc, token.clone());
        }
        Some(acc)
    }

    /// The first two tokens form a unit; the rest chains onto it under
    /// natural precedence.
    fn build_group_first_two(tokens: &[Expression], ops: &[Operator]) -> Option<Expression> {
        let unit = apply_binary(
            *ops.first()?,
            tokens.first()?.clone(),
            tokens.get(1)?.clone(),
        );
        let mut regrouped = vec![unit];
        regrouped.extend_from_slice(tokens.get(2..)?);
        Self::build_natural(&regrouped, ops.get(1..)?)
    }

    /// The final two tokens form a unit; the prefix chains onto it under
    /// natural precedence. Every token is used exactly once.
    fn build_group_last_two(tokens: &[Expression], ops: &[Operator]) -> Option<Expression> {
        let n = tokens.len();
        let unit = apply_binary(
            *ops.last()?,
            tokens.get(n - 2)?.clone(),
            tokens.get(n - 1)?.clone(),
        );
        let mut regrouped = tokens.get(..n - 2)?.to_vec();
        regrouped.push(unit);
        Self::build_natural(&regrouped, ops.get(..ops.len() - 1)?)
    }

    fn strategy_expressions(tokens: &[Expression], ops: &[Operator]) -> Vec<Expression> {
        let mut variants = Vec::with_capacity(4);
        if let Some(expr) = Self::build_natural(tokens, ops) {
            variants.push(expr);
        }
        if let Some(expr) = Self::build_left_folded(tokens, ops) {
            variants.push(expr);
        }
        if tokens.len() >= 3 {
            if let Some(expr) = Self::build_group_first_two(tokens, ops) {
                variants.push(expr);
            }
            if let Some(expr) = Self::build_group_last_two(tokens, ops) {
                variants.push(expr);
            }
        }
        variants
    }

    /// All distinct evaluable expressions over an ordered group list, as
    /// (text, value) candidates deduplicated in generation order.
    pub fn expressions_for_groups(
        groups: &[Group],
        options: &SearchOptions,
        deadline: Option<&Deadline>,
    ) -> Vec<Candidate> {
        let token_sets = token_combinations(groups, options.allow_factorial);

        let mut seen: HashSet<(String, u64)> = HashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        if groups.len() == 1 {
            for tokens in token_sets {
                for expr in tokens {
                    if let Ok(value) = expr.evaluate() {
                        let candidate = Candidate {
                            text: expr.to_string(),
                            value,
                        };
                        keep(&mut seen, &mut candidates, candidate);
                    }
                }
            }
            return candidates;
        }

        let op_sequences =
            operator_sequences(options.operator_set.operators(), groups.len() - 1);

        for tokens in &token_sets {
            if deadline.is_some_and(Deadline::expired) {
                break;
            }

            let batches: Vec<Vec<Candidate>> = op_sequences
                .par_iter()
                .map(|ops| {
                    if deadline.is_some_and(Deadline::expired) {
                        return Vec::new();
                    }
                    let mut local = Vec::new();
                    for expr in Self::strategy_expressions(tokens, ops) {
                        if let Ok(value) = expr.evaluate() {
                            local.push(Candidate {
                                text: expr.to_string(),
                                value,
                            });
                        }
                    }
                    local
                })
                .collect();

            for candidate in batches.into_iter().flatten() {
                keep(&mut seen, &mut candidates, candidate);
            }
        }

        candidates
    }
}
