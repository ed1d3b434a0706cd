use crate::expression::Expression;
use crate::utils::Group;

/// Leaf variants for one group: the plain value, plus its factorial when the
/// value is a single digit and factorial tokens are enabled.
pub fn token_variants(group: &Group, allow_factorial: bool) -> Vec<Expression> {
    let value = Expression::Number(f64::from(group.value));
    let mut variants = vec![value.clone()];
    if allow_factorial && group.is_single_digit() {
        variants.push(Expression::Factorial(Box::new(value)));
    }
    variants
}

/// Cartesian product of token variants across an ordered group list.
///
/// Enumeration order matches nested left-to-right iteration, so the all-plain
/// choice comes first.
pub fn token_combinations(groups: &[Group], allow_factorial: bool) -> Vec<Vec<Expression>> {
    let options: Vec<Vec<Expression>> = groups
        .iter()
        .map(|g| token_variants(g, allow_factorial))
        .collect();

    let mut combinations = Vec::new();
    let mut stack: Vec<(usize, Vec<Expression>)> = vec![(0, Vec::new())];

    while let Some((depth, current)) = stack.pop() {
        if depth == options.len() {
            combinations.push(current);
            continue;
        }

        if let Some(variants) = options.get(depth) {
            // Reverse push keeps LIFO traversal in lexicographic order.
            for variant in variants.iter().rev() {
                let mut next = current.clone();
                next.push(variant.clone());
                stack.push((depth + 1, next));
            }
        }
    }

    combinations
}
