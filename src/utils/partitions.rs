use std::collections::HashSet;

use log::debug;

/// Widest group a partition may contain, in digits
pub const MAX_GROUP_WIDTH: usize = 4;
/// Largest numeric value a single group may take
pub const MAX_GROUP_VALUE: u32 = 9999;
/// Upper bound on the configurable group count
pub const MAX_GROUPS_LIMIT: usize = 6;

const MIN_GROUPS: usize = 2;

/// One number in a partition, together with the width it occupies in the
/// digit sequence. Width is tracked separately so groups with leading zeros
/// ("05" -> value 5, width 2) still reproduce the original digit string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pub value: u32,
    pub width: usize,
}

impl Group {
    /// Factorial tokenization is offered for single-digit values only.
    pub fn is_single_digit(&self) -> bool {
        self.value <= 9
    }
}

/// An ordered grouping of the full digit sequence into numbers
pub type Partition = Vec<Group>;

fn group_value(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}

fn partition_from_widths(digits: &[u8], widths: &[usize]) -> Option<Partition> {
    let mut groups = Vec::with_capacity(widths.len());
    let mut pos = 0;
    for &width in widths {
        let chunk = digits.get(pos..pos + width)?;
        groups.push(Group {
            value: group_value(chunk),
            width,
        });
        pos += width;
    }
    (pos == digits.len()).then_some(groups)
}

/// Hand-authored date-shaped splits for 8-digit inputs (DD-MM-YYYY and kin)
const DATE_SHAPED_WIDTHS: [&[usize]; 3] = [&[2, 2, 4], &[1, 2, 2, 3], &[1, 3, 4]];

/// Generate every way to regroup the digit sequence into consecutive numbers
/// of 1-4 digits, bounded by `max_groups` (clamped to 2..=6).
///
/// The trivial all-single-digit partition is always included, even when it has
/// more than `max_groups` groups, and 8-digit inputs additionally get a small
/// fixed set of date-shaped splits. Output is deduplicated and ordered by
/// group count ascending, preferring partitions with more multi-digit groups;
/// callers may rely only on the order being deterministic for equal input.
///
/// This uses an iterative approach to avoid stack overflow with long inputs.
pub fn generate_partitions(digits: &[u8], max_groups: usize) -> Vec<Partition> {
    let max_groups = max_groups.clamp(MIN_GROUPS, MAX_GROUPS_LIMIT);
    let len = digits.len();
    debug!(
        "Generating partitions of {} digits with at most {} groups",
        len, max_groups
    );

    let mut partitions: Vec<Partition> = Vec::new();

    let mut stack: Vec<(usize, Partition)> = vec![(0, Vec::new())];
    while let Some((pos, groups)) = stack.pop() {
        if pos == len {
            if groups.len() >= MIN_GROUPS {
                partitions.push(groups);
            }
            continue;
        }

        let max_width = MAX_GROUP_WIDTH.min(len - pos);
        for width in 1..=max_width {
            let used = groups.len() + 1;
            let remaining = len - pos - width;

            // Prune branches that cannot consume the remaining digits within
            // the allowed group count.
            if remaining > 0 && used >= max_groups {
                continue;
            }
            if remaining > max_groups.saturating_sub(used) * MAX_GROUP_WIDTH {
                continue;
            }

            let value = group_value(&digits[pos..pos + width]);
            if value > MAX_GROUP_VALUE {
                continue;
            }

            let mut next = groups.clone();
            next.push(Group { value, width });
            stack.push((pos + width, next));
        }
    }

    // The all-single-digit partition is kept regardless of max_groups.
    partitions.push(
        digits
            .iter()
            .map(|&d| Group {
                value: u32::from(d),
                width: 1,
            })
            .collect(),
    );

    if len == 8 {
        for widths in DATE_SHAPED_WIDTHS {
            if let Some(partition) = partition_from_widths(digits, widths) {
                partitions.push(partition);
            }
        }
    }

    let mut seen: HashSet<Partition> = HashSet::new();
    let mut unique: Vec<Partition> = partitions
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect();

    unique.sort_by(|a, b| {
        let a_multi = a.iter().filter(|g| g.value > 9).count();
        let b_multi = b.iter().filter(|g| g.value > 9).count();
        a.len().cmp(&b.len()).then(b_multi.cmp(&a_multi))
    });

    debug!("Generated {} unique partitions", unique.len());
    unique
}
