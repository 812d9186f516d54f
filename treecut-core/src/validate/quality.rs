//! Adjusted Rand Index and Normalized Mutual Information over two dense
//! labellings of the same vertices.
//!
//! Both scores are invariant under relabelling, so unlike positional
//! agreement they do not depend on the order of clusters or label groups.

/// ARI and NMI computed from two labellings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusteringQualityScore {
    /// Adjusted Rand Index in `[-1.0, 1.0]`.
    pub ari: f64,
    /// Normalized Mutual Information in `[0.0, 1.0]`.
    pub nmi: f64,
}

/// Contingency table between two labellings whose labels are dense indices.
struct Contingency {
    item_count: usize,
    left: Vec<usize>,
    right: Vec<usize>,
    joint: Vec<Vec<usize>>,
}

impl Contingency {
    /// Builds the table. Both slices must have the same length.
    fn new(left: &[usize], right: &[usize]) -> Self {
        let left_labels = left.iter().max().map_or(0, |max| max + 1);
        let right_labels = right.iter().max().map_or(0, |max| max + 1);
        let mut table = Self {
            item_count: left.len(),
            left: vec![0; left_labels],
            right: vec![0; right_labels],
            joint: vec![vec![0; right_labels]; left_labels],
        };
        for (&l, &r) in left.iter().zip(right) {
            table.left[l] += 1;
            table.right[r] += 1;
            table.joint[l][r] += 1;
        }
        table
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.joint.iter().enumerate().flat_map(|(l, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &count)| count > 0)
                .map(move |(r, &count)| (l, r, count))
        })
    }
}

fn comb2(value: usize) -> f64 {
    let as_float = value as f64;
    as_float * (as_float - 1.0) / 2.0
}

fn adjusted_rand_index(table: &Contingency) -> f64 {
    let total = comb2(table.item_count);
    if total == 0.0 {
        return 1.0;
    }
    let pairs: f64 = table.cells().map(|(_, _, count)| comb2(count)).sum();
    let left: f64 = table.left.iter().copied().map(comb2).sum();
    let right: f64 = table.right.iter().copied().map(comb2).sum();

    let expected = left * right / total;
    let denominator = 0.5 * (left + right) - expected;
    if denominator == 0.0 {
        1.0
    } else {
        (pairs - expected) / denominator
    }
}

fn entropy(counts: &[usize], item_count: usize) -> f64 {
    let n = item_count as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let probability = count as f64 / n;
            -probability * probability.ln()
        })
        .sum()
}

fn normalized_mutual_information(table: &Contingency) -> f64 {
    if table.item_count == 0 {
        return 1.0;
    }
    let n = table.item_count as f64;
    let mutual_information: f64 = table
        .cells()
        .map(|(l, r, count)| {
            let joint = count as f64;
            let marginals = table.left[l] as f64 * table.right[r] as f64;
            (joint / n) * (joint * n / marginals).ln()
        })
        .sum();
    let left_entropy = entropy(&table.left, table.item_count);
    let right_entropy = entropy(&table.right, table.item_count);

    match (left_entropy == 0.0, right_entropy == 0.0) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            (mutual_information / (left_entropy * right_entropy).sqrt()).clamp(0.0, 1.0)
        }
    }
}

/// Scores two equal-length dense labellings.
pub(super) fn score(ground_truth: &[usize], predicted: &[usize]) -> ClusteringQualityScore {
    let table = Contingency::new(ground_truth, predicted);
    ClusteringQualityScore {
        ari: adjusted_rand_index(&table),
        nmi: normalized_mutual_information(&table),
    }
}
