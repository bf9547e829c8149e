//! Longest-common-subsequence table and the backtrack that turns it into an
//! edit script.

/// (M+1)x(N+1) table of LCS lengths, stored row-major in one buffer.
///
/// Cell `(i, j)` holds the LCS length of the first `i` tokens of `a` and the
/// first `j` tokens of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Build the table over two token sequences in O(M*N) time and space
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let cols = b.len() + 1;
        let mut cells = vec![0usize; (a.len() + 1) * cols];

        for i in 1..=a.len() {
            for j in 1..=b.len() {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { cols, cells }
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of the full inputs
    pub fn lcs_len(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}

/// Number of cells a table over sequences of these lengths would hold
pub fn table_cells(a_len: usize, b_len: usize) -> usize {
    a_len.saturating_add(1).saturating_mul(b_len.saturating_add(1))
}

/// Length of the common trailing run of two sequences.
///
/// The backtrack always walks such a run diagonally, so it can be emitted
/// without building table cells for it.
pub(crate) fn common_suffix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// One step of an edit script, with 1-based positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Unchanged { old: usize, new: usize },
    Add { new: usize },
    Remove { old: usize },
}

/// Cell count of the table [`edit_script`] would allocate for these inputs
pub(crate) fn trimmed_table_cells<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let suffix = common_suffix_len(a, b);
    table_cells(a.len() - suffix, b.len() - suffix)
}

/// Compute the edit script turning `a` into `b`, in document order.
///
/// On a mismatch an addition is preferred whenever the left cell is at least
/// the upper one; that ordering is observable and must stay stable.
pub(crate) fn edit_script<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Step> {
    let suffix = common_suffix_len(a, b);
    let (m, n) = (a.len() - suffix, b.len() - suffix);

    let mut steps = Vec::with_capacity(a.len().max(b.len()));

    // Built tail-to-head, reversed at the end.
    for k in (0..suffix).rev() {
        steps.push(Step::Unchanged {
            old: m + k + 1,
            new: n + k + 1,
        });
    }

    let table = LcsTable::build(&a[..m], &b[..n]);
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            steps.push(Step::Unchanged { old: i, new: j });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            steps.push(Step::Add { new: j });
            j -= 1;
        } else {
            steps.push(Step::Remove { old: i });
            i -= 1;
        }
    }

    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backtrack over the full table, without peeling the shared tail
    fn untrimmed_script<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Step> {
        let table = LcsTable::build(a, b);
        let (mut i, mut j) = (a.len(), b.len());
        let mut steps = Vec::new();
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                steps.push(Step::Unchanged { old: i, new: j });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                steps.push(Step::Add { new: j });
                j -= 1;
            } else {
                steps.push(Step::Remove { old: i });
                i -= 1;
            }
        }
        steps.reverse();
        steps
    }

    #[test]
    fn test_table_values() {
        let a = ["a", "b", "c", "b"];
        let b = ["b", "c", "b", "a"];
        let table = LcsTable::build(&a, &b);

        assert_eq!(table.rows(), 5);
        assert_eq!(table.cols(), 5);
        assert_eq!(table.get(0, 3), 0);
        assert_eq!(table.get(3, 0), 0);
        assert_eq!(table.get(1, 4), 1);
        assert_eq!(table.get(3, 2), 2);
        assert_eq!(table.lcs_len(), 3);
    }

    #[test]
    fn test_table_empty_inputs() {
        let empty: [&str; 0] = [];
        let table = LcsTable::build(&empty, &["x", "y"]);
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.lcs_len(), 0);

        let table = LcsTable::build(&empty, &empty);
        assert_eq!(table.lcs_len(), 0);
    }

    #[test]
    fn test_table_cells_saturates() {
        assert_eq!(table_cells(0, 0), 1);
        assert_eq!(table_cells(2, 3), 12);
        assert_eq!(table_cells(usize::MAX, 2), usize::MAX);
    }

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(common_suffix_len(&["a", "b", "c"], &["x", "b", "c"]), 2);
        assert_eq!(common_suffix_len(&["a"], &["b"]), 0);
        assert_eq!(common_suffix_len(&["a", "b"], &["a", "b"]), 2);
        assert_eq!(common_suffix_len::<&str>(&[], &["a"]), 0);
    }

    #[test]
    fn test_ties_prefer_addition() {
        let steps = edit_script(&["a"], &["b"]);
        assert_eq!(steps, vec![Step::Remove { old: 1 }, Step::Add { new: 1 }]);

        let steps = edit_script(&["x", "y"], &["y", "x"]);
        assert_eq!(
            steps,
            vec![
                Step::Remove { old: 1 },
                Step::Unchanged { old: 2, new: 1 },
                Step::Add { new: 2 },
            ]
        );
    }

    #[test]
    fn test_suffix_trimming_matches_full_backtrack() {
        let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
            (vec!["a", "b", "c", "d"], vec!["x", "b", "c", "d"]),
            (vec!["a", "a", "a"], vec!["a", "a"]),
            (vec!["a"], vec!["a", "a", "a"]),
            (vec!["p", "q", "z", "z"], vec!["q", "p", "z", "z"]),
            (vec!["", "t"], vec!["t"]),
            (vec!["k", "k", "m", "k"], vec!["m", "k", "k"]),
        ];

        for (a, b) in cases {
            assert_eq!(
                edit_script(&a, &b),
                untrimmed_script(&a, &b),
                "mismatch for {:?} -> {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_trimmed_table_cells() {
        let a = ["a", "b", "c"];
        let b = ["x", "b", "c"];
        assert_eq!(trimmed_table_cells(&a, &b), 4);
        assert_eq!(trimmed_table_cells(&a, &a), 1);
    }
}
