use crate::PIVOT_TOLERANCE;
use crate::payoff::Matrix;
use std::cmp::Ordering;
use std::ops::Range;

/// Dictionary for one best-response polytope during complementary pivoting.
///
/// Columns are labels `0..m + n` followed by the right-hand side; each row
/// tracks which label is basic in it. The slack columns double as the
/// lexicon that breaks ties in the ratio test.
#[derive(Debug, Clone)]
pub struct Tableau {
    rows: Vec<Vec<f64>>,
    basis: Vec<usize>,
    lexicon: Range<usize>,
}

impl Tableau {
    /// `B^T x + s = 1` over positive `B`: `x` takes labels `0..m`,
    /// the slacks take `m..m + n` and start basic.
    pub fn row(b: &Matrix) -> Self {
        let (m, n) = (b.rows(), b.cols());
        let rows = (0..n)
            .map(|j| {
                let mut row = vec![0.; m + n + 1];
                for (i, u) in b.col(j).enumerate() {
                    row[i] = u;
                }
                row[m + j] = 1.;
                row[m + n] = 1.;
                row
            })
            .collect();
        Self {
            rows,
            basis: (m..m + n).collect(),
            lexicon: m..m + n,
        }
    }

    /// `s + A y = 1` over positive `A`: the slacks take labels `0..m`
    /// and start basic, `y` takes `m..m + n`.
    pub fn col(a: &Matrix) -> Self {
        let (m, n) = (a.rows(), a.cols());
        let rows = (0..m)
            .map(|i| {
                let mut row = vec![0.; m + n + 1];
                row[i] = 1.;
                for (j, u) in a.row(i).iter().enumerate() {
                    row[m + j] = *u;
                }
                row[m + n] = 1.;
                row
            })
            .collect();
        Self {
            rows,
            basis: (0..m).collect(),
            lexicon: 0..m,
        }
    }

    fn labels(&self) -> usize {
        self.rows.first().map(|r| r.len() - 1).unwrap_or_default()
    }

    pub fn nonbasic(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.labels()).filter(|l| !self.basis.contains(l))
    }

    /// current value of a label's variable; zero unless basic
    pub fn value(&self, label: usize) -> f64 {
        let rhs = self.labels();
        self.basis
            .iter()
            .position(|b| *b == label)
            .map(|r| self.rows[r][rhs])
            .unwrap_or(0.)
    }

    /// (rhs, lexicon...) scaled by the entering coefficient
    fn ratio(&self, r: usize, column: usize) -> Vec<f64> {
        let row = &self.rows[r];
        let a = row[column];
        std::iter::once(row[self.labels()])
            .chain(self.lexicon.clone().map(|l| row[l]))
            .map(|v| v / a)
            .collect()
    }

    fn lexicographic(u: &[f64], v: &[f64]) -> Ordering {
        u.iter()
            .zip(v)
            .find(|(a, b)| (*a - *b).abs() > PIVOT_TOLERANCE)
            .map(|(a, b)| a.total_cmp(b))
            .unwrap_or(Ordering::Equal)
    }

    /// bring `label` into the basis by the lexicographic minimum ratio
    /// test and return the label that leaves. `None` if unbounded.
    pub fn pivot(&mut self, label: usize) -> Option<usize> {
        let r = (0..self.rows.len())
            .filter(|&r| self.rows[r][label] > PIVOT_TOLERANCE)
            .map(|r| (r, self.ratio(r, label)))
            .min_by(|(_, u), (_, v)| Self::lexicographic(u, v))
            .map(|(r, _)| r)?;
        let a = self.rows[r][label];
        self.rows[r].iter_mut().for_each(|v| *v /= a);
        let pivot = self.rows[r].clone();
        for (k, row) in self.rows.iter_mut().enumerate() {
            let factor = row[label];
            if k == r || factor == 0. {
                continue;
            }
            row.iter_mut().zip(&pivot).for_each(|(v, p)| *v -= factor * p);
        }
        Some(std::mem::replace(&mut self.basis[r], label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive() -> Matrix {
        Matrix::from(vec![vec![3., 1.], vec![2., 4.]])
    }

    #[test]
    fn initial() {
        let row = Tableau::row(&positive());
        let col = Tableau::col(&positive());
        assert_eq!(row.nonbasic().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(col.nonbasic().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(row.value(2), 1.);
        assert_eq!(row.value(0), 0.);
    }

    #[test]
    fn ratio() {
        // x_0 enters; rows are 3 x_0 + 2 x_1 + s_2 = 1 and x_0 + 4 x_1 + s_3 = 1
        let mut row = Tableau::row(&positive());
        assert_eq!(row.pivot(0), Some(2));
        assert!((row.value(0) - 1. / 3.).abs() < 1e-12);
        assert!((row.value(3) - 2. / 3.).abs() < 1e-12);
        assert_eq!(row.nonbasic().collect::<Vec<_>>(), vec![1, 2]);
    }
}
