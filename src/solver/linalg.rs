use crate::PIVOT_TOLERANCE;

/// Solve the square system `a z = b` by Gauss-Jordan elimination
/// with partial pivoting. `None` when the system is singular.
pub fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for c in 0..n {
        let p = (c..n).max_by(|&i, &j| a[i][c].abs().total_cmp(&a[j][c].abs()))?;
        if a[p][c].abs() < PIVOT_TOLERANCE {
            return None;
        }
        a.swap(c, p);
        b.swap(c, p);
        let pivot = a[c].clone();
        let rhs = b[c];
        for r in (0..n).filter(|r| *r != c) {
            let factor = a[r][c] / pivot[c];
            if factor == 0. {
                continue;
            }
            for k in c..n {
                a[r][k] -= factor * pivot[k];
            }
            b[r] -= factor * rhs;
        }
    }
    Some((0..n).map(|i| b[i] / a[i][i]).collect())
}

pub fn dot(u: &[f64], v: &[f64]) -> f64 {
    u.iter().zip(v).map(|(a, b)| a * b).sum()
}

/// `n choose k`, saturating instead of overflowing.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}

/// Every `k`-subset of `0..n` in lexicographic order.
pub struct Combinations {
    n: usize,
    next: Option<Vec<usize>>,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            next: (k <= n).then(|| (0..k).collect()),
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let k = current.len();
        let n = self.n;
        if let Some(i) = (0..k).rev().find(|&i| current[i] < n - k + i) {
            let mut successor = current.clone();
            successor[i] += 1;
            for j in i + 1..k {
                successor[j] = successor[j - 1] + 1;
            }
            self.next = Some(successor);
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elimination() {
        let a = vec![vec![0., 2., 1.], vec![1., 1., 0.], vec![2., 0., 3.]];
        let b = vec![7., 3., 11.];
        let z = solve(a, b).unwrap();
        for (got, want) in z.iter().zip([1., 2., 3.]) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn singular() {
        let a = vec![vec![1., 2.], vec![2., 4.]];
        assert_eq!(solve(a, vec![1., 2.]), None);
    }

    #[test]
    fn subsets() {
        let all = Combinations::new(4, 2).collect::<Vec<_>>();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(Combinations::new(3, 0).count(), 1);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn choose() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(8, 4), 70);
        assert_eq!(binomial(2, 3), 0);
        assert!(binomial(200, 100) > crate::VERTEX_BASIS_LIMIT);
    }
}
