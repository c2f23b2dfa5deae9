use super::Algorithm;
use super::AlgorithmFailure;
use super::Point;
use super::Solver;
use super::linalg;
use super::linalg::Combinations;
use crate::Probability;
use crate::SUPPORT_PAIR_LIMIT;
use crate::SUPPORT_TOLERANCE;
use crate::Utility;
use crate::payoff::Bimatrix;
use crate::payoff::Matrix;

/// Support enumeration.
///
/// For every pair of equal-size supports, solve for the mixtures that
/// make each player indifferent across its own support, then keep the
/// pair if both mixtures are strictly positive on their supports and
/// neither player can do better outside of them.
pub struct SupportEnumeration;

impl SupportEnumeration {
    /// candidate support pairs, smallest first, then lexicographic
    fn pairs(m: usize, n: usize) -> impl Iterator<Item = (Vec<usize>, Vec<usize>)> {
        (1..=m.min(n)).flat_map(move |k| {
            Combinations::new(m, k)
                .flat_map(move |rows| Combinations::new(n, k).map(move |cols| (rows.clone(), cols)))
        })
    }

    /// sum over k of C(m, k) C(n, k), which is C(m + n, m) - 1
    fn size(m: usize, n: usize) -> usize {
        linalg::binomial(m + n, m).saturating_sub(1)
    }

    /// weights over `mixed` (indices into the payoff's columns) that
    /// leave the opponent indifferent across `indifferent` rows.
    /// the payoff is oriented opponent-actions by mixed-actions.
    fn indifference(
        payoff: &Matrix,
        indifferent: &[usize],
        mixed: &[usize],
    ) -> Option<Vec<Probability>> {
        let k = mixed.len();
        let mut a = indifferent
            .iter()
            .map(|&i| {
                mixed
                    .iter()
                    .map(|&j| payoff.get(i, j))
                    .chain(std::iter::once(-1.))
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<Vec<f64>>>();
        a.push(std::iter::repeat_n(1., k).chain(std::iter::once(0.)).collect());
        let b = std::iter::repeat_n(0., k)
            .chain(std::iter::once(1.))
            .collect::<Vec<f64>>();
        let solution = linalg::solve(a, b)?;
        Some(solution[..k].to_vec())
    }

    /// spread support weights into a full mixture, rejecting any
    /// weight that is not strictly positive.
    fn spread(size: usize, support: &[usize], weights: &[Probability]) -> Option<Vec<Probability>> {
        if weights.iter().any(|w| *w <= SUPPORT_TOLERANCE) {
            return None;
        }
        let mut mixture = vec![0.; size];
        for (&i, &w) in support.iter().zip(weights) {
            mixture[i] = w;
        }
        Some(mixture)
    }

    /// no action outside the support earns more than the best inside it
    fn best_responds(payoffs: &[Utility], support: &[usize]) -> bool {
        let inside = support
            .iter()
            .map(|&i| payoffs[i])
            .fold(Utility::NEG_INFINITY, Utility::max);
        payoffs.iter().all(|u| *u <= inside + SUPPORT_TOLERANCE)
    }

    fn check(bimatrix: &Bimatrix, rows: &[usize], cols: &[usize]) -> Option<Point> {
        let (m, n) = bimatrix.shape();
        let bt = bimatrix.b().transpose();
        let x = Self::indifference(&bt, cols, rows)?;
        let y = Self::indifference(bimatrix.a(), rows, cols)?;
        let x = Self::spread(m, rows, &x)?;
        let y = Self::spread(n, cols, &y)?;
        let row_payoffs = bimatrix.a().dot(&y);
        let col_payoffs = bt.dot(&x);
        (Self::best_responds(&row_payoffs, rows) && Self::best_responds(&col_payoffs, cols))
            .then(|| Point::new(x, y))
    }
}

impl Solver for SupportEnumeration {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Support
    }
    fn solve(&self, bimatrix: &Bimatrix) -> Result<Vec<Point>, AlgorithmFailure> {
        let (m, n) = bimatrix.shape();
        let size = Self::size(m, n);
        if size > SUPPORT_PAIR_LIMIT {
            return Err(AlgorithmFailure::Exhausted {
                size,
                limit: SUPPORT_PAIR_LIMIT,
            });
        }
        let points = Self::pairs(m, n)
            .filter_map(|(rows, cols)| Self::check(bimatrix, &rows, &cols))
            .collect::<Vec<Point>>();
        log::trace!("support enumeration: {} of {} pairs", points.len(), size);
        Ok(points)
    }
}
