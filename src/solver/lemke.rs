use super::Algorithm;
use super::AlgorithmFailure;
use super::Point;
use super::Solver;
use super::tableau::Tableau;
use crate::LEMKE_PIVOT_LIMIT;
use crate::payoff::Bimatrix;
use std::collections::BTreeSet;

/// Lemke-Howson complementary pivoting.
///
/// Starting from the artificial equilibrium at the origin, drop one label
/// and alternate pivots between the two tableaux, entering whichever label
/// just left the other one, until every label is present again. Each
/// dropped label leads to one equilibrium; running every label collects
/// several, possibly repeated.
pub struct LemkeHowson;

impl LemkeHowson {
    /// follow the path that starts by dropping `label`
    pub fn path(bimatrix: &Bimatrix, label: usize) -> Result<Point, AlgorithmFailure> {
        let (m, n) = bimatrix.shape();
        let mut row = Tableau::row(&bimatrix.b().positive());
        let mut col = Tableau::col(&bimatrix.a().positive());
        let mut entering = label;
        let mut turn = label < m;
        for pivots in 0..LEMKE_PIVOT_LIMIT {
            let tableau = match turn {
                true => &mut row,
                false => &mut col,
            };
            entering = tableau
                .pivot(entering)
                .ok_or(AlgorithmFailure::Unbounded { label })?;
            turn = !turn;
            if Self::complete(&row, &col, m + n) {
                log::trace!("label {} reached equilibrium in {} pivots", label, pivots + 1);
                let x = (0..m).map(|i| row.value(i)).collect();
                let y = (m..m + n).map(|j| col.value(j)).collect();
                return Point::normalized(x, y).ok_or(AlgorithmFailure::Vanishing { label });
            }
        }
        Err(AlgorithmFailure::Cycling {
            label,
            pivots: LEMKE_PIVOT_LIMIT,
        })
    }

    /// every label is nonbasic in at least one tableau
    fn complete(row: &Tableau, col: &Tableau, labels: usize) -> bool {
        row.nonbasic()
            .chain(col.nonbasic())
            .collect::<BTreeSet<usize>>()
            .len()
            == labels
    }
}

impl Solver for LemkeHowson {
    fn algorithm(&self) -> Algorithm {
        Algorithm::LemkeHowson
    }
    fn solve(&self, bimatrix: &Bimatrix) -> Result<Vec<Point>, AlgorithmFailure> {
        let (m, n) = bimatrix.shape();
        (0..m + n).map(|label| Self::path(bimatrix, label)).collect()
    }
}
