use crate::Utility;

/// Dense row-major payoff matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Utility>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<Utility>) -> Self {
        assert!(rows * cols == data.len(), "{}x{} != {}", rows, cols, data.len());
        Self { rows, cols, data }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, i: usize, j: usize) -> Utility {
        self.data[i * self.cols + j]
    }
    pub fn row(&self, i: usize) -> &[Utility] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    pub fn col(&self, j: usize) -> impl Iterator<Item = Utility> + '_ {
        (0..self.rows).map(move |i| self.get(i, j))
    }
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|j| self.col(j))
            .collect::<Vec<Utility>>();
        Self::new(self.cols, self.rows, data)
    }
    pub fn min(&self) -> Utility {
        self.data.iter().copied().fold(Utility::INFINITY, Utility::min)
    }
    /// shift every entry by the same constant so the smallest becomes 1.
    /// best responses are invariant under this, and the polytope
    /// algorithms need strictly positive payoffs.
    pub fn positive(&self) -> Self {
        let min = self.min();
        match min > 0. {
            true => self.clone(),
            false => Self::new(
                self.rows,
                self.cols,
                self.data.iter().map(|u| u - min + 1.).collect(),
            ),
        }
    }
    /// multiply every entry by `factor`
    pub fn scaled(&self, factor: Utility) -> Self {
        Self::new(
            self.rows,
            self.cols,
            self.data.iter().map(|u| u * factor).collect(),
        )
    }
    /// positive affine map onto [1, 2]. a constant matrix maps to all ones.
    /// entries are first divided by the largest magnitude so the range
    /// cannot overflow.
    pub fn normalized(&self) -> Self {
        let magnitude = self.data.iter().fold(0., |m: Utility, u| m.max(u.abs()));
        if magnitude == 0. {
            return Self::new(self.rows, self.cols, vec![1.; self.data.len()]);
        }
        let bounded = self
            .data
            .iter()
            .map(|u| u / magnitude)
            .collect::<Vec<Utility>>();
        let lo = bounded.iter().copied().fold(Utility::INFINITY, Utility::min);
        let hi = bounded.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
        let range = hi - lo;
        let data = match range > 0. {
            true => bounded.iter().map(|u| (u - lo) / range + 1.).collect(),
            false => vec![1.; self.data.len()],
        };
        Self::new(self.rows, self.cols, data)
    }
    /// expected payoff of each row against a mixture over columns
    pub fn dot(&self, mixture: &[Utility]) -> Vec<Utility> {
        (0..self.rows)
            .map(|i| self.row(i).iter().zip(mixture).map(|(u, p)| u * p).sum())
            .collect()
    }
}

impl From<Vec<Vec<Utility>>> for Matrix {
    fn from(rows: Vec<Vec<Utility>>) -> Self {
        let m = rows.len();
        let n = rows.first().map(Vec::len).unwrap_or_default();
        assert!(rows.iter().all(|r| r.len() == n), "ragged matrix");
        Self::new(m, n, rows.into_iter().flatten().collect())
    }
}
