use super::Matrix;
use crate::Arbitrary;
use crate::Utility;
use crate::game::*;
use crate::validation::StructuralError;
use rand::Rng;
use std::collections::BTreeMap;

/// The pair `(A, B)` of payoff matrices.
///
/// Both are indexed `(row player action, column player action)`:
/// the column player's own table is transposed on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct Bimatrix {
    a: Matrix,
    b: Matrix,
}

impl Bimatrix {
    pub fn new(a: Matrix, b: Matrix) -> Self {
        assert!(a.rows() == b.rows() && a.cols() == b.cols(), "misaligned payoffs");
        Self { a, b }
    }
    /// row player's payoffs
    pub fn a(&self) -> &Matrix {
        &self.a
    }
    /// column player's payoffs
    pub fn b(&self) -> &Matrix {
        &self.b
    }
    /// (row actions, column actions)
    pub fn shape(&self) -> (usize, usize) {
        (self.a.rows(), self.a.cols())
    }

    /// each player's payoffs mapped onto [1, 2] by its own positive affine
    /// map. best responses, and so equilibria, are unchanged, while the
    /// solvers' absolute tolerances see a fixed payoff scale.
    pub fn normalized(&self) -> Self {
        Self::new(self.a.normalized(), self.b.normalized())
    }

    /// lay out each player's table as own actions by opponent actions,
    /// both in declared order, then transpose the second.
    pub fn build(players: &[Player]) -> Result<Self, StructuralError> {
        let [row, col] = players else {
            return Err(StructuralError::PlayerCount(players.len()));
        };
        let a = Self::table(row, col)?;
        let b = Self::table(col, row)?.transpose();
        log::trace!("built {}x{} bimatrix", a.rows(), a.cols());
        Ok(Self::new(a, b))
    }

    fn table(player: &Player, opponent: &Player) -> Result<Matrix, StructuralError> {
        let data = player
            .actions()
            .iter()
            .flat_map(|action| opponent.actions().iter().map(move |response| (action, response)))
            .map(|(action, response)| {
                player
                    .utilities()
                    .utility(action, response)
                    .ok_or_else(|| StructuralError::MissingUtility {
                        player: player.name().to_string(),
                        action: action.clone(),
                        response: response.clone(),
                    })
            })
            .collect::<Result<Vec<Utility>, _>>()?;
        Ok(Matrix::new(
            player.actions().len(),
            opponent.actions().len(),
            data,
        ))
    }

    /// random real-valued payoffs in [-10, 10) on a 2..=4 by 2..=4 grid.
    /// ties have probability zero, so the game is non-degenerate.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let m = rng.random_range(2..=4);
        let n = rng.random_range(2..=4);
        let draw = |rng: &mut R| {
            let data = (0..m * n)
                .map(|_| rng.random_range(-10.0..10.0))
                .collect::<Vec<Utility>>();
            Matrix::new(m, n, data)
        };
        let a = draw(&mut *rng);
        let b = draw(&mut *rng);
        Self::new(a, b)
    }
}

impl TryFrom<&Game> for Bimatrix {
    type Error = StructuralError;
    fn try_from(game: &Game) -> Result<Self, Self::Error> {
        Self::build(game.players())
    }
}

impl Arbitrary for Bimatrix {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

/// a game document for bare matrices, with players
/// "Row" and "Col" and actions "r0.." and "c0..".
impl From<&Bimatrix> for Game {
    fn from(bimatrix: &Bimatrix) -> Self {
        let (m, n) = bimatrix.shape();
        let rows = (0..m).map(|i| format!("r{}", i)).collect::<Vec<_>>();
        let cols = (0..n).map(|j| format!("c{}", j)).collect::<Vec<_>>();
        let table = |own: &[String], other: &[String], utility: &dyn Fn(usize, usize) -> Utility| {
            own.iter()
                .enumerate()
                .map(|(x, action)| {
                    let row = other
                        .iter()
                        .enumerate()
                        .map(|(y, response)| {
                            (response.clone(), Entry::new(String::new(), utility(x, y)))
                        })
                        .collect::<BTreeMap<_, _>>();
                    (action.clone(), row)
                })
                .collect::<BTreeMap<_, _>>()
        };
        let u1 = table(&rows, &cols, &|i, j| bimatrix.a().get(i, j));
        let u2 = table(&cols, &rows, &|j, i| bimatrix.b().get(i, j));
        Game::new([
            Player::new("Row".to_string(), rows, Table::from(u1)),
            Player::new("Col".to_string(), cols, Table::from(u2)),
        ])
    }
}
