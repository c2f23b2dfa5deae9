use crate::Probability;
use crate::game::Game;
use crate::game::Profile;
use crate::game::Strategy;

/// An equilibrium in matrix coordinates: one mixture per player,
/// indexed by declared action order. Unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    row: Vec<Probability>,
    col: Vec<Probability>,
}

impl Point {
    pub fn new(row: Vec<Probability>, col: Vec<Probability>) -> Self {
        Self { row, col }
    }
    /// rescale unnormalized weights into distributions, clipping the
    /// negative noise pivoting leaves near zero.
    /// `None` if either side carries no mass.
    pub fn normalized(row: Vec<Probability>, col: Vec<Probability>) -> Option<Self> {
        let scale = |w: Vec<Probability>| {
            let w = w.into_iter().map(|p| p.max(0.)).collect::<Vec<Probability>>();
            let total = w.iter().sum::<Probability>();
            (total > crate::SUPPORT_TOLERANCE)
                .then(|| w.into_iter().map(|p| p / total).collect::<Vec<Probability>>())
        };
        Some(Self::new(scale(row)?, scale(col)?))
    }
    pub fn row(&self) -> &[Probability] {
        &self.row
    }
    pub fn col(&self) -> &[Probability] {
        &self.col
    }
}

/// label matrix coordinates with names, rounding to reporting precision
impl From<(&Game, &Point)> for Profile {
    fn from((game, point): (&Game, &Point)) -> Self {
        let strategy = |actions: &[String], weights: &[Probability]| {
            actions
                .iter()
                .cloned()
                .zip(weights.iter().copied().map(crate::round))
                .collect::<Strategy>()
        };
        [
            (game.row(), strategy(game.row().actions(), point.row())),
            (game.col(), strategy(game.col().actions(), point.col())),
        ]
        .into_iter()
        .map(|(player, s)| (player.name().to_string(), s))
        .collect()
    }
}
