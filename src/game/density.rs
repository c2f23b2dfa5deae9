use crate::Probability;

/// generalization of any probability distribution over
/// an arbitrary set of labels.
pub trait Density {
    type S: ?Sized;

    fn density(&self, x: &Self::S) -> Probability;
    fn support(&self) -> impl Iterator<Item = &Self::S>;
}
