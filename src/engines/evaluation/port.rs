use crate::error::Result;

/// The capability the harness drives. Any learning rule plugs in behind it.
///
/// `E` is the encoded symbol type produced by the harness codec.
pub trait PredictorPort<E> {
    fn name(&self) -> &str;

    /// Clears all recurrent or temporal state. Called once before every trial.
    fn reset(&mut self);

    /// Advances one tick and returns the prediction for the next symbol.
    ///
    /// `observed` is `None` when the predictor must run on its own state.
    /// Parameters may only change when `learn` is true.
    fn step(&mut self, observed: Option<&E>, learn: bool) -> Result<E>;
}

impl<E, P: PredictorPort<E> + ?Sized> PredictorPort<E> for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn step(&mut self, observed: Option<&E>, learn: bool) -> Result<E> {
        (**self).step(observed, learn)
    }
}
