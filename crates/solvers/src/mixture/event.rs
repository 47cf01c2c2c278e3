use ndarray::ArrayView1;

/// Emitted by the mixture optimizer after every accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Step size accepted by the line search, as a multiple of the gradient.
    pub step: f64,

    /// Objective value at the new point.
    pub objective: f64,

    /// Servings per ingredient at the new point.
    pub servings: ArrayView1<'a, f64>,
}
