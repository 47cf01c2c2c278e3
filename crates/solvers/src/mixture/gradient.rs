use ndarray::{Array1, ArrayView1};

use super::Problem;

impl Problem {
    /// Returns the descent gradient at `servings`.
    ///
    /// The penalty part is half the analytic derivative of
    /// [`Problem::objective`] while the cost part is not halved. Any positive
    /// multiple of a descent direction still descends, and the line search
    /// works on objective values only.
    #[must_use]
    pub fn gradient(&self, servings: ArrayView1<'_, f64>) -> Array1<f64> {
        let outputs = self.outputs(servings);
        let slopes: Array1<f64> = self
            .targets()
            .iter()
            .zip(&outputs)
            .map(|(target, &output)| target.slope(output))
            .collect();

        self.matrix().dot(&slopes) + &self.costs() * self.cost_weight()
    }
}
