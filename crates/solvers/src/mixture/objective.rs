use ndarray::ArrayView1;

use super::Problem;

impl Problem {
    /// Returns the penalized objective at `servings`.
    ///
    /// The sum of every target's penalty plus the cost weight times the price.
    #[must_use]
    pub fn objective(&self, servings: ArrayView1<'_, f64>) -> f64 {
        let outputs = self.outputs(servings);
        let penalty = self
            .targets()
            .iter()
            .zip(&outputs)
            .map(|(target, &output)| target.penalty(output))
            .sum::<f64>();

        penalty + self.cost_weight() * self.price(servings)
    }
}
