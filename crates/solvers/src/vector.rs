//! Vector arithmetic shared by the solvers.
//!
//! Thin helpers over [`ndarray`] one-dimensional arrays. All binary
//! operations require equal lengths and panic otherwise, as `ndarray` does.

use ndarray::{Array1, ArrayView1, Zip};

/// Returns the dot product `a · b`.
#[must_use]
pub fn dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.dot(&b)
}

/// Returns `a * s`.
#[must_use]
pub fn scale(a: ArrayView1<'_, f64>, s: f64) -> Array1<f64> {
    a.mapv(|v| v * s)
}

/// Returns `a + b`.
#[must_use]
pub fn add(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Array1<f64> {
    Zip::from(&a).and(&b).map_collect(|x, y| x + y)
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Array1<f64> {
    Zip::from(&a).and(&b).map_collect(|x, y| x - y)
}

/// Returns the Euclidean length of `a`.
#[must_use]
pub fn norm(a: ArrayView1<'_, f64>) -> f64 {
    dot(a, a).sqrt()
}

/// Clamps every negative component to zero, in place.
pub fn project_nonnegative(a: &mut Array1<f64>) {
    a.mapv_inplace(|v| v.max(0.0));
}

/// Returns `max(x + direction * step, 0)` component-wise.
///
/// This is the projected trial point of a descent step under the box
/// constraint `x ≥ 0`.
#[must_use]
pub fn projected_step(
    x: ArrayView1<'_, f64>,
    direction: ArrayView1<'_, f64>,
    step: f64,
) -> Array1<f64> {
    let mut trial = add(x, scale(direction, step).view());
    project_nonnegative(&mut trial);
    trial
}
