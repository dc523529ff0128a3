//! Miscellaneous tools.
//!
//! Integrals over the well are all approximated by the mean-value theorem on a
//! uniform, half-open grid of `N` points covering an interval of width `w`:
//! ```text
//! ∫ f(x) dx ≈ w * (1/N) * Σ_k f(x[k])
//! ```

use ndarray::{ self as nd, Ix1 };

/// Approximate the integral of a sampled function over an interval of width
/// `width` as `width` times the mean of the samples.
///
/// Returns 0 for an empty array.
pub fn mean_value<S>(y: &nd::ArrayBase<S, Ix1>, width: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    if n == 0 { return 0.0; }
    width * y.sum() / n as f64
}

/// Calculate the average-value inner product of two sampled functions.
///
/// Only the first `min(q.len(), p.len())` samples contribute.
pub fn wf_dot<S, T>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    width: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n: usize = q.len().min(p.len());
    if n == 0 { return 0.0; }
    let acc: f64 = q.iter().zip(p).map(|(qk, pk)| qk * pk).sum();
    width * acc / n as f64
}

/// Calculate the average-value matrix element `⟨q|V|p⟩` of a multiplicative
/// operator `V` between two sampled functions.
pub fn wf_sandwich<S, T, U>(
    q: &nd::ArrayBase<S, Ix1>,
    V: &nd::ArrayBase<T, Ix1>,
    p: &nd::ArrayBase<U, Ix1>,
    width: f64,
) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    let n: usize = q.len().min(V.len()).min(p.len());
    if n == 0 { return 0.0; }
    let acc: f64
        = q.iter().zip(V).zip(p)
        .map(|((qk, Vk), pk)| qk * Vk * pk)
        .sum();
    width * acc / n as f64
}

/// Calculate the mean-square norm `w/N Σ q²` of a sampled function.
///
/// Note that this is the *squared* norm.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, width: f64) -> f64
where S: nd::Data<Elem = f64>
{
    wf_dot(q, q, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_value_of_constant() {
        let y: nd::Array1<f64> = nd::Array1::from_elem(40, 3.0);
        assert!((mean_value(&y, 2.0) - 6.0).abs() < 1e-12);
        assert_eq!(mean_value(&nd::Array1::<f64>::zeros(0), 2.0), 0.0);
    }

    #[test]
    fn sandwich_with_unit_operator_is_dot() {
        let q = nd::array![1.0, -2.0, 0.5, 4.0];
        let p = nd::array![0.0, 1.0, 3.0, -1.0];
        let one: nd::Array1<f64> = nd::Array1::ones(4);
        let d = wf_dot(&q, &p, 1.5);
        let s = wf_sandwich(&q, &one, &p, 1.5);
        assert!((d - s).abs() < 1e-14);
        assert!((d - 1.5 * (-2.0 + 1.5 - 4.0) / 4.0).abs() < 1e-14);
    }

    #[test]
    fn norm_is_squared() {
        let q = nd::array![2.0, 2.0];
        assert!((wf_norm(&q, 1.0) - 4.0).abs() < 1e-14);
    }
}
