use num_traits::Float;

/// Step sizes of the primal-dual iteration.
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// Computed once before the loop and fixed thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizes<F: Float>
{
    /// Primal step \\(\tau\\).
    pub tau: F,
    /// Dual step \\(\sigma\\).
    pub sigma: F,
    /// Extrapolation factor \\(\theta\\).
    pub theta: F,
}

impl<F: Float> StepSizes<F>
{
    /// Creates step sizes from an operator norm estimate.
    /// 
    /// Returns \\(\tau = 0.25\\), \\(\sigma = 1 / ((L^2 + 0.1) \tau)\\) and \\(\theta = 1\\).
    /// * `norm_est` is the squared norm estimate \\(L^2\\) by [`crate::solver::NormEst::estimate`].
    pub fn new(norm_est: F) -> Self
    {
        let tau = F::from(0.25).unwrap();
        let shift = F::from(0.1).unwrap();

        StepSizes {
            tau,
            sigma: ((norm_est + shift) * tau).recip(),
            theta: F::one(),
        }
    }
}

//

#[test]
fn test_step_sizes1()
{
    use float_eq::assert_float_eq;

    let s = StepSizes::new(0.9_f64);

    assert_float_eq!(s.tau, 0.25, abs <= 1e-15);
    assert_float_eq!(s.sigma, 4., abs <= 1e-12);
    assert_float_eq!(s.theta, 1., abs <= 1e-15);
    // tau * sigma * norm_est < 1
    assert!(s.tau * s.sigma * 0.9 < 1.);
}
