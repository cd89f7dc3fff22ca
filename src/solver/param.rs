use num_traits::Float;

/// Solver parameters.
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParam<F: Float>
{
    /// Regularization weight \\(\varepsilon\\) of the data-fidelity term.
    /// Accepted for compatibility, it has no effect on the iteration.
    pub eps: F,
    /// Proximal-term weight \\(\mu\\) anchoring the mask at its extrapolated iterate.
    pub mu: F,
    /// Weight \\(\lambda\\) of the mask penalty.
    pub lambda: F,
    /// Acceleration factor \\(\gamma\\).
    /// Reserved, never applied.
    pub gamma: F,
    /// Max iteration number of the primal-dual loop.
    pub max_iter: usize,
    /// Tolerance of the distances between successive signal and mask iterates.
    pub tol: F,
    /// Period of iterations to output progress log(for debug/trace level).
    pub log_period: usize,
}

impl<F: Float> Default for SolverParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        SolverParam {
            eps: F::zero(),
            mu: F::zero(),
            lambda: F::zero(),
            gamma: F::zero(),
            max_iter: 1000,
            tol: ten.powi(-6),
            log_period: 100,
        }
    }
}
