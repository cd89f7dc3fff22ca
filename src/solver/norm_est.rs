use num_traits::{Float, Zero, One};
use core::marker::PhantomData;
use core::fmt::{Debug, LowerExp};
use crate::{LinAlg, Operator};
use super::SolverError;
use super::solver::clear;

/// Iteration number of the power method.
pub const NORM_EST_ITER: usize = 50;

/// Operator norm estimator
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// Estimates the squared norm of the stacked operator \\(\begin{bmatrix} A & {\bf diag}(b) \end{bmatrix}\\)
/// as \\(\lambda^2 + \max_i b_i^2\\),
/// where \\(\lambda\\) is the dominant eigenvalue of \\(A\\) by a fixed number of power iterations.
/// 
/// The power method runs on \\(A\\) itself, not on \\(A^T A\\).
/// This bounds the norm only for (nearly) symmetric \\(A\\),
/// which mask-like inpainting operators are,
/// and the step sizes of [`crate::solver::Solver`] are tuned to this very estimate.
/// No convergence check is done.
pub struct NormEst<L: LinAlg>
{
    ph_l: PhantomData<L>,
    /// Number of power iterations, [`NORM_EST_ITER`] by default.
    pub iters: usize,
}

impl<L: LinAlg> NormEst<L>
{
    /// Query of a length of work slice.
    /// 
    /// Returns a length of work slice that [`NormEst::estimate`] requires.
    /// * `n` is a number of rows and columns of \\(A\\).
    pub fn query_worklen(n: usize) -> usize
    {
        n * 3 // probe, A probe, A A probe
    }

    /// Creates an instance.
    pub fn new() -> Self
    {
        NormEst {
            ph_l: PhantomData,
            iters: NORM_EST_ITER,
        }
    }
}

impl<L: LinAlg> NormEst<L>
where L::F: Float + Debug + LowerExp
{
    /// Estimates \\(\lambda^2 + \max_i b_i^2\\).
    /// 
    /// Returns `Ok` with the estimate or `Err` with [`SolverError`] type.
    /// * `op_a` is \\(A\\), which shall be square.
    /// * `b` is \\(b\\), whose length shall be the same as the size of \\(A\\).
    /// * `work` slice is used for temporal variables.
    /// 
    /// If \\(A\\) maps the probe vector to exactly zero (the zero matrix, for instance),
    /// \\(\lambda\\) is taken as zero and the iteration stops there.
    /// A non-finite estimate is reported as [`SolverError::NormEstFailure`].
    pub fn estimate<O: Operator<L>>(&self, op_a: &O, b: &[L::F], work: &mut[L::F]) -> Result<L::F, SolverError>
    {
        let n = op_a.size().0;

        if op_a.size() != (n, n) || b.len() != n {
            log::error!("Size mismatch: op_a{:?}, b({})", op_a.size(), b.len());
            return Err(SolverError::InvalidOp);
        }

        if Self::query_worklen(n) > work.len() {
            log::error!("Work memory length {} must be >= {}", work.len(), Self::query_worklen(n));
            return Err(SolverError::WorkShortage);
        }

        let f0 = L::F::zero();
        let f1 = L::F::one();

        let (probe, rest) = work.split_at_mut(n);
        let (v, rest) = rest.split_at_mut(n);
        let (w, _) = rest.split_at_mut(n);

        for p in probe.iter_mut() {
            *p = f1;
        }
        clear(v);
        clear(w);

        let mut lambda = f0;

        for i in 0.. self.iters {
            op_a.op(f1, probe, f0, v);
            op_a.op(f1, v, f0, w);

            let sq_norm = L::dot(v, v);
            if sq_norm.is_zero() {
                log::debug!("{}: power iteration reached the null space", i);
                lambda = f0;
                break;
            }

            lambda = L::dot(v, w) / sq_norm;

            let norm = sq_norm.sqrt();
            for (p, e) in probe.iter_mut().zip(v.iter()) {
                *p = *e / norm;
            }

            log::trace!("{}: eig {:.3e}", i, lambda);
        }

        let est = lambda * lambda + L::max_sq(b);

        log::debug!("norm estimate: eig {:.3e}, est {:.3e}", lambda, est);

        if !est.is_finite() {
            log::error!("Operator norm estimate is not finite: {:?}", est);
            return Err(SolverError::NormEstFailure);
        }

        Ok(est)
    }
}

impl<L: LinAlg> Default for NormEst<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}
