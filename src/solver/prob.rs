use core::marker::PhantomData;
use crate::{LinAlg, Operator};
use super::SolverError;

/// Joint signal / mask problem
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// Data of the saddle-point problem solved by [`crate::solver::Solver`]:
/// * \\(A \in \mathbb{R}^{n \times n}\\), the inpainting operator, and its transpose \\(A^T\\).
///   The transpose is supplied independently,
///   and its consistency with \\(A\\) is the caller's responsibility.
/// * \\(b \in \mathbb{R}^n\\), diagonal entries of the coupling operator \\(B = {\bf diag}(b)\\).
/// * \\(f \in \mathbb{R}^n\\), the observed signal.
/// * \\(g \in \mathbb{R}^n\\), the right-hand side of the linearized coupling \\(A u + B c = g\\).
pub struct ProbMask<'a, L, OA, OT>
where L: LinAlg, OA: Operator<L>, OT: Operator<L>
{
    ph_l: PhantomData<L>,
    pub(crate) op_a: OA,
    pub(crate) op_at: OT,
    pub(crate) b: &'a[L::F],
    pub(crate) f: &'a[L::F],
    pub(crate) g: &'a[L::F],
}

impl<'a, L, OA, OT> ProbMask<'a, L, OA, OT>
where L: LinAlg, OA: Operator<L>, OT: Operator<L>
{
    /// Creates an instance.
    /// 
    /// Returns [`ProbMask`] instance.
    /// Sizes are not checked here but by [`crate::solver::Solver::solve`].
    /// * `op_a` is \\(A\\).
    /// * `op_at` is \\(A^T\\).
    /// * `b` is \\(b\\).
    /// * `f` is \\(f\\).
    /// * `g` is \\(g\\).
    pub fn new(op_a: OA, op_at: OT, b: &'a[L::F], f: &'a[L::F], g: &'a[L::F]) -> Self
    {
        ProbMask {
            ph_l: PhantomData,
            op_a, op_at,
            b, f, g,
        }
    }

    /// Dimension \\(n\\) of the problem, that is a number of rows of \\(A\\).
    pub fn dim(&self) -> usize
    {
        self.op_a.size().0
    }

    pub(crate) fn check_size(&self) -> Result<usize, SolverError>
    {
        let n = self.dim();

        if self.op_a.size() != (n, n) || self.op_at.size() != (n, n)
           || self.b.len() != n || self.f.len() != n || self.g.len() != n {
            log::error!("Size mismatch: op_a{:?}, op_at{:?}, b({}), f({}), g({})",
                self.op_a.size(), self.op_at.size(), self.b.len(), self.f.len(), self.g.len());
            return Err(SolverError::InvalidOp);
        }

        Ok(n)
    }
}
