use core::marker::PhantomData;
use crate::LinAlg;
use super::Operator;

/// Transposed operator
/// 
/// Exposes \\(K^T\\) of a wrapped [`Operator`] \\(K\\),
/// swapping [`Operator::op`] and [`Operator::trans_op`].
/// Useful when only \\(A\\) is at hand and
/// [`crate::solver::ProbMask`] asks for \\(A^T\\) as well.
#[derive(Debug, Clone)]
pub struct TransOp<L: LinAlg, O: Operator<L>>
{
    ph_l: PhantomData<L>,
    inner: O,
}

impl<L: LinAlg, O: Operator<L>> TransOp<L, O>
{
    /// Creates an instance.
    /// 
    /// Returns [`TransOp`] instance.
    /// * `inner` is an operator to be transposed.
    pub fn new(inner: O) -> Self
    {
        TransOp {
            ph_l: PhantomData,
            inner,
        }
    }

    /// Unwraps the original operator.
    pub fn into_inner(self) -> O
    {
        self.inner
    }
}

impl<L: LinAlg, O: Operator<L>> Operator<L> for TransOp<L, O>
{
    fn size(&self) -> (usize, usize)
    {
        let (m, n) = self.inner.size();
        (n, m)
    }

    fn op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        self.inner.trans_op(alpha, x, beta, y);
    }

    fn trans_op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        self.inner.op(alpha, x, beta, y);
    }
}
