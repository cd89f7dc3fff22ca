use num_traits::{Zero, One};
use crate::LinAlg;
use super::Operator;

//

/// Sparse matrix view in compressed-sparse-column form
/// 
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
/// 
/// Matrix struct which borrows the CSC arrays and implements [`Operator`].
/// Nonzero entries of column `j` are `values[col_ptr[j]..col_ptr[j + 1]]`
/// with their rows in the same range of `row_idx`.
/// Rows within a column need not be sorted, and duplicated rows accumulate.
pub struct CscMat<'a, L: LinAlg>
{
    n_row: usize,
    n_col: usize,
    values: &'a[L::F],
    row_idx: &'a[usize],
    col_ptr: &'a[usize],
}

impl<'a, L: LinAlg> Clone for CscMat<'a, L>
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<'a, L: LinAlg> Copy for CscMat<'a, L> {}

impl<'a, L: LinAlg> CscMat<'a, L>
{
    /// Creates an instance
    /// 
    /// Returns [`CscMat`] instance.
    /// * `size` is a tuple of a number of rows and a number of columns.
    /// * `values` is nonzero values of the matrix.
    /// * `row_idx` is row indices of `values`, which shall have the same length as `values`.
    /// * `col_ptr` is column pointers, which shall have the length of columns + 1,
    ///   start with 0, end with the number of nonzeros, and be non-decreasing.
    /// 
    /// Row indices are not range-checked here;
    /// an out-of-range index panics when the matrix is applied.
    pub fn new(size: (usize, usize), values: &'a[L::F], row_idx: &'a[usize], col_ptr: &'a[usize]) -> Self
    {
        let (n_row, n_col) = size;

        assert_eq!(col_ptr.len(), n_col + 1);
        assert_eq!(col_ptr[0], 0);
        assert_eq!(col_ptr[n_col], values.len());
        assert_eq!(row_idx.len(), values.len());
        assert!(col_ptr.windows(2).all(|w| w[0] <= w[1]));

        CscMat {
            n_row, n_col,
            values, row_idx, col_ptr,
        }
    }

    /// Number of stored nonzero entries.
    pub fn nnz(&self) -> usize
    {
        self.values.len()
    }

    /// Nonzero values array.
    pub fn values(&self) -> &'a[L::F]
    {
        self.values
    }

    /// Row indices array.
    pub fn row_idx(&self) -> &'a[usize]
    {
        self.row_idx
    }

    /// Column pointers array.
    pub fn col_ptr(&self) -> &'a[usize]
    {
        self.col_ptr
    }

    /// Sparse matrix-dense vector product, accumulated.
    /// 
    /// Calculates \\(x + M b\\) into `x`.
    /// The kernel never clears `x`:
    /// zero it beforehand to get the plain product \\(M b\\).
    /// * `b` is a vector, whose length shall be the number of columns.
    /// * `x` is a vector before entry, \\(x + M b\\) on exit.
    ///   The length of `x` shall be the number of rows.
    pub fn spmv(&self, b: &[L::F], x: &mut[L::F])
    {
        self.spmv_impl(L::F::one(), b, x);
    }

    fn spmv_impl(&self, alpha: L::F, b: &[L::F], x: &mut[L::F])
    {
        assert_eq!(b.len(), self.n_col);
        assert_eq!(x.len(), self.n_row);

        for (col, rng) in self.col_ptr.windows(2).enumerate() {
            let rhs = alpha * b[col];

            for k in rng[0].. rng[1] {
                let row = self.row_idx[k];
                x[row] = x[row] + self.values[k] * rhs;
            }
        }
    }

    fn scale_out(beta: L::F, y: &mut[L::F])
    {
        if beta.is_zero() {
            for e in y.iter_mut() {
                *e = L::F::zero();
            }
        }
        else if beta != L::F::one() {
            L::scale(beta, y);
        }
    }
}

impl<'a, L: LinAlg> Operator<L> for CscMat<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        (self.n_row, self.n_col)
    }

    fn op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        assert_eq!(y.len(), self.n_row);

        Self::scale_out(beta, y);
        if !alpha.is_zero() {
            self.spmv_impl(alpha, x, y);
        }
    }

    fn trans_op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut[L::F])
    {
        assert_eq!(x.len(), self.n_row);
        assert_eq!(y.len(), self.n_col);

        Self::scale_out(beta, y);
        if !alpha.is_zero() {
            for (e, rng) in y.iter_mut().zip(self.col_ptr.windows(2)) {
                let mut sum = L::F::zero();
                for k in rng[0].. rng[1] {
                    sum = sum + self.values[k] * x[self.row_idx[k]];
                }
                *e = *e + alpha * sum;
            }
        }
    }
}

//

#[test]
fn test_cscmat1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type ACscMat<'a> = CscMat<'a, FloatGeneric<f64>>;

    /*
    1. 0. 2.
    0. 3. 0.
    */
    let m = ACscMat::new((2, 3), &[1., 3., 2.], &[0, 1, 0], &[0, 1, 2, 3]);
    assert_eq!(m.size(), (2, 3));
    assert_eq!(m.nnz(), 3);

    let y = &mut[10., 20.];
    m.op(2., &[1., 1., 1.], 0.5, y);
    assert_float_eq!(y.as_ref(), [11., 16.].as_ref(), abs_all <= 1e-12);

    let z = &mut[0.; 3];
    m.trans_op(1., &[1., 2.], 0., z);
    assert_float_eq!(z.as_ref(), [1., 6., 2.].as_ref(), abs_all <= 1e-12);
}
