/*!
A first-order primal-dual solver for joint signal reconstruction and inpainting mask optimization.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate recovers a signal \\(u\\) and a continuous confidence mask \\(c\\) simultaneously,
as a numerical subroutine of an image-inpainting / optimal-control pipeline.
The saddle-point problem
\\[
\min_{u, c} \max_y \ \frac12 \\|u - f\\|_2^2 + \frac\lambda2 \\|c\\|_2^2
+ \langle y, A u + {\bf diag}(b) c - g \rangle
\\]
is solved by a Chambolle–Pock style proximal splitting,
whose step sizes are sized by a power-iteration estimate of the operator norm.

# General usage

1. Wrap the sparse matrices \\(A\\) and \\(A^T\\), given in compressed-sparse-column form,
   with [`CscMat`].
1. Bundle them with the vectors \\(b, f, g\\) into a [`solver::ProbMask`].
1. Create a [`solver::Solver`] instance and optionally set its parameters.
1. Allocate a work slice of [`solver::Solver::query_worklen`] and invoke [`solver::Solver::solve`].

# Examples

```
use float_eq::assert_float_eq;
use pdmask::prelude::*;

//env_logger::init(); // Use any logger crate as `pdmask` uses `log` crate.

type La = FloatGeneric<f64>;
type ACscMat<'a> = CscMat<'a, La>;
type ASolver = Solver<La>;

// A = I (2x2), every pixel observed
let op_a = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);
let op_at = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);

let b = [0., 0.];
let f = [3., 4.];
let g = [3., 4.];

let s = ASolver::new().par(|p| {
    p.max_iter = 1000;
    p.tol = 1e-10;
});
let mut work = vec![0.; ASolver::query_worklen(2)];
let prob = ProbMask::new(op_a, op_at, &b, &f, &g);
let rslt = s.solve(prob, &mut work).unwrap();

assert!(rslt.converged);
assert_float_eq!(rslt.u, [3., 4.].as_ref(), abs_all <= 1e-6);
```
*/

#![no_std]

#[macro_use]
mod splitm;

pub mod solver;

//

mod linalg;
mod floatgeneric;

pub use linalg::*;
pub use floatgeneric::*;

//

mod operator;

pub use operator::*;

//

/// Prelude
pub mod prelude
{
    pub use crate::solver::{Solver, SolverError, SolverParam, ProbMask, Solution};
    pub use crate::{FloatGeneric, CscMat, Operator, TransOp};
}
