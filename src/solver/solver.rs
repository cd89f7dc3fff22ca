use num_traits::{Float, Zero, One};
use core::fmt::{Debug, LowerExp};
use crate::{LinAlg, Operator};
use super::{SolverError, SolverParam, NormEst, StepSizes, ProbMask};

//

/// Solution of [`Solver::solve`] and [`Solver::solve_warm`].
///
/// The vectors borrow the work slice passed to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a, F>
{
    /// Reconstructed signal \\(u\\).
    pub u: &'a[F],
    /// Confidence mask \\(c\\).
    pub c: &'a[F],
    /// Dual variable \\(y\\) of the coupling \\(A u + B c = g\\).
    pub y: &'a[F],
    /// Number of iterations actually performed.
    ///
    /// When the tolerance is met at the zero-based iteration index \\(k\\),
    /// this is \\(k + 1\\), not the index \\(k\\) itself.
    pub iters: usize,
    /// Distance \\(\\|u_{k+1} - u_k\\|_2\\) of the last iteration.
    pub du: F,
    /// Distance \\(\\|c_{k+1} - c_k\\|_2\\) of the last iteration.
    pub dc: F,
    /// `true` if the tolerance was met before the max iteration.
    pub converged: bool,
}

//

/// First-order primal-dual solver struct.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// This struct abstracts a Chambolle–Pock style solver of the joint signal / mask problem
/// given by [`ProbMask`].
/// Each iteration performs, with step sizes \\(\tau, \sigma, \theta\\) of [`StepSizes`],
/// \\[
/// \begin{array}{l}
/// y \leftarrow y + \sigma (A \bar u + b \odot \bar c - g) \\\\
/// u \leftarrow (u - \tau (A^T y - f)) / (1 + \tau) \\\\
/// c \leftarrow (c - \tau b \odot y - \mu \bar c) / (1 + \tau \lambda + \mu) \\\\
/// \bar u \leftarrow u + \theta (u - u_{\rm prev}),\
/// \bar c \leftarrow c + \theta (c - c_{\rm prev})
/// \end{array}
/// \\]
/// and stops when both distances between successive iterates fall below
/// [`SolverParam::tol`], from the third iteration on.
pub struct Solver<L: LinAlg>
{
    /// solver parameters.
    pub par: SolverParam<L::F>,
}

impl<L: LinAlg> Solver<L>
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`Solver::solve`] requires.
    /// * `n` is a number of rows and columns of \\(A\\).
    pub fn query_worklen(n: usize) -> usize
    {
        let len_iteration =
            n * 3 + // u, c, y
            n * 2 + // u_bar, c_bar
            n * 2 + // u_prev, c_prev
            n * 2;  // tmp_a, tmp_at

        // NormEst shares with the iteration vectors
        len_iteration.max(NormEst::<L>::query_worklen(n))
    }

    /// Creates an instance.
    ///
    /// Returns [`Solver`] instance.
    pub fn new() -> Self
    {
        Solver {
            par: SolverParam::default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`Solver`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlg> Default for Solver<L>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<L: LinAlg> Solver<L>
where L::F: Float + Debug + LowerExp
{
    /// Starts to solve from zero-initialized iterates.
    ///
    /// Returns `Ok` with [`Solution`] or `Err` with [`SolverError`] type.
    /// Reaching [`SolverParam::max_iter`] is not an error;
    /// see [`Solution::converged`].
    /// * `prob` is the problem to solve.
    /// * `work` slice is used for temporal variables. [`Solver::solve`] does not rely on dynamic heap allocation.
    pub fn solve<'w, OA, OT>(self, prob: ProbMask<'_, L, OA, OT>, work: &'w mut[L::F])
    -> Result<Solution<'w, L::F>, SolverError>
    where OA: Operator<L>, OT: Operator<L>
    {
        self.solve_impl(prob, None, work)
    }

    /// Starts to solve from given iterates.
    ///
    /// Returns `Ok` with [`Solution`] or `Err` with [`SolverError`] type.
    /// * `prob` is the problem to solve.
    /// * `init` is a tuple of initial \\(u\\), \\(c\\) and optionally \\(y\\) (zero if `None`).
    ///   The extrapolated iterates start at the given \\(u\\) and \\(c\\).
    ///   Feeding back a converged [`Solution`] terminates within a few iterations.
    /// * `work` slice is used for temporal variables.
    pub fn solve_warm<'w, OA, OT>(self, prob: ProbMask<'_, L, OA, OT>,
        init: (&[L::F], &[L::F], Option<&[L::F]>), work: &'w mut[L::F])
    -> Result<Solution<'w, L::F>, SolverError>
    where OA: Operator<L>, OT: Operator<L>
    {
        self.solve_impl(prob, Some(init), work)
    }

    fn solve_impl<'w, OA, OT>(self, prob: ProbMask<'_, L, OA, OT>,
        init: Option<(&[L::F], &[L::F], Option<&[L::F]>)>, work: &'w mut[L::F])
    -> Result<Solution<'w, L::F>, SolverError>
    where OA: Operator<L>, OT: Operator<L>
    {
        let n = prob.check_size()?;

        if let Some((u0, c0, y0)) = init {
            let y0_len = y0.map_or(n, |y0| y0.len());

            if u0.len() != n || c0.len() != n || y0_len != n {
                log::error!("Size mismatch: u0({}), c0({}), y0({}) must be {}", u0.len(), c0.len(), y0_len, n);
                return Err(SolverError::InvalidOp);
            }
        }

        if Self::query_worklen(n) > work.len() {
            log::error!("Work memory length {} must be >= {}", work.len(), Self::query_worklen(n));
            return Err(SolverError::WorkShortage);
        }

        self.check_par()?;

        log::debug!("{:?}", self.par);

        let core = SolverCore {
            par: self.par,
            prob,
        };

        let (iters, du, dc, converged) = core.solve(init, work)?;

        let work: &'w[L::F] = work;
        let (u, rest) = work.split_at(n);
        let (c, rest) = rest.split_at(n);
        let (y, _) = rest.split_at(n);

        Ok(Solution {
            u, c, y,
            iters, du, dc, converged,
        })
    }

    fn check_par(&self) -> Result<(), SolverError>
    {
        let f0 = L::F::zero();
        let p = &self.par;

        if !(p.tol >= f0) {
            log::error!("tol {:?} must be >= 0", p.tol);
            return Err(SolverError::InvalidParam);
        }

        if !p.mu.is_finite() || !p.lambda.is_finite() {
            log::error!("mu {:?} and lambda {:?} must be finite", p.mu, p.lambda);
            return Err(SolverError::InvalidParam);
        }

        Ok(())
    }
}

//

struct SolverCore<'a, L, OA, OT>
where L: LinAlg, L::F: Float + Debug + LowerExp,
      OA: Operator<L>, OT: Operator<L>
{
    par: SolverParam<L::F>,
    prob: ProbMask<'a, L, OA, OT>,
}

impl<'a, L, OA, OT> SolverCore<'a, L, OA, OT>
where L: LinAlg, L::F: Float + Debug + LowerExp,
      OA: Operator<L>, OT: Operator<L>
{
    fn solve(self, init: Option<(&[L::F], &[L::F], Option<&[L::F]>)>, work: &mut[L::F])
    -> Result<(usize, L::F, L::F, bool), SolverError>
    {
        log::info!("----- Initializing");
        let n = self.prob.dim();
        let f0 = L::F::zero();

        // Calculate step sizes
        let steps = self.calc_steps(work)?;

        // Initialize vectors
        splitm_mut!(work,
            (u; n), (c; n), (y; n),
            (u_bar; n), (c_bar; n),
            (u_prev; n), (c_prev; n),
            (tmp_a; n), (tmp_at; n)
        );
        self.init_vecs(init, u, c, y, u_bar, c_bar, u_prev, c_prev);
        clear(tmp_a);
        clear(tmp_at);

        let den_c = L::F::one() + steps.tau * self.par.lambda + self.par.mu;
        if !(den_c > f0) {
            log::error!("1 + tau * lambda + mu = {:?} must be > 0", den_c);
            return Err(SolverError::InvalidParam);
        }

        // Iteration
        log::info!("----- Started");
        let mut du = f0;
        let mut dc = f0;
        let mut iters = 0;
        let mut converged = false;

        for i in 0.. self.par.max_iter {
            let excess_iter = i + 1 >= self.par.max_iter;

            let log_trig = if self.par.log_period > 0 {
                i % self.par.log_period == 0
            }
            else {
                if i == 0 && log::log_enabled!(log::Level::Debug) {
                    log::warn!("log_period == 0: no periodic log");
                }
                false
            };

            // Update vectors
            (du, dc) = self.update_vecs(&steps, den_c,
                u, c, y, u_bar, c_bar, u_prev, c_prev, tmp_a, tmp_at);
            iters = i + 1;

            // Termination criteria of convergence
            let term_conv = (i > 1) && (du < self.par.tol) && (dc < self.par.tol);

            if log_trig || excess_iter || term_conv {
                log::debug!("{}: du_dc {:.2e} {:.2e}", i, du, dc);
            }
            else {
                log::trace!("{}: du_dc {:.2e} {:.2e}", i, du, dc);
            }

            if term_conv {
                converged = true;
                break;
            }
        }

        log::trace!("u {:?}", u);
        log::trace!("c {:?}", c);

        if converged {
            log::info!("----- Converged");
        }
        else {
            log::warn!("----- ExcessIter");
        }

        Ok((iters, du, dc, converged))
    }

    fn calc_steps(&self, work: &mut[L::F]) -> Result<StepSizes<L::F>, SolverError>
    {
        if !self.par.eps.is_zero() {
            log::debug!("eps {:?} has no effect", self.par.eps);
        }
        if !self.par.gamma.is_zero() {
            log::debug!("gamma {:?} has no effect: acceleration is not applied", self.par.gamma);
        }

        let norm_est = NormEst::<L>::new().estimate(&self.prob.op_a, self.prob.b, work)?;
        let steps = StepSizes::new(norm_est);

        log::debug!("{:?}", steps);

        Ok(steps)
    }

    #[allow(clippy::too_many_arguments)]
    fn init_vecs(&self, init: Option<(&[L::F], &[L::F], Option<&[L::F]>)>,
        u: &mut[L::F], c: &mut[L::F], y: &mut[L::F],
        u_bar: &mut[L::F], c_bar: &mut[L::F],
        u_prev: &mut[L::F], c_prev: &mut[L::F])
    {
        clear(u_prev);
        clear(c_prev);

        match init {
            Some((u0, c0, y0)) => {
                L::copy(u0, u);
                L::copy(c0, c);
                if let Some(y0) = y0 {
                    L::copy(y0, y);
                }
                else {
                    clear(y);
                }
            },
            None => {
                clear(u);
                clear(c);
                clear(y);
            },
        }

        L::copy(u, u_bar);
        L::copy(c, c_bar);
    }

    #[allow(clippy::too_many_arguments)]
    fn update_vecs(&self, steps: &StepSizes<L::F>, den_c: L::F,
        u: &mut[L::F], c: &mut[L::F], y: &mut[L::F],
        u_bar: &mut[L::F], c_bar: &mut[L::F],
        u_prev: &mut[L::F], c_prev: &mut[L::F],
        tmp_a: &mut[L::F], tmp_at: &mut[L::F])
    -> (L::F, L::F)
    {
        let f0 = L::F::zero();
        let f1 = L::F::one();
        let StepSizes {tau, sigma, theta} = *steps;
        let prob = &self.prob;

        { // Dual ascent y := y + sigma (A u_bar + b c_bar - g)
            prob.op_a.op(f1, u_bar, f0, tmp_a);
            L::transform_di(f1, prob.b, c_bar, f1, tmp_a);
            L::add(-f1, prob.g, tmp_a);
            L::add(sigma, tmp_a, y);
        }

        L::copy(u, u_prev);
        L::copy(c, c_prev);

        { // Signal u := (u - tau (A^T y - f)) / (1 + tau)
            prob.op_at.op(f1, y, f0, tmp_at);
            L::add(-f1, prob.f, tmp_at);
            L::add(-tau, tmp_at, u);
            L::scale((f1 + tau).recip(), u);
        }

        { // Mask c := (c - tau b y - mu c_bar) / (1 + tau lambda + mu)
            L::transform_di(-tau, prob.b, y, f1, c);
            L::add(-self.par.mu, c_bar, c);
            L::scale(den_c.recip(), c);
        }

        // Extrapolation, reusing tmp as u - u_prev and c - c_prev
        L::copy(u, tmp_at);
        L::add(-f1, u_prev, tmp_at);
        L::copy(u, u_bar);
        L::add(theta, tmp_at, u_bar);

        L::copy(c, tmp_a);
        L::add(-f1, c_prev, tmp_a);
        L::copy(c, c_bar);
        L::add(theta, tmp_a, c_bar);

        (L::norm(tmp_at), L::norm(tmp_a))
    }
}

// work slice content is arbitrary on entry, so scaling by zero would keep NaNs
pub(crate) fn clear<F: Float>(x: &mut[F])
{
    for e in x.iter_mut() {
        *e = F::zero();
    }
}
