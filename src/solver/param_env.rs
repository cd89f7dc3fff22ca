extern crate std;

use num_traits::{Float, Num};
use core::fmt::Display;
use super::SolverParam;

fn num_by_env<N: Num + Display>(e: &str) -> Option<N>
{
    if let Some(v) = std::env::var(e).ok()
                     .and_then(|s| {N::from_str_radix(s.trim(), 10).ok()}) {
        log::info!("{}: {}", e, v);
        Some(v)
    }
    else {
        None
    }
}

impl<F: Float + Display> SolverParam<F>
{
    /// Overrides parameters by environment variables.
    /// 
    /// Each of `PDMASK_MAX_ITER`, `PDMASK_TOL`, `PDMASK_EPS`, `PDMASK_MU`, `PDMASK_LAMBDA`,
    /// `PDMASK_GAMMA` and `PDMASK_LOG_PERIOD` replaces the corresponding field when it is set
    /// and parses as a number; otherwise the field is left untouched.
    pub fn set_by_env(&mut self)
    {
        self.max_iter = num_by_env("PDMASK_MAX_ITER").unwrap_or(self.max_iter);
        self.tol = num_by_env("PDMASK_TOL").unwrap_or(self.tol);
        self.eps = num_by_env("PDMASK_EPS").unwrap_or(self.eps);
        self.mu = num_by_env("PDMASK_MU").unwrap_or(self.mu);
        self.lambda = num_by_env("PDMASK_LAMBDA").unwrap_or(self.lambda);
        self.gamma = num_by_env("PDMASK_GAMMA").unwrap_or(self.gamma);
        self.log_period = num_by_env("PDMASK_LOG_PERIOD").unwrap_or(self.log_period);
    }
}
