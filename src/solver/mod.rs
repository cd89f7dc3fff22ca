//! First-order primal-dual solver of the joint signal / mask problem

mod solver_error;
mod param;
mod norm_est;
mod step_sizes;
mod prob;
mod solver;

#[cfg(feature = "std")]
mod param_env;

pub use solver_error::*;
pub use param::*;
pub use norm_est::*;
pub use step_sizes::*;
pub use prob::*;
pub use solver::*;
