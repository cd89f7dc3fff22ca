/// Solver errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverError
{
    /// Invalid [`crate::Operator`] or vector size.
    InvalidOp,
    /// Shortage of work slice length.
    WorkShortage,
    /// Invalid [`crate::solver::SolverParam`].
    InvalidParam,
    /// Operator norm estimate is not finite.
    NormEstFailure,
}

impl core::fmt::Display for SolverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            SolverError::InvalidOp      => "InvalidOp: invalid Operator or vector size",
            SolverError::WorkShortage   => "WorkShortage: shortage of work slice length",
            SolverError::InvalidParam   => "InvalidParam: invalid SolverParam",
            SolverError::NormEstFailure => "NormEstFailure: operator norm estimate is not finite",
        })
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for SolverError {}
