mod common;

use float_eq::assert_float_eq;
use pdmask::prelude::*;
use pdmask::solver::NormEst;
use common::*;

type La = FloatGeneric<f64>;
type ACscMat<'a> = CscMat<'a, La>;
type ANormEst = NormEst<La>;

//

#[test]
fn test_norm_est_identity()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 5;
    let v = 0.5;
    let csc = csc_from_rowmaj(n, n, &diag_rowmaj(&[1.; 5]));
    let op_a = ACscMat::new(csc.size, &csc.values, &csc.row_idx, &csc.col_ptr);
    let b = vec![v; n];

    let mut work = vec![0.; ANormEst::query_worklen(n)];
    let est = ANormEst::new().estimate(&op_a, &b, &mut work).unwrap();

    assert_float_eq!(est, 1. + v * v, abs <= 1e-12);
}

#[test]
fn test_norm_est_zero()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let op_a = ACscMat::new((3, 3), &[], &[], &[0, 0, 0, 0]);
    let b = &[1., -3., 2.];

    let mut work = vec![0.; ANormEst::query_worklen(3)];
    let est = ANormEst::new().estimate(&op_a, b, &mut work).unwrap();

    assert_float_eq!(est, 9., abs <= 1e-12);
}

#[test]
fn test_norm_est_dominant()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let csc = csc_from_rowmaj(3, 3, &diag_rowmaj(&[2., 1., 0.5]));
    let op_a = ACscMat::new(csc.size, &csc.values, &csc.row_idx, &csc.col_ptr);
    let b = &[0., 1., 0.];

    let mut work = vec![0.; ANormEst::query_worklen(3)];
    let est = ANormEst::new().estimate(&op_a, b, &mut work).unwrap();

    assert_float_eq!(est, 2. * 2. + 1., abs <= 1e-9);
}

#[test]
fn test_norm_est_empty()
{
    let op_a = ACscMat::new((0, 0), &[], &[], &[0]);

    let est = ANormEst::new().estimate(&op_a, &[], &mut []).unwrap();

    assert_eq!(est, 0.);
}

#[test]
fn test_norm_est_nonfinite()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let op_a = ACscMat::new((2, 2), &[f64::NAN, 1.], &[0, 1], &[0, 1, 2]);
    let mut work = vec![0.; ANormEst::query_worklen(2)];
    let rslt = ANormEst::new().estimate(&op_a, &[0., 0.], &mut work);
    assert_eq!(rslt, Err(SolverError::NormEstFailure));

    let op_a = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);
    let rslt = ANormEst::new().estimate(&op_a, &[f64::INFINITY, 0.], &mut work);
    assert_eq!(rslt, Err(SolverError::NormEstFailure));

    let rslt = ANormEst::new().estimate(&op_a, &[f64::NAN, 0.], &mut work);
    assert_eq!(rslt, Err(SolverError::NormEstFailure));

    let rslt = ANormEst::new().estimate(&op_a, &[0., f64::NAN], &mut work);
    assert_eq!(rslt, Err(SolverError::NormEstFailure));
}

#[test]
fn test_norm_est_invalid()
{
    let op_a = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);

    let mut work = vec![0.; ANormEst::query_worklen(2) - 1];
    let rslt = ANormEst::new().estimate(&op_a, &[0., 0.], &mut work);
    assert_eq!(rslt, Err(SolverError::WorkShortage));

    let mut work = vec![0.; ANormEst::query_worklen(2)];
    let rslt = ANormEst::new().estimate(&op_a, &[0.], &mut work);
    assert_eq!(rslt, Err(SolverError::InvalidOp));

    let op_r = ACscMat::new((2, 1), &[1.], &[0], &[0, 1]);
    let rslt = ANormEst::new().estimate(&op_r, &[0., 0.], &mut work);
    assert_eq!(rslt, Err(SolverError::InvalidOp));
}
