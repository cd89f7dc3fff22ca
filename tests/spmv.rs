mod common;

use float_eq::assert_float_eq;
use pdmask::prelude::*;
use common::*;

type La = FloatGeneric<f64>;
type ACscMat<'a> = CscMat<'a, La>;

//

#[test]
fn test_spmv_dense_ref()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let dense = &[
        1.,  0., -2.,
        0.,  3.,  0.,
        4.,  0.,  5.,
        0., -6.,  7.,
    ];
    let b = &[0.5, -1., 2.];

    let csc = csc_from_rowmaj(4, 3, dense);
    let m = ACscMat::new(csc.size, &csc.values, &csc.row_idx, &csc.col_ptr);

    let x = &mut[0.; 4];
    m.spmv(b, x);

    assert_float_eq!(x.as_ref(), dense_mul(4, 3, dense, b).as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_spmv_unsorted_rows()
{
    /*
    1. 2.
    3. 4.
    */
    let m = ACscMat::new((2, 2), &[3., 1., 4., 2.], &[1, 0, 1, 0], &[0, 2, 4]);

    let x = &mut[0.; 2];
    m.spmv(&[1., 10.], x);

    assert_float_eq!(x.as_ref(), [21., 43.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_spmv_zero()
{
    let m = ACscMat::new((3, 3), &[], &[], &[0, 0, 0, 0]);

    let x = &mut[0.; 3];
    m.spmv(&[1., 2., 3.], x);

    assert_eq!(x, &[0.; 3]);
    assert_eq!(m.nnz(), 0);
}

#[test]
fn test_spmv_single()
{
    // only (2, 1) = 7
    let m = ACscMat::new((3, 2), &[7.], &[2], &[0, 0, 1]);

    let x = &mut[0.; 3];
    m.spmv(&[5., -2.], x);

    assert_float_eq!(x.as_ref(), [0., 0., -14.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_spmv_duplicate_rows()
{
    // column 0 lists row 1 twice: 2 + 3 accumulate to 5
    let m = ACscMat::new((2, 1), &[2., 1., 3.], &[1, 0, 1], &[0, 3]);

    let x = &mut[0.; 2];
    m.spmv(&[4.], x);

    assert_float_eq!(x.as_ref(), [4., 20.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_spmv_accumulate()
{
    let m = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);

    let x = &mut[10., 20.];
    m.spmv(&[1., 2.], x);
    assert_float_eq!(x.as_ref(), [11., 22.].as_ref(), abs_all <= 1e-12);

    m.spmv(&[1., 2.], x);
    assert_float_eq!(x.as_ref(), [12., 24.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_op_overwrites_garbage()
{
    let m = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 1, 2]);

    let x = &mut[f64::NAN, f64::INFINITY];
    m.op(1., &[3., 4.], 0., x);

    assert_float_eq!(x.as_ref(), [3., 4.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_trans_op_explicit()
{
    let dense = &[
        1.,  0., -2.,
        0.,  3.,  0.,
        4.,  0.,  5.,
        0., -6.,  7.,
    ];
    let dense_t = trans_rowmaj(4, 3, dense);

    let csc = csc_from_rowmaj(4, 3, dense);
    let csc_t = csc_from_rowmaj(3, 4, &dense_t);
    let m = ACscMat::new(csc.size, &csc.values, &csc.row_idx, &csc.col_ptr);
    let mt = ACscMat::new(csc_t.size, &csc_t.values, &csc_t.row_idx, &csc_t.col_ptr);

    let x = &[1., -1., 0.5, 2.];

    let y1 = &mut[1.; 3];
    m.trans_op(2., x, 3., y1);

    let y2 = &mut[1.; 3];
    mt.op(2., x, 3., y2);

    let y3 = &mut[1.; 3];
    TransOp::<La, _>::new(&m).op(2., x, 3., y3);

    assert_float_eq!(y1.as_ref(), y2.as_ref(), abs_all <= 1e-12);
    assert_float_eq!(y1.as_ref(), y3.as_ref(), abs_all <= 1e-12);
    assert_eq!(TransOp::<La, _>::new(&m).size(), (3, 4));
}

#[test]
#[should_panic]
fn test_malformed_col_ptr()
{
    let _ = ACscMat::new((2, 2), &[1., 1.], &[0, 1], &[0, 2, 1]);
}
