use num_traits::Float;
use core::marker::PhantomData;
use crate::LinAlg;

/// `num::Float`-generic [`LinAlg`] implementation
/// 
/// All numeric operations are written in pure Rust and run sequentially.
#[derive(Debug, Clone)]
pub struct FloatGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float> LinAlg for FloatGeneric<F>
{
    type F = F;

    fn norm(x: &[F]) -> F
    {
        let mut sum = F::zero();
        for u in x {
            sum = sum + *u * *u;
        }
        sum.sqrt()
    }

    fn dot(x: &[F], y: &[F]) -> F
    {
        assert_eq!(x.len(), y.len());

        let mut sum = F::zero();
        for (u, v) in x.iter().zip(y) {
            sum = sum + *u * *v;
        }
        sum
    }
    
    fn copy(x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());
    
        for (u, v) in x.iter().zip(y) {
            *v = *u;
        }
    }

    fn scale(alpha: F, x: &mut[F])
    {
        for u in x {
            *u = alpha * *u;
        }
    }
    
    fn add(alpha: F, x: &[F], y: &mut[F])
    {
        assert_eq!(x.len(), y.len());
    
        for (u, v) in x.iter().zip(y) {
            *v = *v + alpha * *u;
        }
    }

    fn transform_di(alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
    {
        assert_eq!(mat.len(), x.len());
        assert_eq!(mat.len(), y.len());

        for (i, v) in y.iter_mut().enumerate() {
            *v = alpha * mat[i] * x[i] + beta * *v;
        }
    }

    fn max_sq(x: &[F]) -> F
    {
        // NaN is kept, unlike Float::max
        x.iter().fold(F::zero(), |m, u| {
            let sq = *u * *u;
            if m >= sq || m.is_nan() { m } else { sq }
        })
    }
}

//

#[test]
fn test_floatgeneric1()
{
    use float_eq::assert_float_eq;

    type La = FloatGeneric<f64>;

    let x = &[3., -4., 0.];
    let y = &mut[1., 1., 1.];

    assert_float_eq!(La::norm(x), 5., abs <= 1e-12);
    assert_float_eq!(La::dot(x, y), -1., abs <= 1e-12);
    assert_float_eq!(La::max_sq(x), 16., abs <= 1e-12);
    assert_float_eq!(La::max_sq(&[]), 0., abs <= 1e-12);
    assert!(La::max_sq(&[f64::NAN, 0.]).is_nan());
    assert!(La::max_sq(&[0., f64::NAN, 1.]).is_nan());

    La::transform_di(2., &[1., 0., -1.], x, 1., y);
    assert_float_eq!(y.as_ref(), [7., 1., 1.].as_ref(), abs_all <= 1e-12);

    La::add(-1., x, y);
    assert_float_eq!(y.as_ref(), [4., 5., 1.].as_ref(), abs_all <= 1e-12);
}
