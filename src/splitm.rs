/// Splits a mutable slice into consecutive named sub-slices.
macro_rules! splitm_mut {
    ($slice:expr, $( ($var:ident; $len:expr) ),+ ) => {
        let _splitm_rest = &mut $slice[..];
        $(
            let ($var, _splitm_rest) = _splitm_rest.split_at_mut($len);
        )*
        let _ = _splitm_rest;
    };
}
