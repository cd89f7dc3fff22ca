#![allow(dead_code)]

/// CSC arrays of a matrix.
pub struct Csc
{
    pub size: (usize, usize),
    pub values: Vec<f64>,
    pub row_idx: Vec<usize>,
    pub col_ptr: Vec<usize>,
}

/// Converts a row-major dense matrix to CSC, dropping zeros.
pub fn csc_from_rowmaj(n_row: usize, n_col: usize, dense: &[f64]) -> Csc
{
    assert_eq!(dense.len(), n_row * n_col);

    let mut values = Vec::new();
    let mut row_idx = Vec::new();
    let mut col_ptr = vec![0];

    for c in 0.. n_col {
        for r in 0.. n_row {
            let v = dense[r * n_col + c];
            if v != 0. {
                values.push(v);
                row_idx.push(r);
            }
        }
        col_ptr.push(values.len());
    }

    Csc {
        size: (n_row, n_col),
        values, row_idx, col_ptr,
    }
}

/// Transposes a row-major dense matrix.
pub fn trans_rowmaj(n_row: usize, n_col: usize, dense: &[f64]) -> Vec<f64>
{
    let mut t = vec![0.; n_row * n_col];
    for r in 0.. n_row {
        for c in 0.. n_col {
            t[c * n_row + r] = dense[r * n_col + c];
        }
    }
    t
}

/// Dense reference product of a row-major matrix.
pub fn dense_mul(n_row: usize, n_col: usize, dense: &[f64], x: &[f64]) -> Vec<f64>
{
    (0.. n_row).map(|r| {
        (0.. n_col).map(|c| dense[r * n_col + c] * x[c]).sum()
    }).collect()
}

/// Row-major diagonal matrix.
pub fn diag_rowmaj(d: &[f64]) -> Vec<f64>
{
    let n = d.len();
    let mut m = vec![0.; n * n];
    for (i, v) in d.iter().enumerate() {
        m[i * n + i] = *v;
    }
    m
}
