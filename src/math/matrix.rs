use serde::{Serialize, Deserialize};
use std::ops::AddAssign;

/// Dense matrix over `f64` with a contiguous row-major buffer.
///
/// `Clone` duplicates the buffer; moving a `Matrix` transfers ownership of
/// the buffer. Invariant: `data.len() == rows * cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from nested rows. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Matrix {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(height * width);
        for row in &rows {
            assert_eq!(row.len(), width, "rows must have equal length");
            data.extend_from_slice(row);
        }
        Matrix { rows: height, cols: width, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Overwrites every entry with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Row-vector product: `r[j] = Σ_i self[i][j] * v[i]`.
    ///
    /// Rows index the incoming vector, columns the result, which is the
    /// orientation the forward pass uses.
    pub fn multiply(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.rows, "vector length must equal matrix height");

        let mut r = vec![0.0; self.cols];
        for i in 0..self.rows {
            let row = self.row(i);
            for j in 0..self.cols {
                r[j] += row[j] * v[i];
            }
        }

        r
    }

    /// Transposed product: `r[j] = Σ_i self[j][i] * v[i]`.
    ///
    /// Carries a delta vector from a layer's output side back to its input
    /// side without materializing the transpose.
    pub fn multiply_transposed(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.cols, "vector length must equal matrix width");

        let mut r = vec![0.0; self.rows];
        for j in 0..self.rows {
            let row = self.row(j);
            for i in 0..self.cols {
                r[j] += row[i] * v[i];
            }
        }

        r
    }

    /// Returns a new matrix with dimensions swapped and values mirrored.
    pub fn transposed(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.set(j, i, self.at(i, j));
            }
        }

        res
    }

    /// Outer product: `m[i][j] = a[i] * b[j]`, shape `(a.len(), b.len())`.
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        let mut res = Matrix::zeros(a.len(), b.len());

        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                res.set(i, j, ai * bj);
            }
        }

        res
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        assert_eq!(self.rows, rhs.rows, "matrices must have equal height");
        assert_eq!(self.cols, rhs.cols, "matrices must have equal width");

        for (l, r) in self.data.iter_mut().zip(rhs.data.iter()) {
            *l += *r;
        }
    }
}
