//! Pattern 5: Moves, Clones, and Borrowed Operands
//! A matrix type that hands results back by value, never by leak
//!
//! Run with: cargo run --bin p5_ownership_moves

use thiserror::Error;

fn main() {
    println!("=== Moves on Assignment ===\n");

    let s1 = String::from("hello");
    let s2 = s1; // s1 is moved, not copied
    println!("s2 owns the data: {}", s2);
    // println!("{}", s1); // moved above

    let s3 = String::from("world");
    take_ownership(s3);
    // println!("{}", s3); // moved into the function

    println!("\n=== Multiplying Returns an Owned Result ===\n");

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();

    match a.multiply(&b) {
        Ok(product) => {
            println!("{}x{} * {}x{} -> {}x{}",
                a.rows(), a.cols(), b.rows(), b.cols(), product.rows(), product.cols());
            println!("product[0][0] = {}", product.get(0, 0));
        }
        Err(err) => println!("multiply failed: {}", err),
    }

    // Operands are borrowed, so both are still usable here.
    println!("a is still {}x{}, b is still {}x{}", a.rows(), a.cols(), b.rows(), b.cols());

    let first = Matrix::new(2, 5);
    let second = Matrix::new(2, 5);
    match first.multiply(&second) {
        Ok(product) => println!("unexpected product: {}x{}", product.rows(), product.cols()),
        Err(err) => println!("mismatch reported: {}", err),
    }

    println!("\n=== Swapping Without Copies ===\n");

    let mut left = Matrix::new(2, 5);
    let mut right = Matrix::new(5, 3);
    println!("before: left is {}x{}, right is {}x{}",
        left.rows(), left.cols(), right.rows(), right.cols());
    std::mem::swap(&mut left, &mut right);
    println!("after:  left is {}x{}, right is {}x{}",
        left.rows(), left.cols(), right.rows(), right.cols());

    println!("\n=== Clone When You Mean a Copy ===\n");

    let kept = a.clone();
    let archived = a;
    println!("kept a clone: {}x{}", kept.rows(), kept.cols());
    println!("archived the original: {}x{}", archived.rows(), archived.cols());
    // println!("{}", a.rows()); // moved into `archived` above

    println!("\n=== Borrow to Inspect, Take to Consume ===\n");

    let total = element_total(&kept);
    println!("element total (borrowed): {}", total);
    println!("kept is still usable: {}x{}", kept.rows(), kept.cols());

    let raw = into_elements(kept);
    println!("consumed into {} raw elements", raw.len());
    // println!("{}", kept.rows()); // moved into into_elements above

    println!("\n=== Key Points ===");
    println!("1. Assignment and by-value calls move; the old binding is dead");
    println!("2. Returning a value moves it out, so there is nothing to leak or delete");
    println!("3. mem::swap exchanges two values through &mut with no allocation");
    println!("4. Borrow (&T) to inspect, take (T) only when the callee keeps the data");
}

fn take_ownership(s: String) {
    println!("got: {}", s);
} // s is dropped here

#[derive(Error, Debug, PartialEq)]
enum MatrixError {
    #[error("cannot multiply a {left_rows}x{left_cols} matrix by a {right_rows}x{right_cols} one")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Row-major matrix of f64 elements.
#[derive(Debug, Clone, PartialEq)]
struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f64>,
}

impl Matrix {
    fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            elements: vec![0.0; rows * cols],
        }
    }

    fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(MatrixError::RaggedRows {
                    row: index,
                    expected: col_count,
                    found: row.len(),
                });
            }
        }
        Ok(Matrix {
            rows: row_count,
            cols: col_count,
            elements: rows.into_iter().flatten().collect(),
        })
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row * self.cols + col] = value;
    }

    /// Multiplies two borrowed operands and moves the freshly built result
    /// out to the caller.
    fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut result = Matrix::new(self.rows, other.cols);
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut cell = 0.0;
                for k in 0..self.cols {
                    cell += self.get(row, k) * other.get(k, col);
                }
                result.set(row, col, cell);
            }
        }
        Ok(result)
    }
}

fn element_total(matrix: &Matrix) -> f64 {
    matrix.elements.iter().sum()
}

// Takes the matrix by value: the buffer is handed on, not copied.
fn into_elements(matrix: Matrix) -> Vec<f64> {
    matrix.elements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_2x2_product() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.get(0, 0), 19.0);
        assert_eq!(product.get(0, 1), 22.0);
        assert_eq!(product.get(1, 0), 43.0);
        assert_eq!(product.get(1, 1), 50.0);
    }

    #[test]
    fn product_takes_its_dimensions_from_the_operands() {
        let a = Matrix::new(2, 5);
        let b = Matrix::new(5, 3);
        let product = a.multiply(&b).unwrap();
        assert_eq!((product.rows(), product.cols()), (2, 3));
    }

    #[test]
    fn incompatible_shapes_are_rejected() {
        let a = Matrix::new(2, 5);
        let b = Matrix::new(2, 5);
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::DimensionMismatch {
                left_rows: 2,
                left_cols: 5,
                right_rows: 2,
                right_cols: 5,
            })
        );
    }

    #[test]
    fn ragged_input_is_rejected() {
        let ragged = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(
            ragged,
            Err(MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn swap_exchanges_the_whole_value() {
        let mut left = Matrix::new(2, 5);
        let mut right = Matrix::new(5, 3);
        std::mem::swap(&mut left, &mut right);
        assert_eq!((left.rows(), left.cols()), (5, 3));
        assert_eq!((right.rows(), right.cols()), (2, 5));
    }

    #[test]
    fn clones_are_independent() {
        let original = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let mut copy = original.clone();
        copy.set(0, 0, 9.0);
        assert_eq!(original.get(0, 0), 1.0);
        assert_eq!(copy.get(0, 0), 9.0);
    }

    #[test]
    fn borrowing_total_leaves_the_matrix_usable() {
        let matrix = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(element_total(&matrix), 10.0);
        assert_eq!(matrix.rows(), 2);
        assert_eq!(into_elements(matrix), [1.0, 2.0, 3.0, 4.0]);
    }
}
