/*!
 * Feature matrix type
 *
 * A [Matrix] holds a dataset with one sample per row and one feature per column. Every row
 * always has the same number of columns, and there is always at least one of each.
 */

use std::error::Error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum row and column lengths are usize, due to the internal storage being backed by
/// a Vec
pub type Row = usize;
pub type Column = usize;

/**
 * A general purpose matrix of some type, stored in row major order.
 *
 * The classifier reads each row as a sample and each column as a feature.
 */
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixRecord<T>"))]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: Row,
    columns: Column,
}

/**
 * The unvalidated fields of a [Matrix], as read by a deserializer before the shape is checked.
 */
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct MatrixRecord<T> {
    data: Vec<T>,
    rows: Row,
    columns: Column,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixRecord<T>> for Matrix<T> {
    type Error = InvalidShapeError;

    fn try_from(record: MatrixRecord<T>) -> Result<Self, Self::Error> {
        Matrix::try_from_flat_row_major((record.rows, record.columns), record.data)
    }
}

/**
 * An error indicating that some data could not be arranged into a matrix of the requested
 * size.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidShapeError {
    pub rows: Row,
    pub columns: Column,
    pub elements: usize,
}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot arrange {} elements into a {}x{} matrix, matrices need at least one row and column",
            self.elements, self.rows, self.columns
        )
    }
}

impl Error for InvalidShapeError {}

/**
 * Methods for matrices of any type.
 */
impl<T> Matrix<T> {
    /**
     * Creates a matrix from a nested array of values, each inner vector
     * being a row, and hence the outer vector containing all rows in sequence, the
     * same way as when writing matrices in mathematics.
     *
     * Example of a 2 x 3 matrix in both notations:
     * ```ignore
     *   [
     *      1, 2, 4
     *      8, 9, 3
     *   ]
     * ```
     * ```
     * use gaussian_bayes::matrices::Matrix;
     * let matrix = Matrix::from(vec![
     *     vec![ 1.0, 2.0, 4.0 ],
     *     vec![ 8.0, 9.0, 3.0 ]]);
     * assert_eq!(matrix.size(), (2, 3));
     * ```
     *
     * # Panics
     *
     * Panics if there are no rows, the first row is empty, or the rows are not all the
     * same length.
     */
    pub fn from(values: Vec<Vec<T>>) -> Matrix<T> {
        assert!(!values.is_empty(), "No rows defined");
        let columns = values[0].len();
        assert!(columns > 0, "No column defined");
        assert!(
            values.iter().all(|row| row.len() == columns),
            "Inconsistent size"
        );
        let rows = values.len();
        Matrix {
            data: values.into_iter().flatten().collect(),
            rows,
            columns,
        }
    }

    /**
     * Creates a column vector (Nx1) from a list, a dataset of N samples with a single feature.
     *
     * # Panics
     *
     * Panics if the list is empty.
     */
    pub fn column(values: Vec<T>) -> Matrix<T> {
        assert!(!values.is_empty(), "No rows defined");
        Matrix {
            rows: values.len(),
            columns: 1,
            data: values,
        }
    }

    /**
     * Creates a matrix of the provided size from a flat list of values in row major order.
     *
     * # Panics
     *
     * Panics if either dimension is 0 or the number of values does not match the size.
     */
    pub fn from_flat_row_major(size: (Row, Column), values: Vec<T>) -> Matrix<T> {
        match Matrix::try_from_flat_row_major(size, values) {
            Ok(matrix) => matrix,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates a matrix of the provided size from a flat list of values in row major order,
     * returning an error instead of panicking if the values don't fit the size.
     */
    pub fn try_from_flat_row_major(
        (rows, columns): (Row, Column),
        values: Vec<T>,
    ) -> Result<Matrix<T>, InvalidShapeError> {
        if rows == 0 || columns == 0 || rows * columns != values.len() {
            return Err(InvalidShapeError {
                rows,
                columns,
                elements: values.len(),
            });
        }
        Ok(Matrix {
            data: values,
            rows,
            columns,
        })
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn size(&self) -> (Row, Column) {
        (self.rows, self.columns)
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        self.rows
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        self.columns
    }

    /**
     * Gets a reference to the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    pub fn get_reference(&self, row: Row, column: Column) -> &T {
        assert!(row < self.rows, "Row out of index");
        assert!(column < self.columns, "Column out of index");
        &self.data[self.index(row, column)]
    }

    /**
     * Gets the values of a row as a slice.
     *
     * # Panics
     *
     * Panics if the row does not exist in this matrix.
     */
    pub fn row_slice(&self, row: Row) -> &[T] {
        assert!(row < self.rows, "Row out of index");
        let start = self.index(row, 0);
        &self.data[start..start + self.columns]
    }

    /**
     * Returns an iterator over references to a row vector in this matrix.
     *
     * # Panics
     *
     * Panics if the row does not exist in this matrix.
     */
    pub fn row_reference_iter(&self, row: Row) -> std::slice::Iter<'_, T> {
        self.row_slice(row).iter()
    }

    /**
     * Returns an iterator over references to a column vector in this matrix.
     *
     * # Panics
     *
     * Panics if the column does not exist in this matrix.
     */
    pub fn column_reference_iter(&self, column: Column) -> std::iter::StepBy<std::slice::Iter<'_, T>> {
        assert!(column < self.columns, "Column out of index");
        self.data[column..].iter().step_by(self.columns)
    }

    fn index(&self, row: Row, column: Column) -> usize {
        row * self.columns + column
    }
}

/**
 * Methods for matrices with types that can be copied, but still not neccessarily numerical.
 */
impl<T: Clone> Matrix<T> {
    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     *
     * # Panics
     *
     * Panics if the index is out of range.
     */
    pub fn get(&self, row: Row, column: Column) -> T {
        self.get_reference(row, column).clone()
    }

    /**
     * Returns an iterator over a row vector in this matrix.
     *
     * ```
     * use gaussian_bayes::matrices::Matrix;
     * let matrix = Matrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
     * assert_eq!(matrix.row_iter(1).collect::<Vec<f64>>(), vec![3.0, 4.0]);
     * ```
     *
     * # Panics
     *
     * Panics if the row does not exist in this matrix.
     */
    pub fn row_iter(&self, row: Row) -> impl Iterator<Item = T> + '_ {
        self.row_reference_iter(row).cloned()
    }

    /**
     * Returns an iterator over a column vector in this matrix.
     *
     * ```
     * use gaussian_bayes::matrices::Matrix;
     * let matrix = Matrix::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
     * assert_eq!(matrix.column_iter(1).collect::<Vec<f64>>(), vec![2.0, 4.0]);
     * ```
     *
     * # Panics
     *
     * Panics if the column does not exist in this matrix.
     */
    pub fn column_iter(&self, column: Column) -> impl Iterator<Item = T> + '_ {
        self.column_reference_iter(column).cloned()
    }

    /**
     * Creates a new matrix from the listed rows of this one, in the order they are listed.
     * Rows may be listed more than once.
     *
     * # Panics
     *
     * Panics if no rows are listed or any listed row does not exist in this matrix.
     */
    pub fn select_rows(&self, rows: &[Row]) -> Matrix<T> {
        assert!(!rows.is_empty(), "No rows defined");
        let mut data = Vec::with_capacity(rows.len() * self.columns);
        for &row in rows {
            data.extend_from_slice(self.row_slice(row));
        }
        Matrix {
            data,
            rows: rows.len(),
            columns: self.columns,
        }
    }
}
