use thiserror::Error;

use crate::view::{ColumnView, Columns};

/// Error type for matrix construction and access.
///
/// All variants describe a violated precondition: the caller handed over data that
/// does not describe a rectangular two-dimensional matrix, or asked for an element
/// or column that does not exist.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// Matrix shape does not match the provided data.
    ///
    /// # Example
    /// ```ignore
    /// // Error: shape [2, 3] expects 6 elements, but got 5
    /// let m = Matrix::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5])?;
    /// ```
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// The input describes an array that is not two-dimensional.
    #[error("Expected a two-dimensional shape, got {0} dimensions")]
    NotTwoDimensional(usize),

    /// Nested row data is not rectangular.
    #[error("Ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Nested column data is not rectangular.
    #[error("Ragged columns: column {column} has {actual} elements, expected {expected}")]
    RaggedColumns {
        /// Index of the offending column
        column: usize,
        /// Length of the first column
        expected: usize,
        /// Length of the offending column
        actual: usize,
    },

    /// Index exceeds matrix bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// A slice written into the matrix has the wrong length.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },
}

impl MatrixError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error with clear context.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }

    /// Returns a user-friendly suggestion for resolving the error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::InvalidShape { .. } => {
                "Ensure rows * cols equals the number of data elements"
            }
            Self::NotTwoDimensional(_) => {
                "Reshape the input to exactly two dimensions (rows, cols)"
            }
            Self::RaggedRows { .. } => "Make every row the same length",
            Self::RaggedColumns { .. } => "Make every column the same length",
            Self::IndexOutOfBounds { .. } => {
                "Verify indices are within bounds (0 <= index < dimension_size)"
            }
            Self::LengthMismatch { .. } => {
                "A column slice must have exactly `rows` elements"
            }
        }
    }
}

/// Computes the strides for a row-major (C-contiguous) layout.
///
/// # Examples
///
/// ```rust
/// use orthonorm_tensor::matrix::get_strides_from_shape;
///
/// assert_eq!(get_strides_from_shape([2, 3]), [3, 1]);
/// assert_eq!(get_strides_from_shape([4, 0]), [0, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A dense two-dimensional matrix with owned, row-major data.
///
/// `shape` is `[rows, cols]`. Either dimension may be zero, in which case the matrix
/// holds no elements but still remembers its shape.
///
/// # Examples
///
/// ```rust
/// use orthonorm_tensor::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
/// assert_eq!(m.shape, [2, 2]);
/// assert_eq!(m.get([1, 1]), Some(&1.0));
///
/// let col: Vec<f64> = m.column(1).unwrap().to_vec();
/// assert_eq!(col, vec![1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    /// The shape of the matrix as `[rows, cols]`.
    pub shape: [usize; 2],
    /// The strides of the matrix data in memory.
    pub strides: [usize; 2],
}

impl<T> Matrix<T> {
    /// Creates a new `Matrix` with the given shape and row-major data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use orthonorm_tensor::Matrix;
    ///
    /// let m = Matrix::from_shape_vec([2, 2], vec![1u8, 2, 3, 4]).unwrap();
    /// assert_eq!(m.strides, [2, 1]);
    /// ```
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, MatrixError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Matrix` from a dynamically sized shape.
    ///
    /// This is the entry point for data whose dimensionality is only known at runtime,
    /// e.g. decoded from a file.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotTwoDimensional`] unless `shape` has exactly two entries,
    /// and [`MatrixError::InvalidShape`] if the data length does not match.
    pub fn from_dyn_shape(shape: &[usize], data: Vec<T>) -> Result<Self, MatrixError> {
        let shape: [usize; 2] = shape
            .try_into()
            .map_err(|_| MatrixError::NotTwoDimensional(shape.len()))?;
        Self::from_shape_vec(shape, data)
    }

    /// Creates a new `Matrix` from nested rows.
    ///
    /// An empty outer vector yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] if any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: ncols,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_shape_vec([nrows, ncols], data)
    }

    /// Creates a new `Matrix` from nested columns.
    ///
    /// An empty outer vector yields a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedColumns`] if any column differs in length from the first.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let ncols = columns.len();
        let nrows = columns.first().map_or(0, Vec::len);
        let mut col_major = Vec::with_capacity(nrows * ncols);
        for (column, values) in columns.into_iter().enumerate() {
            if values.len() != nrows {
                return Err(MatrixError::RaggedColumns {
                    column,
                    expected: nrows,
                    actual: values.len(),
                });
            }
            col_major.extend(values);
        }
        Self::from_column_major([nrows, ncols], col_major)
    }

    /// Creates a new `Matrix` from column-major data.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    pub fn from_column_major(shape: [usize; 2], data: Vec<T>) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let [rows, cols] = shape;
        let numel = rows * cols;
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        let mut row_major = Vec::with_capacity(numel);
        for i in 0..rows {
            for j in 0..cols {
                row_major.push(data[j * rows + i].clone());
            }
        }
        Self::from_shape_vec(shape, row_major)
    }

    /// Creates a new `Matrix` filled with `value`.
    pub fn from_shape_val(shape: [usize; 2], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            data: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Creates a new `Matrix` filled with zeros.
    pub fn zeros(shape: [usize; 2]) -> Self
    where
        T: Clone + num_traits::Zero,
    {
        Self::from_shape_val(shape, T::zero())
    }

    /// Creates a new `Matrix` by calling `f([i, j])` for every element in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use orthonorm_tensor::Matrix;
    ///
    /// let eye = Matrix::from_shape_fn([2, 2], |[i, j]| if i == j { 1.0 } else { 0.0 });
    /// assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; 2], f: F) -> Self
    where
        F: Fn([usize; 2]) -> T,
    {
        let [rows, cols] = shape;
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| [i, j]))
            .map(f)
            .collect();
        Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Slice a matrix from an already existing row-major slice.
    ///
    /// # Errors
    ///
    /// If the number of elements in the data does not match the shape, an error is returned.
    pub fn from_shape_slice(shape: [usize; 2], data: &[T]) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        Self::from_shape_vec(shape, data.to_vec())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Returns the number of elements in the matrix.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the row-major data as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns the row-major data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, index: [usize; 2]) -> Option<usize> {
        let [i, j] = index;
        if i >= self.shape[0] || j >= self.shape[1] {
            return None;
        }
        Some(i * self.strides[0] + j * self.strides[1])
    }

    /// Get the element at `[row, col]`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; 2]) -> Option<&T> {
        self.offset(index).and_then(|o| self.data.get(o))
    }

    /// Get a mutable reference to the element at `[row, col]`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: [usize; 2]) -> Option<&mut T> {
        self.offset(index).and_then(|o| self.data.get_mut(o))
    }

    /// Returns a strided view of column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `j >= cols`.
    pub fn column(&self, j: usize) -> Result<ColumnView<'_, T>, MatrixError> {
        if j >= self.cols() {
            return Err(MatrixError::index_out_of_bounds(j, self.cols()));
        }
        Ok(ColumnView::new(&self.data, j, self.strides[0], self.rows()))
    }

    /// Iterates over all columns from left to right.
    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(&self.data, self.rows(), self.cols())
    }

    /// Overwrites column `j` with `values`.
    ///
    /// # Errors
    ///
    /// Returns an error if `j` is out of bounds or `values.len() != rows`.
    pub fn set_column(&mut self, j: usize, values: &[T]) -> Result<(), MatrixError>
    where
        T: Clone,
    {
        if j >= self.cols() {
            return Err(MatrixError::index_out_of_bounds(j, self.cols()));
        }
        if values.len() != self.rows() {
            return Err(MatrixError::LengthMismatch {
                expected: self.rows(),
                actual: values.len(),
            });
        }
        let stride = self.strides[0];
        for (i, v) in values.iter().enumerate() {
            self.data[i * stride + j] = v.clone();
        }
        Ok(())
    }

    /// Returns a copy of the data laid out column by column.
    pub fn to_column_major(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.columns().flat_map(|c| c.iter().cloned()).collect()
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        let shape = [self.cols(), self.rows()];
        Self {
            data: self.to_column_major(),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Apply a function to each element of the matrix.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: Fn(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Lossless element conversion, e.g. `u8` to `f32` or `i32` to `f64`.
    ///
    /// # Example
    ///
    /// ```
    /// use orthonorm_tensor::Matrix;
    ///
    /// let m = Matrix::from_shape_vec([1, 3], vec![1u8, 2, 3]).unwrap();
    /// let f = m.cast::<f64>();
    /// assert_eq!(f.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn cast<U>(&self) -> Matrix<U>
    where
        U: From<T>,
        T: Clone,
    {
        self.map(|x| U::from(x.clone()))
    }
}
