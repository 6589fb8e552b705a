/// A non-owning, strided view of one matrix column.
///
/// The view borrows the row-major storage of a [`crate::Matrix`] and walks it with a
/// stride equal to the number of columns, so reading a column never copies data.
///
/// # Examples
///
/// ```rust
/// use orthonorm_tensor::Matrix;
///
/// let m = Matrix::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let c = m.column(2).unwrap();
/// assert_eq!(c.len(), 2);
/// assert_eq!(c.get(1), Some(&6));
/// assert_eq!(c.iter().copied().sum::<i32>(), 9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColumnView<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T> ColumnView<'a, T> {
    pub(crate) fn new(data: &'a [T], offset: usize, stride: usize, len: usize) -> Self {
        Self {
            data,
            offset,
            stride,
            len,
        }
    }

    /// Number of elements in the column, i.e. the number of matrix rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true for columns of a matrix with zero rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the element at row `i`, or `None` if out of bounds.
    pub fn get(&self, i: usize) -> Option<&'a T> {
        if i >= self.len {
            return None;
        }
        self.data.get(self.offset + i * self.stride)
    }

    /// Iterates over the column top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let data: &'a [T] = self.data;
        // stride is the column count, which is nonzero whenever a column exists
        data.iter()
            .skip(self.offset)
            .step_by(self.stride.max(1))
            .take(self.len)
    }

    /// Copies the column into a new vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Iterator over the columns of a matrix, left to right.
#[derive(Debug, Clone)]
pub struct Columns<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    next: usize,
}

impl<'a, T> Columns<'a, T> {
    pub(crate) fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Self {
            data,
            rows,
            cols,
            next: 0,
        }
    }
}

impl<'a, T> Iterator for Columns<'a, T> {
    type Item = ColumnView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.cols {
            return None;
        }
        let view = ColumnView::new(self.data, self.next, self.cols, self.rows);
        self.next += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cols - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Columns<'_, T> {}
