use crate::error::InvalidInput;

/// Row-major luminance grid, one `u8` level per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayGrid {
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a grid from rows of luminance values; rows must be equally long
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, InvalidInput> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(InvalidInput::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Luminance values in row-major order
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Luminance at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.data.chunks(self.width).map(<[u8]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_grid() {
        let gray = GrayGrid::from_rows(&[[10u8, 20, 30], [40, 50, 60]]).unwrap();
        assert_eq!(gray.width(), 3);
        assert_eq!(gray.height(), 2);
        assert_eq!(gray.get(2, 1), Some(60));
        assert_eq!(gray.get(3, 0), None);
        assert_eq!(gray.to_rows(), vec![vec![10, 20, 30], vec![40, 50, 60]]);
    }

    #[test]
    fn test_ragged() {
        let rows = vec![vec![1u8, 2], vec![3]];
        assert!(matches!(
            GrayGrid::from_rows(&rows),
            Err(InvalidInput::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_zero_width_rows() {
        let rows: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
        let gray = GrayGrid::from_rows(&rows).unwrap();
        assert_eq!(gray.to_rows(), vec![Vec::<u8>::new(), Vec::new()]);
    }
}
