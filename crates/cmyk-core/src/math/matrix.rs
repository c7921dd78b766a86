//! 3x3 matrices for color space transforms
//!
//! All operations use f64.

/// Row-major 3x3 matrix: `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn diagonal(d0: f64, d1: f64, d2: f64) -> Self {
        Self {
            m: [[d0, 0.0, 0.0], [0.0, d1, 0.0], [0.0, 0.0, d2]],
        }
    }

    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Returns self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m: result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_diagonal_is_identity() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(Matrix3x3::diagonal(1.0, 1.0, 1.0).multiply_vec(v), v);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let c = a.multiply(&Matrix3x3::diagonal(2.0, 2.0, 2.0));
        assert_eq!(c.m[0], [2.0, 4.0, 6.0]);
        assert_eq!(c.m[2], [14.0, 16.0, 18.0]);
        assert_eq!(a.multiply(&Matrix3x3::diagonal(1.0, 1.0, 1.0)), a);
    }
}
