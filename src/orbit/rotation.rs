use super::vec3d::Vec3D;
use std::ops::Mul;

/// A 3x3 row-major matrix used for frame rotations.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3 {
    data: [[f64; 3]; 3],
}

impl Matrix3 {
    pub fn new(data: [[f64; 3]; 3]) -> Self { Matrix3 { data } }

    /// Builds the 3-1-3 rotation taking perifocal coordinates into the inertial frame.
    ///
    /// # Arguments
    /// - `raan`: Longitude of the ascending node Ω in radians.
    /// - `argp`: Argument of periapsis w in radians.
    /// - `inc`: Inclination i in radians.
    ///
    /// # Returns
    /// - The matrix `R3(-Ω) · R1(-i) · R3(-w)`.
    pub fn perifocal_to_inertial(raan: f64, argp: f64, inc: f64) -> Self {
        let (sin_o, cos_o) = raan.sin_cos();
        let (sin_w, cos_w) = argp.sin_cos();
        let (sin_i, cos_i) = inc.sin_cos();
        Self::new([
            [
                cos_o * cos_w - sin_o * sin_w * cos_i,
                -cos_o * sin_w - sin_o * cos_w * cos_i,
                sin_o * sin_i,
            ],
            [
                sin_o * cos_w + cos_o * sin_w * cos_i,
                -sin_o * sin_w + cos_o * cos_w * cos_i,
                -cos_o * sin_i,
            ],
            [sin_w * sin_i, cos_w * sin_i, cos_i],
        ])
    }
}

impl Mul<Vec3D> for Matrix3 {
    type Output = Vec3D;

    fn mul(self, rhs: Vec3D) -> Self::Output {
        let row = |r: &[f64; 3]| r[0] * rhs.x() + r[1] * rhs.y() + r[2] * rhs.z();
        Vec3D::new(row(&self.data[0]), row(&self.data[1]), row(&self.data[2]))
    }
}

#[cfg(test)]
impl Matrix3 {
    pub fn identity() -> Self { Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]) }

    pub fn get(&self, row: usize, col: usize) -> f64 { self.data[row][col] }

    pub fn transpose(&self) -> Self {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in self.data.iter().enumerate() {
            for (j, val) in row.iter().enumerate() {
                result[j][i] = *val;
            }
        }
        Matrix3::new(result)
    }
}

#[cfg(test)]
impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, val) in row.iter_mut().enumerate() {
                *val = (0..3).map(|k| self.data[i][k] * rhs.data[k][j]).sum();
            }
        }
        Matrix3::new(result)
    }
}
