//! Small linear-algebra types for the 3-DoF pose problem.

/// 3x3 matrix in row-major nested arrays.
pub type Matrix3 = [[f32; 3]; 3];

/// 3-vector over (x, y, theta).
pub type Vector3 = [f32; 3];

/// Gauss-Newton normal equations for one linearization:
/// the approximate Hessian `H = J^T J` and the gradient `g = J^T r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HessianGradient {
    /// Symmetric 3x3 approximate Hessian.
    pub hessian: Matrix3,
    /// Gradient over (x, y, theta).
    pub gradient: Vector3,
}

impl HessianGradient {
    /// All-zero system (the degenerate result for a scan with no usable points).
    pub fn zero() -> Self {
        Self {
            hessian: [[0.0; 3]; 3],
            gradient: [0.0; 3],
        }
    }
}

/// Copy the upper triangle of a 3x3 matrix into the lower triangle.
pub(crate) fn mirror_upper_triangle(m: &mut Matrix3) {
    m[1][0] = m[0][1];
    m[2][0] = m[0][2];
    m[2][1] = m[1][2];
}
