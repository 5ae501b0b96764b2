//! Row-major 4×4 transform helpers
//!
//! All matrices here hold `lin_alg` [`Mat4`] data in row-major order with the
//! translation in column 3. Wire formats that ship column-major arrays go
//! through [`mat4_from_column_major`].

use lin_alg::f32::{Mat4, Vec3};

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, //
];

/// The identity transform
pub fn identity_mat4() -> Mat4 {
    Mat4 { data: IDENTITY }
}

/// Pure translation
pub fn translation_mat4(t: Vec3) -> Mat4 {
    let mut m = identity_mat4();
    m.data[3] = t.x;
    m.data[7] = t.y;
    m.data[11] = t.z;
    m
}

/// Left-multiply: result = left * right
pub fn left_multiply_mat4(left: &Mat4, right: &Mat4) -> Mat4 {
    let l = &left.data;
    let r = &right.data;
    let mut out = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = l[row * 4] * r[col]
                + l[row * 4 + 1] * r[4 + col]
                + l[row * 4 + 2] * r[8 + col]
                + l[row * 4 + 3] * r[12 + col];
        }
    }
    Mat4 { data: out }
}

/// Transform a point (homogeneous, w=1)
pub fn transform_mat4(m: &Mat4, v: Vec3) -> Vec3 {
    Vec3::new(
        m.data[0] * v.x + m.data[1] * v.y + m.data[2] * v.z + m.data[3],
        m.data[4] * v.x + m.data[5] * v.y + m.data[6] * v.z + m.data[7],
        m.data[8] * v.x + m.data[9] * v.y + m.data[10] * v.z + m.data[11],
    )
}

/// Check if a matrix is approximately identity
pub fn is_identity_mat4(m: &Mat4) -> bool {
    m.data
        .iter()
        .zip(IDENTITY.iter())
        .all(|(a, b)| (a - b).abs() < 1e-4)
}

/// Check that the upper-left 3×3 block is orthonormal with determinant +1
/// and the bottom row is `[0, 0, 0, 1]`
pub fn is_rigid_mat4(m: &Mat4) -> bool {
    let d = &m.data;
    if (d[12].abs() + d[13].abs() + d[14].abs()) > 1e-4 || (d[15] - 1.0).abs() > 1e-4 {
        return false;
    }
    let rows = [
        [d[0], d[1], d[2]],
        [d[4], d[5], d[6]],
        [d[8], d[9], d[10]],
    ];
    for i in 0..3 {
        for j in 0..3 {
            let dot: f32 = (0..3).map(|k| rows[i][k] * rows[j][k]).sum();
            let expected = if i == j { 1.0 } else { 0.0 };
            if (dot - expected).abs() > 1e-3 {
                return false;
            }
        }
    }
    let det = rows[0][0] * (rows[1][1] * rows[2][2] - rows[1][2] * rows[2][1])
        - rows[0][1] * (rows[1][0] * rows[2][2] - rows[1][2] * rows[2][0])
        + rows[0][2] * (rows[1][0] * rows[2][1] - rows[1][1] * rows[2][0]);
    (det - 1.0).abs() < 1e-3
}

/// Convert a column-major 16-element array into a row-major matrix
pub fn mat4_from_column_major(values: &[f32; 16]) -> Mat4 {
    let mut data = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            data[row * 4 + col] = values[col * 4 + row];
        }
    }
    Mat4 { data }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot_z_90() -> Mat4 {
        let mut m = identity_mat4();
        m.data[0] = 0.0;
        m.data[1] = -1.0;
        m.data[4] = 1.0;
        m.data[5] = 0.0;
        m
    }

    #[test]
    fn test_left_multiply_identity() {
        let m = translation_mat4(Vec3::new(1.0, 2.0, 3.0));
        let result = left_multiply_mat4(&identity_mat4(), &m);
        assert_eq!(result.data, m.data);
    }

    #[test]
    fn test_multiply_order() {
        // rotate first, then translate
        let t = translation_mat4(Vec3::new(5.0, 0.0, 0.0));
        let m = left_multiply_mat4(&t, &rot_z_90());
        let p = transform_mat4(&m, Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 5.0).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_identity() {
        assert!(is_identity_mat4(&identity_mat4()));
        let mut m = identity_mat4();
        m.data[3] = 0.1;
        assert!(!is_identity_mat4(&m));
    }

    #[test]
    fn test_transform_mat4() {
        let m = translation_mat4(Vec3::new(5.0, 0.0, 0.0));
        let result = transform_mat4(&m, Vec3::new(1.0, 2.0, 3.0));
        assert!((result.x - 6.0).abs() < 1e-6);
        assert!((result.y - 2.0).abs() < 1e-6);
        assert!((result.z - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_rigid() {
        assert!(is_rigid_mat4(&rot_z_90()));
        assert!(is_rigid_mat4(&translation_mat4(Vec3::new(1.0, 1.0, 1.0))));
        let mut scaled = identity_mat4();
        scaled.data[0] = 2.0;
        assert!(!is_rigid_mat4(&scaled));
    }

    #[test]
    fn test_column_major_conversion() {
        // column-major translation sits in elements 12..15
        let mut cm = [0.0f32; 16];
        cm[0] = 1.0;
        cm[5] = 1.0;
        cm[10] = 1.0;
        cm[15] = 1.0;
        cm[12] = 7.0;
        let m = mat4_from_column_major(&cm);
        assert_eq!(m.data[3], 7.0);
        assert_eq!(m.data[12], 0.0);
    }
}
