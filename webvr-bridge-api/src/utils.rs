use time::OffsetDateTime;

// Returns the current time in milliseconds
pub fn timestamp() -> f64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 * 1e-6
}

// Extracts the rotation of a column major transform as an x/y/z/w quaternion.
// Adapted from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
// Element (row, col) of a column major matrix lives at index col * 4 + row.
// Branches on the largest of the trace and diagonal so half turns stay well defined.
#[inline]
pub fn matrix_to_quat(m: &[f32; 16]) -> [f32; 4] {
    let (m00, m01, m02) = (m[0], m[4], m[8]);
    let (m10, m11, m12) = (m[1], m[5], m[9]);
    let (m20, m21, m22) = (m[2], m[6], m[10]);
    let trace = m00 + m11 + m22;

    let q = if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        [(m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s]
    } else if m00 > m11 && m00 > m22 {
        let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
        [0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s]
    } else if m11 > m22 {
        let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
        [(m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s]
    } else {
        let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
        [(m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s]
    };

    normalize_quat(q)
}

// Scaled matrices leave a non-unit quaternion; a degenerate one falls back to identity.
fn normalize_quat(q: [f32; 4]) -> [f32; 4] {
    let len = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if len > 0.0 && len.is_finite() {
        [q[0] / len, q[1] / len, q[2] / len, q[3] / len]
    } else {
        [0.0, 0.0, 0.0, 1.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_quat_eq(actual: [f32; 4], expected: [f32; 4]) {
        for i in 0..4 {
            assert!((actual[i] - expected[i]).abs() < 1e-5, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn identity_has_no_rotation() {
        assert_quat_eq(matrix_to_quat(&identity_matrix!()), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn quarter_turn_about_z() {
        // columns: x axis -> +y, y axis -> -x
        let m = [0.0, 1.0, 0.0, 0.0,
                -1.0, 0.0, 0.0, 0.0,
                 0.0, 0.0, 1.0, 0.0,
                 0.0, 0.0, 0.0, 1.0];
        let half = ::std::f32::consts::FRAC_1_SQRT_2;
        assert_quat_eq(matrix_to_quat(&m), [0.0, 0.0, half, half]);
    }

    #[test]
    fn translation_is_ignored() {
        let mut m = identity_matrix!();
        m[12] = 3.0;
        m[13] = -1.0;
        assert_quat_eq(matrix_to_quat(&m), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn timestamp_is_positive() {
        assert!(timestamp() > 0.0);
    }

    #[test]
    fn half_turns_give_unit_quaternions() {
        // diag(-1, 1, -1): half turn about Y
        let mut m = identity_matrix!();
        m[0] = -1.0;
        m[10] = -1.0;
        assert_quat_eq(matrix_to_quat(&m), [0.0, 1.0, 0.0, 0.0]);

        // diag(1, -1, -1): half turn about X
        let mut m = identity_matrix!();
        m[5] = -1.0;
        m[10] = -1.0;
        assert_quat_eq(matrix_to_quat(&m), [1.0, 0.0, 0.0, 0.0]);

        // diag(-1, -1, 1): half turn about Z
        let mut m = identity_matrix!();
        m[0] = -1.0;
        m[5] = -1.0;
        assert_quat_eq(matrix_to_quat(&m), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn scale_is_normalized_away() {
        let mut m = identity_matrix!();
        m[0] = 2.0;
        m[5] = 2.0;
        m[10] = 2.0;
        assert_quat_eq(matrix_to_quat(&m), [0.0, 0.0, 0.0, 1.0]);
    }
}
