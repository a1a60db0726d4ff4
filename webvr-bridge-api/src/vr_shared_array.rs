/// Number of floats in one transform block.
pub const MATRIX_LEN: usize = 16;

/// Number of transform blocks the host writes every frame:
/// left projection, right projection, left view, right view, sit-to-stand.
pub const SHARED_MATRIX_COUNT: usize = 5;

pub const SHARED_ARRAY_LEN: usize = MATRIX_LEN * SHARED_MATRIX_COUNT;

// Snapshot of the flat buffer the host writes headset data into.
// The host publishes all 80 values before the frame starts, so a snapshot
// never observes a partially written frame.
#[derive(Clone, Copy)]
pub struct VRSharedArray(pub [f32; SHARED_ARRAY_LEN]);

impl Default for VRSharedArray {
    fn default() -> VRSharedArray {
        let mut array = [0f32; SHARED_ARRAY_LEN];
        for index in 0..SHARED_MATRIX_COUNT {
            array[index * MATRIX_LEN..(index + 1) * MATRIX_LEN].copy_from_slice(&identity_matrix!());
        }
        VRSharedArray(array)
    }
}

impl ::std::fmt::Debug for VRSharedArray {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl PartialEq for VRSharedArray {
    fn eq(&self, other: &VRSharedArray) -> bool {
        self.0[..] == other.0[..]
    }
}

impl VRSharedArray {
    /// Copies the block at `index` out of the buffer.
    /// Panics if `index` is not below `SHARED_MATRIX_COUNT`.
    pub fn block(&self, index: usize) -> [f32; MATRIX_LEN] {
        let mut block = [0f32; MATRIX_LEN];
        block.copy_from_slice(&self.0[index * MATRIX_LEN..(index + 1) * MATRIX_LEN]);
        block
    }

    pub fn set_block(&mut self, index: usize, block: &[f32; MATRIX_LEN]) {
        self.0[index * MATRIX_LEN..(index + 1) * MATRIX_LEN].copy_from_slice(block);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_five_identities() {
        let array = VRSharedArray::default();
        for index in 0..SHARED_MATRIX_COUNT {
            assert_eq!(array.block(index), identity_matrix!());
        }
    }

    #[test]
    fn blocks_do_not_overlap() {
        let mut array = VRSharedArray([0.0; SHARED_ARRAY_LEN]);
        let block: [f32; 16] = [7.0; 16];
        array.set_block(3, &block);
        assert_eq!(array.block(3), block);
        assert_eq!(array.block(2), [0.0; 16]);
        assert_eq!(array.block(4), [0.0; 16]);
        assert_eq!(array.as_slice()[3 * 16], 7.0);
        assert_eq!(array.as_slice()[4 * 16], 0.0);
    }
}
