use euclid::default::Point3D;
use super::scene::BodyHandle;

/// Bodies currently overlapping a grab volume, in the order they started overlapping.
///
/// A body with several colliders can begin overlapping more than once; it is
/// listed once and stays until every overlap has ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VRCandidateSet {
    // (body, number of open overlaps)
    entries: Vec<(BodyHandle, u32)>,
}

impl VRCandidateSet {
    pub fn new() -> VRCandidateSet {
        VRCandidateSet::default()
    }

    // Returns true if the body was not a candidate before.
    pub fn insert(&mut self, body: BodyHandle) -> bool {
        match self.entries.iter_mut().find(|entry| entry.0 == body) {
            Some(entry) => {
                entry.1 += 1;
                false
            }
            None => {
                self.entries.push((body, 1));
                true
            }
        }
    }

    // Ends one overlap of `body`. Returns true if it is no longer a candidate.
    pub fn remove(&mut self, body: BodyHandle) -> bool {
        let index = match self.entries.iter().position(|entry| entry.0 == body) {
            Some(index) => index,
            None => return false,
        };
        self.entries[index].1 -= 1;
        if self.entries[index].1 == 0 {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, body: BodyHandle) -> bool {
        self.entries.iter().any(|entry| entry.0 == body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = BodyHandle> + 'a {
        self.entries.iter().map(|entry| entry.0)
    }

    /// The candidate closest to `origin` by squared distance.
    /// On a tie the candidate that started overlapping first wins.
    /// Bodies whose position is unknown are skipped.
    pub fn nearest<F>(&self, origin: Point3D<f32>, mut position_of: F) -> Option<BodyHandle>
        where F: FnMut(BodyHandle) -> Option<Point3D<f32>>
    {
        let mut nearest = None;
        let mut min_distance = ::std::f32::MAX;
        for body in self.iter() {
            let position = match position_of(body) {
                Some(position) => position,
                None => continue,
            };
            let distance = (position - origin).square_length();
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(body);
            }
        }
        nearest
    }
}
