//! Track layout state: an ordered sequence of band sizes along one axis.

/// Origin and size of a single track along the resize axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSpan {
    pub origin: f32,
    pub size: f32,
}

impl TrackSpan {
    pub fn end(&self) -> f32 {
        self.origin + self.size
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.origin && y <= self.end()
    }
}

/// The ordered sizes of all tracks in the strip.
///
/// Sizes sum to `total_extent` after every completed resize, except under the
/// absolute resize style which intentionally lets the total drift. Every size
/// stays at or above `min_size` except where a style's compensation pass is
/// documented as permissive.
#[derive(Debug, Clone)]
pub struct TrackLayout {
    sizes: Vec<f32>,
    total_extent: f32,
    min_size: f32,
}

impl TrackLayout {
    /// Create a layout of `track_count` equally sized tracks filling
    /// `total_extent`.
    pub fn new(track_count: usize, total_extent: f32, min_size: f32) -> Self {
        Self {
            sizes: vec![total_extent / track_count as f32; track_count],
            total_extent,
            min_size,
        }
    }

    /// Create a layout from explicit sizes, e.g. to restore a snapshot.
    pub fn from_sizes(sizes: Vec<f32>, total_extent: f32, min_size: f32) -> Self {
        Self {
            sizes,
            total_extent,
            min_size,
        }
    }

    pub fn track_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn total_extent(&self) -> f32 {
        self.total_extent
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Current sum of all track sizes. Equals `total_extent` except after
    /// absolute-style resizes.
    pub fn extent_sum(&self) -> f32 {
        self.sizes.iter().sum()
    }

    /// Replace all sizes at once. The caller is responsible for keeping the
    /// track count unchanged.
    pub(crate) fn set_sizes(&mut self, sizes: Vec<f32>) {
        debug_assert_eq!(sizes.len(), self.sizes.len());
        self.sizes = sizes;
    }

    /// Set every track back to the equal division of the total extent.
    pub fn reset(&mut self) {
        let equal = self.total_extent / self.sizes.len() as f32;
        self.sizes.fill(equal);
    }

    /// Change the number of tracks.
    ///
    /// Shrinking truncates; growing appends tracks sized `total_extent / n`
    /// without rebalancing the existing ones, so the sum invariant is not
    /// restored here. Growing is typically paired with [`reset`].
    ///
    /// [`reset`]: TrackLayout::reset
    pub fn set_track_count(&mut self, n: usize) {
        if n <= self.sizes.len() {
            self.sizes.truncate(n);
        } else {
            let appended = self.total_extent / n as f32;
            self.sizes.resize(n, appended);
        }
    }

    /// Prefix-sum origins of all tracks.
    ///
    /// Recomputed on every call: sizes change on every drag move and a stale
    /// cache here would corrupt hit-testing.
    pub fn offsets(&self) -> Vec<f32> {
        let mut y = 0.0;
        self.sizes
            .iter()
            .map(|size| {
                let origin = y;
                y += size;
                origin
            })
            .collect()
    }

    /// Origin and size of track `index`.
    pub fn span(&self, index: usize) -> TrackSpan {
        TrackSpan {
            origin: self.sizes[..index].iter().sum(),
            size: self.sizes[index],
        }
    }

    /// Find the track whose span contains `y`. On a shared boundary the
    /// earlier track wins.
    pub fn locate(&self, y: f32) -> Option<usize> {
        let mut origin = 0.0;
        for (index, &size) in self.sizes.iter().enumerate() {
            if y >= origin && y <= origin + size {
                return Some(index);
            }
            origin += size;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_divides_equally() {
        let layout = TrackLayout::new(8, 600.0, 16.0);
        assert_eq!(layout.track_count(), 8);
        assert!(layout.sizes().iter().all(|&s| s == 75.0));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut layout = TrackLayout::new(4, 400.0, 10.0);
        layout.set_sizes(vec![50.0, 150.0, 120.0, 80.0]);

        layout.reset();
        let once = layout.sizes().to_vec();
        layout.reset();
        assert_eq!(layout.sizes(), &once[..]);
        assert!(once.iter().all(|&s| s == 100.0));
    }

    #[test]
    fn test_offsets_are_prefix_sums() {
        let mut layout = TrackLayout::new(3, 600.0, 16.0);
        layout.set_sizes(vec![100.0, 250.0, 250.0]);
        assert_eq!(layout.offsets(), vec![0.0, 100.0, 350.0]);
    }

    #[test]
    fn test_grow_appends_without_rebalancing() {
        let mut layout = TrackLayout::new(2, 600.0, 16.0);
        layout.set_track_count(3);
        assert_eq!(layout.sizes(), &[300.0, 300.0, 200.0]);
        // Sum exceeds the total until the caller resets.
        assert!(layout.extent_sum() > layout.total_extent());
    }

    #[test]
    fn test_shrink_truncates() {
        let mut layout = TrackLayout::new(4, 400.0, 10.0);
        layout.set_track_count(2);
        assert_eq!(layout.sizes(), &[100.0, 100.0]);
    }

    #[test]
    fn test_locate_prefers_earlier_track_on_boundary() {
        let layout = TrackLayout::new(2, 600.0, 16.0);
        assert_eq!(layout.locate(300.0), Some(0));
        assert_eq!(layout.locate(300.1), Some(1));
        assert_eq!(layout.locate(-1.0), None);
        assert_eq!(layout.locate(601.0), None);
    }
}
