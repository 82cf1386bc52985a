//! Track model
//!
//! A closed circuit is an ordered list of (curvature, length) segments. Driving
//! order is the list order; after the last segment the lap wraps to the first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stretch of the closed loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    /// Signed bend sharpness (0 = straight, negative = left, positive = right)
    pub curvature: f32,
    /// Length along the racing line
    pub length: f32,
}

impl TrackSegment {
    pub const fn new(curvature: f32, length: f32) -> Self {
        Self { curvature, length }
    }
}

/// Reasons a segment list cannot form a track
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("track has no segments")]
    Empty,

    #[error("segment {index} has a non-finite value (curvature {curvature}, length {length})")]
    NonFinite {
        index: usize,
        curvature: f32,
        length: f32,
    },

    #[error("segment {index} has negative length {length}")]
    NegativeLength { index: usize, length: f32 },

    #[error("total track length must be positive, got {total}")]
    NonPositiveLength { total: f32 },
}

/// The compiled-in circuit: start/finish stub, long straights, a left hairpin,
/// an S-bend and a long sweeper.
const CIRCUIT: [TrackSegment; 10] = [
    TrackSegment::new(0.0, 10.0),
    TrackSegment::new(0.0, 200.0),
    TrackSegment::new(0.0, 400.0),
    TrackSegment::new(-1.0, 100.0),
    TrackSegment::new(0.0, 200.0),
    TrackSegment::new(-1.0, 200.0),
    TrackSegment::new(1.0, 200.0),
    TrackSegment::new(0.0, 200.0),
    TrackSegment::new(0.02, 500.0),
    TrackSegment::new(0.0, 200.0),
];

/// Immutable closed track
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    segments: Vec<TrackSegment>,
    total_length: f32,
}

impl Track {
    /// Build a track, rejecting segment lists that cannot be driven
    pub fn new(segments: Vec<TrackSegment>) -> Result<Self, TrackError> {
        if segments.is_empty() {
            return Err(TrackError::Empty);
        }

        for (index, seg) in segments.iter().enumerate() {
            if !seg.curvature.is_finite() || !seg.length.is_finite() {
                return Err(TrackError::NonFinite {
                    index,
                    curvature: seg.curvature,
                    length: seg.length,
                });
            }
            if seg.length < 0.0 {
                return Err(TrackError::NegativeLength {
                    index,
                    length: seg.length,
                });
            }
        }

        let total_length: f32 = segments.iter().map(|s| s.length).sum();
        if total_length <= 0.0 {
            return Err(TrackError::NonPositiveLength { total: total_length });
        }

        log::debug!(
            "Track built: {} segments, {:.1} total length",
            segments.len(),
            total_length
        );

        Ok(Self {
            segments,
            total_length,
        })
    }

    /// The built-in 10-segment circuit
    pub fn circuit() -> Self {
        let total_length = CIRCUIT.iter().map(|s| s.length).sum();
        Self {
            segments: CIRCUIT.to_vec(),
            total_length,
        }
    }

    /// Sum of all segment lengths (one lap)
    #[inline]
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Find the segment under `distance` and its target curvature.
    ///
    /// Linear scan: walks forward while the running length is `<= distance`.
    /// A distance before the first boundary never advances the walk and falls
    /// back to segment 0, the start/finish stretch.
    pub fn locate(&self, distance: f32) -> (usize, f32) {
        let mut offset = 0.0;
        let mut walked = 0;
        while walked < self.segments.len() && offset <= distance {
            offset += self.segments[walked].length;
            walked += 1;
        }

        let index = walked.max(1) - 1;
        (index, self.segments[index].curvature)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::circuit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circuit_total_length() {
        let track = Track::circuit();
        assert_eq!(track.segment_count(), 10);
        assert_eq!(track.total_length(), 2210.0);
    }

    #[test]
    fn test_locate_boundaries() {
        let track = Track::circuit();

        // Start of lap sits on the start/finish stub
        assert_eq!(track.locate(0.0), (0, 0.0));
        assert_eq!(track.locate(9.99), (0, 0.0));
        // Boundaries belong to the following segment
        assert_eq!(track.locate(10.0), (1, 0.0));
        assert_eq!(track.locate(610.0), (3, -1.0));
        assert_eq!(track.locate(709.0), (3, -1.0));
        assert_eq!(track.locate(1111.0), (6, 1.0));
        assert_eq!(track.locate(1600.0), (8, 0.02));
    }

    #[test]
    fn test_locate_before_first_boundary_falls_back() {
        let track = Track::circuit();
        assert_eq!(track.locate(-5.0), (0, 0.0));
        assert_eq!(track.locate(f32::NAN), (0, 0.0));
    }

    #[test]
    fn test_locate_past_end_clamps_to_last() {
        let track = Track::circuit();
        assert_eq!(track.locate(5000.0), (9, 0.0));
    }

    #[test]
    fn test_zero_length_sentinel_is_skipped() {
        let track = Track::new(vec![
            TrackSegment::new(0.5, 0.0),
            TrackSegment::new(-0.5, 100.0),
        ])
        .unwrap();
        assert_eq!(track.total_length(), 100.0);
        assert_eq!(track.locate(0.0), (1, -0.5));
    }

    #[test]
    fn test_rejects_bad_tracks() {
        assert_eq!(Track::new(vec![]), Err(TrackError::Empty));
        assert_eq!(
            Track::new(vec![TrackSegment::new(0.0, 0.0)]),
            Err(TrackError::NonPositiveLength { total: 0.0 })
        );
        assert!(matches!(
            Track::new(vec![TrackSegment::new(0.0, 50.0), TrackSegment::new(0.0, -10.0)]),
            Err(TrackError::NegativeLength { index: 1, .. })
        ));
        assert!(matches!(
            Track::new(vec![TrackSegment::new(f32::INFINITY, 50.0)]),
            Err(TrackError::NonFinite { index: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_locate_finds_containing_segment(fraction in 0.0f32..1.0) {
            let track = Track::circuit();
            let distance = fraction * track.total_length();
            let (index, curvature) = track.locate(distance);

            prop_assert!(index < track.segment_count());

            let start: f32 = track.segments()[..index].iter().map(|s| s.length).sum();
            let end = start + track.segments()[index].length;
            prop_assert!(start <= distance && distance < end,
                "distance {} not in segment {} [{}, {})", distance, index, start, end);
            prop_assert_eq!(curvature, track.segments()[index].curvature);
        }
    }
}
