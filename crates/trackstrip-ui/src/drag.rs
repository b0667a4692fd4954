//! Pointer-drag state machine for divider resizing.

use tracing::{debug, trace};

use crate::policy::ResizeStyle;
use crate::track::TrackLayout;

/// Which side of a track a grabbed divider belongs to.
///
/// Only the relative-partial style keeps the two edges distinct; every other
/// style resolves a top-half grab to the bottom edge of the track above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// State of an active divider drag, alive from pointer-down to
/// pointer-up/leave.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    /// The track whose grabbed edge is anchored to the pointer.
    pub track: usize,
    /// The anchored edge of that track.
    pub edge: Edge,
    /// Signed distance between the pointer and the anchored edge at grab
    /// time. Held constant for the whole drag so the edge follows the
    /// pointer exactly instead of snapping to it.
    pub pointer_offset: f32,
}

/// Two-state machine (idle / dragging) translating pointer coordinates into
/// policy invocations.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Try to grab a divider at vertical coordinate `y`.
    ///
    /// Returns `true` when a drag started. Grabs that miss every track or
    /// land on a divider the active style cannot resize are ignored.
    pub fn begin(&mut self, layout: &TrackLayout, style: ResizeStyle, y: f32) -> bool {
        let Some(mut track) = layout.locate(y) else {
            return false;
        };

        let span = layout.span(track);
        let mut edge = Edge::Bottom;
        if y < span.origin + span.size / 2.0 {
            if style.distinguishes_edges() {
                edge = Edge::Top;
            } else {
                // A top-half grab targets the divider above, which is the
                // bottom edge of the previous track.
                if track == 0 {
                    return false;
                }
                track -= 1;
            }
        }

        let count = layout.track_count();
        if track == count - 1 && matches!(style, ResizeStyle::Neighbor | ResizeStyle::Bsp) {
            // These styles need a defined slot on the far side of the
            // divider; the final boundary has none.
            return false;
        }
        if style.distinguishes_edges()
            && ((track == 0 && edge == Edge::Top) || (track == count - 1 && edge == Edge::Bottom))
        {
            // Outermost edge of the strip: nothing to redistribute across.
            return false;
        }
        if style.requires_power_of_two() && !count.is_power_of_two() {
            return false;
        }

        let span = layout.span(track);
        let pointer_offset = match edge {
            Edge::Bottom => span.end() - y,
            Edge::Top => span.origin - y,
        };

        debug!(track, ?edge, pointer_offset, "divider grabbed");
        self.session = Some(DragSession {
            track,
            edge,
            pointer_offset,
        });
        true
    }

    /// Apply a pointer move at vertical coordinate `y` to the layout.
    ///
    /// Returns `true` when a drag is active and the layout was rewritten.
    pub fn update(&mut self, layout: &mut TrackLayout, style: ResizeStyle, y: f32) -> bool {
        let Some(session) = self.session else {
            return false;
        };

        let span = layout.span(session.track);
        let target_edge = y + session.pointer_offset;
        let raw_delta = match session.edge {
            Edge::Bottom => target_edge - span.end(),
            Edge::Top => span.origin - target_edge,
        };

        // Clamp the dragged track to the floor and back-derive the delta the
        // policy actually sees, so downstream tracks never absorb an
        // unclampable deficit.
        let new_size = (span.size + raw_delta).max(layout.min_size());
        let delta = new_size - span.size;

        let next = style.apply(layout, session.track, session.edge, delta);
        layout.set_sizes(next);
        trace!(track = session.track, delta, "divider moved");
        true
    }

    /// End the drag. Pointer-leave is handled identically to pointer-up so a
    /// drag released outside the surface never gets stuck.
    ///
    /// Returns `true` when a session was actually discarded.
    pub fn finish(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(track = session.track, "divider released");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_is_ignored() {
        let layout = TrackLayout::new(2, 600.0, 16.0);
        let mut drag = DragController::new();
        assert!(!drag.begin(&layout, ResizeStyle::Absolute, 700.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_top_half_of_first_track_has_no_divider_above() {
        let layout = TrackLayout::new(2, 600.0, 16.0);
        let mut drag = DragController::new();
        assert!(!drag.begin(&layout, ResizeStyle::Absolute, 10.0));
    }

    #[test]
    fn test_last_divider_rejected_for_neighbor_and_bsp() {
        let layout = TrackLayout::new(4, 400.0, 10.0);
        let mut drag = DragController::new();
        // Bottom half of the last track grabs the final boundary.
        assert!(!drag.begin(&layout, ResizeStyle::Neighbor, 395.0));
        assert!(!drag.begin(&layout, ResizeStyle::Bsp, 395.0));
        assert!(drag.begin(&layout, ResizeStyle::Absolute, 395.0));
    }

    #[test]
    fn test_bsp_rejects_non_power_of_two_counts() {
        let layout = TrackLayout::new(6, 600.0, 16.0);
        let mut drag = DragController::new();
        assert!(!drag.begin(&layout, ResizeStyle::Bsp, 150.0));
        assert!(drag.begin(&layout, ResizeStyle::Relative, 150.0));
    }

    #[test]
    fn test_outermost_edges_rejected_for_relative_partial() {
        let layout = TrackLayout::new(2, 600.0, 16.0);
        let mut drag = DragController::new();
        // Top half of track 0 and bottom half of the last track.
        assert!(!drag.begin(&layout, ResizeStyle::RelativePartial, 10.0));
        assert!(!drag.begin(&layout, ResizeStyle::RelativePartial, 590.0));
        assert!(drag.begin(&layout, ResizeStyle::RelativePartial, 290.0));
    }

    #[test]
    fn test_finish_without_session_reports_idle() {
        let mut drag = DragController::new();
        assert!(!drag.finish());
    }
}
