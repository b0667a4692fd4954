//! Resize-distribution policies.
//!
//! Each style is a pure transformation from the current track sizes plus a
//! drag description to a new size sequence. The dragged track's new size
//! arrives already clamped to the floor by the drag controller; the styles
//! differ only in how the rest of the strip compensates.

use std::str::FromStr;

use crate::bsp::sibling_ranges;
use crate::drag::Edge;
use crate::error::StripError;
use crate::track::TrackLayout;

/// How the non-dragged tracks respond to a size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeStyle {
    /// Only the dragged track changes; the strip total is allowed to drift.
    #[default]
    Absolute,
    /// All other tracks rescale proportionally to absorb the delta, smallest
    /// first so none is pushed below the floor.
    Relative,
    /// Only the tracks on the grabbed side of the divider rescale; the other
    /// side is untouched.
    RelativePartial,
    /// The immediate next track absorbs the whole delta.
    Neighbor,
    /// The aligned binary blocks on either side of the divider share the
    /// delta evenly. Requires a power-of-two track count.
    Bsp,
}

impl ResizeStyle {
    pub const ALL: [ResizeStyle; 5] = [
        ResizeStyle::Absolute,
        ResizeStyle::Relative,
        ResizeStyle::RelativePartial,
        ResizeStyle::Neighbor,
        ResizeStyle::Bsp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResizeStyle::Absolute => "absolute",
            ResizeStyle::Relative => "relative",
            ResizeStyle::RelativePartial => "relative-partial",
            ResizeStyle::Neighbor => "neighbor",
            ResizeStyle::Bsp => "bsp",
        }
    }

    /// Whether this style only works on power-of-two track counts.
    pub fn requires_power_of_two(self) -> bool {
        matches!(self, ResizeStyle::Bsp)
    }

    /// Whether the style distinguishes the two edges of a track. All other
    /// styles resolve every grab to a bottom edge.
    pub fn distinguishes_edges(self) -> bool {
        matches!(self, ResizeStyle::RelativePartial)
    }

    /// Compute the new size sequence for dragging `track` by `delta` along
    /// `edge`. `delta` is the effective, already floor-clamped change of the
    /// dragged track; positive grows it.
    pub fn apply(self, layout: &TrackLayout, track: usize, edge: Edge, delta: f32) -> Vec<f32> {
        let new_size = layout.sizes()[track] + delta;
        match self {
            ResizeStyle::Absolute => apply_absolute(layout, track, new_size),
            ResizeStyle::Relative => apply_relative(layout, track, new_size),
            ResizeStyle::RelativePartial => apply_relative_partial(layout, track, edge, new_size),
            ResizeStyle::Neighbor => apply_neighbor(layout, track, new_size),
            ResizeStyle::Bsp => apply_bsp(layout, track, delta),
        }
    }
}

impl std::fmt::Display for ResizeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResizeStyle {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| StripError::UnknownStyle {
                name: s.to_owned(),
            })
    }
}

fn apply_absolute(layout: &TrackLayout, track: usize, new_size: f32) -> Vec<f32> {
    let mut out = layout.sizes().to_vec();
    out[track] = new_size;
    out
}

fn apply_relative(layout: &TrackLayout, track: usize, new_size: f32) -> Vec<f32> {
    let sizes = layout.sizes();
    let n = sizes.len();
    let total = layout.total_extent();
    let min = layout.min_size();

    // Every other track must still be able to retain the floor.
    let max_size = total - (n - 1) as f32 * min;
    let new_size = new_size.min(max_size);

    let mut out = sizes.to_vec();
    out[track] = new_size;

    let mut order: Vec<usize> = (0..n).filter(|&i| i != track).collect();
    order.sort_by(|&a, &b| sizes[a].total_cmp(&sizes[b]));

    let mut remaining = total - new_size;
    let mut remaining_sum: f32 = order.iter().map(|&i| sizes[i]).sum();
    let mut left = order.len();
    for &i in &order {
        // Smallest first: the current track's proportional share never
        // exceeds remaining / left, so the floor stays reachable for every
        // track still to be assigned.
        let share = if remaining_sum > 0.0 {
            sizes[i] * (remaining / remaining_sum)
        } else {
            remaining / left as f32
        };
        let assigned = share.max(min);
        remaining_sum -= sizes[i];
        remaining -= assigned;
        left -= 1;
        out[i] = assigned;
    }

    out
}

fn apply_relative_partial(
    layout: &TrackLayout,
    track: usize,
    edge: Edge,
    new_size: f32,
) -> Vec<f32> {
    let sizes = layout.sizes();
    let n = sizes.len();
    let total = layout.total_extent();
    let min = layout.min_size();
    let mut out = sizes.to_vec();

    match edge {
        Edge::Bottom => {
            let below = &sizes[track + 1..];
            if below.is_empty() {
                return out;
            }
            let sum_above: f32 = sizes[..track].iter().sum();
            let sum_below: f32 = below.iter().sum();

            // The side being squeezed must keep the floor in aggregate.
            let max_size = total - sum_above - below.len() as f32 * min;
            let new_size = new_size.min(max_size);
            let factor = (total - sum_above - new_size) / sum_below;

            out[track] = new_size;
            for i in track + 1..n {
                out[i] = sizes[i] * factor;
            }
        }
        Edge::Top => {
            let above = &sizes[..track];
            if above.is_empty() {
                return out;
            }
            let sum_above: f32 = above.iter().sum();
            let sum_below: f32 = sizes[track + 1..].iter().sum();

            let max_size = total - sum_below - above.len() as f32 * min;
            let new_size = new_size.min(max_size);
            let factor = (total - sum_below - new_size) / sum_above;

            out[track] = new_size;
            for i in 0..track {
                out[i] = sizes[i] * factor;
            }
        }
    }

    out
}

fn apply_neighbor(layout: &TrackLayout, track: usize, new_size: f32) -> Vec<f32> {
    let sizes = layout.sizes();
    let mut out = sizes.to_vec();
    let Some(&neighbor) = sizes.get(track + 1) else {
        return out;
    };
    // Zero-sum pairwise transfer; the neighbor is intentionally not clamped
    // to the floor.
    out[track] = new_size;
    out[track + 1] = neighbor - (new_size - sizes[track]);
    out
}

fn apply_bsp(layout: &TrackLayout, track: usize, delta: f32) -> Vec<f32> {
    let sizes = layout.sizes();
    let mut out = sizes.to_vec();
    debug_assert!(sizes.len().is_power_of_two());
    debug_assert!(track + 1 < sizes.len());

    let (lower, upper) = sibling_ranges(track);
    if *upper.end() >= sizes.len() {
        return out;
    }

    let lower_len = lower.end() - lower.start() + 1;
    let upper_len = upper.end() - upper.start() + 1;
    let lower_per = delta / lower_len as f32;
    let upper_per = -delta / upper_len as f32;

    // The dragged track itself only moves by its block's share; the divider
    // still travels the full delta because the whole lower block gains it.
    for i in lower {
        out[i] += lower_per;
    }
    for i in upper {
        out[i] += upper_per;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names_roundtrip() {
        for style in ResizeStyle::ALL {
            assert_eq!(style.name().parse::<ResizeStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_unknown_style_name() {
        let err = "diagonal".parse::<ResizeStyle>().unwrap_err();
        assert_eq!(
            err,
            StripError::UnknownStyle {
                name: "diagonal".into()
            }
        );
    }

    #[test]
    fn test_absolute_changes_only_the_dragged_track() {
        let layout = TrackLayout::new(4, 400.0, 10.0);
        let out = ResizeStyle::Absolute.apply(&layout, 1, Edge::Bottom, 30.0);
        assert_eq!(out, vec![100.0, 130.0, 100.0, 100.0]);
    }
}
