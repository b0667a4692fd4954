//! Strip session: the layout, the selected resize style, and the drag state
//! behind one owner-passed facade.

use tracing::debug;
use trackstrip_core::{Color, Rect, Size};

use crate::drag::{DragController, DragSession};
use crate::error::{StripError, StripResult};
use crate::event::{HandleStatus, PointerEvent};
use crate::policy::ResizeStyle;
use crate::track::TrackLayout;

/// Construction parameters for a strip session.
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub track_count: usize,
    /// Extent along the resize axis.
    pub total_extent: f32,
    /// Extent across it (the width of every band).
    pub cross_extent: f32,
    /// Floor applied to every track size.
    pub min_size: f32,
    /// Band fill colors, alternating by track parity.
    pub band_colors: [Color; 2],
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            track_count: 8,
            total_extent: 600.0,
            cross_extent: 900.0,
            min_size: 16.0,
            band_colors: [Color::from_hex(0x880022), Color::from_hex(0x228800)],
        }
    }
}

/// One colored band handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRect {
    pub rect: Rect<f32>,
    pub color: Color,
}

/// A resizable strip of stacked tracks.
///
/// All state lives in this explicit session object; callers own it and feed
/// it pointer events. There is no ambient global state, so multiple
/// independent strips can coexist and policies stay unit-testable in
/// isolation.
#[derive(Debug)]
pub struct StripSession {
    layout: TrackLayout,
    style: ResizeStyle,
    drag: DragController,
    cross_extent: f32,
    band_colors: [Color; 2],
}

impl StripSession {
    pub fn new(config: StripConfig) -> StripResult<Self> {
        if config.track_count == 0 {
            return Err(StripError::EmptyStrip);
        }
        if config.total_extent <= 0.0 || config.cross_extent <= 0.0 || config.min_size < 0.0 {
            return Err(StripError::NonPositiveExtent);
        }
        let required = config.min_size * config.track_count as f32;
        if required > config.total_extent {
            return Err(StripError::FloorOverflow {
                required,
                available: config.total_extent,
            });
        }

        Ok(Self {
            layout: TrackLayout::new(config.track_count, config.total_extent, config.min_size),
            style: ResizeStyle::default(),
            drag: DragController::new(),
            cross_extent: config.cross_extent,
            band_colors: config.band_colors,
        })
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    pub fn style(&self) -> ResizeStyle {
        self.style
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The active drag, if the pointer currently holds a divider.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.session()
    }

    /// Switch the active resize style.
    ///
    /// Changing the style resets the layout to the equal division so every
    /// style starts from a known, fair baseline. Selecting the already
    /// active style is a no-op.
    pub fn select_style(&mut self, style: ResizeStyle) -> StripResult<()> {
        if style.requires_power_of_two() && !self.layout.track_count().is_power_of_two() {
            return Err(StripError::BspTrackCount {
                count: self.layout.track_count(),
            });
        }
        if style == self.style {
            return Ok(());
        }

        self.style = style;
        self.layout.reset();
        debug!(style = %style, "resize style selected");
        Ok(())
    }

    /// Switch the active resize style by its kebab-case name.
    pub fn select_style_by_name(&mut self, name: &str) -> StripResult<()> {
        self.select_style(name.parse()?)
    }

    /// Set every track back to the equal division.
    pub fn reset(&mut self) {
        self.layout.reset();
    }

    /// Change the number of tracks; see [`TrackLayout::set_track_count`] for
    /// the truncate/append semantics.
    pub fn set_track_count(&mut self, n: usize) -> StripResult<()> {
        if n == 0 {
            return Err(StripError::EmptyStrip);
        }
        if self.style.requires_power_of_two() && !n.is_power_of_two() {
            return Err(StripError::BspTrackCount { count: n });
        }
        let required = self.layout.min_size() * n as f32;
        if required > self.layout.total_extent() {
            return Err(StripError::FloorOverflow {
                required,
                available: self.layout.total_extent(),
            });
        }

        self.layout.set_track_count(n);
        Ok(())
    }

    /// Feed one pointer event through the drag state machine.
    ///
    /// Events the strip acts on are consumed; everything else is ignored and
    /// left for other handlers. All transitions are synchronous.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> HandleStatus {
        let acted = match *event {
            PointerEvent::Down(pos) => self.drag.begin(&self.layout, self.style, pos.y),
            PointerEvent::Move(pos) => self.drag.update(&mut self.layout, self.style, pos.y),
            PointerEvent::Up | PointerEvent::Leave => self.drag.finish(),
        };
        if acted {
            HandleStatus::consumed()
        } else {
            HandleStatus::ignored()
        }
    }

    /// The nominal surface the strip fills, for sizing the render target.
    pub fn surface_size(&self) -> Size<f32> {
        Size::new(self.cross_extent, self.layout.total_extent())
    }

    /// The bands to draw, in track order, recomputed from live offsets.
    pub fn draw_list(&self) -> Vec<BandRect> {
        self.layout
            .sizes()
            .iter()
            .zip(self.layout.offsets())
            .enumerate()
            .map(|(index, (&size, origin))| BandRect {
                rect: Rect::new(0.0, origin, self.cross_extent, size),
                color: self.band_colors[index % 2],
            })
            .collect()
    }
}
