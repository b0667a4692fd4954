//! Trackstrip UI - a vertical strip of pointer-resizable colored tracks.
//!
//! The strip stacks a fixed number of horizontal bands to fill a fixed
//! extent. Dragging the boundary between two bands resizes them under one of
//! five resize-distribution styles, each with its own conservation and
//! fairness trade-offs:
//! - **absolute**: only the dragged track changes (the total may drift)
//! - **relative**: everything else rescales proportionally, floor-aware
//! - **relative-partial**: only the grabbed side of the divider rescales
//! - **neighbor**: the next track absorbs the whole delta
//! - **bsp**: the aligned binary blocks around the divider share the delta
//!
//! Rendering and raw OS events stay outside: the host feeds translated
//! [`PointerEvent`]s in and draws the [`BandRect`]s that come out.
//!
//! ## Quick Start
//!
//! ```rust
//! use trackstrip_core::math::Vec2;
//! use trackstrip_ui::{PointerEvent, StripConfig, StripSession};
//!
//! let mut strip = StripSession::new(StripConfig::default()).unwrap();
//! strip.select_style_by_name("neighbor").unwrap();
//!
//! // Grab the divider below the first track and drag it 40 units down.
//! strip.handle_pointer(&PointerEvent::Down(Vec2::new(10.0, 70.0)));
//! strip.handle_pointer(&PointerEvent::Move(Vec2::new(10.0, 110.0)));
//! strip.handle_pointer(&PointerEvent::Up);
//! assert_eq!(strip.layout().sizes()[0], 115.0);
//!
//! // Hand these to the rendering surface.
//! let bands = strip.draw_list();
//! assert_eq!(bands.len(), 8);
//! ```

pub mod bsp;
pub mod drag;
pub mod error;
pub mod event;
pub mod policy;
pub mod strip;
pub mod track;

pub use bsp::sibling_ranges;
pub use drag::{DragController, DragSession, Edge};
pub use error::{StripError, StripResult};
pub use event::{HandleStatus, PointerBatch, PointerEvent, PointerQueue};
pub use policy::ResizeStyle;
pub use strip::{BandRect, StripConfig, StripSession};
pub use track::{TrackLayout, TrackSpan};
