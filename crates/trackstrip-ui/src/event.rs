//! Pointer event types and batching queue.
//!
//! The host translates its native mouse/pen events into [`PointerEvent`]s and
//! feeds them through a [`PointerQueue`]. The queue coalesces bursts of
//! pointer motion so that only the latest position is dispatched per frame,
//! while press/release ordering is preserved.

use std::collections::VecDeque;

use trackstrip_core::math::Vec2;

/// A pointer event in surface-local logical coordinates.
///
/// The strip resizes along the vertical axis and only consumes `y`, but
/// positions are carried as full 2-D points since that is what pointer
/// sources deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down(Vec2),
    /// Pointer moved while over the surface.
    Move(Vec2),
    /// Primary button released.
    Up,
    /// Pointer left the surface.
    Leave,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Event queue with motion coalescing.
pub struct PointerQueue {
    /// Pending events for this frame.
    pending: VecDeque<PointerEvent>,

    /// Latest unflushed motion; overwritten by each new `Move`.
    latest_move: Option<Vec2>,

    /// Statistics
    stats: QueueStats,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            latest_move: None,
            stats: QueueStats::default(),
        }
    }

    /// Push an event to the queue (called from the host event handler).
    ///
    /// Consecutive `Move`s collapse into the most recent one. Any other
    /// event first flushes the held motion so that ordering across event
    /// kinds is preserved.
    pub fn push(&mut self, event: PointerEvent) {
        self.stats.events_received += 1;

        match event {
            PointerEvent::Move(pos) => {
                if self.latest_move.replace(pos).is_some() {
                    self.stats.events_coalesced += 1;
                }
            }
            _ => {
                self.flush_move();
                self.pending.push_back(event);
            }
        }
    }

    /// Drain all queued events into a batch for dispatch.
    pub fn drain(&mut self) -> PointerBatch {
        self.flush_move();
        let events = self.pending.drain(..).collect();
        PointerBatch { events }
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = QueueStats::default();
    }

    fn flush_move(&mut self) {
        if let Some(pos) = self.latest_move.take() {
            self.pending.push_back(PointerEvent::Move(pos));
        }
    }
}

impl Default for PointerQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// A drained batch of pointer events.
pub struct PointerBatch {
    events: Vec<PointerEvent>,
}

impl PointerBatch {
    pub fn iter(&self) -> impl Iterator<Item = &PointerEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed each event to `handler`, keeping the ones it does not consume.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&PointerEvent) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Default, Debug, Clone)]
pub struct QueueStats {
    pub events_received: usize,
    pub events_coalesced: usize,
}
