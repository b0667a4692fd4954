//! Property-style invariants over random drag-gesture streams.
//!
//! Each case replays a stream of grab/move/release gestures against a fresh
//! session and asserts the style's conservation guarantees after every move.

use proptest::prelude::*;
use trackstrip_core::math::Vec2;
use trackstrip_ui::{PointerEvent, ResizeStyle, StripConfig, StripSession};

const TOTAL: f32 = 600.0;

// f32 prefix sums drift a little over long streams; allow for it.
const SUM_EPS: f32 = 0.05;
const FLOOR_EPS: f32 = 1e-3;

fn conserving_style() -> impl Strategy<Value = ResizeStyle> {
    prop_oneof![
        Just(ResizeStyle::Relative),
        Just(ResizeStyle::RelativePartial),
        Just(ResizeStyle::Neighbor),
        Just(ResizeStyle::Bsp),
    ]
}

fn gestures() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((0.0f32..TOTAL, -150.0f32..150.0), 1..32)
}

fn replay(session: &mut StripSession, y: f32, delta: f32) {
    session.handle_pointer(&PointerEvent::Down(Vec2::new(0.0, y)));
    session.handle_pointer(&PointerEvent::Move(Vec2::new(0.0, y + delta)));
    session.handle_pointer(&PointerEvent::Up);
}

proptest! {
    #[test]
    fn conserving_styles_preserve_the_total(
        style in conserving_style(),
        stream in gestures(),
    ) {
        let mut session = StripSession::new(StripConfig::default()).unwrap();
        session.select_style(style).unwrap();

        for (y, delta) in stream {
            replay(&mut session, y, delta);
            let sum = session.layout().extent_sum();
            prop_assert!(
                (sum - TOTAL).abs() < SUM_EPS,
                "{style}: sum drifted to {sum}"
            );
        }
    }

    #[test]
    fn relative_respects_the_floor_throughout(stream in gestures()) {
        let mut session = StripSession::new(StripConfig::default()).unwrap();
        session.select_style(ResizeStyle::Relative).unwrap();
        let floor = session.layout().min_size();

        for (y, delta) in stream {
            replay(&mut session, y, delta);
            for (index, &size) in session.layout().sizes().iter().enumerate() {
                prop_assert!(
                    size >= floor - FLOOR_EPS,
                    "track {index} fell to {size}"
                );
            }
        }
    }

    #[test]
    fn absolute_moves_at_most_the_dragged_track(stream in gestures()) {
        let mut session = StripSession::new(StripConfig::default()).unwrap();

        for (y, delta) in stream {
            let before = session.layout().sizes().to_vec();
            replay(&mut session, y, delta);
            let changed = before
                .iter()
                .zip(session.layout().sizes())
                .filter(|(b, a)| b != a)
                .count();
            prop_assert!(changed <= 1, "{changed} tracks changed in one gesture");
        }
    }
}
