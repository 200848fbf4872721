//! Adapters that turn modality-specific events into pointer signals.
//!
//! Each adapter applies the filtering its device needs (primary button only,
//! first touch contact only, stylus pressure normalization) and emits at most
//! one [`PointerSignal`] per event. Supporting a new device only takes a new
//! [`InputAdapter`] implementation; the pointer session itself is shared.

use super::events::{InputSource, MouseButton, Point, PointerSignal, SignalKind};
use crate::draw::normalize_pressure;
use serde::Deserialize;

/// Translates native events of one input modality into pointer signals.
pub trait InputAdapter {
    /// Native event type delivered by the host for this modality.
    type Event;

    /// Returns the signal for `event`, or `None` when the event is filtered out.
    fn translate(&self, event: Self::Event) -> Option<PointerSignal>;
}

/// Mouse events as delivered by the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press { button: MouseButton, point: Point },
    /// Pointer motion; `primary_held` reports whether the left button is down
    Motion { point: Point, primary_held: bool },
    Release { button: MouseButton, point: Point },
}

/// Mouse adapter: only the primary (left) button draws.
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseAdapter;

impl InputAdapter for MouseAdapter {
    type Event = MouseEvent;

    fn translate(&self, event: MouseEvent) -> Option<PointerSignal> {
        let (kind, point) = match event {
            MouseEvent::Press {
                button: MouseButton::Left,
                point,
            } => (SignalKind::Begin, point),
            MouseEvent::Motion {
                point,
                primary_held: true,
            } => (SignalKind::Move, point),
            MouseEvent::Release {
                button: MouseButton::Left,
                point,
            } => (SignalKind::Release, point),
            _ => return None,
        };
        Some(PointerSignal::new(InputSource::Mouse, kind, point))
    }
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    Begin,
    Update,
    End,
}

/// Touch event carrying every active contact point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub contacts: Vec<Point>,
}

/// Touch adapter: follows the first contact and ignores the rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchAdapter;

impl InputAdapter for TouchAdapter {
    type Event = TouchEvent;

    fn translate(&self, event: TouchEvent) -> Option<PointerSignal> {
        let point = *event.contacts.first()?;
        let kind = match event.phase {
            TouchPhase::Begin => SignalKind::Begin,
            TouchPhase::Update => SignalKind::Move,
            TouchPhase::End => SignalKind::Release,
        };
        Some(PointerSignal::new(InputSource::Touch, kind, point))
    }
}

/// Phase of a stylus (tablet) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylusPhase {
    Press,
    Move,
    Release,
}

/// Stylus event with the raw pressure reported by the tablet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylusEvent {
    pub phase: StylusPhase,
    pub point: Point,
    pub pressure: f64,
}

/// Stylus adapter: forwards pressure when the tablet reports a positive value.
#[derive(Debug, Default, Clone, Copy)]
pub struct StylusAdapter;

impl InputAdapter for StylusAdapter {
    type Event = StylusEvent;

    fn translate(&self, event: StylusEvent) -> Option<PointerSignal> {
        let kind = match event.phase {
            StylusPhase::Press => SignalKind::Begin,
            StylusPhase::Move => SignalKind::Move,
            StylusPhase::Release => SignalKind::Release,
        };
        Some(
            PointerSignal::new(InputSource::Stylus, kind, event.point)
                .with_pressure(normalize_pressure(event.pressure)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_adapter_only_honors_primary_button() {
        let adapter = MouseAdapter;
        let point = Point::new(3, 4);

        let begin = adapter
            .translate(MouseEvent::Press {
                button: MouseButton::Left,
                point,
            })
            .unwrap();
        assert_eq!(begin.kind, SignalKind::Begin);
        assert_eq!(begin.source, InputSource::Mouse);
        assert_eq!(begin.pressure, None);

        assert!(
            adapter
                .translate(MouseEvent::Press {
                    button: MouseButton::Right,
                    point,
                })
                .is_none()
        );
        assert!(
            adapter
                .translate(MouseEvent::Release {
                    button: MouseButton::Middle,
                    point,
                })
                .is_none()
        );
    }

    #[test]
    fn mouse_motion_requires_primary_held() {
        let adapter = MouseAdapter;
        let point = Point::new(9, 9);
        assert!(
            adapter
                .translate(MouseEvent::Motion {
                    point,
                    primary_held: false,
                })
                .is_none()
        );
        let signal = adapter
            .translate(MouseEvent::Motion {
                point,
                primary_held: true,
            })
            .unwrap();
        assert_eq!(signal.kind, SignalKind::Move);
    }

    #[test]
    fn touch_adapter_uses_first_contact() {
        let adapter = TouchAdapter;
        let signal = adapter
            .translate(TouchEvent {
                phase: TouchPhase::Update,
                contacts: vec![Point::new(1, 2), Point::new(50, 60)],
            })
            .unwrap();
        assert_eq!(signal.kind, SignalKind::Move);
        assert_eq!(signal.point, Point::new(1, 2));
        assert_eq!(signal.source, InputSource::Touch);

        assert!(
            adapter
                .translate(TouchEvent {
                    phase: TouchPhase::Begin,
                    contacts: Vec::new(),
                })
                .is_none()
        );
    }

    #[test]
    fn stylus_adapter_normalizes_pressure() {
        let adapter = StylusAdapter;
        let point = Point::new(0, 0);
        let pressed = adapter
            .translate(StylusEvent {
                phase: StylusPhase::Press,
                point,
                pressure: 0.4,
            })
            .unwrap();
        assert_eq!(pressed.pressure, Some(0.4));

        let lifted = adapter
            .translate(StylusEvent {
                phase: StylusPhase::Release,
                point,
                pressure: 0.0,
            })
            .unwrap();
        assert_eq!(lifted.kind, SignalKind::Release);
        assert_eq!(lifted.pressure, None);
    }
}
