use sketchpad::draw::{BLACK, Color, WHITE};
use sketchpad::input::{
    InputSource, MouseAdapter, MouseButton, MouseEvent, Point, PointerSignal, SignalKind,
    SketchState, StrokeStyle, StylusAdapter, StylusEvent, StylusPhase, TouchAdapter, TouchEvent,
    TouchPhase,
};
use sketchpad::util::segment_damage;
use sketchpad::{Config, Tool};

fn make_state() -> SketchState {
    SketchState::new(
        160,
        120,
        WHITE,
        StrokeStyle {
            color: BLACK,
            base_width: 4.0,
            tool: Tool::Pen,
        },
    )
    .unwrap()
}

fn touch(phase: TouchPhase, x: i32, y: i32) -> TouchEvent {
    TouchEvent {
        phase,
        contacts: vec![Point::new(x, y)],
    }
}

#[test]
fn touch_stroke_draws_and_reports_damage() {
    let mut state = make_state();
    assert!(
        state
            .feed(&TouchAdapter, touch(TouchPhase::Begin, 20, 60))
            .is_none()
    );
    let moved = state
        .feed(&TouchAdapter, touch(TouchPhase::Update, 80, 60))
        .unwrap();
    let lifted = state
        .feed(&TouchAdapter, touch(TouchPhase::End, 80, 90))
        .unwrap();

    assert_eq!(moved, segment_damage(20, 60, 80, 60, 4.0));
    assert_eq!(lifted, segment_damage(80, 60, 80, 90, 4.0));

    let snapshot = state.snapshot();
    assert_eq!(snapshot.pixel(50, 60), Some([0, 0, 0]));
    assert_eq!(snapshot.pixel(80, 75), Some([0, 0, 0]));
    assert_eq!(snapshot.pixel(10, 10), Some([255, 255, 255]));
}

#[test]
fn only_one_session_across_modalities() {
    let mut state = make_state();
    state.feed(
        &StylusAdapter,
        StylusEvent {
            phase: StylusPhase::Press,
            point: Point::new(10, 10),
            pressure: 0.5,
        },
    );

    let mouse_begin = state.feed(
        &MouseAdapter,
        MouseEvent::Press {
            button: MouseButton::Left,
            point: Point::new(100, 100),
        },
    );
    let mouse_move = state.feed(
        &MouseAdapter,
        MouseEvent::Motion {
            point: Point::new(120, 100),
            primary_held: true,
        },
    );
    assert!(mouse_begin.is_none());
    assert!(mouse_move.is_none());
    assert_eq!(state.snapshot().pixel(110, 100), Some([255, 255, 255]));

    let end = state.handle_signal(
        PointerSignal::new(InputSource::Stylus, SignalKind::Release, Point::new(30, 10))
            .with_pressure(Some(0.5)),
    );
    assert_eq!(end, Some(segment_damage(10, 10, 30, 10, 2.0)));
    assert!(!state.is_drawing());
}

#[test]
fn growth_preserves_strokes_and_snapshot_is_read_only_copy() {
    let mut state = make_state();
    state.set_color(Color::from_rgb8(0, 128, 0));
    state.feed(
        &MouseAdapter,
        MouseEvent::Press {
            button: MouseButton::Left,
            point: Point::new(150, 110),
        },
    );
    state.feed(
        &MouseAdapter,
        MouseEvent::Release {
            button: MouseButton::Left,
            point: Point::new(150, 110),
        },
    );
    let before = state.snapshot();

    state.ensure_capacity(640, 100).unwrap();
    assert_eq!((state.width(), state.height()), (768, 228));
    assert_eq!((before.width(), before.height()), (160, 120));

    let after = state.snapshot();
    assert_eq!(after.pixel(150, 110), Some([0, 128, 0]));
    assert_eq!(after.pixel(700, 200), Some([255, 255, 255]));

    state.clear();
    assert!(!state.has_content());
    assert!(state.snapshot().is_uniform([255, 255, 255]));
    assert_eq!(after.pixel(150, 110), Some([0, 128, 0]));
}

#[test]
fn engine_from_default_config_matches_toolbar_defaults() {
    let state = SketchState::from_config(&Config::default()).unwrap();
    assert_eq!((state.width(), state.height()), (800, 600));
    assert_eq!(state.tool(), Tool::Pen);
    assert_eq!(state.color(), BLACK);
    assert_eq!(state.base_width(), 3.0);
    assert_eq!(state.background(), WHITE);

    let png = state.snapshot().to_png_bytes().unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}
