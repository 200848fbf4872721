//! Stroke scripts: recorded input replayed through the adapters.
//!
//! A script is a TOML file with one `[[step]]` table per host event:
//!
//! ```toml
//! [[step]]
//! action = "resize"
//! width = 1024
//! height = 768
//!
//! [[step]]
//! action = "mouse-press"
//! x = 10
//! y = 10
//!
//! [[step]]
//! action = "stylus"
//! phase = "move"
//! x = 40
//! y = 12
//! pressure = 0.6
//! ```

use crate::config::ColorSpec;
use crate::draw::{DirtyTracker, SurfaceError};
use crate::input::{
    MouseAdapter, MouseButton, MouseEvent, Point, SketchState, StylusAdapter, StylusEvent,
    StylusPhase, Tool, TouchAdapter, TouchEvent, TouchPhase,
};
use crate::util::Rect;
use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A parsed stroke script.
#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One recorded host event or style change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Host viewport resized
    Resize { width: u32, height: u32 },
    #[serde(rename = "tool")]
    SetTool { tool: Tool },
    #[serde(rename = "color")]
    SetColor { color: ColorSpec },
    #[serde(rename = "width")]
    SetWidth { width: f64 },
    Clear,
    MousePress {
        x: i32,
        y: i32,
        #[serde(default = "default_button")]
        button: MouseButton,
    },
    MouseMove {
        x: i32,
        y: i32,
        #[serde(default = "default_true")]
        left_held: bool,
    },
    MouseRelease {
        x: i32,
        y: i32,
        #[serde(default = "default_button")]
        button: MouseButton,
    },
    Touch {
        phase: TouchPhase,
        contacts: Vec<[i32; 2]>,
    },
    Stylus {
        phase: StylusPhase,
        x: i32,
        y: i32,
        pressure: f64,
    },
}

fn default_button() -> MouseButton {
    MouseButton::Left
}

fn default_true() -> bool {
    true
}

impl Script {
    /// Parses a script from TOML text.
    pub fn from_toml_str(script: &str) -> Result<Self> {
        Ok(toml::from_str(script)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse script from {}", path.display()))
    }
}

/// Summary of a replay run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    /// Segments rasterized (one per accepted move/release)
    pub segments: usize,
    /// Damage rectangles left for the host after coalescing
    pub damage: Vec<Rect>,
}

impl ReplayReport {
    /// Bounding box of all damage, if any was reported.
    pub fn damage_bounds(&self) -> Option<Rect> {
        self.damage.iter().copied().reduce(Rect::union)
    }
}

/// Feeds every step of `script` into `state`.
///
/// Damage is coalesced the way a host would between repaints: clears and
/// surface growth invalidate the whole surface.
///
/// # Errors
/// Only surface growth can fail, when the larger buffer cannot be allocated.
pub fn run_script(state: &mut SketchState, script: &Script) -> Result<ReplayReport, SurfaceError> {
    let mut tracker = DirtyTracker::new();
    let mut segments = 0;

    for (index, step) in script.steps.iter().enumerate() {
        debug!("Replaying step {}: {:?}", index, step);
        let damage = match step {
            Step::Resize { width, height } => {
                if state.ensure_capacity(*width, *height)? {
                    tracker.mark_full();
                }
                None
            }
            Step::SetTool { tool } => {
                state.set_tool(*tool);
                None
            }
            Step::SetColor { color } => {
                state.set_color(color.to_color());
                None
            }
            Step::SetWidth { width } => {
                state.set_width(*width);
                None
            }
            Step::Clear => {
                state.clear();
                tracker.mark_full();
                None
            }
            Step::MousePress { x, y, button } => state.feed(
                &MouseAdapter,
                MouseEvent::Press {
                    button: *button,
                    point: Point::new(*x, *y),
                },
            ),
            Step::MouseMove { x, y, left_held } => state.feed(
                &MouseAdapter,
                MouseEvent::Motion {
                    point: Point::new(*x, *y),
                    primary_held: *left_held,
                },
            ),
            Step::MouseRelease { x, y, button } => state.feed(
                &MouseAdapter,
                MouseEvent::Release {
                    button: *button,
                    point: Point::new(*x, *y),
                },
            ),
            Step::Touch { phase, contacts } => state.feed(
                &TouchAdapter,
                TouchEvent {
                    phase: *phase,
                    contacts: contacts.iter().map(|[x, y]| Point::new(*x, *y)).collect(),
                },
            ),
            Step::Stylus {
                phase,
                x,
                y,
                pressure,
            } => state.feed(
                &StylusAdapter,
                StylusEvent {
                    phase: *phase,
                    point: Point::new(*x, *y),
                    pressure: *pressure,
                },
            ),
        };

        if damage.is_some() {
            segments += 1;
        }
        tracker.mark_optional_rect(damage);
    }

    Ok(ReplayReport {
        segments,
        damage: tracker.take_regions(state.width() as i32, state.height() as i32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn engine() -> SketchState {
        SketchState::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn parses_every_step_kind() {
        let script = Script::from_toml_str(
            r#"
            [[step]]
            action = "resize"
            width = 900
            height = 700

            [[step]]
            action = "tool"
            tool = "eraser"

            [[step]]
            action = "color"
            color = [0, 0, 255]

            [[step]]
            action = "width"
            width = 4.5

            [[step]]
            action = "clear"

            [[step]]
            action = "mouse-press"
            x = 1
            y = 2

            [[step]]
            action = "mouse-move"
            x = 3
            y = 4
            left_held = false

            [[step]]
            action = "mouse-release"
            x = 3
            y = 4
            button = "right"

            [[step]]
            action = "touch"
            phase = "begin"
            contacts = [[5, 6], [7, 8]]

            [[step]]
            action = "stylus"
            phase = "release"
            x = 9
            y = 10
            pressure = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(script.steps.len(), 10);
        assert_eq!(
            script.steps[0],
            Step::Resize {
                width: 900,
                height: 700
            }
        );
        assert_eq!(
            script.steps[5],
            Step::MousePress {
                x: 1,
                y: 2,
                button: MouseButton::Left
            }
        );
        assert_eq!(
            script.steps[7],
            Step::MouseRelease {
                x: 3,
                y: 4,
                button: MouseButton::Right
            }
        );
        assert_eq!(script.steps[4], Step::Clear);
    }

    #[test]
    fn unknown_actions_are_rejected() {
        let err = Script::from_toml_str("[[step]]\naction = \"teleport\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn replay_counts_segments_and_keeps_damage() {
        let script = Script::from_toml_str(
            r#"
            [[step]]
            action = "mouse-press"
            x = 10
            y = 10

            [[step]]
            action = "mouse-move"
            x = 30
            y = 10

            [[step]]
            action = "mouse-release"
            x = 30
            y = 40
            "#,
        )
        .unwrap();

        let mut state = engine();
        let report = run_script(&mut state, &script).unwrap();
        assert_eq!(report.segments, 2);
        assert_eq!(report.damage.len(), 2);
        assert_eq!(
            report.damage_bounds(),
            Rect::from_min_max(7, 7, 34, 44)
        );
        assert!(state.has_content());
        assert!(!state.is_drawing());
    }

    #[test]
    fn growth_and_clear_invalidate_everything() {
        let script = Script::from_toml_str(
            r#"
            [[step]]
            action = "stylus"
            phase = "press"
            x = 10
            y = 10
            pressure = 0.5

            [[step]]
            action = "stylus"
            phase = "release"
            x = 20
            y = 10
            pressure = 0.5

            [[step]]
            action = "resize"
            width = 1000
            height = 600
            "#,
        )
        .unwrap();

        let mut state = engine();
        let report = run_script(&mut state, &script).unwrap();
        assert_eq!(report.segments, 1);
        assert_eq!(report.damage, vec![Rect::new(0, 0, 1128, 728).unwrap()]);
        assert_eq!((state.width(), state.height()), (1128, 728));
    }

    #[test]
    fn empty_script_leaves_canvas_untouched() {
        let mut state = engine();
        let report = run_script(&mut state, &Script::default()).unwrap();
        assert_eq!(report.segments, 0);
        assert!(report.damage.is_empty());
        assert_eq!(report.damage_bounds(), None);
        assert!(!state.has_content());
    }
}
