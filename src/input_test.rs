use uuid::Uuid;

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
    assert!(Tool::default().is_select());
}

#[test]
fn tool_kind_accessors() {
    assert_eq!(Tool::Shape(ShapeKind::Cloud).shape_kind(), Some(ShapeKind::Cloud));
    assert_eq!(Tool::Shape(ShapeKind::Cloud).pin_kind(), None);
    assert_eq!(Tool::Pin(PinKind::Punch).pin_kind(), Some(PinKind::Punch));
    assert_eq!(Tool::Select.shape_kind(), None);
}

#[test]
fn tool_parses_host_names() {
    assert_eq!("select".parse::<Tool>(), Ok(Tool::Select));
    assert_eq!("box".parse::<Tool>(), Ok(Tool::Shape(ShapeKind::Box)));
    assert_eq!(" Ellipse ".parse::<Tool>(), Ok(Tool::Shape(ShapeKind::Ellipse)));
    assert_eq!("cloud".parse::<Tool>(), Ok(Tool::Shape(ShapeKind::Cloud)));
    assert_eq!("photo".parse::<Tool>(), Ok(Tool::Pin(PinKind::Photo)));
    assert_eq!("SAFETY".parse::<Tool>(), Ok(Tool::Pin(PinKind::Safety)));
    assert_eq!("punch".parse::<Tool>(), Ok(Tool::Pin(PinKind::Punch)));
}

#[test]
fn tool_parse_unknown_is_error() {
    let err = "lasso".parse::<Tool>().unwrap_err();
    assert_eq!(err, ParseToolError("lasso".into()));
    assert_eq!(err.to_string(), "unknown tool: lasso");
}

// =============================================================
// Modifiers / Button / Key
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

#[test]
fn key_space_variants() {
    assert!(Key(" ".into()).is_space());
    assert!(Key("Space".into()).is_space());
    assert!(Key("Spacebar".into()).is_space());
    assert!(!Key("Enter".into()).is_space());
}

#[test]
fn key_delete_variants() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("Escape".into()).is_delete());
}

// =============================================================
// Gesture
// =============================================================

#[test]
fn gesture_small_movement_is_click() {
    let down = Point::new(100.0, 100.0);
    assert_eq!(Gesture::classify(down, Point::new(104.0, 96.0), 5.0), Gesture::Click);
    assert_eq!(Gesture::classify(down, down, 5.0), Gesture::Click);
}

#[test]
fn gesture_threshold_on_either_axis_is_drag() {
    let down = Point::new(100.0, 100.0);
    assert_eq!(Gesture::classify(down, Point::new(105.0, 100.0), 5.0), Gesture::Drag);
    assert_eq!(Gesture::classify(down, Point::new(100.0, 95.0), 5.0), Gesture::Drag);
    assert_eq!(Gesture::classify(down, Point::new(140.0, 160.0), 5.0), Gesture::Drag);
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_default() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert!(ui.selected_ids.is_empty());
    assert!(ui.selected_pin.is_none());
    assert!(!ui.space_held);
}

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert_eq!(InputState::default().name(), "idle");
}

#[test]
fn input_state_names_are_distinct() {
    let p = PctPoint::new(0.0, 0.0);
    let states = [
        InputState::Idle,
        InputState::Drawing { kind: ShapeKind::Box, start: p, draft: PctRect::default() },
        InputState::Moving { start: p, initial: Vec::new(), grabbed: Uuid::new_v4(), narrow_on_click: false },
        InputState::Resizing { start: p, id: Uuid::new_v4(), initial: PctRect::default(), handle: ResizeHandle::Br },
        InputState::Marquee { start: p, draft: PctRect::default() },
        InputState::Panning { start_screen: Point::new(0.0, 0.0), initial: ViewTransform::default() },
    ];
    let names: Vec<_> = states.iter().map(InputState::name).collect();
    for (i, a) in names.iter().enumerate() {
        for (j, b) in names.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
    assert_eq!(states.iter().filter(|s| s.is_idle()).count(), 1);
}
