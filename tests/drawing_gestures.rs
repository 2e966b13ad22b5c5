use egui::{Color32, Pos2};
use squiggle_paint::{
    Document, DrawingController, GestureState, PaletteConfig, PointerEvent, ToolSettings,
};

#[test]
fn test_gesture_produces_one_stroke() {
    let palette = PaletteConfig::default().resolve();
    let mut tools = ToolSettings::from_palette(&palette);
    tools.select_color(&palette, 2);
    tools.select_pen(&palette, 1);

    let mut doc = Document::new();
    let mut controller = DrawingController::new();

    controller.handle_event(PointerEvent::Down(Pos2::new(10.0, 10.0)), &mut doc, &tools);
    // Swatch changes mid-gesture do not affect the stroke already started.
    tools.select_color(&palette, 0);
    controller.handle_event(PointerEvent::Drag(Pos2::new(20.0, 20.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::Drag(Pos2::new(30.0, 10.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::DragEnd, &mut doc, &tools);

    assert_eq!(doc.strokes().len(), 1);
    let stroke = &doc.strokes()[0];
    assert_eq!(
        stroke.points(),
        &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0), Pos2::new(30.0, 10.0)]
    );
    assert_eq!(stroke.color(), Color32::from_rgb(0xfd, 0x7f, 0x6f));
    assert_eq!(stroke.width(), 5.0);
    assert_eq!(controller.state(), GestureState::Idle);
    assert!(doc.is_modified());
}

#[test]
fn test_next_down_starts_independent_stroke() {
    let tools = ToolSettings::default();
    let mut doc = Document::new();
    let mut controller = DrawingController::new();

    controller.handle_event(PointerEvent::Down(Pos2::new(1.0, 1.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::Drag(Pos2::new(2.0, 2.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::DragEnd, &mut doc, &tools);
    controller.handle_event(PointerEvent::Down(Pos2::new(5.0, 5.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::Drag(Pos2::new(6.0, 6.0)), &mut doc, &tools);

    assert_eq!(doc.strokes().len(), 2);
    assert_eq!(doc.strokes()[0].points(), &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]);
    assert_eq!(doc.strokes()[1].points(), &[Pos2::new(5.0, 5.0), Pos2::new(6.0, 6.0)]);
    assert_eq!(controller.state(), GestureState::Drawing);
}

#[test]
fn test_click_makes_single_point_stroke() {
    let tools = ToolSettings::default();
    let mut doc = Document::new();
    let mut controller = DrawingController::new();

    controller.handle_event(PointerEvent::Down(Pos2::new(4.0, 4.0)), &mut doc, &tools);
    controller.handle_event(PointerEvent::DragEnd, &mut doc, &tools);

    assert_eq!(doc.strokes().len(), 1);
    assert!(!doc.strokes()[0].is_renderable());
}

#[test]
fn test_clear_request_from_any_state() {
    let tools = ToolSettings::default();
    let mut doc = Document::new();
    let mut controller = DrawingController::new();

    controller.handle_event(PointerEvent::Down(Pos2::ZERO), &mut doc, &tools);
    controller.handle_event(PointerEvent::ClearRequested, &mut doc, &tools);
    assert!(doc.is_empty());
    assert!(doc.is_modified());
    assert_eq!(controller.state(), GestureState::Idle);

    doc.modify(false);
    controller.handle_event(PointerEvent::ClearRequested, &mut doc, &tools);
    assert!(doc.is_empty());
    assert!(doc.is_modified());
}

#[test]
fn test_undo_and_redo_gestures_and_clear() {
    let tools = ToolSettings::default();
    let mut doc = Document::new();
    let mut controller = DrawingController::new();

    for x in [1.0, 2.0] {
        controller.handle_event(PointerEvent::Down(Pos2::new(x, 0.0)), &mut doc, &tools);
        controller.handle_event(PointerEvent::Drag(Pos2::new(x, 1.0)), &mut doc, &tools);
        controller.handle_event(PointerEvent::DragEnd, &mut doc, &tools);
    }
    let drawn = doc.strokes().to_vec();

    controller.handle_event(PointerEvent::ClearRequested, &mut doc, &tools);
    assert!(controller.undo(&mut doc));
    assert_eq!(doc.strokes(), drawn.as_slice());

    assert!(controller.undo(&mut doc));
    assert_eq!(doc.strokes(), &drawn[..1]);

    assert!(controller.redo(&mut doc));
    assert!(controller.redo(&mut doc));
    assert!(doc.is_empty());
    assert!(!controller.redo(&mut doc));
}
