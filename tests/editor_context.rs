use egui::{Color32, Pos2, pos2};
use sketchpad::{EditorContext, EditorEvent, InputEvent, Preview, SketchConfig};
use std::cell::RefCell;
use std::rc::Rc;

fn draw(editor: &mut EditorContext, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    editor.pointer_down(pos2(first.0, first.1));
    for (x, y) in rest {
        editor.pointer_move(pos2(*x, *y));
    }
    editor.pointer_up();
}

fn committed_points(editor: &EditorContext) -> Vec<Vec<Pos2>> {
    editor
        .display_list()
        .strokes()
        .iter()
        .map(|stroke| stroke.points().to_vec())
        .collect()
}

#[test]
fn test_undo_redo_scenario() {
    let mut editor = EditorContext::default();
    draw(&mut editor, &[(0.0, 0.0), (10.0, 10.0)]);
    draw(&mut editor, &[(20.0, 20.0), (30.0, 30.0)]);

    let a = vec![pos2(0.0, 0.0), pos2(10.0, 10.0)];
    let b = vec![pos2(20.0, 20.0), pos2(30.0, 30.0)];
    assert_eq!(committed_points(&editor), vec![a.clone(), b.clone()]);

    editor.request_undo();
    assert_eq!(committed_points(&editor), vec![a.clone()]);
    editor.request_undo();
    assert!(committed_points(&editor).is_empty());
    editor.request_redo();
    assert_eq!(committed_points(&editor), vec![a.clone()]);
    editor.request_redo();
    assert_eq!(committed_points(&editor), vec![a, b]);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut editor = EditorContext::default();
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    editor.request_undo();
    editor.request_redo();
    assert!(editor.display_list().is_empty());
}

#[test]
fn test_new_stroke_after_undo_invalidates_redo() {
    let mut editor = EditorContext::default();
    draw(&mut editor, &[(0.0, 0.0), (1.0, 1.0)]);
    editor.request_undo();
    assert!(editor.can_redo());

    draw(&mut editor, &[(5.0, 5.0), (6.0, 6.0)]);
    assert!(!editor.can_redo());
    editor.request_redo();
    assert_eq!(editor.display_list().len(), 1);
}

#[test]
fn test_clear_is_undoable() {
    let mut editor = EditorContext::default();
    draw(&mut editor, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut editor, &[(2.0, 2.0), (3.0, 3.0)]);
    let before = editor.display_list().clone();

    editor.request_clear();
    assert!(editor.display_list().is_empty());
    editor.request_undo();
    assert_eq!(editor.display_list(), &before);
}

#[test]
fn test_clear_on_empty_canvas_still_records_history() {
    let mut editor = EditorContext::default();
    editor.request_clear();
    assert!(editor.can_undo());
    editor.request_undo();
    assert!(editor.display_list().is_empty());
}

#[test]
fn test_sticker_placement_is_one_shot() {
    let mut editor = EditorContext::default();
    editor.select_sticker(Some("🌵".to_owned()));
    editor.pointer_move(pos2(40.0, 40.0));
    assert!(matches!(editor.preview(), Some(Preview::StickerGhost { .. })));

    editor.pointer_down(pos2(40.0, 40.0));
    editor.pointer_up();
    assert_eq!(editor.tool_state().selected_sticker(), None);
    assert!(editor.preview().is_none());
    assert!(!editor.state().is_drawing());

    let stamp = &editor.display_list().strokes()[0];
    assert_eq!(stamp.sticker(), Some("🌵"));
    assert_eq!(stamp.points(), &[pos2(40.0, 40.0)]);

    // Next press draws a normal stroke again
    editor.pointer_down(pos2(1.0, 1.0));
    assert!(editor.state().is_drawing());
    editor.pointer_move(pos2(2.0, 2.0));
    editor.pointer_up();
    let last = editor.display_list().strokes().last().unwrap();
    assert!(!last.is_stamp());
    assert_eq!(editor.display_list().len(), 2);
}

#[test]
fn test_preview_follows_pointer_and_hides_while_drawing() {
    let mut editor = EditorContext::default();
    editor.pointer_move(pos2(3.0, 4.0));
    assert!(matches!(
        editor.preview(),
        Some(Preview::BrushRing { center, .. }) if *center == pos2(3.0, 4.0)
    ));

    editor.pointer_down(pos2(3.0, 4.0));
    assert!(editor.preview().is_none());
    editor.pointer_move(pos2(8.0, 8.0));
    assert!(editor.preview().is_none());
    assert_eq!(editor.in_progress_stroke().unwrap().points().len(), 2);
}

#[test]
fn test_pointer_leave_keeps_stroke_in_progress() {
    let mut editor = EditorContext::default();
    editor.pointer_move(pos2(1.0, 1.0));
    editor.pointer_leave();
    assert!(editor.preview().is_none());

    editor.pointer_down(pos2(1.0, 1.0));
    editor.pointer_move(pos2(2.0, 2.0));
    editor.pointer_leave();
    assert!(editor.state().is_drawing());
    editor.pointer_up();
    assert_eq!(editor.display_list().len(), 1);
}

#[test]
fn test_strokes_keep_creation_time_style() {
    let mut editor = EditorContext::default();
    editor.set_color("red");
    editor.set_size(3.0);
    draw(&mut editor, &[(0.0, 0.0), (1.0, 1.0)]);

    editor.set_color("#0000ff");
    editor.set_size(5.0);
    let stroke = &editor.display_list().strokes()[0];
    assert_eq!(stroke.color(), Color32::from_rgb(255, 0, 0));
    assert_eq!(stroke.size(), 3.0);
}

#[test]
fn test_size_input_asymmetry() {
    let mut editor = EditorContext::default();
    editor.set_size_input("7");
    assert_eq!(editor.tool_state().size(), 5.0);
    editor.set_size_input("0");
    assert_eq!(editor.tool_state().size(), 5.0);
    editor.set_size_input("abc");
    assert_eq!(editor.tool_state().size(), 5.0);
}

#[test]
fn test_handle_input_dispatches_pointer_events() {
    let mut editor = EditorContext::default();
    for event in [
        InputEvent::PointerMove { pos: pos2(0.0, 0.0) },
        InputEvent::PointerDown { pos: pos2(0.0, 0.0) },
        InputEvent::PointerMove { pos: pos2(5.0, 5.0) },
        InputEvent::PointerUp,
        InputEvent::PointerLeave,
    ] {
        editor.handle_input(event);
    }
    assert_eq!(committed_points(&editor), vec![vec![pos2(0.0, 0.0), pos2(5.0, 5.0)]]);
    assert!(editor.preview().is_none());
}

#[test]
fn test_events_are_emitted() {
    let editor_events = Rc::new(RefCell::new(Vec::new()));
    let mut editor = EditorContext::default();
    {
        let editor_events = Rc::clone(&editor_events);
        editor.subscribe(Box::new(move |event: &EditorEvent| {
            editor_events.borrow_mut().push(event.clone());
        }));
    }

    editor.pointer_move(pos2(1.0, 1.0));
    assert_eq!(
        editor_events.borrow().as_slice(),
        &[
            EditorEvent::ToolMoved { pos: pos2(1.0, 1.0) },
            EditorEvent::DrawingChanged,
        ]
    );

    editor_events.borrow_mut().clear();
    draw(&mut editor, &[(0.0, 0.0), (1.0, 1.0)]);
    assert!(editor_events.borrow().contains(&EditorEvent::HistoryChanged {
        can_undo: true,
        can_redo: false,
    }));

    editor_events.borrow_mut().clear();
    editor.request_undo();
    assert_eq!(
        editor_events.borrow().as_slice(),
        &[
            EditorEvent::HistoryChanged {
                can_undo: false,
                can_redo: true,
            },
            EditorEvent::DrawingChanged,
        ]
    );

    // Nothing to undo: no notifications
    editor_events.borrow_mut().clear();
    editor.request_undo();
    assert!(editor_events.borrow().is_empty());
}

#[test]
fn test_from_config_applies_defaults() {
    let config = SketchConfig::from_json_str(
        r##"{"canvas_width": 512, "canvas_height": 128, "brush_color": "#336699", "brush_size": 2}"##,
    )
    .unwrap();
    let editor = EditorContext::from_config(&config).unwrap();
    assert_eq!(editor.canvas_size(), egui::vec2(512.0, 128.0));
    assert_eq!(editor.tool_state().color(), Color32::from_rgb(0x33, 0x66, 0x99));
    assert_eq!(editor.tool_state().size(), 2.0);
}
