use egui::{Color32, pos2};
use sketchpad::input::PointerSample;
use sketchpad::{DrawOp, EditorContext, InputHandler, RecordingSurface, Renderer, ToolState};

fn render(editor: &EditorContext) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    editor.render(&mut surface);
    surface
}

#[test]
fn test_render_is_idempotent() {
    let mut editor = EditorContext::default();
    editor.pointer_down(pos2(0.0, 0.0));
    editor.pointer_move(pos2(10.0, 10.0));
    editor.pointer_up();
    editor.pointer_move(pos2(50.0, 50.0));

    assert_eq!(render(&editor), render(&editor));
}

#[test]
fn test_single_click_leaves_no_mark() {
    let mut editor = EditorContext::default();
    editor.pointer_down(pos2(5.0, 5.0));
    editor.pointer_up();
    assert_eq!(editor.display_list().len(), 1);

    editor.pointer_leave();
    assert_eq!(render(&editor).mark_count(), 0);
}

#[test]
fn test_frame_layers_in_order() {
    let mut editor = EditorContext::new(
        Renderer::new(egui::vec2(100.0, 80.0), Color32::LIGHT_GRAY),
        ToolState::new(Color32::RED, 2.0).unwrap(),
    );
    editor.pointer_down(pos2(0.0, 0.0));
    editor.pointer_move(pos2(4.0, 4.0));
    editor.pointer_up();
    editor.pointer_down(pos2(10.0, 10.0));
    editor.pointer_move(pos2(12.0, 12.0));

    let surface = render(&editor);
    let ops = surface.ops();
    let canvas = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 80.0));
    assert_eq!(ops[0], DrawOp::Clear(canvas));
    assert_eq!(
        ops[1],
        DrawOp::FillRect {
            rect: canvas,
            color: Color32::LIGHT_GRAY,
        }
    );
    assert_eq!(
        ops[2],
        DrawOp::Polyline {
            points: vec![pos2(0.0, 0.0), pos2(4.0, 4.0)],
            width: 2.0,
            color: Color32::RED,
        }
    );
    // The uncommitted stroke is drawn on top of committed ones
    assert_eq!(
        ops[3],
        DrawOp::Polyline {
            points: vec![pos2(10.0, 10.0), pos2(12.0, 12.0)],
            width: 2.0,
            color: Color32::RED,
        }
    );
    assert_eq!(ops.len(), 4);
}

#[test]
fn test_preview_drawn_above_strokes() {
    let mut editor = EditorContext::default();
    editor.pointer_down(pos2(0.0, 0.0));
    editor.pointer_move(pos2(4.0, 4.0));
    editor.pointer_up();
    editor.select_sticker(Some("⭐".to_owned()));
    editor.pointer_move(pos2(20.0, 20.0));

    let surface = render(&editor);
    let last = surface.ops().last().unwrap();
    assert!(matches!(last, DrawOp::Text { text, pos, .. } if text == "⭐" && *pos == pos2(20.0, 20.0)));
}

#[test]
fn test_undo_removes_stroke_from_frame() {
    let mut editor = EditorContext::default();
    editor.pointer_down(pos2(0.0, 0.0));
    editor.pointer_move(pos2(4.0, 4.0));
    editor.pointer_up();
    assert_eq!(render(&editor).mark_count(), 1);

    editor.request_undo();
    assert_eq!(render(&editor).mark_count(), 0);
    editor.request_redo();
    assert_eq!(render(&editor).mark_count(), 1);
}

#[test]
fn test_tap_through_input_handler_commits_single_point() {
    let canvas = egui::Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(256.0, 256.0));
    let mut input = InputHandler::new();
    let mut editor = EditorContext::default();

    let tap = PointerSample {
        hover_pos: Some(pos2(110.0, 60.0)),
        primary_pressed: true,
        primary_released: true,
    };
    for event in input.translate(tap, canvas) {
        editor.handle_input(event);
    }

    let strokes = editor.display_list().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points(), &[pos2(10.0, 10.0)]);
    assert_eq!(render(&editor).mark_count(), 0);
}
