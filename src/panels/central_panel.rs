use crate::app::SketchpadApp;
use crate::surface::EguiSurface;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sketchpad");

        let canvas_size = app.editor().canvas_size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        let events = app.input_mut().process_input(ctx, canvas_rect);
        for event in events {
            app.editor_mut().handle_input(event);
        }

        let mut surface = EguiSurface::new(&painter, canvas_rect);
        app.editor().render(&mut surface);
    });
}
