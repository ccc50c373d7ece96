use egui::load::TexturePoll;

use crate::gallery::Message;
use crate::list::size_and_date;
use crate::selection::ResolvedImage;
use crate::transform::{TransformState, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// Seconds the image eases towards a new zoom/rotation.
const TRANSITION: f32 = 0.3;
const ZOOM_MARKS: [u32; 3] = [50, 100, 200];

/// Preview pane for `image` under `transform`. Returns the messages raised by
/// its controls this frame.
pub fn show(ui: &mut egui::Ui, image: &ResolvedImage, transform: &TransformState) -> Vec<Message> {
    let mut messages = Vec::new();

    egui::TopBottomPanel::top("preview_header").show_inside(ui, |ui| {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&image.record.name).strong().size(15.0));
        ui.label(egui::RichText::new(size_and_date(&image.record)).weak());
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("preview_controls").show_inside(ui, |ui| {
        ui.add_space(8.0);
        show_controls(ui, image, transform, &mut messages);
        ui.add_space(8.0);
    });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        show_image(ui, &image.url, transform);
    });

    let upload = egui::Area::new(egui::Id::new("upload_fab"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-32.0, -48.0))
        .show(ui.ctx(), |ui| {
            ui.add(egui::Button::new(egui::RichText::new("☁ Upload").size(15.0)).min_size(egui::vec2(56.0, 56.0)))
                .on_hover_text("Upload Image")
                .clicked()
        });
    if upload.inner {
        messages.push(Message::Upload);
    }

    messages
}

fn show_image(ui: &mut egui::Ui, url: &str, transform: &TransformState) {
    let view = transform.view();
    let ctx = ui.ctx().clone();
    let id = ui.id();
    let degrees = ctx.animate_value_with_time(id.with("rotation"), view.degrees as f32, TRANSITION);
    let scale = ctx.animate_value_with_time(id.with("scale"), view.scale, TRANSITION);

    let area = ui.available_rect_before_wrap();
    let response = ui.allocate_rect(area, egui::Sense::hover());

    match egui::Image::new(url).load_for_size(&ctx, area.size()) {
        Ok(TexturePoll::Ready { texture }) => {
            let fitted = fit_contain(texture.size, area.size()) * scale;
            let paint_rect = egui::Rect::from_center_size(area.center(), fitted);
            egui::Image::from_texture(texture)
                .rotate(degrees.to_radians(), egui::Vec2::splat(0.5))
                .paint_at(ui, paint_rect);
            response.on_hover_text(view.css());
        }
        Ok(TexturePoll::Pending { .. }) => {
            ui.put(area, egui::Spinner::new());
        }
        Err(err) => {
            tracing::debug!(%url, %err, "preview image unavailable");
            ui.put(area, egui::Label::new("⚠ Could not open image"));
        }
    }
}

fn show_controls(
    ui: &mut egui::Ui,
    image: &ResolvedImage,
    transform: &TransformState,
    messages: &mut Vec<Message>,
) {
    if !image.record.tags.is_empty() {
        ui.label(egui::RichText::new("Tags").strong().small());
        ui.horizontal_wrapped(|ui| {
            for tag in &image.record.tags {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::symmetric(6, 1))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(tag).small());
                    });
            }
        });
        ui.add_space(8.0);
    }

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Zoom").strong().small());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{}%", transform.zoom()))
                    .strong()
                    .small()
                    .color(ui.visuals().hyperlink_color),
            );
        });
    });
    let mut zoom = transform.zoom();
    ui.spacing_mut().slider_width = ui.available_width();
    let slider = ui.add(
        egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX)
            .step_by(ZOOM_STEP as f64)
            .show_value(false)
            .clamping(egui::SliderClamping::Always),
    );
    if slider.changed() {
        messages.push(Message::SetZoom(zoom));
    }
    let marks_rect = egui::Rect::from_min_size(
        egui::pos2(slider.rect.left(), slider.rect.bottom()),
        egui::vec2(slider.rect.width(), 14.0),
    );
    ui.allocate_rect(marks_rect, egui::Sense::hover());
    for mark in ZOOM_MARKS {
        ui.painter().text(
            egui::pos2(marks_rect.lerp_inside(egui::vec2(mark_fraction(mark), 0.0)).x, marks_rect.top()),
            egui::Align2::CENTER_TOP,
            format!("{}%", mark),
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("⟲").on_hover_text("Rotate Left").clicked() {
            messages.push(Message::RotateLeft);
        }
        if ui.button("⟳").on_hover_text("Rotate Right").clicked() {
            messages.push(Message::RotateRight);
        }
        if transform.visual_degrees() != 0 {
            ui.weak(format!("({}°)", transform.visual_degrees()));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⬇ Download").clicked() {
                messages.push(Message::Download);
            }
        });
    });
}

/// Largest size with `texture`'s aspect that fits `available`, never upscaled.
fn fit_contain(texture: egui::Vec2, available: egui::Vec2) -> egui::Vec2 {
    if texture.x <= 0.0 || texture.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (available.x / texture.x).min(available.y / texture.y).min(1.0);
    texture * scale
}

/// Horizontal position of a zoom value along the slider, 0.0 to 1.0.
fn mark_fraction(zoom: u32) -> f32 {
    (zoom.clamp(ZOOM_MIN, ZOOM_MAX) - ZOOM_MIN) as f32 / (ZOOM_MAX - ZOOM_MIN) as f32
}
