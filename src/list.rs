use crate::catalog::ImageRecord;
use crate::gallery::Message;

const ROW_HEIGHT: f32 = 78.0;
const THUMB: f32 = 50.0;
const PAD: f32 = 14.0;
const NAME_MAX_CHARS: usize = 40;

/// Header plus one selectable row per record. Returns the pick, if any.
pub fn show(ui: &mut egui::Ui, records: &[ImageRecord], selected: Option<u32>) -> Option<Message> {
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Images Gallery").strong().size(15.0));
    ui.label(egui::RichText::new(image_count_label(records.len())).weak());
    ui.add_space(6.0);
    ui.separator();

    let mut picked = None;
    egui::ScrollArea::vertical()
        .id_salt("image_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for record in records {
                if draw_row(ui, record, selected == Some(record.id)) {
                    picked = Some(Message::SelectImage(record.clone()));
                }
            }
        });
    picked
}

fn image_count_label(n: usize) -> String {
    format!("{} images", n)
}

fn draw_row(ui: &mut egui::Ui, record: &ImageRecord, selected: bool) -> bool {
    let width = ui.available_width();
    let (resp, painter) =
        ui.allocate_painter(egui::vec2(width, ROW_HEIGHT), egui::Sense::click());
    let rect = resp.rect;
    let visuals = ui.visuals();

    if selected {
        painter.rect_filled(rect, 0.0, visuals.selection.bg_fill);
    } else if resp.hovered() {
        painter.rect_filled(rect, 0.0, visuals.widgets.hovered.bg_fill);
    }
    painter.hline(
        rect.x_range(),
        rect.bottom(),
        visuals.widgets.noninteractive.bg_stroke,
    );

    // Avatar with placeholder behind it
    let thumb_rect = egui::Rect::from_min_size(
        egui::pos2(rect.left() + PAD, rect.center().y - THUMB * 0.5),
        egui::vec2(THUMB, THUMB),
    );
    painter.rect_filled(thumb_rect, THUMB * 0.5, egui::Color32::from_gray(224));
    egui::Image::new(record.thumbnail.as_str()).paint_at(ui, thumb_rect);

    let text_x = thumb_rect.right() + PAD;
    let text_color = visuals.text_color();
    let weak_color = visuals.weak_text_color();

    painter.text(
        egui::pos2(text_x, rect.top() + 10.0),
        egui::Align2::LEFT_TOP,
        truncate(&record.name, NAME_MAX_CHARS),
        egui::FontId::proportional(13.0),
        text_color,
    );
    painter.text(
        egui::pos2(text_x, rect.top() + 29.0),
        egui::Align2::LEFT_TOP,
        size_and_date(record),
        egui::FontId::proportional(11.0),
        weak_color,
    );

    // Tag chips
    let mut x = text_x;
    let chip_top = rect.top() + 48.0;
    for tag in &record.tags {
        let galley = painter.layout_no_wrap(tag.clone(), egui::FontId::proportional(10.0), text_color);
        let chip = egui::Rect::from_min_size(
            egui::pos2(x, chip_top),
            galley.size() + egui::vec2(12.0, 4.0),
        );
        if chip.right() > rect.right() - PAD {
            break;
        }
        painter.rect_filled(chip, 9.0, visuals.faint_bg_color);
        painter.galley(chip.min + egui::vec2(6.0, 2.0), galley, text_color);
        x = chip.right() + 4.0;
    }

    resp.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
}

pub(crate) fn size_and_date(record: &ImageRecord) -> String {
    format!("{} • {}", record.size, record.date)
}

fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut short: String = name.chars().take(max_chars - 1).collect();
    short.push('…');
    short
}
