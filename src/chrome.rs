use crate::gallery::Message;

pub const DRAWER_WIDTH: f32 = 260.0;

const DRAWER_ITEMS: [(&str, &str); 4] = [
    ("dashboard", "▦  Dashboard"),
    ("images", "🖼  Images"),
    ("settings", "⚙  Settings"),
    ("help", "？ Help"),
];
const PROFILE_ITEMS: [&str; 3] = ["Profile", "Settings", "Logout"];

/// Top bar. The search box and the right-hand buttons are decoration only.
#[derive(Default)]
pub struct Navbar {
    search: String,
}

impl Navbar {
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Message> {
        let mut message = None;
        egui::TopBottomPanel::top("navbar")
            .exact_height(56.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui.button("☰").on_hover_text("Menu").clicked() {
                        message = Some(Message::ToggleDrawer);
                    }
                    ui.label(egui::RichText::new("IMAGE").monospace().strong().size(18.0));
                    ui.add_space(16.0);
                    ui.add(
                        egui::TextEdit::singleline(&mut self.search)
                            .hint_text("🔍 Search...")
                            .desired_width(320.0),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button("U", |ui| {
                            for item in PROFILE_ITEMS {
                                if ui.button(item).clicked() {
                                    tracing::debug!(item, "profile menu");
                                    ui.close_menu();
                                }
                            }
                        });
                        if ui.button("？ Help").clicked() {
                            tracing::debug!("help pressed");
                        }
                        if ui.button("🔔 Notifications").clicked() {
                            tracing::debug!("notifications pressed");
                        }
                    });
                });
            });
        message
    }
}

/// Collapsible navigation drawer on the left edge.
pub fn show_drawer(ctx: &egui::Context, open: bool) {
    egui::SidePanel::left("drawer")
        .resizable(false)
        .exact_width(DRAWER_WIDTH)
        .show_animated(ctx, open, |ui| {
            ui.add_space(8.0);
            for (id, label) in DRAWER_ITEMS {
                let selected = id == "images";
                if ui
                    .add_sized(
                        [ui.available_width(), 32.0],
                        egui::SelectableLabel::new(selected, label),
                    )
                    .clicked()
                {
                    tracing::debug!(item = id, "drawer item");
                }
            }
        });
}
