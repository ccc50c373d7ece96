use crate::{
    catalog::Catalog,
    chrome::{self, Navbar},
    config::AppConfig,
    gallery::{Effect, Gallery, Message},
    guard::InputGuard,
    list, preview, shell,
};

const LIST_WIDTH: f32 = 500.0;

pub struct GalleryApp {
    gallery: Gallery,
    navbar: Navbar,
    guard: InputGuard,
    config: AppConfig,
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, catalog: Catalog) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let mut gallery = Gallery::new(catalog);
        gallery.drawer_open = config.drawer_open.unwrap_or(false);
        Self {
            gallery,
            navbar: Navbar::default(),
            guard: InputGuard::default(),
            config,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, message: Message) {
        let Some(effect) = self.gallery.update(message) else {
            return;
        };
        match effect {
            Effect::SaveAs { url, file_name } => shell::save_as(ctx, &url, &file_name),
            Effect::PickUpload => {
                let _ = shell::pick_upload();
            }
        }
    }
}

impl eframe::App for GalleryApp {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        self.guard.filter(raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window size for saving on exit
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        let mut messages = Vec::new();
        messages.extend(self.navbar.show(ctx));
        chrome::show_drawer(ctx, self.gallery.drawer_open);

        let selected_id = self.gallery.selected_id();
        let list_panel = egui::SidePanel::left("image_list_panel")
            .default_width(self.config.list_width.unwrap_or(LIST_WIDTH))
            .width_range(280.0..=720.0)
            .show(ctx, |ui| {
                list::show(ui, self.gallery.catalog().records(), selected_id)
            });
        self.config.list_width = Some(list_panel.response.rect.width());
        messages.extend(list_panel.inner);

        let shown = self.gallery.displayed();
        let preview_panel = egui::CentralPanel::default()
            .show(ctx, |ui| preview::show(ui, &shown, self.gallery.transform()));
        messages.extend(preview_panel.inner);

        self.guard
            .set_regions([list_panel.response.rect, preview_panel.response.rect]);

        for message in messages {
            self.dispatch(ctx, message);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.drawer_open = Some(self.gallery.drawer_open);
        self.config.save();
    }
}
