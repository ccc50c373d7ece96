use crate::catalog::{Catalog, ImageRecord};
use crate::selection::{ResolvedImage, Selection};
use crate::transform::TransformState;

const DOWNLOAD_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
/// User intents reported by the list, preview and chrome.
pub enum Message {
    SelectImage(ImageRecord),
    SetZoom(u32),
    RotateLeft,
    RotateRight,
    Download,
    Upload,
    ToggleDrawer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Work the host has to carry out after an update. Results are never fed back.
pub enum Effect {
    SaveAs { url: String, file_name: String },
    PickUpload,
}

/// Gallery state: catalog, selection, preview transform and drawer flag.
pub struct Gallery {
    catalog: Catalog,
    selection: Selection,
    transform: TransformState,
    pub drawer_open: bool,
}

impl Gallery {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            transform: TransformState::default(),
            drawer_open: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selection.selected_id()
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// Record currently shown in the preview.
    pub fn displayed(&self) -> ResolvedImage {
        self.selection.displayed(&self.catalog)
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::SelectImage(entry) => {
                let resolved = self.selection.select(entry, &self.catalog);
                tracing::debug!(id = resolved.record.id, url = %resolved.url, "selected image");
                None
            }
            Message::SetZoom(value) => {
                self.transform.set_zoom(value);
                None
            }
            Message::RotateLeft => {
                self.transform.rotate_left();
                None
            }
            Message::RotateRight => {
                self.transform.rotate_right();
                None
            }
            Message::Download => {
                let shown = self.displayed();
                Some(Effect::SaveAs {
                    file_name: download_file_name(&shown.record.name),
                    url: shown.url,
                })
            }
            Message::Upload => Some(Effect::PickUpload),
            Message::ToggleDrawer => {
                self.drawer_open = !self.drawer_open;
                None
            }
        }
    }
}

/// `<name>.jpg`, with path separators replaced.
pub fn download_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}.{DOWNLOAD_EXTENSION}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Resolution;

    fn gallery() -> Gallery {
        Gallery::new(Catalog::builtin())
    }

    fn record(g: &Gallery, name: &str) -> ImageRecord {
        g.catalog()
            .records()
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .unwrap()
    }

    #[test]
    fn initial_preview_shows_default_record_untransformed() {
        let g = gallery();
        let shown = g.displayed();
        assert_eq!(shown.record.name, "Sunset View");
        assert_eq!(g.transform().zoom(), 100);
        assert_eq!(g.transform().rotation(), 0);
        assert_eq!(g.selected_id(), None);
    }

    #[test]
    fn select_updates_highlight_and_preview() {
        let mut g = gallery();
        let peak = record(&g, "Mountain Peak");
        assert_eq!(g.update(Message::SelectImage(peak)), None);
        assert_eq!(g.selected_id(), Some(2));
        let shown = g.displayed();
        assert_eq!(shown.record.name, "Mountain Peak");
        assert_eq!(shown.resolution, Resolution::Exact);
    }

    #[test]
    fn transform_survives_selection_change() {
        let mut g = gallery();
        g.update(Message::SetZoom(160));
        g.update(Message::RotateRight);
        g.update(Message::SelectImage(record(&g, "Ocean Waves")));
        assert_eq!(g.transform().zoom(), 160);
        assert_eq!(g.transform().rotation(), 90);
    }

    #[test]
    fn rotation_messages_accumulate() {
        let mut g = gallery();
        for _ in 0..4 {
            g.update(Message::RotateRight);
        }
        assert_eq!(g.transform().rotation(), 360);
        g.update(Message::RotateLeft);
        assert_eq!(g.transform().rotation(), 270);
    }

    #[test]
    fn set_zoom_message_is_clamped() {
        let mut g = gallery();
        g.update(Message::SetZoom(20));
        assert_eq!(g.transform().zoom(), 50);
        g.update(Message::SetZoom(900));
        assert_eq!(g.transform().zoom(), 200);
    }

    #[test]
    fn download_uses_displayed_record() {
        let mut g = gallery();
        let effect = g.update(Message::Download);
        assert_eq!(
            effect,
            Some(Effect::SaveAs {
                url: g.catalog().default_reference().to_string(),
                file_name: "Sunset View.jpg".into(),
            })
        );

        g.update(Message::SelectImage(record(&g, "Forest Path")));
        let Some(Effect::SaveAs { url, file_name }) = g.update(Message::Download) else {
            panic!("download should request a save");
        };
        assert_eq!(file_name, "Forest Path.jpg");
        assert_eq!(Some(url.as_str()), g.catalog().reference_for(4));
    }

    #[test]
    fn upload_only_requests_picker() {
        let mut g = gallery();
        assert_eq!(g.update(Message::Upload), Some(Effect::PickUpload));
        assert_eq!(g.catalog().len(), 6);
        assert_eq!(g.selected_id(), None);
    }

    #[test]
    fn drawer_toggles() {
        let mut g = gallery();
        g.update(Message::ToggleDrawer);
        assert!(g.drawer_open);
        g.update(Message::ToggleDrawer);
        assert!(!g.drawer_open);
    }

    #[test]
    fn download_name_strips_separators() {
        assert_eq!(download_file_name("City Lights"), "City Lights.jpg");
        assert_eq!(download_file_name("a/b\\c"), "a_b_c.jpg");
    }
}
