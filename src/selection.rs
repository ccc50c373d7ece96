use crate::catalog::{Catalog, ImageRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a record's full-resolution reference was obtained.
pub enum Resolution {
    /// The reference table had an entry for the record.
    Exact,
    /// No entry; the catalog's default reference was substituted.
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalog record joined with its full-resolution reference.
pub struct ResolvedImage {
    pub record: ImageRecord,
    pub url: String,
    pub resolution: Resolution,
}

/// Joins `entry` to its full-resolution reference by id.
///
/// Never fails: unmapped entries get the catalog default and are marked
/// [`Resolution::Degraded`].
pub fn resolve(entry: ImageRecord, catalog: &Catalog) -> ResolvedImage {
    let (url, resolution) = match catalog.reference_for(entry.id) {
        Some(url) => (url.to_string(), Resolution::Exact),
        None => (catalog.default_reference().to_string(), Resolution::Degraded),
    };
    ResolvedImage {
        record: entry,
        url,
        resolution,
    }
}

/// The single "currently selected image" slot.
#[derive(Debug, Default)]
pub struct Selection {
    current: Option<ResolvedImage>,
}

impl Selection {
    /// Resolves `entry` and replaces the current selection with it.
    pub fn select(&mut self, entry: ImageRecord, catalog: &Catalog) -> &ResolvedImage {
        let resolved = resolve(entry, catalog);
        if resolved.resolution == Resolution::Degraded {
            tracing::debug!(
                id = resolved.record.id,
                name = %resolved.record.name,
                "no reference mapped; using default"
            );
        }
        self.current.insert(resolved)
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.current.as_ref().map(|r| r.record.id)
    }

    /// The record to preview: the selection, or the catalog default.
    pub fn displayed(&self, catalog: &Catalog) -> ResolvedImage {
        match &self.current {
            Some(resolved) => resolved.clone(),
            None => resolve(catalog.default_record().clone(), catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown() -> ImageRecord {
        ImageRecord {
            id: 99,
            name: "Unknown".into(),
            size: "0 MB".into(),
            date: "2024-01-01".into(),
            tags: vec![],
            thumbnail: "about:blank".into(),
        }
    }

    #[test]
    fn every_catalog_entry_resolves_exactly() {
        let catalog = Catalog::builtin();
        for record in catalog.records() {
            let resolved = resolve(record.clone(), &catalog);
            assert_eq!(resolved.resolution, Resolution::Exact);
            assert_eq!(Some(resolved.url.as_str()), catalog.reference_for(record.id));
            assert_eq!(&resolved.record, record);
        }
    }

    #[test]
    fn mountain_peak_resolves_to_its_own_reference() {
        let catalog = Catalog::builtin();
        let entry = catalog
            .records()
            .iter()
            .find(|r| r.name == "Mountain Peak")
            .cloned()
            .unwrap();
        let resolved = resolve(entry, &catalog);
        assert!(resolved.url.contains("photo-1506905925346-21bda4d32df4"));
        assert_ne!(resolved.url, catalog.default_reference());
    }

    #[test]
    fn unknown_entry_degrades_to_first_reference() {
        let catalog = Catalog::builtin();
        let resolved = resolve(unknown(), &catalog);
        assert_eq!(resolved.resolution, Resolution::Degraded);
        assert_eq!(resolved.url, catalog.reference_for(1).unwrap());
        assert_eq!(resolved.record.name, "Unknown");
    }

    #[test]
    fn select_is_last_write_wins() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::default();
        assert_eq!(selection.selected_id(), None);

        selection.select(catalog.records()[2].clone(), &catalog);
        selection.select(catalog.records()[4].clone(), &catalog);
        assert_eq!(selection.selected_id(), Some(5));
        assert_eq!(selection.displayed(&catalog).record.name, "City Lights");
    }

    #[test]
    fn displayed_defaults_to_first_record() {
        let catalog = Catalog::builtin();
        let selection = Selection::default();
        let shown = selection.displayed(&catalog);
        assert_eq!(shown.record.name, "Sunset View");
        assert_eq!(shown.resolution, Resolution::Exact);
        assert_eq!(shown.url, catalog.default_reference());
    }
}
