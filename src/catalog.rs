use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A catalog entry as shown in the list. Carries no full-resolution reference.
pub struct ImageRecord {
    pub id: u32,
    pub name: String,
    pub size: String,
    pub date: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
}

/// On-disk shape of a catalog entry; `url` is only present for mapped entries.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(flatten)]
    record: ImageRecord,
    #[serde(default)]
    url: Option<String>,
}

/// Read-only, ordered collection of known images plus the id-keyed table of
/// full-resolution references.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ImageRecord>,
    references: HashMap<u32, String>,
    default_reference: String,
}

const UNSPLASH: &str = "https://images.unsplash.com";

// (id, name, size, date, tags, unsplash photo id)
const BUILTIN: &[(u32, &str, &str, &str, &[&str], &str)] = &[
    (1, "Sunset View", "2.4 MB", "2024-11-28", &["nature", "landscape"], "photo-1495567720989-cebdbdd97913"),
    (2, "Mountain Peak", "3.1 MB", "2024-11-27", &["nature", "mountain"], "photo-1506905925346-21bda4d32df4"),
    (3, "Ocean Waves", "1.8 MB", "2024-11-26", &["water", "nature"], "photo-1505142468610-359e7d316be0"),
    (4, "Forest Path", "2.7 MB", "2024-11-25", &["nature", "forest"], "photo-1441974231531-c6227db76b6e"),
    (5, "City Lights", "3.5 MB", "2024-11-24", &["urban", "night"], "photo-1480714378408-67cf0d13bc1b"),
    (6, "Beach Sand", "2.2 MB", "2024-11-23", &["beach", "nature"], "photo-1507525428034-b723cf961d3e"),
];

fn unsplash_uri(photo: &str, width: u32, height: u32) -> String {
    format!("{UNSPLASH}/{photo}?w={width}&h={height}&fit=crop")
}

impl Catalog {
    /// The six sample images, newest first.
    pub fn builtin() -> Self {
        let mut records = Vec::with_capacity(BUILTIN.len());
        let mut references = HashMap::with_capacity(BUILTIN.len());
        for &(id, name, size, date, tags, photo) in BUILTIN {
            records.push(ImageRecord {
                id,
                name: name.to_string(),
                size: size.to_string(),
                date: date.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                thumbnail: unsplash_uri(photo, 100, 100),
            });
            references.insert(id, unsplash_uri(photo, 800, 600));
        }
        let default_reference = references[&records[0].id].clone();
        Self {
            records,
            references,
            default_reference,
        }
    }

    /// Parses a JSON array of `{id, name, size, date, tags, thumbnail, url?}`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).context("catalog is not a valid image list")?;
        let Some(first) = entries.first() else {
            bail!("catalog is empty");
        };
        let Some(default_reference) = first.url.clone() else {
            bail!("first catalog entry `{}` has no url", first.record.name);
        };

        let mut seen = HashSet::with_capacity(entries.len());
        let mut records = Vec::with_capacity(entries.len());
        let mut references = HashMap::new();
        for CatalogEntry { record, url } in entries {
            if !seen.insert(record.id) {
                bail!("duplicate catalog id {}", record.id);
            }
            if let Some(url) = url {
                references.insert(record.id, url);
            }
            records.push(record);
        }

        Ok(Self {
            records,
            references,
            default_reference,
        })
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
    }

    /// Loads `path` if given, degrading to the built-in catalog on any error.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), images = catalog.len(), "loaded catalog");
                catalog
            }
            Err(err) => {
                tracing::warn!("{err:#}; using built-in catalog");
                Self::builtin()
            }
        }
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Full-resolution reference mapped for `id`, if any.
    pub fn reference_for(&self, id: u32) -> Option<&str> {
        self.references.get(&id).map(String::as_str)
    }

    /// Reference substituted for unmapped entries: the first image's.
    pub fn default_reference(&self) -> &str {
        &self.default_reference
    }

    /// Record shown before anything is selected.
    pub fn default_record(&self) -> &ImageRecord {
        &self.records[0]
    }
}
