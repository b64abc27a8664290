use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::*;
use crate::error::PageError;

/// A reference to one image of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(PathBuf);

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    #[cfg(test)]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Gallery,
    Inline,
    About,
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: String,
    pub kind: SectionKind,
    pub images: Vec<ImageRef>,
}

/// A scanned portfolio directory.
///
/// The root may hold a `hero.*` image and loose images; every sub-directory
/// becomes a section. Sub-directories named in `gallery_ids` are galleries
/// (carousel tracks), `about` is the about section, everything else is an
/// inline project section.
#[derive(Debug, Clone)]
pub struct Page {
    pub root: PathBuf,
    pub hero: Option<ImageRef>,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn scan(root: &Path, gallery_ids: &[String]) -> Result<Self, PageError> {
        let entries = fs::read_dir(root).map_err(|source| PageError::Unreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PageError::Unreadable {
                path: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            }
        }
        dirs.sort();

        let mut hero = None;
        let mut loose = Vec::new();
        for image in sorted_images(root)? {
            let is_hero = image
                .path()
                .file_stem()
                .is_some_and(|stem| stem.eq_ignore_ascii_case("hero"));
            if is_hero && hero.is_none() {
                hero = Some(image);
            } else {
                loose.push(image);
            }
        }

        let mut sections = Vec::new();
        if !loose.is_empty() {
            sections.push(Section {
                id: LOOSE_SECTION_ID.to_string(),
                kind: SectionKind::Inline,
                images: loose,
            });
        }

        for dir in dirs {
            let Some(id) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let kind = if gallery_ids.iter().any(|g| *g == id) {
                SectionKind::Gallery
            } else if id == ABOUT_SECTION_ID {
                SectionKind::About
            } else {
                SectionKind::Inline
            };
            let images = sorted_images(&dir)?;
            debug!(section = %id, ?kind, images = images.len(), "scanned section");
            sections.push(Section { id, kind, images });
        }

        // About closes the page
        sections.sort_by_key(|s| s.kind == SectionKind::About);

        Ok(Self {
            root: root.to_path_buf(),
            hero,
            sections,
        })
    }

    /// The image track of a gallery, if the page has one with this id.
    pub fn track(&self, id: &str) -> Option<&[ImageRef]> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::Gallery && s.id == id)
            .map(|s| s.images.as_slice())
    }

    #[cfg(test)]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

// --- Helper: Load and Sort Image Paths ---
fn sorted_images(dir: &Path) -> Result<Vec<ImageRef>, PageError> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir).map_err(|source| PageError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| PageError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths.into_iter().map(ImageRef::new).collect())
}

fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "bmp" | "gif"
        ),
        None => false,
    }
}
