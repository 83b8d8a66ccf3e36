/// Shared data structures for the session state
///
/// These structs represent the data model that flows between the
/// workflow state machine and the UI layer. Pixel buffers are shared
/// behind an `Arc`, so a selection or zoom target never copies the bitmap
/// of the candidate it points at.
use image::RgbaImage;
use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

use crate::kv::LogicalName;

/// Decoded RGBA pixels, cheap to clone
#[derive(Clone, PartialEq)]
pub struct Pixels(Arc<RgbaImage>);

impl Pixels {
    pub fn new(image: RgbaImage) -> Self {
        Pixels(Arc::new(image))
    }

    /// True when both handles point at the same decoded buffer
    #[cfg(test)]
    pub fn same_buffer(&self, other: &Pixels) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Pixels {
    type Target = RgbaImage;

    fn deref(&self) -> &RgbaImage {
        &self.0
    }
}

// Printing every pixel is never useful in logs
impl fmt::Debug for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pixels({}x{})", self.0.width(), self.0.height())
    }
}

/// One of the three images offered after analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateImage {
    pub name: LogicalName,
    /// File the pixels were decoded from
    pub path: PathBuf,
    pub pixels: Pixels,
}

/// The candidate the user picked
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: LogicalName,
    pub path: PathBuf,
    pub pixels: Pixels,
}

impl From<&CandidateImage> for Selection {
    fn from(candidate: &CandidateImage) -> Self {
        Selection {
            name: candidate.name,
            path: candidate.path.clone(),
            pixels: candidate.pixels.clone(),
        }
    }
}

/// Candidate currently shown enlarged
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTarget {
    pub name: LogicalName,
    pub pixels: Pixels,
}

/// Output of an edit: either an alternate visual or the selection itself
#[derive(Debug, Clone, PartialEq)]
pub struct EditResult {
    pub name: LogicalName,
    pub pixels: Pixels,
}

impl From<&Selection> for EditResult {
    fn from(selection: &Selection) -> Self {
        EditResult {
            name: selection.name,
            pixels: selection.pixels.clone(),
        }
    }
}

/// How wide a large view of a visual may be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayWidth {
    /// Fill the container
    Fill,
    /// Fixed width in logical pixels
    Capped(u32),
}

/// Display rule for zoom and result views
///
/// Tall visuals are capped so they do not dominate the page. Only the
/// width hint changes; the pixels are shown as decoded.
pub fn display_width(name: LogicalName, tall_cap: u32) -> DisplayWidth {
    if name.is_tall() {
        DisplayWidth::Capped(tall_cap)
    } else {
        DisplayWidth::Fill
    }
}
