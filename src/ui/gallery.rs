/// Ready-to-draw previews for the candidate grid
///
/// Two tiers per candidate:
/// - grid thumbnail, fitted to the configured box
/// - full decoded image, for the enlarged view
///
/// Built off the UI thread so `view` only clones handles.
use iced::widget::image::Handle;
use image::RgbaImage;
use tracing::debug;

use crate::kv::thumbnail::{fit_to_box, BACKGROUND};
use crate::kv::LogicalName;
use crate::state::data::CandidateImage;

#[derive(Debug, Clone)]
pub struct Preview {
    pub name: LogicalName,
    pub thumbnail: Handle,
    pub full: Handle,
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    previews: Vec<Preview>,
}

impl Gallery {
    /// Generate both tiers for every candidate, keeping slot order
    pub fn build(candidates: &[CandidateImage], thumbnail_box: (u32, u32)) -> Self {
        let (box_width, box_height) = thumbnail_box;
        let previews = candidates
            .iter()
            .map(|candidate| {
                let thumbnail = fit_to_box(&candidate.pixels, box_width, box_height, BACKGROUND);
                debug!("📸 Generated {}x{} thumbnail for {}", box_width, box_height, candidate.name);
                Preview {
                    name: candidate.name,
                    thumbnail: to_handle(&thumbnail),
                    full: to_handle(&candidate.pixels),
                }
            })
            .collect();

        Gallery { previews }
    }

    pub fn get(&self, name: LogicalName) -> Option<&Preview> {
        self.previews.iter().find(|preview| preview.name == name)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = LogicalName> + '_ {
        self.previews.iter().map(|preview| preview.name)
    }
}

/// Copy decoded pixels into an iced image handle
pub fn to_handle(image: &RgbaImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.as_raw().clone())
}
