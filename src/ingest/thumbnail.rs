//! In-memory thumbnail rendering for staged files.
//!
//! Decoding happens on a blocking task; the UI shows a placeholder card
//! until the handle arrives. Completions are keyed by a stable id, never by
//! list index, so a decode that finishes after its file was removed cannot
//! land on the wrong slot.

use std::sync::Arc;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tokio::task;

/// Size of generated thumbnails (longest edge)
const THUMBNAIL_SIZE: u32 = 256;

/// A decoded preview ready for the image widget.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Decode and downscale a staged payload. Returns `None` when the decoder
/// cannot read the format (FITS, corrupt data); the card keeps its
/// placeholder in that case.
pub async fn render(id: u64, bytes: Arc<Vec<u8>>) -> (u64, Option<Thumbnail>) {
    match task::spawn_blocking(move || render_blocking(&bytes)).await {
        Ok(thumbnail) => (id, thumbnail),
        Err(e) => {
            tracing::warn!("thumbnail task failed: {e}");
            (id, None)
        }
    }
}

fn render_blocking(bytes: &[u8]) -> Option<Thumbnail> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let resized = decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);

    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    Some(Thumbnail {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    })
}

/// Thumbnail slots kept in lockstep with the staged-file list.
///
/// Each staged file gets a slot at ingest time; the slot resolves when its
/// decode completes. Removing a slot drops the handle immediately, so
/// previews never outlive their file (the handle is the acquire, removal is
/// the release).
#[derive(Debug, Default)]
pub struct ThumbnailStrip {
    slots: Vec<Slot>,
    next_id: u64,
}

#[derive(Debug)]
struct Slot {
    id: u64,
    thumbnail: Option<Thumbnail>,
}

impl ThumbnailStrip {
    /// Append a pending slot and return its id for the decode task.
    pub fn stage(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            thumbnail: None,
        });
        id
    }

    /// Attach a finished decode. Silently ignored when the slot is already
    /// gone (file removed while the decode was in flight).
    pub fn resolve(&mut self, id: u64, thumbnail: Option<Thumbnail>) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == id) {
            slot.thumbnail = thumbnail;
        }
    }

    /// Release the slot at `index`. The selection store validates indices
    /// first, so an out-of-range index here is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Thumbnail> {
        self.slots.get(index)?.thumbnail.as_ref()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_thumbnail() -> Thumbnail {
        Thumbnail {
            handle: Handle::from_rgba(1, 1, vec![0u8; 4]),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn test_stage_and_resolve() {
        let mut strip = ThumbnailStrip::default();
        let id = strip.stage();

        assert_eq!(strip.len(), 1);
        assert!(strip.get(0).is_none());

        strip.resolve(id, Some(dummy_thumbnail()));

        assert!(strip.get(0).is_some());
    }

    #[test]
    fn test_stale_resolve_is_ignored() {
        let mut strip = ThumbnailStrip::default();
        let first = strip.stage();
        let _second = strip.stage();

        // First file removed before its decode completed
        strip.remove(0);
        strip.resolve(first, Some(dummy_thumbnail()));

        // The surviving slot must not pick up the stale thumbnail
        assert_eq!(strip.len(), 1);
        assert!(strip.get(0).is_none());
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut strip = ThumbnailStrip::default();
        let a = strip.stage();
        let _b = strip.stage();
        let c = strip.stage();
        strip.resolve(a, Some(dummy_thumbnail()));
        strip.resolve(c, Some(dummy_thumbnail()));

        strip.remove(1);

        assert_eq!(strip.len(), 2);
        assert!(strip.get(0).is_some());
        assert!(strip.get(1).is_some());
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut strip = ThumbnailStrip::default();
        strip.stage();
        strip.stage();

        strip.clear();

        assert_eq!(strip.len(), 0);
    }

    #[test]
    fn test_render_rejects_undecodable_bytes() {
        // FITS and garbage both fall back to the placeholder path
        assert!(render_blocking(&[0u8; 32]).is_none());
    }

    #[test]
    fn test_render_downscales_large_images() {
        use image::{DynamicImage, ImageFormat, RgbaImage};
        use std::io::Cursor;

        let source = DynamicImage::ImageRgba8(RgbaImage::new(1024, 512));
        let mut encoded = Cursor::new(Vec::new());
        source.write_to(&mut encoded, ImageFormat::Png).unwrap();

        let thumbnail = render_blocking(encoded.get_ref()).unwrap();

        assert!(thumbnail.width <= THUMBNAIL_SIZE);
        assert!(thumbnail.height <= THUMBNAIL_SIZE);
        // Aspect ratio preserved by the resize
        assert_eq!(thumbnail.width, 2 * thumbnail.height);
    }
}
