//! Flattens raw api listings into items a front-end can render directly
use crate::data::*;
use serde::{Deserialize, Serialize};


/// Used when a photo has no average color
pub const DEFAULT_AVG_COLOR: &str = "#1f1f1f";

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    pub photographer: String,
    pub photographer_url: String,
    pub url: String,
    pub thumbnail: String,
    pub display: String,
    pub full: String,
    pub avg_color: String,
    pub srcset: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub duration: u32,
    pub thumbnail: String,
    pub mp4: String,
    pub author: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Either kind of item, for mixed feeds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaItem {
    Photo(PhotoItem),
    Video(VideoItem),
}

impl MediaItem {
    pub fn id(&self) -> u64 {
        match self {
            Self::Photo(photo) => photo.id,
            Self::Video(video) => video.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Photo(..) => MediaKind::Photo,
            Self::Video(..) => MediaKind::Video,
        }
    }
}

/// A named size of a photo
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rendition {
    Tiny,
    Small,
    Medium,
    Large,
    Large2x,
    Original,
}

impl Rendition {
    /// Renditions that go into a srcset, smallest first
    pub const SRCSET: [Rendition; 5] = [
        Rendition::Tiny,
        Rendition::Small,
        Rendition::Medium,
        Rendition::Large,
        Rendition::Large2x,
    ];

    const DISPLAY: [Rendition; 5] = [
        Rendition::Large2x,
        Rendition::Large,
        Rendition::Medium,
        Rendition::Small,
        Rendition::Tiny,
    ];

    const THUMBNAIL: [Rendition; 2] = [Rendition::Small, Rendition::Tiny];

    const FULL: [Rendition; 2] = [Rendition::Original, Rendition::Large2x];

    /// The width label used in a srcset. `Original` has no fixed width
    pub fn width(self) -> Option<u32> {
        match self {
            Rendition::Tiny => Some(280),
            Rendition::Small => Some(480),
            Rendition::Medium => Some(800),
            Rendition::Large => Some(940),
            Rendition::Large2x => Some(1880),
            Rendition::Original => None,
        }
    }

    /// The url for this rendition, if it exists and isn't empty
    pub fn get(self, src: &PhotoSrc) -> Option<&str> {
        match self {
            Rendition::Tiny => &src.tiny,
            Rendition::Small => &src.small,
            Rendition::Medium => &src.medium,
            Rendition::Large => &src.large,
            Rendition::Large2x => &src.large2x,
            Rendition::Original => &src.original,
        }
        .as_deref()
        .filter(|s| !s.is_empty())
    }
}

/// The first rendition in `order` that `src` has
fn first_present<'a>(src: &'a PhotoSrc, order: &[Rendition]) -> Option<&'a str> {
    order.iter().find_map(|rendition| rendition.get(src))
}

fn srcset(src: &PhotoSrc) -> String {
    Rendition::SRCSET
        .iter()
        .filter_map(|&rendition| {
            let url = rendition.get(src)?;
            Some(format!("{} {}w", url, rendition.width()?))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

pub fn map_photo(photo: &RawPhoto) -> PhotoItem {
    let empty = PhotoSrc::default();
    let src = photo.src.as_ref().unwrap_or(&empty);

    let display = first_present(src, &Rendition::DISPLAY).unwrap_or_default();
    let thumbnail = first_present(src, &Rendition::THUMBNAIL).unwrap_or(display);
    let full = first_present(src, &Rendition::FULL).unwrap_or(display);

    let owned = |s: Option<&str>| s.unwrap_or_default().to_string();

    PhotoItem {
        id: photo.id,
        width: photo.width,
        height: photo.height,
        alt: owned(non_empty(&photo.alt)),
        photographer: owned(non_empty(&photo.photographer)),
        photographer_url: owned(non_empty(&photo.photographer_url)),
        url: owned(non_empty(&photo.url)),
        thumbnail: thumbnail.to_string(),
        display: display.to_string(),
        full: full.to_string(),
        avg_color: non_empty(&photo.avg_color)
            .unwrap_or(DEFAULT_AVG_COLOR)
            .to_string(),
        srcset: srcset(src),
        kind: MediaKind::Photo,
    }
}

/// Maps a video, or `None` if it has no mp4 file
pub fn map_video(video: &RawVideo) -> Option<VideoItem> {
    let mp4 = video.video_files.iter().find(|file| file.is_mp4())?;

    let thumbnail = non_empty(&video.image)
        .or_else(|| {
            video
                .video_pictures
                .iter()
                .map(|p| p.picture.as_str())
                .find(|s| !s.is_empty())
        })
        .unwrap_or_default();

    let author = video
        .user
        .as_ref()
        .and_then(|user| user.name.as_deref())
        .unwrap_or_default();

    VideoItem {
        id: video.id,
        width: video.width,
        height: video.height,
        duration: video.duration,
        thumbnail: thumbnail.to_string(),
        mp4: mp4.link.clone(),
        author: author.to_string(),
        url: non_empty(&video.url).unwrap_or_default().to_string(),
        kind: MediaKind::Video,
    }
    .into()
}

/// One item per photo in the listing. A missing listing is empty
pub fn map_photo_items(listing: Option<&PhotoListing>) -> Vec<PhotoItem> {
    listing
        .map(|listing| listing.photos.iter().map(map_photo).collect())
        .unwrap_or_default()
}

/// One item per video in the listing that has an mp4 file. A missing listing is empty
pub fn map_video_items(listing: Option<&VideoListing>) -> Vec<VideoItem> {
    listing
        .map(|listing| listing.videos.iter().filter_map(map_video).collect())
        .unwrap_or_default()
}

/// Photos followed by videos
pub fn map_items(photos: Option<&PhotoListing>, videos: Option<&VideoListing>) -> Vec<MediaItem> {
    map_photo_items(photos)
        .into_iter()
        .map(MediaItem::Photo)
        .chain(map_video_items(videos).into_iter().map(MediaItem::Video))
        .collect()
}
