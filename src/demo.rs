//! Placeholder payloads for when the api can't be reached
//!
//! These are shaped like real responses so they go through the same mappers.
use crate::data::*;
use once_cell::sync::Lazy;

/// The first demo photo id
pub const PHOTO_ID_BASE: u64 = 1000;
/// The largest page the api serves
pub const MAX_PER_PAGE: u32 = 80;

/// The first demo video id
pub const VIDEO_ID_BASE: u64 = 2000;

const PALETTE: [&str; 6] = [
    "#3b4a5a", "#5a4636", "#2f4f3f", "#4a3b5a", "#5a3b45", "#37474f",
];

const SAMPLE_BASE: &str = "https://storage.googleapis.com/gtv-videos-bucket/sample";

struct DemoVideo {
    name: &'static str,
    author: &'static str,
    duration: u32,
}

static DEMO_VIDEOS: Lazy<Vec<DemoVideo>> = Lazy::new(|| {
    [
        ("BigBuckBunny", "Blender Foundation", 596),
        ("ElephantsDream", "Blender Foundation", 653),
        ("ForBiggerBlazes", "Google", 15),
        ("ForBiggerEscapes", "Google", 15),
        ("ForBiggerFun", "Google", 60),
        ("ForBiggerJoyrides", "Google", 15),
        ("Sintel", "Blender Foundation", 888),
        ("TearsOfSteel", "Blender Foundation", 734),
    ]
    .iter()
    .map(|&(name, author, duration)| DemoVideo {
        name,
        author,
        duration,
    })
    .collect()
});

/// How many demo videos there are, a demo page never has more than this
pub fn available_videos() -> usize {
    DEMO_VIDEOS.len()
}

/// A page of `per_page` demo photos, tagged with `query` if one was provided
///
/// `per_page` is capped at [`MAX_PER_PAGE`], the most the api will return
pub fn photos(query: Option<&str>, page: u32, per_page: u32) -> PhotoListing {
    let query = query.map(str::trim).filter(|s| !s.is_empty());
    let per_page = per_page.min(MAX_PER_PAGE);

    let photos = (0..per_page)
        .map(|index| demo_photo(index, query))
        .collect();

    PhotoListing {
        page,
        per_page,
        total_results: Some(per_page as _),
        photos,
        ..PhotoListing::default()
    }
}

/// A page of at most `per_page` demo videos
pub fn videos(page: u32, per_page: u32) -> VideoListing {
    let videos = DEMO_VIDEOS
        .iter()
        .take(per_page as _)
        .enumerate()
        .map(|(index, video)| demo_video(index as _, video))
        .collect::<Vec<_>>();

    VideoListing {
        page,
        per_page,
        total_results: Some(videos.len() as _),
        videos,
        ..VideoListing::default()
    }
}

fn demo_photo(index: u32, query: Option<&str>) -> RawPhoto {
    let id = PHOTO_ID_BASE + index as u64;
    // alternate landscape and portrait so a grid has some shape to it
    let (width, height) = if index % 2 == 0 {
        (1200, 800)
    } else {
        (800, 1200)
    };

    let seed = match query {
        Some(query) => format!("{}-{}", encode_seed(query), id),
        None => id.to_string(),
    };
    let sized = |w: u32| format!("https://picsum.photos/seed/{}/{}/{}", seed, w, w * height / width);

    let alt = match query {
        Some(query) => format!("{} (demo photo {})", query, index + 1),
        None => format!("Demo photo {}", index + 1),
    };

    RawPhoto {
        id,
        width,
        height,
        url: Some(format!("https://picsum.photos/seed/{}", seed)),
        alt: Some(alt),
        photographer: Some("Demo Photographer".into()),
        photographer_url: Some("https://picsum.photos".into()),
        avg_color: Some(PALETTE[index as usize % PALETTE.len()].into()),
        src: Some(PhotoSrc {
            original: Some(sized(width)),
            large2x: Some(sized(1880)),
            large: Some(sized(940)),
            medium: Some(sized(800)),
            small: Some(sized(480)),
            portrait: Some(format!("https://picsum.photos/seed/{}/800/1200", seed)),
            landscape: Some(format!("https://picsum.photos/seed/{}/1200/627", seed)),
            tiny: Some(sized(280)),
            ..PhotoSrc::default()
        }),
        ..RawPhoto::default()
    }
}

fn demo_video(index: u32, video: &DemoVideo) -> RawVideo {
    let id = VIDEO_ID_BASE + index as u64;
    let image = format!("{}/images/{}.jpg", SAMPLE_BASE, video.name);

    RawVideo {
        id,
        width: 1280,
        height: 720,
        duration: video.duration,
        url: Some(format!("{}/{}.mp4", SAMPLE_BASE, video.name)),
        image: Some(image.clone()),
        user: Some(VideoUser {
            name: Some(video.author.into()),
            ..VideoUser::default()
        }),
        video_files: vec![VideoFile {
            id: Some(id),
            quality: Some("hd".into()),
            file_type: Some(VideoFile::MP4.into()),
            width: Some(1280),
            height: Some(720),
            link: format!("{}/{}.mp4", SAMPLE_BASE, video.name),
            ..VideoFile::default()
        }],
        video_pictures: vec![VideoPicture {
            id: Some(id),
            nr: Some(0),
            picture: image,
            ..VideoPicture::default()
        }],
        ..RawVideo::default()
    }
}

// keeps the seed a single path segment
fn encode_seed(query: &str) -> String {
    query
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_ids() {
        for &per_page in &[0, 1, 24, 80] {
            let listing = photos(None, 1, per_page);
            let ids = listing.photos.iter().map(|p| p.id).collect::<Vec<_>>();
            let expected = (PHOTO_ID_BASE..PHOTO_ID_BASE + per_page as u64).collect::<Vec<_>>();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(photos(Some("cats"), 2, 10), photos(Some("cats"), 2, 10));
        assert_eq!(videos(1, 12), videos(1, 12));
    }

    #[test]
    fn photos_tagged_with_query() {
        let listing = photos(Some("cats"), 2, 3);
        assert_eq!(listing.page, 2);
        assert_eq!(listing.per_page, 3);
        for photo in &listing.photos {
            assert!(photo.alt.as_deref().unwrap().starts_with("cats"));
            assert!(photo.url.as_deref().unwrap().contains("cats-"));
        }

        let listing = photos(Some("  "), 1, 1);
        assert_eq!(listing.photos[0].alt.as_deref(), Some("Demo photo 1"));
    }

    #[test]
    fn photo_page_is_capped() {
        let listing = photos(Some("cats"), 1, u32::MAX);
        assert_eq!(listing.per_page, MAX_PER_PAGE);
        assert_eq!(listing.photos.len(), MAX_PER_PAGE as usize);
        assert_eq!(
            listing.photos.last().map(|p| p.id),
            Some(PHOTO_ID_BASE + MAX_PER_PAGE as u64 - 1)
        );
    }

    #[test]
    fn video_count() {
        assert_eq!(videos(1, 0).videos.len(), 0);
        assert_eq!(videos(1, 3).videos.len(), 3);
        assert_eq!(videos(1, 12).videos.len(), available_videos());
        assert!(videos(1, 12)
            .videos
            .iter()
            .all(|v| v.video_files.iter().any(VideoFile::is_mp4)));
    }

    #[test]
    fn seed() {
        assert_eq!(encode_seed("red cars/fast"), "red-cars-fast");
    }
}
