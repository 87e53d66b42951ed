use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page of photos, from `/v1/curated` or `/v1/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoListing {
    #[serde(deserialize_with = "crate::util::null_default")]
    pub page: u32,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub photos: Vec<RawPhoto>,
    /// Everything else the api sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPhoto {
    #[serde(deserialize_with = "crate::util::null_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub width: u32,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub height: u32,
    pub url: Option<String>,
    pub alt: Option<String>,
    pub photographer: Option<String>,
    pub photographer_url: Option<String>,
    pub avg_color: Option<String>,
    pub src: Option<PhotoSrc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The renditions of a photo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSrc {
    pub original: Option<String>,
    pub large2x: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
    pub portrait: Option<String>,
    pub landscape: Option<String>,
    pub tiny: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A page of videos, from `/videos/popular` or `/videos/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoListing {
    #[serde(deserialize_with = "crate::util::null_default")]
    pub page: u32,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub videos: Vec<RawVideo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVideo {
    #[serde(deserialize_with = "crate::util::null_default")]
    pub id: u64,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub width: u32,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub height: u32,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub duration: u32,
    pub url: Option<String>,
    pub image: Option<String>,
    pub user: Option<VideoUser>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub video_files: Vec<VideoFile>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub video_pictures: Vec<VideoPicture>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoUser {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One encoding of a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoFile {
    pub id: Option<u64>,
    pub quality: Option<String>,
    pub file_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoFile {
    pub const MP4: &'static str = "video/mp4";

    pub fn is_mp4(&self) -> bool {
        self.file_type.as_deref() == Some(Self::MP4)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoPicture {
    pub id: Option<u64>,
    pub nr: Option<u32>,
    #[serde(deserialize_with = "crate::util::null_default")]
    pub picture: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient() {
        let listing: PhotoListing = serde_json::from_str(
            r#"{
                "page": 3,
                "photos": [
                    { "id": 1, "alt": null, "src": { "tiny": "T" }, "liked": false },
                    { "id": 2, "src": null }
                ],
                "prev_page": "https://api.pexels.com/v1/curated?page=2"
            }"#,
        )
        .unwrap();

        assert_eq!(listing.page, 3);
        assert_eq!(listing.per_page, 0);
        assert_eq!(listing.photos.len(), 2);
        assert_eq!(listing.photos[0].alt, None);
        assert_eq!(listing.photos[0].extra["liked"], Value::Bool(false));
        assert_eq!(listing.photos[1].src, None);
        assert!(listing.extra.contains_key("prev_page"));

        let listing: VideoListing = serde_json::from_str(r#"{ "videos": null }"#).unwrap();
        assert!(listing.videos.is_empty());
    }

    #[test]
    fn keeps_unknown_fields() {
        let input = serde_json::json!({
            "page": 1,
            "per_page": 1,
            "total_results": 8000,
            "videos": [{
                "id": 7,
                "width": 1920,
                "height": 1080,
                "duration": 12,
                "url": "https://www.pexels.com/video/7/",
                "image": "https://images.pexels.com/videos/7/pictures/preview-0.jpg",
                "user": {
                    "id": 1,
                    "name": "someone",
                    "url": "https://www.pexels.com/@someone",
                    "avatar": "https://images.pexels.com/users/avatars/1.jpeg"
                },
                "video_files": [{
                    "id": 70,
                    "quality": "hd",
                    "file_type": "video/mp4",
                    "width": 1920,
                    "height": 1080,
                    "fps": 25.0,
                    "size": 2813945,
                    "link": "https://videos.pexels.com/video-files/7/7-hd_1920_1080_25fps.mp4"
                }],
                "video_pictures": [{
                    "id": 71,
                    "nr": 0,
                    "picture": "https://images.pexels.com/videos/7/pictures/preview-0.jpg",
                    "blurhash": "LKO2?U%2Tw=w]~RBVZRi};RPxuwH"
                }],
                "tags": ["sea"]
            }],
            "url": "https://www.pexels.com/videos/"
        });

        let listing: VideoListing = serde_json::from_value(input.clone()).unwrap();
        let video = &listing.videos[0];
        assert_eq!(video.extra["tags"], serde_json::json!(["sea"]));
        assert_eq!(video.video_files[0].extra["size"], serde_json::json!(2813945));
        assert_eq!(video.user.as_ref().unwrap().extra["avatar"], input["videos"][0]["user"]["avatar"]);
        assert!(video.video_pictures[0].extra.contains_key("blurhash"));
        assert_eq!(listing.extra["url"], input["url"]);

        // nested records survive being written back out
        let output = serde_json::to_value(&listing).unwrap();
        assert_eq!(output["videos"][0]["video_files"][0], input["videos"][0]["video_files"][0]);
        assert_eq!(output["videos"][0]["video_pictures"][0], input["videos"][0]["video_pictures"][0]);
        assert_eq!(output["videos"][0]["user"], input["videos"][0]["user"]);

        let src: PhotoSrc = serde_json::from_str(r#"{ "tiny": "T", "square": "Q" }"#).unwrap();
        assert_eq!(src.extra["square"], Value::from("Q"));
        assert_eq!(serde_json::to_value(&src).unwrap()["square"], Value::from("Q"));
    }

    #[test]
    fn null_scalars() {
        let listing: VideoListing = serde_json::from_str(
            r#"{
                "page": null,
                "per_page": 12,
                "videos": [{
                    "id": 3,
                    "width": null,
                    "height": null,
                    "duration": null,
                    "video_files": [{ "file_type": "video/mp4", "link": null }],
                    "video_pictures": [{ "picture": null }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(listing.page, 0);
        let video = &listing.videos[0];
        assert_eq!((video.id, video.width, video.height, video.duration), (3, 0, 0, 0));
        assert_eq!(video.video_files[0].link, "");
        assert_eq!(video.video_pictures[0].picture, "");

        let listing: PhotoListing = serde_json::from_str(
            r#"{ "photos": [{ "id": null, "width": null, "height": 10 }] }"#,
        )
        .unwrap();
        let photo = &listing.photos[0];
        assert_eq!((photo.id, photo.width, photo.height), (0, 0, 10));
    }

    #[test]
    fn mp4() {
        let file = |ty: Option<&str>| VideoFile {
            file_type: ty.map(ToString::to_string),
            ..VideoFile::default()
        };
        assert!(file(Some("video/mp4")).is_mp4());
        assert!(!file(Some("video/webm")).is_mp4());
        assert!(!file(None).is_mp4());
    }
}
