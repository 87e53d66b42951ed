#![cfg_attr(debug_assertions, allow(dead_code,))]
/*!
pexfeed. a Pexels client for front-ends that would rather show something than nothing

```no_run
# async fn feed() {
use pexfeed::{client::MediaClient, mapper};

let client = MediaClient::new();
let photos = client.search_photos("cats", 1, 24).await;
if photos.is_demo() {
    // the api couldn't be used, these are placeholders
}
let items = mapper::map_photo_items(Some(photos.as_inner()));
# }
```
*/

/// Configuration
pub mod config;

/// The api client
pub mod client;

/// Raw api payloads
pub mod data;

/// Placeholder payloads
pub mod demo;

/// Normalized photo and video items
pub mod mapper;

mod http;
mod util;

#[cfg(test)]
mod test;

pub use client::{Fetched, MediaClient};
pub use mapper::{map_photo_items, map_video_items, MediaItem, PhotoItem, VideoItem};
