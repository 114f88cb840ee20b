//! Video gallery entries for menu items with a preparation clip.

use tiffin_core::{Catalog, ContentDoc};
use url::Url;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// One card in the video gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub name: String,
    pub video_id: String,
    /// Lazy-loaded iframe source.
    pub embed_url: String,
}

/// Embed URL for a video id; `autoplay` is used by the modal player.
#[must_use]
pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    let Ok(mut url) = Url::parse(EMBED_BASE).and_then(|base| base.join(video_id)) else {
        return format!("{EMBED_BASE}{video_id}");
    };
    if autoplay {
        url.query_pairs_mut().append_pair("autoplay", "1");
    }
    url.to_string()
}

/// Gallery entries for every item with a video, in catalog order.
#[must_use]
pub fn gallery(catalog: &Catalog) -> Vec<VideoEntry> {
    catalog
        .items()
        .filter_map(|(_, item)| {
            item.video().map(|id| VideoEntry {
                name: item.name.clone(),
                video_id: id.to_owned(),
                embed_url: embed_url(id, false),
            })
        })
        .collect()
}

/// Embed URL for the about-section video, if the content names one.
#[must_use]
pub fn about_video(content: &ContentDoc) -> Option<String> {
    content
        .about
        .video_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(|id| embed_url(id, false))
}
