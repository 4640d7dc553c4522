pub mod cascade;
pub mod document;
pub mod fields;

use serde::{Deserialize, Serialize};

use self::document::Document;
use self::fields::{
    AUTHOR_IMAGE, AUTHOR_NAME, COMMENTS_COUNT, LIKES_COUNT, MP3_DOWNLOAD_LINK, SHARES_COUNT,
    WITHOUT_WATERMARK_LINK,
};

/// Everything recovered from one upstream result page. Counts are kept as
/// the page formats them ("1.2K" stays "1.2K").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub author_image: String,
    pub author_name: String,
    pub without_watermark_link: String,
    pub mp3_download_link: String,
    pub likes_count: String,
    pub comments_count: String,
    pub shares_count: String,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            author_image: AUTHOR_IMAGE.default.to_string(),
            author_name: AUTHOR_NAME.default.to_string(),
            without_watermark_link: WITHOUT_WATERMARK_LINK.default.to_string(),
            mp3_download_link: MP3_DOWNLOAD_LINK.default.to_string(),
            likes_count: LIKES_COUNT.default.to_string(),
            comments_count: COMMENTS_COUNT.default.to_string(),
            shares_count: SHARES_COUNT.default.to_string(),
        }
    }
}

pub fn extract_fields(html: &str) -> ExtractionResult {
    let doc = Document::parse(html);

    ExtractionResult {
        author_image: AUTHOR_IMAGE.resolve(&doc),
        author_name: AUTHOR_NAME.resolve(&doc),
        without_watermark_link: WITHOUT_WATERMARK_LINK.resolve(&doc),
        mp3_download_link: MP3_DOWNLOAD_LINK.resolve(&doc),
        likes_count: LIKES_COUNT.resolve(&doc),
        comments_count: COMMENTS_COUNT.resolve(&doc),
        shares_count: SHARES_COUNT.resolve(&doc),
    }
}
