//! Per-field strategy tables for the upstream result page.
//!
//! The markup is not under our control and changes without notice, so every
//! field lists several independent lookups, most reliable first.

use once_cell::sync::Lazy;
use scraper::Selector;

use super::cascade::{FieldCascade, Strategy};
use super::document::{attr_of, closest, next_element_sibling, non_empty, parent_element, text_of, Document};

macro_rules! selector {
    ($name:ident, $css:literal) => {
        static $name: Lazy<Selector> =
            Lazy::new(|| Selector::parse($css).expect(concat!("Failed to parse selector ", $css)));
    };
}

selector!(RESULT_AUTHOR, ".result_author");
selector!(AUTHOR_THUMB_IMG, ".author-thumb img");
selector!(AVATAR_IMG, ".avatar img");

selector!(HEADING, "h2");
selector!(AUTHOR_NICKNAME, ".author-nickname");
selector!(AUTHOR_NAME_CLASS, ".author-name");

selector!(DOWNLOAD_MUSIC, r#"[class*="download_link"][class*="music"]"#);
selector!(MUSIC_DOWNLOAD, r#"[class*="music_download"]"#);
selector!(MUSIC_HREF, r#"[href*="music"]"#);
selector!(DOWNLOAD_BUTTONS, "#dl_btns a");

selector!(DOWNLOAD_WITHOUT_WATERMARK, ".download_link.without_watermark");
selector!(NOWATERMARK_HREF, r#"[href*="nowatermark"]"#);
selector!(NO_WATERMARK_CLASS, r#"[class*="no-watermark"]"#);

selector!(LIKES_ICON, ".feather.feather-thumbs-up");
selector!(COMMENTS_ICON, ".feather.feather-message-square");
selector!(SHARES_ICON, ".feather.feather-share-2");
selector!(COUNT_ITEM, ".count-item");
selector!(COUNT_VALUE, ".value");

selector!(STATS_LIKE, ".stats-like");
selector!(STATS_COMMENT, ".stats-comment");
selector!(STATS_SHARE, ".stats-share");
selector!(LIKE_COUNT, ".like-count");
selector!(COMMENT_COUNT, ".comment-count");
selector!(SHARE_COUNT, ".share-count");

pub static AUTHOR_IMAGE: FieldCascade = FieldCascade {
    field: "authorImage",
    strategies: &[
        Strategy { name: "result_author", probe: result_author_src },
        Strategy { name: "author_thumb", probe: author_thumb_src },
        Strategy { name: "avatar", probe: avatar_src },
    ],
    default: "",
};

pub static AUTHOR_NAME: FieldCascade = FieldCascade {
    field: "authorName",
    strategies: &[
        Strategy { name: "heading", probe: heading_text },
        Strategy { name: "author_nickname", probe: author_nickname_text },
        Strategy { name: "author_name", probe: author_name_text },
    ],
    default: "Unknown Author",
};

pub static MP3_DOWNLOAD_LINK: FieldCascade = FieldCascade {
    field: "mp3DownloadLink",
    strategies: &[
        Strategy { name: "download_link_music", probe: download_music_href },
        Strategy { name: "music_download", probe: music_download_href },
        Strategy { name: "music_href", probe: music_href },
        Strategy { name: "audio_button_text", probe: audio_button_href },
        Strategy { name: "mp3_button_label", probe: mp3_button_href },
    ],
    default: "",
};

pub static WITHOUT_WATERMARK_LINK: FieldCascade = FieldCascade {
    field: "withoutWatermarkLink",
    strategies: &[
        Strategy { name: "download_link_without_watermark", probe: without_watermark_href },
        Strategy { name: "nowatermark_href", probe: nowatermark_href },
        Strategy { name: "no_watermark_class", probe: no_watermark_class_href },
    ],
    default: "",
};

pub static LIKES_COUNT: FieldCascade = FieldCascade {
    field: "likesCount",
    strategies: &[
        Strategy { name: "icon_count_item", probe: likes_from_count_item },
        Strategy { name: "stats_like", probe: stats_like_text },
        Strategy { name: "like_count", probe: like_count_text },
        Strategy { name: "icon_sibling", probe: likes_from_sibling },
    ],
    default: "0",
};

pub static COMMENTS_COUNT: FieldCascade = FieldCascade {
    field: "commentsCount",
    strategies: &[
        Strategy { name: "icon_count_item", probe: comments_from_count_item },
        Strategy { name: "stats_comment", probe: stats_comment_text },
        Strategy { name: "comment_count", probe: comment_count_text },
        Strategy { name: "icon_sibling", probe: comments_from_sibling },
    ],
    default: "0",
};

pub static SHARES_COUNT: FieldCascade = FieldCascade {
    field: "sharesCount",
    strategies: &[
        Strategy { name: "icon_count_item", probe: shares_from_count_item },
        Strategy { name: "stats_share", probe: stats_share_text },
        Strategy { name: "share_count", probe: share_count_text },
        Strategy { name: "icon_sibling", probe: shares_from_sibling },
    ],
    default: "0",
};

// authorImage

fn result_author_src(doc: &Document) -> Option<String> {
    doc.first_attr(&RESULT_AUTHOR, "src")
}

fn author_thumb_src(doc: &Document) -> Option<String> {
    doc.first_attr(&AUTHOR_THUMB_IMG, "src")
}

fn avatar_src(doc: &Document) -> Option<String> {
    doc.first_attr(&AVATAR_IMG, "src")
}

// authorName

fn heading_text(doc: &Document) -> Option<String> {
    doc.first_text(&HEADING)
}

fn author_nickname_text(doc: &Document) -> Option<String> {
    doc.first_text(&AUTHOR_NICKNAME)
}

fn author_name_text(doc: &Document) -> Option<String> {
    doc.first_text(&AUTHOR_NAME_CLASS)
}

// mp3DownloadLink

fn download_music_href(doc: &Document) -> Option<String> {
    doc.first_attr(&DOWNLOAD_MUSIC, "href")
}

fn music_download_href(doc: &Document) -> Option<String> {
    doc.first_attr(&MUSIC_DOWNLOAD, "href")
}

fn music_href(doc: &Document) -> Option<String> {
    doc.first_attr(&MUSIC_HREF, "href")
}

/// First download button whose label mentions audio and which carries the
/// `download_link` class. The scan stops at that button even if it has no
/// href.
fn audio_button_href(doc: &Document) -> Option<String> {
    doc.select(&DOWNLOAD_BUTTONS)
        .find(|el| {
            let text = el.text().collect::<String>().to_lowercase();
            let classes = el.value().attr("class").unwrap_or("");
            text.contains("download")
                && (text.contains("mp3") || text.contains("music") || text.contains("audio"))
                && classes.contains("download_link")
        })
        .and_then(|el| attr_of(el, "href"))
}

fn mp3_button_href(doc: &Document) -> Option<String> {
    doc.select(&DOWNLOAD_BUTTONS)
        .find(|el| {
            let label = text_of(*el);
            label == "Download MP3" || label.contains("MP3")
        })
        .and_then(|el| attr_of(el, "href"))
}

// withoutWatermarkLink

fn without_watermark_href(doc: &Document) -> Option<String> {
    doc.first_attr(&DOWNLOAD_WITHOUT_WATERMARK, "href")
}

fn nowatermark_href(doc: &Document) -> Option<String> {
    doc.first_attr(&NOWATERMARK_HREF, "href")
}

fn no_watermark_class_href(doc: &Document) -> Option<String> {
    doc.first_attr(&NO_WATERMARK_CLASS, "href")
}

// counts

/// Icon → enclosing `.count-item` → first `.value` inside it.
fn count_from_item(doc: &Document, icon: &Selector) -> Option<String> {
    let icon = doc.first(icon)?;
    let item = closest(icon, &COUNT_ITEM)?;
    let value = item.select(&COUNT_VALUE).next()?;
    non_empty(text_of(value))
}

/// Icon → its parent → the parent's next element sibling.
fn count_from_sibling(doc: &Document, icon: &Selector) -> Option<String> {
    let icon = doc.first(icon)?;
    let parent = parent_element(icon)?;
    let sibling = next_element_sibling(parent)?;
    non_empty(text_of(sibling))
}

fn likes_from_count_item(doc: &Document) -> Option<String> {
    count_from_item(doc, &LIKES_ICON)
}

fn comments_from_count_item(doc: &Document) -> Option<String> {
    count_from_item(doc, &COMMENTS_ICON)
}

fn shares_from_count_item(doc: &Document) -> Option<String> {
    count_from_item(doc, &SHARES_ICON)
}

fn likes_from_sibling(doc: &Document) -> Option<String> {
    count_from_sibling(doc, &LIKES_ICON)
}

fn comments_from_sibling(doc: &Document) -> Option<String> {
    count_from_sibling(doc, &COMMENTS_ICON)
}

fn shares_from_sibling(doc: &Document) -> Option<String> {
    count_from_sibling(doc, &SHARES_ICON)
}

fn stats_like_text(doc: &Document) -> Option<String> {
    doc.first_text(&STATS_LIKE)
}

fn stats_comment_text(doc: &Document) -> Option<String> {
    doc.first_text(&STATS_COMMENT)
}

fn stats_share_text(doc: &Document) -> Option<String> {
    doc.first_text(&STATS_SHARE)
}

fn like_count_text(doc: &Document) -> Option<String> {
    doc.first_text(&LIKE_COUNT)
}

fn comment_count_text(doc: &Document) -> Option<String> {
    doc.first_text(&COMMENT_COUNT)
}

fn share_count_text(doc: &Document) -> Option<String> {
    doc.first_text(&SHARE_COUNT)
}
