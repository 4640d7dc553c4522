use clip_relay::extractor::{extract_fields, ExtractionResult};

const RESULT_PAGE: &str = include_str!("fixtures/result_page.html");

#[test]
fn reads_every_field_from_result_page() {
    let result = extract_fields(RESULT_PAGE);

    assert_eq!(
        result,
        ExtractionResult {
            author_image: "https://tikcdn.example/avatar/7212.jpeg".to_string(),
            author_name: "creator.handle".to_string(),
            without_watermark_link: "https://tikcdn.example/ssstik/v/7212".to_string(),
            mp3_download_link: "https://tikcdn.example/ssstik/m/7212".to_string(),
            likes_count: "1.2K".to_string(),
            comments_count: "87".to_string(),
            shares_count: "45".to_string(),
        }
    );
}

#[test]
fn repeated_extraction_is_identical() {
    let first = serde_json::to_string(&extract_fields(RESULT_PAGE)).unwrap();
    for _ in 0..3 {
        assert_eq!(serde_json::to_string(&extract_fields(RESULT_PAGE)).unwrap(), first);
    }
}

#[test]
fn truncated_page_keeps_what_it_can() {
    let cut = &RESULT_PAGE[..RESULT_PAGE.find("id=\"dl_btns\"").unwrap()];
    let result = extract_fields(cut);

    assert_eq!(result.author_name, "creator.handle");
    assert_eq!(result.likes_count, "1.2K");
    assert_eq!(result.without_watermark_link, "");
    assert_eq!(result.mp3_download_link, "");
}

#[test]
fn second_strategy_used_when_first_markup_absent() {
    let html = r#"
        <div class="author-thumb"><img src="/thumb.png"></div>
        <span class="author-nickname">nick</span>
        <a class="btn" href="https://cdn.example/nowatermark/9.mp4">save</a>
        <a class="btn music_download" href="/audio/9">audio</a>
        <span class="stats-like">3</span>
        <span class="stats-comment">2</span>
        <span class="stats-share">1</span>
    "#;
    let result = extract_fields(html);

    assert_eq!(result.author_image, "/thumb.png");
    assert_eq!(result.author_name, "nick");
    assert_eq!(result.without_watermark_link, "https://cdn.example/nowatermark/9.mp4");
    assert_eq!(result.mp3_download_link, "/audio/9");
    assert_eq!(result.likes_count, "3");
    assert_eq!(result.comments_count, "2");
    assert_eq!(result.shares_count, "1");
}

#[test]
fn class_markers_give_watermark_free_link() {
    let html = r#"<a class="download_link without_watermark" href="https://cdn.example/video.mp4">Download</a>"#;
    assert_eq!(
        extract_fields(html).without_watermark_link,
        "https://cdn.example/video.mp4"
    );
}
