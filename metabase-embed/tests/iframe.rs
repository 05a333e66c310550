use metabase_embed::config::EmbedConfig;
use metabase_embed::iframe::build_iframe;
use metabase_embed::options::DisplayOptions;
use metabase_embed::params::ParameterMap;
use metabase_embed::EmbedUrlBuilder;

const TEST_SECRET: &[u8] = b"embed-test-secret-do-not-use-in-production";

fn attr<'a>(html: &'a str, name: &str) -> &'a str {
    let marker = format!(" {name}=\"");
    let start = html.find(&marker).unwrap() + marker.len();
    let len = html[start..].find('"').unwrap();
    &html[start..start + len]
}

#[test]
fn iframe_template() {
    let html = build_iframe("http://x/embed/question/abc#bordered=true", "800", "100%");
    assert_eq!(
        html,
        r#"<iframe src="http://x/embed/question/abc#bordered=true" frameborder="0" width="100%" height="800" allowtransparency></iframe>"#
    );
}

#[test]
fn iframe_attributes_match_arguments() {
    let url = "http://x/embed/question/abc#bordered=true";
    let html = build_iframe(url, "480", "640px");
    assert_eq!(attr(&html, "src"), url);
    assert_eq!(attr(&html, "width"), "640px");
    assert_eq!(attr(&html, "height"), "480");
    assert_eq!(attr(&html, "frameborder"), "0");
    assert!(html.contains(" allowtransparency>"));
}

#[test]
fn height_comes_before_width() {
    let url = "http://x/embed/question/abc#bordered=true";
    let html = build_iframe(url, "800", "100%");
    assert_eq!(attr(&html, "src"), url);
    assert_eq!(attr(&html, "width"), "100%");
    assert_eq!(attr(&html, "height"), "800");
}

#[test]
fn iframe_does_not_escape() {
    let html = build_iframe("http://x/?a=1&b=2", "800", "100%");
    assert_eq!(attr(&html, "src"), "http://x/?a=1&b=2");
}

#[test]
fn question_iframe_uses_option_size() {
    let builder = EmbedUrlBuilder::new(EmbedConfig::new("https://bi.example.com", TEST_SECRET));
    let options = DisplayOptions::default().with_size("50%", "600");
    let params = ParameterMap::new();

    let html = builder.question_iframe(12, &params, &options).unwrap();
    let url = builder.question_url(12, &params, &options).unwrap();
    assert_eq!(attr(&html, "src"), url);
    assert_eq!(attr(&html, "width"), "50%");
    assert_eq!(attr(&html, "height"), "600");
}

#[test]
fn dashboard_iframe_default_size() {
    let builder = EmbedUrlBuilder::new(EmbedConfig::new("https://bi.example.com", TEST_SECRET));
    let options = builder.config().display().clone();

    let html = builder.dashboard_iframe(3, &ParameterMap::new(), &options).unwrap();
    assert!(attr(&html, "src").contains("/embed/dashboard/"));
    assert_eq!(attr(&html, "width"), "100%");
    assert_eq!(attr(&html, "height"), "800");
}
