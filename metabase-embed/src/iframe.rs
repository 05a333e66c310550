/// Wrap an embed URL in a borderless, transparent iframe tag.
///
/// Height comes before width, so `build_iframe(url, "800", "100%")` gives
/// `width="100%" height="800"`.
///
/// None of the arguments are escaped. `url` should come from
/// [`EmbedUrlBuilder`](crate::EmbedUrlBuilder), and `height`/`width` from
/// trusted configuration; never pass raw user input here.
pub fn build_iframe(url: &str, height: &str, width: &str) -> String {
    format!(
        r#"<iframe src="{url}" frameborder="0" width="{width}" height="{height}" allowtransparency></iframe>"#
    )
}
