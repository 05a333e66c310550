use crate::options::DisplayOptions;
use crate::resource::ResourceKind;

/// Build the `#` fragment for an embed URL.
///
/// `bordered` and `titled` are always written, as `true` or `false`.
/// `theme` is written only when set, percent-encoded. Order is fixed and
/// there is no trailing `&`:
///
/// ```text
/// bordered=<bool>&titled=<bool>[&theme=<name>]
/// ```
pub fn fragment(options: &DisplayOptions) -> String {
    let mut pairs = vec![
        format!("bordered={}", options.border),
        format!("titled={}", options.title),
    ];
    if let Some(theme) = options.theme.as_deref().filter(|t| !t.is_empty()) {
        let encoded: String = form_urlencoded::byte_serialize(theme.as_bytes()).collect();
        pairs.push(format!("theme={encoded}"));
    }
    pairs.join("&")
}

/// Join the site URL, resource kind, token and fragment into an embed URL.
pub fn compose(site_url: &str, kind: ResourceKind, token: &str, options: &DisplayOptions) -> String {
    format!(
        "{}/embed/{}/{}#{}",
        site_url.trim_end_matches('/'),
        kind.as_str(),
        token,
        fragment(options)
    )
}
