use clap::Parser;
use metabase_embed::{verify_token, EmbedConfig, EmbedUrlBuilder, ParamValue, ResourceKind};
use metabase_embed_cli::commands::{self, collect_params, parse_param, DisplayArgs, ResourceArgs};

const TEST_SECRET: &[u8] = b"embed-test-secret-do-not-use-in-production";

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    resource: ResourceArgs,
    #[command(flatten)]
    display: DisplayArgs,
}

fn builder() -> EmbedUrlBuilder {
    EmbedUrlBuilder::new(EmbedConfig::new("https://bi.example.com", TEST_SECRET).with_theme("night"))
}

// ── parse_param ──

#[test]
fn param_text_number_null() {
    assert_eq!(parse_param("category=Gizmo").unwrap(), ("category".into(), ParamValue::from("Gizmo")));
    assert_eq!(parse_param("id=12").unwrap(), ("id".into(), ParamValue::from(12i64)));
    assert_eq!(parse_param("ratio=0.25").unwrap(), ("ratio".into(), ParamValue::from(0.25)));
    assert_eq!(parse_param("vendor=null").unwrap(), ("vendor".into(), ParamValue::Null));
}

#[test]
fn param_value_may_contain_equals() {
    assert_eq!(parse_param("q=a=b").unwrap(), ("q".into(), ParamValue::from("a=b")));
}

#[test]
fn param_non_finite_stays_text() {
    assert_eq!(parse_param("x=inf").unwrap().1, ParamValue::from("inf"));
    assert_eq!(parse_param("x=NaN").unwrap().1, ParamValue::from("NaN"));
}

#[test]
fn param_non_canonical_numbers_stay_text() {
    assert_eq!(parse_param("zip=02134").unwrap().1, ParamValue::from("02134"));
    assert_eq!(parse_param("code=1e3").unwrap().1, ParamValue::from("1e3"));
    assert_eq!(parse_param("v=+5").unwrap().1, ParamValue::from("+5"));
    assert_eq!(parse_param("price=1.50").unwrap().1, ParamValue::from("1.50"));
    assert_eq!(parse_param("delta=-7").unwrap().1, ParamValue::from(-7i64));
}

#[test]
fn non_canonical_number_signed_verbatim() {
    let cli = TestCli::try_parse_from(["test", "question", "5", "-p", "zip=02134"]).unwrap();
    let token = commands::token(&builder(), &cli.resource).unwrap();
    let claims = verify_token(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.params.get("zip"), Some(&ParamValue::from("02134")));
}

#[test]
fn param_requires_name_and_separator() {
    assert!(parse_param("novalue").is_err());
    assert!(parse_param("=5").is_err());
}

#[test]
fn repeated_names_become_lists() {
    let pairs = vec![
        parse_param("state=CA").unwrap(),
        parse_param("id=1").unwrap(),
        parse_param("state=NY").unwrap(),
    ];
    let params = collect_params(&pairs);
    assert_eq!(params.get("id"), Some(&ParamValue::from(1i64)));
    assert_eq!(params.get("state"), Some(&ParamValue::from(vec!["CA", "NY"])));
}

// ── argument parsing ──

#[test]
fn parses_resource_and_flags() {
    let cli = TestCli::try_parse_from([
        "test", "dashboard", "7", "-p", "category=Gizmo", "--no-border", "--titled",
    ])
    .unwrap();
    assert_eq!(cli.resource.kind, ResourceKind::Dashboard);
    assert_eq!(cli.resource.id, 7);
    assert_eq!(cli.resource.params.len(), 1);
    assert!(cli.display.no_border);
    assert!(cli.display.titled);
}

#[test]
fn rejects_unknown_kind() {
    assert!(TestCli::try_parse_from(["test", "pulse", "7"]).is_err());
}

#[test]
fn rejects_conflicting_border_flags() {
    assert!(TestCli::try_parse_from(["test", "question", "1", "--border", "--no-border"]).is_err());
}

// ── DisplayArgs::apply ──

#[test]
fn no_flags_keep_defaults() {
    let b = builder();
    assert_eq!(&DisplayArgs::default().apply(b.config().display()), b.config().display());
}

#[test]
fn flags_override_defaults() {
    let b = builder();
    let args = DisplayArgs {
        no_border: true,
        titled: true,
        theme: Some(String::new()),
        width: Some("640px".into()),
        ..DisplayArgs::default()
    };
    let options = args.apply(b.config().display());
    assert!(!options.border);
    assert!(options.title);
    assert_eq!(options.theme, None);
    assert_eq!(options.width, "640px");
    assert_eq!(options.height, "800");
}

// ── commands ──

#[test]
fn url_command_uses_config_theme() {
    let cli = TestCli::try_parse_from(["test", "question", "42"]).unwrap();
    let url = commands::url(&builder(), &cli.resource, &cli.display).unwrap();
    assert!(url.starts_with("https://bi.example.com/embed/question/"));
    assert!(url.ends_with("#bordered=true&titled=false&theme=night"));
}

#[test]
fn iframe_command_wraps_url() {
    let cli = TestCli::try_parse_from(["test", "dashboard", "3", "--height", "600"]).unwrap();
    let html = commands::iframe(&builder(), &cli.resource, &cli.display).unwrap();
    assert!(html.starts_with(r#"<iframe src="https://bi.example.com/embed/dashboard/"#));
    assert!(html.contains(r#" height="600" "#));
}

#[test]
fn token_command_signs_params() {
    let cli = TestCli::try_parse_from(["test", "question", "5", "-p", "id=9"]).unwrap();
    let token = commands::token(&builder(), &cli.resource).unwrap();
    let claims = verify_token(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.resource.id(), 5);
    assert_eq!(claims.params.get("id"), Some(&ParamValue::from(9i64)));
}

#[test]
fn zero_id_is_reported() {
    let cli = TestCli::try_parse_from(["test", "question", "0"]).unwrap();
    assert!(commands::token(&builder(), &cli.resource).is_err());
}

#[test]
fn load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("embed.yaml");
    std::fs::write(
        &path,
        "metabase:\n  site_url: https://bi.example.com\n  secret_key: k\n  display:\n    theme: night\n",
    )
    .unwrap();

    let config = commands::load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.display().theme.as_deref(), Some("night"));
}
