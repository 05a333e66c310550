use metabase_embed::params::{ParamValue, ParameterMap};
use metabase_embed::resource::ResourceReference;

#[test]
fn empty_map_serializes_to_object() {
    assert_eq!(serde_json::to_string(&ParameterMap::new()).unwrap(), "{}");
}

#[test]
fn keys_serialize_sorted() {
    let params = ParameterMap::new().with("zeta", 1).with("alpha", "a");
    assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"alpha":"a","zeta":1}"#);
}

#[test]
fn value_conversions() {
    assert_eq!(ParamValue::from("x"), ParamValue::Text("x".into()));
    assert_eq!(ParamValue::from(None::<i64>), ParamValue::Null);
    assert_eq!(ParamValue::from(Some(3i64)), ParamValue::Number(3.into()));
    assert_eq!(ParamValue::from(f64::NAN), ParamValue::Null);
    assert_eq!(
        ParamValue::from(vec![1i64, 2]),
        ParamValue::List(vec![ParamValue::Number(1.into()), ParamValue::Number(2.into())])
    );
}

#[test]
fn values_deserialize_by_shape() {
    let params: ParameterMap =
        serde_json::from_str(r#"{"a":null,"b":4,"c":"x","d":[1,"y"]}"#).unwrap();
    assert_eq!(params.get("a"), Some(&ParamValue::Null));
    assert_eq!(params.get("b"), Some(&ParamValue::Number(4.into())));
    assert_eq!(params.get("c"), Some(&ParamValue::Text("x".into())));
    assert_eq!(
        params.get("d"),
        Some(&ParamValue::List(vec![ParamValue::Number(1.into()), ParamValue::Text("y".into())]))
    );
    assert_eq!(params.len(), 4);
}

#[test]
fn collect_from_pairs() {
    let params: ParameterMap = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(params.len(), 2);
    assert!(!params.is_empty());
    assert_eq!(params.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn resource_serializes_as_single_entry() {
    let question = ResourceReference::question(42).unwrap();
    assert_eq!(serde_json::to_string(&question).unwrap(), r#"{"question":42}"#);

    let back: ResourceReference = serde_json::from_str(r#"{"dashboard":7}"#).unwrap();
    assert_eq!(back, ResourceReference::dashboard(7).unwrap());
}

#[test]
fn resource_rejects_bad_shapes() {
    assert!(serde_json::from_str::<ResourceReference>("{}").is_err());
    assert!(serde_json::from_str::<ResourceReference>(r#"{"question":1,"dashboard":2}"#).is_err());
    assert!(serde_json::from_str::<ResourceReference>(r#"{"question":0}"#).is_err());
    assert!(serde_json::from_str::<ResourceReference>(r#"{"pulse":1}"#).is_err());
}
