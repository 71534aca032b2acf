use std::collections::HashMap;

use defaulted::{
    Defaulted, Empty, EmptyMap, FirstVariant, NullDefault, One, True, Zero, variants,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum ThingType {
    Foo,
    Bar,
    Baz,
}

variants!(ThingType { Foo, Bar, Baz });

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Thing {
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    description: Defaulted<Empty<String>>,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    entities: Defaulted<EmptyMap<String, String>>,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    floating_point: Defaulted<Zero<f64>>,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    is_foo: Defaulted<True>,
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Defaulted::is_unset")]
    kind: Defaulted<FirstVariant<ThingType>>,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    favorite_food: Defaulted<NullDefault<String>>,
}

impl Thing {
    fn new(
        name: &str,
        description: Option<String>,
        entities: Option<HashMap<String, String>>,
        is_foo: Option<bool>,
        kind: Option<ThingType>,
        floating_point: Option<f64>,
    ) -> Self {
        Thing {
            description: Defaulted::from_optional(description),
            entities: Defaulted::from_optional(entities),
            floating_point: Defaulted::from_optional(floating_point),
            is_foo: Defaulted::from_optional(is_foo),
            name: name.to_owned(),
            kind: Defaulted::from_optional(kind),
            favorite_food: Defaulted::unset(),
        }
    }
}

// Helper to build a record with only the name set
fn named(name: &str) -> Thing {
    Thing::new(name, None, None, None, None, None)
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    name: String,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    count: Defaulted<One<i32>>,
    #[serde(default, skip_serializing_if = "Defaulted::is_unset")]
    tags: Defaulted<Empty<Vec<String>>>,
}

#[test]
fn test_value_encodes_to_actual_value() {
    let thing = Thing::new(
        "Any name",
        Some("Any description".to_owned()),
        Some(HashMap::from([("foo".to_owned(), "bar".to_owned())])),
        Some(false),
        Some(ThingType::Baz),
        Some(12.34),
    );
    let expected = r#"{
  "description": "Any description",
  "entities": {
    "foo": "bar"
  },
  "floatingPoint": 12.34,
  "isFoo": false,
  "name": "Any name",
  "type": "baz"
}"#;

    assert_eq!(serde_json::to_string_pretty(&thing).unwrap(), expected);
}

#[test]
fn test_default_value_encodes_to_nothing() {
    let thing = named("Any name");
    let expected = r#"{
  "name": "Any name"
}"#;

    assert_eq!(serde_json::to_string_pretty(&thing).unwrap(), expected);
}

#[test]
fn test_explicit_default_is_encoded() {
    let mut thing = named("n");
    thing.is_foo.set(true);
    thing.floating_point.set(0.0);
    thing.kind.set(ThingType::Foo);

    assert_eq!(
        serde_json::to_string(&thing).unwrap(),
        r#"{"floatingPoint":0.0,"isFoo":true,"name":"n","type":"foo"}"#
    );
}

#[test]
fn test_reset_restores_omission() {
    let mut record = Record {
        name: "A".to_owned(),
        count: Defaulted::unset(),
        tags: Defaulted::unset(),
    };
    let pristine = serde_json::to_string(&record).unwrap();

    record.count.set(3);
    record.tags.get_mut().push("x".to_owned());
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"name":"A","count":3,"tags":["x"]}"#
    );

    record.count.reset();
    record.tags.reset();
    assert_eq!(record.count.value(), 1);
    assert!(record.tags.value().is_empty());
    assert_eq!(serde_json::to_string(&record).unwrap(), pristine);
    assert_eq!(pristine, r#"{"name":"A"}"#);
}

#[test]
fn test_minimal_record_round_trip() {
    let record: Record = serde_json::from_str(r#"{"name":"A"}"#).unwrap();

    assert_eq!(record.count.value(), 1);
    assert_eq!(record.tags.value(), Vec::<String>::new());
    assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"A"}"#);
}

#[test]
fn test_explicit_values_round_trip() {
    let canonical = r#"{"name":"A","count":1,"tags":[]}"#;
    let record: Record = serde_json::from_str(canonical).unwrap();

    assert!(record.count.is_explicit());
    assert!(record.tags.is_explicit());
    assert_eq!(serde_json::to_string(&record).unwrap(), canonical);
}

#[test]
fn test_decode_mutate_encode() {
    let mut record: Record = serde_json::from_str(r#"{"name":"A","tags":["a"]}"#).unwrap();
    record.count.set(1);
    record.tags.get_mut().push("b".to_owned());

    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"name":"A","count":1,"tags":["a","b"]}"#
    );
}
