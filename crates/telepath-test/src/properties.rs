//! Property tests over generated value trees

use std::collections::BTreeMap;
use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Map, Number};

use telepath_core::markers::{self, RESERVED_KEYS};
use telepath_core::{Packed, Value};
use telepath_pack::JsContext;

use crate::music::*;

fn context() -> JsContext {
    JsContext::with_registry(Arc::new(music_registry()))
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (i64::MAX as u64 + 1..=u64::MAX).prop_map(Value::UInt),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        "[a-zA-Z_ &]{0,12}".prop_map(Value::String),
    ]
}

fn plain_key() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,8}"
}

fn reserved_key() -> impl Strategy<Value = String> {
    prop::sample::select(RESERVED_KEYS.to_vec()).prop_map(str::to_string)
}

fn artist() -> impl Strategy<Value = Value> {
    "[A-Z][a-z]{1,8}".prop_map(|name| Value::object(Artist::new(name)))
}

/// Trees of primitives, lists, mappings and artists
fn value_tree() -> impl Strategy<Value = Value> {
    prop_oneof![3 => primitive(), 1 => artist()].prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
            prop::collection::btree_map(prop_oneof![4 => plain_key(), 1 => reserved_key()], inner, 0..5)
                .prop_map(|entries| Value::Dict(entries.into_iter().collect())),
        ]
    })
}

/// Wire form of a primitive
fn primitive_json(value: &Value) -> Packed {
    match value {
        Value::Null => Packed::Null,
        Value::Bool(b) => json!(b),
        Value::Int(i) => json!(i),
        Value::UInt(u) => json!(u),
        Value::Float(f) => Packed::Number(Number::from_f64(*f).unwrap()),
        Value::String(s) => json!(s),
        other => panic!("not a primitive: {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_primitives_pass_through(value in primitive()) {
        let mut ctx = context();
        prop_assert_eq!(ctx.pack(&value).unwrap(), primitive_json(&value));
    }

    #[test]
    fn prop_list_preserves_length_and_order(items in prop::collection::vec(value_tree(), 0..8)) {
        let mut ctx = context();
        let packed = ctx.pack(&Value::List(items.clone())).unwrap();
        let packed = packed.as_array().unwrap();

        prop_assert_eq!(packed.len(), items.len());
        for (item, packed_item) in items.iter().zip(packed) {
            prop_assert_eq!(&ctx.pack(item).unwrap(), packed_item);
        }
    }

    #[test]
    fn prop_plain_mapping_keeps_keys(
        entries in prop::collection::btree_map(plain_key(), value_tree(), 0..6)
    ) {
        let mut ctx = context();
        let value = Value::Dict(entries.clone().into_iter().collect());
        let packed = ctx.pack(&value).unwrap();
        let packed = packed.as_object().unwrap();

        prop_assert_eq!(packed.len(), entries.len());
        for (key, item) in &entries {
            prop_assert_eq!(&ctx.pack(item).unwrap(), &packed[key]);
        }
    }

    #[test]
    fn prop_reserved_key_wraps_mapping(
        reserved in reserved_key(),
        reserved_value in value_tree(),
        rest in prop::collection::btree_map(plain_key(), value_tree(), 0..4)
    ) {
        let mut entries: BTreeMap<String, Value> = rest;
        entries.insert(reserved, reserved_value);
        prop_assert!(entries.keys().any(|k| markers::is_reserved(k)));

        let mut ctx = context();
        let packed = ctx.pack(&Value::Dict(entries.clone().into_iter().collect())).unwrap();

        let mut unescaped = Map::new();
        for (key, item) in &entries {
            unescaped.insert(key.clone(), ctx.pack(item).unwrap());
        }
        prop_assert_eq!(packed, json!({ "_dict": unescaped }));
    }

    #[test]
    fn prop_artist_packs_to_constructor_call(name in "[A-Za-z ]{0,16}") {
        let mut ctx = context();
        let packed = ctx.pack(&Value::object(Artist::new(name.clone()))).unwrap();

        prop_assert_eq!(packed, json!({"_type": ARTIST_CONSTRUCTOR, "_args": [name]}));
    }

    #[test]
    fn prop_fresh_contexts_agree(value in value_tree()) {
        let first = context().pack(&value).unwrap();
        let second = context().pack(&value).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_media_merge_order_independent(album_first in any::<bool>()) {
        let album = Value::object(Album::new("Renaissance", Vec::<Value>::new()));
        let playlist = Value::object(Playlist::new("Club"));
        let (a, b) = if album_first { (&album, &playlist) } else { (&playlist, &album) };

        let mut ordered = context();
        ordered.pack(a).unwrap();
        ordered.pack(b).unwrap();

        let mut reference = context();
        reference.pack(&album).unwrap();
        reference.pack(&playlist).unwrap();

        prop_assert_eq!(ordered.media().assets(), reference.media().assets());
    }
}
