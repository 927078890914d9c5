//! Integration tests for merging values that collide under one key.
//!
//! Covers the scalar, sequence, keyed, and overflow pairings a decoder can
//! produce, including overflow collections built through the bounded
//! combiner.

mod common;

use anyhow::{Result, ensure};
use common::{overflow, strings, value};
use nest_merge::{Value, is_overflow, merge};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case::strings("a", "b")]
#[case::same("x", "x")]
#[case::empty("", "b")]
fn scalars_merge_into_ordered_pair(#[case] left: &str, #[case] right: &str) -> Result<()> {
    let merged = merge(Value::from(left), Value::from(right));
    ensure!(
        merged == strings(&[left, right]),
        "expected [{left}, {right}], got {merged:?}"
    );
    Ok(())
}

#[rstest]
#[case::single(&["a"], &["b"])]
#[case::duplicates(&["a", "b"], &["b", "a"])]
#[case::longer(&["a", "b", "c"], &["d", "e", "f", "g"])]
fn sequences_merge_by_concatenation(#[case] left: &[&str], #[case] right: &[&str]) -> Result<()> {
    let merged = merge(strings(left), strings(right));
    let expected: Vec<&str> = left.iter().chain(right).copied().collect();
    let items = merged.as_sequence().unwrap_or_default();
    ensure!(
        items.len() == left.len() + right.len(),
        "length mismatch: {merged:?}"
    );
    ensure!(merged == strings(&expected), "order mismatch: {merged:?}");
    Ok(())
}

#[test]
fn empty_sequences_concatenate() -> Result<()> {
    let merged = merge(strings(&[]), strings(&["a"]));
    ensure!(merged == strings(&["a"]), "got {merged:?}");
    let both = merge(strings(&[]), strings(&[]));
    ensure!(both.as_sequence().is_some_and(<[Value]>::is_empty));
    Ok(())
}

#[test]
fn merges_two_objects_with_the_same_key() -> Result<()> {
    let merged = merge(value(json!({"a": "b"})), value(json!({"a": "c"})));
    ensure!(merged == value(json!({"a": ["b", "c"]})));
    Ok(())
}

#[test]
fn merges_standalone_and_object_into_array() -> Result<()> {
    let merged = merge(
        value(json!({"foo": "bar"})),
        value(json!({"foo": {"first": "123"}})),
    );
    ensure!(merged == value(json!({"foo": ["bar", {"first": "123"}]})));
    Ok(())
}

#[test]
fn merges_overflow_into_primitive_with_shift() -> Result<()> {
    let merged = merge(Value::from("a"), overflow(&["b", "c"])?);
    ensure!(is_overflow(&merged), "result must keep the overflow marker");
    ensure!(merged == value(json!({"0": "a", "1": "b", "2": "c"})));
    ensure!(common::keys(&merged)? == ["0", "1", "2"]);
    Ok(())
}

#[test]
fn merges_primitive_into_overflow_at_next_index() -> Result<()> {
    let merged = merge(overflow(&["a", "b"])?, Value::from("c"));
    ensure!(is_overflow(&merged));
    ensure!(merged == value(json!({"0": "a", "1": "b", "2": "c"})));
    Ok(())
}

#[test]
fn plain_numeric_objects_take_primitives_as_flags() -> Result<()> {
    let target = value(json!({"0": "a", "1": "b"}));
    ensure!(!is_overflow(&target));
    let merged = merge(target, Value::from("c"));
    ensure!(!is_overflow(&merged));
    ensure!(merged == value(json!({"0": "a", "1": "b", "c": true})));
    Ok(())
}

#[test]
fn merges_regular_object_into_primitive_as_array() -> Result<()> {
    let merged = merge(Value::from("a"), value(json!({"foo": "bar"})));
    ensure!(merged == value(json!(["a", {"foo": "bar"}])));
    Ok(())
}

#[test]
fn overflow_survives_nested_merge() -> Result<()> {
    let mut target = nest_merge::KeyedMap::new();
    target.insert("list".to_owned(), overflow(&["a", "b"])?);
    let merged = merge(Value::Keyed(target), value(json!({"list": "c"})));
    let list = merged.get("list").cloned().unwrap_or_default();
    ensure!(is_overflow(&list), "nested overflow must stay marked");
    ensure!(list == value(json!({"0": "a", "1": "b", "2": "c"})));
    Ok(())
}
