#![cfg(test)]

use std::collections::{BTreeMap, HashMap};

use super::*;

#[test]
fn test_vertex_display() {
    assert_eq!(Vertex::new(40.68433, -74.39967).to_string(), "(40.68433, -74.39967)");
    assert_eq!(
        Vertex::new(1.0, 2.123456).to_string(),
        "(1.00000, 2.12346)",
        "Coordinates should always show five decimal places."
    );
    assert_eq!(Vertex::default().to_string(), "(0.00000, 0.00000)");
}

#[test]
fn test_map_as_string() {
    let empty: BTreeMap<&str, Vertex> = BTreeMap::new();
    assert_eq!(map_as_string(&empty, |v| v.to_string()), "");

    let single = HashMap::from([(7_u8, "seven")]);
    assert_eq!(
        map_as_string(single, str::to_uppercase),
        "7 -> SEVEN",
        "A single entry should have no line breaks."
    );

    let ordered = BTreeMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    assert_eq!(
        map_as_string(&ordered, |c| c.to_string()),
        "1 -> a\n2 -> b\n3 -> c",
        "Entries should follow the iteration order of the input."
    );
}

#[test]
fn test_map_as_string_calls() {
    let mut calls = 0;
    let out = map_as_string([("a", 1), ("b", 2), ("c", 3)], |v| {
        calls += 1;
        (v * 10).to_string()
    });
    assert_eq!(out, "a -> 10\nb -> 20\nc -> 30");
    assert_eq!(calls, 3, "Each value should be converted exactly once.");
    assert!(!out.ends_with('\n'), "There should be no trailing line break.");
}

#[test]
fn test_map_as_string_unordered() {
    let labs = HashMap::from([
        ("Bell Labs", Vertex::new(40.68433, -74.39967)),
        ("Google", Vertex::new(37.42202, -122.08408)),
    ]);
    let out = map_as_string(&labs, |v| v.to_string());

    let mut lines: Vec<&str> = out.lines().collect();
    lines.sort_unstable();
    assert_eq!(
        lines,
        ["Bell Labs -> (40.68433, -74.39967)", "Google -> (37.42202, -122.08408)"]
    );
}
