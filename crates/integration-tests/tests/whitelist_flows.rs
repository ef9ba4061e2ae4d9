//! Full patcher flows over raw code text.
//!
//! These tests chain insert, remove, and list the way command invocations
//! do, pinning the exact text the store ends up holding.

use chrono::{NaiveDate, NaiveDateTime};
use coderaw_core::{Expiry, Patcher, PlayerId};

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .expect("valid date")
        .and_hms_opt(10, 30, 0)
        .expect("valid time")
}

fn expiry() -> Expiry {
    Expiry::new(2025, 1, 1, 12, 0)
}

#[test]
fn test_insert_into_empty_table_exact_output() {
    let patcher = Patcher::default();
    let out = patcher.insert(
        "return {\n}",
        &PlayerId::new("42"),
        &expiry(),
        "operator",
        stamp(),
    );

    assert_eq!(
        out,
        "return {\n    [\"42\"] = {type = \"Usuário adm\", expires = os.time({day=1, month=1, year=2025, hour=12, min=0})},\n}"
    );
}

#[test]
fn test_add_list_remove_list_cycle() {
    let patcher = Patcher::default();
    let a = PlayerId::new("111");
    let b = PlayerId::new("222");

    // Start from a raw with no table at all
    let code = patcher.insert("", &a, &expiry(), "op", stamp());
    let code = patcher.insert(&code, &b, &expiry(), "op", stamp());

    assert_eq!(patcher.list(&code), vec![a.clone(), b.clone()]);

    let code = patcher.remove(&code, &a);
    assert_eq!(patcher.list(&code), vec![b.clone()]);

    // The surviving entry's line is untouched
    assert!(code.contains(
        "    [\"222\"] = {type = \"Usuário adm\", expires = os.time({day=1, month=1, year=2025, hour=12, min=0})},"
    ));

    let code = patcher.remove(&code, &b);
    assert!(patcher.list(&code).is_empty());
}

#[test]
fn test_double_add_then_single_remove_leaves_nothing() {
    // Insert is not idempotent: two adds make two entries. The skip-flag
    // removal then takes both matching lines out in one pass, because the
    // second entry's line re-raises the skip flag.
    let patcher = Patcher::default();
    let player = PlayerId::new("55");

    let code = patcher.insert("return {\n}", &player, &expiry(), "op", stamp());
    let code = patcher.insert(&code, &player, &expiry(), "op", stamp());
    assert_eq!(code.matches("[\"55\"]").count(), 2);

    let code = patcher.remove(&code, &player);
    assert_eq!(code.matches("[\"55\"]").count(), 0);
    assert_eq!(code, "return {\n}");
}

#[test]
fn test_insert_preserves_unrelated_script_lines() {
    let existing = concat!(
        "-- script raiz\n",
        "local cfg = {}\n",
        "return {\n",
        "    [\"1\"] = {type = \"Usuário adm\", expires = 0},\n",
        "}\n",
        "-- rodapé"
    );

    let patcher = Patcher::default();
    let out = patcher.insert(existing, &PlayerId::new("2"), &expiry(), "op", stamp());

    assert!(out.starts_with("-- script raiz\nlocal cfg = {}\nreturn {\n"));
    assert!(out.ends_with("}\n-- rodapé"));
    assert_eq!(patcher.list(&out).len(), 2);
}

#[test]
fn test_remove_multiline_entry_takes_following_lines() {
    // Documented fragility: an entry spanning several lines drags the lines
    // after it out too, up to the next `}`-prefixed line.
    let code = concat!(
        "return {\n",
        "    [\"X\"] = {\n",
        "        type = \"Usuário adm\",\n",
        "        expires = 0\n",
        "    },\n",
        "}"
    );

    let patcher = Patcher::default();
    let out = patcher.remove(code, &PlayerId::new("X"));

    assert_eq!(out, "return {\n    },\n}");
}

#[test]
fn test_synthesized_template_shape() {
    let patcher = Patcher::default();
    let out = patcher.insert("", &PlayerId::new("123"), &expiry(), "ana", stamp());

    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "-- Whitelist adicionada por ana");
    assert_eq!(lines[1], "-- Data: 15/06/2025 10:30");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "return {");
    assert!(lines[4].starts_with("    [\"123\"]"));
    assert_eq!(lines[5], "}");
}
