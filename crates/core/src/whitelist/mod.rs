//! Line-oriented whitelist patching over raw `code` text.
//!
//! A raw's `code` field holds a Lua script whose admin whitelist is a table
//! literal of the form `return { <entries> }`, one entry per line keyed by
//! player id. The patcher edits that text without parsing it: it scans
//! lines with the same coarse heuristics the rest of the CodeRaw tooling
//! expects (substring table detection, first closing-brace line as the
//! insertion point) and preserves every untouched line byte for byte, since
//! consumers diff the raw text.
//!
//! All transforms are total over their string inputs. They never fail; on
//! malformed code they degrade to best-effort output instead of erroring.
//! In particular, inserting the same player twice produces two entries -
//! deduplication is the caller's problem, not the patcher's.

mod expiry;

pub use expiry::Expiry;

use chrono::NaiveDateTime;

use crate::types::PlayerId;

/// Default role label written into whitelist entries.
pub const DEFAULT_ROLE_LABEL: &str = "Usuário adm";

/// Patcher configuration.
///
/// Threaded explicitly into [`Patcher::new`] so nothing about entry
/// rendering is ambient process state.
#[derive(Debug, Clone)]
pub struct PatcherConfig {
    /// Role label written into (and matched against) entry lines.
    pub role_label: String,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            role_label: DEFAULT_ROLE_LABEL.to_owned(),
        }
    }
}

/// Pure insert/remove/list transforms over a raw's `code` text.
#[derive(Debug, Clone, Default)]
pub struct Patcher {
    config: PatcherConfig,
}

impl Patcher {
    /// Create a patcher with the given configuration.
    #[must_use]
    pub const fn new(config: PatcherConfig) -> Self {
        Self { config }
    }

    /// The role label this patcher writes and matches.
    #[must_use]
    pub fn role_label(&self) -> &str {
        &self.config.role_label
    }

    /// Render the entry line for a player.
    #[must_use]
    pub fn entry_line(&self, player: &PlayerId, expiry: &Expiry) -> String {
        format!(
            "    [\"{}\"] = {{type = \"{}\", expires = {}}},",
            player,
            self.config.role_label,
            expiry.to_lua()
        )
    }

    /// Insert a whitelist entry into existing code.
    ///
    /// A table literal is detected by checking that the text contains both
    /// `return` and `{` anywhere - a heuristic, not a parser, which can
    /// misfire on scripts that merely mention those tokens. When a table is
    /// detected, the entry line is placed immediately before the first line
    /// whose trimmed content is exactly `}`; every other line is copied
    /// unchanged, in order. If no such line exists the output equals the
    /// input, entry and all other changes silently dropped.
    ///
    /// When no table is detected the existing text is discarded and a
    /// minimal document is synthesized: a two-line header naming
    /// `added_by` and stamping `stamped_at`, then a fresh table holding
    /// only the new entry.
    ///
    /// Calling this twice with the same player yields two entries.
    #[must_use]
    pub fn insert(
        &self,
        existing: &str,
        player: &PlayerId,
        expiry: &Expiry,
        added_by: &str,
        stamped_at: NaiveDateTime,
    ) -> String {
        let entry = self.entry_line(player, expiry);

        if existing.contains("return") && existing.contains('{') {
            let mut out: Vec<&str> = Vec::new();
            let mut added = false;
            for line in existing.split('\n') {
                if !added && line.trim() == "}" {
                    out.push(&entry);
                    added = true;
                }
                out.push(line);
            }
            out.join("\n")
        } else {
            format!(
                "-- Whitelist adicionada por {added_by}\n-- Data: {}\n\nreturn {{\n{entry}\n}}",
                stamped_at.format("%d/%m/%Y %H:%M")
            )
        }
    }

    /// Remove a player's whitelist entry from existing code.
    ///
    /// Lines are scanned top to bottom. A line containing `["<player>"]`
    /// is dropped and raises a skip flag; while the flag is raised, lines
    /// are dropped until one whose trimmed content starts with `}` - that
    /// boundary line is kept (it is assumed to close the entry's own
    /// braces) and the flag clears. Everything outside an active skip is
    /// kept verbatim.
    ///
    /// An entry spanning multiple lines, or one without its own trailing
    /// `}`-prefixed line, will take unrelated trailing lines with it. That
    /// fragility matches what downstream consumers already rely on.
    #[must_use]
    pub fn remove(&self, existing: &str, player: &PlayerId) -> String {
        let needle = format!("[\"{player}\"]");
        let mut out: Vec<&str> = Vec::new();
        let mut skipping = false;

        for line in existing.split('\n') {
            if line.contains(&needle) {
                skipping = true;
            } else if skipping && line.trim().starts_with('}') {
                skipping = false;
                out.push(line);
            } else if !skipping {
                out.push(line);
            }
        }

        out.join("\n")
    }

    /// Enumerate the player ids whitelisted in `code`, in file order.
    ///
    /// A line qualifies when it contains both `["` and the literal
    /// `type = "<role label>"` marker. The id is the substring between the
    /// first `["` and the following `"]` (or the rest of the line when the
    /// closer is missing). Duplicate entries are reported as-is; the scan
    /// is a pure function of `code` and can be re-run with identical
    /// results.
    #[must_use]
    pub fn list(&self, code: &str) -> Vec<PlayerId> {
        let marker = format!("type = \"{}\"", self.config.role_label);

        code.split('\n')
            .filter(|line| line.contains("[\"") && line.contains(&marker))
            .filter_map(|line| {
                line.split_once("[\"")
                    .map(|(_, rest)| rest.split_once("\"]").map_or(rest, |(id, _)| id))
            })
            .map(PlayerId::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn patcher() -> Patcher {
        Patcher::default()
    }

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
    fn test_insert_into_empty_table() {
        let out = patcher().insert(
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
    fn test_insert_synthesizes_template_for_empty_code() {
        let out = patcher().insert("", &PlayerId::new("123"), &expiry(), "operator", stamp());

        assert!(out.contains("return {"));
        assert!(out.contains(
            "    [\"123\"] = {type = \"Usuário adm\", expires = os.time({day=1, month=1, year=2025, hour=12, min=0})},"
        ));
        assert!(out.ends_with('}'));
        assert!(out.contains("-- Whitelist adicionada por operator"));
        assert!(out.contains("-- Data: 15/06/2025 10:30"));
    }

    #[test]
    fn test_insert_discards_unstructured_code() {
        // No `return`, so the text is replaced by the synthesized template
        let out = patcher().insert(
            "print('hello')",
            &PlayerId::new("9"),
            &expiry(),
            "operator",
            stamp(),
        );
        assert!(!out.contains("print('hello')"));
        assert!(out.contains("return {"));
    }

    #[test]
    fn test_insert_preserves_surrounding_lines() {
        let existing = "-- header\nreturn {\n    [\"1\"] = {type = \"Usuário adm\", expires = os.time({day=2, month=2, year=2024, hour=0, min=0})},\n}";
        let out = patcher().insert(existing, &PlayerId::new("2"), &expiry(), "op", stamp());

        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[0], "-- header");
        assert_eq!(lines[1], "return {");
        assert!(lines[2].contains("[\"1\"]"));
        assert!(lines[3].contains("[\"2\"]"));
        assert_eq!(lines[4], "}");
    }

    #[test]
    fn test_insert_uses_first_closing_brace_line_only() {
        // Two closing-brace-only lines; the entry must land before the first
        let existing = "return {\n}\n-- tail\n}";
        let out = patcher().insert(existing, &PlayerId::new("7"), &expiry(), "op", stamp());
        assert_eq!(
            out,
            format!(
                "return {{\n{}\n}}\n-- tail\n}}",
                patcher().entry_line(&PlayerId::new("7"), &expiry())
            )
        );
    }

    #[test]
    fn test_insert_table_detected_but_no_closing_line_is_noop() {
        // Detection fires (`return` + `{`) but no line trims to exactly `}`
        let existing = "return { [\"1\"] = {} }";
        let out = patcher().insert(existing, &PlayerId::new("8"), &expiry(), "op", stamp());
        assert_eq!(out, existing);
    }

    #[test]
    fn test_insert_twice_duplicates_entry() {
        let p = patcher();
        let player = PlayerId::new("55");
        let once = p.insert("return {\n}", &player, &expiry(), "op", stamp());
        let twice = p.insert(&once, &player, &expiry(), "op", stamp());

        let count = twice.matches("[\"55\"]").count();
        assert_eq!(count, 2, "insert is deliberately not idempotent");
    }

    #[test]
    fn test_remove_drops_entry_and_keeps_neighbors() {
        let p = patcher();
        let code = "return {\n    [\"A\"] = {type = \"Usuário adm\", expires = os.time({day=1, month=1, year=2025, hour=0, min=0})},\n    [\"B\"] = {type = \"Usuário adm\", expires = os.time({day=2, month=1, year=2025, hour=0, min=0})},\n}";
        let out = p.remove(code, &PlayerId::new("A"));

        assert!(!out.contains("[\"A\"]"));
        assert!(out.contains(
            "    [\"B\"] = {type = \"Usuário adm\", expires = os.time({day=2, month=1, year=2025, hour=0, min=0})},"
        ));
        assert_eq!(out, "return {\n    [\"B\"] = {type = \"Usuário adm\", expires = os.time({day=2, month=1, year=2025, hour=0, min=0})},\n}");
    }

    #[test]
    fn test_remove_keeps_boundary_brace_line() {
        // Entry whose braces close on a dedicated line: the key line and the
        // lines up to the boundary go, the boundary `}` line stays
        let code = "return {\n    [\"X\"] = {\n        expires = 0\n    },\n}";
        let out = patcher().remove(code, &PlayerId::new("X"));
        assert_eq!(out, "return {\n    },\n}");
    }

    #[test]
    fn test_remove_unknown_player_is_identity() {
        let code = "return {\n    [\"A\"] = {type = \"Usuário adm\", expires = 0},\n}";
        assert_eq!(patcher().remove(code, &PlayerId::new("Z")), code);
    }

    #[test]
    fn test_list_orders_and_duplicates() {
        let code = "return {\n    [\"1\"] = {type = \"Usuário adm\", expires = 0},\n    [\"2\"] = {type = \"Usuário adm\", expires = 0},\n    [\"1\"] = {type = \"Usuário adm\", expires = 0},\n}";
        let ids = patcher().list(code);
        assert_eq!(
            ids,
            vec![PlayerId::new("1"), PlayerId::new("2"), PlayerId::new("1")]
        );
    }

    #[test]
    fn test_list_ignores_other_role_labels() {
        let code = "return {\n    [\"1\"] = {type = \"Usuário adm\", expires = 0},\n    [\"2\"] = {type = \"vip\", expires = 0},\n}";
        let ids = patcher().list(code);
        assert_eq!(ids, vec![PlayerId::new("1")]);
    }

    #[test]
    fn test_list_empty_on_no_matches() {
        assert!(patcher().list("").is_empty());
        assert!(patcher().list("print('x')\nreturn {\n}").is_empty());
    }

    #[test]
    fn test_list_after_insert_contains_player_once() {
        let p = patcher();
        let out = p.insert("return {\n}", &PlayerId::new("77"), &expiry(), "op", stamp());
        assert_eq!(p.list(&out), vec![PlayerId::new("77")]);
    }

    #[test]
    fn test_remove_then_list_excludes_player() {
        let p = patcher();
        let player = PlayerId::new("13");
        let code = p.insert("return {\n}", &player, &expiry(), "op", stamp());
        let removed = p.remove(&code, &player);
        assert!(p.list(&removed).is_empty());
    }

    #[test]
    fn test_custom_role_label_threads_through() {
        let p = Patcher::new(PatcherConfig {
            role_label: "Moderador".to_owned(),
        });
        let out = p.insert("return {\n}", &PlayerId::new("5"), &expiry(), "op", stamp());

        assert!(out.contains("type = \"Moderador\""));
        assert_eq!(p.list(&out), vec![PlayerId::new("5")]);
        // The default-label patcher does not see it
        assert!(patcher().list(&out).is_empty());
    }
}
