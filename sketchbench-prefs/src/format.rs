//! The `key=value` line format shared by the bundled factory defaults and
//! the persisted per-user file.
//!
//! Parsing is forgiving: blank lines, `#` comment lines, and lines without a
//! `=` are skipped, and keys/values are trimmed. Serialization is
//! deterministic: entries come out sorted by key, one per line, with
//! `runtime.*` entries withheld.

use crate::store::RUNTIME_PREFIX;
use std::collections::HashMap;

/// Overlay every entry in `text` onto `map`, later lines winning.
///
/// Only the first `=` splits, so a value may itself contain `=`. A value
/// containing a newline cannot be represented and will not round-trip.
pub fn parse_into(map: &mut HashMap<String, String>, text: &str) {
    for line in text.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
}

/// Render `map` in persisted form: sorted by key, `runtime.*` filtered out.
pub fn to_sorted_lines(map: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = map
        .keys()
        .filter(|key| !key.starts_with(RUNTIME_PREFIX))
        .collect();
    keys.sort();

    let mut out = String::new();
    for key in keys {
        out.push_str(key);
        out.push('=');
        out.push_str(&map[key]);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> HashMap<String, String> {
        let mut map = HashMap::new();
        parse_into(&mut map, text);
        map
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let map = parse("# a comment\n\neditor.external=false\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["editor.external"], "false");
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let map = parse("not an entry\nserial.parity=N\n");
        assert_eq!(map.len(), 1);
        assert_eq!(map["serial.parity"], "N");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let map = parse("editor.font=Monospaced,plain,12\nquery=a=b=c\n");
        assert_eq!(map["query"], "a=b=c");
    }

    #[test]
    fn test_parse_trims_key_and_value() {
        let map = parse("  editor.tabs.size  =  2  \n");
        assert_eq!(map["editor.tabs.size"], "2");
    }

    #[test]
    fn test_parse_allows_empty_values() {
        let map = parse("sketchbook.path=\n");
        assert_eq!(map["sketchbook.path"], "");
    }

    #[test]
    fn test_later_lines_win() {
        let map = parse("update.check=true\nupdate.check=false\n");
        assert_eq!(map["update.check"], "false");
    }

    #[test]
    fn test_serialize_sorted_and_filtered() {
        let mut map = HashMap::new();
        map.insert("b.key".to_string(), "2".to_string());
        map.insert("a.key".to_string(), "1".to_string());
        map.insert("runtime.os".to_string(), "linux".to_string());

        let text = to_sorted_lines(&map);
        assert_eq!(text, "a.key=1\nb.key=2\n");
    }

    #[test]
    fn test_serialized_form_reparses() {
        let mut map = HashMap::new();
        map.insert("query".to_string(), "a=b=c".to_string());
        map.insert("empty".to_string(), String::new());

        let reread = parse(&to_sorted_lines(&map));
        assert_eq!(reread, map);
    }
}
