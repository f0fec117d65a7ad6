//! Startup migration of known-obsolete stored values.
//!
//! Each rule is a point-fix for values older releases wrote but the current
//! one no longer accepts. Rules run once at the end of init, after the user
//! overlay; rewritten values persist on the next save.

use crate::store::Preferences;

/// One rewrite rule: if `key` currently holds any of `invalid`, replace it
/// with `replacement`.
struct FixupRule {
    key: &'static str,
    invalid: &'static [&'static str],
    replacement: &'static str,
}

/// Serial-monitor baud rates the IDE no longer supports collapse to 9600.
const FIXUP_RULES: &[FixupRule] = &[FixupRule {
    key: "serial.debug_rate",
    invalid: &["14400", "28800", "38400"],
    replacement: "9600",
}];

pub(crate) fn apply(prefs: &mut Preferences) {
    for rule in FIXUP_RULES {
        let Some(value) = prefs.get(rule.key).map(str::to_owned) else {
            continue;
        };
        if rule.invalid.contains(&value.as_str()) {
            log::info!(
                "Rewriting obsolete value '{}' for {} to '{}'",
                value,
                rule.key,
                rule.replacement,
            );
            prefs.set(rule.key, rule.replacement);
        }
    }
}
