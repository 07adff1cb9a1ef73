// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Positional distribution rules.

use crate::Options;

/// One distribution rule: an id template plus alignment data.
#[derive(Clone, Debug)]
pub struct AlignRule {
    /// A base-name template where `%s` is substituted with the
    /// current base name.
    pub template: String,
    /// Alignment within the shape's sprite cell, `0.0 ..= 1.0`.
    pub align: f64,
}

impl AlignRule {
    /// Constructs a new rule.
    pub fn new<S: Into<String>>(template: S, align: f64) -> AlignRule {
        AlignRule { template: template.into(), align }
    }
}

/// Resolves the rule list for a shape: its id first, then its base name,
/// then the `*` wildcard. Without any entry a single identity rule
/// applies, so distribution always yields at least the shape itself.
pub(crate) fn rules_for(opt: &Options, id: &str, base: &str) -> Vec<AlignRule> {
    let rules = opt.align.get(id)
        .or_else(|| opt.align.get(base))
        .or_else(|| opt.align.get("*"));

    match rules {
        Some(rules) if !rules.is_empty() => rules.clone(),
        _ => vec![AlignRule::new("%s", 0.0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_fallback() {
        let mut opt = Options::default();
        opt.align.insert("*".to_string(), vec![
            AlignRule::new("%s", 0.0),
            AlignRule::new("%s-right", 1.0),
        ]);

        let rules = rules_for(&opt, "icon", "icon");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].template, "%s-right");
    }

    #[test]
    fn id_entry_wins_over_wildcard() {
        let mut opt = Options::default();
        opt.align.insert("*".to_string(), vec![AlignRule::new("%s-w", 0.0)]);
        opt.align.insert("icon".to_string(), vec![AlignRule::new("%s-i", 0.5)]);

        let rules = rules_for(&opt, "icon", "icon");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].template, "%s-i");
        assert_eq!(rules[0].align, 0.5);
    }

    #[test]
    fn identity_rule_without_entries() {
        let opt = Options::default();
        let rules = rules_for(&opt, "icon", "icon");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].template, "%s");
        assert_eq!(rules[0].align, 0.0);
    }
}
