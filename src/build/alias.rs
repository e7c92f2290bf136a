/// Substitutes a lookup key for a segment name that has no value of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasRule {
    /// Name in the stacking order.
    pub segment: &'static str,
    /// Key used to fetch its thickness.
    pub key: &'static str,
}

impl AliasRule {
    /// Creates a new rule.
    #[must_use]
    pub const fn new(segment: &'static str, key: &'static str) -> Self {
        Self { segment, key }
    }
}

/// The set of alias rules applied before accumulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Creates a table without rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule, replacing any previous rule for the same segment.
    #[must_use]
    pub fn with_rule(mut self, rule: AliasRule) -> Self {
        self.rules.retain(|r| r.segment != rule.segment);
        self.rules.push(rule);
        self
    }

    /// Returns the lookup key for `segment`.
    #[must_use]
    pub fn resolve<'a>(&self, segment: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|r| r.segment == segment)
            .map_or(segment, |r| r.key)
    }

    /// Returns the rules in insertion order.
    #[must_use]
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }
}

impl Default for AliasTable {
    /// Both halves of the plasma share the minor radius; the vessel-blanket
    /// gap is one value used inboard and outboard.
    fn default() -> Self {
        Self {
            rules: vec![
                AliasRule::new("rminori", "rminor"),
                AliasRule::new("rminoro", "rminor"),
                AliasRule::new("vvblgapi", "vvblgap"),
                AliasRule::new("vvblgapo", "vvblgap"),
            ],
        }
    }
}
