//! Source credibility table - per-organization trust weights

/// Credibility weight assigned to sources that match no table entry.
pub const DEFAULT_CREDIBILITY: f64 = 0.20;

/// Built-in credibility weights, checked in definition order.
///
/// Tiers: regulatory/court records highest, major financial press and
/// research firms upper-high, generic industry reports mid. The weights
/// are empirically tuned constants; changing them changes report
/// semantics.
const BUILTIN_WEIGHTS: &[(&str, f64)] = &[
    ("bloomberg", 0.95),
    ("reuters", 0.90),
    ("iea", 0.95),
    ("bain", 0.85),
    ("mckinsey", 0.85),
    ("bcg", 0.85),
    ("sec", 0.95),
    ("crunchbase", 0.85),
    ("pitchbook", 0.90),
    ("cbinsights", 0.85),
    ("court_records", 0.95),
    ("government", 0.85),
    ("industry_report", 0.75),
];

/// Static mapping from lowercase substring keys to credibility weights.
///
/// Lookup is by substring containment against the lowercased source
/// label, so "Crunchbase funding database 2024" is credited at the
/// "crunchbase" weight. Entries are checked in a defined order and the
/// first match wins, making the tie-break deterministic. The table is
/// immutable after construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CredibilityTable {
    entries: Vec<(String, f64)>,
    default_weight: f64,
}

impl CredibilityTable {
    /// Build a table from ordered (substring key, weight) pairs.
    ///
    /// Keys are lowercased on construction so lookup only lowercases
    /// the source label.
    pub fn new(entries: Vec<(String, f64)>, default_weight: f64) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, weight)| (key.to_lowercase(), weight.clamp(0.0, 1.0)))
            .collect();
        Self {
            entries,
            default_weight: default_weight.clamp(0.0, 1.0),
        }
    }

    /// The built-in table of known organizations.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_WEIGHTS
                .iter()
                .map(|(key, weight)| (key.to_string(), *weight))
                .collect(),
            default_weight: DEFAULT_CREDIBILITY,
        }
    }

    /// Look up the credibility weight for a source label.
    ///
    /// Returns the weight of the first entry whose key is contained in
    /// the lowercased label, or the default weight when nothing matches.
    pub fn weight_for(&self, source: &str) -> f64 {
        let source_lower = source.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| source_lower.contains(key.as_str()))
            .map(|(_, weight)| *weight)
            .unwrap_or(self.default_weight)
    }

    /// The weight assigned to unrecognized sources.
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredibilityTable {
    fn default() -> Self {
        Self::builtin()
    }
}
