//! Inspection settings
//!
//! The defaults reproduce the fixed behaviour of the tool. Callers can build
//! their own `InspectorConfig` to narrow or widen any of the limits.

/// Keywords flagged by default when found inside a text cell
pub const DEFAULT_KEYWORDS: [&str; 13] = [
    "face",
    "kpi",
    "energy",
    "coherence",
    "pentagram",
    "breath",
    "ratio",
    "axis",
    "phi",
    "golden",
    "element",
    "ball",
    "pillar",
];

/// Set of lowercase substrings matched against lowercased cell text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !set.contains(&keyword) {
                set.push(keyword);
            }
        }
        Self { keywords: set }
    }

    /// Substring match, case-insensitive on the cell side
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// Rectangle anchored at A1 in which formulas and keyword cells are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub max_rows: u32,
    pub max_cols: u32,
}

impl ScanWindow {
    /// Whether a zero-based (row, col) position lies inside the window
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.max_rows && col < self.max_cols
    }
}

impl Default for ScanWindow {
    fn default() -> Self {
        Self {
            max_rows: 100,
            max_cols: 50,
        }
    }
}

/// Console listing limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub rows: u32,
    pub cols: u32,
    /// Max characters per preview cell
    pub cell_width: usize,
    pub formulas: usize,
    /// Max characters of formula text in the listing
    pub formula_width: usize,
    pub key_cells: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 15,
            cell_width: 40,
            formulas: 10,
            formula_width: 100,
            key_cells: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorConfig {
    pub keywords: KeywordSet,
    pub window: ScanWindow,
    pub preview: PreviewLimits,
}
