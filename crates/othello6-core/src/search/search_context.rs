//! Per-search state.

use crate::config::SearchConfig;

/// State carried through one search: the configuration and a node counter.
///
/// A context lives for a single root branch; parallel branches each get
/// their own and the counts are summed afterwards.
pub struct SearchContext<'a> {
    pub config: &'a SearchConfig,
    pub n_nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        SearchContext { config, n_nodes: 0 }
    }

    #[inline(always)]
    pub fn increment_nodes(&mut self) {
        self.n_nodes += 1;
    }
}
