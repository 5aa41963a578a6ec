//! Network distribution aggregate
//!
//! Derived per-guild counts of wallet links by network. Computed fresh from
//! stored rows on every request; nothing here is persisted or cached.

use std::collections::BTreeMap;

use crate::entities::MemberLink;
use crate::value_objects::Network;

/// Count of member links per network label.
///
/// Keys are normalized (lower-cased) labels; a BTreeMap keeps iteration
/// order deterministic for rendering and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkDistribution {
    counts: BTreeMap<Network, u64>,
}

impl NetworkDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution over a set of links.
    ///
    /// Counts every row it is given. Lifecycle filtering, if any, is the
    /// caller's decision.
    pub fn from_links<'a, I>(links: I) -> Self
    where
        I: IntoIterator<Item = &'a MemberLink>,
    {
        let mut dist = Self::new();
        for link in links {
            dist.record(&link.network);
        }
        dist
    }

    /// Count one link on the given network
    pub fn record(&mut self, network: &Network) {
        *self.counts.entry(network.clone()).or_insert(0) += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total links counted across all networks
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count for a single network, zero if absent
    pub fn count(&self, network: &Network) -> u64 {
        self.counts.get(network).copied().unwrap_or(0)
    }

    /// Display pairs: capitalized label and count, in label order
    pub fn display_counts(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .map(|(network, count)| (network.display_label(), *count))
            .collect()
    }
}
