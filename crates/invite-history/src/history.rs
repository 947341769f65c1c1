use crate::config::HistoryConfig;
use crate::filter::{count_by_filter, FilterCounts};
use invite_types::{Invitation, InvitationHistoryFilter, InviteResult};
use tracing::debug;

/// List model behind the invitation history screen
///
/// Holds the invitations handed in by the caller together with the filter
/// the user currently has selected. Changing the filter replaces the value;
/// the records are never touched by a filter change.
#[derive(Debug, Clone)]
pub struct InvitationHistory {
    invitations: Vec<Invitation>,
    filter: InvitationHistoryFilter,
    config: HistoryConfig,
}

impl Default for InvitationHistory {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl InvitationHistory {
    /// Create an empty history using the configured initial filter
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            invitations: Vec::new(),
            filter: config.default_filter,
            config,
        }
    }

    /// Replace the records, ordering them by creation time
    pub fn set_invitations(&mut self, mut invitations: Vec<Invitation>) {
        if self.config.newest_first {
            invitations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        } else {
            invitations.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }

        debug!(
            "Invitation history replaced: {} -> {} records",
            self.invitations.len(),
            invitations.len()
        );
        self.invitations = invitations;
    }

    /// All records in list order, ignoring the filter
    pub fn invitations(&self) -> &[Invitation] {
        &self.invitations
    }

    /// The currently selected filter
    pub fn filter(&self) -> InvitationHistoryFilter {
        self.filter
    }

    /// Select a new filter, returning whether it differed from the old one
    pub fn set_filter(&mut self, filter: InvitationHistoryFilter) -> bool {
        let old = self.filter;
        if old == filter {
            return false;
        }

        self.filter = filter;
        debug!("Invitation history filter changed: {} -> {}", old, filter);
        true
    }

    /// Select a filter by its segment index
    pub fn set_filter_index(&mut self, index: usize) -> InviteResult<bool> {
        let filter = InvitationHistoryFilter::try_from(index)?;
        Ok(self.set_filter(filter))
    }

    /// Records passing the current filter, in list order
    pub fn visible(&self) -> Vec<&Invitation> {
        self.invitations
            .iter()
            .filter(|invitation| self.filter.matches(invitation))
            .collect()
    }

    /// Number of records passing the current filter
    pub fn len(&self) -> usize {
        self.invitations
            .iter()
            .filter(|invitation| self.filter.matches(invitation))
            .count()
    }

    /// True when the current filter shows nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts(&self) -> FilterCounts {
        count_by_filter(&self.invitations)
    }
}
