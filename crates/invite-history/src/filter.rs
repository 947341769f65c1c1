/*!
 * Invitation Filtering
 *
 * Applies an invitation history filter to a list of invitation records
 * and counts how many records each filter would show.
 */

use invite_types::{Invitation, InvitationHistoryFilter};
use serde::Serialize;

/// Number of invitations shown under each filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub pending: usize,
    pub claimed: usize,
}

impl FilterCounts {
    /// Count for a single filter
    pub fn get(&self, filter: InvitationHistoryFilter) -> usize {
        match filter {
            InvitationHistoryFilter::All => self.all,
            InvitationHistoryFilter::Pending => self.pending,
            InvitationHistoryFilter::Claimed => self.claimed,
        }
    }
}

/// Filter invitations, keeping their input order
pub fn filter_invitations(
    invitations: &[Invitation],
    filter: InvitationHistoryFilter,
) -> Vec<Invitation> {
    invitations
        .iter()
        .filter(|invitation| filter.matches(invitation))
        .cloned()
        .collect()
}

/// Count invitations per filter
pub fn count_by_filter(invitations: &[Invitation]) -> FilterCounts {
    invitations
        .iter()
        .fold(FilterCounts::default(), |mut counts, invitation| {
            counts.all += 1;
            if invitation.is_pending() {
                counts.pending += 1;
            } else if invitation.is_claimed() {
                counts.claimed += 1;
            }
            counts
        })
}
