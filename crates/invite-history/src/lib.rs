/*!
 * Invitation History
 *
 * List model for the wallet's invitation history screen: holds the
 * invitations the wallet has sent and narrows them by status.
 */

pub mod config;
pub mod filter;
pub mod history;

pub use config::HistoryConfig;
pub use filter::{count_by_filter, filter_invitations, FilterCounts};
pub use history::InvitationHistory;
pub use invite_types::{Invitation, InvitationHistoryFilter, InvitationStatus, InviteError, InviteResult};
