/*!
 * Invitation Types
 *
 * Types shared by the wallet invitation history: the history filter,
 * the invitation record and the common error type.
 */

pub mod error;
pub mod filter;
pub mod invitation;

pub use error::{InviteError, InviteResult};
pub use filter::InvitationHistoryFilter;
pub use invitation::{Invitation, InvitationStatus};
