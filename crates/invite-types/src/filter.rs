use serde::{Serialize, Deserialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use crate::error::{InviteError, InviteResult};
use crate::invitation::{Invitation, InvitationStatus};

/// Which invitations the history list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationHistoryFilter {
    /// No filtering
    #[default]
    All = 0,

    /// Only invitations that have not been claimed
    Pending = 1,

    /// Only invitations that have been claimed
    Claimed = 2,
}

impl InvitationHistoryFilter {
    /// Every filter, in segment order
    pub const ALL: [InvitationHistoryFilter; 3] = [
        InvitationHistoryFilter::All,
        InvitationHistoryFilter::Pending,
        InvitationHistoryFilter::Claimed,
    ];

    pub fn iter() -> impl Iterator<Item = InvitationHistoryFilter> {
        Self::ALL.into_iter()
    }

    /// Zero-based segment index
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Title for a segmented control
    pub fn label(&self) -> &'static str {
        match self {
            InvitationHistoryFilter::All => "All",
            InvitationHistoryFilter::Pending => "Pending",
            InvitationHistoryFilter::Claimed => "Claimed",
        }
    }

    /// Whether an invitation with the given status passes this filter
    pub fn matches_status(&self, status: InvitationStatus) -> bool {
        match self {
            InvitationHistoryFilter::All => true,
            InvitationHistoryFilter::Pending => status.is_pending(),
            InvitationHistoryFilter::Claimed => status.is_claimed(),
        }
    }

    /// Whether the invitation should be listed under this filter
    pub fn matches(&self, invitation: &Invitation) -> bool {
        self.matches_status(invitation.status)
    }
}

impl Display for InvitationHistoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvitationHistoryFilter::All => write!(f, "all"),
            InvitationHistoryFilter::Pending => write!(f, "pending"),
            InvitationHistoryFilter::Claimed => write!(f, "claimed"),
        }
    }
}

impl TryFrom<&str> for InvitationHistoryFilter {
    type Error = InviteError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(InvitationHistoryFilter::All),
            "pending" => Ok(InvitationHistoryFilter::Pending),
            "claimed" => Ok(InvitationHistoryFilter::Claimed),
            _ => Err(InviteError::InvalidFilter(format!("Unknown filter: {}", s))),
        }
    }
}

impl FromStr for InvitationHistoryFilter {
    type Err = InviteError;

    fn from_str(s: &str) -> InviteResult<Self> {
        Self::try_from(s)
    }
}

impl TryFrom<usize> for InvitationHistoryFilter {
    type Error = InviteError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InviteError::InvalidFilterIndex(index))
    }
}
