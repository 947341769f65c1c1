use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Whether an invitation has been used yet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    /// Sent but nobody has registered with it yet
    Pending,
    /// An identity was registered using the invitation
    Claimed,
}

impl InvitationStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, InvitationStatus::Pending)
    }

    pub fn is_claimed(&self) -> bool {
        matches!(self, InvitationStatus::Claimed)
    }
}

/// An invitation sent by the wallet owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invitation {
    /// Local identifier
    pub id: Uuid,

    /// Shareable invitation link
    pub link: String,

    /// Optional note the sender attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// When the invitation was created
    pub created_at: DateTime<Utc>,

    /// Status as reported by the identity layer
    pub status: InvitationStatus,
}

impl Invitation {
    /// Create a new invitation record stamped with the current time
    pub fn new(link: impl Into<String>, status: InvitationStatus) -> Self {
        Self::with_created_at(link, status, Utc::now())
    }

    /// Create an invitation record with a known creation time
    pub fn with_created_at(
        link: impl Into<String>,
        status: InvitationStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            link: link.into(),
            tag: None,
            created_at,
            status,
        }
    }

    /// Attach a note to the invitation
    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    pub fn is_claimed(&self) -> bool {
        self.status.is_claimed()
    }
}
