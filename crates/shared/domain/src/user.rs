//! User accounts, roles and capabilities.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a user account. `0` never names an account.
pub type UserId = u64;

/// Named permission an identity may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageOptions,
    PublishPosts,
    EditPosts,
    Read,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageOptions => "manage_options",
            Capability::PublishPosts => "publish_posts",
            Capability::EditPosts => "edit_posts",
            Capability::Read => "read",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of capabilities granted to an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    /// Check whether the set grants `capability`
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Account roles, each granting a fixed capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Editor,
    Author,
    Contributor,
    Subscriber,
}

impl Role {
    /// Capabilities granted by this role
    pub fn capabilities(&self) -> Capabilities {
        use Capability::*;

        let granted: &[Capability] = match self {
            Role::Administrator => &[ManageOptions, PublishPosts, EditPosts, Read],
            Role::Editor | Role::Author => &[PublishPosts, EditPosts, Read],
            Role::Contributor => &[EditPosts, Read],
            Role::Subscriber => &[Read],
        };
        granted.iter().copied().collect()
    }
}

/// User account as held by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    /// Display name shown by the `/me` route
    pub nickname: String,
    pub role: Role,
}

impl Account {
    pub fn new(id: UserId, nickname: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            role,
        }
    }
}

/// A resolved, authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub capabilities: Capabilities,
}

impl Identity {
    pub fn new(id: UserId, capabilities: Capabilities) -> Self {
        Self { id, capabilities }
    }

    /// Check if the identity holds `capability`
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }
}
