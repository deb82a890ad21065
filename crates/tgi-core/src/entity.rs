use chrono::{DateTime, Utc};

/// Presence as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Recently,
    LastWeek,
    LastMonth,
    LongAgo,
}

/// Chat subtype. `Unknown` covers anything the platform adds later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatFlavor {
    Supergroup,
    Group,
    Channel,
    Unknown,
}

impl ChatFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatFlavor::Supergroup => "supergroup",
            ChatFlavor::Group => "group",
            ChatFlavor::Channel => "channel",
            ChatFlavor::Unknown => "unknown",
        }
    }
}

/// A user or bot account, as fetched from the platform.
///
/// Every attribute the platform may omit is an `Option`; nothing here is
/// probed dynamically. Adapters fill what their API exposes and leave the
/// rest `None`/`false`.
#[derive(Clone, Debug, Default)]
pub struct UserEntity {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Primary public handle, without `@`.
    pub username: Option<String>,
    /// All public handles, primary first.
    pub usernames: Vec<String>,
    pub bio: Option<String>,
    pub dc_id: Option<i32>,
    pub is_bot: bool,
    pub is_premium: bool,
    pub is_verified: bool,
    pub is_scam: bool,
    pub is_fake: bool,
    pub is_frozen: bool,
    pub frozen_icon: Option<String>,
    pub status: Option<Presence>,
    pub last_online: Option<DateTime<Utc>>,
    pub next_offline: Option<DateTime<Utc>>,
}

/// A group, supergroup or channel.
#[derive(Clone, Debug)]
pub struct ChatEntity {
    pub id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub usernames: Vec<String>,
    pub description: Option<String>,
    pub dc_id: Option<i32>,
    pub members_count: Option<i64>,
    pub flavor: ChatFlavor,
    pub is_verified: bool,
    pub is_restricted: bool,
    pub is_scam: bool,
    pub is_fake: bool,
    pub is_frozen: bool,
    pub frozen_icon: Option<String>,
}

impl Default for ChatEntity {
    fn default() -> Self {
        Self {
            id: 0,
            title: None,
            username: None,
            usernames: Vec::new(),
            description: None,
            dc_id: None,
            members_count: None,
            flavor: ChatFlavor::Unknown,
            is_verified: false,
            is_restricted: false,
            is_scam: false,
            is_fake: false,
            is_frozen: false,
            frozen_icon: None,
        }
    }
}

/// Result of a successful lookup: either flavor of platform entity.
#[derive(Clone, Debug)]
pub enum Entity {
    User(UserEntity),
    Chat(ChatEntity),
}

impl Entity {
    pub fn primary_handle(&self) -> Option<&str> {
        match self {
            Entity::User(u) => u.username.as_deref(),
            Entity::Chat(c) => c.username.as_deref(),
        }
    }
}
