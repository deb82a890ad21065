//! Field formatter: turns raw entities into the JSON-shaped records the API
//! serves, deriving the cosmetic fields (age estimate, DC label, status and
//! flag strings, photo URL, deep links).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    age,
    dc,
    entity::{ChatEntity, Entity, Presence, UserEntity},
};

pub const DEFAULT_PHOTO_SIZE: u32 = 320;

const DATE_FORMAT: &str = "%B %d, %Y";
const DATETIME_FORMAT: &str = "%B %d, %Y at %H:%M:%S";

/// Formatted record for a user or bot.
#[derive(Clone, Debug, Serialize)]
pub struct UserView {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub usernames: Vec<String>,
    pub bio: Option<String>,
    pub dc_id: Option<i32>,
    pub dc_location: &'static str,
    pub is_premium: bool,
    pub is_verified: bool,
    pub is_bot: bool,
    pub is_scam: bool,
    pub is_fake: bool,
    pub is_frozen: bool,
    pub frozen_icon: Option<String>,
    pub flags: &'static str,
    pub status: &'static str,
    pub last_online_date: Option<String>,
    pub next_offline_date: Option<String>,
    /// Estimated from the account id, not an authoritative timestamp.
    pub account_created: String,
    /// Estimated, same caveat as `account_created`.
    pub account_age: String,
    pub profile_photo_url: Option<String>,
    pub links: UserLinks,
}

/// Formatted record for a group, supergroup or channel.
#[derive(Clone, Debug, Serialize)]
pub struct ChatView {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub usernames: Vec<String>,
    pub description: Option<String>,
    pub dc_id: Option<i32>,
    pub dc_location: &'static str,
    pub members_count: Option<i64>,
    pub is_verified: bool,
    pub is_restricted: bool,
    pub is_scam: bool,
    pub is_fake: bool,
    pub is_frozen: bool,
    pub frozen_icon: Option<String>,
    pub flags: &'static str,
    pub profile_photo_url: Option<String>,
    pub links: ChatLinks,
}

#[derive(Clone, Debug, Serialize)]
pub struct UserLinks {
    pub android: String,
    pub ios: String,
    pub permanent: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatLinks {
    pub join: String,
    pub permanent: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum EntityView {
    User(Box<UserView>),
    Chat(Box<ChatView>),
}

impl EntityView {
    pub fn primary_handle(&self) -> Option<&str> {
        match self {
            EntityView::User(v) => v.username.as_deref(),
            EntityView::Chat(v) => v.username.as_deref(),
        }
    }
}

/// Presence enum to the fixed human strings; absent maps to "Unknown".
pub fn status_label(status: Option<Presence>) -> &'static str {
    match status {
        Some(Presence::Online) => "Online",
        Some(Presence::Offline) => "Offline",
        Some(Presence::Recently) => "Recently online",
        Some(Presence::LastWeek) => "Last seen within week",
        Some(Presence::LastMonth) => "Last seen within month",
        Some(Presence::LongAgo) => "Last seen long ago",
        None => "Unknown",
    }
}

/// Scam takes precedence over fake.
pub fn flags_label(is_scam: bool, is_fake: bool) -> &'static str {
    if is_scam {
        "Scam"
    } else if is_fake {
        "Fake"
    } else {
        "Clean"
    }
}

/// Userpic CDN URL for a public handle; no handle, no photo URL.
pub fn profile_photo_url(username: Option<&str>, size: u32) -> Option<String> {
    let handle = username?.trim_start_matches('@');
    if handle.is_empty() {
        return None;
    }
    Some(format!("https://t.me/i/userpic/{size}/{handle}.jpg"))
}

fn user_links(id: i64) -> UserLinks {
    UserLinks {
        android: format!("tg://openmessage?user_id={id}"),
        ios: format!("tg://user?id={id}"),
        permanent: format!("tg://user?id={id}"),
    }
}

fn chat_links(id: i64, username: Option<&str>) -> ChatLinks {
    let link = match username {
        Some(handle) => format!("t.me/{handle}"),
        None if id < 0 => {
            // Supergroup/channel ids carry a -100 prefix in Bot API form.
            let stripped = id.to_string().replacen("-100", "", 1);
            format!("t.me/c/{stripped}/1")
        }
        None => format!("tg://resolve?domain={id}"),
    };
    ChatLinks {
        join: link.clone(),
        permanent: link,
    }
}

fn format_ts(ts: Option<DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.format(DATETIME_FORMAT).to_string())
}

/// Format a user entity, deriving the estimated-age fields against `today`.
pub fn render_user(user: &UserEntity, today: NaiveDate, photo_size: u32) -> UserView {
    let created = age::estimate_creation(user.id);
    let span = age::calendar_span(created.date(), today);

    UserView {
        success: true,
        kind: if user.is_bot { "bot" } else { "user" },
        id: user.id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
        usernames: user.usernames.clone(),
        bio: user.bio.clone(),
        dc_id: user.dc_id,
        dc_location: dc::location(user.dc_id),
        is_premium: user.is_premium,
        is_verified: user.is_verified,
        is_bot: user.is_bot,
        is_scam: user.is_scam,
        is_fake: user.is_fake,
        is_frozen: user.is_frozen,
        frozen_icon: user.frozen_icon.clone(),
        flags: flags_label(user.is_scam, user.is_fake),
        status: status_label(user.status),
        last_online_date: format_ts(user.last_online),
        next_offline_date: format_ts(user.next_offline),
        account_created: created.format(DATE_FORMAT).to_string(),
        account_age: span.to_string(),
        profile_photo_url: profile_photo_url(user.username.as_deref(), photo_size),
        links: user_links(user.id),
    }
}

pub fn render_chat(chat: &ChatEntity, photo_size: u32) -> ChatView {
    ChatView {
        success: true,
        kind: chat.flavor.as_str(),
        id: chat.id,
        title: chat.title.clone(),
        username: chat.username.clone(),
        usernames: chat.usernames.clone(),
        description: chat.description.clone(),
        dc_id: chat.dc_id,
        dc_location: dc::location(chat.dc_id),
        members_count: chat.members_count,
        is_verified: chat.is_verified,
        is_restricted: chat.is_restricted,
        is_scam: chat.is_scam,
        is_fake: chat.is_fake,
        is_frozen: chat.is_frozen,
        frozen_icon: chat.frozen_icon.clone(),
        flags: flags_label(chat.is_scam, chat.is_fake),
        profile_photo_url: profile_photo_url(chat.username.as_deref(), photo_size),
        links: chat_links(chat.id, chat.username.as_deref()),
    }
}

pub fn render(entity: &Entity, today: NaiveDate, photo_size: u32) -> EntityView {
    match entity {
        Entity::User(u) => EntityView::User(Box::new(render_user(u, today, photo_size))),
        Entity::Chat(c) => EntityView::Chat(Box::new(render_chat(c, photo_size))),
    }
}
