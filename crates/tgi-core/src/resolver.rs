//! Handle normalization and the user-then-chat lookup fallback.

use tracing::info;

use crate::{entity::Entity, errors::Error, ports::LookupPort, Result};

/// Strip the decorations people paste along with a handle: a leading `@`,
/// `http(s)://` and `t.me/` prefixes, and any stray `/` or `:`. Cleanup, not
/// parsing.
pub fn normalize_handle(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    for prefix in ["https://", "http://"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_string();
        }
    }
    if let Some(rest) = s.strip_prefix("t.me/") {
        s = rest.to_string();
    }
    s.retain(|c| c != '/' && c != ':');
    s.strip_prefix('@').unwrap_or(&s).to_string()
}

/// Resolve a raw handle to an entity.
///
/// User lookup first; only its "not found" class falls through to the chat
/// lookup. Any other platform error is surfaced unchanged so the caller sees
/// the client's own message. No caching, no retry.
pub async fn resolve(port: &dyn LookupPort, raw: &str) -> Result<Entity> {
    let handle = normalize_handle(raw);
    info!("fetching info for: {handle}");

    match port.lookup_user(&handle).await {
        Ok(user) => return Ok(Entity::User(user)),
        Err(Error::NotFound) => {}
        Err(e) => return Err(e),
    }

    match port.lookup_chat(&handle).await {
        Ok(chat) => Ok(Entity::Chat(chat)),
        Err(Error::NotFound) => Err(Error::NotFound),
        Err(e) => Err(e),
    }
}
