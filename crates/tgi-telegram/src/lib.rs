//! Telegram adapter (teloxide).
//!
//! Implements the `tgi-core` LookupPort over the Bot API and owns the single
//! process-wide session: authenticated once at startup, shared immutably
//! behind `Arc`, closed after the HTTP server drains.
//!
//! The Bot API exposes a narrower attribute set than MTProto clients (no
//! dc_id, premium flag, presence or scam/fake marks); those fields stay
//! `None`/`false` and the formatter renders them as absent.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{Chat, ChatId, ChatKind, PublicChatKind, Recipient},
    ApiError, RequestError,
};
use tracing::{info, warn};

use tgi_core::{
    config::Config,
    entity::{ChatEntity, ChatFlavor, UserEntity},
    errors::Error,
    ports::LookupPort,
    Result,
};

pub struct TelegramSession {
    bot: Bot,
    connected: AtomicBool,
}

impl TelegramSession {
    /// Authenticate against the platform and hand back the session.
    ///
    /// Fails fast: an invalid token or an unreachable platform aborts
    /// startup before the HTTP server binds.
    pub async fn start(cfg: &Config) -> Result<Self> {
        let bot = Bot::new(cfg.bot_token.clone());
        let me = bot.get_me().await.map_err(|e| match map_err(e) {
            Error::Platform(m) => Error::Config(format!("session authentication failed: {m}")),
            other => other,
        })?;
        info!("bot client started: @{}", me.username());

        Ok(Self {
            bot,
            connected: AtomicBool::new(true),
        })
    }

    /// Release the session. Idempotent; later calls are no-ops.
    pub fn stop(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            info!("bot client stopped");
        }
    }

    async fn fetch_chat(&self, handle: &str) -> std::result::Result<Chat, RequestError> {
        self.bot.get_chat(recipient_for(handle)).await
    }

    async fn member_count(&self, handle: &str) -> Option<i64> {
        match self.bot.get_chat_member_count(recipient_for(handle)).await {
            Ok(n) => Some(n as i64),
            Err(e) => {
                warn!("member count unavailable for {handle}: {e}");
                None
            }
        }
    }
}

#[async_trait]
impl LookupPort for TelegramSession {
    async fn lookup_user(&self, handle: &str) -> Result<UserEntity> {
        let chat = self.fetch_chat(handle).await.map_err(map_err)?;
        match &chat.kind {
            ChatKind::Private(private) => Ok(UserEntity {
                id: chat.id.0,
                first_name: private.first_name.clone(),
                last_name: private.last_name.clone(),
                username: private.username.clone(),
                usernames: private.username.iter().cloned().collect(),
                bio: private.bio.clone(),
                ..Default::default()
            }),
            // A public chat is not a user; let the resolver fall through.
            ChatKind::Public(_) => Err(Error::NotFound),
        }
    }

    async fn lookup_chat(&self, handle: &str) -> Result<ChatEntity> {
        let chat = self.fetch_chat(handle).await.map_err(map_err)?;
        let public = match &chat.kind {
            ChatKind::Public(public) => public,
            ChatKind::Private(_) => return Err(Error::NotFound),
        };

        let (flavor, username) = match &public.kind {
            PublicChatKind::Supergroup(sg) => (ChatFlavor::Supergroup, sg.username.clone()),
            PublicChatKind::Channel(ch) => (ChatFlavor::Channel, ch.username.clone()),
            PublicChatKind::Group(_) => (ChatFlavor::Group, None),
        };

        Ok(ChatEntity {
            id: chat.id.0,
            title: public.title.clone(),
            usernames: username.iter().cloned().collect(),
            username,
            description: public.description.clone(),
            members_count: self.member_count(handle).await,
            flavor,
            ..Default::default()
        })
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// Numeric input is a raw chat/user id, anything else a public handle.
fn recipient_for(handle: &str) -> Recipient {
    match handle.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(format!("@{handle}")),
    }
}

/// Collapse the client's error surface into the core taxonomy: the
/// "not found" class becomes `NotFound`, everything else keeps its message.
fn map_err(e: RequestError) -> Error {
    match e {
        RequestError::Api(api) => match api {
            ApiError::ChatNotFound | ApiError::UserNotFound => Error::NotFound,
            ApiError::Unknown(ref s) if s.to_lowercase().contains("not found") => Error::NotFound,
            other => Error::Platform(format!("telegram error: {other}")),
        },
        other => Error::Platform(format!("telegram error: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_handles_become_ids() {
        match recipient_for("123456789") {
            Recipient::Id(id) => assert_eq!(id.0, 123456789),
            other => panic!("unexpected recipient: {other:?}"),
        }
        match recipient_for("-1001234567890") {
            Recipient::Id(id) => assert_eq!(id.0, -1001234567890),
            other => panic!("unexpected recipient: {other:?}"),
        }
    }

    #[test]
    fn named_handles_get_the_at_prefix() {
        match recipient_for("telegram") {
            Recipient::ChannelUsername(u) => assert_eq!(u, "@telegram"),
            other => panic!("unexpected recipient: {other:?}"),
        }
    }

    #[test]
    fn not_found_class_maps_to_not_found() {
        assert!(map_err(RequestError::Api(ApiError::ChatNotFound)).is_not_found());
        assert!(map_err(RequestError::Api(ApiError::UserNotFound)).is_not_found());
        assert!(map_err(RequestError::Api(ApiError::Unknown(
            "Bad Request: chat not found".into()
        )))
        .is_not_found());
    }

    #[test]
    fn other_api_errors_keep_their_message() {
        let err = map_err(RequestError::Api(ApiError::BotBlocked));
        match err {
            Error::Platform(m) => assert!(m.starts_with("telegram error:")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
