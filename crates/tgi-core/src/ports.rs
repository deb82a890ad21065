use async_trait::async_trait;

use crate::{
    entity::{ChatEntity, UserEntity},
    Result,
};

/// Platform client port.
///
/// Telegram (Bot API) is the first implementation; the shape is narrow enough
/// that an MTProto client, or a fake for tests, fits behind it unchanged.
///
/// Contract: a handle that does not exist maps to `Error::NotFound`; any
/// other client failure maps to `Error::Platform` with the underlying
/// message preserved.
#[async_trait]
pub trait LookupPort: Send + Sync {
    async fn lookup_user(&self, handle: &str) -> Result<UserEntity>;

    async fn lookup_chat(&self, handle: &str) -> Result<ChatEntity>;

    /// Live connectivity flag, read by the health endpoint. Never blocks.
    fn is_connected(&self) -> bool;
}
