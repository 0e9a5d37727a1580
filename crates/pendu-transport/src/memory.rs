//! In-memory transport for tests and demos.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{ChatTransport, TransportError};
use pendu_core::{MessageId, RoomId};

/// A message recorded by [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub room: RoomId,
    pub id: MessageId,
    pub content: String,
    /// How many times the message has been edited since posting.
    pub edits: u32,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    messages: Vec<SentMessage>,
}

/// Records every send and edit instead of talking to a platform.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    inner: Mutex<Inner>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything posted so far, in send order.
    pub fn messages(&self) -> Vec<SentMessage> {
        self.lock().messages.clone()
    }

    /// Messages posted to one room, in send order.
    pub fn room_messages(&self, room: RoomId) -> Vec<SentMessage> {
        self.lock()
            .messages
            .iter()
            .filter(|m| m.room == room)
            .cloned()
            .collect()
    }

    /// Current content of a message, if it exists.
    pub fn content(&self, room: RoomId, id: MessageId) -> Option<String> {
        self.lock()
            .messages
            .iter()
            .find(|m| m.room == room && m.id == id)
            .map(|m| m.content.clone())
    }
}

impl ChatTransport for MemoryTransport {
    async fn send(
        &self,
        room: RoomId,
        content: &str,
    ) -> Result<MessageId, TransportError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = MessageId(inner.next_id);
        inner.messages.push(SentMessage {
            room,
            id,
            content: content.to_string(),
            edits: 0,
        });
        Ok(id)
    }

    async fn edit(
        &self,
        room: RoomId,
        message: MessageId,
        content: &str,
    ) -> Result<(), TransportError> {
        let mut inner = self.lock();
        match inner
            .messages
            .iter_mut()
            .find(|m| m.room == room && m.id == message)
        {
            Some(m) => {
                m.content = content.to_string();
                m.edits += 1;
                Ok(())
            }
            None => Err(TransportError::UnknownMessage(message)),
        }
    }
}
