//! Identity newtypes for the host chat platform.
//!
//! The platform hands out numeric snowflake ids for channels, users, and
//! messages. Wrapping them keeps a `RoomId` from ever being passed where a
//! `PlayerId` is expected, even though both are `u64` underneath.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat room (channel). The unit of game-session isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// A player (chat user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A message previously posted to a room, addressable for later edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(RoomId(7).to_string(), "room-7");
        assert_eq!(PlayerId(42).to_string(), "player-42");
        assert_eq!(MessageId(3).to_string(), "msg-3");
    }

    #[test]
    fn test_room_id_works_as_map_key() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(RoomId(1), "a");
        map.insert(RoomId(2), "b");
        assert_eq!(map[&RoomId(1)], "a");
    }
}
