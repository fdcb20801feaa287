//! folio DOM
//!
//! The small slice of the document model the portfolio needs: node handles,
//! events and listener registration.

mod events;
mod listeners;

pub use events::{Event, EventType};
pub use listeners::{dispatch_event, EventTarget, Listener, ListenerId, ListenerRegistry};

/// Node identifier (index into a host's element table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Build a node id from a raw index
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Raw index
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
