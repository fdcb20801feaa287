//! DOM Events
//!
//! Event types the page listens to and the event object passed to listeners.

use crate::NodeId;

/// Event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    // Viewport
    Scroll,

    // Pointer
    Click,

    // Fullscreen change, one per vendor spelling
    FullscreenChange,
    WebkitFullscreenChange,
    MozFullscreenChange,
    MsFullscreenChange,
}

impl EventType {
    /// Every fullscreen change spelling, unprefixed first
    pub const FULLSCREEN_CHANGES: [EventType; 4] = [
        EventType::FullscreenChange,
        EventType::WebkitFullscreenChange,
        EventType::MozFullscreenChange,
        EventType::MsFullscreenChange,
    ];

    /// Name as used by `addEventListener`
    pub fn name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Click => "click",
            Self::FullscreenChange => "fullscreenchange",
            Self::WebkitFullscreenChange => "webkitfullscreenchange",
            Self::MozFullscreenChange => "mozfullscreenchange",
            Self::MsFullscreenChange => "MSFullscreenChange",
        }
    }

    /// Parse an event name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scroll" => Some(Self::Scroll),
            "click" => Some(Self::Click),
            "fullscreenchange" => Some(Self::FullscreenChange),
            "webkitfullscreenchange" => Some(Self::WebkitFullscreenChange),
            "mozfullscreenchange" => Some(Self::MozFullscreenChange),
            "MSFullscreenChange" => Some(Self::MsFullscreenChange),
            _ => None,
        }
    }

    /// Check if this is one of the fullscreen change spellings
    pub fn is_fullscreen_change(self) -> bool {
        Self::FULLSCREEN_CHANGES.contains(&self)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Event delivered to listeners
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: Option<NodeId>,
    pub bubbles: bool,
    pub timestamp: f64,
}

impl Event {
    /// Create an event with no target (dispatched on the document or window)
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            target: None,
            bubbles: false,
            timestamp: 0.0,
        }
    }

    /// Create a scroll event
    pub fn scroll() -> Self {
        Self::new(EventType::Scroll)
    }

    /// Create a click event on an element
    pub fn click(target: NodeId) -> Self {
        Self {
            event_type: EventType::Click,
            target: Some(target),
            bubbles: true,
            timestamp: 0.0,
        }
    }

    /// Create a fullscreen change event. Fired on the element that changed
    /// state and bubbles to the document.
    pub fn fullscreen_change(event_type: EventType, target: Option<NodeId>) -> Self {
        debug_assert!(event_type.is_fullscreen_change());
        Self {
            event_type,
            target,
            bubbles: true,
            timestamp: 0.0,
        }
    }

    /// Set the event timestamp (milliseconds)
    pub fn at(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_round_trip() {
        for ty in [EventType::Scroll, EventType::Click]
            .into_iter()
            .chain(EventType::FULLSCREEN_CHANGES)
        {
            assert_eq!(EventType::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_ms_event_name_is_case_sensitive() {
        assert_eq!(EventType::MsFullscreenChange.name(), "MSFullscreenChange");
        assert_eq!(EventType::from_name("msfullscreenchange"), None);
    }

    #[test]
    fn test_fullscreen_change_event() {
        let event = Event::fullscreen_change(EventType::WebkitFullscreenChange, Some(NodeId(3)));

        assert!(event.event_type.is_fullscreen_change());
        assert_eq!(event.target, Some(NodeId(3)));
        assert!(event.bubbles);
        assert!(!Event::scroll().event_type.is_fullscreen_change());
    }
}
