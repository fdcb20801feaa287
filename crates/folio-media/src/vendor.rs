//! Vendor fullscreen APIs
//!
//! The four spellings of the Fullscreen API, ranked, and a capability table
//! that picks the first one a host exposes. Probed once per surface.

use folio_dom::EventType;

/// One spelling of the Fullscreen API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorApi {
    Standard,
    Webkit,
    Moz,
    Ms,
}

impl VendorApi {
    /// Preference order: unprefixed, then the vendor variants
    pub const RANKED: [VendorApi; 4] = [
        VendorApi::Standard,
        VendorApi::Webkit,
        VendorApi::Moz,
        VendorApi::Ms,
    ];

    /// Element method that requests fullscreen
    pub fn request_method(self) -> &'static str {
        match self {
            Self::Standard => "requestFullscreen",
            Self::Webkit => "webkitRequestFullscreen",
            Self::Moz => "mozRequestFullScreen",
            Self::Ms => "msRequestFullscreen",
        }
    }

    /// Document method that exits fullscreen
    pub fn exit_method(self) -> &'static str {
        match self {
            Self::Standard => "exitFullscreen",
            Self::Webkit => "webkitExitFullscreen",
            Self::Moz => "mozCancelFullScreen",
            Self::Ms => "msExitFullscreen",
        }
    }

    /// Document property holding the current fullscreen element
    pub fn element_property(self) -> &'static str {
        match self {
            Self::Standard => "fullscreenElement",
            Self::Webkit => "webkitFullscreenElement",
            Self::Moz => "mozFullScreenElement",
            Self::Ms => "msFullscreenElement",
        }
    }

    /// Change notification fired by this spelling
    pub fn change_event(self) -> EventType {
        match self {
            Self::Standard => EventType::FullscreenChange,
            Self::Webkit => EventType::WebkitFullscreenChange,
            Self::Moz => EventType::MozFullscreenChange,
            Self::Ms => EventType::MsFullscreenChange,
        }
    }
}

/// A named runtime feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenFeature {
    /// Request method on elements
    Request(VendorApi),
    /// Exit method on the document
    Exit(VendorApi),
    /// Current-element property on the document
    Element(VendorApi),
}

impl FullscreenFeature {
    pub fn api(self) -> VendorApi {
        match self {
            Self::Request(api) | Self::Exit(api) | Self::Element(api) => api,
        }
    }

    /// Runtime name of the method or property
    pub fn name(self) -> &'static str {
        match self {
            Self::Request(api) => api.request_method(),
            Self::Exit(api) => api.exit_method(),
            Self::Element(api) => api.element_property(),
        }
    }
}

/// Resolved request/exit implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullscreenCapabilities {
    pub request: Option<VendorApi>,
    pub exit: Option<VendorApi>,
}

impl FullscreenCapabilities {
    /// Pick the first exposed candidate for each operation
    pub fn probe(supports: impl Fn(FullscreenFeature) -> bool) -> Self {
        let first = |feature: fn(VendorApi) -> FullscreenFeature| {
            VendorApi::RANKED
                .into_iter()
                .find(|api| supports(feature(*api)))
        };
        let caps = Self {
            request: first(FullscreenFeature::Request),
            exit: first(FullscreenFeature::Exit),
        };
        tracing::debug!(request = ?caps.request, exit = ?caps.exit, "probed fullscreen capabilities");
        caps
    }

    /// Nothing available
    pub fn none() -> Self {
        Self::default()
    }

    pub fn can_request(&self) -> bool {
        self.request.is_some()
    }

    pub fn can_exit(&self) -> bool {
        self.exit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_prefers_unprefixed() {
        let caps = FullscreenCapabilities::probe(|_| true);

        assert_eq!(caps.request, Some(VendorApi::Standard));
        assert_eq!(caps.exit, Some(VendorApi::Standard));
    }

    #[test]
    fn test_probe_falls_back_in_rank_order() {
        let caps = FullscreenCapabilities::probe(|f| {
            matches!(
                f,
                FullscreenFeature::Request(VendorApi::Moz | VendorApi::Ms)
                    | FullscreenFeature::Exit(VendorApi::Ms)
            )
        });

        assert_eq!(caps.request, Some(VendorApi::Moz));
        assert_eq!(caps.exit, Some(VendorApi::Ms));
    }

    #[test]
    fn test_probe_nothing_exposed() {
        let caps = FullscreenCapabilities::probe(|_| false);

        assert_eq!(caps, FullscreenCapabilities::none());
        assert!(!caps.can_request());
        assert!(!caps.can_exit());
    }

    #[test]
    fn test_moz_spellings() {
        assert_eq!(VendorApi::Moz.request_method(), "mozRequestFullScreen");
        assert_eq!(VendorApi::Moz.exit_method(), "mozCancelFullScreen");
        assert_eq!(VendorApi::Moz.element_property(), "mozFullScreenElement");
        assert_eq!(FullscreenFeature::Exit(VendorApi::Webkit).name(), "webkitExitFullscreen");
    }
}
