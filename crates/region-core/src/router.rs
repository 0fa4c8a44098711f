//! Map click routing.
//!
//! A click on the map arrives as the widget's click payload. The router looks
//! the clicked region up in the [`RegionLinks`] table and either produces a
//! navigation target or stays idle. Each click is handled independently.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::links::RegionLinks;

/// Click payload reported by the map widget.
///
/// Only the first point is considered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

/// A single point under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickPoint {
    /// Identifier of the region the point belongs to.
    #[serde(default)]
    pub location: Option<String>,
}

impl ClickEvent {
    /// A click on a single region.
    pub fn single(location: impl Into<String>) -> Self {
        Self {
            points: vec![ClickPoint {
                location: Some(location.into()),
            }],
        }
    }

    /// Identifier of the clicked region, if the payload names one.
    pub fn location(&self) -> Option<&str> {
        self.points.first()?.location.as_deref()
    }
}

/// Outcome of handling a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Navigation {
    /// No navigation pending.
    #[default]
    Idle,
    /// The page should navigate to this URL.
    Navigating(String),
}

impl Navigation {
    /// The redirect target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Navigation::Idle => None,
            Navigation::Navigating(url) => Some(url.as_str()),
        }
    }

    /// Consume the navigation, returning the redirect target.
    pub fn into_target(self) -> Option<String> {
        match self {
            Navigation::Idle => None,
            Navigation::Navigating(url) => Some(url),
        }
    }
}

/// Resolve a clicked region to its redirect target.
pub fn handle_region_click(identifier: &str, links: &RegionLinks) -> Option<String> {
    links.lookup(identifier).map(str::to_string)
}

/// Turns map clicks into navigation targets using a fixed link table.
#[derive(Debug, Clone)]
pub struct ClickRouter {
    links: RegionLinks,
}

impl ClickRouter {
    /// Create a router over `links`.
    pub fn new(links: RegionLinks) -> Self {
        Self { links }
    }

    /// The link table this router resolves against.
    pub fn links(&self) -> &RegionLinks {
        &self.links
    }

    /// Handle a click payload.
    ///
    /// `None` means the widget has not been clicked since the page loaded,
    /// which never navigates.
    pub fn handle(&self, event: Option<&ClickEvent>) -> Navigation {
        let Some(identifier) = event.and_then(ClickEvent::location) else {
            return Navigation::Idle;
        };

        match handle_region_click(identifier, &self.links) {
            Some(url) => {
                debug!(region = identifier, url = %url, "Region has link");
                Navigation::Navigating(url)
            }
            None => {
                debug!(region = identifier, "Region has no link");
                Navigation::Idle
            }
        }
    }
}
