//! Core types for the clickable voivodeship map.
//!
//! This crate holds everything the map page needs that is not rendering:
//!
//! - [`Boundaries`] - The region feature collection loaded once at startup
//! - [`RegionLinks`] - The static table from region name to informational URL
//! - [`ClickRouter`] - Turns a map click into a navigation target
//!
//! # Example
//!
//! ```rust
//! use region_core::{ClickEvent, ClickRouter, Navigation, RegionLinks};
//!
//! let router = ClickRouter::new(RegionLinks::builtin());
//!
//! let click = ClickEvent::single("Slaskie");
//! assert!(matches!(router.handle(Some(&click)), Navigation::Navigating(_)));
//!
//! // Nothing clicked yet.
//! assert_eq!(router.handle(None), Navigation::Idle);
//! ```

mod boundary;
mod error;
mod links;
mod router;

pub use boundary::{Boundaries, Region, DEFAULT_GEOJSON_PATH, REGION_FIELD};
pub use error::{BoundaryError, Result};
pub use links::RegionLinks;
pub use router::{handle_region_click, ClickEvent, ClickPoint, ClickRouter, Navigation};
