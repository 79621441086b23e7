//! Display rules for product cards.
//!
//! Given a product's raw fields, this crate derives the card's
//! promotional variant and the strings the presentation layer renders:
//!
//! - **Variant**: on-sale / new-release / default, with on-sale taking
//!   precedence when both apply.
//! - **Flag**: the "Sale" / "Just Released!" overlay for non-default
//!   variants.
//! - **Formatting**: currency-formatted prices and pluralized labels.
//!
//! Everything is pure and synchronous. The evaluation instant for the
//! new-release window is injected by the caller, never read from the
//! system clock.
//!
//! # Example
//!
//! ```rust
//! use card_display::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let mut card = ProductCard::new(
//!     "retro-runner",
//!     "Retro Runner",
//!     "/images/retro-runner.jpg",
//!     Money::new(5000, Currency::USD),
//!     now - Duration::days(10),
//! );
//! card.sale_price = Some(Money::new(4000, Currency::USD));
//!
//! let display = CardDisplay::resolve(&card, now).unwrap();
//! assert_eq!(display.variant, Variant::OnSale);
//! assert_eq!(display.flag_label(), Some("Sale"));
//! assert_eq!(display.sale_price_label.as_deref(), Some("$40.00"));
//! ```

pub mod card;
pub mod display;
pub mod error;
pub mod format;
pub mod money;
pub mod variant;

pub use card::{ProductCard, Slug};
pub use display::CardDisplay;
pub use error::CardError;
pub use format::{color_count_label, pluralize};
pub use money::{Currency, Money};
pub use variant::{PromotionalFlag, Variant, NEW_RELEASE_WINDOW_DAYS};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::card::{ProductCard, Slug};
    pub use crate::display::CardDisplay;
    pub use crate::error::CardError;
    pub use crate::format::{color_count_label, pluralize};
    pub use crate::money::{Currency, Money};
    pub use crate::variant::{PromotionalFlag, Variant, NEW_RELEASE_WINDOW_DAYS};
}
