//! Promotional variant classification.
//!
//! A card shows exactly one of three variants. Any product released
//! within the last 30 days is a new release; any product with a sale
//! price is on sale. A product can qualify for both at once, in which
//! case on-sale wins — the precedence is encoded in the rule order of
//! [`Variant::classify`].

use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recency window for new-release classification, in whole days.
///
/// Inclusive: a product released exactly 30 days before the evaluation
/// instant still counts as a new release; 31 days does not. Pinned for
/// compatibility with existing storefront behavior.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Promotional state of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Product has a sale price.
    OnSale,
    /// Product was released within the recency window.
    NewRelease,
    /// Neither on sale nor recently released.
    #[default]
    Default,
}

impl Variant {
    /// Classify a product into its display variant.
    ///
    /// The evaluation instant is injected rather than read from the
    /// system clock, so classification is deterministic and testable.
    /// Rules are evaluated in order and the first match wins: a
    /// discounted product inside the recency window classifies as
    /// `OnSale`, never `NewRelease`.
    pub fn classify(
        sale_price: Option<&Money>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Variant {
        let rules = [
            (Variant::OnSale, sale_price.is_some()),
            (Variant::NewRelease, is_recent_release(release_date, now)),
        ];
        rules
            .into_iter()
            .find_map(|(variant, applies)| applies.then_some(variant))
            .unwrap_or(Variant::Default)
    }

    /// Get the flag shown for this variant, if any.
    pub fn flag(&self) -> Option<PromotionalFlag> {
        match self {
            Variant::OnSale => Some(PromotionalFlag::Sale),
            Variant::NewRelease => Some(PromotionalFlag::JustReleased),
            Variant::Default => None,
        }
    }

    /// Whether the list price renders struck through (sale price shown
    /// alongside).
    pub fn strikes_price(&self) -> bool {
        matches!(self, Variant::OnSale)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }
}

/// Check whether a release date falls within the recency window of the
/// evaluation instant. Whole-day arithmetic; the boundary day is
/// included. Future-dated releases trivially qualify.
fn is_recent_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date).num_days() <= NEW_RELEASE_WINDOW_DAYS
}

/// Short label overlaid on a card for non-default variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionalFlag {
    /// Shown for on-sale products.
    Sale,
    /// Shown for new releases.
    JustReleased,
}

impl PromotionalFlag {
    /// Get the display text for this flag.
    pub fn label(&self) -> &'static str {
        match self {
            PromotionalFlag::Sale => "Sale",
            PromotionalFlag::JustReleased => "Just Released!",
        }
    }
}
