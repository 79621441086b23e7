//! Resolved card view model.

use crate::card::{ProductCard, Slug};
use crate::error::CardError;
use crate::format::color_count_label;
use crate::money::Money;
use crate::variant::{PromotionalFlag, Variant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render a card.
///
/// Produced by [`CardDisplay::resolve`]; carries the derived variant,
/// the flag (if any), and pre-formatted display strings. The rendering
/// technology on the other side is none of this crate's business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardDisplay {
    /// URL-friendly identifier, passed through for link construction.
    pub slug: Slug,
    /// Product name.
    pub name: String,
    /// URI of the card image.
    pub image_src: String,
    /// Derived promotional variant.
    pub variant: Variant,
    /// Flag to overlay, absent for the default variant.
    pub flag: Option<PromotionalFlag>,
    /// Formatted list price (e.g., "$50.00").
    pub price_label: String,
    /// Formatted sale price, present only for the on-sale variant.
    pub sale_price_label: Option<String>,
    /// Pluralized colorway label (e.g., "2 Colors").
    pub color_label: String,
    /// Whether the list price renders struck through.
    pub price_struck: bool,
}

impl CardDisplay {
    /// Resolve a product card into its display model.
    ///
    /// Validates the card first, then classifies and formats. The
    /// evaluation instant drives the new-release window and must be
    /// supplied by the caller.
    pub fn resolve(card: &ProductCard, now: DateTime<Utc>) -> Result<CardDisplay, CardError> {
        card.validate()?;

        let variant = Variant::classify(card.sale_price.as_ref(), card.release_date, now);
        let sale_price_label = if variant == Variant::OnSale {
            card.sale_price.as_ref().map(Money::display)
        } else {
            None
        };

        Ok(CardDisplay {
            slug: card.slug.clone(),
            name: card.name.clone(),
            image_src: card.image_src.clone(),
            variant,
            flag: variant.flag(),
            price_label: card.price.display(),
            sale_price_label,
            color_label: color_count_label(card.num_of_colors),
            price_struck: variant.strikes_price(),
        })
    }

    /// Check if a flag should be rendered.
    pub fn has_flag(&self) -> bool {
        self.flag.is_some()
    }

    /// Display text of the flag, if any.
    pub fn flag_label(&self) -> Option<&'static str> {
        self.flag.map(|f| f.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use chrono::{Duration, TimeZone};

    fn eval_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn card(release_date: DateTime<Utc>) -> ProductCard {
        let mut card = ProductCard::new(
            "retro-runner",
            "Retro Runner",
            "/images/retro-runner.jpg",
            Money::new(5000, Currency::USD),
            release_date,
        );
        card.num_of_colors = 2;
        card
    }

    #[test]
    fn test_resolve_on_sale() {
        let now = eval_instant();
        let mut card = card(now - Duration::days(10));
        card.sale_price = Some(Money::new(4000, Currency::USD));

        let display = CardDisplay::resolve(&card, now).unwrap();
        assert_eq!(display.variant, Variant::OnSale);
        assert_eq!(display.flag_label(), Some("Sale"));
        assert_eq!(display.price_label, "$50.00");
        assert_eq!(display.sale_price_label.as_deref(), Some("$40.00"));
        assert!(display.price_struck);
    }

    #[test]
    fn test_resolve_new_release() {
        let now = eval_instant();
        let card = card(now - Duration::days(5));

        let display = CardDisplay::resolve(&card, now).unwrap();
        assert_eq!(display.variant, Variant::NewRelease);
        assert_eq!(display.flag_label(), Some("Just Released!"));
        assert_eq!(display.sale_price_label, None);
        assert!(!display.price_struck);
    }

    #[test]
    fn test_resolve_default() {
        let now = eval_instant();
        let card = card(now - Duration::days(365));

        let display = CardDisplay::resolve(&card, now).unwrap();
        assert_eq!(display.variant, Variant::Default);
        assert!(!display.has_flag());
        assert_eq!(display.flag_label(), None);
        assert_eq!(display.price_label, "$50.00");
        assert_eq!(display.color_label, "2 Colors");
    }

    #[test]
    fn test_resolve_rejects_invalid_card() {
        let now = eval_instant();
        let mut card = card(now - Duration::days(5));
        card.num_of_colors = 0;

        assert_eq!(
            CardDisplay::resolve(&card, now),
            Err(CardError::ZeroColors)
        );
    }

    #[test]
    fn test_resolve_passes_fields_through() {
        let now = eval_instant();
        let display = CardDisplay::resolve(&card(now - Duration::days(5)), now).unwrap();
        assert_eq!(display.slug.as_str(), "retro-runner");
        assert_eq!(display.name, "Retro Runner");
        assert_eq!(display.image_src, "/images/retro-runner.jpg");
    }

    #[test]
    fn test_display_serde_round_trip() {
        let now = eval_instant();
        let mut card = card(now - Duration::days(10));
        card.sale_price = Some(Money::new(4000, Currency::USD));

        let display = CardDisplay::resolve(&card, now).unwrap();
        let json = serde_json::to_string(&display).unwrap();
        assert!(json.contains("\"variant\":\"on-sale\""));

        let back: CardDisplay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, display);
    }
}
