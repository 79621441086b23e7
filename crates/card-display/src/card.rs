//! Product card input entity.

use crate::error::CardError;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// URL-friendly product identifier.
///
/// A newtype rather than a bare `String` so a slug can't be confused
/// with a name or image path at a call site. Slugs are supplied by the
/// caller; this crate never mints them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Create a slug from a string.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw product fields a card is rendered from.
///
/// Immutable once constructed; built per call, never persisted. The
/// variant is derived from these fields at resolve time, not stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    /// URL-friendly identifier.
    pub slug: Slug,
    /// Product name.
    pub name: String,
    /// URI of the card image.
    pub image_src: String,
    /// List price.
    pub price: Money,
    /// Sale price, present only when the product is discounted.
    pub sale_price: Option<Money>,
    /// When the product was released.
    pub release_date: DateTime<Utc>,
    /// Number of colorways offered.
    pub num_of_colors: u32,
}

impl ProductCard {
    /// Create a card with no sale price and a single colorway.
    pub fn new(
        slug: impl Into<Slug>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        release_date: DateTime<Utc>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors: 1,
        }
    }

    /// Check if the product carries a sale price.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Validate the card at the boundary.
    ///
    /// Classification assumes well-formed input; this is where malformed
    /// input gets rejected instead of silently misclassifying.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.slug.as_str().is_empty() {
            return Err(CardError::EmptyField("slug"));
        }
        if self.name.is_empty() {
            return Err(CardError::EmptyField("name"));
        }
        if self.price.is_negative() {
            return Err(CardError::NegativeAmount {
                field: "price",
                amount_cents: self.price.amount_cents,
            });
        }
        if let Some(sale) = &self.sale_price {
            if sale.is_negative() {
                return Err(CardError::NegativeAmount {
                    field: "sale_price",
                    amount_cents: sale.amount_cents,
                });
            }
            if sale.currency != self.price.currency {
                return Err(CardError::CurrencyMismatch {
                    expected: self.price.currency.to_string(),
                    got: sale.currency.to_string(),
                });
            }
        }
        if self.num_of_colors == 0 {
            return Err(CardError::ZeroColors);
        }
        Ok(())
    }

    /// Amount saved against the list price, when the sale price is
    /// strictly below it.
    pub fn savings(&self) -> Option<Money> {
        let sale = self.sale_price.as_ref()?;
        let saved = self.price.try_subtract(sale)?;
        if saved.is_negative() || saved.is_zero() {
            return None;
        }
        Some(saved)
    }

    /// Percentage saved against the list price, when on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        let saved = self.savings()?;
        Some((saved.amount_cents as f64 / self.price.amount_cents as f64) * 100.0)
    }
}
