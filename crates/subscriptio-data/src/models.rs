//! Wire records returned by the storefront endpoints.
//!
//! All records use camelCase field names on the wire. Amounts arrive as
//! decimal currency units and are exposed as [`Money`] for display.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use subscriptio_core::Money;

/// Accept ids sent either as JSON strings or as JSON numbers.
fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Render an ISO date (`2024-03-01`) or timestamp as `Mar 1, 2024`.
///
/// Anything else is returned unchanged.
pub fn display_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

// ============================================================================
// Invoices
// ============================================================================

/// A billing invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub date: String,
    pub amount: f64,
    pub status: String,
    pub download_url: String,
}

impl Invoice {
    pub fn amount(&self) -> Money {
        Money::usd(self.amount)
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }
}

// ============================================================================
// Products
// ============================================================================

/// An entry in the subscription catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProduct {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Billing interval such as `month` or `year`.
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl SubscriptionProduct {
    pub fn price(&self) -> Option<Money> {
        self.price.map(Money::usd)
    }

    /// Link to the product's detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// `"$9.99 / month"`, `"$9.99"`, or `None` without a price.
    pub fn price_label(&self) -> Option<String> {
        let price = self.price()?;
        Some(match &self.interval {
            Some(interval) => format!("{price} / {interval}"),
            None => price.to_string(),
        })
    }

    /// Case-insensitive match of `query` against the name, description and
    /// billing interval. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [Some(&self.name), self.description.as_ref(), self.interval.as_ref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// A single product as served by the catalogue service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

// ============================================================================
// Cart
// ============================================================================

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(deserialize_with = "flexible_id")]
    pub product_id: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl CartLine {
    pub fn unit_price(&self) -> Money {
        Money::usd(self.price)
    }

    /// Unit price times quantity, `None` if it overflows.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price().checked_mul(self.quantity)
    }
}

/// The shopper's cart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartLine>,
    /// Total reported by the endpoint, if any.
    #[serde(default)]
    pub total: Option<f64>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Reported total, or the sum of the lines when none was reported.
    ///
    /// `None` when a computed line or the running sum overflows.
    pub fn total(&self) -> Option<Money> {
        match self.total {
            Some(total) => Some(Money::usd(total)),
            None => self
                .items
                .iter()
                .map(CartLine::line_total)
                .collect::<Option<Vec<_>>>()
                .and_then(Money::checked_sum),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub member_since: Option<String>,
}

/// A subscription the account holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSubscription {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ActiveSubscription {
    pub fn price(&self) -> Option<Money> {
        self.price.map(Money::usd)
    }
}

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub profile: Profile,
    #[serde(default)]
    pub subscriptions: Vec<ActiveSubscription>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Decoding ===

    #[test]
    fn test_invoice_camel_case_and_numeric_id() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": 1001,
            "date": "2024-03-01",
            "amount": 19.5,
            "status": "paid",
            "downloadUrl": "/invoices/1001.pdf"
        }))
        .unwrap();

        assert_eq!(invoice.id, "1001");
        assert_eq!(invoice.download_url, "/invoices/1001.pdf");
        assert_eq!(invoice.amount().to_string(), "$19.50");
        assert_eq!(invoice.display_date(), "Mar 1, 2024");
    }

    #[test]
    fn test_product_optional_fields() {
        let product: SubscriptionProduct =
            serde_json::from_value(json!({ "id": "coffee", "name": "Coffee Club" })).unwrap();
        assert!(product.price().is_none());
        assert!(product.price_label().is_none());
        assert_eq!(product.href(), "/product/coffee");
    }

    #[test]
    fn test_price_label_with_interval() {
        let product = SubscriptionProduct {
            id: "1".into(),
            name: "Tea".into(),
            description: None,
            price: Some(9.99),
            interval: Some("month".into()),
            image: None,
        };
        assert_eq!(product.price_label().as_deref(), Some("$9.99 / month"));
    }

    #[test]
    fn test_filter_matches_name_description_and_interval() {
        let product = SubscriptionProduct {
            id: "1".into(),
            name: "Coffee Club".into(),
            description: Some("Fresh beans every week".into()),
            price: Some(14.0),
            interval: Some("month".into()),
            image: None,
        };
        assert!(product.matches(""));
        assert!(product.matches("  "));
        assert!(product.matches("coffee"));
        assert!(product.matches("BEANS"));
        assert!(product.matches(" Month "));
        assert!(!product.matches("tea"));
    }

    // === Cart ===

    #[test]
    fn test_cart_total_computed_when_missing() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [
                { "productId": "a", "name": "A", "price": 10.0, "quantity": 2 },
                { "productId": "b", "name": "B", "price": 2.5 }
            ]
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().map(|t| t.to_string()).as_deref(), Some("$22.50"));
    }

    #[test]
    fn test_cart_reported_total_wins() {
        let cart = Cart {
            items: Vec::new(),
            total: Some(5.0),
        };
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Some(Money::usd(5.0)));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::default().total(), Some(Money::ZERO));
    }

    #[test]
    fn test_cart_total_overflow_is_none() {
        let cart: Cart = serde_json::from_value(json!({
            "items": [
                { "productId": "a", "name": "A", "price": 1.0e10, "quantity": 4_000_000_000u32 }
            ]
        }))
        .unwrap();

        assert_eq!(cart.items[0].line_total(), None);
        assert_eq!(cart.total(), None);
        assert_eq!(cart.item_count(), 4_000_000_000);
    }

    #[test]
    fn test_cart_total_sum_overflow_is_none() {
        let line = CartLine {
            product_id: "a".into(),
            name: "A".into(),
            price: 9.0e16,
            quantity: 1,
        };
        let cart = Cart {
            items: vec![line.clone(), line],
            total: None,
        };
        assert_eq!(cart.total(), None);
    }

    // === Dates ===

    #[test]
    fn test_display_date_formats() {
        assert_eq!(display_date("2023-12-25"), "Dec 25, 2023");
        assert_eq!(display_date("2024-01-05T10:00:00Z"), "Jan 5, 2024");
        assert_eq!(display_date("last tuesday"), "last tuesday");
    }
}
