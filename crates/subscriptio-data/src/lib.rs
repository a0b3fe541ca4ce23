//! HTTP client for the Subscriptio storefront.
//!
//! Every page of the storefront reads from one of a handful of JSON
//! endpoints. [`ApiClient`] issues those reads with `reqwest` (which uses the
//! browser's `fetch` on wasm32) and decodes the bodies into the records in
//! [`models`].
//!
//! # Example
//!
//! ```rust,ignore
//! use subscriptio_data::{ApiClient, StorefrontApi};
//!
//! let client = ApiClient::new("https://shop.example.com", "https://catalog.example.com");
//!
//! let invoices = client.invoices().await?;
//! for invoice in &invoices {
//!     println!("{} {}", invoice.display_date(), invoice.amount());
//! }
//!
//! let product = client.product("42").await?;
//! ```

mod client;
mod error;
pub mod models;
mod response;

pub use client::{ApiClient, StorefrontApi};
pub use error::FetchError;
pub use response::Response;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::models::{
        ActiveSubscription, Cart, CartLine, Invoice, ProductDetail, Profile, ProfileData,
        SubscriptionProduct,
    };
    pub use crate::{ApiClient, FetchError, StorefrontApi};
}
