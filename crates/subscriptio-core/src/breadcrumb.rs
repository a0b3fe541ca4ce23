//! Breadcrumb trail derivation.
//!
//! A trail always starts at `("Home", "/")` and adds one item per non-empty
//! path segment. Each item's href is the `/`-joined prefix of the segments
//! up to and including its own, and its label is the segment with the first
//! character upper-cased.
//!
//! Views that know better names for some segments (a product id that should
//! read as the product's name, `forgot-password` as "Forgot Password") pass
//! a [`LabelResolver`] to [`derive_with`] instead of special-casing paths.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label of the root item.
pub const HOME_LABEL: &str = "Home";
/// Href of the root item.
pub const HOME_HREF: &str = "/";

/// One link in the trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The `("Home", "/")` item every trail starts with.
    pub fn home() -> Self {
        Self::new(HOME_LABEL, HOME_HREF)
    }
}

/// A path segment as seen by a [`LabelResolver`].
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    /// The raw segment text.
    pub value: &'a str,
    /// Zero-based position among the non-empty segments.
    pub index: usize,
    /// Accumulated href up to and including this segment.
    pub href: &'a str,
    /// All non-empty segments of the path.
    pub segments: &'a [&'a str],
}

impl Segment<'_> {
    /// Whether this is the final segment of the path.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.segments.len()
    }

    /// The segment before this one, if any.
    pub fn parent(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .copied()
    }
}

/// Replacement for a derived item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrumbOverride {
    /// Label shown instead of the capitalized segment.
    pub label: String,
    /// Link target instead of the accumulated prefix.
    pub href: Option<String>,
}

impl CrumbOverride {
    /// Replace only the label.
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    /// Replace the label and the link target.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// Hook consulted for every segment during derivation.
///
/// Returning `None` keeps the default capitalized label and prefix href.
pub trait LabelResolver {
    fn resolve(&self, segment: &Segment<'_>) -> Option<CrumbOverride>;
}

impl<F> LabelResolver for F
where
    F: Fn(&Segment<'_>) -> Option<CrumbOverride>,
{
    fn resolve(&self, segment: &Segment<'_>) -> Option<CrumbOverride> {
        self(segment)
    }
}

/// The resolver that never overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl LabelResolver for NoOverrides {
    fn resolve(&self, _segment: &Segment<'_>) -> Option<CrumbOverride> {
        None
    }
}

/// Table-driven resolver.
///
/// Entries keyed by accumulated href win over entries keyed by segment
/// value, so a page can rename one specific item without touching other
/// paths that share the same segment text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrumbOverrides {
    by_href: BTreeMap<String, CrumbOverride>,
    by_segment: BTreeMap<String, CrumbOverride>,
}

impl CrumbOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the item whose accumulated href is `href`.
    pub fn insert_href(&mut self, href: impl Into<String>, crumb: CrumbOverride) {
        self.by_href.insert(href.into(), crumb);
    }

    /// Override every item whose segment text is `segment`.
    pub fn insert_segment(&mut self, segment: impl Into<String>, crumb: CrumbOverride) {
        self.by_segment.insert(segment.into(), crumb);
    }

    /// Builder form of [`insert_href`](Self::insert_href).
    pub fn with_href(mut self, href: impl Into<String>, crumb: CrumbOverride) -> Self {
        self.insert_href(href, crumb);
        self
    }

    /// Builder form of [`insert_segment`](Self::insert_segment).
    pub fn with_segment(mut self, segment: impl Into<String>, crumb: CrumbOverride) -> Self {
        self.insert_segment(segment, crumb);
        self
    }

    /// Drop an href override.
    pub fn remove_href(&mut self, href: &str) -> Option<CrumbOverride> {
        self.by_href.remove(href)
    }

    pub fn is_empty(&self) -> bool {
        self.by_href.is_empty() && self.by_segment.is_empty()
    }
}

impl LabelResolver for CrumbOverrides {
    fn resolve(&self, segment: &Segment<'_>) -> Option<CrumbOverride> {
        self.by_href
            .get(segment.href)
            .or_else(|| self.by_segment.get(segment.value))
            .cloned()
    }
}

/// Derive the trail for `path` with default labels.
pub fn derive(path: &str) -> Vec<BreadcrumbItem> {
    derive_with(path, &NoOverrides)
}

/// Derive the trail for `path`, consulting `resolver` for every segment.
pub fn derive_with<R>(path: &str, resolver: &R) -> Vec<BreadcrumbItem>
where
    R: LabelResolver + ?Sized,
{
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(BreadcrumbItem::home());

    let mut href = String::new();
    for (index, value) in segments.iter().copied().enumerate() {
        href.push('/');
        href.push_str(value);

        let segment = Segment {
            value,
            index,
            href: &href,
            segments: &segments,
        };

        let item = match resolver.resolve(&segment) {
            Some(CrumbOverride { label, href: Some(target) }) => BreadcrumbItem::new(label, target),
            Some(CrumbOverride { label, href: None }) => BreadcrumbItem::new(label, href.clone()),
            None => BreadcrumbItem::new(capitalize(value), href.clone()),
        };
        trail.push(item);
    }

    tracing::trace!(path, items = trail.len(), "breadcrumbs derived");
    trail
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(trail: &[BreadcrumbItem]) -> Vec<(&str, &str)> {
        trail
            .iter()
            .map(|i| (i.label.as_str(), i.href.as_str()))
            .collect()
    }

    // === Default Derivation ===

    #[test]
    fn test_root_paths_yield_home_only() {
        assert_eq!(pairs(&derive("/")), vec![("Home", "/")]);
        assert_eq!(pairs(&derive("")), vec![("Home", "/")]);
        assert_eq!(pairs(&derive("//")), vec![("Home", "/")]);
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(
            pairs(&derive("/product/42")),
            vec![("Home", "/"), ("Product", "/product"), ("42", "/product/42")]
        );
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert_eq!(
            pairs(&derive("//account///invoices/")),
            vec![("Home", "/"), ("Account", "/account"), ("Invoices", "/account/invoices")]
        );
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        assert_eq!(capitalize("forgot-password"), "Forgot-password");
        assert_eq!(capitalize("cART"), "CART");
        assert_eq!(capitalize("émile"), "Émile");
        assert_eq!(capitalize(""), "");
    }

    // === Overrides ===

    #[test]
    fn test_product_detail_override_scenario() {
        let overrides = CrumbOverrides::new()
            .with_href("/product", CrumbOverride::link("Subscriptions", "/subscriptions"))
            .with_href("/product/42", CrumbOverride::label("Wireless Mouse"));

        assert_eq!(
            pairs(&derive_with("/product/42", &overrides)),
            vec![
                ("Home", "/"),
                ("Subscriptions", "/subscriptions"),
                ("Wireless Mouse", "/product/42"),
            ]
        );
    }

    fn product_item_labels(segment: &Segment<'_>) -> Option<CrumbOverride> {
        (segment.parent() == Some("product") && segment.is_last())
            .then(|| CrumbOverride::label(format!("Item {}", segment.value)))
    }

    #[test]
    fn test_function_resolver_sees_segment_context() {
        let trail = derive_with("/product/7", &product_item_labels);
        assert_eq!(trail[2].label, "Item 7");
        assert_eq!(trail[2].href, "/product/7");
        assert_eq!(trail[1].label, "Product");
    }

    #[test]
    fn test_segment_override_applies_wherever_segment_appears() {
        let overrides = CrumbOverrides::new()
            .with_segment("forgot-password", CrumbOverride::label("Forgot Password"));
        assert_eq!(
            pairs(&derive_with("/forgot-password", &overrides)),
            vec![("Home", "/"), ("Forgot Password", "/forgot-password")]
        );
    }

    #[test]
    fn test_href_override_beats_segment_override() {
        let overrides = CrumbOverrides::new()
            .with_segment("42", CrumbOverride::label("Generic"))
            .with_href("/product/42", CrumbOverride::label("Specific"));
        assert_eq!(derive_with("/product/42", &overrides)[2].label, "Specific");
        assert_eq!(derive_with("/order/42", &overrides)[2].label, "Generic");
    }

    #[test]
    fn test_removed_override_falls_back_to_default() {
        let mut overrides =
            CrumbOverrides::new().with_href("/product/42", CrumbOverride::label("Wireless Mouse"));
        assert!(overrides.remove_href("/product/42").is_some());
        assert!(overrides.is_empty());
        assert_eq!(derive_with("/product/42", &overrides)[2].label, "42");
    }

    // === Properties ===

    proptest! {
        #[test]
        fn prop_trail_shape_matches_segments(
            segments in prop::collection::vec("[a-z0-9-]{1,8}", 0..6),
            leading in prop::bool::ANY,
            trailing in prop::bool::ANY,
        ) {
            let mut path = segments.join("/");
            if leading { path.insert(0, '/'); }
            if trailing { path.push('/'); }

            let trail = derive(&path);
            prop_assert_eq!(trail.len(), segments.len() + 1);
            prop_assert_eq!(&trail[0], &BreadcrumbItem::home());

            for i in 1..trail.len() {
                let prefix = format!("/{}", segments[..i].join("/"));
                prop_assert_eq!(&trail[i].href, &prefix);
                prop_assert_eq!(&trail[i].label, &capitalize(&segments[i - 1]));
            }
        }
    }
}
