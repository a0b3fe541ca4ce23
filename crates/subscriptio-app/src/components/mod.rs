//! Building blocks shared by the layout shells and pages.

mod breadcrumbs;
mod footer;
mod header;
mod meta;
mod product_card;
mod region;
mod skeletons;
mod theme_toggle;

pub use breadcrumbs::Breadcrumbs;
pub use footer::Footer;
pub use header::{Header, MobileNav};
pub use meta::PageMeta;
pub use product_card::{ProductCard, ProductGrid};
pub use region::Region;
pub use skeletons::{
    CardSkeleton, LineSkeleton, ProductGridSkeleton, Spinner, TableSkeleton,
};
pub use theme_toggle::ThemeToggle;
