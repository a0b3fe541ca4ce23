//! Page shells: header, breadcrumb trail, content and footer.

mod admin;
mod auth;
mod main;

pub use admin::AdminLayout;
pub use auth::AuthLayout;
pub use main::MainLayout;

use leptos::prelude::*;
use subscriptio_core::breadcrumb::CrumbOverrides;
use subscriptio_core::routes::LayoutKind;

use crate::components::{Breadcrumbs, Footer, Header, LineSkeleton, Region, Spinner};
use crate::context::{CrumbContext, ThemeHandle};

/// Frame shared by every shell family.
///
/// Provides a fresh [`CrumbContext`] seeded with `overrides`, so pages
/// rendered in the slot can rename items in this shell's trail.
#[component]
fn Shell(
    kind: LayoutKind,
    theme: ThemeHandle,
    #[prop(optional)] overrides: CrumbOverrides,
    children: Children,
) -> impl IntoView {
    provide_context(CrumbContext::new(overrides));

    let class = match kind {
        LayoutKind::Main => "layout layout-main",
        LayoutKind::Admin => "layout layout-admin",
        LayoutKind::Auth => "layout layout-auth",
    };

    view! {
        <div class=class>
            <Header kind=kind theme=theme/>
            <main class="container">
                <Region
                    name="breadcrumbs"
                    loading=|| view! { <LineSkeleton width="30%"/> }
                >
                    <Breadcrumbs/>
                </Region>
                <Region name="content" loading=|| view! { <Spinner/> }>
                    {children()}
                </Region>
            </main>
            <Footer/>
        </div>
    }
}
