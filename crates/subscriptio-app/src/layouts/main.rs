use leptos::prelude::*;
use subscriptio_core::routes::LayoutKind;

use super::Shell;
use crate::context::ThemeHandle;

/// Shell for the public storefront pages.
#[component]
pub fn MainLayout(theme: ThemeHandle, children: Children) -> impl IntoView {
    view! {
        <Shell kind=LayoutKind::Main theme=theme>
            {children()}
        </Shell>
    }
}
