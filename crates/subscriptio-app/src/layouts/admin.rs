use leptos::prelude::*;
use subscriptio_core::routes::LayoutKind;

use super::Shell;
use crate::context::ThemeHandle;

/// Shell for account pages; its navigation adds Invoices.
#[component]
pub fn AdminLayout(theme: ThemeHandle, children: Children) -> impl IntoView {
    view! {
        <Shell kind=LayoutKind::Admin theme=theme>
            {children()}
        </Shell>
    }
}
