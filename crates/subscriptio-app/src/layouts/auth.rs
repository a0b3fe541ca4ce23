use leptos::prelude::*;
use subscriptio_core::breadcrumb::{CrumbOverride, CrumbOverrides};
use subscriptio_core::routes::{LayoutKind, AUTH_SUBNAV};

use super::Shell;
use crate::context::ThemeHandle;

/// Shell for sign-in pages: a narrow card under an auth sub-navigation.
#[component]
pub fn AuthLayout(theme: ThemeHandle, children: Children) -> impl IntoView {
    let overrides = CrumbOverrides::new()
        .with_segment("forgot-password", CrumbOverride::label("Forgot Password"));

    view! {
        <Shell kind=LayoutKind::Auth theme=theme overrides=overrides>
            <div class="auth-card">
                <nav aria-label="Account" class="auth-subnav">
                    {AUTH_SUBNAV
                        .iter()
                        .map(|link| view! { <a href=link.href>{link.label}</a> })
                        .collect_view()}
                </nav>
                {children()}
            </div>
        </Shell>
    }
}
