use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::forms::{Authenticator, DemoAuthenticator, FormState, LoginForm};
use subscriptio_core::routes::AppRoute;

use super::{FormError, FormField, RouteMeta};
use crate::hooks::{spawn_guarded, use_mount_guard, use_page_event};

#[component]
pub fn LoginPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::new("login_page_view"));

    let form = RwSignal::new(FormState::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let navigate = use_navigate();
    let mounted = use_mount_guard();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match form.with_untracked(LoginForm::validate) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        pending.set(true);
        let navigate = navigate.clone();
        spawn_guarded(
            &mounted,
            async move { DemoAuthenticator::default().authenticate(&credentials).await },
            move |result| {
                pending.set(false);
                match result {
                    Ok(()) => navigate(&AppRoute::Profile.path(), NavigateOptions::default()),
                    Err(e) => {
                        tracing::debug!(error = %e, "login rejected");
                        error.set(Some(e.to_string()));
                    }
                }
            },
        );
    };

    view! {
        <RouteMeta route=AppRoute::Login/>
        <h1>"Sign in to your account"</h1>
        <form class="auth-form" on:submit=on_submit>
            <FormField form=form name="email" label="Email address" kind="email" autocomplete="email"/>
            <FormField
                form=form
                name="password"
                label="Password"
                kind="password"
                autocomplete="current-password"
            />
            <FormError error=error/>
            <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
        <p class="auth-links">
            "Don't have an account? " <a href="/register">"Sign up"</a>
        </p>
        <p class="auth-links">
            <a href="/forgot-password">"Forgot password?"</a>
        </p>
    }
}
