use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::forms::{FormState, RegisterForm};
use subscriptio_core::routes::AppRoute;

use super::{FormError, FormField, RouteMeta};
use crate::hooks::use_page_event;

#[component]
pub fn RegisterPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_titled("Register"));

    let form = RwSignal::new(FormState::new());
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(RegisterForm::validate) {
            Ok(account) => {
                tracing::info!(email = %account.email, "account registered");
                error.set(None);
                navigate(&AppRoute::Subscriptions.path(), NavigateOptions::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <RouteMeta route=AppRoute::Register/>
        <h1>"Register for Subscriptions"</h1>
        <form class="auth-form" on:submit=on_submit autocomplete="off">
            <FormField form=form name="email" label="Email" kind="email"/>
            <FormField form=form name="password" label="Password" kind="password"/>
            <FormField form=form name="confirmPassword" label="Confirm Password" kind="password"/>
            <FormError error=error/>
            <button type="submit" class="btn btn-primary">"Register"</button>
        </form>
        <p class="auth-links">
            "Already have an account? " <a href="/login">"Login"</a>
        </p>
    }
}
