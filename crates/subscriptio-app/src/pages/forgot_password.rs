use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::forms::{ForgotPasswordForm, FormState};
use subscriptio_core::routes::AppRoute;

use super::{FormError, FormField, RouteMeta};
use crate::hooks::use_page_event;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_titled("Forgot Password"));

    let form = RwSignal::new(FormState::new());
    let error = RwSignal::new(None::<String>);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ForgotPasswordForm::validate) {
            Ok(request) => {
                error.set(None);
                sent_to.set(Some(request.email));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <RouteMeta route=AppRoute::ForgotPassword/>
        <h1>"Reset your password"</h1>
        <Show
            when=move || sent_to.with(Option::is_none)
            fallback=move || view! {
                <p class="confirmation" role="status">
                    "If an account exists for " {move || sent_to.get().unwrap_or_default()}
                    ", a reset link is on its way."
                </p>
                <a href="/login">"Back to Login"</a>
            }
        >
            <form class="auth-form" on:submit=on_submit>
                <FormField form=form name="email" label="Email address" kind="email" autocomplete="email"/>
                <FormError error=error/>
                <button type="submit" class="btn btn-primary">"Send reset link"</button>
            </form>
        </Show>
    }
}
