use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::forms::{FormState, NewsletterForm};
use subscriptio_core::routes::AppRoute;

use super::products::Catalog;
use super::{FormError, FormField, RouteMeta};
use crate::components::Region;
use crate::context::use_app;
use crate::hooks::use_page_event;

/// Landing page: banner, the popular subscriptions and a newsletter signup.
#[component]
pub fn HomePage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_path("/home"));

    view! {
        <RouteMeta route=AppRoute::Home/>
        <Region name="featured-banner">
            <FeaturedBanner/>
        </Region>
        <section class="popular">
            <h2>"Popular Subscriptions"</h2>
            <Catalog/>
        </section>
        <Region name="newsletter">
            <NewsletterSignup/>
        </Region>
    }
}

#[component]
fn FeaturedBanner() -> impl IntoView {
    let site_name = use_app().config.site_name.clone();

    view! {
        <section class="hero">
            <h1>"Welcome to " {site_name}</h1>
            <p>"Curated plans, exclusive deals and one place to manage every recurring order."</p>
            <a href=AppRoute::Subscriptions.path() class="btn btn-primary">"Browse Subscriptions"</a>
        </section>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let app = use_app();
    let form = RwSignal::new(FormState::new());
    let error = RwSignal::new(None::<String>);
    let joined = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(NewsletterForm::validate) {
            Ok(_) => {
                app.analytics.track(AnalyticsEvent::new("newsletter_signup"));
                error.set(None);
                joined.set(true);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="newsletter">
            <h2>"Stay in the loop"</h2>
            <Show
                when=move || !joined.get()
                fallback=|| view! { <p class="confirmation" role="status">"Thanks for subscribing!"</p> }
            >
                <form class="newsletter-form" on:submit=on_submit.clone()>
                    <FormField
                        form=form
                        name="newsletterEmail"
                        label="Email address"
                        kind="email"
                        autocomplete="email"
                    />
                    <FormError error=error/>
                    <button type="submit" class="btn btn-secondary">"Sign up"</button>
                </form>
            </Show>
        </section>
    }
}
