use leptos::prelude::*;
use leptos_router::hooks::use_location;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::routes::AppRoute;

use crate::components::PageMeta;
use crate::hooks::use_page_event;

/// Fallback for unknown paths and for products that failed to load.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    use_page_event(AnalyticsEvent::page_not_found(&path));

    let route = AppRoute::NotFound(path);

    view! {
        <PageMeta
            title=route.title().to_string()
            description=route.description().to_string()
            noindex=true
        />
        <section class="not-found">
            <p class="status-code">"404"</p>
            <h1>"Page Not Found"</h1>
            <p>
                "Sorry, we couldn't find the page you're looking for. "
                "Explore our subscription plans and exclusive offers."
            </p>
            <div class="actions">
                <a href="/" class="btn btn-primary">"Go to Home"</a>
                <a href="/subscriptions" class="btn btn-secondary">"View Subscriptions"</a>
            </div>
        </section>
    }
}
