use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::routes::AppRoute;

use super::products::Catalog;
use super::RouteMeta;
use crate::hooks::use_page_event;

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_path("/subscriptions"));

    let query = RwSignal::new(String::new());

    view! {
        <RouteMeta route=AppRoute::Subscriptions/>
        <h1>"Subscriptions"</h1>
        <div class="subscription-filter">
            <label for="subscription-filter">"Filter"</label>
            <input
                id="subscription-filter"
                type="search"
                placeholder="Search plans"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
        <Catalog query=query/>
    }
}
