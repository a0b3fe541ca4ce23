use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::routes::AppRoute;
use subscriptio_data::models::SubscriptionProduct;

use super::{LoadFailed, RouteMeta};
use crate::components::{ProductGrid, ProductGridSkeleton, Region};
use crate::context::use_app;
use crate::hooks::{use_fetch, use_page_event};

/// Grid of the subscription catalogue, read once per mount and narrowed by
/// `query` when given.
#[component]
pub(super) fn Catalog(#[prop(optional, into)] query: Option<Signal<String>>) -> impl IntoView {
    let api = use_app().api;
    let products = use_fetch(move || {
        let api = api.clone();
        async move { api.subscription_products().await }
    });

    view! {
        <Region name="catalog" loading=|| view! { <ProductGridSkeleton/> }>
            {products.view(
                move |products: Vec<SubscriptionProduct>| {
                    move || {
                        let shown: Vec<_> = match query {
                            Some(query) => query.with(|q| {
                                products.iter().filter(|p| p.matches(q)).cloned().collect()
                            }),
                            None => products.clone(),
                        };
                        view! { <ProductGrid products=shown/> }
                    }
                },
                |_| view! { <LoadFailed message="Failed to load subscriptions."/> },
            )}
        </Region>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_path("/products"));

    view! {
        <RouteMeta route=AppRoute::Products/>
        <h1>"Subscription Products"</h1>
        <Catalog/>
    }
}
