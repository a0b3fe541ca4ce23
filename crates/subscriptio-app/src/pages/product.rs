use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::breadcrumb::CrumbOverride;
use subscriptio_core::routes::AppRoute;
use subscriptio_data::models::ProductDetail;

use super::NotFoundPage;
use crate::components::{PageMeta, Region, Spinner};
use crate::context::{use_app, use_crumbs};
use crate::hooks::{use_fetch, use_page_event};

/// `/product/:id`.
#[component]
pub fn ProductPage(id: String) -> impl IntoView {
    use_page_event(AnalyticsEvent::view_product(&id));

    let api = use_app().api;
    let fetch_id = id.clone();
    let product = use_fetch(move || {
        let api = api.clone();
        let id = fetch_id.clone();
        async move { api.product(&id).await }
    });

    // Once the product is known, the trail reads Home / Subscriptions / name.
    if let Some(crumbs) = use_crumbs() {
        let href = AppRoute::Product(id).path();
        Effect::new(move |_| {
            if let Some(name) = product.with(|state| state.data().map(|d| d.name.clone())) {
                crumbs.scoped_href(
                    "/product",
                    CrumbOverride::link("Subscriptions", AppRoute::Subscriptions.path()),
                );
                crumbs.scoped_href(href.clone(), CrumbOverride::label(name));
            }
        });
    }

    let title = Signal::derive(move || {
        product.with(|state| match state.data() {
            Some(detail) => detail.name.clone(),
            None => AppRoute::Product(String::new()).title().to_string(),
        })
    });
    let description = Signal::derive(move || {
        product.with(|state| match state.data() {
            Some(detail) => detail.description.clone(),
            None => AppRoute::Product(String::new()).description().to_string(),
        })
    });

    view! {
        <Region name="product" loading=|| view! { <Spinner/> }>
            {product.view(
                move |detail| view! {
                    <PageMeta title=title description=description/>
                    <ProductInfo detail=detail/>
                },
                |e| {
                    tracing::debug!(error = %e, "product unavailable, showing not found");
                    view! { <NotFoundPage/> }
                },
            )}
        </Region>
    }
}

#[component]
fn ProductInfo(detail: ProductDetail) -> impl IntoView {
    view! {
        <article class="product-detail">
            <img class="product-image" src=detail.image alt=detail.name.clone()/>
            <div class="product-summary">
                <h1>{detail.name}</h1>
                <p class="description">{detail.description}</p>
                <a href=AppRoute::Cart.path() class="btn btn-primary">"Subscribe"</a>
            </div>
        </article>
    }
}
