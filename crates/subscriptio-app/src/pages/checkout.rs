use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::forms::{CheckoutForm, FormState};
use subscriptio_core::routes::AppRoute;

use super::cart::{CartSummary, SummarySkeleton};
use super::{FormError, FormField, LoadFailed, RouteMeta};
use crate::components::Region;
use crate::context::use_app;
use crate::hooks::{use_fetch, use_page_event};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::new("checkout_page_view"));

    let api = use_app().api;
    let cart = use_fetch(move || {
        let api = api.clone();
        async move { api.cart().await }
    });
    let placed = RwSignal::new(None::<CheckoutForm>);

    view! {
        <RouteMeta route=AppRoute::Checkout/>
        <h1>"Checkout"</h1>
        <Show
            when=move || placed.with(Option::is_none)
            fallback=move || view! { <Confirmation order=placed/> }
        >
            <div class="checkout-grid">
                <section class="order-summary">
                    <h2>"Order Summary"</h2>
                    <Region name="order-summary" loading=|| view! { <SummarySkeleton/> }>
                        {cart.view(
                            |cart| view! { <CartSummary cart=cart/> },
                            |_| view! { <LoadFailed message="An error occurred. Please try again."/> },
                        )}
                    </Region>
                </section>
                <Region name="checkout-form">
                    <CheckoutFormView placed=placed/>
                </Region>
            </div>
        </Show>
    }
}

#[component]
fn CheckoutFormView(placed: RwSignal<Option<CheckoutForm>>) -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.with(CheckoutForm::validate) {
            Ok(order) => {
                tracing::info!(city = %order.city, "checkout submitted");
                error.set(None);
                placed.set(Some(order));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class="checkout-form" on:submit=on_submit>
            {CheckoutForm::FIELDS
                .iter()
                .map(|&(name, label)| {
                    let kind = if name == "email" { "email" } else { "text" };
                    view! { <FormField form=form name=name label=label kind=kind/> }
                })
                .collect_view()}
            <FormError error=error/>
            <button type="submit" class="btn btn-primary">"Place Order"</button>
        </form>
    }
}

#[component]
fn Confirmation(order: RwSignal<Option<CheckoutForm>>) -> impl IntoView {
    let name = move || order.with(|o| o.as_ref().map(|o| o.full_name.clone()).unwrap_or_default());
    let email = move || order.with(|o| o.as_ref().map(|o| o.email.clone()).unwrap_or_default());

    view! {
        <section class="confirmation" role="status">
            <h2>"Thank you, " {name} "!"</h2>
            <p>"Your subscription order has been placed. A receipt is on its way to " {email} "."</p>
            <a href="/profile" class="btn btn-primary">"Manage Subscriptions"</a>
        </section>
    }
}
