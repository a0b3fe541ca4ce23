use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::error::RenderError;
use subscriptio_core::money::Money;
use subscriptio_core::routes::AppRoute;
use subscriptio_data::models::{Cart, CartLine};

use super::{LoadFailed, RouteMeta};
use crate::components::{LineSkeleton, Region};
use crate::context::use_app;
use crate::hooks::{use_fetch, use_page_event};

#[component]
pub fn CartPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::new("cart_view"));

    let api = use_app().api;
    let cart = use_fetch(move || {
        let api = api.clone();
        async move { api.cart().await }
    });

    view! {
        <RouteMeta route=AppRoute::Cart/>
        <h1>"Your Subscription Cart"</h1>
        <Region
            name="cart"
            fallback="We couldn't total your cart. Please contact support."
            loading=|| view! { <p class="loading">"Loading cart..."</p> }
        >
            {cart.view(
                |cart| view! { <CartContents cart=cart/> },
                |_| view! { <LoadFailed message="Failed to load your cart."/> },
            )}
        </Region>
        <div class="cart-actions">
            <a href="/subscriptions">"Continue Shopping"</a>
            <a href="/checkout" class="btn btn-primary">"Proceed to Checkout"</a>
        </div>
    }
}

#[component]
fn CartContents(cart: Cart) -> impl IntoView {
    if cart.is_empty() {
        return view! { <p class="empty">"Your cart is empty."</p> }.into_any();
    }

    view! {
        <ul class="cart-items">
            {cart.items.iter().cloned().map(cart_item).collect_view()}
        </ul>
        <CartSummary cart=cart/>
    }
    .into_any()
}

/// Amount that does not fit in the cart's arithmetic.
fn overflow(what: impl std::fmt::Display) -> RenderError {
    RenderError::content("cart", format!("{what} overflows"))
}

fn cart_item(line: CartLine) -> Result<AnyView, RenderError> {
    let total = line
        .line_total()
        .ok_or_else(|| overflow(format_args!("line total for {}", line.product_id)))?;

    Ok(view! {
        <li class="cart-item">
            <a href=AppRoute::Product(line.product_id.clone()).path()>{line.name.clone()}</a>
            <span class="quantity">{line.unit_price().to_string()} " x " {line.quantity}</span>
            <span class="line-total">{total.to_string()}</span>
        </li>
    }
    .into_any())
}

/// Count and total for a loaded cart. Fails its region if the total cannot
/// be computed.
#[component]
pub(super) fn CartSummary(cart: Cart) -> impl IntoView {
    summary(&cart)
}

fn summary(cart: &Cart) -> Result<AnyView, RenderError> {
    let total: Money = cart.total().ok_or_else(|| overflow("cart total"))?;

    Ok(view! {
        <div class="cart-summary">
            <p>{cart.item_count()} " item(s)"</p>
            <p class="total">"Total: " {total.to_string()}</p>
        </div>
    }
    .into_any())
}

/// Loading placeholder for a summary panel.
#[component]
pub(super) fn SummarySkeleton() -> impl IntoView {
    view! {
        <div class="cart-summary">
            <LineSkeleton width="40%"/>
            <LineSkeleton width="60%"/>
        </div>
    }
}
