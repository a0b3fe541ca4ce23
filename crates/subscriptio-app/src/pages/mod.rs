//! One view per route.

mod cart;
mod checkout;
mod forgot_password;
mod home;
mod invoices;
mod login;
mod not_found;
mod product;
mod products;
mod profile;
mod register;
mod subscriptions;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use invoices::InvoicesPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use product::ProductPage;
pub use products::ProductsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use subscriptions::SubscriptionsPage;

use leptos::prelude::*;
use subscriptio_core::forms::FormState;
use subscriptio_core::routes::AppRoute;

use crate::components::PageMeta;

/// Static title and description for `route`.
#[component]
fn RouteMeta(route: AppRoute) -> impl IntoView {
    view! {
        <PageMeta
            title=route.title().to_string()
            description=route.description().to_string()
        />
    }
}

/// Static message for a read that failed.
#[component]
fn LoadFailed(message: &'static str) -> impl IntoView {
    view! { <p class="error" role="alert">{message}</p> }
}

/// Labelled input bound to one entry of `form`.
#[component]
fn FormField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=kind
                autocomplete=autocomplete
                prop:value=move || form.with(|f| f.get(name).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(name, value));
                }
            />
        </div>
    }
}

/// Inline message for the last rejected submit, if any.
#[component]
fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <div class="form-error" role="alert">{message}</div> })
    }
}
