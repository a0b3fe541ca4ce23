//! Root component and route dispatch.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use subscriptio_core::routes::{AppRoute, LayoutKind};

use crate::context::{AppContext, ThemeHandle};
use crate::layouts::{AdminLayout, AuthLayout, MainLayout};
use crate::pages::*;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(context: AppContext) -> impl IntoView {
    provide_meta_context();

    let theme = ThemeHandle::load(&context.config.theme_key);
    let site_name = context.config.site_name.clone();
    provide_context(context);

    // Every path is matched by `AppRoute::parse`; the router only tracks the
    // location.
    let routed = move || view! { <RoutedPage theme=theme/> };

    view! {
        <Title text=site_name/>

        <Router>
            <Routes fallback=routed>
                <Route path=path!("") view=routed/>
                <Route path=path!("/*any") view=routed/>
            </Routes>
        </Router>
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// The current location's page inside its layout shell.
///
/// The shell and page are rebuilt whenever the parsed route changes.
#[component]
fn RoutedPage(theme: ThemeHandle) -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::parse(&location.pathname.get()));

    move || {
        let route = route.get();
        tracing::debug!(%route, "rendering route");
        match route.layout() {
            LayoutKind::Main => {
                view! { <MainLayout theme=theme>{page(route)}</MainLayout> }.into_any()
            }
            LayoutKind::Admin => {
                view! { <AdminLayout theme=theme>{page(route)}</AdminLayout> }.into_any()
            }
            LayoutKind::Auth => {
                view! { <AuthLayout theme=theme>{page(route)}</AuthLayout> }.into_any()
            }
        }
    }
}

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage/> }.into_any(),
        AppRoute::Subscriptions => view! { <SubscriptionsPage/> }.into_any(),
        AppRoute::Products => view! { <ProductsPage/> }.into_any(),
        AppRoute::Product(id) => view! { <ProductPage id=id/> }.into_any(),
        AppRoute::Cart => view! { <CartPage/> }.into_any(),
        AppRoute::Checkout => view! { <CheckoutPage/> }.into_any(),
        AppRoute::Invoices => view! { <InvoicesPage/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Register => view! { <RegisterPage/> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage/> }.into_any(),
        AppRoute::NotFound(_) => view! { <NotFoundPage/> }.into_any(),
    }
}
