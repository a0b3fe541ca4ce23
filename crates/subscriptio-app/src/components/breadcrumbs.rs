use leptos::prelude::*;
use leptos_router::hooks::use_location;
use subscriptio_core::breadcrumb::{self, BreadcrumbItem, CrumbOverrides};

use crate::context::use_crumbs;

/// Trail for the current path, honoring the shell's overrides.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let crumbs = use_crumbs();

    let trail = Memo::new(move |_| {
        let path = location.pathname.get();
        match crumbs {
            Some(ctx) => ctx.0.with(|overrides| breadcrumb::derive_with(&path, overrides)),
            None => breadcrumb::derive_with(&path, &CrumbOverrides::new()),
        }
    });

    view! {
        <nav aria-label="Breadcrumb" class="breadcrumbs">
            <ol>
                {move || {
                    let items = trail.get();
                    let last = items.len().saturating_sub(1);
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(i, item)| view! { <Crumb item=item current={i == last}/> })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

#[component]
fn Crumb(item: BreadcrumbItem, current: bool) -> impl IntoView {
    if current {
        view! {
            <li>
                <span aria-current="page">{item.label}</span>
            </li>
        }
        .into_any()
    } else {
        view! {
            <li>
                <a href=item.href>{item.label}</a>
                <span class="separator" aria-hidden="true">"/"</span>
            </li>
        }
        .into_any()
    }
}
