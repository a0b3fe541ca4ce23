//! Loading placeholders.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}

/// One shimmering bar.
#[component]
pub fn LineSkeleton(#[prop(default = "100%")] width: &'static str) -> impl IntoView {
    view! { <div class="skeleton skeleton-line" style:width=width></div> }
}

#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton skeleton-image"></div>
            <div class="product-info">
                <LineSkeleton width="80%"/>
                <LineSkeleton width="40%"/>
            </div>
        </div>
    }
}

#[component]
pub fn ProductGridSkeleton(#[prop(default = 4)] count: usize) -> impl IntoView {
    view! {
        <div class="products">
            {(0..count).map(|_| view! { <CardSkeleton/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn TableSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="table-skeleton">
            {(0..rows).map(|_| view! { <LineSkeleton/> }).collect_view()}
        </div>
    }
}
