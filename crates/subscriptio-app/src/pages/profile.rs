use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::routes::AppRoute;
use subscriptio_data::models::{display_date, ActiveSubscription, Profile};

use super::{LoadFailed, RouteMeta};
use crate::components::{CardSkeleton, Region};
use crate::context::use_app;
use crate::hooks::{use_fetch, use_page_event};

#[component]
pub fn ProfilePage() -> impl IntoView {
    use_page_event(AnalyticsEvent::new("profile_page_view"));

    let api = use_app().api;
    let data = use_fetch(move || {
        let api = api.clone();
        async move { api.profile().await }
    });

    view! {
        <RouteMeta route=AppRoute::Profile/>
        <h1>"Your Profile"</h1>
        <Region name="profile" loading=|| view! { <CardSkeleton/> }>
            {data.view(
                |data| view! {
                    <Region name="profile-details">
                        <ProfileDetails profile=data.profile/>
                    </Region>
                    <section class="subscriptions">
                        <h2>"Your Subscriptions"</h2>
                        <Region name="subscription-list">
                            <SubscriptionList subscriptions=data.subscriptions/>
                        </Region>
                    </section>
                },
                |_| view! { <LoadFailed message="Unable to load profile"/> },
            )}
        </Region>
        <Region name="subscription-actions">
            <SubscriptionActions/>
        </Region>
    }
}

#[component]
fn ProfileDetails(profile: Profile) -> impl IntoView {
    view! {
        <dl class="profile-details">
            <dt>"Name"</dt>
            <dd>{profile.name}</dd>
            <dt>"Email"</dt>
            <dd>{profile.email}</dd>
            {profile.member_since.map(|since| view! {
                <dt>"Member since"</dt>
                <dd>{display_date(&since)}</dd>
            })}
        </dl>
    }
}

#[component]
fn SubscriptionList(subscriptions: Vec<ActiveSubscription>) -> impl IntoView {
    if subscriptions.is_empty() {
        return view! {
            <p class="empty">"You have no active subscriptions. "
                <a href="/subscriptions">"Browse plans"</a>
            </p>
        }
        .into_any();
    }

    view! {
        <ul class="subscription-list">
            {subscriptions
                .into_iter()
                .map(|sub| {
                    let price = sub.price().map(|p| p.to_string());
                    let next = sub.next_billing_date.as_deref().map(display_date);
                    view! {
                        <li>
                            <strong>{sub.name}</strong>
                            <span class="status">{sub.status}</span>
                            {price.map(|p| view! { <span class="price">{p}</span> })}
                            {next.map(|d| view! { <span class="next-billing">"Next billing: " {d}</span> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

/// Shortcuts for managing the account's plans.
#[component]
fn SubscriptionActions() -> impl IntoView {
    view! {
        <section class="subscription-actions">
            <h2>"Manage"</h2>
            <a href=AppRoute::Subscriptions.path() class="btn btn-primary">"Add a subscription"</a>
            <a href=AppRoute::Invoices.path() class="btn btn-secondary">"View Invoices"</a>
            <a href=AppRoute::Cart.path() class="btn btn-secondary">"Review cart"</a>
        </section>
    }
}
