use chrono::Datelike;
use leptos::prelude::*;
use subscriptio_core::routes::FOOTER_LINKS;

use crate::context::use_app;

#[component]
pub fn Footer() -> impl IntoView {
    let site_name = use_app().config.site_name.clone();
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div>{format!("\u{a9} {year} {site_name}. All rights reserved.")}</div>
            <nav aria-label="Footer navigation">
                <ul>
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                        .collect_view()}
                </ul>
            </nav>
        </footer>
    }
}
