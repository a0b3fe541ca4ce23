use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use subscriptio_core::routes::document_title;

use crate::context::use_app;

/// Document title and description for a page.
///
/// The title is suffixed with the site name.
#[component]
pub fn PageMeta(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    #[prop(optional)] noindex: bool,
) -> impl IntoView {
    let site_name = use_app().config.site_name.clone();
    let full_title = move || title.with(|page| document_title(page, &site_name));

    view! {
        <Title text=full_title/>
        <Meta name="description" content=move || description.get()/>
        {noindex.then(|| view! { <Meta name="robots" content="noindex, follow"/> })}
    }
}
