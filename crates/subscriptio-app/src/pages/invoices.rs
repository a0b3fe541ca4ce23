use leptos::prelude::*;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::error::RenderError;
use subscriptio_core::routes::AppRoute;
use subscriptio_data::models::Invoice;

use super::{LoadFailed, RouteMeta};
use crate::components::{Region, TableSkeleton};
use crate::context::use_app;
use crate::hooks::{use_fetch, use_page_event};

#[component]
pub fn InvoicesPage() -> impl IntoView {
    use_page_event(AnalyticsEvent::page_view_named("invoices"));

    let api = use_app().api;
    let invoices = use_fetch(move || {
        let api = api.clone();
        async move { api.invoices().await }
    });

    view! {
        <RouteMeta route=AppRoute::Invoices/>
        <h1>"Invoices"</h1>
        <Region
            name="invoices"
            fallback="Something went wrong loading invoices."
            loading=|| view! {
                <p class="loading">"Loading invoices..."</p>
                <TableSkeleton/>
            }
        >
            {invoices.view(
                |invoices| view! { <InvoiceTable invoices=invoices/> },
                |_| view! { <LoadFailed message="Failed to load invoices."/> },
            )}
        </Region>
        <a href="/profile">"Back to Account"</a>
    }
}

#[component]
fn InvoiceTable(invoices: Vec<Invoice>) -> impl IntoView {
    if invoices.is_empty() {
        return view! { <p class="empty">"No invoices found."</p> }.into_any();
    }

    view! {
        <table class="invoices">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Download"</th>
                </tr>
            </thead>
            <tbody>
                {invoices.into_iter().map(invoice_row).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

/// A row needs somewhere to download the PDF from; without it the table
/// region fails as a whole.
fn invoice_row(invoice: Invoice) -> Result<AnyView, RenderError> {
    if invoice.download_url.trim().is_empty() {
        return Err(RenderError::MissingData(format!(
            "download link for invoice {}",
            invoice.id
        )));
    }

    Ok(view! {
        <tr>
            <td>{invoice.display_date()}</td>
            <td>{invoice.amount().to_string()}</td>
            <td class="status">{invoice.status}</td>
            <td>
                <a href=invoice.download_url target="_blank" rel="noopener noreferrer">
                    "PDF"
                </a>
            </td>
        </tr>
    }
    .into_any())
}
