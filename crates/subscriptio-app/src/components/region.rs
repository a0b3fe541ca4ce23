use leptos::prelude::*;
use subscriptio_core::boundary::{RegionOutcome, RegionPolicy};
use subscriptio_core::error::RenderError;

/// A lazily loaded part of a page behind its own loading and failure
/// boundaries.
///
/// `loading` is shown while a [`Fetch`](crate::hooks::Fetch) rendered inside
/// is in flight. Render failures inside the region (a view returning `Err`)
/// replace only this region with its fallback message.
#[component]
pub fn Region(
    #[prop(into)] name: String,
    /// Message shown if the region fails to render.
    #[prop(into, optional)]
    fallback: Option<String>,
    /// Placeholder while the region's content is pending.
    #[prop(optional, into)]
    loading: ViewFn,
    children: Children,
) -> impl IntoView {
    let mut policy = RegionPolicy::new(name);
    if let Some(message) = fallback {
        policy = policy.with_fallback(message);
    }

    let on_error = move |errors: ArcRwSignal<Errors>| {
        let detail = errors.with(|errors| {
            errors
                .iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        });
        let outcome: RegionOutcome<()> =
            policy.settle(Err(RenderError::content(policy.name.clone(), detail)));
        let message = match outcome {
            RegionOutcome::Fallback(message) => message,
            RegionOutcome::Rendered(()) => String::new(),
        };
        view! { <div class="region-error" role="alert">{message}</div> }
    };

    view! {
        <ErrorBoundary fallback=on_error>
            <Suspense fallback=move || loading.run()>{children()}</Suspense>
        </ErrorBoundary>
    }
}
