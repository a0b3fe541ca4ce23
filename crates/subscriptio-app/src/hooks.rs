//! Page-level hooks.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use subscriptio_core::analytics::AnalyticsEvent;
use subscriptio_core::fetch::{FetchState, MountGuard};
use subscriptio_data::FetchError;

use crate::context::use_app;

/// Display state of one read.
pub type Fetched<T> = FetchState<T, FetchError>;

// ============================================================================
// Guarded completions
// ============================================================================

/// Writes a read's result into its state slot while the issuing view is
/// mounted.
pub struct Completion<T: 'static> {
    guard: MountGuard,
    state: WriteSignal<Fetched<T>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            state: self.state,
        }
    }
}

impl<T: Send + Sync + 'static> Completion<T> {
    /// Store `result`. Returns `false` if the view has been cleaned up.
    pub fn finish(&self, result: Result<T, FetchError>) -> bool {
        let state = self.state;
        self.guard.apply(move || {
            state.try_set(FetchState::from(result));
        })
    }
}

/// A `Loading` slot owned by the calling component.
///
/// The slot's [`Completion`] stops writing once the component is cleaned
/// up.
pub fn fetch_slot<T: Send + Sync + 'static>() -> (ReadSignal<Fetched<T>>, Completion<T>) {
    let (state, set_state) = signal(Fetched::<T>::Loading);
    (state, Completion { guard: use_mount_guard(), state: set_state })
}

/// A [`MountGuard`] released when the calling component is cleaned up.
///
/// Call during component setup. Event handlers run outside the component's
/// owner, so they must capture a guard created here.
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    let release = guard.clone();
    on_cleanup(move || release.release());
    guard
}

/// Await `task`, then run `apply` with its output if `guard` is still
/// mounted.
pub async fn guarded<T>(
    guard: MountGuard,
    task: impl Future<Output = T>,
    apply: impl FnOnce(T),
) -> bool {
    let value = task.await;
    guard.apply(move || apply(value))
}

/// Spawn [`guarded`] on the UI thread.
pub fn spawn_guarded<T: 'static>(
    guard: &MountGuard,
    task: impl Future<Output = T> + 'static,
    apply: impl FnOnce(T) + 'static,
) {
    let guard = guard.clone();
    spawn_local(async move {
        guarded(guard, task, apply).await;
    });
}

// ============================================================================
// Reads
// ============================================================================

/// One read issued when a view mounts.
pub struct Fetch<T: 'static> {
    state: ReadSignal<Fetched<T>>,
    settled: LocalResource<()>,
}

impl<T> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Fetch<T> {}

/// Issue `fetch` on mount.
///
/// The request runs as a local resource, so [`Fetch::view`] suspends the
/// nearest `Suspense` until it settles. Its result is written through a
/// [`Completion`], so a response that arrives after the page was left is
/// discarded.
pub fn use_fetch<T, F, Fut>(fetch: F) -> Fetch<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let (state, completion) = fetch_slot();
    let settled = LocalResource::new(move || {
        let completion = completion.clone();
        let request = fetch();
        async move {
            completion.finish(request.await);
        }
    });
    Fetch { state, settled }
}

impl<T: Clone + Send + Sync + 'static> Fetch<T> {
    /// Current state, tracked. Never suspends.
    pub fn with<R>(&self, f: impl FnOnce(&Fetched<T>) -> R) -> R {
        self.state.with(f)
    }

    /// Data view or failure view, rendered once the read settles.
    ///
    /// While the request is in flight the enclosing region shows its
    /// loading placeholder.
    pub fn view<V, W>(
        self,
        ready: impl Fn(T) -> V + Send + Sync + 'static,
        failed: impl Fn(FetchError) -> W + Send + Sync + 'static,
    ) -> impl IntoView
    where
        V: IntoView + 'static,
        W: IntoView + 'static,
    {
        let Fetch { state, settled } = self;
        // Reading `settled` registers the read with the enclosing Suspense.
        move || {
            settled.get().map(|_| match state.get() {
                FetchState::Loading => ().into_any(),
                FetchState::Ready(data) => ready(data).into_any(),
                FetchState::Failed(error) => failed(error).into_any(),
            })
        }
    }
}

/// Record the page's analytics event once per mount.
pub fn use_page_event(event: AnalyticsEvent) {
    let app = use_app();
    tracing::debug!(event = %event.name, "page event");
    app.analytics.track(event);
}
