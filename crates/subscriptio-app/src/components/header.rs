use leptos::prelude::*;
use subscriptio_core::menu::{MenuEvent, MenuState};
use subscriptio_core::routes::{LayoutKind, NavLink};

use super::ThemeToggle;
use crate::context::{use_app, ThemeHandle};

/// Site header for one shell family.
#[component]
pub fn Header(kind: LayoutKind, theme: ThemeHandle) -> impl IntoView {
    let site_name = use_app().config.site_name.clone();
    let links = kind.nav_links();

    let actions = match kind {
        LayoutKind::Main => ().into_any(),
        LayoutKind::Admin => view! {
            <a href="/login" class="btn btn-primary">"Login"</a>
        }
        .into_any(),
        LayoutKind::Auth => view! {
            <a href="/login" class="btn btn-primary">"Login"</a>
            <a href="/register" class="btn btn-secondary">"Register"</a>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="/" class="brand">{site_name}</a>
                <nav aria-label="Main navigation" class="desktop-nav">
                    <ul>
                        {links
                            .iter()
                            .map(|link| view! { <li><a href=link.href>{link.label}</a></li> })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="header-actions">
                    <ThemeToggle theme=theme/>
                    {actions}
                </div>
                <MobileNav links=links/>
            </div>
        </header>
    }
}

/// Reactive holder for one header's [`MenuState`].
#[derive(Clone, Copy)]
struct MenuHandle(RwSignal<MenuState>);

impl MenuHandle {
    fn new() -> Self {
        Self(RwSignal::new(MenuState::default()))
    }

    fn send(&self, event: MenuEvent) {
        self.0.update(|state| *state = state.on(event));
    }

    fn get(&self) -> MenuState {
        self.0.get()
    }
}

/// Collapsible navigation for narrow screens.
#[component]
pub fn MobileNav(links: &'static [NavLink]) -> impl IntoView {
    let menu = MenuHandle::new();
    let send = move |event: MenuEvent| menu.send(event);

    view! {
        <div class="mobile-nav">
            <button
                type="button"
                aria-label=move || menu.get().button_label()
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=move |_| send(MenuEvent::ToggleButton)
            >
                <span class="hamburger" aria-hidden="true"></span>
            </button>
            <Show when=move || menu.get().is_open()>
                <nav aria-label="Mobile navigation" class="mobile-menu">
                    <ul>
                        {links
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href
                                            on:click=move |_| send(MenuEvent::NavigationLink)
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_handle_toggles_and_closes_on_link() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MenuHandle::new();
            assert_eq!(menu.get(), MenuState::Closed);

            menu.send(MenuEvent::ToggleButton);
            assert!(menu.get().is_open());
            assert_eq!(menu.get().button_label(), "Close navigation menu");

            menu.send(MenuEvent::NavigationLink);
            assert_eq!(menu.get(), MenuState::Closed);

            menu.send(MenuEvent::ToggleButton);
            menu.send(MenuEvent::ToggleButton);
            assert_eq!(menu.get(), MenuState::Closed);
        });
    }

    #[test]
    fn test_each_header_has_its_own_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let main = MenuHandle::new();
            let admin = MenuHandle::new();

            main.send(MenuEvent::ToggleButton);
            assert!(main.get().is_open());
            assert!(!admin.get().is_open());
        });
    }
}
