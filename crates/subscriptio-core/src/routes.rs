//! The storefront's route table.

use std::fmt;

/// Which layout shell wraps a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Public storefront pages.
    Main,
    /// Account pages (invoices, profile).
    Admin,
    /// Sign-in, sign-up and password reset.
    Auth,
}

impl LayoutKind {
    /// Header links for this shell, in display order.
    pub fn nav_links(&self) -> &'static [NavLink] {
        match self {
            Self::Main => MAIN_NAV,
            Self::Admin => ADMIN_NAV,
            Self::Auth => AUTH_NAV,
        }
    }
}

/// A header or footer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

const MAIN_NAV: &[NavLink] = &[
    NavLink::new("Subscriptions", "/subscriptions"),
    NavLink::new("Products", "/products"),
    NavLink::new("Cart", "/cart"),
    NavLink::new("Profile", "/profile"),
    NavLink::new("Login", "/login"),
];

const ADMIN_NAV: &[NavLink] = &[
    NavLink::new("Subscriptions", "/subscriptions"),
    NavLink::new("Products", "/products"),
    NavLink::new("Cart", "/cart"),
    NavLink::new("Invoices", "/invoices"),
    NavLink::new("Profile", "/profile"),
];

const AUTH_NAV: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Subscriptions", "/subscriptions"),
    NavLink::new("Products", "/products"),
];

/// Links in the auth shell's sub-navigation.
pub const AUTH_SUBNAV: &[NavLink] = &[
    NavLink::new("Login", "/login"),
    NavLink::new("Register", "/register"),
];

/// Links in every footer.
pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink::new("Privacy Policy", "/privacy"),
    NavLink::new("Terms", "/terms"),
    NavLink::new("Contact", "/contact"),
];

/// A page of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Subscriptions,
    Products,
    Product(String),
    Cart,
    Checkout,
    Invoices,
    Profile,
    Login,
    Register,
    ForgotPassword,
    /// Anything else, carrying the requested path.
    NotFound(String),
}

impl AppRoute {
    /// Match a pathname. Trailing slashes and empty segments are ignored.
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["subscriptions"] => Self::Subscriptions,
            ["products"] => Self::Products,
            ["product", id] => Self::Product((*id).to_string()),
            ["cart"] => Self::Cart,
            ["checkout"] => Self::Checkout,
            ["invoices"] => Self::Invoices,
            ["profile"] => Self::Profile,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["forgot-password"] => Self::ForgotPassword,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Subscriptions => "/subscriptions".to_string(),
            Self::Products => "/products".to_string(),
            Self::Product(id) => format!("/product/{id}"),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Invoices => "/invoices".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::ForgotPassword => "/forgot-password".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn layout(&self) -> LayoutKind {
        match self {
            Self::Invoices | Self::Profile => LayoutKind::Admin,
            Self::Login | Self::Register | Self::ForgotPassword => LayoutKind::Auth,
            _ => LayoutKind::Main,
        }
    }

    /// Page part of the document title. Product pages use the product name
    /// once it has loaded.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Subscriptions => "Subscriptions",
            Self::Products => "Subscription Products",
            Self::Product(_) => "Product",
            Self::Cart => "Your Subscription Cart",
            Self::Checkout => "Checkout",
            Self::Invoices => "Invoices",
            Self::Profile => "Profile",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::ForgotPassword => "Forgot Password",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Home => {
                "Discover and manage your favorite subscriptions. Curated plans, exclusive deals, and seamless management for all your recurring needs."
            }
            Self::Subscriptions => {
                "Browse and manage your subscriptions. Flexible plans, exclusive offers, and seamless management."
            }
            Self::Products => {
                "Browse and subscribe to our curated selection of subscription products."
            }
            Self::Product(_) => "Subscription product details.",
            Self::Cart => "Review and manage your subscription cart before checkout.",
            Self::Checkout => "Complete your subscription purchase securely.",
            Self::Invoices => "View and manage your subscription invoices.",
            Self::Profile => "Manage your subscriptions, profile details, and preferences.",
            Self::Login => "Login to manage your subscriptions and access exclusive offers.",
            Self::Register => {
                "Create your account to manage your subscriptions and enjoy exclusive offers."
            }
            Self::ForgotPassword => "Reset the password for your subscription account.",
            Self::NotFound(_) => {
                "Sorry, the page you are looking for does not exist. Discover our subscription plans."
            }
        }
    }
}

/// `"{page} | {site}"`.
pub fn document_title(page: &str, site_name: &str) -> String {
    format!("{page} | {site_name}")
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
