use dioxus::prelude::*;

use crate::{
    domain::{AppState, PersistedState, ProviderProfile},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            CartPage, DashboardPage, HowItWorksPage, NotFoundPage, PricingPage, ProfilePage,
            ProposerPage,
        },
        shell::Shell,
        theme::use_theme_provider,
    },
    util::{assets, config::config, persistence::load_persisted_state},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/panier")]
    Panier {},
    #[route("/pricing")]
    Pricing {},
    #[route("/proposer")]
    Proposer {},
    #[route("/profil/:id")]
    Profil { id: String },
    #[route("/how-it-works")]
    HowItWorks {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let persisted = use_hook(|| {
        tracing::debug!(agent_api_url = %config().agent_api_url, "starting marketplace front-end");
        load_persisted_state().unwrap_or_else(PersistedState::default)
    });
    use_theme_provider(persisted.theme);

    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Adds a provider to the session cart, skipping ids already there.
pub fn add_provider_to_cart(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    profile: &ProviderProfile,
) {
    let added = state.with_mut(|st| st.cart.add_item(profile.to_cart_item()));
    if added {
        tracing::info!(provider = %profile.id, "added to cart");
        push_toast(
            toasts,
            ToastKind::Success,
            format!("{} ajouté au panier.", profile.name),
        );
    } else {
        push_toast(
            toasts,
            ToastKind::Info,
            format!("{} est déjà dans votre panier.", profile.name),
        );
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Panier() -> Element {
    rsx! { Shell { CartPage {} } }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { Shell { PricingPage {} } }
}

#[component]
pub fn Proposer() -> Element {
    rsx! { Shell { ProposerPage {} } }
}

#[component]
pub fn Profil(id: String) -> Element {
    rsx! { Shell { ProfilePage { id } } }
}

#[component]
pub fn HowItWorks() -> Element {
    rsx! { Shell { HowItWorksPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { Shell { NotFoundPage { path } } }
}
