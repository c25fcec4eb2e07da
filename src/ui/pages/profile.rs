use dioxus::prelude::*;

use crate::app::{add_provider_to_cart, Route};
use crate::domain::{catalog, format_price, AppState, ProviderProfile};
use crate::ui::{
    components::{
        rating::RatingStars,
        skill_tags::SkillTags,
        status_badge::{AvailabilityDot, StatusBadge},
        toast::ToastMessage,
    },
    theme::{self, use_theme},
};

#[component]
pub fn ProfilePage(id: String) -> Element {
    let theme = use_theme().resolved();
    let Some(profile) = catalog::find_profile(&id) else {
        tracing::debug!(%id, "unknown provider profile");
        return rsx! {
            section { class: "{theme::panel(theme)} mx-auto max-w-lg p-10 text-center space-y-4",
                p { class: "text-4xl", "🔎" }
                h2 { class: "text-xl font-semibold {theme::text_primary(theme)}", "Profil introuvable" }
                p { class: "text-sm {theme::text_muted(theme)}", "Aucun prestataire ne correspond à « {id} »." }
                Link { to: Route::Dashboard {}, class: "{theme::link_class(theme)}", "Retour au tableau de bord" }
            }
        };
    };

    rsx! { ProfileDetails { profile: profile.clone() } }
}

#[component]
fn ProfileDetails(profile: ProviderProfile) -> Element {
    let theme = use_theme().resolved();
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let in_cart = state.read().cart.contains(&profile.id);
    let price = format!("{} {}", format_price(profile.unit_price), profile.price_basis.suffix());
    let portfolio = catalog::projects()
        .into_iter()
        .filter(|project| profile.portfolio.contains(&project.id))
        .collect::<Vec<_>>();
    let target = profile.clone();

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-[minmax(0,2fr)_minmax(0,1fr)]",
            div { class: "space-y-6",
                section { class: "{theme::panel(theme)} space-y-4 p-6",
                    div { class: "flex items-start gap-4",
                        span { class: "text-5xl", "{profile.kind.emoji()}" }
                        div { class: "space-y-1",
                            h2 { class: "text-2xl font-semibold {theme::text_primary(theme)}", "{profile.name}" }
                            p { class: "{theme::accent_text(theme)}", "{profile.title}" }
                            div { class: "flex flex-wrap items-center gap-3 text-xs {theme::text_muted(theme)}",
                                span { class: "{theme::chip(theme)}", "{profile.kind.label()}" }
                                AvailabilityDot { availability: profile.availability }
                                if let Some(location) = profile.location.as_ref() {
                                    span { "📍 {location}" }
                                }
                            }
                        }
                    }
                    RatingStars { rating: profile.rating, reviews: Some(profile.review_count) }
                    p { class: "text-sm leading-relaxed {theme::text_primary(theme)}", "{profile.bio}" }
                    SkillTags { skills: profile.skills.clone(), on_remove: None }
                }
                section { class: "space-y-3",
                    h3 { class: "{theme::label_class(theme)}", "Réalisations" }
                    if portfolio.is_empty() {
                        p { class: "text-sm {theme::text_muted(theme)}", "Aucune réalisation publiée." }
                    } else {
                        ul { class: "{theme::panel(theme)} {theme::divider(theme)}",
                            for project in portfolio {
                                li { key: "{project.id}", class: "flex items-center justify-between gap-4 px-4 py-3",
                                    span { class: "text-sm {theme::text_primary(theme)}", "{project.title}" }
                                    StatusBadge { status: project.status }
                                }
                            }
                        }
                    }
                }
            }
            aside { class: "{theme::panel_highlight(theme)} h-fit space-y-4 p-6",
                p {
                    span { class: "text-3xl font-semibold {theme::text_primary(theme)}", "{price}" }
                }
                p { class: "text-xs {theme::text_muted(theme)}", "{profile.completed_projects} missions réalisées" }
                button {
                    class: "w-full {theme::btn_primary(theme)}",
                    disabled: in_cart,
                    onclick: move |_| add_provider_to_cart(state, toasts, &target),
                    if in_cart { "Déjà dans le panier" } else { "Ajouter au panier" }
                }
                Link { to: Route::Panier {}, class: "block text-center {theme::link_class(theme)}", "Voir le panier" }
            }
        }
    }
}
