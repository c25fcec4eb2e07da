use dioxus::prelude::*;

use crate::app::{add_provider_to_cart, Route};
use crate::domain::{format_price, AppState, ProviderProfile};
use crate::ui::{
    components::{
        rating::RatingStars, skill_tags::SkillTags, status_badge::AvailabilityDot,
        toast::ToastMessage,
    },
    theme::{self, use_theme},
};

#[component]
pub fn ProviderCard(profile: ProviderProfile) -> Element {
    let theme = use_theme().resolved();
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let in_cart = state.read().cart.contains(&profile.id);
    let price = format!("{} {}", format_price(profile.unit_price), profile.price_basis.suffix());
    let target = profile.clone();

    rsx! {
        article {
            class: "{theme::panel(theme)} tl-card-hover flex flex-col gap-3 p-4",
            div {
                class: "flex items-start justify-between gap-3",
                div {
                    Link {
                        to: Route::Profil { id: profile.id.clone() },
                        class: "font-semibold {theme::text_primary(theme)} hover:underline",
                        "{profile.kind.emoji()} {profile.name}"
                    }
                    p { class: "text-xs {theme::text_muted(theme)}", "{profile.title}" }
                }
                AvailabilityDot { availability: profile.availability }
            }
            RatingStars { rating: profile.rating, reviews: Some(profile.review_count) }
            SkillTags { skills: profile.skills.clone(), on_remove: None }
            div {
                class: "mt-auto flex items-center justify-between",
                span { class: "font-semibold {theme::accent_text(theme)}", "{price}" }
                button {
                    class: "{theme::btn_secondary(theme)}",
                    disabled: in_cart,
                    onclick: move |_| add_provider_to_cart(state, toasts, &target),
                    if in_cart { "Dans le panier" } else { "Ajouter" }
                }
            }
        }
    }
}
