use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{format_price, AppState};
use crate::ui::{
    components::{
        cart_line::{CartLine, HoursAction, TeamCard},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, use_theme},
};

#[component]
pub fn CartPage() -> Element {
    let theme = use_theme().resolved();
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let (items, teams, summary, cart_empty) = state.with(|st| {
        (
            st.cart.items.clone(),
            st.cart.teams.clone(),
            st.cart.summary(),
            st.cart.is_empty(),
        )
    });

    let on_hours = move |(id, action): (String, HoursAction)| {
        state.with_mut(|st| match action {
            HoursAction::Increment => st.cart.increment_hours(&id),
            HoursAction::Decrement => st.cart.decrement_hours(&id),
            HoursAction::Set(requested) => st.cart.set_hours(&id, requested),
        });
    };

    let on_remove_item = move |id: String| {
        if let Some(item) = state.with_mut(|st| st.cart.remove_item(&id)) {
            tracing::info!(item = %item.id, "removed from cart");
            push_toast(toasts, ToastKind::Info, format!("{} retiré du panier.", item.name));
        }
    };

    let on_remove_team = move |id: String| {
        if let Some(team) = state.with_mut(|st| st.cart.remove_team(&id)) {
            tracing::info!(team = %team.id, "removed from cart");
            push_toast(toasts, ToastKind::Info, format!("{} retirée du panier.", team.name));
        }
    };

    let on_checkout = move |_| {
        let total = format_price(state.read().cart.grand_total());
        state.with_mut(|st| st.cart.clear());
        tracing::info!(%total, "checkout confirmed");
        push_toast(
            toasts,
            ToastKind::Success,
            format!("Commande de {total} confirmée. Aucun paiement réel n'a été effectué."),
        );
    };

    if cart_empty {
        return rsx! {
            section {
                class: "{theme::panel(theme)} mx-auto max-w-lg p-10 text-center space-y-4",
                p { class: "text-4xl", "🛒" }
                h2 { class: "text-xl font-semibold {theme::text_primary(theme)}", "Votre panier est vide" }
                p { class: "text-sm {theme::text_muted(theme)}", "Parcourez les profils pour ajouter des freelances ou des agents IA." }
                Link { to: Route::Dashboard {}, class: "{theme::link_class(theme)}", "Retour au tableau de bord" }
            }
        };
    }

    let items_subtotal = format_price(summary.items_subtotal);
    let teams_subtotal = format_price(summary.teams_subtotal);
    let grand_total = format_price(summary.grand_total);

    rsx! {
        div { class: "grid gap-8 lg:grid-cols-[minmax(0,2fr)_minmax(0,1fr)]",
            div { class: "space-y-8",
                h2 { class: "text-3xl font-semibold tracking-tight {theme::text_primary(theme)}", "Panier" }
                if !items.is_empty() {
                    section { class: "{theme::panel(theme)} px-4",
                        h3 { class: "pt-4 {theme::label_class(theme)}", "Prestataires" }
                        ul { class: "{theme::divider(theme)}",
                            for item in items {
                                CartLine {
                                    key: "{item.id}",
                                    item,
                                    on_hours,
                                    on_remove: on_remove_item,
                                }
                            }
                        }
                    }
                }
                if !teams.is_empty() {
                    section { class: "space-y-3",
                        h3 { class: "{theme::label_class(theme)}", "Équipes" }
                        ul { class: "space-y-3",
                            for team in teams {
                                TeamCard { key: "{team.id}", team, on_remove: on_remove_team }
                            }
                        }
                    }
                }
            }
            aside {
                class: "{theme::panel_highlight(theme)} h-fit space-y-3 p-6",
                h3 { class: "{theme::label_class(theme)}", "Récapitulatif" }
                SummaryRow { label: format!("Prestataires ({})", summary.item_count), value: items_subtotal }
                if summary.billed_hours > 0 {
                    p { class: "text-xs {theme::text_muted(theme)}", "dont {summary.billed_hours} h facturées" }
                }
                SummaryRow { label: format!("Équipes ({})", summary.team_count), value: teams_subtotal }
                div { class: "border-t border-slate-500/30 pt-3 flex items-baseline justify-between",
                    span { class: "font-semibold {theme::text_primary(theme)}", "Total" }
                    span { class: "text-2xl font-semibold {theme::accent_text(theme)}", "{grand_total}" }
                }
                button {
                    class: "w-full {theme::btn_primary(theme)}",
                    onclick: on_checkout,
                    "Valider la commande"
                }
            }
        }
    }
}

#[component]
fn SummaryRow(label: String, value: String) -> Element {
    let theme = use_theme().resolved();
    rsx! {
        div { class: "flex justify-between text-sm",
            span { class: "{theme::text_muted(theme)}", "{label}" }
            span { class: "{theme::text_primary(theme)}", "{value}" }
        }
    }
}
