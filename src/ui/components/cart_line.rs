use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{billed_hours, format_price, item_total, CartItem, TeamItem};
use crate::ui::{
    components::{rating::RatingStars, skill_tags::SkillTags},
    theme::{self, use_theme},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoursAction {
    Increment,
    Decrement,
    Set(i64),
}

#[component]
pub fn CartLine(
    item: CartItem,
    on_hours: EventHandler<(String, HoursAction)>,
    on_remove: EventHandler<String>,
) -> Element {
    let theme = use_theme().resolved();
    let total = format_price(item_total(&item));
    let unit = format!("{} {}", format_price(item.unit_price), item.price_basis.suffix());
    let hours = billed_hours(&item);
    let skills: Vec<String> = item.skills.iter().cloned().collect();
    let (decrement_id, input_id, increment_id, remove_id) = (
        item.id.clone(),
        item.id.clone(),
        item.id.clone(),
        item.id.clone(),
    );

    rsx! {
        li {
            class: "flex flex-wrap items-start justify-between gap-4 py-4",
            div {
                class: "min-w-0 flex-1 space-y-1.5",
                div {
                    class: "flex items-center gap-2",
                    span { class: "text-lg", "{item.provider_kind.emoji()}" }
                    Link {
                        to: Route::Profil { id: item.id.clone() },
                        class: "font-semibold {theme::text_primary(theme)} hover:underline",
                        "{item.name}"
                    }
                    span { class: "{theme::chip(theme)}", "{item.provider_kind.label()}" }
                }
                if let Some(title) = item.title.as_ref() {
                    p { class: "text-sm {theme::text_muted(theme)}", "{title}" }
                }
                RatingStars { rating: item.rating, reviews: None }
                SkillTags { skills, on_remove: None }
            }
            div {
                class: "flex flex-col items-end gap-2",
                p { class: "text-xs {theme::text_muted(theme)}", "{unit}" }
                if let Some(hours) = hours {
                    div {
                        class: "flex items-center gap-1.5",
                        button {
                            class: "{theme::btn_icon(theme)}",
                            title: "Retirer une heure",
                            onclick: move |_| on_hours.call((decrement_id.clone(), HoursAction::Decrement)),
                            "−"
                        }
                        input {
                            class: "w-16 rounded-lg border border-slate-500/40 bg-transparent px-2 py-1 text-center text-sm",
                            r#type: "number",
                            min: "1",
                            value: "{hours}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(requested) = evt.value().trim().parse::<i64>() {
                                    on_hours.call((input_id.clone(), HoursAction::Set(requested)));
                                }
                            },
                        }
                        button {
                            class: "{theme::btn_icon(theme)}",
                            title: "Ajouter une heure",
                            onclick: move |_| on_hours.call((increment_id.clone(), HoursAction::Increment)),
                            "+"
                        }
                        span { class: "text-xs {theme::text_muted(theme)}", "h" }
                    }
                }
                p { class: "text-lg font-semibold {theme::accent_text(theme)}", "{total}" }
                button {
                    class: "{theme::btn_danger(theme)}",
                    onclick: move |_| on_remove.call(remove_id.clone()),
                    "Retirer"
                }
            }
        }
    }
}

#[component]
pub fn TeamCard(team: TeamItem, on_remove: EventHandler<String>) -> Element {
    let theme = use_theme().resolved();
    let total = format_price(team.total_price);
    let id = team.id.clone();

    rsx! {
        li {
            class: "{theme::panel(theme)} p-4 space-y-3",
            div {
                class: "flex items-start justify-between gap-4",
                div {
                    h3 { class: "font-semibold {theme::text_primary(theme)}", "👥 {team.name}" }
                    p {
                        class: "text-xs {theme::text_muted(theme)}",
                        "{team.members.len()} membres · {team.project_count} projets réalisés"
                    }
                    RatingStars { rating: team.rating, reviews: None }
                }
                div {
                    class: "text-right",
                    p { class: "text-lg font-semibold {theme::accent_text(theme)}", "{total}" }
                    p { class: "text-xs {theme::text_muted(theme)}", "prix forfaitaire d'équipe" }
                }
            }
            ul {
                class: "flex flex-wrap gap-2",
                for member in team.members.iter() {
                    li {
                        key: "{member.id}",
                        class: "{theme::chip(theme)}",
                        "{member.provider_kind.emoji()} {member.name}"
                    }
                }
            }
            div {
                class: "flex justify-end",
                button {
                    class: "{theme::btn_danger(theme)}",
                    onclick: move |_| on_remove.call(id.clone()),
                    "Retirer l'équipe"
                }
            }
        }
    }
}
