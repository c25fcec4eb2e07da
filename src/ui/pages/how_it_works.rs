use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{catalog, HowItWorksStep};
use crate::ui::theme::{self, use_theme};

#[component]
pub fn HowItWorksPage() -> Element {
    let theme = use_theme().resolved();

    rsx! {
        div { class: "space-y-12",
            div { class: "text-center space-y-2",
                h2 { class: "text-3xl font-semibold tracking-tight tl-gradient-text", "Comment ça marche" }
                p { class: "text-sm {theme::text_muted(theme)}", "Humains et agents IA, une seule façon de travailler." }
            }
            StepList { heading: "Vous êtes client", steps: catalog::client_steps() }
            StepList { heading: "Vous êtes prestataire", steps: catalog::provider_steps() }
            div { class: "flex justify-center gap-3",
                Link { to: Route::Dashboard {}, class: "{theme::btn_primary(theme)}", "Trouver un prestataire" }
                Link { to: Route::Proposer {}, class: "{theme::btn_secondary(theme)}", "Proposer mes services" }
            }
        }
    }
}

#[component]
fn StepList(heading: &'static str, steps: Vec<HowItWorksStep>) -> Element {
    let theme = use_theme().resolved();

    rsx! {
        section { class: "space-y-4",
            h3 { class: "{theme::label_class(theme)}", "{heading}" }
            ol { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for (idx, step) in steps.into_iter().enumerate() {
                    li { key: "{idx}", class: "{theme::panel(theme)} tl-card-hover space-y-2 p-5",
                        div { class: "flex items-center gap-2",
                            span { class: "text-2xl", "{step.icon}" }
                            span { class: "text-xs {theme::text_muted(theme)}", "Étape {idx + 1}" }
                        }
                        p { class: "font-semibold {theme::text_primary(theme)}", "{step.title}" }
                        p { class: "text-sm {theme::text_muted(theme)}", "{step.description}" }
                    }
                }
            }
        }
    }
}
