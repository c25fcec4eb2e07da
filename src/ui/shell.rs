use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, ResolvedTheme, ThemeMode};
use crate::ui::theme::{self, use_theme};
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

#[component]
pub fn Shell(children: Element) -> Element {
    let theme_ctx = use_theme();
    let theme = theme_ctx.resolved();
    let state = use_context::<Signal<AppState>>();
    let cart_count = state.with(|st| st.cart.items.len() + st.cart.teams.len());

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "{theme::root_class(theme)}",
            header {
                class: "{theme::header_class(theme)}",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "✨" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight tl-gradient-text", "{APP_NAME}" }
                            p { class: "text-xs italic {theme::text_muted(theme)}", "{APP_TAGLINE}" }
                        }
                    }

                    nav { class: "flex gap-2 text-sm justify-center",
                        NavButton {
                            active: matches!(current_route, Route::Dashboard {}),
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            label: "📊 Tableau de bord".to_string(),
                            theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Panier {}),
                            onclick: move |_| { nav.push(Route::Panier {}); },
                            label: format!("🛒 Panier ({cart_count})"),
                            theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Pricing {}),
                            onclick: move |_| { nav.push(Route::Pricing {}); },
                            label: "💳 Tarifs".to_string(),
                            theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Proposer {}),
                            onclick: move |_| { nav.push(Route::Proposer {}); },
                            label: "➕ Proposer".to_string(),
                            theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::HowItWorks {}),
                            onclick: move |_| { nav.push(Route::HowItWorks {}); },
                            label: "❓ Comment ça marche".to_string(),
                            theme,
                        }
                    }

                    div { class: "flex gap-1 justify-end",
                        for mode in ThemeMode::ALL {
                            ThemeButton { key: "{mode.title()}", mode, active: theme_ctx.mode() == mode }
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer {
                class: "mx-auto max-w-6xl px-6 pb-8 text-xs {theme::text_muted(theme)}",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: String,
    theme: ResolvedTheme,
) -> Element {
    rsx! {
        button {
            class: "{theme::tab(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn ThemeButton(mode: ThemeMode, active: bool) -> Element {
    let mut theme_ctx = use_theme();
    let theme = theme_ctx.resolved();

    rsx! {
        button {
            class: "{theme::tab(theme, active)}",
            title: "{mode.title()}",
            onclick: move |_| theme_ctx.set_mode(mode),
            "{mode.label()}"
        }
    }
}
