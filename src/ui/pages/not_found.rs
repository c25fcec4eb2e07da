use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme::{self, use_theme};

#[component]
pub fn NotFoundPage(path: String) -> Element {
    let theme = use_theme().resolved();
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "{theme::panel(theme)} mx-auto max-w-lg space-y-4 p-10 text-center",
            p { class: "text-5xl font-semibold tl-gradient-text", "404" }
            p { class: "text-sm {theme::text_muted(theme)}", "La page {path} n'existe pas." }
            Link { to: Route::Dashboard {}, class: "{theme::link_class(theme)}", "Retour au tableau de bord" }
        }
    }
}
