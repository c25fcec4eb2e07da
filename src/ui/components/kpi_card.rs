use dioxus::prelude::*;

use crate::domain::DashboardStat;
use crate::ui::theme::{self, use_theme};

#[component]
pub fn KpiCard(stat: DashboardStat) -> Element {
    let theme = use_theme().resolved();
    rsx! {
        div {
            class: "{theme::panel(theme)} p-4",
            h3 { class: "{theme::label_class(theme)}", "{stat.title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_primary(theme)}", "{stat.value}" }
            if let Some(desc) = stat.description {
                p { class: "mt-1 text-xs {theme::text_muted(theme)}", "{desc}" }
            }
        }
    }
}
