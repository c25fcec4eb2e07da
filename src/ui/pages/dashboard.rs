use dioxus::prelude::*;

use crate::domain::{catalog, format_price, AppState, DashboardTab, Project};
use crate::ui::{
    components::{
        agent_console::AgentsPanel, kpi_card::KpiCard, provider_card::ProviderCard,
        status_badge::StatusBadge,
    },
    theme::{self, use_theme},
};

#[component]
pub fn DashboardPage() -> Element {
    let theme = use_theme().resolved();
    let mut state = use_context::<Signal<AppState>>();
    let active = state.with(|st| st.dashboard_tab);

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "text-3xl font-semibold tracking-tight {theme::text_primary(theme)}", "Tableau de bord" }
                p { class: "mt-1 text-sm {theme::text_muted(theme)}", "Suivez vos projets et vos prestataires, humains comme IA." }
            }
            div { class: "flex gap-2",
                for tab in DashboardTab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: "{theme::tab(theme, tab == active)}",
                        onclick: move |_| state.with_mut(|st| st.dashboard_tab = tab),
                        "{tab.label()}"
                    }
                }
            }
            match active {
                DashboardTab::Overview => rsx! { OverviewTab {} },
                DashboardTab::Projects => rsx! { ProjectsTab {} },
                DashboardTab::Agents => rsx! { AgentsPanel {} },
            }
        }
    }
}

#[component]
fn OverviewTab() -> Element {
    let theme = use_theme().resolved();
    let stats = catalog::dashboard_stats(&catalog::projects());
    let recommended = catalog::profiles().iter().take(3).cloned().collect::<Vec<_>>();

    rsx! {
        div { class: "space-y-8",
            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for stat in stats {
                    KpiCard { key: "{stat.title}", stat }
                }
            }
            section { class: "space-y-4",
                h3 { class: "{theme::label_class(theme)}", "Prestataires recommandés" }
                div { class: "grid gap-4 md:grid-cols-3",
                    for profile in recommended {
                        ProviderCard { key: "{profile.id}", profile }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectsTab() -> Element {
    let theme = use_theme().resolved();
    let projects = catalog::projects();

    rsx! {
        section { class: "{theme::panel(theme)}",
            ul { class: "{theme::divider(theme)}",
                for project in projects {
                    ProjectRow { key: "{project.id}", project }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project) -> Element {
    let theme = use_theme().resolved();
    let budget = format_price(project.budget);

    rsx! {
        li { class: "grid gap-3 px-4 py-4 sm:grid-cols-[minmax(0,2fr)_auto_minmax(0,1fr)] sm:items-center",
            div {
                p { class: "font-semibold {theme::text_primary(theme)}", "{project.title}" }
                p {
                    class: "text-xs {theme::text_muted(theme)}",
                    "{project.provider_kind.emoji()} {project.provider_name} · {budget} · échéance {project.due_label}"
                }
            }
            StatusBadge { status: project.status }
            div { class: "flex items-center gap-2",
                div { class: "tl-progress flex-1",
                    span { style: "width: {project.progress}%" }
                }
                span { class: "w-10 text-right text-xs {theme::text_muted(theme)}", "{project.progress} %" }
            }
        }
    }
}
