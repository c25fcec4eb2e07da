use dioxus::prelude::*;

use crate::domain::{catalog, format_price, BillingCycle, FaqEntry, PricingTier};
use crate::ui::theme::{self, use_theme};

#[component]
pub fn PricingPage() -> Element {
    let theme = use_theme().resolved();
    let mut cycle = use_signal(|| BillingCycle::Monthly);
    let tiers = catalog::pricing_tiers();
    let faq = catalog::faq();

    rsx! {
        div { class: "space-y-12",
            div { class: "text-center space-y-3",
                h2 { class: "text-3xl font-semibold tracking-tight tl-gradient-text", "Des formules pour chaque équipe" }
                p { class: "text-sm {theme::text_muted(theme)}", "Payez au mois ou économisez avec la facturation annuelle." }
                div { class: "inline-flex gap-1",
                    button {
                        class: "{theme::tab(theme, cycle() == BillingCycle::Monthly)}",
                        onclick: move |_| cycle.set(BillingCycle::Monthly),
                        "Mensuel"
                    }
                    button {
                        class: "{theme::tab(theme, cycle() == BillingCycle::Yearly)}",
                        onclick: move |_| cycle.set(BillingCycle::Yearly),
                        "Annuel"
                    }
                }
            }
            section { class: "grid gap-6 md:grid-cols-3",
                for tier in tiers {
                    TierCard { key: "{tier.name}", tier, cycle: cycle() }
                }
            }
            section { class: "mx-auto max-w-3xl space-y-3",
                h3 { class: "{theme::label_class(theme)}", "Questions fréquentes" }
                for (idx, entry) in faq.into_iter().enumerate() {
                    FaqItem { key: "{idx}", entry }
                }
            }
        }
    }
}

#[component]
fn TierCard(tier: PricingTier, cycle: BillingCycle) -> Element {
    let theme = use_theme().resolved();
    let container = if tier.highlighted {
        theme::panel_highlight(theme)
    } else {
        theme::panel(theme)
    };
    let price = format_price(tier.price_for(cycle));
    let period = match cycle {
        BillingCycle::Monthly => "/ mois",
        BillingCycle::Yearly => "/ an",
    };
    let cta_class = if tier.highlighted {
        theme::btn_primary(theme)
    } else {
        theme::btn_secondary(theme)
    };
    let savings = match cycle {
        BillingCycle::Yearly => tier.yearly_savings_pct(),
        BillingCycle::Monthly => None,
    };

    rsx! {
        article { class: "{container} tl-card-hover flex flex-col gap-4 p-6",
            div {
                if tier.highlighted {
                    span { class: "{theme::chip(theme)} mb-2", "Le plus populaire" }
                }
                h3 { class: "text-xl font-semibold {theme::text_primary(theme)}", "{tier.name}" }
                p { class: "text-sm {theme::text_muted(theme)}", "{tier.tagline}" }
            }
            p {
                span { class: "text-3xl font-semibold {theme::text_primary(theme)}", "{price}" }
                span { class: "ml-1 text-sm {theme::text_muted(theme)}", "{period}" }
            }
            if let Some(pct) = savings {
                p { class: "text-xs text-emerald-400", "Économisez {pct:.0} %" }
            }
            ul { class: "flex-1 space-y-2 text-sm",
                for feature in tier.features.iter() {
                    li { key: "{feature}", class: "{theme::text_primary(theme)}", "✓ {feature}" }
                }
            }
            button {
                class: "{cta_class}",
                "{tier.cta}"
            }
        }
    }
}

#[component]
fn FaqItem(entry: FaqEntry) -> Element {
    let theme = use_theme().resolved();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "{theme::panel(theme)} px-4",
            button {
                class: "flex w-full items-center justify-between py-3 text-left text-sm font-semibold {theme::text_primary(theme)}",
                onclick: move |_| open.toggle(),
                "{entry.question}"
                span { class: "{theme::text_muted(theme)}", if open() { "−" } else { "+" } }
            }
            if open() {
                p { class: "pb-4 text-sm {theme::text_muted(theme)}", "{entry.answer}" }
            }
        }
    }
}
