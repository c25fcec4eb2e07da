use dioxus::prelude::*;

use crate::domain::{format_price, PriceBasis, Proposal, ProposalForm, ProviderKind};
use crate::ui::{
    components::{
        skill_tags::SkillTags,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, use_theme},
};

#[component]
pub fn ProposerPage() -> Element {
    let theme = use_theme().resolved();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut form = use_signal(ProposalForm::default);
    let mut skill_input = use_signal(String::new);
    let mut submitted = use_signal(|| None::<Proposal>);

    if let Some(proposal) = submitted() {
        return rsx! {
            Confirmation {
                proposal,
                on_reset: move |_| {
                    form.set(ProposalForm::default());
                    submitted.set(None);
                },
            }
        };
    }

    let on_add_skill = move |_| {
        let raw = skill_input();
        match form.with_mut(|f| f.add_skill(&raw)) {
            Ok(()) => skill_input.set(String::new()),
            Err(err) => push_toast(toasts, ToastKind::Warning, err.to_string()),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(proposal) => {
                tracing::info!(reference = %proposal.reference, kind = ?proposal.kind, "proposal submitted");
                push_toast(toasts, ToastKind::Success, "Proposition enregistrée.");
                submitted.set(Some(proposal));
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    let current = form();
    let is_ai = current.kind == ProviderKind::Ai;
    let title_hint = if is_ai {
        "Agent de support client"
    } else {
        "Développeur Rust senior"
    };

    rsx! {
        div { class: "mx-auto max-w-2xl space-y-6",
            div {
                h2 { class: "text-3xl font-semibold tracking-tight {theme::text_primary(theme)}", "Proposer vos services" }
                p { class: "mt-1 text-sm {theme::text_muted(theme)}", "Freelance ou éditeur d'agent IA, rejoignez la place de marché." }
            }
            form {
                class: "{theme::panel(theme)} space-y-5 p-6",
                onsubmit: on_submit,
                div { class: "grid gap-4 sm:grid-cols-2",
                    Field { label: "Nom",
                        input {
                            class: "{theme::input_class(theme)}",
                            value: "{current.name}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.name = evt.value()),
                        }
                    }
                    Field { label: "E-mail",
                        input {
                            class: "{theme::input_class(theme)}",
                            r#type: "email",
                            value: "{current.email}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                        }
                    }
                }
                Field { label: "Type de prestataire",
                    div { class: "flex gap-2",
                        button {
                            r#type: "button",
                            class: "{theme::tab(theme, !is_ai)}",
                            onclick: move |_| form.with_mut(|f| f.kind = ProviderKind::Human),
                            "{ProviderKind::Human.emoji()} {ProviderKind::Human.label()}"
                        }
                        button {
                            r#type: "button",
                            class: "{theme::tab(theme, is_ai)}",
                            onclick: move |_| form.with_mut(|f| f.kind = ProviderKind::Ai),
                            "{ProviderKind::Ai.emoji()} {ProviderKind::Ai.label()}"
                        }
                    }
                }
                Field { label: "Titre",
                    input {
                        class: "{theme::input_class(theme)}",
                        placeholder: "{title_hint}",
                        value: "{current.title}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.title = evt.value()),
                    }
                }
                Field { label: "Description",
                    textarea {
                        class: "{theme::input_class(theme)} min-h-[7rem]",
                        value: "{current.description}",
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.description = evt.value()),
                    }
                }
                div { class: "grid gap-4 sm:grid-cols-2",
                    Field { label: "Tarif (€)",
                        input {
                            class: "{theme::input_class(theme)}",
                            value: "{current.unit_price}",
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.unit_price = evt.value()),
                        }
                    }
                    Field { label: "Facturation",
                        select {
                            class: "{theme::input_class(theme)}",
                            value: "{current.price_basis.key()}",
                            onchange: move |evt: FormEvent| {
                                if let Some(basis) = PriceBasis::from_key(&evt.value()) {
                                    form.with_mut(|f| f.price_basis = basis);
                                }
                            },
                            for basis in PriceBasis::ALL {
                                option {
                                    key: "{basis.key()}",
                                    value: "{basis.key()}",
                                    selected: basis == current.price_basis,
                                    "{basis.suffix()}"
                                }
                            }
                        }
                    }
                }
                Field { label: "Compétences",
                    div { class: "flex gap-2",
                        input {
                            class: "{theme::input_class(theme)}",
                            placeholder: "Ajoutez une compétence",
                            value: "{skill_input}",
                            oninput: move |evt: FormEvent| skill_input.set(evt.value()),
                        }
                        button {
                            r#type: "button",
                            class: "{theme::btn_secondary(theme)}",
                            onclick: on_add_skill,
                            "Ajouter"
                        }
                    }
                    div { class: "mt-2",
                        SkillTags {
                            skills: current.skills.clone(),
                            on_remove: move |skill: String| form.with_mut(|f| f.remove_skill(&skill)),
                        }
                    }
                }
                div { class: "flex justify-end",
                    button { class: "{theme::btn_primary(theme)}", r#type: "submit", "Envoyer ma proposition" }
                }
            }
        }
    }
}

#[component]
fn Field(label: &'static str, children: Element) -> Element {
    let theme = use_theme().resolved();
    rsx! {
        div { class: "space-y-1.5",
            label { class: "{theme::label_class(theme)}", "{label}" }
            {children}
        }
    }
}

#[component]
fn Confirmation(proposal: Proposal, on_reset: EventHandler<()>) -> Element {
    let theme = use_theme().resolved();
    let price = format!("{} {}", format_price(proposal.unit_price), proposal.price_basis.suffix());

    rsx! {
        section { class: "{theme::panel_highlight(theme)} mx-auto max-w-xl space-y-4 p-8 text-center",
            p { class: "text-4xl", "🎉" }
            h2 { class: "text-2xl font-semibold {theme::text_primary(theme)}", "Merci {proposal.name} !" }
            p { class: "text-sm {theme::text_muted(theme)}",
                "Votre proposition « {proposal.title} » ({price}) sera examinée sous 48 h."
            }
            p { class: "{theme::chip(theme)}", "Référence {proposal.reference}" }
            div {
                button {
                    class: "{theme::btn_secondary(theme)}",
                    onclick: move |_| on_reset.call(()),
                    "Nouvelle proposition"
                }
            }
        }
    }
}
