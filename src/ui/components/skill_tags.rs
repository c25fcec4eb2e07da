use dioxus::prelude::*;

use crate::ui::theme::{self, use_theme};

/// Skill chips. When `on_remove` is set each chip gets a remove button.
#[component]
pub fn SkillTags(skills: Vec<String>, on_remove: Option<EventHandler<String>>) -> Element {
    let theme = use_theme().resolved();
    if skills.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex flex-wrap gap-1.5",
            for skill in skills {
                span {
                    key: "{skill}",
                    class: "{theme::chip(theme)}",
                    "{skill}"
                    if let Some(handler) = on_remove {
                        button {
                            r#type: "button",
                            class: "ml-1.5 opacity-60 hover:opacity-100",
                            title: "Retirer",
                            onclick: {
                                let skill = skill.clone();
                                move |_| handler.call(skill.clone())
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}
