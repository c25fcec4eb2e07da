//! Agent directory and chat console backed by the agent service.

use dioxus::prelude::*;
use futures_util::{pin_mut, StreamExt};
use serde_json::json;

use crate::infra::agents::{
    AgentClient, AgentClientError, AgentDescriptor, InvokeRequest, TextDecoder,
};
use crate::util::config::config;
use crate::ui::{
    components::toast::{push_toast, ToastKind, ToastMessage},
    theme::{self, use_theme},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Speaker {
    User,
    Agent,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
struct ChatEntry {
    speaker: Speaker,
    text: String,
    run_id: Option<String>,
}

impl ChatEntry {
    fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            run_id: None,
        }
    }
}

#[component]
pub fn AgentsPanel() -> Element {
    let theme = use_theme().resolved();
    let selected = use_signal(|| None::<AgentDescriptor>);

    let mut agents = use_resource(|| async move { AgentClient::new()?.list_agents().await });
    let mut health = use_resource(|| async move { AgentClient::new()?.health().await });

    let agent_state = agents
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(Clone::clone).map_err(ToString::to_string));
    let health_state = health
        .read()
        .as_ref()
        .map(|result| result.as_ref().map(health_label).map_err(ToString::to_string));
    let base_url = config().agent_api_url.to_string();

    let (health_dot, health_text) = match health_state {
        None => ("bg-slate-400 animate-pulse", "Vérification…".to_string()),
        Some(Ok(label)) => ("bg-emerald-400", label),
        Some(Err(err)) => ("bg-rose-400", err),
    };

    rsx! {
        div {
            class: "grid gap-6 lg:grid-cols-[minmax(0,1fr)_minmax(0,2fr)]",
            section {
                class: "{theme::panel(theme)} p-4 space-y-4",
                div {
                    class: "flex items-center justify-between",
                    h2 { class: "font-semibold {theme::text_primary(theme)}", "Agents disponibles" }
                    button {
                        class: "{theme::btn_secondary(theme)}",
                        onclick: move |_| {
                            agents.restart();
                            health.restart();
                        },
                        "Actualiser"
                    }
                }
                p {
                    class: "flex items-center gap-2 text-xs {theme::text_muted(theme)}",
                    span { class: "h-2 w-2 rounded-full {health_dot}" }
                    "{base_url} · {health_text}"
                }
                match agent_state {
                    None => rsx! {
                        p { class: "text-sm {theme::text_muted(theme)}", "Chargement des agents…" }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "text-sm text-rose-400", "Service indisponible : {err}" }
                    },
                    Some(Ok(list)) => rsx! {
                        if list.is_empty() {
                            p { class: "text-sm {theme::text_muted(theme)}", "Aucun agent publié pour le moment." }
                        } else {
                            ul {
                                class: "space-y-2",
                                for agent in list {
                                    AgentRow { key: "{agent.id}", agent: agent.clone(), selected }
                                }
                            }
                        }
                    },
                }
            }
            if let Some(agent) = selected() {
                AgentConsole { key: "{agent.id}", agent: agent.clone() }
            } else {
                section {
                    class: "{theme::panel(theme)} flex items-center justify-center p-8 text-sm {theme::text_muted(theme)}",
                    "Sélectionnez un agent pour lui écrire."
                }
            }
        }
    }
}

#[component]
fn AgentRow(agent: AgentDescriptor, selected: Signal<Option<AgentDescriptor>>) -> Element {
    let theme = use_theme().resolved();
    let active = selected
        .read()
        .as_ref()
        .map(|current| current.id == agent.id)
        .unwrap_or(false);
    let description = agent.description_text().unwrap_or_default().to_string();
    let choice = agent.clone();

    rsx! {
        li {
            button {
                class: "w-full text-left {theme::tab(theme, active)}",
                onclick: move |_| {
                    let mut selected = selected;
                    selected.set(Some(choice.clone()));
                },
                p { class: "font-semibold", "🤖 {agent.name}" }
                if !description.is_empty() {
                    p { class: "mt-0.5 text-xs {theme::text_muted(theme)}", "{description}" }
                }
            }
        }
    }
}

#[component]
fn AgentConsole(agent: AgentDescriptor) -> Element {
    let theme = use_theme().resolved();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let mut message = use_signal(String::new);
    let mut streaming = use_signal(|| true);
    let mut pending = use_signal(|| false);
    let mut transcript = use_signal(Vec::<ChatEntry>::new);
    let mut live = use_signal(String::new);
    let mut thread_id = use_signal(|| None::<String>);

    let agent_id = agent.id.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = message().trim().to_string();
        if text.is_empty() || pending() {
            return;
        }

        message.set(String::new());
        transcript.with_mut(|entries| entries.push(ChatEntry::new(Speaker::User, text.clone())));
        pending.set(true);

        let agent_id = agent_id.clone();
        let use_stream = streaming();
        spawn(async move {
            let request = InvokeRequest::new(text)
                .with_thread(thread_id())
                .with_context("page", json!("dashboard"));

            let outcome = match AgentClient::new() {
                Ok(client) if use_stream => stream_reply(&client, &agent_id, &request, live)
                    .await
                    .map(|text| ChatEntry::new(Speaker::Agent, text)),
                Ok(client) => client.invoke(&agent_id, &request).await.map(|response| {
                    if response.thread_id.is_some() {
                        thread_id.set(response.thread_id.clone());
                    }
                    ChatEntry {
                        speaker: Speaker::Agent,
                        text: response.content,
                        run_id: response.run_id,
                    }
                }),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(entry) => transcript.with_mut(|entries| entries.push(entry)),
                Err(err) => {
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        format!("L'agent {agent_id} n'a pas répondu : {err}"),
                    );
                    transcript
                        .with_mut(|entries| entries.push(ChatEntry::new(Speaker::Failure, err.to_string())));
                }
            }
            live.set(String::new());
            pending.set(false);
        });
    };

    let entries = transcript();
    let live_text = live();

    rsx! {
        section {
            class: "{theme::panel(theme)} flex flex-col p-4",
            header {
                class: "mb-3 flex items-center justify-between gap-4",
                div {
                    h2 { class: "font-semibold {theme::text_primary(theme)}", "{agent.name}" }
                    if let Some(thread) = thread_id() {
                        p { class: "text-xs {theme::text_muted(theme)}", "Fil {thread}" }
                    }
                }
                label {
                    class: "flex items-center gap-2 text-xs {theme::text_muted(theme)}",
                    input {
                        r#type: "checkbox",
                        checked: streaming(),
                        onchange: move |evt: FormEvent| streaming.set(evt.checked()),
                    }
                    "Réponse en direct"
                }
            }
            ul {
                class: "mb-4 max-h-96 flex-1 space-y-3 overflow-y-auto",
                for (idx, entry) in entries.into_iter().enumerate() {
                    ChatBubble { key: "{idx}", entry }
                }
                if pending() {
                    li {
                        class: "tl-stream tl-caret rounded-lg px-3 py-2 {theme::text_muted(theme)}",
                        "{live_text}"
                    }
                }
            }
            form {
                class: "flex gap-2",
                onsubmit: on_submit,
                input {
                    class: "{theme::input_class(theme)}",
                    placeholder: "Votre message…",
                    value: "{message}",
                    disabled: pending(),
                    oninput: move |evt: FormEvent| message.set(evt.value()),
                }
                button {
                    class: "{theme::btn_primary(theme)}",
                    r#type: "submit",
                    disabled: pending(),
                    "Envoyer"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(entry: ChatEntry) -> Element {
    let theme = use_theme().resolved();
    let (align, bubble) = match entry.speaker {
        Speaker::User => ("justify-end", "bg-indigo-500 text-white"),
        Speaker::Agent => ("justify-start", theme::chip(theme)),
        Speaker::Failure => ("justify-start", "border border-rose-500/40 bg-rose-500/10 text-rose-300"),
    };

    rsx! {
        li {
            class: "flex {align}",
            div {
                class: "tl-stream max-w-[80%] rounded-lg px-3 py-2 {bubble}",
                "{entry.text}"
                if let Some(run) = entry.run_id.as_ref() {
                    p { class: "mt-1 text-[10px] opacity-60", "run {run}" }
                }
            }
        }
    }
}

/// Streams the reply into `live` as it arrives and returns the full text.
async fn stream_reply(
    client: &AgentClient,
    agent_id: &str,
    request: &InvokeRequest,
    mut live: Signal<String>,
) -> Result<String, AgentClientError> {
    let stream = client.stream(agent_id, request).await?;
    pin_mut!(stream);

    live.set(String::new());
    let mut decoder = TextDecoder::new();
    while let Some(chunk) = stream.next().await {
        let text = decoder.push(&chunk?);
        live.with_mut(|buffer| buffer.push_str(&text));
    }
    let tail = decoder.finish();
    live.with_mut(|buffer| buffer.push_str(&tail));

    Ok(live())
}

/// Short human label for the `/health` payload, whatever its shape.
fn health_label(payload: &serde_json::Value) -> String {
    match payload.get("status").and_then(serde_json::Value::as_str) {
        Some(status) => format!("service {status}"),
        None => "service joignable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::health_label;
    use serde_json::json;

    #[test]
    fn health_label_prefers_status_field() {
        assert_eq!(health_label(&json!({ "status": "ok" })), "service ok");
        assert_eq!(health_label(&json!({ "uptime": 12 })), "service joignable");
        assert_eq!(health_label(&json!("pong")), "service joignable");
    }
}
