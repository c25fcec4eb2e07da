use dioxus::prelude::*;

use crate::domain::{Availability, ProjectStatus};

#[component]
pub fn StatusBadge(status: ProjectStatus) -> Element {
    let color = match status {
        ProjectStatus::InProgress => "bg-sky-500/10 text-sky-400 border-sky-500/40",
        ProjectStatus::Review => "bg-amber-500/10 text-amber-400 border-amber-500/40",
        ProjectStatus::Completed => "bg-emerald-500/10 text-emerald-400 border-emerald-500/40",
        ProjectStatus::Cancelled => "bg-slate-500/10 text-slate-400 border-slate-500/40",
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{status}"
        }
    }
}

#[component]
pub fn AvailabilityDot(availability: Availability) -> Element {
    let color = match availability {
        Availability::Available => "bg-emerald-400",
        Availability::Busy => "bg-amber-400",
        Availability::Away => "bg-slate-400",
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-1.5 text-xs",
            span { class: "h-2 w-2 rounded-full {color}" }
            "{availability.label()}"
        }
    }
}
