//! Theme provider and the class helpers that style every page.

use dioxus::prelude::*;

use crate::domain::{PersistedState, ResolvedTheme, ThemeMode};
use crate::util::persistence::save_persisted_state;

const PREFERS_DARK_SCRIPT: &str =
    "return window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;";

/// Root-level theme state. Created once by [`use_theme_provider`]; pages
/// only read it, and [`ThemeContext::set_mode`] is the single way to change it.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
    system_prefers_dark: Signal<Option<bool>>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.mode().resolve(*self.system_prefers_dark.read())
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        if self.mode() == mode {
            return;
        }
        self.mode.set(mode);
        tracing::info!(?mode, "theme changed");
        if let Err(err) = save_persisted_state(&PersistedState { theme: mode }) {
            tracing::warn!("failed to persist theme preference: {err}");
        }
    }
}

/// Installs the theme context, starting from the saved preference (or
/// [`ThemeMode::System`]) and asking the webview for its color scheme.
pub fn use_theme_provider(initial: ThemeMode) -> ThemeContext {
    let mode = use_signal(|| initial);
    let mut system_prefers_dark = use_signal(|| None::<bool>);

    use_future(move || async move {
        match document::eval(PREFERS_DARK_SCRIPT).await {
            Ok(serde_json::Value::Bool(dark)) => system_prefers_dark.set(Some(dark)),
            Ok(other) => tracing::debug!("unexpected color scheme answer: {other}"),
            Err(err) => tracing::debug!("color scheme query failed: {err:?}"),
        }
    });

    use_context_provider(|| ThemeContext {
        mode,
        system_prefers_dark,
    })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============================================
// LAYOUT
// ============================================

pub fn root_class(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "dark min-h-screen bg-slate-950 text-slate-100 font-sans",
        ResolvedTheme::Light => "light min-h-screen bg-slate-50 text-slate-900 font-sans",
    }
}

pub fn header_class(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "border-b border-slate-800 bg-slate-950/90 backdrop-blur px-6 py-4",
        ResolvedTheme::Light => "border-b border-slate-200 bg-white/90 backdrop-blur px-6 py-4",
    }
}

pub fn panel(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "rounded-xl border border-slate-800 bg-slate-900/60",
        ResolvedTheme::Light => "rounded-xl border border-slate-200 bg-white shadow-sm",
    }
}

pub fn panel_highlight(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "rounded-xl border border-indigo-500/60 bg-indigo-500/10 tl-glow",
        ResolvedTheme::Light => "rounded-xl border border-indigo-400 bg-indigo-50 tl-glow",
    }
}

pub fn divider(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "divide-y divide-slate-800",
        ResolvedTheme::Light => "divide-y divide-slate-200",
    }
}

// ============================================
// BUTTONS
// ============================================

pub fn btn_primary(_theme: ResolvedTheme) -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn btn_secondary(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-200 hover:border-slate-500 hover:bg-slate-800",
        ResolvedTheme::Light => "rounded-lg border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:border-slate-400 hover:bg-slate-100",
    }
}

pub fn btn_danger(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "rounded-lg px-3 py-1.5 text-xs text-rose-300 hover:bg-rose-500/10",
        ResolvedTheme::Light => "rounded-lg px-3 py-1.5 text-xs text-rose-600 hover:bg-rose-50",
    }
}

pub fn btn_icon(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "h-8 w-8 rounded-lg border border-slate-700 text-slate-200 hover:bg-slate-800",
        ResolvedTheme::Light => "h-8 w-8 rounded-lg border border-slate-300 text-slate-700 hover:bg-slate-100",
    }
}

pub fn tab(theme: ResolvedTheme, active: bool) -> &'static str {
    match (theme, active) {
        (_, true) => "rounded-lg px-4 py-2 text-sm font-semibold bg-indigo-500/15 text-indigo-400 border border-indigo-500/50",
        (ResolvedTheme::Dark, false) => "rounded-lg px-4 py-2 text-sm text-slate-400 border border-transparent hover:border-slate-700 hover:text-slate-200",
        (ResolvedTheme::Light, false) => "rounded-lg px-4 py-2 text-sm text-slate-500 border border-transparent hover:border-slate-300 hover:text-slate-800",
    }
}

// ============================================
// INPUTS
// ============================================

pub fn input_class(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        ResolvedTheme::Light => "w-full rounded-lg border border-slate-300 bg-white px-4 py-2.5 text-sm text-slate-900 focus:border-indigo-500 focus:outline-none",
    }
}

pub fn label_class(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "block text-xs font-semibold uppercase text-slate-500",
        ResolvedTheme::Light => "block text-xs font-semibold uppercase text-slate-500",
    }
}

// ============================================
// TEXT
// ============================================

pub fn text_primary(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "text-slate-100",
        ResolvedTheme::Light => "text-slate-900",
    }
}

pub fn text_muted(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "text-slate-400",
        ResolvedTheme::Light => "text-slate-500",
    }
}

pub fn accent_text(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "text-indigo-300",
        ResolvedTheme::Light => "text-indigo-600",
    }
}

pub fn chip(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "inline-flex items-center rounded-full border border-slate-700 bg-slate-800/60 px-2.5 py-0.5 text-xs text-slate-300",
        ResolvedTheme::Light => "inline-flex items-center rounded-full border border-slate-200 bg-slate-100 px-2.5 py-0.5 text-xs text-slate-700",
    }
}

pub fn link_class(theme: ResolvedTheme) -> &'static str {
    match theme {
        ResolvedTheme::Dark => "text-sm font-semibold text-indigo-300 hover:text-indigo-100",
        ResolvedTheme::Light => "text-sm font-semibold text-indigo-600 hover:text-indigo-800",
    }
}
