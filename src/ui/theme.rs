//! Shared class strings so cards, pages and the shell stay visually consistent.

use crate::domain::ConfidenceTier;

// ============================================
// CONFIDENCE STYLES
// ============================================

pub fn tier_badge(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ConfidenceTier::Medium => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ConfidenceTier::Low => "bg-rose-500/10 text-rose-300 border-rose-500/40",
    }
}

pub fn tier_bar(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => "bg-emerald-400",
        ConfidenceTier::Medium => "bg-amber-400",
        ConfidenceTier::Low => "bg-rose-400",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:border-slate-500 hover:text-slate-100 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn btn_danger() -> &'static str {
    "rounded-lg border border-rose-500/40 px-4 py-2 text-sm text-rose-200 hover:bg-rose-500/10 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn btn_icon() -> &'static str {
    "rounded-md px-2 py-1 text-sm text-slate-500 hover:text-slate-200 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn link_class() -> &'static str {
    "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300"
    } else {
        "rounded-lg border border-transparent px-4 py-2 text-slate-400 hover:border-slate-700 hover:text-slate-200"
    }
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn card_panel() -> &'static str {
    "relative rounded-xl border border-slate-800 bg-slate-900/40 p-4 shadow-sm"
}

pub fn menu_panel() -> &'static str {
    "absolute left-0 top-full z-20 mt-1 w-56 rounded-lg border border-slate-700 bg-slate-950 py-1 shadow-lg"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}
