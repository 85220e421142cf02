//! Plain-text rendering of the suggestion list.

use std::fmt::Write;

use crate::filter::{self, FilterState};
use crate::pagination::{PaginationState, Phase};

pub const LOADING_INITIAL: &str = "Loading job suggestions...";
pub const LOADING_MORE: &str = "Loading more...";
pub const EXHAUSTED: &str = "No more suggestions";
pub const NO_MATCHES: &str = "No jobs match the current filters.";

/// Renders the filtered visible slice plus the footer for the current phase.
pub fn render(state: &PaginationState, filters: &FilterState) -> String {
    let mut out = String::new();

    match state.phase() {
        Phase::Idle | Phase::LoadingInitial => return LOADING_INITIAL.to_string(),
        Phase::Error(message) => return format!("Error: {message} (type 'retry')"),
        Phase::Ready | Phase::LoadingMore => {}
    }

    let cards = filter::apply(state.visible(), filters);
    if cards.is_empty() {
        out.push_str(NO_MATCHES);
        out.push('\n');
    }
    for (i, job) in cards.iter().enumerate() {
        let _ = writeln!(out, "{}. {} [{}]", i + 1, job.title_or_placeholder(), job.difficulty_or_default());
        if !job.why_good_fit.is_empty() {
            let _ = writeln!(out, "   {}", job.why_good_fit);
        }
        if !job.key_skills.is_empty() {
            let _ = writeln!(out, "   skills: {}", job.key_skills.join(", "));
        }
        if !job.salary_range.is_empty() {
            let _ = writeln!(out, "   salary: {}", job.salary_range);
        }
        let place = [job.location.as_deref(), job.work_mode.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        if !place.is_empty() {
            let _ = writeln!(out, "   {}", place.join(" / "));
        }
    }

    let _ = write!(out, "showing {} of {}", state.visible_count(), state.total());
    if state.is_loading_more() {
        let _ = write!(out, " | {LOADING_MORE}");
    } else if state.is_exhausted() {
        let _ = write!(out, " | {EXHAUSTED}");
    }
    out
}
