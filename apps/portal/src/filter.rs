//! Client-side filter over the visible slice of suggestions.
//!
//! Filtering never touches pagination: it is re-applied to whatever prefix is
//! currently revealed, so counters stay independent of the active filters.

use std::str::FromStr;

use thiserror::Error;

use crate::models::JobCard;

/// Default location filter, matching the region the recommendations target.
pub const DEFAULT_LOCATION: &str = "India";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("unknown salary band '{0}' (expected one of: 3-6, 6-10, 10-20)")]
    SalaryBand(String),

    #[error("unknown work mode '{0}' (expected one of: remote, hybrid, onsite)")]
    WorkMode(String),
}

/// Salary bands offered by the portal, in lakhs per annum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryBand {
    #[default]
    Any,
    From3To6,
    From6To10,
    From10To20,
}

impl SalaryBand {
    /// Inclusive `[min, max]`, or `None` when the band does not filter.
    pub fn bounds(self) -> Option<(u64, u64)> {
        match self {
            SalaryBand::Any => None,
            SalaryBand::From3To6 => Some((3, 6)),
            SalaryBand::From6To10 => Some((6, 10)),
            SalaryBand::From10To20 => Some((10, 20)),
        }
    }
}

impl FromStr for SalaryBand {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(SalaryBand::Any),
            "3-6" => Ok(SalaryBand::From3To6),
            "6-10" => Ok(SalaryBand::From6To10),
            "10-20" => Ok(SalaryBand::From10To20),
            other => Err(FilterParseError::SalaryBand(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkMode {
    #[default]
    Any,
    Remote,
    Hybrid,
    Onsite,
}

impl WorkMode {
    /// Wire value compared against a suggestion's work mode.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            WorkMode::Any => None,
            WorkMode::Remote => Some("remote"),
            WorkMode::Hybrid => Some("hybrid"),
            WorkMode::Onsite => Some("onsite"),
        }
    }
}

impl FromStr for WorkMode {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(WorkMode::Any),
            "remote" => Ok(WorkMode::Remote),
            "hybrid" => Ok(WorkMode::Hybrid),
            "onsite" => Ok(WorkMode::Onsite),
            other => Err(FilterParseError::WorkMode(other.to_string())),
        }
    }
}

/// How the location filter treats suggestions that carry no location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationMatch {
    /// Only labelled suggestions can be excluded; unlabelled ones always pass.
    #[default]
    LabeledOnly,
    /// Unlabelled suggestions are excluded whenever a location is selected.
    RequireLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub salary: SalaryBand,
    /// Case-sensitive substring; empty means the default region.
    pub location: String,
    pub work_mode: WorkMode,
    pub location_match: LocationMatch,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            salary: SalaryBand::Any,
            location: DEFAULT_LOCATION.to_string(),
            work_mode: WorkMode::Any,
            location_match: LocationMatch::LabeledOnly,
        }
    }
}

/// Whether `job` passes every active filter. Pure and idempotent.
pub fn matches(job: &JobCard, filter: &FilterState) -> bool {
    if let Some((min, max)) = filter.salary.bounds() {
        match first_integer(&job.salary_range) {
            Some(value) if (min..=max).contains(&value) => {}
            _ => return false,
        }
    }

    let wanted = effective_location(&filter.location);
    match job.location.as_deref() {
        Some(location) if !location.contains(wanted) => return false,
        None if filter.location_match == LocationMatch::RequireLabel => return false,
        _ => {}
    }

    if let (Some(wanted), Some(mode)) = (filter.work_mode.as_str(), job.work_mode.as_deref()) {
        if mode != wanted {
            return false;
        }
    }

    true
}

/// Location used for filtering and job-board searches; an empty selection
/// falls back to the default region.
pub fn effective_location(location: &str) -> &str {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        DEFAULT_LOCATION
    } else {
        trimmed
    }
}

/// Applies the filter to the revealed prefix, preserving order.
pub fn apply<'a>(visible: &'a [JobCard], filter: &FilterState) -> Vec<&'a JobCard> {
    visible.iter().filter(|job| matches(job, filter)).collect()
}

/// First run of ASCII digits in `text`, e.g. `"₹6-10 LPA"` → 6.
fn first_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = &text[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(salary: &str, location: Option<&str>, work_mode: Option<&str>) -> JobCard {
        JobCard {
            job_title: "Developer".into(),
            salary_range: salary.into(),
            location: location.map(str::to_string),
            work_mode: work_mode.map(str::to_string),
            ..JobCard::default()
        }
    }

    fn salary_filter(band: SalaryBand) -> FilterState {
        FilterState {
            salary: band,
            ..FilterState::default()
        }
    }

    #[test]
    fn test_default_filter_keeps_unlabelled_jobs() {
        assert!(matches(&job("", None, None), &FilterState::default()));
    }

    #[test]
    fn test_salary_above_band_is_excluded() {
        let filter = salary_filter(SalaryBand::From6To10);
        assert!(!matches(&job("12 LPA", None, None), &filter));
    }

    #[test]
    fn test_salary_bounds_are_inclusive() {
        let filter = salary_filter(SalaryBand::From6To10);
        assert!(matches(&job("6-8 LPA", None, None), &filter));
        assert!(matches(&job("INR 10 LPA", None, None), &filter));
        assert!(!matches(&job("5-7 LPA", None, None), &filter));
    }

    #[test]
    fn test_salary_without_number_is_excluded_only_when_band_selected() {
        let unknown = job("Competitive", None, None);
        assert!(!matches(&unknown, &salary_filter(SalaryBand::From3To6)));
        assert!(matches(&unknown, &salary_filter(SalaryBand::Any)));
    }

    #[test]
    fn test_first_integer_parses_leading_digits_only() {
        assert_eq!(first_integer("₹12-18 LPA"), Some(12));
        assert_eq!(first_integer("no digits"), None);
        assert_eq!(first_integer("3"), Some(3));
    }

    #[test]
    fn test_location_substring_is_case_sensitive() {
        let filter = FilterState {
            location: "Pune".into(),
            ..FilterState::default()
        };
        assert!(matches(&job("", Some("Pune, India"), None), &filter));
        assert!(!matches(&job("", Some("pune"), None), &filter));
        assert!(!matches(&job("", Some("Mumbai"), None), &filter));
    }

    #[test]
    fn test_require_label_excludes_unlabelled_jobs() {
        let filter = FilterState {
            location_match: LocationMatch::RequireLabel,
            ..FilterState::default()
        };
        assert!(!matches(&job("", None, None), &filter));
        assert!(matches(&job("", Some("Bangalore, India"), None), &filter));
    }

    #[test]
    fn test_empty_location_falls_back_to_default_region() {
        let filter = FilterState {
            location: String::new(),
            ..FilterState::default()
        };
        assert!(!matches(&job("", Some("Berlin"), None), &filter));
        assert!(matches(&job("", Some("Hyderabad, India"), None), &filter));
        assert!(matches(&job("", None, None), &filter));
    }

    #[test]
    fn test_filter_and_links_share_effective_location() {
        assert_eq!(effective_location(""), DEFAULT_LOCATION);
        assert_eq!(effective_location(" Chennai "), "Chennai");
    }

    #[test]
    fn test_work_mode_must_match_exactly_when_present() {
        let filter = FilterState {
            work_mode: WorkMode::Remote,
            ..FilterState::default()
        };
        assert!(matches(&job("", None, Some("remote")), &filter));
        assert!(!matches(&job("", None, Some("Remote")), &filter));
        assert!(!matches(&job("", None, Some("hybrid")), &filter));
        assert!(matches(&job("", None, None), &filter));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = FilterState {
            salary: SalaryBand::From10To20,
            location: "Delhi".into(),
            work_mode: WorkMode::Onsite,
            location_match: LocationMatch::LabeledOnly,
        };
        let candidate = job("15 LPA", Some("Delhi NCR"), Some("onsite"));
        let first = matches(&candidate, &filter);
        assert_eq!(first, matches(&candidate, &filter));
        assert!(first);
    }

    #[test]
    fn test_apply_preserves_order() {
        let visible = vec![
            job("4 LPA", None, None),
            job("12 LPA", None, None),
            job("5 LPA", None, None),
        ];
        let kept = apply(&visible, &salary_filter(SalaryBand::From3To6));
        let salaries: Vec<&str> = kept.iter().map(|j| j.salary_range.as_str()).collect();
        assert_eq!(salaries, vec!["4 LPA", "5 LPA"]);
    }

    #[test]
    fn test_parse_filter_values() {
        assert_eq!("6-10".parse::<SalaryBand>(), Ok(SalaryBand::From6To10));
        assert_eq!("".parse::<SalaryBand>(), Ok(SalaryBand::Any));
        assert!("1-2".parse::<SalaryBand>().is_err());
        assert_eq!("hybrid".parse::<WorkMode>(), Ok(WorkMode::Hybrid));
        assert!("office".parse::<WorkMode>().is_err());
    }
}
