//! Campaign slugs, progress and donation-option rules.
//!
//! Slug helpers are shared with dynamic forms, which are also addressed by
//! slug from the public site.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Maximum number of suggested donation amounts on one campaign.
pub const MAX_DONATION_OPTIONS: usize = 20;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 120;

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Generate a URL-safe slug from a title.
///
/// Lowercases, replaces every non-alphanumeric run with a single hyphen and
/// trims hyphens from both ends.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_hyphen = true;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');
    trimmed.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

fn random_slug(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}

/// Validate a slug (non-empty, lowercase alphanumerics and hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

/// Use the explicit slug when given, otherwise derive one from the title.
///
/// Titles with no ASCII alphanumerics (for example Devanagari-only titles)
/// get `{fallback_prefix}-{8 hex chars}` instead of an empty slug.
pub fn resolve_slug(
    explicit: Option<&str>,
    title: &str,
    fallback_prefix: &str,
) -> Result<String, CoreError> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => {
            let generated = generate_slug(title);
            if generated.is_empty() {
                random_slug(fallback_prefix)
            } else {
                generated
            }
        }
    };
    validate_slug(&slug)?;
    Ok(slug)
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Percentage of the goal raised, capped at 100 and rounded to one decimal.
pub fn progress_percent(raised: f64, goal: f64) -> f64 {
    if goal <= 0.0 || raised <= 0.0 {
        return 0.0;
    }
    let pct = (raised / goal * 100.0).min(100.0);
    (pct * 10.0).round() / 10.0
}

/// Validate suggested donation amounts: each positive, at most
/// [`MAX_DONATION_OPTIONS`].
pub fn validate_donation_options(options: &[f64]) -> Result<(), CoreError> {
    if options.len() > MAX_DONATION_OPTIONS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_DONATION_OPTIONS} donation options are allowed"
        )));
    }
    if let Some(bad) = options.iter().find(|o| !o.is_finite() || **o <= 0.0) {
        return Err(CoreError::Validation(format!(
            "Donation options must be positive amounts, got {bad}"
        )));
    }
    Ok(())
}

/// Whether a campaign deadline has passed as of `today`.
///
/// The deadline day itself is still open for donations.
pub fn is_past_deadline(deadline: Option<NaiveDate>, today: NaiveDate) -> bool {
    deadline.is_some_and(|d| today > d)
}
