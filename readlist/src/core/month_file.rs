// src/core/month_file.rs
use crate::config::HeaderConfig;
use crate::models::MonthKey;
use anyhow::{Context as _, Result, anyhow};
use chrono::{DateTime, Datelike as _, FixedOffset, NaiveDate, TimeZone as _, Utc};
use std::fs::File;
use std::io::Write as _;
use std::path::Path;
use tracing::debug;

/// Layout of the `date` front matter field.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Computes the publish timestamp of a month digest.
///
/// A digest for the current or a future month is stamped with `now`. A past
/// month is stamped with the first instant of the following month, so older
/// digests sort chronologically while none of them look future-dated to the
/// site generator. Both are expressed in `offset`.
///
/// # Arguments
///
/// * `month` - The digest month
/// * `now` - The current instant
/// * `offset` - Offset the header timestamps are written in
///
/// # Errors
///
/// Returns an error if the month key does not name a calendar month, e.g.
/// `202313`.
#[inline]
pub fn normalize_date(
    month: &MonthKey,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>> {
    let local_now = now.with_timezone(&offset);
    let now_value = u32::try_from(local_now.year())
        .context("Current year is negative")?
        .saturating_mul(100)
        .saturating_add(local_now.month());
    let value = month.value();

    debug!("Now: {now_value}, month: {value}");

    if value >= now_value {
        return Ok(local_now);
    }

    let (year, mon) = (value / 100, value % 100);
    let year = i32::try_from(year).with_context(|| format!("Invalid month key: {month}"))?;
    let start = NaiveDate::from_ymd_opt(year, mon, 1)
        .ok_or_else(|| anyhow!("Invalid month key: {month}"))?;
    let next = start
        .checked_add_months(chrono::Months::new(1))
        .ok_or_else(|| anyhow!("Month out of range: {month}"))?;
    let midnight = next
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Month out of range: {month}"))?;

    offset
        .from_local_datetime(&midnight)
        .single()
        .ok_or_else(|| anyhow!("Ambiguous start of month after {month}"))
}

/// Substitutes `{month}`, `{year}`, `{mon}` and `{period}` in `template`.
#[inline]
#[must_use]
pub fn fill_template(template: &str, month: &MonthKey) -> String {
    let period = format!("{} 年 {} 月", month.year(), month.month());
    template
        .replace("{month}", month.as_str())
        .replace("{year}", month.year())
        .replace("{mon}", month.month())
        .replace("{period}", &period)
}

/// Renders the front matter block opening a month digest.
#[inline]
#[must_use]
pub fn render_header(
    header: &HeaderConfig,
    month: &MonthKey,
    published: &DateTime<FixedOffset>,
) -> String {
    let mut out = String::from("+++\n");
    out.push_str(&format!(
        "title = '{}'\n",
        fill_template(&header.title, month)
    ));
    out.push_str(&format!("date = {}\n", published.format(TIME_FORMAT)));
    out.push_str(&format!("draft = {}\n", header.draft));
    if let Some(description) = &header.description {
        out.push_str(&format!(
            "description = \"{}\"\n",
            fill_template(description, month)
        ));
    }
    out.push_str("+++\n\n");
    if let Some(disclaimer) = &header.disclaimer {
        out.push_str(&format!("> \"{}\"\n", fill_template(disclaimer, month)));
    }
    out
}

/// Creates (or truncates) the digest file at `path` and writes its header.
///
/// # Errors
///
/// This function may return an error if:
/// * The header offset or month key is invalid
/// * The file cannot be created or written
#[inline]
pub fn make_month_file(
    path: &Path,
    month: &MonthKey,
    header: &HeaderConfig,
    now: DateTime<Utc>,
) -> Result<()> {
    let published = normalize_date(month, now, header.offset()?)?;
    let content = render_header(header, month, &published);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create digest file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write header: {}", path.display()))?;

    debug!("Wrote header for {month} to {}", path.display());
    Ok(())
}
