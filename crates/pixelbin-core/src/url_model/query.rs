//! Query options (`dpr`, `f_auto`): validation, parsing and formatting.

use serde_json::Value;
use url::Url;

use super::descriptor::QueryOptions;
use crate::error::UrlError;

const DPR_MIN: f64 = 0.1;
const DPR_MAX: f64 = 5.0;

/// Rejects a device-pixel-ratio outside `[0.1, 5.0]` (NaN included).
pub fn validate_dpr(dpr: f64) -> Result<(), UrlError> {
    if !(DPR_MIN..=DPR_MAX).contains(&dpr) {
        return Err(UrlError::IllegalQueryParameter(
            "DPR value should be numeric and should be between 0.1 and 5.0".into(),
        ));
    }
    Ok(())
}

/// Accepts only a JSON boolean; `"true"`, `1` and friends are rejected.
pub fn validate_f_auto(f_auto: &Value) -> Result<bool, UrlError> {
    f_auto.as_bool().ok_or_else(f_auto_error)
}

fn f_auto_error() -> UrlError {
    UrlError::IllegalQueryParameter("F_auto value should be boolean".into())
}

/// Text form of `f_auto` found in a URL query.
fn parse_f_auto_text(raw: &str) -> Result<bool, UrlError> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Ok(false)
    } else {
        Err(f_auto_error())
    }
}

/// Extracts and validates the recognized options from a URL's query string.
/// Unknown keys are ignored; a repeated key keeps its last value.
pub(crate) fn parse_query(url: &Url) -> Result<QueryOptions, UrlError> {
    let mut options = QueryOptions::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "dpr" => {
                // Unparseable numbers fall out of range, same as an explicit 0.
                let dpr = value.trim().parse::<f64>().unwrap_or(0.0);
                validate_dpr(dpr)?;
                options.dpr = Some(dpr);
            }
            "f_auto" => options.f_auto = Some(parse_f_auto_text(value.trim())?),
            _ => {}
        }
    }
    Ok(options)
}

/// Renders the query string (without `?`) in fixed `dpr`, `f_auto` order.
/// Returns `None` when no option is set.
pub(crate) fn format_query(options: &QueryOptions) -> Result<Option<String>, UrlError> {
    let mut pairs = Vec::with_capacity(2);
    if let Some(dpr) = options.dpr {
        validate_dpr(dpr)?;
        // Ties round away from zero, so 2.25 renders as 2.3.
        let rounded = (dpr * 10.0).round() / 10.0;
        pairs.push(format!("dpr={rounded:.1}"));
    }
    if let Some(f_auto) = options.f_auto {
        pairs.push(format!("f_auto={}", if f_auto { "True" } else { "False" }));
    }
    if pairs.is_empty() {
        Ok(None)
    } else {
        Ok(Some(pairs.join("&")))
    }
}
