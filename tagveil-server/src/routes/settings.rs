//! Settings endpoints: the administrative form and its JSON equivalent
//!
//! The form mirrors what the policy reads: a mode radio and the two
//! comma-separated tag lists, with the inactive list disabled client-side
//! to match the selected mode. Tag lists are persisted as typed, they are
//! normalized by the policy's parse step at evaluation time, not here;
//! only the mode is validated on write.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use serde::Deserialize;
use std::sync::Arc;
use tagveil_core::{PolicyMode, RawPolicySettings};

/// Form body for POST /settings.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    /// Submitted mode string.
    pub mode: String,
    /// Comma-separated excluded tags. Absent when the field is disabled.
    #[serde(default)]
    pub excluded_tags: String,
    /// Comma-separated included tags. Absent when the field is disabled.
    #[serde(default)]
    pub included_tags: String,
}

/// Settings form page
///
/// GET /settings
pub async fn settings_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let current = state.settings.load();
    Html(render_form(&current))
}

/// Persist settings submitted from the administrative form
///
/// POST /settings
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect> {
    let settings = validate(form, &state.settings.load())?;
    state.settings.save(settings)?;
    tracing::info!("policy settings updated");
    Ok(Redirect::to("/settings"))
}

/// Current settings as JSON
///
/// GET /settings.json
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<RawPolicySettings> {
    Json(state.settings.load())
}

/// Replace settings from JSON
///
/// PUT /settings.json
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RawPolicySettings>,
) -> Result<Json<RawPolicySettings>> {
    let form = SettingsForm {
        mode: body.mode,
        excluded_tags: body.excluded_tags,
        included_tags: body.included_tags,
    };
    let settings = validate(form, &state.settings.load())?;
    state.settings.save(settings.clone())?;
    tracing::info!("policy settings updated");
    Ok(Json(settings))
}

/// Check the submitted mode; keep a disabled (empty-submitted) tag list at
/// its current value so toggling modes never wipes the inactive list.
fn validate(form: SettingsForm, current: &RawPolicySettings) -> Result<RawPolicySettings> {
    let mode: PolicyMode = form
        .mode
        .parse()
        .map_err(|e: tagveil_core::CoreError| ServerError::bad_request(e.to_string()))?;
    let excluded_tags = if form.excluded_tags.is_empty() && mode == PolicyMode::Inclusive {
        current.excluded_tags.clone()
    } else {
        form.excluded_tags
    };
    let included_tags = if form.included_tags.is_empty() && mode == PolicyMode::Exclusive {
        current.included_tags.clone()
    } else {
        form.included_tags
    };
    Ok(RawPolicySettings {
        mode: mode.as_str().to_string(),
        excluded_tags,
        included_tags,
    })
}

/// Render the settings form with the current values filled in.
fn render_form(current: &RawPolicySettings) -> String {
    let inclusive = current.mode == PolicyMode::Inclusive.as_str();
    let (exclusive_checked, inclusive_checked) = if inclusive {
        ("", " checked")
    } else {
        (" checked", "")
    };
    let (excluded_disabled, included_disabled) = if inclusive {
        (" disabled", "")
    } else {
        ("", " disabled")
    };

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Tagveil Settings</title>
</head>
<body>
<h1>Tagveil</h1>
<form method="post" action="/settings">
  <fieldset>
    <legend>Mode</legend>
    <label>
      <input type="radio" name="mode" value="exclusive" id="mode-exclusive"{exclusive_checked}>
      Exclusive (hide posts with the excluded tags)
    </label><br>
    <label>
      <input type="radio" name="mode" value="inclusive" id="mode-inclusive"{inclusive_checked}>
      Inclusive (only show posts with the included tags)
    </label>
  </fieldset>
  <p>
    <label for="excluded-tags">Excluded tags</label><br>
    <input type="text" id="excluded-tags" name="excluded_tags" value="{excluded}"{excluded_disabled}><br>
    <small>Separate multiple tags with commas</small>
  </p>
  <p>
    <label for="included-tags">Included tags</label><br>
    <input type="text" id="included-tags" name="included_tags" value="{included}"{included_disabled}><br>
    <small>Separate multiple tags with commas</small>
  </p>
  <p><input type="submit" value="Save Changes"></p>
</form>
<script>
  var exclusive = document.getElementById('mode-exclusive');
  var inclusive = document.getElementById('mode-inclusive');
  function syncFields() {{
    document.getElementById('excluded-tags').disabled = !exclusive.checked;
    document.getElementById('included-tags').disabled = !inclusive.checked;
  }}
  exclusive.addEventListener('change', syncFields);
  inclusive.addEventListener('change', syncFields);
</script>
</body>
</html>
"#,
        exclusive_checked = exclusive_checked,
        inclusive_checked = inclusive_checked,
        excluded = html_escape(&current.excluded_tags),
        excluded_disabled = excluded_disabled,
        included = html_escape(&current.included_tags),
        included_disabled = included_disabled,
    )
}

/// Escape a value for an HTML attribute.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_unknown_mode() {
        let form = SettingsForm {
            mode: "open".to_string(),
            excluded_tags: String::new(),
            included_tags: String::new(),
        };
        assert!(validate(form, &RawPolicySettings::default()).is_err());
    }

    #[test]
    fn test_validate_keeps_disabled_field_value() {
        // Switching to inclusive submits an empty (disabled) excluded
        // field; the stored excluded list survives.
        let current = RawPolicySettings::default();
        let form = SettingsForm {
            mode: "inclusive".to_string(),
            excluded_tags: String::new(),
            included_tags: "public".to_string(),
        };
        let saved = validate(form, &current).unwrap();
        assert_eq!(saved.mode, "inclusive");
        assert_eq!(saved.excluded_tags, current.excluded_tags);
        assert_eq!(saved.included_tags, "public");
    }

    #[test]
    fn test_render_form_marks_current_mode() {
        let html = render_form(&RawPolicySettings::default());
        assert!(html.contains(r#"value="exclusive" id="mode-exclusive" checked"#));
        assert!(html.contains(r#"name="included_tags" value="Public" disabled"#));
    }

    #[test]
    fn test_render_form_escapes_values() {
        let settings = RawPolicySettings {
            excluded_tags: "a\"b, <tag>".to_string(),
            ..RawPolicySettings::default()
        };
        let html = render_form(&settings);
        assert!(html.contains("a&quot;b, &lt;tag&gt;"));
        assert!(!html.contains("a\"b"));
    }
}
