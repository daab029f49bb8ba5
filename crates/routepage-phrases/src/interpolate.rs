// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Values available to `{placeholder}` substitution.
///
/// Ordered so that cache keys built from it are stable.
pub type Vars = BTreeMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    #[error("template references undefined value `{0}`")]
    Missing(String),
    #[error("unterminated placeholder in template: {0}")]
    Unterminated(String),
}

fn placeholder_re() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").unwrap())
}

/// Fills `{name}` placeholders from `vars`. An undefined name is an error
/// rather than an empty substitution, so callers can pick a fallback.
pub fn interpolate(template: &str, vars: &Vars) -> Result<String, InterpolationError> {
    render(template, vars, |v| v.to_string())
}

/// Like [`interpolate`], but HTML-escapes the substituted values. The
/// template itself is trusted markup.
pub fn interpolate_html(template: &str, vars: &Vars) -> Result<String, InterpolationError> {
    render(template, vars, |v| html_escape::encode_text(v).into_owned())
}

/// Names referenced by a template, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_re().captures_iter(template) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn render<F>(template: &str, vars: &Vars, encode: F) -> Result<String, InterpolationError>
where
    F: Fn(&str) -> String,
{
    // A '{' that is not part of a valid placeholder would leak template
    // syntax into the page.
    if has_stray_brace(template) {
        return Err(InterpolationError::Unterminated(template.to_string()));
    }

    let mut out = String::with_capacity(template.len() + 32);
    let mut last = 0;

    for caps in placeholder_re().captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = &caps[1];
        let value = vars
            .get(name)
            .ok_or_else(|| InterpolationError::Missing(name.to_string()))?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(&encode(value));
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}

fn has_stray_brace(template: &str) -> bool {
    let stripped = placeholder_re().replace_all(template, "");
    stripped.contains('{')
}
