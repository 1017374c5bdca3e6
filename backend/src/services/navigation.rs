//! Keeps every in-template link under the tenant-template prefix
//! (`/demo/<templateId>/...`). Applied to each href the page payload emits,
//! so the scoping is per rendered template rather than document-wide.

#[derive(Debug, Clone)]
pub struct NavScope {
    base: String,
    prefix: String,
    origin: Option<String>,
}

impl NavScope {
    /// `origin` is the site's own scheme+host; absolute links to it are
    /// treated as same-origin and scoped too.
    pub fn new(base_path: &str, template_id: &str, origin: Option<&str>) -> Self {
        let base = base_path.trim_matches('/');
        let (base, prefix) = if base.is_empty() {
            (String::new(), format!("/{template_id}"))
        } else {
            (format!("/{base}"), format!("/{base}/{template_id}"))
        };
        NavScope {
            base,
            prefix,
            origin: origin
                .map(|o| o.trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn scope_href(&self, href: &str) -> String {
        let href = href.trim();
        if href.is_empty() {
            return self.prefix.clone();
        }
        if href.starts_with('#') || href.starts_with('?') {
            return href.to_string();
        }
        if href.starts_with("//") {
            return href.to_string();
        }
        if has_scheme(href) {
            return match self.same_origin_path(href) {
                Some(path) => format!("{}{}", self.origin.as_deref().unwrap_or_default(), self.scope_path(path)),
                None => href.to_string(),
            };
        }
        if href.starts_with('/') {
            self.scope_path(href)
        } else {
            self.scope_path(&format!("/{href}"))
        }
    }

    fn same_origin_path<'a>(&self, href: &'a str) -> Option<&'a str> {
        let origin = self.origin.as_deref()?;
        let rest = href.strip_prefix(origin)?;
        match rest.chars().next() {
            None => Some("/"),
            Some('/') => Some(rest),
            Some('?') | Some('#') => Some(rest),
            _ => None,
        }
    }

    fn scope_path(&self, href: &str) -> String {
        let split = href.find(['?', '#']).unwrap_or(href.len());
        let (path, tail) = href.split_at(split);
        let path = resolve_dots(path);
        if self.is_scoped(&path) {
            return format!("{path}{tail}");
        }
        if path.is_empty() {
            format!("{}{}", self.prefix, tail)
        } else {
            format!("{}{}{}", self.prefix, path, tail)
        }
    }

    /// Anything under the demo base already names a template.
    fn is_scoped(&self, path: &str) -> bool {
        let under = |root: &str| {
            path == root
                || path
                    .strip_prefix(root)
                    .is_some_and(|rest| rest.starts_with('/'))
        };
        under(&self.prefix) || (!self.base.is_empty() && path.starts_with(&format!("{}/", self.base)))
    }
}

/// Collapses `.` and `..` segments and trailing slashes; `..` never climbs
/// above the root. The result is empty or starts with `/`.
fn resolve_dots(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.iter().map(|s| format!("/{s}")).collect()
}

/// `mailto:`, `tel:`, `https:` and friends.
fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(idx) if idx > 0 => href[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}
