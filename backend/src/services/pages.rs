//! Page assembly: registry lookup, adaptation, routing, view model, chrome
//! and system notice, in that order.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    models::{
        site::SiteContent,
        tenant::TenantState,
        view::{NavLink, RenderedPage, ScreenView, SiteChrome},
    },
    services::{
        metrics::{PAGE_RENDERS_COUNTER, TEMPLATE_MISSES_COUNTER},
        navigation::NavScope,
        normalize::normalize,
        notice::system_notice,
    },
    templates::{RegistryError, TemplateRegistry},
};

#[derive(Debug, Clone)]
pub struct PageRequest<'a> {
    pub template_id: &'a str,
    pub school_id: &'a str,
    /// Path inside the template, e.g. `/about`.
    pub path: &'a str,
    /// Mount point of the template tree, e.g. `/demo`.
    pub base_path: &'a str,
    pub origin: Option<&'a str>,
    /// Visitor dismissed the error notice on this page view.
    pub dismissed: bool,
}

pub fn render_page(
    registry: &TemplateRegistry,
    request: &PageRequest<'_>,
    tenant: &TenantState,
    now: DateTime<Utc>,
) -> Result<RenderedPage, RegistryError> {
    let template = registry.lookup(request.template_id).inspect_err(|e| {
        TEMPLATE_MISSES_COUNTER.inc();
        debug!("{e}");
    })?;

    let content = match &tenant.data {
        Some(raw) => normalize(raw.clone()),
        None => SiteContent::fallback(request.school_id),
    };
    let content = template.renderer.adapt_data(content);
    let rendered = template.renderer.render(&content, request.path, now);

    let scope = NavScope::new(request.base_path, template.id, request.origin);
    let mut screen = rendered.view;
    if let ScreenView::Admission(view) = &mut screen {
        view.admission.fee_payment_url = view
            .admission
            .fee_payment_url
            .as_deref()
            .map(|href| scope.scope_href(href));
    }

    let chrome = SiteChrome {
        school_id: content.meta.school_id.clone(),
        school_name: content.meta.school_name.clone(),
        branding: content.branding.clone(),
        nav: template
            .renderer
            .nav()
            .into_iter()
            .map(|(label, path)| NavLink {
                label: label.to_string(),
                href: scope.scope_href(path),
            })
            .collect(),
        contact: content.contact.clone(),
        footer: content.footer.clone(),
    };

    let notice = system_notice(tenant, request.dismissed, &scope.scope_href(request.path));

    PAGE_RENDERS_COUNTER
        .with_label_values(&[template.id, &screen.screen().to_string()])
        .inc();

    Ok(RenderedPage {
        template_id: template.id.to_string(),
        template_name: template.name.to_string(),
        route: rendered.route.to_string(),
        base_path: scope.prefix().to_string(),
        screen,
        chrome,
        tenant_status: tenant.status,
        notice,
    })
}
