use lazy_static::lazy_static;
use prometheus::{register_counter, register_counter_vec, Counter, CounterVec};

lazy_static! {
    pub static ref PAGE_RENDERS_COUNTER: CounterVec = register_counter_vec!(
        "site_page_renders_total",
        "Pages rendered by template and screen",
        &["template", "screen"]
    ).unwrap();

    pub static ref TENANT_STATUS_COUNTER: CounterVec = register_counter_vec!(
        "site_tenant_status_total",
        "Tenant content fetch outcomes by status",
        &["status"]
    ).unwrap();

    pub static ref TEMPLATE_MISSES_COUNTER: Counter = register_counter!(
        "site_template_lookup_misses_total",
        "Requests for a template id that is not registered"
    ).unwrap();
}
