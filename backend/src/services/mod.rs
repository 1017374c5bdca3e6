pub mod derive;
pub mod metrics;
pub mod navigation;
pub mod normalize;
pub mod notice;
pub mod pages;
pub mod tenants;
pub mod view_model;
