pub mod catalog;
pub mod config;
pub mod contact;
pub mod i18n;
pub mod mailer;
pub mod metrics;
pub mod routing;
pub mod savings;
pub mod security;
pub mod server;
pub mod sitemap;
