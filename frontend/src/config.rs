//! Start-up configuration.
//!
//! Defaults can be overridden by `<meta>` tags in the host page, e.g.
//! `<meta name="ledger-api-base-url" content="http://localhost:8080">`.

use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use shared::{Locale, DEFAULT_PAGE_SIZE};
use std::fmt::Display;
use std::str::FromStr;

pub const META_API_BASE_URL: &str = "ledger-api-base-url";
pub const META_PAGE_SIZE: &str = "ledger-page-size";
pub const META_LOCALE: &str = "ledger-locale";
pub const META_LOG_LEVEL: &str = "ledger-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base_url: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub locale: Locale,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 20, 50],
            locale: Locale::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read overrides from the `<meta>` tags of the current document.
    pub fn from_document() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .context("no document to read configuration from")?;

        Ok(Self::default().with_overrides(|name| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|element| element.get_attribute("content"))
        }))
    }

    /// Apply every override `lookup` knows about. Values that fail to parse are
    /// logged and the default is kept.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = lookup(META_API_BASE_URL) {
            self.api_base_url = base_url.trim().to_string();
        }
        if let Some(page_size) = parse_override::<u32>(&lookup, META_PAGE_SIZE) {
            if page_size > 0 {
                self.default_page_size = page_size;
            } else {
                warn!("ignoring {}: page size must be positive", META_PAGE_SIZE);
            }
        }
        if let Some(locale) = parse_override::<Locale>(&lookup, META_LOCALE) {
            self.locale = locale;
        }
        if let Some(level) = parse_override::<LevelFilter>(&lookup, META_LOG_LEVEL) {
            self.log_level = level;
        }

        if !self.page_size_options.contains(&self.default_page_size) {
            self.page_size_options.push(self.default_page_size);
            self.page_size_options.sort_unstable();
        }
        self
    }
}

fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ignoring {}={:?}: {}", name, raw, err);
            None
        }
    }
}
