//! Internationalization (i18n) for the two site languages.
//!
//! # Architecture
//!
//! - `locale`: the `Locale` type and `Localized<T>` pairs
//! - `registry`: single source of truth for locale metadata
//! - `strings`: localized UI strings
//!
//! # Example
//!
//! ```rust,ignore
//! use hvac_site::i18n::Locale;
//!
//! let spanish = Locale::from_code("es")?;
//! let title = spanish.config().strings.home_title;
//! let hreflang = spanish.config().hreflang;
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::{Locale, Localized};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
