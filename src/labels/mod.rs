//! Display labels for group keys.
//!
//! - `label_for`: one segment under one dimension
//! - `path_label`: a whole `|`-joined key path
//! - `Translator`: localization seam, with `IdentityTranslator` and
//!   `TableTranslator` implementations

pub mod resolver;
pub mod translator;

pub use resolver::{label_for, path_label, VARIABLE_COST};
pub use translator::{interpolate, IdentityTranslator, TableTranslator, Translator};
