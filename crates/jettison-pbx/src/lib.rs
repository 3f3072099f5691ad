//! An OpenStep property-list codec for `project.pbxproj` documents.
//!
//! This library parses the textual property-list format Xcode uses for
//! project files into a generic, order-preserving [`Value`] tree, and
//! serializes that tree back to deterministic OpenStep text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod parser;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use parser::from_str;
pub use value::{Dict, Value};
pub use writer::to_string;
