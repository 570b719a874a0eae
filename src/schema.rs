//! Document schema metadata consumed during query compilation
//!
//! The schema itself lives outside this crate; compilation only needs the
//! well-known field names, the path markers, and the declared property types
//! of sort and range terms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field holding the document kind discriminator
pub const FIELD_NAME_KIND: &str = "documentKind";

/// Field holding the document self link
pub const FIELD_NAME_SELF_LINK: &str = "documentSelfLink";

/// Path prefix that matches every document under the index root
pub const ROOT_PATH: &str = "/";

/// Wildcard pattern that matches every indexed term
pub const WILDCARD_ANY: &str = "*";

/// Declared type of an indexed property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Long,
    Double,
    Boolean,
    /// Integer microseconds since the epoch; indexed on the integer path
    Date,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::String => "STRING",
            PropertyType::Long => "LONG",
            PropertyType::Double => "DOUBLE",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::Date => "DATE",
        };
        f.write_str(name)
    }
}

/// Derived field name used for lexicographic sorting
///
/// The naming convention is owned by the index layer; compilation treats the
/// transform as opaque.
pub fn sort_field_name(property_name: &str) -> String {
    format!("{property_name}_sort")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_display() {
        assert_eq!(PropertyType::Long.to_string(), "LONG");
        assert_eq!(PropertyType::Date.to_string(), "DATE");
    }

    #[test]
    fn test_property_type_wire_names() {
        let json = serde_json::to_string(&PropertyType::Double).unwrap();
        assert_eq!(json, "\"DOUBLE\"");
    }

    #[test]
    fn test_sort_field_name() {
        assert_eq!(sort_field_name("name"), "name_sort");
    }
}
