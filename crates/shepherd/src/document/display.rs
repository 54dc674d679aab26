//! Rendering a metadata record back to Markdown

use std::fmt;

use super::{Field, MetadataRecord};

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {}: {}", self.raw_name, self.value)?;
        for child in &self.children {
            write!(f, "\n  * {}", child)?;
        }
        Ok(())
    }
}

impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.entries() {
            writeln!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl MetadataRecord {
    /// Render the record back to its bullet-list form.
    ///
    /// Field order, raw names, values, and sub-lists are preserved, so
    /// re-parsing the output yields an equal record.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}
