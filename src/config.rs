//! Report configuration
//!
//! This module holds the options that shape a rendered report:
//! - Column header text
//! - Inter-column padding for text output
//! - Unit descriptors on numeric cells
//! - Section and group behavior
//! - System information prefix

/// Header text for every column, independently overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeaders {
    pub group: String,
    pub subgroup: String,
    pub name: String,
    pub description: String,
    pub operations: String,
    pub nanos_per_op: String,
    pub bytes_per_op: String,
    pub allocs_per_op: String,
    pub note: String,
}

impl Default for ColumnHeaders {
    fn default() -> Self {
        Self {
            group: "Group".to_string(),
            subgroup: "SubGroup".to_string(),
            name: "Name".to_string(),
            description: "Description".to_string(),
            operations: "Operations".to_string(),
            nanos_per_op: "Ns/Op".to_string(),
            bytes_per_op: "Bytes/Op".to_string(),
            allocs_per_op: "Allocs/Op".to_string(),
            note: "Note".to_string(),
        }
    }
}

/// Options controlling how a record set is rendered.
///
/// All renderers take the configuration by reference; nothing here is
/// mutated during a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Header labels used by the text and Markdown renderers
    pub headers: ColumnHeaders,
    /// Spaces between text columns
    pub column_padding: usize,
    /// Append unit text ("ns/op", "bytes/op", ...) to numeric text cells
    pub include_ops_column_descriptors: bool,
    pub include_system_info: bool,
    /// Takes precedence over `include_system_info`
    pub include_detailed_system_info: bool,
    /// Start a new section whenever the group changes between adjacent records
    pub section_per_group: bool,
    /// Repeat the header (text/CSV) or start a new table (Markdown) per section
    pub section_headers: bool,
    /// Markdown, with `section_per_group`: print the group as a section title
    /// and drop the group column
    pub group_as_section_name: bool,
    /// Markdown: prefix written before a section title
    pub section_heading_marker: String,
    /// Optional title of the whole set
    pub name: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            headers: ColumnHeaders::default(),
            column_padding: 2,
            include_ops_column_descriptors: false,
            include_system_info: false,
            include_detailed_system_info: false,
            section_per_group: false,
            section_headers: false,
            group_as_section_name: false,
            section_heading_marker: "### ".to_string(),
            name: None,
            description: None,
            note: None,
        }
    }
}

/// Which system information block, if any, precedes the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemInfoLevel {
    None,
    Basic,
    Detailed,
}

impl ReportConfig {
    /// Resolve the two system-info flags; detailed wins over basic.
    pub fn system_info_level(&self) -> SystemInfoLevel {
        if self.include_detailed_system_info {
            SystemInfoLevel::Detailed
        } else if self.include_system_info {
            SystemInfoLevel::Basic
        } else {
            SystemInfoLevel::None
        }
    }

    /// Whether sections repeat their header row or open a new table.
    pub fn sections_have_headers(&self) -> bool {
        self.section_per_group && self.section_headers
    }

    /// Whether group names title Markdown sections in place of a group column.
    pub fn groups_name_sections(&self) -> bool {
        self.section_per_group && self.group_as_section_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.column_padding, 2);
        assert_eq!(config.headers.nanos_per_op, "Ns/Op");
        assert!(!config.section_per_group);
        assert_eq!(config.system_info_level(), SystemInfoLevel::None);
    }

    #[test]
    fn test_detailed_system_info_wins() {
        let config = ReportConfig { include_system_info: true, include_detailed_system_info: true, ..Default::default() };
        assert_eq!(config.system_info_level(), SystemInfoLevel::Detailed);

        let config = ReportConfig { include_system_info: true, ..Default::default() };
        assert_eq!(config.system_info_level(), SystemInfoLevel::Basic);
    }

    #[test]
    fn test_section_headers_require_sectioning() {
        let config = ReportConfig { section_headers: true, ..Default::default() };
        assert!(!config.sections_have_headers());
    }

    #[test]
    fn test_group_names_need_sectioning() {
        let config = ReportConfig { group_as_section_name: true, ..Default::default() };
        assert!(!config.groups_name_sections());

        let config = ReportConfig { group_as_section_name: true, section_per_group: true, ..Default::default() };
        assert!(config.groups_name_sections());
    }
}
