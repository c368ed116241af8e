use bench_report::{ColumnHeaders, OutputFormat, ReportConfig};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "bench-report")]
#[command(about = "Render benchmark measurements as text, CSV, or Markdown tables")]
#[command(version)]
pub struct CliArgs {
    /// JSON file holding an array of benchmark records (default: stdin)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Spaces between text columns
    #[arg(long, default_value = "2")]
    pub padding: usize,

    /// Append unit descriptors ("ns/op", "bytes/op", ...) to numeric text cells
    #[arg(long)]
    pub descriptors: bool,

    /// Prefix the report with processor, memory, and OS information
    #[arg(long)]
    pub system_info: bool,

    /// Like --system-info, plus clock speed, cache size, and kernel version
    #[arg(long)]
    pub detailed_system_info: bool,

    /// Start a new section whenever the group changes
    #[arg(long)]
    pub section_per_group: bool,

    /// Repeat the header per section (Markdown: one table per section)
    #[arg(long, requires = "section_per_group")]
    pub section_headers: bool,

    /// Markdown: use group names as section titles instead of a column
    #[arg(long)]
    pub group_as_section_name: bool,

    /// Markdown: prefix written before section titles
    #[arg(long, value_name = "MARKER", default_value = "### ")]
    pub heading_marker: String,

    /// Title line of the report
    #[arg(long)]
    pub title: Option<String>,

    /// Description line of the report
    #[arg(long)]
    pub description: Option<String>,

    /// Note written after the report
    #[arg(long)]
    pub note: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub group_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub subgroup_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub name_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub description_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub operations_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub ns_op_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub bytes_op_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub allocs_op_header: Option<String>,
    #[arg(long, value_name = "TEXT")]
    pub note_header: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.section_headers && !self.section_per_group {
            return Err("--section-headers requires --section-per-group".to_string());
        }

        if self.group_as_section_name && self.format != OutputFormat::Markdown {
            return Err("--group-as-section-name only applies to markdown output".to_string());
        }

        if self.group_as_section_name && !self.section_per_group {
            return Err("--group-as-section-name requires --section-per-group".to_string());
        }

        Ok(())
    }

    /// Build the report configuration from the flags
    pub fn to_config(&self) -> ReportConfig {
        let defaults = ColumnHeaders::default();
        let pick = |flag: &Option<String>, default: String| flag.clone().unwrap_or(default);

        ReportConfig {
            headers: ColumnHeaders {
                group: pick(&self.group_header, defaults.group),
                subgroup: pick(&self.subgroup_header, defaults.subgroup),
                name: pick(&self.name_header, defaults.name),
                description: pick(&self.description_header, defaults.description),
                operations: pick(&self.operations_header, defaults.operations),
                nanos_per_op: pick(&self.ns_op_header, defaults.nanos_per_op),
                bytes_per_op: pick(&self.bytes_op_header, defaults.bytes_per_op),
                allocs_per_op: pick(&self.allocs_op_header, defaults.allocs_per_op),
                note: pick(&self.note_header, defaults.note),
            },
            column_padding: self.padding,
            include_ops_column_descriptors: self.descriptors,
            include_system_info: self.system_info,
            include_detailed_system_info: self.detailed_system_info,
            section_per_group: self.section_per_group,
            section_headers: self.section_headers,
            group_as_section_name: self.group_as_section_name,
            section_heading_marker: self.heading_marker.clone(),
            name: self.title.clone(),
            description: self.description.clone(),
            note: self.note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("bench-report").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_map_to_default_config() {
        let args = parse(&[]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.to_config(), ReportConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = parse(&[
            "--format",
            "markdown",
            "--padding",
            "4",
            "--descriptors",
            "--section-per-group",
            "--section-headers",
            "--group-as-section-name",
            "--ns-op-header",
            "Time",
            "--title",
            "Hashing",
        ]);
        assert!(args.validate().is_ok());
        let config = args.to_config();
        assert_eq!(config.column_padding, 4);
        assert!(config.include_ops_column_descriptors);
        assert!(config.sections_have_headers());
        assert!(config.group_as_section_name);
        assert_eq!(config.headers.nanos_per_op, "Time");
        assert_eq!(config.headers.name, "Name");
        assert_eq!(config.name.as_deref(), Some("Hashing"));
    }

    #[test]
    fn test_section_headers_requires_sectioning() {
        let result = CliArgs::try_parse_from(["bench-report", "--section-headers"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_group_as_section_name_needs_markdown() {
        let args = parse(&["--group-as-section-name"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_group_as_section_name_needs_sectioning() {
        let args = parse(&["--format", "markdown", "--group-as-section-name"]);
        let err = args.validate().unwrap_err();
        assert!(err.contains("--section-per-group"));

        let args = parse(&["--format", "markdown", "--group-as-section-name", "--section-per-group"]);
        assert!(args.validate().is_ok());
    }
}
