pub mod formatter;

pub use formatter::{
    format_breakdown, format_factors, format_json, format_points, format_tables, format_tsv,
    should_use_colors,
};
