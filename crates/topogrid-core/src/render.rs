//! Text rendering of a classified grid for embedding in downstream source.

use crate::grid::Grid;
use crate::terrain::TerrainClass;

pub const DEFAULT_CONST_NAME: &str = "CONST_MAP_STRING";

/// Optional delimiter lines placed before and after the grid rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Template {
    /// Template-literal constant: ``NAME = ` `` … `` `; ``.
    pub fn named_constant(name: &str) -> Self {
        Self {
            prefix: Some(format!("{name} = `")),
            suffix: Some("`;".to_string()),
        }
    }

    /// Rows only.
    pub fn bare() -> Self {
        Self {
            prefix: None,
            suffix: None,
        }
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::named_constant(DEFAULT_CONST_NAME)
    }
}

/// One line per row, one code per cell, no separators. Every line, including
/// the delimiters, ends in `\n`.
pub fn render(grid: &Grid<TerrainClass>, template: &Template) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * (grid.height() + 2));
    if let Some(prefix) = &template.prefix {
        out.push_str(prefix);
        out.push('\n');
    }
    for row in grid.rows() {
        out.extend(row.iter().map(|c| c.code()));
        out.push('\n');
    }
    if let Some(suffix) = &template.suffix {
        out.push_str(suffix);
        out.push('\n');
    }
    out
}
