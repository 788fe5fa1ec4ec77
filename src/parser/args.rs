//! Dimension and name-list tokens.

use crate::error::{PanelError, Result};
use crate::types::Dimension;

/// Parse an `x,y` dimension token.
///
/// Both parts must be integers; either being less than 1 is an
/// [`PanelError::InvalidDimension`].
pub fn parse_dimension(s: &str) -> Result<Dimension> {
    let parts: Vec<&str> = s.split(',').collect();
    let [x, y] = parts.as_slice() else {
        return Err(PanelError::argument(format!(
            "Invalid dimensions '{}': expected x,y (e.g. 2,4)",
            s
        )));
    };

    let columns = parse_axis('x', x)?;
    let rows = parse_axis('y', y)?;
    Ok(Dimension::new(columns, rows))
}

fn parse_axis(axis: char, token: &str) -> Result<usize> {
    let value: i64 = token.trim().parse().map_err(|_| {
        PanelError::argument(format!("Invalid {} dimension '{}'", axis, token))
    })?;

    if value <= 0 {
        return Err(PanelError::InvalidDimension { axis, value });
    }
    usize::try_from(value)
        .map_err(|_| PanelError::argument(format!("{} dimension {} is too large", axis, value)))
}

/// Split a comma-separated list of icon names or colour tokens.
pub fn parse_names(s: &str) -> Vec<String> {
    s.split(',').map(str::to_string).collect()
}
