use miette::Diagnostic;
use thiserror::Error;

/// Main error type for panel operations
#[derive(Error, Diagnostic, Debug)]
pub enum PanelError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(panel::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(panel::argument))]
    Argument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{axis} dimension ({value}) must be 1 or greater!")]
    #[diagnostic(code(panel::dimension))]
    InvalidDimension { axis: char, value: i64 },

    #[error("Dimension {columns},{rows} is too large to render!")]
    #[diagnostic(
        code(panel::canvas_too_large),
        help("Use fewer columns or rows, or a smaller layout in panel.yaml")
    )]
    CanvasTooLarge { columns: usize, rows: usize },

    #[error("Too many rows specified! ({rows} rows for a y dimension of {max})")]
    #[diagnostic(code(panel::too_many_rows))]
    TooManyRows { rows: usize, max: usize },

    #[error("{}", describe_long_rows(.rows, .max))]
    #[diagnostic(code(panel::row_too_long))]
    RowTooLong { rows: Vec<usize>, max: usize },

    #[error("{name}.png not found in {} folder!", .dir.display())]
    #[diagnostic(code(panel::icon_not_found))]
    IconNotFound {
        name: String,
        dir: std::path::PathBuf,
    },

    #[error("Image resize failed for icon {name}: {message}")]
    #[diagnostic(code(panel::icon_resize))]
    IconResize { name: String, message: String },

    #[error("Specified icon value \"{index}\" doesn't correspond to any specified icon!")]
    #[diagnostic(
        code(panel::icon_reference),
        help("Icons are numbered from 1 in the order they were declared")
    )]
    InvalidIconReference { index: usize, count: usize },

    #[error("Specified color value \"{index}\" doesn't correspond to any specified color!")]
    #[diagnostic(
        code(panel::colour_reference),
        help("Colors are numbered from 0 in the order they were declared")
    )]
    InvalidColourReference { index: usize, count: usize },

    #[error("Syntax error! {token}")]
    #[diagnostic(
        code(panel::colour_syntax),
        help("Use a named color, #RGB, #RRGGBB, or R-G-B with components 0-255")
    )]
    ColourSyntax { token: String },

    #[error("No icons placements specified!")]
    #[diagnostic(code(panel::empty_placement))]
    EmptyPlacement,

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(panel::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PanelError {
    /// Build an argument error pointing at the usage text.
    pub fn argument(message: impl Into<String>) -> Self {
        PanelError::Argument {
            message: message.into(),
            help: Some("Refer to \"panel --help\" for argument format".to_string()),
        }
    }
}

fn describe_long_rows(rows: &[usize], max: &usize) -> String {
    match rows {
        [row] => format!("Row {} is longer than x dimension specified ({})!", row, max),
        _ => format!("Rows {:?} are longer than x dimension specified ({})!", rows, max),
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_too_long_singular() {
        let err = PanelError::RowTooLong { rows: vec![2], max: 3 };
        insta::assert_snapshot!(err.to_string(), @"Row 2 is longer than x dimension specified (3)!");
    }

    #[test]
    fn test_row_too_long_plural() {
        let err = PanelError::RowTooLong { rows: vec![1, 4], max: 2 };
        insta::assert_snapshot!(err.to_string(), @"Rows [1, 4] are longer than x dimension specified (2)!");
    }

    #[test]
    fn test_invalid_dimension_message() {
        let err = PanelError::InvalidDimension { axis: 'y', value: 0 };
        assert_eq!(err.to_string(), "y dimension (0) must be 1 or greater!");
    }

    #[test]
    fn test_canvas_too_large_message() {
        let err = PanelError::CanvasTooLarge {
            columns: 60_000_000,
            rows: 1,
        };
        assert_eq!(err.to_string(), "Dimension 60000000,1 is too large to render!");
    }

    #[test]
    fn test_icon_not_found_message() {
        let err = PanelError::IconNotFound {
            name: "star".to_string(),
            dir: "icons".into(),
        };
        assert_eq!(err.to_string(), "star.png not found in icons folder!");
    }
}
