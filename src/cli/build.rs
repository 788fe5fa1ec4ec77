//! Build command implementation.
//!
//! Runs Parse -> Validate -> Render -> Serialize. The first failure aborts
//! the run before anything is written.

use std::path::PathBuf;

use clap::Args;

use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::icons::IconSet;
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse_dimension, parse_names, parse_placements, PlacementSyntax};
use crate::render::{write_png, Compositor};
use crate::resolver::{ColourCache, ColourResolver};
use crate::types::{Dimension, Grid};
use crate::validation::{check_references, validate_grid};

/// Compose a panel image
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// <x,y> <icons> <placements>, or <icons> <colors> <x,y> <placements>
    ///
    /// Placements may start with '-' (a leading blank row). Options must come
    /// before ARGS.
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Configuration file (default: panel.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Icon directory
    #[arg(long)]
    pub icons: Option<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Validate and render without writing the image
    #[arg(long)]
    pub check: bool,
}

/// Parsed positional tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelRequest {
    pub dimension: Dimension,
    pub icons: Vec<String>,
    pub colours: Vec<String>,
    pub grid: Grid,
}

impl PanelRequest {
    /// Parse either invocation shape. Three tokens is the plain form, four
    /// the coloured form.
    pub fn parse(tokens: &[String]) -> Result<Self> {
        if let Some(option) = tokens.iter().find(|t| is_option(t)) {
            return Err(PanelError::Argument {
                message: format!("Option {} must come before the positional arguments!", option),
                help: Some("Usage: panel [OPTIONS] <ARGS>...".to_string()),
            });
        }

        let (dimension, icons, colours, placements, syntax) = match tokens {
            [dimension, icons, placements] => {
                (dimension, icons, None, placements, PlacementSyntax::Plain)
            }
            [icons, colours, dimension, placements] => (
                dimension,
                icons,
                Some(colours),
                placements,
                PlacementSyntax::Coloured,
            ),
            _ => {
                return Err(PanelError::argument(
                    "Arguments missing or not recognized!",
                ))
            }
        };

        let dimension = parse_dimension(dimension)?;
        let grid = parse_placements(placements, syntax)?;

        Ok(Self {
            dimension,
            icons: parse_names(icons),
            colours: colours.map(|c| parse_names(c)).unwrap_or_default(),
            grid,
        })
    }
}

/// Options the positional list swallows when they follow it.
const OPTIONS: &[&str] = &["--config", "--icons", "--output", "-o", "--check"];

fn is_option(token: &str) -> bool {
    OPTIONS.iter().any(|option| {
        token
            .strip_prefix(option)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
    })
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut config = PanelConfig::discover(args.config.as_deref())?;
    if let Some(icons) = args.icons {
        config.icons = icons;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    // Parse + validate
    let request = PanelRequest::parse(&args.args)?;
    validate_grid(&request.grid, request.dimension)?;
    config.layout.canvas_size(request.dimension)?;

    let named = config.named_colours();
    let resolver = ColourResolver::new(&named).with_css_names(config.css_names);
    let mut cache = ColourCache::new();
    let colours = resolver.resolve_all(&request.colours, &mut cache)?;
    if !colours.is_empty() {
        let listed: Vec<String> = colours.iter().map(|c| c.to_string()).collect();
        printer.status(
            "Resolved",
            &format!(
                "{} ({})",
                plural(colours.len(), "color", "colors"),
                listed.join(", ")
            ),
        );
    }

    check_references(&request.grid, request.icons.len(), colours.len())?;

    let icons = IconSet::load(&config.icons, &request.icons, config.layout.cell)?;
    printer.status(
        "Loaded",
        &format!(
            "{} from {}",
            plural(icons.len(), "icon", "icons"),
            display_path(&config.icons)
        ),
    );

    // Render
    let compositor = Compositor::new(config.layout, &icons, &colours);
    let composition = compositor.render(&request.grid, request.dimension)?;
    printer.status(
        "Composed",
        &format!(
            "{}x{} panel ({}, {}x{} px)",
            request.dimension.columns,
            request.dimension.rows,
            plural(composition.placed, "icon", "icons"),
            composition.image.width(),
            composition.image.height()
        ),
    );

    if args.check {
        printer.info("Checked", "no output written");
        return Ok(());
    }

    // Serialize
    let output_path = config.output_path();
    write_png(&composition.image, &output_path)?;
    printer.status("Wrote", &display_path(&output_path));

    Ok(())
}
