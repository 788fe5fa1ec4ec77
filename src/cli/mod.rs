pub mod build;

use clap::Parser;

const EXAMPLES: &str = "\
Forms:
  panel <x,y> <icons> <placements>
  panel <icons> <colors> <x,y> <placements>

Placements: rows are separated by '-', cells by ','. A cell is an icon
number (1-based, 0 or empty for blank), optionally followed by c<j> to tint
it with the j-th color (0-based; c0 means no tint).

Example: To generate a 2x4 foreground image with row order
\"blanks -> stars -> hearts -> blanks\"
  panel star,heart white 2,4 0,0-1,1-2,2

Paths: All icons should be PNGs and reside within the \"icons\" folder. Each
output is saved to the \"output\" folder as \"foreground.png\".";

/// panel - compose a grid of icons into a single foreground image
#[derive(Parser, Debug)]
#[command(name = "panel")]
#[command(version, about, long_about = None, after_long_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    pub build: build::BuildArgs,
}

/// True when the raw arguments ask for usage text: no arguments at all, or a
/// first argument mentioning `help`.
pub fn wants_help<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match args.into_iter().next() {
        None => true,
        Some(first) => first.as_ref().contains("help"),
    }
}

/// Long usage text.
pub fn usage() -> String {
    <Cli as clap::CommandFactory>::command()
        .render_long_help()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_help() {
        assert!(wants_help(Vec::<String>::new()));
        assert!(wants_help(["--help"]));
        assert!(wants_help(["help"]));
        assert!(wants_help(["-help", "2,4"]));
        assert!(!wants_help(["star,heart", "white", "2,4", "1"]));
    }

    #[test]
    fn test_usage_mentions_forms() {
        let text = usage();
        assert!(text.contains("<icons> <colors> <x,y> <placements>"));
        assert!(text.contains("--check"));
    }

    #[test]
    fn test_cli_parses_colour_form() {
        let cli = Cli::try_parse_from(["panel", "star,heart", "white", "2,4", "0,0-1,1"]).unwrap();
        assert_eq!(cli.build.args.len(), 4);
        assert!(!cli.build.check);
    }

    #[test]
    fn test_cli_parses_options() {
        let cli = Cli::try_parse_from([
            "panel", "--icons", "art", "-o", "dist", "--check", "2,4", "star", "1",
        ])
        .unwrap();
        assert_eq!(cli.build.icons.as_deref(), Some(std::path::Path::new("art")));
        assert_eq!(cli.build.output.as_deref(), Some(std::path::Path::new("dist")));
        assert!(cli.build.check);
        assert_eq!(cli.build.args, vec!["2,4", "star", "1"]);
    }

    #[test]
    fn test_cli_accepts_leading_blank_row() {
        let cli = Cli::try_parse_from(["panel", "1,2", "star", "-1"]).unwrap();
        assert_eq!(cli.build.args, vec!["1,2", "star", "-1"]);

        let cli = Cli::try_parse_from(["panel", "star", "red", "1,3", "--1c1"]).unwrap();
        assert_eq!(cli.build.args[3], "--1c1");
    }

    #[test]
    fn test_wrong_token_count_reaches_request_parser() {
        for args in [
            &["panel", "2,4", "star"][..],
            &["panel", "a", "b", "c", "d", "e"][..],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let err = build::PanelRequest::parse(&cli.build.args).unwrap_err();
            assert_eq!(err.to_string(), "Arguments missing or not recognized!");
        }
    }
}
