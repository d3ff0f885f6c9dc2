//! `tinted` - inspect the built-in token sets and their navigation themes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use tinted::platform::{AppearanceSource, ColorScheme, ManualAppearance, SystemAppearance};
use tinted::{ThemeMode, ThemePreview, ThemeRegistry, ThemeShell};

#[derive(Parser)]
#[command(name = "tinted", version, about = "Inspect light/dark design tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active token set
    Show(ThemeArgs),
    /// Print the navigation theme derived from the active token set
    Nav(ThemeArgs),
    /// Render a swatch sheet for the active theme
    Preview(ThemeArgs),
    /// List keys defined by only one of the light and dark token sets
    Diff,
}

#[derive(Args)]
struct ThemeArgs {
    /// Color scheme to resolve against
    #[arg(long, value_enum, default_value_t = ModeArg::System)]
    mode: ModeArg,
    /// Apply a manual toggle after resolving
    #[arg(long)]
    toggle: bool,
    /// Serialization format for structured output
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Show(args) => {
            let shell = start_shell(&args)?;
            print_structured(&*shell.current().tokens, args.format)?;
        }
        Command::Nav(args) => {
            let shell = start_shell(&args)?;
            print_structured(&shell.current().navigation, args.format)?;
        }
        Command::Preview(args) => {
            let shell = start_shell(&args)?;
            let sheet = ThemePreview::auto()
                .render(&shell.current())
                .context("rendering theme preview")?;
            println!("{}", sheet);
        }
        Command::Diff => {
            let registry = ThemeRegistry::canonical();
            let light = registry.get(ThemeMode::Light);
            let dark = registry.get(ThemeMode::Dark);
            let drift = light.shape_drift(dark);
            if drift.is_empty() {
                println!(
                    "light and dark token sets share all {} keys",
                    light.key_set().len()
                );
            } else {
                for key in drift {
                    println!("{}", key);
                }
            }
        }
    }
    Ok(())
}

fn start_shell(args: &ThemeArgs) -> Result<ThemeShell> {
    let source: Box<dyn AppearanceSource> = match args.mode {
        ModeArg::System => Box::new(SystemAppearance::new()),
        ModeArg::Light => Box::new(ManualAppearance::new(ColorScheme::Light)),
        ModeArg::Dark => Box::new(ManualAppearance::new(ColorScheme::Dark)),
    };
    let shell = ThemeShell::start(source.as_ref()).context("starting theme shell")?;
    if args.toggle {
        shell.toggle().context("toggling theme")?;
    }
    Ok(shell)
}

fn print_structured<T: Serialize>(value: &T, format: Format) -> Result<()> {
    let text = match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
