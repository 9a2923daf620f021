use anyhow::Result;
use clap::{ArgAction, Parser};
use pvc_banner::BannerOptions;
use std::path::PathBuf;

// Unset options fall back to the config file (if any), then to the built-in defaults.
#[derive(Parser)]
#[command(name = "banner", about = "Print-ready PVC banner generator", version)]
struct Cli {
    /// Banner text; use a line break or a literal \n for multiple lines [default: "Banner PVC"]
    #[arg(short, long)]
    text: Option<String>,

    /// Output PDF file [default: banner.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Banner width in mm [default: 1000]
    #[arg(short, long)]
    width: Option<f64>,

    /// Banner height in mm [default: 700]
    #[arg(short = 'e', long)]
    height: Option<f64>,

    /// Font size in mm [default: 25]
    #[arg(short, long)]
    font_size: Option<f64>,

    /// Foreground color name (text, border, circles) [default: black]
    #[arg(long)]
    fg: Option<String>,

    /// Background color name [default: yellow]
    #[arg(long)]
    bg: Option<String>,

    /// Center the text block (true/false) [default: true]
    #[arg(short, long, action = ArgAction::Set)]
    center: Option<bool>,

    /// Custom font file, tried first
    #[arg(long)]
    font: Option<PathBuf>,

    /// System font file, tried when the custom font fails
    #[arg(long)]
    system_font: Option<PathBuf>,

    /// Load options from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the resolved options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Print the layout plan as JSON, don't generate PDF
    #[arg(long)]
    plan_only: bool,

    /// List the available color names and exit
    #[arg(long)]
    list_colors: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(self, mut options: BannerOptions) -> BannerOptions {
        if let Some(text) = self.text {
            options.text = text.replace("\\n", "\n");
        }
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(width) = self.width {
            options.width_mm = width;
        }
        if let Some(height) = self.height {
            options.height_mm = height;
        }
        if let Some(font_size) = self.font_size {
            options.font_size_mm = font_size;
        }
        if let Some(fg) = self.fg {
            options.foreground = fg;
        }
        if let Some(bg) = self.bg {
            options.background = bg;
        }
        if let Some(center) = self.center {
            options.center_text = center;
        }
        if let Some(font) = self.font {
            options.font_path = font;
        }
        if let Some(system_font) = self.system_font {
            options.system_font_path = system_font;
        }
        options
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if cli.list_colors {
        for name in pvc_banner::color_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let base = match &cli.config {
        Some(path) => {
            log::debug!("Loading options from {}", path.display());
            BannerOptions::load(path).await?
        }
        None => BannerOptions::default(),
    };

    let plan_only = cli.plan_only;
    let save_config = cli.save_config.clone();
    let options = cli.apply(base);

    if let Some(path) = save_config {
        options.save(&path).await?;
        println!("Saved options → {}", path.display());
    }

    if plan_only {
        let plan = pvc_banner::plan_banner(&options).await?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let report = pvc_banner::generate_banner(&options).await?;
    println!(
        "Generated {}x{} mm banner ({} circles, {} lines, font: {}) → {}",
        options.width_mm,
        options.height_mm,
        report.circle_count,
        report.line_count,
        report.font,
        report.output.display()
    );

    Ok(())
}
