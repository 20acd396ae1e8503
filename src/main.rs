use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use dust2d::{generate, Grid, OutlineSettings};

/// Outlines the solid region of a sample grid and prints the mesh and
/// contours as JSON.
#[derive(Parser, Debug)]
#[command(name = "dust2d")]
struct Args {
    /// Grid JSON: `{ "width", "height", "samples" }`, rows bottom to top
    grid: PathBuf,
    /// Settings JSON; missing fields take their defaults
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Overrides the solidity threshold from the settings
    #[arg(long, allow_negative_numbers = true)]
    threshold: Option<f32>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    dust2d::log::init();
    let args = Args::parse();

    let mut settings: OutlineSettings = match &args.settings {
        Some(path) => read_json(path)?,
        None => OutlineSettings::default(),
    };
    if let Some(threshold) = args.threshold {
        settings.threshold = threshold;
    }
    let grid: Grid = read_json(&args.grid)?;
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        ?settings,
        "Loaded grid"
    );

    let outline = generate(&grid, &settings)?;
    tracing::info!(
        vertices = outline.mesh.vertex_count(),
        triangles = outline.mesh.triangle_count(),
        contours = outline.contours.len(),
        "Generated outline"
    );

    let stdout = std::io::stdout().lock();
    serde_json::to_writer(stdout, &outline)?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_path_alone() {
        let args = Args::try_parse_from(["dust2d", "grid.json"]).unwrap();
        assert_eq!(args.grid, PathBuf::from("grid.json"));
        assert!(args.settings.is_none());
        assert!(args.threshold.is_none());
    }

    #[test]
    fn settings_and_threshold() {
        let args = Args::try_parse_from([
            "dust2d",
            "--settings",
            "outline.json",
            "grid.json",
            "--threshold",
            "-0.25",
        ])
        .unwrap();
        assert_eq!(args.grid, PathBuf::from("grid.json"));
        assert_eq!(args.settings, Some(PathBuf::from("outline.json")));
        assert_eq!(args.threshold, Some(-0.25));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Args::try_parse_from(["dust2d", "grid.json", "--threshold", "high"]).is_err());
        assert!(Args::try_parse_from(["dust2d", "grid.json", "--threshold"]).is_err());
        assert!(Args::try_parse_from(["dust2d"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
