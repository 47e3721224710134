use std::path::PathBuf;

use clap::Parser;
use log::info;
use seqscan::{
    io::read_point_cloud,
    render::{Figure, RenderParams},
    Error, PointCloud, ScanParams, SequentialScanner,
};

#[derive(Parser)]
#[clap(version, about = "Scans a point cloud line by line from a camera moving on a circle")]
struct Args {
    /// Point cloud file: .csv (X, Y, Z columns), .off or .ply
    input: PathBuf,
    /// Output figure, the format follows the extension
    #[clap(long, short, default_value = "seqscan.png")]
    output: PathBuf,
    /// JSON file with acquisition parameters
    #[clap(long)]
    params: Option<PathBuf>,
    /// JSON file with rendering parameters
    #[clap(long)]
    render_params: Option<PathBuf>,
    /// Overrides the number of scan lines
    #[clap(long)]
    lines: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut scan_params = match &args.params {
        Some(path) => ScanParams::from_json_file(path)?,
        None => ScanParams::default(),
    };
    if let Some(lines) = args.lines {
        scan_params = scan_params.num_lines(lines);
    }
    let render_params = match &args.render_params {
        Some(path) => RenderParams::from_json_file(path)?,
        None => RenderParams::default(),
    };

    let cloud = PointCloud::from_geometry(read_point_cloud(&args.input).map_err(Error::from)?);
    info!("Loaded {} points from {}", cloud.len(), args.input.display());

    let scanner = SequentialScanner::new(scan_params)?;
    let mosaic = scanner.acquire(&cloud);

    Figure::new(&cloud, scanner.trajectory(), &mosaic, &render_params)?.save(&args.output)?;

    Ok(())
}
