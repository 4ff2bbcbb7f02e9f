use anyhow::{anyhow, Context};
use config::{Config, File};
use hexmap::{
    timed, MapConfig, MapEditor, MapRenderer, Point2, RenderConfig,
    RotationDirection, TileType, Viewport,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for editing hex tile maps. Each invocation loads a map, applies one
/// edit, and saves it back.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Path to a config file that defines the grid and height range.
    /// Supported formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Path to the map file to edit. If it doesn't exist yet, editing starts
    /// from an empty map
    #[structopt(short, long, default_value = "map.json")]
    map: PathBuf,

    /// The format of the map file. Supported formats:
    ///
    /// json - Human-readable list of tiles
    ///
    /// bin - Compact binary (CBOR) version of the same data
    #[structopt(short, long, default_value = "json")]
    format: MapFormat,

    /// Width of the editing surface, in pixels. All pixel positions are
    /// relative to the top-left corner of this surface
    #[structopt(long, default_value = "1280")]
    width: f64,

    /// Height of the editing surface, in pixels
    #[structopt(long, default_value = "720")]
    height: f64,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Paint the cell under a pixel. Paints a new tile on an empty cell, or
    /// raises an existing tile one level
    Paint {
        x: f64,
        y: f64,
        /// Lower an existing tile instead of raising it
        #[structopt(long)]
        lower: bool,
        /// Tile type to paint with. Defaults to the config's tile type.
        /// Options: grass, water, sand, stone, snow
        #[structopt(short, long)]
        tile_type: Option<TileType>,
    },
    /// Erase the tile under a pixel
    Erase { x: f64, y: f64 },
    /// Rotate the whole map 60° around the center cell. Direction must be
    /// "left" or "right"
    Rotate { direction: Option<String> },
    /// Print the cell under a pixel, plus the height of its tile if it has
    /// one
    Hover { x: f64, y: f64 },
    /// Remove every tile from the map
    Clear,
    /// Render the map to an SVG file
    Render {
        /// Where to write the SVG
        #[structopt(short, long, default_value = "map.svg")]
        output: PathBuf,
        /// Don't draw the background grid
        #[structopt(long)]
        hide_grid: bool,
    },
    /// Print the full map config, in TOML format
    Config,
}

/// Different map file formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum MapFormat {
    // If you change this, make sure to update the help text for `--format`!
    Json,
    Bin,
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Load the map file into the editor. A missing file is fine, that just means
/// we're starting a new map.
fn load_map(
    editor: &mut MapEditor,
    path: &Path,
    format: MapFormat,
) -> anyhow::Result<()> {
    if !path.exists() {
        info!("No map at {:?}, starting a new one", path);
        return Ok(());
    }

    let loaded = match format {
        MapFormat::Json => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("error reading map file {:?}", path))?;
            editor.load_json(&json)
        }
        MapFormat::Bin => {
            let file = OpenOptions::new()
                .read(true)
                .open(path)
                .with_context(|| format!("error opening map file {:?}", path))?;
            editor.load_bin(file)
        }
    };
    loaded.with_context(|| format!("error loading map from {:?}", path))?;
    info!("Loaded {} tiles from {:?}", editor.tiles().len(), path);
    Ok(())
}

/// Write some bytes to a file, replacing whatever was there
fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("error opening output file {:?}", path))?;
    file.write_all(bytes)
        .with_context(|| format!("error writing to file {:?}", path))?;
    Ok(())
}

fn save_map(
    editor: &MapEditor,
    path: &Path,
    format: MapFormat,
) -> anyhow::Result<()> {
    let bytes = match format {
        MapFormat::Json => editor.save_json().into_bytes(),
        MapFormat::Bin => editor.save_bin(),
    };
    timed!(
        format!("Saving {} map to {:?}", format, path),
        log::Level::Info,
        write_file(path, &bytes)?
    );
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => MapConfig::default(),
    };
    let mut editor =
        MapEditor::new(config, Viewport::new(opt.width, opt.height))?;
    load_map(&mut editor, &opt.map, opt.format)?;

    // Read-only commands return early, everything else saves the map
    match opt.command {
        Command::Paint {
            x,
            y,
            lower,
            tile_type,
        } => {
            if let Some(tile_type) = tile_type {
                editor.set_tile_type(tile_type);
            }
            let tile = editor.paint(Point2::new(x, y), lower);
            println!(
                "{} {} at height {}",
                tile.location(),
                tile.color(),
                tile.height()
            );
        }
        Command::Erase { x, y } => match editor.erase(Point2::new(x, y)) {
            Some(tile) => println!("Erased {}", tile.location()),
            None => println!("Nothing to erase"),
        },
        Command::Rotate { direction } => {
            let direction = direction
                .map(|direction| direction.parse::<RotationDirection>())
                .transpose()?;
            editor.rotate(direction)?;
        }
        Command::Hover { x, y } => {
            let hover = editor.hover(Point2::new(x, y));
            match hover.indicator {
                Some(indicator) => println!(
                    "{} level {}/{}",
                    hover.hex, indicator.level, indicator.levels
                ),
                None => println!("{} empty", hover.hex),
            }
            return Ok(());
        }
        Command::Clear => editor.clear(),
        Command::Render { output, hide_grid } => {
            let renderer = MapRenderer::new(RenderConfig {
                show_grid: !hide_grid,
                ..Default::default()
            })
            .context("invalid render config")?;
            let svg = renderer.render_as_svg(&editor);
            write_file(&output, svg.as_bytes())?;
            info!("Rendered map to {:?}", &output);
            return Ok(());
        }
        Command::Config => {
            let toml = toml::to_string_pretty(editor.config())
                // Panics only if config format isn't serializable (a bug)
                .expect("error serializing config");
            println!("{}", toml);
            return Ok(());
        }
    }

    save_map(&editor, &opt.map, opt.format)
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
