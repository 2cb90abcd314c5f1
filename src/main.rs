//! `olc` command line tool: encode, decode and check Open Location Codes.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use olc_rs::{
    CsvPlusCodeConfig, GeometryFormat, OlcError, PAIR_CODE_LENGTH, area_to_wkt,
    csv_to_plus_code_csv, decode, encode, is_full, is_short, is_valid, recover_nearest, shorten,
};

#[derive(Parser)]
#[command(name = "olc", about = "Open Location Code (Plus Code) tool")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a latitude/longitude into a plus code.
    Encode {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
        #[arg(long, default_value_t = PAIR_CODE_LENGTH)]
        length: usize,
    },
    /// Decode a full plus code into its area.
    Decode {
        code: String,
        /// Print the area as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report whether a code is valid, full and short.
    Check { code: String },
    /// Shorten a full code relative to a reference location.
    Shorten {
        code: String,
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Recover the nearest full code from a short code and a reference location.
    Recover {
        code: String,
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },
    /// Add plus codes to a CSV file, or decode a column of plus codes.
    Csv {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, requires = "lng_col", conflicts_with_all = ["geometry_col", "code_col"])]
        lat_col: Option<String>,
        #[arg(long, requires = "lat_col")]
        lng_col: Option<String>,
        #[arg(long, conflicts_with = "code_col")]
        geometry_col: Option<String>,
        #[arg(long)]
        code_col: Option<String>,
        #[arg(long, default_value_t = PAIR_CODE_LENGTH)]
        length: usize,
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
        /// Include the code area polygon.
        #[arg(long, value_enum)]
        area: Option<AreaFormat>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum AreaFormat {
    Wkt,
    Geojson,
}

impl From<AreaFormat> for GeometryFormat {
    fn from(format: AreaFormat) -> Self {
        match format {
            AreaFormat::Wkt => GeometryFormat::Wkt,
            AreaFormat::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn main() -> Result<(), OlcError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Encode {
            latitude,
            longitude,
            length,
        } => {
            println!("{}", encode(latitude, longitude, length)?);
        }
        Command::Decode { code, json } => {
            let area = decode(&code)?;
            if json {
                let out = serde_json::to_string_pretty(&area)
                    .map_err(|e| OlcError::IoError(e.to_string()))?;
                println!("{}", out);
            } else {
                println!("Center: ({}, {})", area.latitude_center, area.longitude_center);
                println!(
                    "Bounds: lat {} to {}, lng {} to {}",
                    area.latitude_lo, area.latitude_hi, area.longitude_lo, area.longitude_hi
                );
                println!("Code length: {}", area.code_length);
                println!("Area: {}", area_to_wkt(&area));
            }
        }
        Command::Check { code } => {
            println!("valid: {}", is_valid(&code));
            println!("full: {}", is_full(&code));
            println!("short: {}", is_short(&code));
        }
        Command::Shorten {
            code,
            latitude,
            longitude,
        } => {
            println!("{}", shorten(&code, latitude, longitude)?);
        }
        Command::Recover {
            code,
            latitude,
            longitude,
        } => {
            println!("{}", recover_nearest(&code, latitude, longitude)?);
        }
        Command::Csv {
            input,
            output,
            lat_col,
            lng_col,
            geometry_col,
            code_col,
            length,
            exclude,
            area,
        } => {
            let config = match (lat_col, lng_col, geometry_col, code_col) {
                (Some(lat), Some(lng), _, _) => CsvPlusCodeConfig::from_coords(lat, lng, length),
                (_, _, Some(geometry), _) => CsvPlusCodeConfig::from_geometry(geometry, length),
                (_, _, _, Some(code)) => CsvPlusCodeConfig::from_codes(code),
                _ => {
                    return Err(OlcError::CsvError(
                        "one of --lat-col/--lng-col, --geometry-col or --code-col is required"
                            .to_string(),
                    ));
                }
            };
            let mut config = config.exclude(exclude);
            if let Some(format) = area {
                config = config.with_area_geometry(format.into());
            }

            let written = csv_to_plus_code_csv(&input, &output, &config)?;
            println!("Wrote {} rows to {}", written, output.display());
        }
    }

    Ok(())
}
