use clap::{Parser, Subcommand};
use jataka_vedic_base::{Varga, deg_to_dms, rashi_from_longitude, varga_rashi_info};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka chart diagnostics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Map a sidereal longitude into a divisional chart
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Divisional chart code (1, 2, 3, ... 60)
        #[arg(long, default_value = "9")]
        chart: u16,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// House of a body for a given ascendant
    House {
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Body sidereal longitude in degrees
        #[arg(long)]
        body: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) {}d {}m {:.2}s",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms.degrees,
                info.dms.minutes,
                info.dms.seconds,
            );
        }
        Commands::Varga { lon, chart } => {
            let Some(varga) = Varga::from_code(chart) else {
                eprintln!("unsupported divisional chart code: {chart}");
                std::process::exit(2);
            };
            let info = varga_rashi_info(lon, varga);
            println!(
                "{}: {} ({}) {:.4} deg in sign",
                varga.name(),
                info.rashi.name(),
                info.rashi.western_name(),
                info.degrees_in_rashi,
            );
        }
        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!("{}d {}m {:.4}s", dms.degrees, dms.minutes, dms.seconds);
        }
        Commands::House { asc, body } => {
            let asc_sign = rashi_from_longitude(asc).rashi_index as i16;
            let body_sign = rashi_from_longitude(body).rashi_index as i16;
            let house = (body_sign - asc_sign + 12) % 12 + 1;
            println!("house {house}");
        }
    }
}
