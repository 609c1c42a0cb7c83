use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use gochara_base::{
    DrishtiTable, Graha, arudha_padas, chara_karakas, deg_to_dms, format_dms, mahadashas,
    nakshatra_from_longitude, rashi_from_longitude,
};
use gochara_engine::{
    BodyState, Ephemeris, EphemerisError, analyze, chart_dasha, monthly_analysis,
    parse_query_date,
};
use gochara_store::{ChartRecord, ChartStore};

#[derive(Parser)]
#[command(name = "gochara", about = "Gochara transit analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra, pada and Vimshottari lord from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert degrees to a D°M'S'' token
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Houses a graha aspects from a given house
    Drishti {
        /// Graha name (e.g. Shani)
        graha: String,
        /// House the graha occupies (1-12)
        house: u8,
    },
    /// Active dasha periods for a stored chart on a date
    Dasha {
        /// Chart name in the store
        #[arg(long)]
        chart: String,
        /// Query date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
        /// Print the full mahadasha table instead of the active triple
        #[arg(long)]
        full: bool,
    },
    /// Full transit analysis for a stored chart on a date
    Analyze {
        /// Chart name in the store
        #[arg(long)]
        chart: String,
        /// Query date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to a transit positions JSON file
        #[arg(long)]
        positions: PathBuf,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
    /// Monthly transit summary for a stored chart
    Monthly {
        /// Chart name in the store
        #[arg(long)]
        chart: String,
        /// Year
        #[arg(long)]
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        /// Path to a transit positions JSON file
        #[arg(long)]
        positions: PathBuf,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
    /// Jaimini chara karakas for a stored chart
    Karakas {
        /// Chart name in the store
        #[arg(long)]
        chart: String,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
    /// Arudha pada table for a stored chart
    Arudha {
        /// Chart name in the store
        #[arg(long)]
        chart: String,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
    /// List stored charts
    Charts {
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
    /// Append a chart record from a JSON file to the store
    AddChart {
        /// Path to a single chart record JSON file
        #[arg(long)]
        file: PathBuf,
        /// Path to the chart store file
        #[arg(long, default_value = "charts.json")]
        store: PathBuf,
    },
}

/// One body's state in a positions file.
#[derive(Debug, Deserialize)]
struct FileBodyState {
    longitude: f64,
    #[serde(default = "default_speed")]
    speed: f64,
}

fn default_speed() -> f64 {
    1.0
}

/// Ephemeris backed by a JSON file of graha name → state.
///
/// The file pins positions for one instant; every query returns the
/// same sky regardless of time.
struct FileEphemeris {
    states: HashMap<String, FileBodyState>,
}

impl FileEphemeris {
    fn load(path: &Path) -> Result<FileEphemeris, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let states = serde_json::from_str(&raw)
            .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
        Ok(FileEphemeris { states })
    }
}

impl Ephemeris for FileEphemeris {
    fn body_state(&self, _jd_ut: f64, graha: Graha) -> Result<BodyState, EphemerisError> {
        match self.states.get(graha.name()) {
            Some(s) => Ok(BodyState {
                longitude: s.longitude,
                speed: s.speed,
            }),
            None => Err(EphemerisError::UnsupportedBody(graha)),
        }
    }
}

fn require_record(store: &ChartStore, name: &str) -> ChartRecord {
    match store.find(name) {
        Ok(Some(record)) => record,
        Ok(None) => {
            eprintln!("No chart named '{name}' in {}", store.path().display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to read chart store: {e}");
            std::process::exit(1);
        }
    }
}

fn require_ephemeris(path: &Path) -> FileEphemeris {
    match FileEphemeris::load(path) {
        Ok(eph) => eph,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let rashi = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {}",
                rashi.name(),
                rashi.western_name(),
                format_dms(lon)
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.lord().name()
            );
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            println!(
                "{} deg {} min {:.1} sec -> {}",
                dms.degrees,
                dms.minutes,
                dms.seconds,
                format_dms(deg)
            );
        }

        Commands::Drishti { graha, house } => {
            let Some(g) = Graha::from_name(&graha) else {
                eprintln!("Invalid graha name: {graha}");
                eprintln!("Valid: Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu");
                std::process::exit(1);
            };
            if !(1..=12).contains(&house) {
                eprintln!("Invalid house: {house} (1-12)");
                std::process::exit(1);
            }
            let table = DrishtiTable::default();
            let houses = table.aspected_houses(g, house);
            println!("{} in house {house} aspects houses {houses:?}", g.name());
        }

        Commands::Dasha {
            chart,
            date,
            store,
            full,
        } => {
            let record = require_record(&ChartStore::open(&store), &chart);
            let natal = record.to_chart();
            let query_jd = match parse_query_date(&date) {
                Ok(jd) => jd,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };

            if full {
                let Some(birth_jd) = natal.birth_jd else {
                    eprintln!("Chart '{chart}' has no birth time; dasha cannot be computed");
                    std::process::exit(1);
                };
                let moon_lon = natal.positions.graha(Graha::Chandra).longitude;
                for p in mahadashas(birth_jd, moon_lon) {
                    println!(
                        "{:<8} {:>12.2} .. {:>12.2} ({:.1} days)",
                        p.graha.name(),
                        p.start_jd,
                        p.end_jd,
                        p.duration_days()
                    );
                }
                return;
            }

            match chart_dasha(&natal, query_jd) {
                Ok((maha, antara, pratyantara)) => {
                    for p in [maha, antara, pratyantara] {
                        println!(
                            "{:<12} {:<8} JD {:.2} .. {:.2}",
                            p.level.name(),
                            p.graha.name(),
                            p.start_jd,
                            p.end_jd
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Dasha resolution failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Analyze {
            chart,
            date,
            positions,
            store,
        } => {
            let record = require_record(&ChartStore::open(&store), &chart);
            let natal = record.to_chart();
            let eph = require_ephemeris(&positions);
            match analyze(&eph, &natal, &date) {
                Ok(payload) => match serde_json::to_string_pretty(&payload) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize payload: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("Analysis failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Monthly {
            chart,
            year,
            month,
            positions,
            store,
        } => {
            let record = require_record(&ChartStore::open(&store), &chart);
            let natal = record.to_chart();
            let eph = require_ephemeris(&positions);
            match monthly_analysis(&eph, &natal, year, month) {
                Ok(summary) => {
                    println!("{}-{:02}", summary.year, summary.month);
                    for h in &summary.houses {
                        println!(
                            "house {:>2}: avg {:+.2} ({})",
                            h.house,
                            h.average,
                            h.band.name()
                        );
                    }
                    if summary.key_dates.is_empty() {
                        println!("no key dates");
                    } else {
                        println!("key dates: {}", summary.key_dates.join(", "));
                    }
                }
                Err(e) => {
                    eprintln!("Monthly analysis failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Karakas { chart, store } => {
            let record = require_record(&ChartStore::open(&store), &chart);
            let natal = record.to_chart();
            for (graha, karaka) in chara_karakas(&natal.positions) {
                let pos = natal.positions.graha(graha);
                println!(
                    "{:<8} {:<4} {:<14} {} in {}",
                    graha.name(),
                    karaka.abbreviation(),
                    karaka.name(),
                    format_dms(pos.longitude),
                    pos.rashi.name()
                );
            }
        }

        Commands::Arudha { chart, store } => {
            let record = require_record(&ChartStore::open(&store), &chart);
            let natal = record.to_chart();
            for entry in arudha_padas(natal.lagna_rashi(), &natal.positions) {
                println!(
                    "{:>2} {:<4} house {:>2} {:<12} {} {} ({})",
                    entry.house,
                    entry.label,
                    entry.arudha_house,
                    entry.rashi.name(),
                    format_dms(entry.longitude),
                    entry.nakshatra.name(),
                    entry.pada
                );
            }
        }

        Commands::Charts { store } => {
            let store = ChartStore::open(&store);
            match store.list_all() {
                Ok(records) => {
                    for r in records {
                        println!(
                            "{:<20} {} {} {} (lagna {})",
                            r.name, r.date, r.time, r.place, r.lagna
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Failed to read chart store: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::AddChart { file, store } => {
            let raw = match std::fs::read_to_string(&file) {
                Ok(raw) => raw,
                Err(e) => {
                    eprintln!("Cannot read {}: {e}", file.display());
                    std::process::exit(1);
                }
            };
            let record: ChartRecord = match serde_json::from_str(&raw) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Cannot parse {}: {e}", file.display());
                    std::process::exit(1);
                }
            };
            let store = ChartStore::open(&store);
            if let Err(e) = store.append(&record) {
                eprintln!("Failed to append chart: {e}");
                std::process::exit(1);
            }
            println!("Added '{}' to {}", record.name, store.path().display());
        }
    }
}
