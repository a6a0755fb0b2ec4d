use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use panchangam_base::{
    karanam_from_angle, nakshatram_from_longitude, thithi_from_angle, yogam_from_sum,
};
use panchangam_ephem::{GeoLocation, MeanMotionEphemeris};
use panchangam_search::{PanchangamSnapshot, compute_daily, compute_weekly};
use panchangam_time::{local_instant, resolve_timezone};

#[derive(Parser)]
#[command(name = "panchangam", about = "Tamil panchangam CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily panchangam snapshot
    Daily {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, default_value = "13.0827")]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, default_value = "80.2707")]
        lon: f64,
        /// IANA timezone identifier
        #[arg(long, default_value = "Asia/Kolkata")]
        tz: String,
        /// Sun ecliptic longitude at local sunrise, degrees
        #[arg(long)]
        sun: f64,
        /// Moon ecliptic longitude at local sunrise, degrees
        #[arg(long)]
        moon: f64,
        /// Emit the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Weekly panchangam (7 consecutive days)
    Weekly {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, default_value = "13.0827")]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, default_value = "80.2707")]
        lon: f64,
        /// IANA timezone identifier
        #[arg(long, default_value = "Asia/Kolkata")]
        tz: String,
        /// Sun ecliptic longitude at the start sunrise, degrees
        #[arg(long)]
        sun: f64,
        /// Moon ecliptic longitude at the start sunrise, degrees
        #[arg(long)]
        moon: f64,
        /// Emit the snapshots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Nakshatram from Moon longitude
    Nakshatram {
        /// Moon ecliptic longitude in degrees
        lon: f64,
    },
    /// Thithi from Moon-Sun elongation
    Thithi {
        /// Moon-Sun elongation in degrees
        angle: f64,
    },
    /// Yogam from Sun+Moon longitude sum
    Yogam {
        /// Sun+Moon longitude sum in degrees
        sum: f64,
    },
    /// Karanam from Moon-Sun elongation
    Karanam {
        /// Moon-Sun elongation in degrees
        angle: f64,
    },
}

fn require_date(s: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }
    }
}

/// Mean-motion provider anchored at the request date's 06:00 local
/// sunrise with the given longitudes.
fn require_provider(date: NaiveDate, tz_name: &str, sun: f64, moon: f64) -> MeanMotionEphemeris {
    let tz = match resolve_timezone(tz_name) {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let epoch = match local_instant(date, 6, 0, tz) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    MeanMotionEphemeris::anchored(epoch, sun, moon)
}

fn print_snapshot(snap: &PanchangamSnapshot) {
    println!(
        "{} | {} {} {} ({})",
        snap.date,
        snap.tamil_date.month.name(),
        snap.tamil_date.day,
        snap.tamil_date.year_name,
        snap.tamil_date.weekday.name()
    );
    println!(
        "  Sunrise {} | Sunset {}",
        snap.sunrise.format("%H:%M"),
        snap.sunset.format("%H:%M")
    );
    let est = |e: bool| if e { " (est)" } else { "" };
    println!(
        "  Nakshatram: {} [{}], ends {}{}",
        snap.nakshatram.nakshatram.name(),
        snap.nakshatram.lord.name(),
        snap.nakshatram.end.format("%m-%d %H:%M"),
        est(snap.nakshatram.estimated)
    );
    println!(
        "  Thithi: {} ({} {}), ends {}{}",
        snap.thithi.name.name(),
        snap.thithi.paksha.name(),
        snap.thithi.number_in_paksha,
        snap.thithi.end.format("%m-%d %H:%M"),
        est(snap.thithi.estimated)
    );
    println!(
        "  Yogam: {} ({}), ends {}{}",
        snap.yogam.yogam.name(),
        snap.yogam.kind.name(),
        snap.yogam.end.format("%m-%d %H:%M"),
        est(snap.yogam.estimated)
    );
    println!(
        "  Karanam: {}{}, ends {}{}",
        snap.karanam.name.name(),
        if snap.karanam.vishti { " [Vishti]" } else { "" },
        snap.karanam.end.format("%m-%d %H:%M"),
        est(snap.karanam.estimated)
    );
    println!("  Food: {}", snap.food.message());
    for w in &snap.windows {
        println!(
            "  {:<18} {} - {}",
            w.kind.name(),
            w.interval.start.format("%H:%M"),
            w.interval.end.format("%H:%M")
        );
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Daily {
            date,
            lat,
            lon,
            tz,
            sun,
            moon,
            json,
        } => {
            let date = require_date(&date);
            let provider = require_provider(date, &tz, sun, moon);
            let location = GeoLocation::new(lat, lon);
            match compute_daily(&provider, date, &location, &tz) {
                Ok(snap) => {
                    if json {
                        match serde_json::to_string_pretty(&snap) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("JSON encoding failed: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        print_snapshot(&snap);
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Weekly {
            date,
            lat,
            lon,
            tz,
            sun,
            moon,
            json,
        } => {
            let start = require_date(&date);
            let provider = require_provider(start, &tz, sun, moon);
            let location = GeoLocation::new(lat, lon);
            match compute_weekly(&provider, start, &location, &tz) {
                Ok(week) => {
                    if json {
                        match serde_json::to_string_pretty(&week) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("JSON encoding failed: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        for snap in &week {
                            print_snapshot(snap);
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Nakshatram { lon } => {
            let pos = nakshatram_from_longitude(lon);
            println!(
                "{} (index {}) - lord {}",
                pos.nakshatram.name(),
                pos.index,
                pos.lord.name()
            );
        }

        Commands::Thithi { angle } => {
            let pos = thithi_from_angle(angle);
            println!(
                "{} - {} paksha, number {} ({} in paksha)",
                pos.name.name(),
                pos.paksha.name(),
                pos.number,
                pos.number_in_paksha
            );
        }

        Commands::Yogam { sum } => {
            let pos = yogam_from_sum(sum);
            println!(
                "{} (index {}) - {}",
                pos.yogam.name(),
                pos.index,
                pos.kind.name()
            );
        }

        Commands::Karanam { angle } => {
            let pos = karanam_from_angle(angle);
            println!(
                "{} (number {}){}",
                pos.name.name(),
                pos.number,
                if pos.vishti { " - Vishti" } else { "" }
            );
        }
    }
}
