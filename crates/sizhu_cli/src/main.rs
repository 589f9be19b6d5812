use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use sizhu_analysis::{
    Gender, UsefulGodMethod, classify, major_cycles, stars_by_pillar, useful_god,
};
use sizhu_chart::{FourPillars, Location, chart_from_civil, chart_from_civil_at};
use sizhu_core::{ALL_ELEMENTS, ALL_TEN_GODS};
use sizhu_energy::{analyze_strengths, thermal_balance};
use sizhu_solar::{lunar_phase, next_jie, previous_jie, solar_longitude};

#[derive(Parser)]
#[command(name = "sizhu", about = "Four Pillars chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast the four pillars for a local date/time
    Chart {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Birthplace longitude in degrees east; enables true solar time
        #[arg(long)]
        longitude: Option<f64>,
    },
    /// Classify the chart's structural pattern
    Pattern {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Birthplace longitude in degrees east; enables true solar time
        #[arg(long)]
        longitude: Option<f64>,
    },
    /// Recommend favorable/unfavorable elements and Ten Gods
    UsefulGod {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Birthplace longitude in degrees east; enables true solar time
        #[arg(long)]
        longitude: Option<f64>,
        /// Method: pattern (default), balance, climate
        #[arg(long, default_value = "pattern")]
        method: String,
    },
    /// Elemental and Ten-God strength vectors
    Strength {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Birthplace longitude in degrees east; enables true solar time
        #[arg(long)]
        longitude: Option<f64>,
    },
    /// Ten-year major luck cycles
    Luck {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
    },
    /// Temperature and moisture balance
    Thermal {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
    },
    /// Symbolic stars per pillar
    Stars {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
    },
    /// Pairwise pillar interactions
    Relations {
        /// Local datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
        /// UTC offset of the civil clock in hours
        #[arg(long, default_value = "0")]
        tz: f64,
    },
    /// Solar longitude and surrounding Jie boundaries
    Solar {
        /// UTC datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
    },
    /// Lunar age and illumination
    Lunar {
        /// UTC datetime (YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss)
        date: String,
    },
}

fn parse_local(date: &str, tz: f64) -> Result<DateTime<FixedOffset>, String> {
    let naive = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("expected YYYY-MM-DDThh:mm[:ss], got {date}"))?;
    let offset = FixedOffset::east_opt((tz * 3600.0).round() as i32)
        .ok_or_else(|| format!("invalid UTC offset: {tz}"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("ambiguous local time: {date}"))
}

fn require_local(date: &str, tz: f64) -> DateTime<FixedOffset> {
    parse_local(date, tz).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn require_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male, female");
            std::process::exit(1);
        }
    }
}

fn require_method(s: &str) -> UsefulGodMethod {
    match s.to_lowercase().as_str() {
        "pattern" => UsefulGodMethod::Pattern,
        "balance" | "strength-balance" => UsefulGodMethod::StrengthBalance,
        "climate" => UsefulGodMethod::Climate,
        _ => {
            eprintln!("Invalid method: {s}");
            eprintln!("Valid: pattern (default), balance, climate");
            std::process::exit(1);
        }
    }
}

fn cast(date: &str, tz: f64, longitude: Option<f64>) -> (FourPillars, DateTime<FixedOffset>) {
    let when = require_local(date, tz);
    let chart = match longitude {
        Some(lon) => chart_from_civil_at(when, Location::new(lon, tz)),
        None => chart_from_civil(when),
    };
    (chart, when)
}

fn print_chart(chart: &FourPillars) {
    println!(
        "Year  {}  {}\nMonth {}  {}\nDay   {}  {}\nHour  {}  {}",
        chart.year.character(),
        chart.year,
        chart.month.character(),
        chart.month,
        chart.day.character(),
        chart.day,
        chart.hour.character(),
        chart.hour,
    );
    println!(
        "Day Master: {} ({}, {} {})",
        chart.day_master().character(),
        chart.day_master().name(),
        chart.day_master().polarity().name(),
        chart.day_master().element().name(),
    );
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { date, tz, longitude } => {
            let (chart, _) = cast(&date, tz, longitude);
            print_chart(&chart);
        }

        Commands::Pattern { date, tz, longitude } => {
            let (chart, _) = cast(&date, tz, longitude);
            let strengths = analyze_strengths(&chart);
            let pattern = classify(&chart, &strengths);
            println!("{chart}");
            println!(
                "Pattern: {} ({})",
                pattern.method.name(),
                pattern.ten_god.name()
            );
            if let Some((god, method)) = pattern.auxiliary {
                println!("Auxiliary: {} ({})", method.name(), god.name());
            }
        }

        Commands::UsefulGod { date, tz, longitude, method } => {
            let method = require_method(&method);
            let (chart, _) = cast(&date, tz, longitude);
            let strengths = analyze_strengths(&chart);
            let pattern = classify(&chart, &strengths);
            let thermal = thermal_balance(&chart);
            let out = useful_god(&chart, &strengths, &pattern, thermal, method);

            println!("{chart}");
            println!("Method: {}", method.name());
            let names = |elements: &[sizhu_core::Element]| {
                elements.iter().map(|e| e.name()).collect::<Vec<_>>().join(", ")
            };
            let god_names = |gods: &[sizhu_core::TenGod]| {
                gods.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
            };
            println!("Favorable elements:   {}", names(&out.favorable_elements));
            println!("Unfavorable elements: {}", names(&out.unfavorable_elements));
            println!("Favorable gods:       {}", god_names(&out.favorable_gods));
            println!("Unfavorable gods:     {}", god_names(&out.unfavorable_gods));
            for line in &out.trace {
                println!("  - {line}");
            }
        }

        Commands::Strength { date, tz, longitude } => {
            let (chart, _) = cast(&date, tz, longitude);
            let strengths = analyze_strengths(&chart);
            println!("{chart}");
            for element in ALL_ELEMENTS {
                println!("{:<6} {:7.2}", element.name(), strengths.element(element));
            }
            println!("--");
            for god in ALL_TEN_GODS {
                println!("{:<18} {:7.2}", god.name(), strengths.ten_god(god));
            }
            println!("{:<18} {:7.2}", "Day Master self", strengths.self_energy());
        }

        Commands::Luck { date, tz, gender } => {
            let gender = require_gender(&gender);
            let when = require_local(&date, tz);
            let chart = chart_from_civil(when);
            println!("{chart}");
            for cycle in major_cycles(&chart, when, gender) {
                println!(
                    "{}  age {:5.2}  {}-{}",
                    cycle.pillar, cycle.start_age, cycle.start_year, cycle.end_year
                );
            }
        }

        Commands::Thermal { date, tz } => {
            let (chart, _) = cast(&date, tz, None);
            let balance = thermal_balance(&chart);
            println!("{chart}");
            println!("Temperature: {:8.2}", balance.temperature);
            println!("Moisture:    {:8.2}", balance.moisture);
        }

        Commands::Stars { date, tz } => {
            let (chart, _) = cast(&date, tz, None);
            println!("{chart}");
            for (role, stars) in stars_by_pillar(&chart) {
                let names: Vec<&str> = stars.iter().map(|s| s.name()).collect();
                println!("{:<6} {}", role.name(), names.join(", "));
            }
        }

        Commands::Relations { date, tz } => {
            let (chart, _) = cast(&date, tz, None);
            println!("{chart}");
            let relations = chart.relationships();
            if relations.is_empty() {
                println!("No pairwise interactions.");
            }
            for (a, b, relation) in relations {
                println!("{:<6} x {:<6} {}", a.name(), b.name(), relation.name());
            }
        }

        Commands::Solar { date } => {
            let when = require_local(&date, 0.0).with_timezone(&Utc);
            let unix = when.timestamp() as f64;
            let lon = solar_longitude(unix);
            println!("Solar longitude: {lon:9.4} deg");
            let prev = previous_jie(unix);
            let next = next_jie(unix);
            let fmt = |ts: f64| {
                Utc.timestamp_opt(ts as i64, 0)
                    .single()
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| format!("unix {ts}"))
            };
            println!("Previous Jie: {}", fmt(prev));
            println!("Next Jie:     {}", fmt(next));
        }

        Commands::Lunar { date } => {
            let when = require_local(&date, 0.0);
            let phase = lunar_phase(when.timestamp() as f64);
            println!("Age:          {:6.2} days", phase.age);
            println!("Illumination: {:6.1}%", phase.illumination * 100.0);
            println!("Phase:        {}", phase.phase_name());
        }
    }
}
