use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use jyotish_bala::{
    GrahaBreakdown, KarakaConfig, StrengthConfig, StrengthInputs, StrengthReport, chara_karakas,
    compute_strengths, karaka_degree,
};
use jyotish_base::{
    DivisionalDignities, Graha, HouseLords, Positions, house_number, is_daytime, planet_state,
    rashi_from_longitude,
};
use jyotish_yoga::{
    DetectedYoga, YogaConfig, YogaInputs, condition_display, condition_names, detect_yogas,
    sort_by_strength,
};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "jyotish", about = "Shadbala strength and yoga detection CLI")]
struct Cli {
    /// TOML config with optional [strength], [yoga] and [karakas] tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Log errors only
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranked Shadbala table for a chart
    Strength {
        /// Chart JSON file
        chart: PathBuf,
        /// Print every component and sub-score
        #[arg(long)]
        breakdown: bool,
    },
    /// Detected yogas, strongest first
    Yogas {
        /// Chart JSON file
        chart: PathBuf,
        /// Show the grahas and averages behind each strength label
        #[arg(long)]
        diagnostics: bool,
    },
    /// Dignity and state of one graha
    State {
        /// Chart JSON file
        chart: PathBuf,
        /// Graha name (Sun, Moon, ... or Surya, Chandra, ...)
        planet: String,
    },
    /// Whole-sign house of a longitude
    House {
        /// Planet longitude in degrees
        planet_lon: f64,
        /// Ascendant longitude in degrees
        asc_lon: f64,
    },
    /// Jaimini chara karakas
    Karakas {
        /// Chart JSON file
        chart: PathBuf,
        /// Use the seven-karaka scheme
        #[arg(long)]
        seven: bool,
    },
    /// List every known yoga condition
    Conditions,
}

// ---------------------------------------------------------------------------
// Input files
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    strength: StrengthConfig,
    yoga: YogaConfig,
    karakas: KarakaConfig,
}

#[derive(Debug, Deserialize)]
struct ChartFile {
    jd: f64,
    positions: Positions,
    /// Daily motion by graha name; missing entries are 0.
    #[serde(default)]
    speeds: BTreeMap<String, f64>,
    #[serde(default)]
    d9_positions: Positions,
    #[serde(default)]
    dignities: DivisionalDignities,
    house_lords: Option<HouseLords>,
    is_day_birth: Option<bool>,
}

struct Chart {
    jd: f64,
    positions: Positions,
    speeds: [f64; 9],
    d9_positions: Positions,
    dignities: DivisionalDignities,
    house_lords: HouseLords,
    is_day_birth: bool,
}

impl Chart {
    fn strength_inputs(&self) -> StrengthInputs<'_> {
        StrengthInputs {
            jd: self.jd,
            positions: &self.positions,
            speeds: &self.speeds,
            dignities: &self.dignities,
        }
    }

    fn yoga_inputs(&self) -> YogaInputs<'_> {
        YogaInputs {
            jd: self.jd,
            positions: &self.positions,
            speeds: &self.speeds,
            d9_positions: &self.d9_positions,
            house_lords: &self.house_lords,
            dignities: &self.dignities,
            is_day_birth: self.is_day_birth,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_config(path: Option<&Path>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };
    toml::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Invalid config {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn speed_array(speeds: &BTreeMap<String, f64>) -> [f64; 9] {
    let mut arr = [0.0f64; 9];
    for (name, &speed) in speeds {
        let Some(g) = Graha::from_name(name) else {
            eprintln!("Invalid graha in speeds: {name}");
            std::process::exit(1);
        };
        arr[g.index() as usize] = speed;
    }
    arr
}

fn load_chart(path: &Path) -> Chart {
    let file: ChartFile = serde_json::from_str(&read_file(path)).unwrap_or_else(|e| {
        eprintln!("Invalid chart {}: {e}", path.display());
        std::process::exit(1);
    });
    let Some(asc) = file.positions.ascendant() else {
        eprintln!("Chart {} has no ascendant (\"Asc\")", path.display());
        std::process::exit(1);
    };
    let is_day_birth = file
        .is_day_birth
        .or_else(|| is_daytime(&file.positions))
        .unwrap_or(true);
    Chart {
        jd: file.jd,
        speeds: speed_array(&file.speeds),
        house_lords: file
            .house_lords
            .unwrap_or_else(|| HouseLords::from_ascendant(asc)),
        is_day_birth,
        positions: file.positions,
        d9_positions: file.d9_positions,
        dignities: file.dignities,
    }
}

fn parse_graha_name(s: &str) -> Graha {
    Graha::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid graha name: {s}");
        eprintln!("Valid: Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_strength_table(report: &StrengthReport) {
    println!(
        "{:<4} {:<8} {:>8} {:>7} {:>7} {:>7}  {:<6} {}",
        "Rank", "Graha", "Total", "%", "Ishta", "Kashta", "Status", "State"
    );
    println!("{}", "-".repeat(76));
    for row in &report.rows {
        println!(
            "{:<4} {:<8} {:>8.2} {:>7.2} {:>7.2} {:>7.2}  {:<6} {}",
            row.rank,
            row.graha.english_name(),
            row.total,
            row.percent,
            row.ishta,
            row.kashta,
            row.status,
            row.combined_state
        );
    }
}

fn print_breakdown(b: &GrahaBreakdown) {
    println!("{}", b.graha.english_name());
    println!("  Sthana Bala:     {:>8.2}", b.sthana.total);
    println!("    Uchcha:        {:>8.2}", b.sthana.uchcha);
    println!("    Saptavargaja:  {:>8.2}", b.sthana.saptavargaja);
    println!("    Oja-Yugma:     {:>8.2}", b.sthana.oja_yugma);
    println!("    Dig:           {:>8.2}", b.sthana.dig);
    println!("    Kendradi:      {:>8.2}", b.sthana.kendradi);
    println!("    Raw sum:       {:>8.2}", b.sthana.raw_total);
    println!("  Cheshta Bala:    {:>8.2}", b.cheshta);
    println!("  Dig Bala:        {:>8.2}", b.dig);
    println!("  Kala Bala:       {:>8.2}", b.kala.total);
    println!("    Natonnata:     {:>8.2}", b.kala.natonnata);
    println!("    Paksha:        {:>8.2}", b.kala.paksha);
    println!("    Tribhaga:      {:>8.2}", b.kala.tribhaga);
    println!("    Varsha:        {:>8.2}", b.kala.varsha);
    println!("    Masa:          {:>8.2}", b.kala.masa);
    println!("    Dina:          {:>8.2}", b.kala.dina);
    println!("    Hora:          {:>8.2}", b.kala.hora);
    println!("    Ayana:         {:>8.2}", b.kala.ayana);
    println!("  Avastha Bala:    {:>8.2}", b.avastha.total);
    println!(
        "    Baladi {:.2} x Jagradadi {:.2} x Deeptadi {:.2}",
        b.avastha.baladi, b.avastha.jagradadi, b.avastha.deeptadi
    );
    println!(
        "  Drik Bala:       {:>8.2} (signed {:.2})",
        b.drik.total, b.drik.signed
    );
    println!("  Total:           {:>8.2} virupas", b.total());
}

fn print_yoga(yoga: &DetectedYoga) {
    println!("{} [{}] ({})", yoga.name, yoga.strength, yoga.met_ratio());
    println!("  {}", yoga.description);
    for cond in &yoga.met_conditions {
        println!("  • {}", condition_display(cond));
    }
    if let Some(diag) = &yoga.diagnostics {
        let involved: Vec<_> = diag
            .strengths
            .iter()
            .map(|(g, total)| format!("{} {:.2}", g.english_name(), total))
            .collect();
        println!("  Grahas:    {}", involved.join(", "));
        println!(
            "  Average:   {:.2} ({})",
            diag.average,
            diag.threshold.as_deref().unwrap_or("-")
        );
        if let Some(tier) = diag.tier {
            println!("  Chosen by: {tier:?}");
        }
        for e in &diag.errors {
            println!("  Note:      {e}");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Strength { chart, breakdown } => {
            let chart = load_chart(&chart);
            let report = compute_strengths(&chart.strength_inputs(), &config.strength)
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            if cli.json {
                print_json(&report);
                return;
            }
            print_strength_table(&report);
            if breakdown {
                for b in &report.breakdown.grahas {
                    println!();
                    print_breakdown(b);
                }
            }
        }
        Commands::Yogas { chart, diagnostics } => {
            let chart = load_chart(&chart);
            let mut yogas =
                detect_yogas(&chart.yoga_inputs(), &config.yoga).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            sort_by_strength(&mut yogas);
            if !diagnostics {
                for y in &mut yogas {
                    y.diagnostics = None;
                }
            }
            if cli.json {
                print_json(&yogas);
                return;
            }
            if yogas.is_empty() {
                println!("No yogas detected");
                return;
            }
            for (i, y) in yogas.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_yoga(y);
            }
        }
        Commands::State { chart, planet } => {
            let g = parse_graha_name(&planet);
            let chart = load_chart(&chart);
            let state = planet_state(g, &chart.positions, &chart.dignities).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let house = chart.positions.house_of(g).ok();
            if cli.json {
                print_json(&serde_json::json!({
                    "graha": g,
                    "house": house,
                    "primary": state.primary.map(|p| p.label()),
                    "sign_dignity": state.sign_dignity.label(),
                    "combust": state.combust,
                    "exalted": state.exalted,
                    "debilitated": state.debilitated,
                    "multiplier": state.multiplier,
                    "combined_state": state.combined_label(),
                }));
                return;
            }
            println!("{} ({})", g.english_name(), g.name());
            match (chart.positions.get(g), house) {
                (Some(lon), Some(h)) => {
                    let info = rashi_from_longitude(lon);
                    println!(
                        "  Position:     {:.4} deg, {} {:.2} deg, house {h}",
                        lon,
                        info.rashi.name(),
                        info.degrees_in_rashi
                    );
                }
                _ => println!("  Position:     not placed"),
            }
            println!("  State:        {}", state.combined_label());
            println!("  Combust:      {}", if state.combust { "Yes" } else { "No" });
            println!("  Exalted:      {}", if state.exalted { "Yes" } else { "No" });
            println!(
                "  Debilitated:  {}",
                if state.debilitated { "Yes" } else { "No" }
            );
            println!("  Multiplier:   {:.4}", state.multiplier);
        }
        Commands::House {
            planet_lon,
            asc_lon,
        } => {
            let house = house_number(planet_lon, asc_lon);
            if cli.json {
                print_json(&serde_json::json!({ "house": house }));
                return;
            }
            let planet = rashi_from_longitude(planet_lon.rem_euclid(360.0));
            let asc = rashi_from_longitude(asc_lon.rem_euclid(360.0));
            println!(
                "House {house} ({}/{} from {}/{} ascendant)",
                planet.rashi.name(),
                planet.rashi.western_name(),
                asc.rashi.name(),
                asc.rashi.western_name()
            );
        }
        Commands::Karakas { chart, seven } => {
            let chart = load_chart(&chart);
            let karaka_config = KarakaConfig {
                include_eighth: config.karakas.include_eighth && !seven,
                ..config.karakas
            };
            let karakas =
                chara_karakas(&chart.positions, &karaka_config).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            let rows: Vec<_> = karakas
                .iter()
                .filter_map(|&(k, g)| chart.positions.get(g).map(|lon| (k, g, lon)))
                .collect();
            if cli.json {
                let entries: Vec<_> = rows
                    .iter()
                    .map(|&(k, g, lon)| {
                        serde_json::json!({
                            "karaka": k,
                            "graha": g,
                            "longitude": lon,
                            "rashi": rashi_from_longitude(lon).rashi.name(),
                            "karaka_degree": karaka_degree(g, lon),
                        })
                    })
                    .collect();
                print_json(&entries);
                return;
            }
            println!(
                "{:<14} {:<4} {:<8} {:<10} {:>8}",
                "Karaka", "Abbr", "Graha", "Rashi", "Degree"
            );
            println!("{}", "-".repeat(48));
            for (k, g, lon) in rows {
                let info = rashi_from_longitude(lon);
                println!(
                    "{:<14} {:<4} {:<8} {:<10} {:>8.2}",
                    k.name(),
                    k.short_name(),
                    g.english_name(),
                    info.rashi.name(),
                    info.degrees_in_rashi
                );
            }
        }
        Commands::Conditions => {
            if cli.json {
                print_json(&condition_names().collect::<Vec<_>>());
                return;
            }
            for name in condition_names() {
                println!("{name:<52} {}", condition_display(name));
            }
        }
    }
}
