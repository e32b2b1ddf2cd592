use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mage_base::{
    ALL_CATEGORIES, ALL_CYCLES, ALL_SIGNS, Category, GeoLocation, LoveVariant, MageError,
    Placement, ScoreClass, TimelineEntry, ZodiacSign, biorhythm, birth_chart_from_input,
    combined_reading, crush_tip, friendship_verdict, life_path_number, lucky_day, lucky_numbers,
    moon_insight, moon_phase, profile, resolve_location, sun_sign, wave,
};
use mage_config::MageConfig;
use mage_time::{NaiveDate, NaiveTime, parse_date, parse_time};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ASTROMAGE_LOG";

#[derive(Parser)]
#[command(name = "astromage", version, about = "Astrology calculators for the terminal")]
struct Cli {
    /// Extra TOML config merged over the user and local files
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sun sign for a birth date
    Sign {
        /// Birth date (YYYY-MM-DD), defaults to profile.birth_date
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Physical, emotional and intellectual cycles
    Biorhythm {
        /// Birth date (YYYY-MM-DD), defaults to profile.birth_date
        #[arg(value_parser = parse_date)]
        birth: Option<NaiveDate>,
        /// Evaluate on this date instead of today
        #[arg(long, value_parser = parse_date)]
        on: Option<NaiveDate>,
        /// Also print the 30-day wave around the date
        #[arg(long)]
        wave: bool,
    },
    /// Sun, Moon and Rising signs
    BirthChart {
        /// Birth date (YYYY-MM-DD), defaults to profile.birth_date
        #[arg(long)]
        date: Option<String>,
        /// Birth time (HH:MM), defaults to profile.birth_time
        #[arg(long)]
        time: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
        /// Place name searched in the configured places
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        place: Option<String>,
    },
    /// 12x12 compatibility grid for one category
    Matrix {
        /// love, friendship or work
        #[arg(long, default_value = "love")]
        category: Category,
        /// Seed for the score jitter
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Love, friendship and work scores for two signs
    Compat {
        a: ZodiacSign,
        b: ZodiacSign,
        /// Seed for the score jitter
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Friendship reading for two signs
    Friends {
        a: ZodiacSign,
        b: ZodiacSign,
        /// Seed for the score jitter
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Love calculator score for two names
    Love { name1: String, name2: String },
    /// Crush score and advice for two names
    Crush {
        your_name: String,
        crush_name: String,
    },
    /// Lucky numbers for a sign
    Lucky {
        /// Sign name or wheel index, defaults to profile.sign
        sign: Option<ZodiacSign>,
        /// Date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Moon phase and its meaning for a sign
    Moon {
        /// Date (YYYY-MM-DD) instead of now
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// UTC time of day (HH:MM), midnight if omitted
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
        /// Sign for a personal insight, defaults to profile.sign
        #[arg(long)]
        sign: Option<ZodiacSign>,
    },
    /// Relationship milestones from a start date
    Timeline {
        /// Date the relationship began (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        start: NaiveDate,
    },
    /// Life-path number for a birth date
    Numerology {
        /// Birth date (YYYY-MM-DD), defaults to profile.birth_date
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("astromage error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config =
        MageConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.logging.filter)?;

    match cli.command {
        Commands::Sign { date } => {
            let date = birth_date(date, &config)?;
            let position = sun_sign(date);
            let sign = position.sign;
            println!(
                "{} {} ({}) - {} element",
                sign.glyph(),
                sign.name(),
                sign.date_label(),
                sign.element().name()
            );
            println!("Sun at {} {}", position.dms(), sign.name());
            println!("{}", Placement::Sun.reading(sign));
        }

        Commands::Biorhythm { birth, on, wave: show_wave } => {
            let birth = birth_date(birth, &config)?;
            let reading = match on {
                Some(as_of) => biorhythm(birth, as_of)?,
                None => mage_rs::biorhythm_today(birth)?,
            };
            println!(
                "Born {}, {} days alive on {}",
                reading.birth, reading.days_alive, reading.as_of
            );
            for cycle in ALL_CYCLES {
                let result = reading.cycle(cycle);
                let level = result.level();
                println!(
                    "{:<13}{:>4}%  {:<8}{}",
                    cycle.name(),
                    result.percentage,
                    level.label(),
                    cycle.description(level)
                );
            }
            if show_wave {
                let [physical, emotional, intellectual] = ALL_CYCLES.map(|c| wave(&reading, c));
                println!();
                println!("{:>5} {:>9} {:>9} {:>12}", "day", "physical", "emotional", "intellectual");
                for ((p, e), i) in physical.iter().zip(&emotional).zip(&intellectual) {
                    println!(
                        "{:>+5} {:>+9.3} {:>+9.3} {:>+12.3}",
                        p.offset, p.value, e.value, i.value
                    );
                }
            }
        }

        Commands::BirthChart {
            date,
            time,
            lat,
            lon,
            place,
        } => {
            let location = match (lat, lon, place) {
                (Some(lat), Some(lon), _) => Some(GeoLocation::new(lat, lon)?),
                (_, _, Some(query)) => {
                    let gazetteer = config.places_gazetteer()?;
                    if gazetteer.is_empty() {
                        anyhow::bail!(
                            "no places configured; add [[places]] entries or pass --lat/--lon"
                        );
                    }
                    debug!(places = gazetteer.len(), "searching configured places");
                    let found = resolve_location(&gazetteer, &query)?;
                    println!("Location: {}", found.display_name);
                    Some(found.location)
                }
                _ => config.location.geo_location()?,
            };
            let date = date
                .or_else(|| config.profile.birth_date.clone())
                .unwrap_or_default();
            let time = time
                .or_else(|| config.profile.birth_time.clone())
                .unwrap_or_default();
            let chart = birth_chart_from_input(&date, &time, location.as_ref())?;
            for placement in [Placement::Sun, Placement::Moon, Placement::Rising] {
                let position = chart.placement(placement);
                println!(
                    "{:<7}{} {:<12}{:>12}  {}",
                    placement.name(),
                    position.sign.glyph(),
                    position.sign.name(),
                    position.dms().to_string(),
                    placement.reading(position.sign)
                );
            }
        }

        Commands::Matrix { category, seed } => {
            init_matrix(seed, &config)?;
            let matrix = mage_rs::compatibility_matrix()?;
            print!("{:<12}", "");
            for sign in ALL_SIGNS {
                print!("{:>5}", abbreviation(sign));
            }
            println!();
            for a in ALL_SIGNS {
                print!("{:<12}", a.name());
                for b in ALL_SIGNS {
                    let score = matrix.score(a, b, category);
                    print!("{:>4}{}", score, class_mark(ScoreClass::from_score(score)));
                }
                println!();
            }
            println!();
            println!("{} scores: + high (80+), ~ medium (60+), - low", category.name());
        }

        Commands::Compat { a, b, seed } => {
            init_matrix(seed, &config)?;
            let scores = mage_rs::compatibility(a, b)?;
            println!("{} {} & {} {}", a.glyph(), a.name(), b.glyph(), b.name());
            for category in ALL_CATEGORIES {
                let score = scores.get(category);
                println!(
                    "{:<11}{:>4}%  {}",
                    category.name(),
                    score,
                    category.verdict(score)
                );
            }
            println!();
            println!("{}", combined_reading(a, b, scores.love));
        }

        Commands::Friends { a, b, seed } => {
            init_matrix(seed, &config)?;
            let score = mage_rs::compatibility(a, b)?.friendship;
            println!("Friendship: {score}%  {}", friendship_verdict(score));
            for sign in [a, b] {
                println!("{} {}: {}", sign.glyph(), sign.name(), Placement::Sun.reading(sign));
            }
            println!();
            println!("{}", combined_reading(a, b, score));
        }

        Commands::Love { name1, name2 } => {
            require_names(&name1, &name2)?;
            let variant = LoveVariant::Calculator;
            let score = variant.score(&name1, &name2);
            println!("{} & {}: {score}%", name1.trim(), name2.trim());
            println!("{}", variant.message(score));
        }

        Commands::Crush {
            your_name,
            crush_name,
        } => {
            require_names(&your_name, &crush_name)?;
            let variant = LoveVariant::Crush;
            let score = variant.score(&your_name, &crush_name);
            println!("{} & {}: {score}%", your_name.trim(), crush_name.trim());
            println!("{}", variant.message(score));
            println!();
            println!("{}", crush_tip(score));
        }

        Commands::Lucky { sign, date } => {
            let sign = sign
                .or(config.profile.sign()?)
                .ok_or(MageError::MissingInput("sign (argument or profile.sign)"))?;
            let numbers = match date {
                Some(date) => lucky_numbers(date, sign),
                None => mage_rs::lucky_numbers_today(sign),
            };
            let general: Vec<String> = numbers.general.iter().map(u8::to_string).collect();
            println!("{} {} on {}", sign.glyph(), sign.name(), numbers.date);
            println!("Lucky numbers: {}", general.join(", "));
            println!("Power number:  {}", numbers.power);
            println!("Lucky time:    {}", numbers.window);
        }

        Commands::Moon { date, time, sign } => {
            let phase = match (date, time) {
                (None, None) => mage_rs::moon_phase_now(),
                (date, time) => {
                    let day = date.unwrap_or_else(|| mage_rs::now_utc().date());
                    moon_phase(day.and_time(time.unwrap_or(NaiveTime::MIN)))
                }
            };
            println!(
                "{} - day {} of the lunar cycle",
                phase.phase.name(),
                phase.lunar_day
            );
            println!(
                "Age {:.1} days, {}% illuminated",
                phase.age_rounded(),
                phase.illumination_percent
            );
            println!("{}", phase.phase.description());
            println!("Energy: {}", phase.phase.energy());
            if let Some(sign) = sign.or(config.profile.sign()?) {
                let insight = moon_insight(sign, phase.phase);
                println!();
                println!("{} {}: {}", sign.glyph(), sign.name(), insight.advice);
                println!("Focus: {}", insight.focus);
            }
        }

        Commands::Timeline { start } => {
            let today = mage_rs::today();
            for entry in mage_rs::timeline_until_now(start)? {
                match entry {
                    TimelineEntry::Today => {
                        println!("---- today, {} ----", today.format("%B %-d, %Y"));
                    }
                    TimelineEntry::Milestone { milestone, future } => {
                        let mark = if future { "o" } else { "*" };
                        println!(
                            "{mark} {:<20}{}",
                            milestone.date.format("%B %-d, %Y").to_string(),
                            milestone.title()
                        );
                        println!("  {}", milestone.description());
                    }
                }
            }
            println!();
            println!("{}", mage_rs::timeline_stats_now(start));
        }

        Commands::Numerology { date } => {
            let date = birth_date(date, &config)?;
            let number = life_path_number(date);
            let info = profile(number)
                .with_context(|| format!("no profile for life path number {number}"))?;
            let master = if info.is_master { " (master number)" } else { "" };
            println!("Life path {number}: {}{master}", info.title);
            println!("{}", info.keywords);
            println!();
            println!("{}", info.description);
            println!("Strengths:");
            for s in info.strengths {
                println!("  + {s}");
            }
            println!("Challenges:");
            for c in info.challenges {
                println!("  - {c}");
            }
            println!("Careers:     {}", info.career);
            println!("Lucky color: {}", info.lucky_color);
            println!("Lucky gem:   {}", info.lucky_gem);
            if let Some((_, day)) = lucky_day(number) {
                println!("Lucky day:   {} ({}) {}", day.name, day.ruling_planet, day.energy);
            }
        }

        Commands::Config => {
            if let Some(path) = MageConfig::global_config_path() {
                println!("# user config: {}", path.display());
            }
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// `ASTROMAGE_LOG` wins, then `--quiet`/`--verbose`, then `logging.filter`.
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let fallback = filter_directive(quiet, verbose, configured);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .with_context(|| format!("invalid log filter '{fallback}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))
}

fn filter_directive(quiet: bool, verbose: bool, configured: &str) -> &str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    }
}

fn birth_date(arg: Option<NaiveDate>, config: &MageConfig) -> anyhow::Result<NaiveDate> {
    let fallback = config.profile.birth_date()?;
    Ok(arg
        .or(fallback)
        .ok_or(MageError::MissingInput("birth date (argument or profile.birth_date)"))?)
}

/// Seed from the flag, then the config, then the clock.
fn init_matrix(seed: Option<u64>, config: &MageConfig) -> anyhow::Result<()> {
    let seed = seed
        .or(config.compatibility.seed)
        .unwrap_or_else(mage_rs::clock_seed);
    debug!(seed, "compatibility matrix seed");
    mage_rs::init(seed)?;
    Ok(())
}

fn require_names(a: &str, b: &str) -> Result<(), MageError> {
    if a.trim().is_empty() || b.trim().is_empty() {
        Err(MageError::MissingInput("both names"))
    } else {
        Ok(())
    }
}

fn abbreviation(sign: ZodiacSign) -> &'static str {
    let name = sign.name();
    &name[..3]
}

fn class_mark(class: ScoreClass) -> char {
    match class {
        ScoreClass::High => '+',
        ScoreClass::Medium => '~',
        ScoreClass::Low => '-',
    }
}
