//! Operator CLI: inspect emitted queries, run offline suggestion smokes,
//! and rank sample record files.

use std::collections::HashMap;
use std::env;
use std::fs;

use artsearch_core::config::Config;
use artsearch_core::traits::SuggestionBackend;
use artsearch_core::types::{
    EntityKind, FilterSet, GeoFilter, RankingInputs, Scope, SuggestionHit,
};
use artsearch_query::builder::{build_autocomplete_query, build_search_query};
use artsearch_rank::score_and_sort;
use artsearch_schema::index_definition;
use artsearch_suggest::SuggestComposer;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <query|autocomplete|suggest|rank|schema> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn parse_kind(s: &str) -> anyhow::Result<EntityKind> {
    match s {
        "artist" | "artists" => Ok(EntityKind::Artist),
        "workshop" | "workshops" => Ok(EntityKind::Workshop),
        _ => anyhow::bail!("Unknown entity kind '{}' (expected artist or workshop)", s),
    }
}

fn parse_scope(s: &str) -> anyhow::Result<Scope> {
    match s {
        "artist" | "artists" => Ok(Scope::Artist),
        "workshop" | "workshops" => Ok(Scope::Workshop),
        "all" => Ok(Scope::All),
        _ => anyhow::bail!("Unknown scope '{}' (expected artist, workshop, or all)", s),
    }
}

/// Canned suggestion rows keyed by index name, for offline smokes of the
/// composer without a live backend.
struct FixtureBackend {
    rows: HashMap<String, Vec<SuggestionHit>>,
}

impl FixtureBackend {
    fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let rows = match path {
            Some(p) => serde_json::from_str(&fs::read_to_string(p)?)?,
            None => HashMap::new(),
        };
        Ok(Self { rows })
    }
}

impl SuggestionBackend for FixtureBackend {
    async fn run(
        &self,
        index: &str,
        _query: &serde_json::Value,
        limit: usize,
    ) -> anyhow::Result<Vec<SuggestionHit>> {
        Ok(self
            .rows
            .get(index)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .collect())
    }
}

fn run_query(args: &[String]) -> anyhow::Result<()> {
    let mut kind = EntityKind::Artist;
    let mut term: Option<String> = None;
    let mut filters = FilterSet::default();
    let mut near: Option<[f64; 2]> = None;
    let mut radius_km: Option<f64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--kind" => {
                kind = parse_kind(flag_value(args, &mut i, "--kind")?)?;
            }
            "--category" => {
                filters.category = Some(flag_value(args, &mut i, "--category")?.to_string());
            }
            "--subcategories" => {
                let raw = flag_value(args, &mut i, "--subcategories")?;
                filters.subcategories =
                    Some(raw.split(',').map(|s| s.trim().to_string()).collect());
            }
            "--city" => {
                filters.city = Some(flag_value(args, &mut i, "--city")?.to_string());
            }
            "--min-price" => {
                filters.min_price = Some(flag_value(args, &mut i, "--min-price")?.parse()?);
            }
            "--max-price" => {
                filters.max_price = Some(flag_value(args, &mut i, "--max-price")?.parse()?);
            }
            "--min-rating" => {
                filters.min_rating = Some(flag_value(args, &mut i, "--min-rating")?.parse()?);
            }
            "--available" => {
                filters.is_available = Some(flag_value(args, &mut i, "--available")?.parse()?);
            }
            "--mode" => {
                filters.mode = Some(flag_value(args, &mut i, "--mode")?.to_string());
            }
            "--near" => {
                let raw = flag_value(args, &mut i, "--near")?;
                let (lon, lat) = raw
                    .split_once(',')
                    .ok_or_else(|| anyhow::anyhow!("--near expects 'lon,lat'"))?;
                near = Some([lon.trim().parse()?, lat.trim().parse()?]);
            }
            "--radius-km" => {
                radius_km = Some(flag_value(args, &mut i, "--radius-km")?.parse()?);
            }
            other if term.is_none() && !other.starts_with('-') => {
                term = Some(other.to_string());
                i += 1;
            }
            other => anyhow::bail!("Unknown argument '{}'", other),
        }
    }

    match (near, radius_km) {
        (Some(center), Some(radius_km)) => {
            filters.geo = Some(GeoFilter { center, radius_km });
        }
        (Some(_), None) | (None, Some(_)) => {
            eprintln!("Warning: --near and --radius-km must be given together; ignoring both");
        }
        (None, None) => {}
    }

    let query = build_search_query(kind, term.as_deref(), &filters);
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}

fn run_autocomplete(args: &[String]) -> anyhow::Result<()> {
    let prefix = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: artsearch autocomplete <prefix> [--kind artist|workshop]"))?;
    let mut kind = EntityKind::Artist;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--kind" => kind = parse_kind(flag_value(args, &mut i, "--kind")?)?,
            other => anyhow::bail!("Unknown argument '{}'", other),
        }
    }
    let query = build_autocomplete_query(prefix, kind);
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}

fn run_suggest(args: &[String], config: &Config) -> anyhow::Result<()> {
    let prefix = args
        .first()
        .ok_or_else(|| {
            anyhow::anyhow!("Usage: artsearch suggest <prefix> [--scope all] [--fixture hits.json]")
        })?
        .clone();
    let mut scope = Scope::All;
    let mut fixture: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scope" => scope = parse_scope(flag_value(args, &mut i, "--scope")?)?,
            "--fixture" => fixture = Some(flag_value(args, &mut i, "--fixture")?.to_string()),
            other => anyhow::bail!("Unknown argument '{}'", other),
        }
    }

    let backend = FixtureBackend::load(fixture.as_deref())?;
    let composer = SuggestComposer::new(backend, config.suggest.clone());
    let suggestions = tokio::runtime::Runtime::new()?
        .block_on(async { composer.suggest(&prefix, scope).await })?;
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}

fn run_rank(args: &[String]) -> anyhow::Result<()> {
    let path = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: artsearch rank <records.json>"))?;
    let records: Vec<RankingInputs> = serde_json::from_str(&fs::read_to_string(path)?)?;
    let scored = score_and_sort(records);
    println!("{}", serde_json::to_string_pretty(&scored)?);
    Ok(())
}

fn run_schema(args: &[String]) -> anyhow::Result<()> {
    let kinds: Vec<EntityKind> = match args.first().map(String::as_str) {
        Some(name) => vec![parse_kind(name)?],
        None => vec![EntityKind::Artist, EntityKind::Workshop],
    };
    for kind in kinds {
        println!("{}", serde_json::to_string_pretty(&index_definition(kind))?);
    }
    Ok(())
}

/// Consume the value following a flag, advancing the cursor past both.
fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> anyhow::Result<&'a str> {
    if *i + 1 >= args.len() {
        anyhow::bail!("{} requires a value", flag);
    }
    *i += 2;
    Ok(&args[*i - 1])
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: could not load config ({}), using defaults", e);
        Config::default()
    });

    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "query" => run_query(&args),
        "autocomplete" => run_autocomplete(&args),
        "suggest" => run_suggest(&args, &config),
        "rank" => run_rank(&args),
        "schema" => run_schema(&args),
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
}
