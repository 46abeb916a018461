//! cookbook: CLI for browsing and querying the recipe catalog.

use clap::{Parser, Subcommand};
use cookbook_cli::output::{format_count, format_minutes, format_stars, pad_cell, Status};
use cookbook_filter::{evaluate, DurationBucket, FilterCriteria};
use cookbook_geo::{adjective_for, resolve_country};
use cookbook_model::Catalog;
use cookbook_parse::{ingredient_name, parse_duration};
use cookbook_refs::{render, Segment};
use cookbook_storage::{JsonStore, StorageConfig};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "Browse and query a personal recipe catalog")]
#[command(version)]
struct Cli {
    /// Storage directory (overrides config file)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, optionally filtered
    List {
        /// Substring to match against titles
        #[arg(long, default_value = "")]
        search: String,
        /// Require a label (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Require an ingredient (repeatable)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Require a total-time bucket: quick, medium, long or multiday
        #[arg(long)]
        time: Option<DurationBucket>,
        /// Minimum rating, half-star steps
        #[arg(long, default_value_t = 0.0)]
        min_rating: f32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe by title
    Show {
        /// Exact recipe title (case-insensitive)
        title: String,
    },
    /// Count recipes per country, resolved from labels
    Map {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all labels in use
    Tags,
    /// List all distinct ingredients
    Ingredients,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let dir = match cli.storage {
        Some(dir) => dir,
        None => StorageConfig::load()?.storage_dir(),
    };
    let store = JsonStore::open(&dir)?;
    let catalog = Catalog::new(store.load()?);

    match cli.command {
        Commands::List {
            search,
            tags,
            ingredients,
            time,
            min_rating,
            json,
        } => {
            let criteria = FilterCriteria {
                search,
                tags,
                ingredients,
                bucket: time,
                min_rating,
            };
            let matches = evaluate(catalog.recipes(), &criteria);
            if json {
                let rows: Vec<_> = matches
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.id,
                            "title": r.title,
                            "labels": r.labels,
                            "totalTime": r.total_time,
                            "rating": r.rating,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for recipe in &matches {
                    let minutes = parse_duration(recipe.total_time.as_deref().unwrap_or(""));
                    println!(
                        "{} {:>8}  {}",
                        pad_cell(&recipe.title, 40).bold(),
                        format_minutes(minutes),
                        format_stars(recipe.rating.unwrap_or(0.0)).yellow(),
                    );
                }
                println!();
                Status::info(&format!(
                    "{} of {}",
                    format_count(matches.len(), "recipe", "recipes"),
                    catalog.len(),
                ));
            }
        }

        Commands::Show { title } => {
            let Some(recipe) = catalog.find_by_exact_title(&title) else {
                Status::error(&format!("no recipe titled '{}'", title));
                std::process::exit(1);
            };
            Status::header(&recipe.title);
            if let Some(rating) = recipe.rating {
                println!("{}", format_stars(rating).yellow());
            }
            if !recipe.labels.is_empty() {
                println!("Labels: {}", recipe.labels.join(", "));
            }
            if let Some(servings) = &recipe.servings {
                println!("Yield: {}", servings);
            }
            if let Some(total) = &recipe.total_time {
                println!("Total time: {} ({})", total, format_minutes(parse_duration(total)));
            }
            if let Some(active) = &recipe.active_time {
                println!("Active time: {}", active);
            }
            if let Some(description) = &recipe.description {
                println!();
                println!("{}", flatten(description, &catalog));
            }
            for section in &recipe.ingredients {
                println!();
                if let Some(title) = &section.title {
                    println!("{}", title.bold());
                }
                for item in &section.items {
                    println!("  - {}", ingredient_name(item));
                }
            }
            for section in &recipe.instructions {
                println!();
                if let Some(title) = &section.title {
                    println!("{}", flatten(title, &catalog).bold());
                }
                for (i, step) in section.steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, flatten(step, &catalog));
                }
            }
            if let Some(notes) = &recipe.notes {
                println!();
                println!("Notes: {}", flatten(notes, &catalog));
            }
        }

        Commands::Map { json } => {
            let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
            let mut other = 0usize;
            for recipe in &catalog {
                let mut placed = false;
                for label in &recipe.labels {
                    if let Some(code) = resolve_country(label) {
                        *counts.entry(code).or_insert(0) += 1;
                        placed = true;
                    }
                }
                if !placed {
                    other += 1;
                }
            }
            if other > 0 {
                counts.insert("other", other);
            }
            if json {
                let rows: Vec<_> = counts
                    .iter()
                    .map(|(code, count)| {
                        serde_json::json!({
                            "code": code,
                            "label": adjective_for(code),
                            "count": count,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if counts.is_empty() {
                Status::warning("no recipes to place");
            } else {
                for (code, count) in &counts {
                    let label = adjective_for(code).unwrap_or_else(|| code.to_string());
                    println!("{:<24} {}", label, count);
                }
            }
        }

        Commands::Tags => {
            for label in catalog.all_labels() {
                println!("{}", label);
            }
        }

        Commands::Ingredients => {
            for name in cookbook_filter::all_ingredients(&catalog) {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Flattens recipe text for terminal display, substituting resolved
/// `@` references with highlighted titles.
fn flatten(text: &str, catalog: &Catalog) -> String {
    render(text, catalog)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(s) => s,
            Segment::Reference { text, .. } => text.cyan().to_string(),
        })
        .collect()
}
