//! Fetch command - reads items through the configured repository

use clap::{Args, Subcommand};
use serde_json::json;
use tracing::info;

use crate::domain::{Category, DomainError};
use crate::infrastructure::services::ItemService;

/// Arguments for the fetch command
#[derive(Args, Clone, Debug)]
pub struct FetchArgs {
    /// Number of times to run the fetch; repeats show cache behavior
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeat: u32,

    #[command(subcommand)]
    pub target: FetchTarget,
}

#[derive(Subcommand, Clone, Debug)]
pub enum FetchTarget {
    /// One random item
    Random,

    /// Several random items
    Batch { count: usize },

    /// One item by id (1-451), or a random one if the id does not exist
    Id { id: u64 },

    /// All items of a category (general, knock-knock, programming, dad)
    Category { name: String },

    /// The fixed item, without contacting the upstream
    Consistent,
}

pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let context = crate::create_app_context(config)?;
    let service = context.item_service().await?;

    for attempt in 1..=args.repeat {
        let value = fetch_once(&service, &args.target).await?;
        info!(attempt, repository = service.repository().repository_name(), "Fetch completed");
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    if let Some(stats) = service.repository().cache_stats().await {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "cache": stats,
                "hit_rate": stats.hit_rate(),
            }))?
        );
    }

    Ok(())
}

async fn fetch_once(
    service: &ItemService,
    target: &FetchTarget,
) -> Result<serde_json::Value, DomainError> {
    let repository = service.repository();

    let value = match target {
        FetchTarget::Random => json!(repository.fetch_random().await?),
        FetchTarget::Batch { count } => json!(repository.fetch_random_batch(*count).await?),
        FetchTarget::Id { id } => json!(service.item_by_id_or_random(*id).await?),
        FetchTarget::Category { name } => {
            let category: Category = name.parse()?;
            json!(repository.fetch_by_category(category.as_str()).await?)
        }
        FetchTarget::Consistent => json!(service.consistent_text()),
    };

    Ok(value)
}
