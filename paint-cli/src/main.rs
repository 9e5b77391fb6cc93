use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paint_catalog::{CatalogProvider, HttpCatalogSource, SnapshotCache};
use paint_core::calculations::ProjectEstimator;
use paint_core::catalog::{CatalogSource, filters};
use paint_core::models::{Application, ProjectState};
use paint_core::store::{PROJECT_STORAGE_KEY, ProjectStore};
use paint_store_json::JsonFileStore;

mod render;

/// Painting and coating job estimator.
#[derive(Parser, Debug)]
#[command(name = "paint-estimator")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the project file
    #[arg(long, default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
struct CatalogArgs {
    /// URL of the remote product catalog
    #[arg(long)]
    url: Option<String>,

    /// Path of the catalog snapshot file
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Skip the remote catalog even when a URL is given
    #[arg(long, default_value_t = false)]
    offline: bool,
}

impl CatalogArgs {
    fn provider(&self) -> Result<CatalogProvider> {
        let source = match self.url.as_ref().filter(|_| !self.offline) {
            Some(url) => {
                let source = HttpCatalogSource::new(url.clone())
                    .with_context(|| format!("Failed to build a catalog client for {url}"))?;
                Some(Box::new(source) as Box<dyn CatalogSource>)
            }
            None => None,
        };
        let cache = self.cache.as_ref().map(SnapshotCache::new);
        Ok(match (source, cache) {
            (Some(source), Some(cache)) => CatalogProvider::new(source, cache),
            (Some(source), None) => CatalogProvider::with_source(source),
            (None, Some(cache)) => CatalogProvider::with_cache(cache),
            (None, None) => CatalogProvider::offline(),
        })
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a fresh project file with default pricing
    Init {
        /// Overwrite an existing project file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List the available products
    Catalog {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// List the distinct brands instead of the products
        #[arg(long, default_value_t = false)]
        brands: bool,

        /// Only products of this brand
        #[arg(long)]
        brand: Option<String>,

        /// Only products for this application: interior or exterior
        #[arg(long)]
        application: Option<String>,
    },

    /// Compute the estimate for the saved project
    Estimate {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paint_cli=info,paint_core=info,paint_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(&cli.data_dir);

    match cli.command {
        Command::Init { force } => init(&store, force).await,
        Command::Catalog {
            catalog,
            brands,
            brand,
            application,
        } => list_catalog(&catalog, brands, brand.as_deref(), application.as_deref()).await,
        Command::Estimate { catalog } => estimate(&store, &catalog).await,
    }
}

async fn init(store: &JsonFileStore, force: bool) -> Result<()> {
    if !force
        && store
            .load(PROJECT_STORAGE_KEY)
            .await
            .unwrap_or_default()
            .is_some()
    {
        bail!(
            "a project already exists in {} (use --force to overwrite)",
            store.root().display()
        );
    }

    let state = ProjectState::default();
    store
        .save(PROJECT_STORAGE_KEY, &state)
        .await
        .context("Failed to write the project file")?;

    println!("Initialized a new project in {}.", store.root().display());
    Ok(())
}

async fn list_catalog(
    args: &CatalogArgs,
    brands_only: bool,
    brand: Option<&str>,
    application: Option<&str>,
) -> Result<()> {
    let application = match application {
        None => None,
        Some(s) if s.eq_ignore_ascii_case("interior") => Some(Application::Interior),
        Some(s) if s.eq_ignore_ascii_case("exterior") => Some(Application::Exterior),
        Some(other) => bail!("unknown application '{other}' (expected interior or exterior)"),
    };

    let catalog = args.provider()?.resolve().await;
    if catalog.is_fallback() {
        println!("(catalog origin: {:?})", catalog.origin);
    }

    if brands_only {
        for brand in filters::brands(&catalog.products) {
            println!("{brand}");
        }
        return Ok(());
    }

    let mut products: Vec<&_> = catalog.products.iter().collect();
    if let Some(brand) = brand {
        products.retain(|p| p.brand.eq_ignore_ascii_case(brand));
    }
    if let Some(application) = application {
        products.retain(|p| p.supports(application));
    }

    if products.is_empty() {
        println!("No matching products.");
        return Ok(());
    }
    for product in products {
        println!("{}", render::product_line(product));
    }
    Ok(())
}

async fn estimate(store: &JsonFileStore, args: &CatalogArgs) -> Result<()> {
    let state = store
        .load(PROJECT_STORAGE_KEY)
        .await
        .context("Failed to read the project file")?
        .with_context(|| {
            format!(
                "no project found in {} (run `init` first)",
                store.root().display()
            )
        })?;

    state
        .pricing
        .validate()
        .context("The project's pricing configuration is invalid")?;

    let catalog = args.provider()?.resolve().await;
    if catalog.is_fallback() {
        println!(
            "Note: live catalog unavailable, using {} data.\n",
            match catalog.origin {
                paint_catalog::CatalogOrigin::Cache => "cached",
                _ => "built-in",
            }
        );
    }

    let estimator = ProjectEstimator::new(&state.pricing, state.project_type);
    let estimate = estimator
        .calculate(&state.surfaces, &state.selections, &catalog.products)
        .rounded();

    print!("{}", render::estimate(&estimate));

    if !estimate.warnings.is_empty() {
        println!();
        for warning in &estimate.warnings {
            println!("Warning: {}", render::warning(warning));
        }
    }

    Ok(())
}
