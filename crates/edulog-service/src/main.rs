use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use edulog_export::render::render_category_page;
use edulog_scoring::{all_categories, get_category};
use edulog_service::config::ServiceConfig;
use edulog_service::params::PageParams;
use edulog_service::service::ReportService;

/// Fetch assessment data and produce worksheet view-models.
#[derive(Debug, Parser)]
#[command(name = "edulog", version)]
struct Cli {
    /// JSON config file; flags and environment override its values.
    #[arg(long, env = "EDULOG_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "EDULOG_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "EDULOG_AUTH_URL")]
    auth_url: Option<String>,

    #[arg(long, env = "EDULOG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "EDULOG_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[arg(long, env = "EDULOG_CACHE_CAPACITY")]
    cache_capacity: Option<usize>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the worksheet categories.
    Categories,
    /// Build the view-model of one category from a page URL.
    Fetch {
        /// Page URL carrying `token`, `p_id` and optionally `einrichtung_id`.
        #[arg(long)]
        url: String,
        #[arg(long)]
        category: String,
        /// Render HTML instead of printing JSON.
        #[arg(long)]
        html: bool,
        /// Tera template used with `--html`.
        #[arg(long, requires = "html")]
        template: Option<PathBuf>,
    },
    /// Build the view-models of all categories as one JSON object.
    FetchAll {
        #[arg(long)]
        url: String,
    },
}

impl Cli {
    fn service_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::load(path)?,
            None => {
                let base_url = self
                    .base_url
                    .clone()
                    .ok_or_else(|| eyre::eyre!("set --base-url or EDULOG_BASE_URL"))?;
                let auth_url = self
                    .auth_url
                    .clone()
                    .ok_or_else(|| eyre::eyre!("set --auth-url or EDULOG_AUTH_URL"))?;
                ServiceConfig::new(base_url, auth_url)
            }
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(auth_url) = &self.auth_url {
            config.auth_url = auth_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(cache_capacity) = self.cache_capacity {
            config.cache_capacity = cache_capacity;
        }
        Ok(config)
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match &cli.command {
        Command::Categories => {
            for category in all_categories() {
                println!("{}\t{}", category.id, category.label);
            }
        }
        Command::Fetch {
            url,
            category,
            html,
            template,
        } => {
            let category = get_category(category)
                .ok_or_else(|| eyre::eyre!("unknown category: {category}"))?;
            let service = ReportService::from_config(&cli.service_config()?)?;
            let params = PageParams::from_url(url);
            let view_model = service.fetch_data(category.id, params.as_ref()).await?;

            if *html {
                let template = template.as_ref().map(std::fs::read_to_string).transpose()?;
                let page = render_category_page(category.label, template.as_deref(), &view_model)?;
                println!("{page}");
            } else {
                println!("{}", serde_json::to_string_pretty(&view_model)?);
            }
        }
        Command::FetchAll { url } => {
            let service = ReportService::from_config(&cli.service_config()?)?;
            let params = PageParams::from_url(url);
            let mut all = serde_json::Map::new();
            for (category, view_model) in service.fetch_all(params.as_ref()).await {
                all.insert(category.id.to_string(), serde_json::to_value(view_model)?);
            }
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
    }

    Ok(())
}
