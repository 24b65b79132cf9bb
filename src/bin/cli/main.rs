use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "job-market-cli")]
#[command(about = "CLI for interacting with the job market server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "JOB_MARKET_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Acting user id, sent as the x-user-id header
    #[arg(long, env = "JOB_MARKET_USER_ID")]
    user_id: Option<String>,

    /// Acting user role, sent as the x-user-role header
    #[arg(long, env = "JOB_MARKET_ROLE", default_value = "admin")]
    role: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check server health
    Health,

    /// Show the statistics overview (admin only)
    Stats,

    /// Work with job postings
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },

    /// Work with discover tags
    Tags {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Work with the banner carousel
    Banner {
        #[command(subcommand)]
        command: BannerCommands,
    },
}

#[derive(Subcommand, Debug)]
enum JobCommands {
    /// List postings
    List {
        /// Substring to search for
        #[arg(short, long)]
        query: Option<String>,

        /// Tag to filter by
        #[arg(short, long)]
        tag: Option<String>,

        #[arg(long)]
        page: Option<u64>,

        #[arg(long)]
        limit: Option<u64>,
    },

    /// Show one posting
    Get {
        /// Posting id
        id: String,
    },

    /// Create a posting
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        salary_range: Option<String>,

        /// Tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a posting
    Delete {
        /// Posting id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum TagCommands {
    /// List discover tags
    List,

    /// Create a discover tag
    Create {
        name: String,

        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BannerCommands {
    /// Show the banner carousel
    List,

    /// Move one banner image to a new position
    Move { old_index: u64, new_index: u64 },
}

struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    fn new(cli: &Cli) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(user_id) = &cli.user_id {
            headers.insert("x-user-id", HeaderValue::from_str(user_id)?);
            headers.insert("x-user-role", HeaderValue::from_str(&cli.role)?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base: cli.url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.send(self.http.get(self.endpoint(path)).query(query))
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send(self.http.post(self.endpoint(path)).json(&body))
            .await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.send(self.http.patch(self.endpoint(path)).json(&body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.send(self.http.delete(self.endpoint(path))).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = request.send().await.context("request failed")?;
        let status = response.status();
        let envelope: Value = response
            .json()
            .await
            .context("response body was not JSON")?;

        let message = envelope["message"].as_str().unwrap_or("").to_string();
        if envelope["outcome"] == "error" {
            anyhow::bail!("{} ({})", message, status);
        }

        println!("{}", message);
        print_payload(&envelope);
        Ok(envelope)
    }
}

fn print_payload(envelope: &Value) {
    if let Some(data) = envelope.get("data") {
        if !data.is_null() {
            println!(
                "{}",
                serde_json::to_string_pretty(data).unwrap_or_default()
            );
        }
    }

    if let Some(count) = envelope.get("count").and_then(Value::as_u64) {
        println!("count: {}", count);
    }

    if let Some(pagination) = envelope.get("pagination") {
        if !pagination.is_null() {
            println!(
                "page {} of {} ({} items total)",
                pagination["page"], pagination["totalPages"], pagination["totalItems"]
            );
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = ApiClient::new(&cli)?;

    match cli.command {
        Commands::Health => {
            client.get("/health", &[]).await?;
        }
        Commands::Stats => {
            client.get("/statistics", &[]).await?;
        }
        Commands::Jobs { command } => match command {
            JobCommands::List {
                query,
                tag,
                page,
                limit,
            } => {
                let mut params = Vec::new();
                if let Some(query) = query {
                    params.push(("query", query));
                }
                if let Some(tag) = tag {
                    params.push(("tag", tag));
                }
                if let Some(page) = page {
                    params.push(("page", page.to_string()));
                }
                if let Some(limit) = limit {
                    params.push(("limit", limit.to_string()));
                }
                client.get("/jobs", &params).await?;
            }
            JobCommands::Get { id } => {
                client.get(&format!("/jobs/{}", id), &[]).await?;
            }
            JobCommands::Create {
                title,
                company,
                location,
                description,
                salary_range,
                tags,
            } => {
                let mut body = json!({
                    "title": title,
                    "company": company,
                    "location": location,
                    "description": description,
                    "tags": tags,
                });
                if let Some(salary_range) = salary_range {
                    body["salaryRange"] = Value::String(salary_range);
                }
                client.post("/jobs", body).await?;
            }
            JobCommands::Delete { id } => {
                client.delete(&format!("/jobs/{}", id)).await?;
            }
        },
        Commands::Tags { command } => match command {
            TagCommands::List => {
                client.get("/discoverTags", &[]).await?;
            }
            TagCommands::Create { name, category } => {
                let mut body = json!({ "name": name });
                if let Some(category) = category {
                    body["category"] = Value::String(category);
                }
                client.post("/discoverTags", body).await?;
            }
        },
        Commands::Banner { command } => match command {
            BannerCommands::List => {
                client.get("/banner", &[]).await?;
            }
            BannerCommands::Move {
                old_index,
                new_index,
            } => {
                client
                    .patch(
                        "/banner/images/move",
                        json!({ "oldIndex": old_index, "newIndex": new_index }),
                    )
                    .await?;
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    run(cli).await
}
