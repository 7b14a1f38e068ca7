//! Entry point for the Resufeed landing app.
//!
//! This Dioxus desktop application renders the marketing page: reveal
//! animations over the headline copy plus the gallery of previously
//! uploaded resumes.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use resufeed_home::components::App;
use resufeed_home::router::AppRoute;
use resufeed_home::store::{
    FileKvStore, KvStore, MemoryKvStore, ParsePolicy, Services, StaticAuth,
};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Services built in `main`, handed to the root component.
static SERVICES: OnceLock<Services> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "resufeed-home")]
#[command(about = "Landing page for the Resufeed resume-feedback app")]
struct Args {
    /// Path to a JSONL file seeding the key-value store (starts empty if not provided)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Start without a signed-in session (demonstrates the auth redirect)
    #[arg(long)]
    signed_out: bool,

    /// Abort the resume list on the first undecodable record instead of skipping it
    #[arg(long)]
    strict_parse: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Resufeed landing page");

    // Parse command line arguments and build the injected services
    let args = Args::parse();

    let kv: Arc<dyn KvStore> = match &args.data {
        Some(path) => Arc::new(
            FileKvStore::load(path)
                .with_context(|| format!("failed to load store data from {}", path.display()))?,
        ),
        None => Arc::new(MemoryKvStore::new()),
    };

    let services = Services {
        kv,
        auth: Arc::new(StaticAuth::new(!args.signed_out)),
        parse_policy: if args.strict_parse {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Skip
        },
    };
    SERVICES.set(services).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Resufeed")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    resufeed_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root component: picks up the services built in `main` and owns the
/// route signal.
#[component]
fn RootApp() -> Element {
    let services = use_hook(|| {
        SERVICES.get().cloned().unwrap_or_else(|| Services {
            kv: Arc::new(MemoryKvStore::new()),
            auth: Arc::new(StaticAuth::new(true)),
            parse_policy: ParsePolicy::Skip,
        })
    });
    let route = use_signal(|| AppRoute::Home);

    rsx! {
        App { services, route }
    }
}
