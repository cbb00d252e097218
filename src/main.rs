// This is the entry point of the Sidrap farm assistant bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (FAQ matching, records, fertilizer tables)
// - `infra/` = Implementations of core traits (JSON files, upload folder)
// - `discord/` = Discord-specific adapters (commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

mod config;

use crate::config::AppConfig;
use crate::core::faq::{default_faq, ChatService, FaqMatcher};
use crate::core::records::{PriceService, ReportService, TodoService};
use crate::discord::commands::presence;
use crate::discord::faq_mentions;
use crate::discord::{Data, Error};
use crate::infra::records::{JsonRecordStore, LocalUploadStore};
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Event handler for non-command Discord events.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        // Ignore bot messages (including our own)
        if new_message.author.bot {
            return Ok(());
        }

        if let Err(e) = faq_mentions::handle_message(ctx, data, new_message).await {
            tracing::error!("Failed to answer mention: {}", e);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    let matcher = FaqMatcher::with_threshold(default_faq(), config.faq_threshold);
    tracing::info!(
        entries = matcher.len(),
        threshold = matcher.threshold(),
        "FAQ catalog loaded"
    );
    if matcher.is_empty() {
        tracing::warn!("FAQ catalog is empty, every question gets the fallback answer");
    }
    let chat_service = Arc::new(ChatService::new(matcher));

    let report_service = Arc::new(
        ReportService::open(
            JsonRecordStore::new(config.reports_file.clone()),
            LocalUploadStore::new(config.upload_dir.clone()),
            config.timezone,
        )
        .await,
    );
    let price_service =
        Arc::new(PriceService::open(JsonRecordStore::new(config.prices_file.clone())).await);
    let todo_service =
        Arc::new(TodoService::open(JsonRecordStore::new(config.todo_file.clone())).await);

    // Create the data structure that will be shared across all commands
    let data = Data {
        chat: Arc::clone(&chat_service),
        reports: Arc::clone(&report_service),
        prices: Arc::clone(&price_service),
        todos: Arc::clone(&todo_service),
    };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required to read mention text
        | serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                discord::commands::chatbot::ask(),
                discord::commands::chatbot::chat(),
                discord::commands::reports::report(),
                discord::commands::prices::prices(),
                discord::commands::todo::todo(),
                discord::commands::fertilizer::fertilizer(),
                discord::commands::help::help(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                tracing::info!("Bot is starting up");

                // Global registration can take a while to propagate.
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                tracing::info!(
                    commands = framework.options().commands.len(),
                    "Commands registered, bot is ready"
                );
                presence::on_ready(ctx);

                Ok(data)
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
