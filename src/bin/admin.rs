//! CLI administration tool for the advent calendar.
//!
//! Provides commands for generating the calendar schedule, sending the daily
//! SMS notification, and inspecting stored submissions without requiring
//! HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Generate the calendar from all stored submissions
//! cargo run --bin admin -- generate
//!
//! # Reproducible run for a fixed seed, without persisting
//! cargo run --bin admin -- generate --seed 42 --dry-run
//!
//! # Send today's notification (intended as a daily cron target)
//! cargo run --bin admin -- notify
//!
//! # Send the notification for a specific day
//! cargo run --bin admin -- notify --day 6
//!
//! # Inspect submissions
//! cargo run --bin admin -- submissions list
//! ```
//!
//! # Environment Variables
//!
//! Same configuration as the server; see the `config` module. The commands
//! operate directly on the flat-file stores.
//!
//! # Features
//!
//! - **Schedule Generation**: Fair allocation with optional fixed seed
//! - **Notifications**: Daily SMS fan-out through the configured gateway
//! - **Interactive Prompts**: Confirmation before replacing a schedule
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use advent_calendar::application::services::{
    GeneratorService, NotificationService, SubmissionService,
};
use advent_calendar::config::{self, Config};
use advent_calendar::domain::entities::Schedule;
use advent_calendar::domain::repositories::ScheduleRepository;
use advent_calendar::infrastructure::persistence::{
    FileScheduleRepository, FileSubmissionRepository,
};
use advent_calendar::infrastructure::sms::{HttpSmsGateway, NullSmsSender, SmsSender};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::collections::BTreeMap;
use std::sync::Arc;

/// CLI tool for managing the advent calendar.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Generate the calendar schedule from stored submissions
    Generate {
        /// Number of days to fill (default: CALENDAR_DAYS)
        #[arg(short, long)]
        days: Option<u32>,

        /// Seed for a reproducible run (random otherwise)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Allocate and report without persisting the schedule
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt when replacing an existing schedule
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Send the daily SMS notification
    Notify {
        /// Calendar day to announce (default: today's day-of-month)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Inspect stored submissions
    Submissions {
        #[command(subcommand)]
        action: SubmissionsAction,
    },
}

/// Submission inspection subcommands.
#[derive(Subcommand)]
enum SubmissionsAction {
    /// List all submissions with their link counts
    List,

    /// Show the total submission count
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Generate {
            days,
            seed,
            dry_run,
            yes,
        } => generate(&config, days, seed, dry_run, yes).await?,
        Commands::Notify { day } => notify(&config, day).await?,
        Commands::Submissions { action } => handle_submissions_action(&config, action).await?,
    }

    Ok(())
}

/// Runs the allocator over all stored submissions.
///
/// # Flow
///
/// 1. Load submissions from the flat-file store
/// 2. Confirm replacement if a schedule already exists (unless `--yes`)
/// 3. Allocate; any allocation error aborts before anything is written
/// 4. Persist atomically (unless `--dry-run`) and print a fairness summary
async fn generate(
    config: &Config,
    days: Option<u32>,
    seed: Option<u64>,
    dry_run: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📅 Generate Calendar Schedule".bright_blue().bold());
    println!();

    let days = days.unwrap_or(config.calendar_days);

    let submissions = Arc::new(FileSubmissionRepository::new(
        config.submissions_path.clone(),
    ));
    let schedule_repo = Arc::new(FileScheduleRepository::new(config.schedule_path.clone()));
    let service = GeneratorService::new(submissions.clone(), schedule_repo.clone());

    let submission_count = SubmissionService::new(submissions).count().await?;
    println!("  Submissions: {}", submission_count.to_string().cyan());
    println!("  Days to fill: {}", days.to_string().cyan());
    if let Some(seed) = seed {
        println!("  Seed: {}", seed.to_string().bright_yellow());
    }
    println!();

    if !dry_run
        && !skip_confirm
        && schedule_repo.load().await?.is_some()
    {
        let confirmed = Confirm::new()
            .with_prompt("A schedule already exists. Replace it?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let result = if dry_run {
        service.plan(days, seed).await
    } else {
        service.generate(days, seed).await
    };

    let schedule = result.map_err(|e| anyhow::anyhow!("Allocation failed: {e}"))?;

    if dry_run {
        println!("{}", "✅ Allocation succeeded (dry run, nothing written)".green().bold());
    } else {
        println!("{}", "✅ Schedule generated and persisted!".green().bold());
    }
    println!();

    print_usage_summary(&schedule);

    Ok(())
}

/// Prints per-submitter usage counts for a generated schedule.
fn print_usage_summary(schedule: &Schedule) {
    let mut usage: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, slots) in schedule.iter() {
        for slot in slots {
            *usage.entry(slot.submitter.as_str()).or_insert(0) += 1;
        }
    }

    println!("{}", "Links used per submitter:".bright_white().bold());
    for (name, count) in usage {
        println!("  {:<20} {}", name.cyan(), count);
    }
}

/// Sends the SMS notification for one day to all configured recipients.
async fn notify(config: &Config, day: Option<u32>) -> Result<()> {
    println!("{}", "📨 Daily Notification".bright_blue().bold());
    println!();

    let day = match day {
        Some(day) => day,
        None => {
            let today = Local::now().date_naive();
            if today.month0() != config.target_month {
                anyhow::bail!(
                    "today is outside the calendar month (month index {}); pass --day explicitly",
                    config.target_month
                );
            }
            today.day()
        }
    };

    let sender: Arc<dyn SmsSender> = match (&config.sms_gateway_url, &config.sms_api_token) {
        (Some(url), Some(token)) => Arc::new(HttpSmsGateway::new(url.clone(), token.clone())),
        _ => {
            println!("{}", "⚠️  No SMS gateway configured, deliveries will be logged only".yellow());
            Arc::new(NullSmsSender::new())
        }
    };

    let schedule_repo = Arc::new(FileScheduleRepository::new(config.schedule_path.clone()));
    let service = NotificationService::new(schedule_repo, sender, config.sms_recipients.clone());

    let report = service
        .notify_day(day)
        .await
        .map_err(|e| anyhow::anyhow!("Notification failed: {e}"))?;

    println!(
        "{} day {}: {} delivered, {} failed",
        "✅".green(),
        report.day.to_string().cyan(),
        report.delivered.to_string().green(),
        if report.failed > 0 {
            report.failed.to_string().red()
        } else {
            report.failed.to_string().normal()
        }
    );

    Ok(())
}

/// Dispatches submission inspection commands.
async fn handle_submissions_action(config: &Config, action: SubmissionsAction) -> Result<()> {
    let repo = Arc::new(FileSubmissionRepository::new(
        config.submissions_path.clone(),
    ));
    let service = SubmissionService::new(repo);

    match action {
        SubmissionsAction::List => {
            let submissions = service.list().await?;

            if submissions.is_empty() {
                println!("{}", "No submissions yet".yellow());
                return Ok(());
            }

            println!("{}", "Stored submissions:".bright_white().bold());
            for submission in submissions {
                println!(
                    "  {:<20} {:>3} links  {}",
                    submission.name.cyan(),
                    submission.link_count(),
                    submission
                        .submitted_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .dimmed()
                );
            }
        }
        SubmissionsAction::Count => {
            let count = service.count().await?;
            println!("{} submissions stored", count.to_string().cyan());
        }
    }

    Ok(())
}
