//! Command handlers for the `rowlog` binary.

use anyhow::{bail, Context};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

use rowlog::idt::{best_record, IdtEngine};
use rowlog::profile::{Profile, ProfileStore};
use rowlog::storage::{reset_all, KeyValueStore};
use rowlog::training::{
    distance_milestone, recent_window_aggregate, records_on_date, total_distance, Category,
    NewTrainingRecord, TrainingLog, TrainingRecord,
};
use rowlog::AppConfig;

use super::{Command, IdtCommand, LogCommand, ProfileCommand};

/// Dispatch a parsed command against the store.
pub fn run<S: KeyValueStore + ?Sized>(
    command: Command,
    store: &S,
    config: &AppConfig,
) -> anyhow::Result<()> {
    match command {
        Command::Profile { action } => run_profile(action, store),
        Command::Idt { action } => run_idt(action, store),
        Command::Log { action } => run_log(action, store, config),
        Command::Summary => show_summary(store),
        Command::Reset { yes } => {
            if !yes {
                bail!("Refusing to delete all data without --yes");
            }
            reset_all(store).context("Failed to reset stored data")?;
            println!("All data deleted.");
            Ok(())
        }
    }
}

fn run_profile<S: KeyValueStore + ?Sized>(
    action: ProfileCommand,
    store: &S,
) -> anyhow::Result<()> {
    let profiles = ProfileStore::new(store);

    match action {
        ProfileCommand::Show => {
            let profile = profiles.load_or_default().context("Failed to load profile")?;
            print_profile(&profile);
        }
        ProfileCommand::Set {
            name,
            affiliation,
            icon,
            weight,
            gender,
        } => {
            let mut profile = profiles.load_or_default().context("Failed to load profile")?;

            if let Some(name) = name {
                profile.name = name.trim().to_string();
            }
            if let Some(affiliation) = affiliation {
                profile.affiliation = affiliation.trim().to_string();
            }
            if let Some(icon) = icon {
                profile.icon_ref = non_blank(icon);
            }
            if let Some(weight) = weight {
                profile.weight = non_blank(weight);
            }
            if gender.is_some() {
                profile.gender = gender;
            }

            profiles.save(&profile).context("Failed to save profile")?;
            print_profile(&profile);
        }
    }

    Ok(())
}

fn run_idt<S: KeyValueStore + ?Sized>(action: IdtCommand, store: &S) -> anyhow::Result<()> {
    let engine = IdtEngine::new(store);

    match action {
        IdtCommand::Calc { time } => {
            let outcome = engine
                .record_score(time)
                .with_context(|| format!("Failed to score {}", time))?;

            println!(
                "IDT {} for {} at {} kg",
                outcome.record.score_display(),
                outcome.record.ergo_time_display,
                outcome.record.weight
            );
            if outcome.new_high_score {
                println!("New high score!");
            }
        }
        IdtCommand::History => {
            let history = engine.load_history().context("Failed to load IDT history")?;
            if history.is_empty() {
                println!("No calculations yet.");
            }
            for record in &history {
                println!(
                    "{:<15} {}  {:>8}  IDT {:>6}  {} kg",
                    record.id,
                    record.created_at.with_timezone(&Local).format("%Y/%m/%d %H:%M"),
                    record.ergo_time_display,
                    record.score_display(),
                    record.weight
                );
            }
        }
        IdtCommand::Delete { id } => {
            if engine.delete_record(&id).context("Failed to delete IDT record")? {
                println!("Deleted {}", id);
            } else {
                println!("No IDT record with id {}", id);
            }
        }
        IdtCommand::Best => {
            let history = engine.load_history().context("Failed to load IDT history")?;
            let best = best_record(&history);
            println!("Best time:  {}", best.display());

            match engine.load_high_score().context("Failed to load high score")? {
                Some(high) => println!(
                    "High score: {:.2} ({} at {} kg)",
                    high.score, high.ergo_time_display, high.weight
                ),
                None => println!("High score: --"),
            }
        }
    }

    Ok(())
}

fn run_log<S: KeyValueStore + ?Sized>(
    action: LogCommand,
    store: &S,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let log = TrainingLog::new(store);

    match action {
        LogCommand::Add {
            amount,
            category,
            memo,
            date,
        } => {
            let when = session_time(date, Local::now().fixed_offset())?;
            let record = log
                .add_record(NewTrainingRecord::new(amount, category, when).with_memo(memo))
                .context("Failed to add training record")?;
            println!(
                "Logged {} m {} on {} ({})",
                amount, record.category, record.display_date, record.id
            );
        }
        LogCommand::List => {
            let records = log.load_records().context("Failed to load training log")?;
            if records.is_empty() {
                println!("No training logged yet.");
            }
            for record in &records {
                print_record(record);
            }
        }
        LogCommand::Delete { id } => {
            if log.delete_record(&id).context("Failed to delete training record")? {
                println!("Deleted {}", id);
            } else {
                println!("No training record with id {}", id);
            }
        }
        LogCommand::Day { date } => {
            let records = log.load_records().context("Failed to load training log")?;
            let day = records_on_date(&records, date);
            if day.is_empty() {
                println!("No training on {}", date);
            }
            for record in day {
                print_record(record);
            }
        }
        LogCommand::Week => {
            let records = log.load_records().context("Failed to load training log")?;
            let window = recent_window_aggregate(
                &records,
                config.chart.window_days,
                &Category::ALL,
                Local::now().date_naive(),
            );

            let header: Vec<String> = window
                .categories
                .iter()
                .map(|c| format!("{:>10}", c.label()))
                .collect();
            println!("{:>6} {}", "", header.join(" "));
            for day in &window.days {
                let cells: Vec<String> = day.amounts.iter().map(|m| format!("{:>10}", m)).collect();
                println!("{:>6} {}", day.label, cells.join(" "));
            }
            if window.is_empty() {
                println!("No training in the last {} days.", config.chart.window_days);
            } else {
                println!("Longest day: {} m", window.max_day_total());
            }
        }
    }

    Ok(())
}

fn show_summary<S: KeyValueStore + ?Sized>(store: &S) -> anyhow::Result<()> {
    let history = IdtEngine::new(store)
        .load_history()
        .context("Failed to load IDT history")?;
    let records = TrainingLog::new(store)
        .load_records()
        .context("Failed to load training log")?;

    let total = total_distance(&records);
    let milestone = distance_milestone(total);

    println!("Best 2000 m: {}", best_record(&history).display());
    println!("Total distance: {} m", total);
    println!("{}", milestone.message());
    Ok(())
}

/// Session timestamp for `date` at the current local time of day.
fn session_time(
    date: Option<NaiveDate>,
    now: DateTime<FixedOffset>,
) -> anyhow::Result<DateTime<FixedOffset>> {
    let Some(date) = date else {
        return Ok(now);
    };

    now.offset()
        .from_local_datetime(&date.and_time(now.time()))
        .single()
        .with_context(|| format!("Invalid session date {}", date))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn print_profile(profile: &Profile) {
    println!("Name:        {}", profile.name);
    println!("Affiliation: {}", profile.affiliation);
    println!("Icon:        {}", profile.icon_ref.as_deref().unwrap_or("-"));
    println!(
        "Weight:      {}",
        profile.weight.as_deref().map_or("-".to_string(), |w| format!("{} kg", w))
    );
    println!(
        "Gender:      {}",
        profile.gender.map_or("-".to_string(), |g| g.to_string())
    );
}

fn print_record(record: &TrainingRecord) {
    let amount = record
        .amount
        .map_or("?".to_string(), |m| format!("{} m", m));
    println!(
        "{:<15} {:<10} {:<10} {:>9}  {}",
        record.id,
        record.display_date,
        record.category.label(),
        amount,
        record.memo
    );
}
