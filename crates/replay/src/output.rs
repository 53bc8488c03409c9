//! Report rendering.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use console::style;
use input_content::ActionRegistry;
use input_core::{ActionId, ActionRequest};

use crate::runner::Report;
use crate::world::Outbound;

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Counts per action plus the move total
    Summary,
    /// Every outbound message in send order
    List,
    /// Full JSON output
    Json,
}

pub fn print(report: &Report, actions: &ActionRegistry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Summary => print_summary(report, actions),
        OutputFormat::List => print_list(report, actions),
        OutputFormat::Json => print_json(report)?,
    }
    Ok(())
}

fn action_name(actions: &ActionRegistry, id: ActionId) -> &str {
    actions.get(id).map_or("<unknown>", |descriptor| descriptor.name.as_str())
}

fn print_summary(report: &Report, actions: &ActionRegistry) {
    println!("{}", style("=== Replay Summary ===").bold().green());
    println!("{} {}", style("Class:").bold().cyan(), report.class);
    println!();

    let mut counts: BTreeMap<ActionId, usize> = BTreeMap::new();
    for (_, request) in report.actions() {
        *counts.entry(request.action).or_insert(0) += 1;
    }

    println!("{}", style("Actions Sent:").bold().yellow());
    if counts.is_empty() {
        println!("  (none)");
    }
    for (id, count) in counts {
        println!("  {} ({}): {}", action_name(actions, id), id, count);
    }
    println!();

    let moves = report.moves().count();
    println!("{} {}", style("Moves Sent:").bold().yellow(), moves);
    if let Some((at_ms, destination)) = report.moves().last() {
        println!("  Last: {:.2?} at {}ms", destination, at_ms);
    }
}

fn print_list(report: &Report, actions: &ActionRegistry) {
    println!("{}", style("=== Outbound Messages ===").bold().green());
    println!();

    for entry in &report.entries {
        let at = style(format!("{:>6}ms", entry.at_ms)).dim();
        match &entry.event {
            Outbound::Action { request } => {
                println!("{} {} {}", at, style("action").bold(), describe(request, actions));
            }
            Outbound::Move { destination } => {
                println!("{} {} {:.2?}", at, style("move").bold(), destination);
            }
            Outbound::Slot { slot, state } => {
                let shown = match state {
                    Some(state) if state.selectable => {
                        action_name(actions, state.action).to_string()
                    }
                    Some(state) => format!("{} (disabled)", action_name(actions, state.action)),
                    None => "empty".to_string(),
                };
                println!("{} {} {} -> {}", at, style("slot").bold(), slot, shown);
            }
        }
    }
}

fn describe(request: &ActionRequest, actions: &ActionRegistry) -> String {
    let mut text = action_name(actions, request.action).to_string();
    if request.is_targeted() {
        let targets: Vec<String> = request.targets.iter().map(|id| id.to_string()).collect();
        text.push_str(&format!(" on {}", targets.join(", ")));
    }
    if let Some(position) = request.position {
        text.push_str(&format!(" at {:.2?}", position));
    }
    if let Some(direction) = request.direction {
        text.push_str(&format!(" towards {:.2?}", direction));
    }
    if request.should_close {
        text.push_str(" [close]");
    }
    if request.cancel_movement {
        text.push_str(" [stop]");
    }
    text
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")?;
    println!("{}", json);
    Ok(())
}
