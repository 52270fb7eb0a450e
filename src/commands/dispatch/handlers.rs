//! Routing from parsed subcommands to their implementations

use chrono::Utc;

use super::command::{Command, CommandContext};
use super::macros::trace_command;
use crate::cli::commands::{
    ConfigArgs, CreateArgs, DiffArgs, ParseArgs, RecallArgs, ReviewArgs, UpdateArgs,
};
use crate::cli::Commands;
use crate::commands;
use arbor_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Parse(args) => handle_parse(ctx, args),
            Commands::Create(args) => handle_create(ctx, args),
            Commands::Update(args) => handle_update(ctx, args),
            Commands::Review(args) => handle_review(ctx, args),
            Commands::Recall(args) => handle_recall(ctx, args),
            Commands::Diff(args) => handle_diff(ctx, args),
            Commands::Config(args) => handle_config(ctx, args),
        }
    }
}

fn handle_parse(ctx: &CommandContext, args: &ParseArgs) -> Result<()> {
    commands::parse::execute(ctx.cli, &args.input)?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_create(ctx: &CommandContext, args: &CreateArgs) -> Result<()> {
    commands::create::execute(ctx.cli, &args.input, &args.out, args.force, Utc::now())?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_update(ctx: &CommandContext, args: &UpdateArgs) -> Result<()> {
    let threshold = match args.threshold {
        Some(threshold) => threshold,
        None => ctx.load_config()?.reconcile.content_change_threshold,
    };
    trace_command!(ctx, "load_config");

    commands::update::execute(ctx.cli, &args.document, &args.input, threshold, Utc::now())?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_review(ctx: &CommandContext, args: &ReviewArgs) -> Result<()> {
    commands::review::execute(
        ctx.cli,
        &args.document,
        &args.coordinate,
        args.r#type,
        args.score,
        args.at.unwrap_or_else(Utc::now),
    )?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_recall(ctx: &CommandContext, args: &RecallArgs) -> Result<()> {
    let config = ctx.load_config()?;
    trace_command!(ctx, "load_config");

    commands::recall::execute(
        ctx.cli,
        &args.document,
        &config.recall,
        args.at.unwrap_or_else(Utc::now),
    )?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_diff(ctx: &CommandContext, args: &DiffArgs) -> Result<()> {
    commands::diff::execute(ctx.cli, &args.before, &args.after)?;
    trace_command!(ctx, "execute_command");
    Ok(())
}

fn handle_config(ctx: &CommandContext, args: &ConfigArgs) -> Result<()> {
    commands::config::execute(ctx.cli, ctx.cli.config.as_deref(), args.init, args.force)?;
    trace_command!(ctx, "execute_command");
    Ok(())
}
