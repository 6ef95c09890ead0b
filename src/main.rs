//! Bindigo CLI - protein-ligand binding affinity prediction
//!
//! Usage: bindigo <COMMAND>
//!
//! Commands:
//!   predict  Predict protein-ligand binding affinity using docking + ML
//!   info     Show package and model information

mod commands;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use bindigo::config::{Config, ConfigWarning};
use bindigo::presentation::{Cli, Commands};

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    // Errors raised before the configuration is loaded render with defaults.
    let mut ctx = UiContext::new(
        cli.json,
        false,
        cli.color,
        &Config::default().with_env_overrides(),
    );

    if let Err(err) = run(cli, &mut ctx) {
        ui::error::print_error(&err, &ctx);
        std::process::exit(1);
    }
}

fn run(cli: Cli, ctx: &mut UiContext) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let cwd = std::env::current_dir().ok();
    let (config, warnings) = bindigo::logging::with_bootstrap_logging(ctx.err_color, || {
        Config::resolve(cli.config.as_deref(), cwd.as_deref())
    })?;

    let verbose = matches!(&command, Commands::Predict(args) if args.verbose);
    *ctx = UiContext::new(cli.json, verbose, cli.color, &config);
    bindigo::logging::init_logging(ctx.verbose, ctx.err_color, cli.log_file.as_deref())?;
    report_config_warnings(&warnings, ctx)?;

    match command {
        Commands::Predict(args) => commands::predict::cmd_predict(&args, &config, ctx),
        Commands::Info(args) => commands::info::cmd_info(args, ctx),
    }
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> Result<()> {
    if ui.json {
        for w in warnings {
            ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "config_unknown_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }))?;
        }
        return Ok(());
    }

    let mut block = WarningBlock::new("Config warnings");
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let hint = match &w.suggestion {
            Some(s) => format!(" (did you mean '{}'?)", s),
            None => String::new(),
        };
        block.add_line(format!("{}: unknown key '{}'{}", location, w.key, hint));
    }
    if !block.is_empty() {
        eprint!("{}", block.render(ui.err_color, ui.unicode));
    }
    Ok(())
}
