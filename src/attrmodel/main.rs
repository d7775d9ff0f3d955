use attrmodel::api::{ClassSummary, CmdMessage, MessageLevel, ModelApi};
use attrmodel::config::Settings;
use attrmodel::error::Result;
use attrmodel::logging;
use clap::Parser;
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the command ran but reported failure.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    logging::init(logging::effective_level(cli.verbose, &settings.log_level))?;

    let api = ModelApi::new(settings);

    match cli.command {
        Commands::Classes => handle_classes(&api),
        Commands::Populate {
            handle,
            input,
            set,
            compact,
        } => handle_populate(&api, &handle, input, &set, compact),
        Commands::Validate { handle, input } => handle_validate(&api, &handle, input),
    }
}

fn handle_classes(api: &ModelApi) -> Result<bool> {
    let result = api.classes()?;
    print_classes(&result.classes);
    print_messages(&result.messages);
    Ok(true)
}

fn handle_populate(
    api: &ModelApi,
    handle: &str,
    input: Option<PathBuf>,
    set: &[String],
    compact: bool,
) -> Result<bool> {
    let input = read_input(input.as_deref())?;
    let result = api.populate(handle, &input, set)?;

    let json = result.models_json();
    let output = if compact || !api.settings().pretty {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };
    println!("{}", output);

    print_messages(&result.messages);
    Ok(true)
}

fn handle_validate(api: &ModelApi, handle: &str, input: Option<PathBuf>) -> Result<bool> {
    let input = read_input(input.as_deref())?;
    let result = api.validate(handle, &input)?;
    print_messages(&result.messages);
    Ok(result.all_valid())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_classes(classes: &[ClassSummary]) {
    for (i, class) in classes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let mode = if class.strict { "strict" } else { "loose" };
        println!("{} {}", class.handle.bold(), format!("({})", mode).dimmed());

        for attribute in &class.attributes {
            let mut notes = Vec::new();
            if attribute.required {
                notes.push("required".to_string());
            }
            if let Some(model) = attribute.model {
                notes.push(format!("-> {}", model));
            }
            if let Some(default) = &attribute.default {
                notes.push(format!("default {}", default.to_json()));
            }

            println!(
                "  {:<16} {:<9} {}",
                attribute.name,
                attribute.kind.cyan(),
                notes.join(", ").dimmed()
            );
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
