mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use viewport_audit::audits::Registry;
use viewport_audit::parser::{MetaViewportParser, ViewportContentParser};
use viewport_audit::{check, config, output};

fn main() {
    let cli = Cli::parse();
    let registry = Registry::builtin();

    match cli.command {
        Commands::Check {
            path,
            format,
            output: output_path,
            strict,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            if path.is_dir() && check::collect_files(&path, &["json"]).is_empty() {
                eprintln!(
                    "Error: no artifact files found in '{}' (expected *.json)",
                    path.display()
                );
                std::process::exit(2);
            }

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if strict {
                config.strict.enabled = true;
            }

            let reports = check::check_path(&path, &registry, &config);
            let formatted = output::format_reports(&reports, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            let all_passed = reports.iter().all(|r| r.passed);
            std::process::exit(if all_passed { 0 } else { 1 });
        }

        Commands::ListAudits => {
            println!("{}", "Registered Audits".bold().underline());
            println!();

            for audit in registry.iter() {
                println!(
                    "  {name:<20} {category:<18} {desc}",
                    name = audit.meta.name,
                    category = audit.meta.category,
                    desc = audit.meta.description,
                );
            }

            println!();
            println!("  Total: {} audits", registry.len());
        }

        Commands::Explain { name } => match registry.get(&name) {
            Some(audit) => {
                let meta = &audit.meta;
                println!("{}", meta.name.bold());
                println!();
                println!("  Category:     {}", meta.category);
                println!("  Description:  {}", meta.description);
                println!("  Help:         {}", meta.help_text);
                println!("  Artifacts:    {}", meta.required_artifacts.join(", "));
            }
            None => {
                eprintln!("Unknown audit: {name}");
                eprintln!("Use 'viewport-audit list-audits' to see all available audits.");
                std::process::exit(2);
            }
        },

        Commands::Parse { content } => {
            let parsed = MetaViewportParser.parse(&content);
            let json = serde_json::to_string_pretty(&parsed).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });
            println!("{json}");
        }
    }
}
