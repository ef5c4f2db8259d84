use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use syllabus_catalog::{ClassRecord, MemorySource, TimeSlot};
use syllabus_site::{detail_page, History, ListingPage, SiteConfig};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("syllabus")
        .version(syllabus_site::VERSION)
        .about("Browse and filter the class catalog")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a TOML config file"),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Class snapshot JSON (overrides the config)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(Command::new("options").about("List selectable periods and tags"))
        .subcommand(
            Command::new("list")
                .about("List classes visible at a listing URL")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .help("Listing URL, e.g. '/class#filter=月-1&tags=語学'"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Build a shareable listing URL for a selection")
                .arg(
                    Arg::new("slot")
                        .long("slot")
                        .value_parser(clap::value_parser!(TimeSlot))
                        .help("Period as <day>-<time>, e.g. 月-1"),
                )
                .arg(
                    Arg::new("tags")
                        .long("tags")
                        .value_delimiter(',')
                        .help("Comma-separated tags"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show a class detail page")
                .arg(Arg::new("id").required(true).help("Class id")),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<SiteConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::new(),
    };
    if let Some(snapshot) = matches.get_one::<PathBuf>("snapshot") {
        config = config.with_snapshot_path(snapshot);
    }
    Ok(config)
}

fn init_tracing(config: &SiteConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_source(config: &SiteConfig) -> anyhow::Result<MemorySource> {
    let Some(path) = config.snapshot_path.as_ref() else {
        bail!("no class snapshot configured; pass --snapshot or set snapshot_path");
    };
    Ok(MemorySource::from_json_file(path)?)
}

fn print_records(records: &[&ClassRecord]) {
    for record in records {
        println!(
            "{}\t{}\t{}\t{}",
            record.id,
            record.slot().label(),
            record.title,
            record.tags.join(",")
        );
    }
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    init_tracing(&config);

    let json = matches.get_flag("json");
    let source = open_source(&config)?;

    match matches.subcommand() {
        Some(("options", _)) => {
            let url = config.listing_path.clone();
            let page = ListingPage::from_source(&source, &url, History::new(&url))?;
            if json {
                let out = serde_json::json!({
                    "slots": page.slot_options(),
                    "tags": page.tag_options(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for option in page.slot_options() {
                    println!("slot\t{}\t{}", option.value, option.label);
                }
                for option in page.tag_options() {
                    println!("tag\t{}", option.label);
                }
            }
        }
        Some(("list", args)) => {
            let url = args
                .get_one::<String>("url")
                .cloned()
                .unwrap_or_else(|| config.listing_path.clone());
            let mut page = ListingPage::from_source(&source, &url, History::new(&url))?;
            let state = page.state().clone();
            let visible = page.visible();
            if json {
                let out = serde_json::json!({
                    "filter": state,
                    "classes": visible,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_records(&visible);
            }
        }
        Some(("encode", args)) => {
            let url = config.listing_path.clone();
            let mut page = ListingPage::from_source(&source, &url, History::new(&url))?;
            if let Some(slot) = args.get_one::<TimeSlot>("slot") {
                page.select_slot(slot.clone());
            }
            if let Some(tags) = args.get_many::<String>("tags") {
                page.select_tags(tags.cloned());
            }
            let shared = page.writer().current().to_string();
            if json {
                let out = serde_json::json!({
                    "url": shared,
                    "filter": page.state(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{shared}");
            }
        }
        Some(("show", args)) => {
            let Some(id) = args.get_one::<String>("id") else {
                bail!("class id is required");
            };
            let page = detail_page(&source, id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                println!("{}", page.head_title);
                println!("{}", page.slot_label);
                println!("担当教員: {}", page.teachers);
                println!("教科書: {}", page.textbook);
                if let Some(comment) = &page.comment {
                    println!("{comment}");
                }
                for reaction in &page.reactions {
                    println!("- {reaction}");
                }
            }
        }
        _ => bail!("unknown command"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn encode_args_parse() {
        let matches = cli()
            .try_get_matches_from(["syllabus", "encode", "--slot", "月-1", "--tags", "A,B"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(
            args.get_one::<TimeSlot>("slot"),
            Some(&TimeSlot::new("月", 1))
        );
        let tags: Vec<&String> = args.get_many::<String>("tags").unwrap().collect();
        assert_eq!(tags, vec!["A", "B"]);
    }

    #[test]
    fn bad_slot_is_rejected() {
        assert!(cli()
            .try_get_matches_from(["syllabus", "encode", "--slot", "monday"])
            .is_err());
    }
}
