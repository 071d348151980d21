use clap::Parser;
use house_admin::cli::commands::config::ConfigCommands;
use house_admin::cli::commands::sections::SectionsCommands;
use house_admin::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_sections_list() {
    let cli = Cli::try_parse_from(["house-admin", "sections", "list", "house-1"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Sections(args) => match args.command {
            SectionsCommands::List { house_id } => assert_eq!(house_id, "house-1"),
            _ => panic!("Wrong sections command"),
        },
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_sections_watch_with_duration() {
    let cli = Cli::try_parse_from([
        "house-admin",
        "sections",
        "watch",
        "house-1",
        "--for",
        "30",
    ])
    .unwrap();

    match cli.command {
        Commands::Sections(args) => match args.command {
            SectionsCommands::Watch {
                house_id,
                duration_secs,
            } => {
                assert_eq!(house_id, "house-1");
                assert_eq!(duration_secs, Some(30));
            }
            _ => panic!("Wrong sections command"),
        },
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_sections_watch_without_duration() {
    let cli = Cli::try_parse_from(["house-admin", "sections", "watch", "house-1"]).unwrap();

    match cli.command {
        Commands::Sections(args) => {
            assert!(matches!(
                args.command,
                SectionsCommands::Watch {
                    duration_secs: None,
                    ..
                }
            ));
        }
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_sections_delete_with_global_flags() {
    let cli = Cli::try_parse_from([
        "house-admin",
        "sections",
        "delete",
        "house-1",
        "s7",
        "--json",
        "--config",
        "/tmp/house.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/house.yaml")));
    match cli.command {
        Commands::Sections(args) => match args.command {
            SectionsCommands::Delete {
                house_id,
                section_id,
            } => {
                assert_eq!(house_id, "house-1");
                assert_eq!(section_id, "s7");
            }
            _ => panic!("Wrong sections command"),
        },
        Commands::Config(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_config_show() {
    let cli = Cli::try_parse_from(["house-admin", "config", "show"]).unwrap();

    match cli.command {
        Commands::Config(args) => assert!(matches!(args.command, ConfigCommands::Show)),
        Commands::Sections(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_delete_requires_section_id() {
    let result = Cli::try_parse_from(["house-admin", "sections", "delete", "house-1"]);
    assert!(result.is_err());
}

#[test]
fn test_watch_rejects_non_numeric_duration() {
    let result = Cli::try_parse_from([
        "house-admin",
        "sections",
        "watch",
        "house-1",
        "--for",
        "soon",
    ]);
    assert!(result.is_err());
}
