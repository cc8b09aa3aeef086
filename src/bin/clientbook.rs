//! Clientbook CLI — command-line consumer of the client store.
//!
//! Shell mode only: `clientbook [flags] COMMAND` runs a single store
//! operation and exits. `--json` prints the same wire bodies the JSON API
//! consumer would serve; the default output is human-readable.

use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use clientbook::wire::{error_body, ClientBody, ListBody};
use clientbook::{Client, ClientDraft, ClientStore, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

fn build_cli() -> Command {
    let draft_args = [
        Arg::new("name")
            .long("name")
            .value_name("FULL_NAME")
            .help("Client full name")
            .default_value(""),
        Arg::new("email")
            .long("email")
            .value_name("EMAIL")
            .help("Client email address")
            .default_value(""),
        Arg::new("risk")
            .long("risk")
            .value_name("CATEGORY")
            .help("Risk category: Low, Medium, or High (any casing)")
            .default_value(""),
    ];

    Command::new("clientbook")
        .about("File-backed client record store")
        .arg_required_else_help(true)
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .help("Path to the client document")
                .default_value("clients.json"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit JSON wire bodies instead of human output"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("list").about("List all clients"))
        .subcommand(
            Command::new("get")
                .about("Show one client")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("create")
                .about("Create a client")
                .args(draft_args.clone()),
        )
        .subcommand(
            Command::new("update")
                .about("Update a client's fields")
                .arg(Arg::new("id").required(true))
                .args(draft_args),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a client")
                .arg(Arg::new("id").required(true)),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("verbose") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let path = matches
        .get_one::<String>("db")
        .map(|s| s.as_str())
        .unwrap_or("clients.json");

    let store = match ClientStore::open(path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open client store: {}", e);
            process::exit(1);
        }
    };

    process::exit(run_command(&matches, &store, mode));
}

fn run_command(matches: &ArgMatches, store: &ClientStore, mode: OutputMode) -> i32 {
    let result = match matches.subcommand() {
        Some(("list", _)) => {
            let clients = store.list();
            print_list(clients, mode);
            return 0;
        }
        Some(("get", sub)) => store.get(required_id(sub)).map(Some),
        Some(("create", sub)) => store.create(draft_from(sub)).map(Some),
        Some(("update", sub)) => store.update(required_id(sub), draft_from(sub)).map(Some),
        Some(("delete", sub)) => store.delete(required_id(sub)).map(|()| None),
        _ => {
            eprintln!("No command provided");
            return 1;
        }
    };

    match result {
        Ok(Some(client)) => {
            print_client(client, mode);
            0
        }
        Ok(None) => {
            if mode == OutputMode::Human {
                println!("OK");
            }
            0
        }
        Err(e) => {
            print_error(&e, mode);
            1
        }
    }
}

fn required_id(matches: &ArgMatches) -> &str {
    // `id` is a required positional on every subcommand that calls this.
    matches
        .get_one::<String>("id")
        .map(|s| s.as_str())
        .unwrap_or_default()
}

fn draft_from(matches: &ArgMatches) -> ClientDraft {
    let field = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };
    ClientDraft::new(field("name"), field("email"), field("risk"))
}

fn print_list(clients: Vec<Client>, mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            let body = ListBody::new(clients);
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        }
        OutputMode::Human => {
            println!("{:<6} {:<24} {:<28} {:<8} {}", "ID", "NAME", "EMAIL", "RISK", "CREATED");
            for c in clients {
                println!(
                    "{:<6} {:<24} {:<28} {:<8} {}",
                    c.id, c.full_name, c.email, c.risk_category, c.created_date
                );
            }
        }
    }
}

fn print_client(client: Client, mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            let body = ClientBody::new(client);
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        }
        OutputMode::Human => {
            println!("id:           {}", client.id);
            println!("fullName:     {}", client.full_name);
            println!("email:        {}", client.email);
            println!("riskCategory: {}", client.risk_category);
            println!("createdDate:  {}", client.created_date);
        }
    }
}

fn print_error(error: &Error, mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            let (status, body) = error_body(error);
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "status": status,
                    "body": body,
                }))
                .unwrap_or_default()
            );
        }
        OutputMode::Human => eprintln!("{}", error),
    }
}
