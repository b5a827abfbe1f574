//! Contacts command-line client.
//!
//! Provides the `contacts` binary with subcommands mirroring the API:
//! `list`, `get`, `create`, `update`, `delete`, and `ping`. The server is
//! selected with `--api-url` or `CONTACTS_API_URL`.

use std::process;

use clap::{Args, Parser, Subcommand};
use contacts_cli::client::DEFAULT_API_URL;
use contacts_cli::render::{contact_line, contact_table};
use contacts_cli::{ClientError, ContactFields, ContactView, ContactsClient};
use contacts_store::ContactId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Manage contacts on a contacts API server.
#[derive(Debug, Parser)]
#[command(name = "contacts", about = "Manage contacts on a contacts API server")]
struct Cli {
    /// Base URL of the API server.
    #[arg(long, env = "CONTACTS_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Print raw JSON instead of tab-separated text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Check that the server is reachable.
    Ping,

    /// List all contacts.
    List,

    /// Show one contact.
    Get { id: u64 },

    /// Create a contact. All fields are required.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },

    /// Update the given fields of a contact.
    Update {
        id: u64,
        #[command(flatten)]
        fields: UpdateFields,
    },

    /// Delete a contact.
    Delete {
        id: u64,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct UpdateFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = ContactsClient::new(&cli.api_url);

    if let Err(err) = run(&client, cli.command, cli.json).await {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

async fn run(client: &ContactsClient, command: Commands, json: bool) -> Result<(), ClientError> {
    match command {
        Commands::Ping => {
            let message = client.welcome().await?;
            println!("{}: {message}", client.base_url());
        }
        Commands::List => {
            let contacts = client.list().await?;
            if json {
                print_json(&contacts);
            } else {
                println!("{}", contact_table(&contacts));
            }
        }
        Commands::Get { id } => {
            let contact = client.get(ContactId(id)).await?;
            print_contact(&contact, json);
        }
        Commands::Create { name, email, phone } => {
            let fields = ContactFields {
                name: Some(name),
                email: Some(email),
                phone: Some(phone),
            };
            let contact = client.create(&fields).await?;
            print_contact(&contact, json);
        }
        Commands::Update { id, fields } => {
            let fields = ContactFields {
                name: fields.name,
                email: fields.email,
                phone: fields.phone,
            };
            let contact = client.update(ContactId(id), &fields).await?;
            print_contact(&contact, json);
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this contact?").await? {
                println!("Aborted.");
                return Ok(());
            }
            let message = client.delete(ContactId(id)).await?;
            println!("{message}");
        }
    }
    Ok(())
}

fn print_contact(contact: &ContactView, json: bool) {
    if json {
        print_json(contact);
    } else {
        println!("{}", contact_line(contact));
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("error: failed to encode output: {err}"),
    }
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
async fn confirm(question: &str) -> Result<bool, ClientError> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{question} [y/N] ").as_bytes())
        .await?;
    stdout.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_every_field() {
        let err = Cli::try_parse_from(["contacts", "create", "--name", "A", "--email", "a@b.c"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn update_fields_are_optional() {
        let cli = Cli::try_parse_from(["contacts", "update", "3", "--name", "Jane"]).unwrap();
        match cli.command {
            Commands::Update { id, fields } => {
                assert_eq!(id, 3);
                assert_eq!(fields.name.as_deref(), Some("Jane"));
                assert!(fields.email.is_none());
                assert!(fields.phone.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["contacts", "get", "abc"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "contacts",
            "delete",
            "1",
            "--yes",
            "--api-url",
            "http://example.test",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.api_url, "http://example.test");
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Delete { id: 1, yes: true }));
    }
}
