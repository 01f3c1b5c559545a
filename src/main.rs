//! Attrweave CLI
//!
//! Usage:
//!   attrweave [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -u, --user <FILE>     User record (TOML format)
//!   -a, --aggregate       Raw-name pass takes all attribute values
//!   -r, --resolved-only   Print only the substitution result
//!   -s, --syntax          Show template syntax reference
//!   -h, --help            Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use attrweave::{combine, resolve, CombineConfig, UserRecord};

#[derive(Parser)]
#[command(name = "attrweave")]
#[command(about = "Combine user properties, attributes, and text into attribute values")]
struct Cli {
    /// Template string (reads from stdin if not provided)
    template: Option<String>,

    /// User record file (TOML format)
    #[arg(short, long)]
    user: Option<PathBuf>,

    /// Raw-name pass takes all values of a matching attribute, not just the first
    #[arg(short, long)]
    aggregate: bool,

    /// Print only the placeholder-substitution result, skipping the raw-name pass
    #[arg(short, long)]
    resolved_only: bool,

    /// Show template syntax reference
    #[arg(short, long)]
    syntax: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.syntax {
        print_syntax();
        return;
    }

    // If no template and stdin is a terminal (interactive), show intro help
    if cli.template.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load user record
    let user = match &cli.user {
        Some(path) => match UserRecord::from_file(path) {
            Ok(u) => u,
            Err(e) => {
                eprintln!("Error loading user file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => UserRecord::new(),
    };

    // Read template
    let template = match cli.template {
        Some(t) => t,
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.resolved_only {
        println!("{}", resolve(&template, &user));
        return;
    }

    let config = CombineConfig::new().with_aggregate(cli.aggregate);
    for value in combine(&template, &user, &config) {
        println!("{}", value);
    }
}

fn print_intro() {
    println!(
        r#"Attrweave - combine user properties, attributes, and text

USAGE:
    attrweave [OPTIONS] [TEMPLATE]
    echo '<template>' | attrweave --user user.toml

OPTIONS:
    -u, --user <FILE>     User record (TOML format)
    -a, --aggregate       Raw-name pass takes all attribute values
    -r, --resolved-only   Print only the substitution result
    -s, --syntax          Show template syntax reference
    -h, --help            Print help

QUICK START:
    attrweave --user alice.toml 'user:`username`'

This resolves the `username` placeholder from alice.toml and prints each
output value on its own line. Run --syntax for the template syntax."#
    );
}

fn print_syntax() {
    println!(
        r#"ATTRWEAVE TEMPLATE SYNTAX
=========================

Combine any text with user properties (email, federationLink, firstName,
id, lastName, serviceAccountClientLink, or username) and/or custom user
attributes. Properties or attributes must be surrounded with backticks (`).
To escape a backtick, use a backslash (\). If a property or attribute does
not exist, the placeholder name itself is used.

Example:
    `username`-last:\``lastName`\`_`customAttribName`

With username=alice, lastName=Smith, customAttribName=42 this resolves to:
    alice-last:`Smith`_42

RESOLUTION ORDER
----------------
1. Well-known property (case-sensitive name match); absent values
   substitute as empty.
2. First value of the user attribute with that name.
3. The placeholder name itself (unknown placeholders stay visible).

OUTPUT VALUES
-------------
Two passes contribute to the printed collection:
1. The whole, unparsed template string is looked up as an attribute name
   (all values with --aggregate, otherwise only the first).
2. The placeholder-substitution result is appended as the final value.

USER FILE (TOML)
----------------
[properties]
username = "alice"
lastName = "Smith"

[attributes]
customAttribName = ["42"]
groups = ["admins", "users"]"#
    );
}
