use clap::{Parser, Subcommand};
use log::{debug, info};
use resource_permissions::constants::{DEMO_COMPOSITE, MDL_BOOKMARKS_FOLDER};
use resource_permissions::logging::init_logging;
use resource_permissions::{ActionRegistry, PermissionResolver, RegistryConfig};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML or JSON action table (defaults to the built-in table)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Default log level (RUST_LOG overrides it per target)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the actions a composite permission value grants
    Resolve {
        /// Resource type, fully qualified or a short alias such as bookmarks-folder
        resource_type: String,
        /// Composite permission value
        composite: u64,
    },
    /// Compute the composite permission value for a set of actions
    Encode {
        /// Resource type, fully qualified or a short alias such as bookmarks-folder
        resource_type: String,
        /// Action names to grant
        #[arg(required = true)]
        actions: Vec<String>,
    },
    /// Print the action table
    List {
        /// Only list actions of this resource type
        resource_type: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let registry = match &cli.table {
        Some(path) => {
            info!("Loading action table from: {}", path.display());
            RegistryConfig::from_file(path)?.into_registry()?
        }
        None => ActionRegistry::builtin()?,
    };
    let resolver = PermissionResolver::new(Arc::new(registry));

    match cli.command {
        Some(Commands::Resolve {
            resource_type,
            composite,
        }) => handle_resolve(&resolver, &resource_type, composite, cli.json),
        Some(Commands::Encode {
            resource_type,
            actions,
        }) => handle_encode(&resolver, &resource_type, &actions, cli.json)?,
        Some(Commands::List { resource_type }) => {
            handle_list(&resolver, resource_type.as_deref(), cli.json)?
        }
        None => {
            debug!("No command given, resolving the demo composite");
            handle_resolve(&resolver, MDL_BOOKMARKS_FOLDER, DEMO_COMPOSITE, cli.json)
        }
    }

    Ok(())
}

fn handle_resolve(resolver: &PermissionResolver, resource_type: &str, composite: u64, json: bool) {
    let actions = resolver.find_permitted_actions(resource_type, composite);
    if json {
        println!(
            "{}",
            json!({
                "resource_type": resolver.registry().canonical_resource_type(resource_type),
                "composite": composite,
                "actions": actions,
            })
        );
    } else {
        println!("[{}]", actions.join(", "));
    }
}

fn handle_encode(
    resolver: &PermissionResolver,
    resource_type: &str,
    actions: &[String],
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let composite = resolver.encode_actions(resource_type, actions)?;
    if json {
        println!(
            "{}",
            json!({
                "resource_type": resolver.registry().canonical_resource_type(resource_type),
                "actions": actions,
                "composite": composite,
            })
        );
    } else {
        println!("{}", composite);
    }
    Ok(())
}

fn handle_list(
    resolver: &PermissionResolver,
    resource_type: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = resolver.registry();
    let records: Vec<_> = match resource_type {
        Some(resource_type) => registry
            .records_for_resource_type(resource_type)
            .collect(),
        None => registry.records().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let mut current: Option<&str> = None;
    for record in records {
        if current != Some(record.resource_type.as_str()) {
            println!("{}", record.resource_type);
            current = Some(record.resource_type.as_str());
        }
        println!("  {:<16} {:>4}  (id {})", record.action, record.bit_value, record.id);
    }
    Ok(())
}
