// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use catalog::FilterSelection;
use clap::{Args, Parser, Subcommand};

use cmd::commands::{
    build::build_command, facets::facets_command, list::list_command, serve::serve_command,
    show::show_command,
};
use cmd::common::{FacetChoice, load_site};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "sacred")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Site config (site.yaml); the built-in config when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the complete static site
    Build {
        /// Output directory for generated files
        output_dir: PathBuf,
    },
    /// Serve the site over HTTP
    Serve {
        /// Address to listen on, overriding the config
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// List landmarks matching the filters
    List(ListArgs),
    /// Show one landmark with all detail sections
    Show {
        /// Landmark id, e.g. notre-dame-cathedral
        id: String,
    },
    /// Print the values offered for a filter facet
    Facets {
        #[arg(value_enum)]
        facet: FacetChoice,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Exact building type
    #[arg(short = 't', long = "type")]
    kind: Option<String>,

    /// Exact country
    #[arg(short, long)]
    country: Option<String>,

    /// Style substring, e.g. Gothic
    #[arg(short, long)]
    style: Option<String>,
}

impl ListArgs {
    fn selection(&self) -> FilterSelection {
        FilterSelection::new()
            .with_type(self.kind.as_deref())
            .with_country(self.country.as_deref())
            .with_style(self.style.as_deref())
    }
}

#[tokio::main]
#[allow(clippy::print_stdout)]
async fn main() -> Result<()> {
    diagnostics::init();

    let cli = Cli::parse();
    let site = load_site(cli.config.as_deref())?;
    let print = |line: String| println!("{line}");

    match cli.command {
        Commands::Build { output_dir } => {
            build_command(&site, &output_dir, print)?;
        }
        Commands::Serve { bind } => {
            serve_command(site, bind.as_deref()).await?;
        }
        Commands::List(args) => {
            list_command(&site, &args.selection(), print)?;
        }
        Commands::Show { id } => {
            show_command(&site, &id, print)?;
        }
        Commands::Facets { facet } => {
            facets_command(&site, facet.into(), print)?;
        }
    }

    Ok(())
}
