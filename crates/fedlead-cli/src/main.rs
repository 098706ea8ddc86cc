use clap::{Parser, Subcommand};
use fedlead_core::SearchCriteria;
use fedlead_refdata::ReferenceStore;
use fedlead_resolve::{resolve_enrichment, suggest_contractors, MatchCriteria, Normalizer};
use fedlead_search::{search_contracts, SpendingClient};

mod display;

#[derive(Parser)]
#[command(name = "fedlead", version, about = "Federal contracting lead finder")]
struct Cli {
    /// Base URL of the federal spending API.
    #[arg(long, env = "FEDLEAD_API_URL", default_value = "https://api.usaspending.gov")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search recent contract awards and rank contracting offices.
    Search {
        /// NAICS industry code.
        #[arg(long)]
        naics: Option<String>,
        /// Product service code, bridged to NAICS when no code is given.
        #[arg(long)]
        psc: Option<String>,
        /// Set-aside type code, e.g. 8A or WOSB.
        #[arg(long)]
        set_aside: Option<String>,
        /// Place-of-performance ZIP code.
        #[arg(long)]
        zip: Option<String>,
        /// Place-of-performance state code, e.g. CA.
        #[arg(long)]
        state: Option<String>,
        /// How many months of awards to cover.
        #[arg(long)]
        months: Option<u32>,
    },
    /// Resolve enrichment for one contracting office by name.
    Resolve {
        /// Raw office name as the award data reports it.
        office: String,
        /// Office code, e.g. N68711.
        #[arg(long)]
        code: Option<String>,
        /// Awarding sub-agency name.
        #[arg(long, default_value = "")]
        sub_agency: String,
        /// Awarding parent agency name.
        #[arg(long, default_value = "")]
        agency: String,
    },
    /// Suggest teaming partners for a capability profile.
    Contractors {
        #[arg(long)]
        naics: Option<String>,
        #[arg(long)]
        psc: Option<String>,
        /// Target agency or command name.
        #[arg(long)]
        agency: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("fedlead v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();
    let store = ReferenceStore::new();

    match cli.command {
        Command::Search {
            naics,
            psc,
            set_aside,
            zip,
            state,
            months,
        } => {
            let criteria = SearchCriteria {
                naics_code: naics,
                psc_code: psc,
                set_aside_code: set_aside,
                zip_code: zip,
                state,
                months_back: months,
                set_aside_filtered: false,
            };
            let client = SpendingClient::new(cli.api_url);
            let report = search_contracts(&client, &store, &criteria).await?;
            display::print_search_report(&report);
        }
        Command::Resolve {
            office,
            code,
            sub_agency,
            agency,
        } => {
            let normalizer = Normalizer::new(&store);
            let normalized = normalizer.normalize(&office, code.as_deref());
            let detected = store
                .detect_command_token(&normalized)
                .map(|info| info.abbreviation.clone());
            let result = resolve_enrichment(
                &store,
                &normalized,
                &sub_agency,
                &agency,
                detected.as_deref(),
            );
            display::print_enrichment_card(&normalized, &result);
        }
        Command::Contractors { naics, psc, agency } => {
            let criteria = MatchCriteria {
                naics_code: naics.as_deref(),
                psc_code: psc.as_deref(),
                agency: agency.as_deref(),
                pain_points: &[],
            };
            let matches = suggest_contractors(&store, &criteria);
            display::print_contractor_list(&matches);
        }
    }

    Ok(())
}
