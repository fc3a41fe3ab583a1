// Partner page commands

use anyhow::{Context, Result};
use clap::Subcommand;

use comptoir_client::{ApiClient, NavOutcome, Router};
use comptoir_core::Partenaire;

use crate::output::{print_table, OutputFormat};

#[derive(Subcommand)]
pub enum PartenairesCommand {
    /// List partners
    List,
}

pub async fn run(
    command: PartenairesCommand,
    client: &ApiClient,
    router: &Router,
    format: OutputFormat,
) -> Result<()> {
    match command {
        PartenairesCommand::List => list(client, router, format).await,
    }
}

async fn list(client: &ApiClient, router: &Router, format: OutputFormat) -> Result<()> {
    if router.open("/partenaires").await != NavOutcome::Moved {
        println!("Redirected to /login");
        return Ok(());
    }

    let partenaires: Vec<Partenaire> = client
        .get("/api/partenaires/")
        .await
        .context("could not load partenaires")?;

    format.print_value(&partenaires)?;

    if format.is_text() {
        let rows: Vec<Vec<String>> = partenaires
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.nom_partenaire.clone(),
                    p.prenom_partenaire.clone(),
                    p.telephone.to_string(),
                    p.status.clone(),
                    p.localisation_boutique.clone(),
                ]
            })
            .collect();
        print_table(
            &[
                ("ID", 8),
                ("NOM", 16),
                ("PRENOM", 16),
                ("TELEPHONE", 12),
                ("STATUS", 10),
                ("LOCALISATION", 18),
            ],
            &rows,
        );
    }
    Ok(())
}
