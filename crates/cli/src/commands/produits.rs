// Product page commands

use anyhow::{Context, Result};
use clap::Subcommand;

use comptoir_client::{ApiClient, NavOutcome, Router};
use comptoir_core::Produit;

use crate::output::{print_table, OutputFormat};

#[derive(Subcommand)]
pub enum ProduitsCommand {
    /// List products
    List,
}

pub async fn run(
    command: ProduitsCommand,
    client: &ApiClient,
    router: &Router,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ProduitsCommand::List => list(client, router, format).await,
    }
}

async fn list(client: &ApiClient, router: &Router, format: OutputFormat) -> Result<()> {
    if router.open("/produits").await != NavOutcome::Moved {
        println!("Redirected to /login");
        return Ok(());
    }

    let produits: Vec<Produit> = client
        .get("/api/produits/")
        .await
        .context("could not load produits")?;

    format.print_value(&produits)?;

    if format.is_text() {
        let rows: Vec<Vec<String>> = produits
            .iter()
            .map(|p| {
                vec![
                    p.id.to_string(),
                    p.reference.clone(),
                    p.nom.clone(),
                    p.quantite.to_string(),
                    p.prix.to_string(),
                    if p.actif { "oui" } else { "non" }.to_string(),
                ]
            })
            .collect();
        print_table(
            &[
                ("ID", 6),
                ("REFERENCE", 12),
                ("NOM", 28),
                ("QTE", 6),
                ("PRIX", 12),
                ("ACTIF", 5),
            ],
            &rows,
        );
    }
    Ok(())
}
