// Product and partner records
// These are flat attribute records rendered by the pages; the only invariant
// is uniqueness of `id` within a fetched collection.

use serde::{Deserialize, Serialize};

/// Product record as served by `/api/produits/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produit {
    pub id: i64,
    pub reference: String,
    pub category: String,
    pub nom: String,
    pub description: String,
    pub quantite: i64,
    pub prix: f64,
    pub actif: bool,
    /// Owning shop id
    pub boutique: i64,
}

/// Partner record as served by `/api/partenaires/`.
///
/// Wire names are the backend's camelCase originals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partenaire {
    pub id: String,
    #[serde(rename = "nomPartenaire")]
    pub nom_partenaire: String,
    #[serde(rename = "prenomPartenaire")]
    pub prenom_partenaire: String,
    pub telephone: i64,
    /// Settlement status of the partner's outstanding debts
    pub status: String,
    pub boutique: bool,
    #[serde(rename = "localisationBoutique")]
    pub localisation_boutique: String,
    #[serde(rename = "dateAdhesion")]
    pub date_adhesion: String,
}
