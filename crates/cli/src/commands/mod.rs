pub mod auth;
pub mod navigate;
pub mod partenaires;
pub mod produits;
