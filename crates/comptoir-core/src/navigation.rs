// Navigation menus per role tier
// Immutable static configuration; ordered groups render as separated sections.

use serde::Serialize;

use crate::user::Role;

/// One entry in a navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

const fn item(name: &'static str, link: &'static str, icon: &'static str) -> NavItem {
    NavItem { name, link, icon }
}

/// Menu for the staff tier.
pub const NAVIGATION_ITEMS: &[&[NavItem]] = &[
    &[item(
        "Stock des Produits",
        "/stock_produit",
        "i-heroicons-square-2-stack",
    )],
    &[
        item(
            "Facturation",
            "/facturation",
            "i-heroicons-document-currency-dollar",
        ),
        item(
            "Liste des factures",
            "/listes-factures",
            "i-heroicons-clipboard-document-list",
        ),
    ],
    &[item("Transfert", "/transfert", "i-heroicons-arrows-right-left")],
    &[item("Logout", "", "i-heroicons-power")],
];

/// Menu for shop administrators.
pub const NAVIGATION_ITEMS_ADMIN: &[&[NavItem]] = &[
    &[
        item("Produits", "/produits", "i-heroicons-squares-plus"),
        item(
            "Stock des Produits",
            "/stock_produit",
            "i-heroicons-square-2-stack",
        ),
    ],
    &[item("Partenaires", "/partenaires", "i-heroicons-user-group")],
    &[
        item(
            "Facturation",
            "/facturation",
            "i-heroicons-document-currency-dollar",
        ),
        item(
            "Liste des factures",
            "/listes-factures",
            "i-heroicons-clipboard-document-list",
        ),
    ],
    &[item("Transfert", "/transfert", "i-heroicons-arrows-right-left")],
    &[item("Logout", "", "i-heroicons-power")],
];

/// Menu for the super-admin tier.
pub const NAVIGATION_ITEMS_SUPERADMIN: &[&[NavItem]] = &[
    &[
        item("Dashboard", "/", "i-heroicons-rectangle-group"),
        item("Produits", "/produits", "i-heroicons-squares-plus"),
        item(
            "Stock des Produits",
            "/stock_produit",
            "i-heroicons-square-2-stack",
        ),
    ],
    &[item("Utilisateurs", "/utilisateurs", "i-heroicons-user")],
    &[item("Partenaires", "/partenaires", "i-heroicons-user-group")],
    &[
        item(
            "Facturation",
            "/facturation",
            "i-heroicons-document-currency-dollar",
        ),
        item(
            "Liste des factures",
            "/listes-factures",
            "i-heroicons-clipboard-document-list",
        ),
    ],
    &[item("Transfert", "/transfert", "i-heroicons-arrows-right-left")],
    &[item("Logout", "", "i-heroicons-power")],
];

/// Menu groups visible to a role tier.
pub fn navigation_for(role: Role) -> &'static [&'static [NavItem]] {
    match role {
        Role::Staff => NAVIGATION_ITEMS,
        Role::Admin => NAVIGATION_ITEMS_ADMIN,
        Role::SuperAdmin => NAVIGATION_ITEMS_SUPERADMIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(menu: &[&[NavItem]]) -> Vec<&'static str> {
        menu.iter().flat_map(|g| g.iter().map(|i| i.link)).collect()
    }

    #[test]
    fn test_staff_menu_has_no_admin_pages() {
        let staff = links(navigation_for(Role::Staff));
        assert!(staff.contains(&"/facturation"));
        assert!(staff.contains(&"/stock_produit"));
        assert!(!staff.contains(&"/produits"));
        assert!(!staff.contains(&"/partenaires"));
        assert!(!staff.contains(&"/utilisateurs"));
    }

    #[test]
    fn test_admin_menu_adds_products_and_partners() {
        let admin = links(navigation_for(Role::Admin));
        assert!(admin.contains(&"/produits"));
        assert!(admin.contains(&"/partenaires"));
        assert!(!admin.contains(&"/utilisateurs"));
    }

    #[test]
    fn test_superadmin_menu_has_everything() {
        let superadmin = links(navigation_for(Role::SuperAdmin));
        for link in ["/", "/produits", "/utilisateurs", "/partenaires", "/transfert"] {
            assert!(superadmin.contains(&link), "missing {link}");
        }
    }

    #[test]
    fn test_every_menu_ends_with_logout() {
        for role in [Role::Staff, Role::Admin, Role::SuperAdmin] {
            let menu = navigation_for(role);
            let last = menu.last().and_then(|g| g.last()).unwrap();
            assert_eq!(last.name, "Logout");
            assert_eq!(last.link, "");
        }
    }
}
