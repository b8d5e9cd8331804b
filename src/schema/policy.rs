use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::roles::SchemaRole;

/// Per-role type policy for JSON-LD graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaPolicy {
    /// Allowed Type Matrix. A type outside its role's set is a warning.
    pub allowed: BTreeMap<SchemaRole, BTreeSet<String>>,
    /// Prohibited on every page regardless of role. Always an error.
    pub prohibited: BTreeSet<String>,
    /// Role-specific hard rules. An error even when the matrix allows the type.
    pub forbidden: BTreeMap<SchemaRole, BTreeSet<String>>,
    /// Role-specific soft rules. A warning even when the matrix allows the type.
    pub discouraged: BTreeMap<SchemaRole, BTreeSet<String>>,
    /// Commercial-signal properties stripped by `clean` at any depth.
    pub commercial_keys: BTreeSet<String>,
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SchemaPolicy {
    pub fn v0() -> Self {
        const SHARED: &[&str] = &[
            "WebSite",
            "WebPage",
            "Organization",
            "BreadcrumbList",
            "ImageObject",
            "Person",
        ];

        let with_shared = |extra: &[&str]| {
            let mut s = set(SHARED);
            s.extend(set(extra));
            s
        };

        let conversion = with_shared(&[
            "Service",
            "ProfessionalService",
            "LocalBusiness",
            "Offer",
            "FAQPage",
            "Place",
            "City",
            "PostalAddress",
            "ContactPoint",
        ]);
        let authority = with_shared(&[
            "Article",
            "BlogPosting",
            "TechArticle",
            "HowTo",
            "FAQPage",
            "DefinedTerm",
            "DefinedTermSet",
            "CollectionPage",
        ]);
        let hybrid = with_shared(&[
            "AboutPage",
            "ContactPage",
            "CollectionPage",
            "LocalBusiness",
            "ProfessionalService",
            "Service",
            "FAQPage",
            "Place",
            "PostalAddress",
            "ContactPoint",
        ]);
        let contact = with_shared(&[
            "ContactPage",
            "LocalBusiness",
            "ContactPoint",
            "PostalAddress",
            "Place",
        ]);

        let mut allowed = BTreeMap::new();
        allowed.insert(SchemaRole::Conversion, conversion.clone());
        allowed.insert(SchemaRole::Service, conversion);
        allowed.insert(SchemaRole::Authority, authority);
        allowed.insert(SchemaRole::Hybrid, hybrid.clone());
        allowed.insert(SchemaRole::Homepage, hybrid);
        allowed.insert(SchemaRole::Contact, contact);

        let mut forbidden = BTreeMap::new();
        forbidden.insert(
            SchemaRole::Contact,
            set(&["Service", "FAQPage", "Offer", "Product"]),
        );
        forbidden.insert(SchemaRole::Authority, set(&["Service", "Offer", "Product"]));

        let mut discouraged = BTreeMap::new();
        discouraged.insert(SchemaRole::Homepage, set(&["Service"]));

        Self {
            allowed,
            prohibited: set(&[
                "Product",
                "Review",
                "AggregateRating",
                "Event",
                "JobPosting",
                "Recipe",
            ]),
            forbidden,
            discouraged,
            commercial_keys: set(&["offers", "review", "hasOfferCatalog", "makesOffer"]),
        }
    }

    pub fn is_prohibited(&self, type_name: &str) -> bool {
        self.prohibited.contains(type_name)
    }

    pub fn is_allowed(&self, role: SchemaRole, type_name: &str) -> bool {
        self.allowed
            .get(&role)
            .is_some_and(|types| types.contains(type_name))
    }

    pub fn is_forbidden(&self, role: SchemaRole, type_name: &str) -> bool {
        self.forbidden
            .get(&role)
            .is_some_and(|types| types.contains(type_name))
    }

    pub fn is_discouraged(&self, role: SchemaRole, type_name: &str) -> bool {
        self.discouraged
            .get(&role)
            .is_some_and(|types| types.contains(type_name))
    }

    /// Types removed from nested positions for `role`: prohibited plus the role's hard rules.
    pub fn banned_nested_types(&self, role: SchemaRole) -> BTreeSet<String> {
        let mut banned = self.prohibited.clone();
        if let Some(extra) = self.forbidden.get(&role) {
            banned.extend(extra.iter().cloned());
        }
        banned
    }
}

impl Default for SchemaPolicy {
    fn default() -> Self {
        Self::v0()
    }
}
