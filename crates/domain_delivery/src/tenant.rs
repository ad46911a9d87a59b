//! Tenant branding
//!
//! Each deployment serves one tenant. The tenant code picked in configuration
//! selects the company name, title and colours the front end renders.

use serde::Serialize;

/// Branding for one tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Branding {
    pub tenant: &'static str,
    pub company_name: &'static str,
    pub app_title: &'static str,
    pub primary_color: &'static str,
    pub logo_path: &'static str,
}

pub const DEFAULT_TENANT: &str = "default";

static BRANDINGS: &[Branding] = &[
    Branding {
        tenant: DEFAULT_TENANT,
        company_name: "Nippo",
        app_title: "日報集計",
        primary_color: "#1f6feb",
        logo_path: "/brand/default/logo.svg",
    },
    Branding {
        tenant: "sakura",
        company_name: "さくら運送",
        app_title: "さくら運送 乗務日報",
        primary_color: "#d94f7a",
        logo_path: "/brand/sakura/logo.svg",
    },
    Branding {
        tenant: "kaede",
        company_name: "かえで物流",
        app_title: "かえで物流 配送日報",
        primary_color: "#c2410c",
        logo_path: "/brand/kaede/logo.svg",
    },
];

impl Branding {
    /// Looks up a tenant's branding, falling back to the default tenant
    pub fn for_tenant(code: &str) -> &'static Branding {
        Self::find(code).unwrap_or(&BRANDINGS[0])
    }

    /// Looks up a tenant's branding without fallback
    pub fn find(code: &str) -> Option<&'static Branding> {
        BRANDINGS.iter().find(|b| b.tenant == code)
    }

    /// All configured tenants
    pub fn all() -> &'static [Branding] {
        BRANDINGS
    }
}
