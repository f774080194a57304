//! Read-only role catalog searched by the matcher.
//!
//! The catalog is built once at startup, either from the built-in list or from
//! a JSON file, and shared behind an `Arc` for the rest of the session.

mod error;


pub use error::CatalogError;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named bundle of permission tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Permission identifiers in authoring order, duplicates preserved
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new(id: u32, name: &str, description: &str, permissions: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Accepted on-disk shapes: a bare array or `{ "roles": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Role>),
    Wrapped { roles: Vec<Role> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    roles: Vec<Role>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, duplicate ids and blank names
    pub fn new(roles: Vec<Role>) -> Result<Self, CatalogError> {
        if roles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(roles.len());
        for role in &roles {
            if !seen.insert(role.id) {
                return Err(CatalogError::DuplicateId(role.id));
            }
            if role.name.trim().is_empty() {
                return Err(CatalogError::BlankName { id: role.id });
            }
        }

        Ok(Self { roles })
    }

    pub fn builtin() -> Self {
        Self {
            roles: builtin_roles(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let roles = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::List(roles) => roles,
            CatalogFile::Wrapped { roles } => roles,
        };
        Self::new(roles)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), roles = catalog.len(), "loaded role catalog");
        Ok(catalog)
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_roles() -> Vec<Role> {
    vec![
        Role::new(
            1,
            "Identity User Administrator",
            "Limited management of user access and permissions.",
            &["User.ReadWrite.All", "Group.ReadWrite.All"],
        ),
        Role::new(
            2,
            "Help Desk Administrator",
            "Perform common troubleshooting tasks for users.",
            &["User.Read.All", "Group.Read.All"],
        ),
        Role::new(
            3,
            "Application Manager",
            "Manage applications with specific restrictions.",
            &["Application.ReadWrite.OwnedBy", "Directory.Read.All"],
        ),
        Role::new(
            4,
            "Security Reader",
            "Read security metrics and reports without making changes.",
            &["SecurityEvents.Read.All", "Directory.Read.All"],
        ),
        Role::new(
            5,
            "Compliance Data Administrator",
            "Manage compliance settings in a limited capacity.",
            &["ComplianceData.ReadWrite", "Directory.ReadWrite.All"],
        ),
        Role::new(
            6,
            "Groups Administrator",
            "Create and manage security groups and group settings.",
            &["Group.ReadWrite.All", "Directory.Read.All"],
        ),
        Role::new(
            7,
            "Application Developer",
            "Register applications independent of the user consent setting.",
            &["Application.ReadWrite.OwnedBy"],
        ),
        Role::new(
            8,
            "Password Administrator",
            "Reset passwords for non-administrators and other Password Administrators.",
            &["UserAuthenticationMethod.ReadWrite.All", "User.Read.All"],
        ),
        Role::new(
            9,
            "User Access Administrator",
            "Manage user access to resources through role management.",
            &[
                "RoleManagement.ReadWrite.Directory",
                "SecurityEvents.Read.All",
                "AccessReview.ReadWrite.All",
            ],
        ),
    ]
}
