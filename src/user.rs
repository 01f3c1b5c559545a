//! User record - the resolution context for template substitution
//!
//! This module provides the record a template is resolved against: a fixed
//! set of well-known identity properties plus an open-ended map of named,
//! multi-valued attributes. Records can be built programmatically or loaded
//! from a TOML file with `[properties]` and `[attributes]` tables.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a user record from a file
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Failed to read user file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse user TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// An identity record: well-known properties plus arbitrary attributes.
///
/// Every field may be absent. Attribute values are ordered; placeholder
/// substitution uses the first value, the raw-name pass may use all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub federation_link: Option<String>,
    pub service_account_client_link: Option<String>,
    /// Attribute name -> ordered values
    pub attributes: HashMap<String, Vec<String>>,
}

/// TOML structure for deserializing user records
#[derive(Deserialize, Default)]
struct TomlUser {
    properties: Option<TomlProperties>,
    attributes: Option<HashMap<String, Vec<String>>>,
}

/// Property keys use the same camelCase names as the placeholders.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TomlProperties {
    id: Option<String>,
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    federation_link: Option<String>,
    service_account_client_link: Option<String>,
}

impl UserRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a user record from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, UserError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a user record from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, UserError> {
        let parsed: TomlUser = toml::from_str(content)?;
        let props = parsed.properties.unwrap_or_default();

        Ok(UserRecord {
            id: props.id,
            username: props.username,
            email: props.email,
            first_name: props.first_name,
            last_name: props.last_name,
            federation_link: props.federation_link,
            service_account_client_link: props.service_account_client_link,
            attributes: parsed.attributes.unwrap_or_default(),
        })
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the federation link
    pub fn with_federation_link(mut self, link: impl Into<String>) -> Self {
        self.federation_link = Some(link.into());
        self
    }

    /// Set the service account client link
    pub fn with_service_account_client_link(mut self, link: impl Into<String>) -> Self {
        self.service_account_client_link = Some(link.into());
        self
    }

    /// Add an attribute with its ordered values
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attributes
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Raw-name attribute lookup.
    ///
    /// Returns all values of the attribute when `aggregate` is set, otherwise
    /// only the first. An absent attribute yields an empty collection.
    pub fn resolve_attribute(&self, name: &str, aggregate: bool) -> Vec<String> {
        match self.attributes.get(name) {
            Some(values) if aggregate => values.clone(),
            Some(values) => values.first().cloned().into_iter().collect(),
            None => Vec::new(),
        }
    }
}
