//! User domain model
//!
//! Mirrors the record shape served by the user directory API. Nested
//! sections and contact fields fall back to empty strings when the payload
//! omits them; `id`, `name` and `email` are required.

use serde::{Deserialize, Serialize};

/// A directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Company,
}

/// Postal address of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

/// Employer of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: Address::default(),
            phone: String::new(),
            company: Company::default(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn with_company(mut self, company: Company) -> Self {
        self.company = company;
        self
    }
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        suite: impl Into<String>,
        city: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            suite: suite.into(),
            city: city.into(),
            zipcode: zipcode.into(),
        }
    }

    /// "street, suite" line of the detail panel
    pub fn street_line(&self) -> String {
        join_non_empty(&[&self.street, &self.suite])
    }

    /// "city, zipcode" line of the detail panel
    pub fn city_line(&self) -> String {
        join_non_empty(&[&self.city, &self.zipcode])
    }
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        catch_phrase: impl Into<String>,
        bs: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            catch_phrase: catch_phrase.into(),
            bs: bs.into(),
        }
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
