//! Records delivered by the users endpoint.

use serde::Deserialize;

/// One user as returned by the API. Never mutated on the client.
///
/// Only the columns the table shows are kept; anything else in the payload
/// (address, company, website) is ignored. Missing string fields decode as
/// empty strings rather than failing the whole response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}
