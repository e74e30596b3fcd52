use fake::Dummy;
use fake::faker::internet::en::{IPv4, SafeEmail};
use fake::faker::name::en::{FirstName, LastName};
use serde::Serialize;

/// Column of the email address in a customer row.
pub const EMAIL_FIELD: usize = 2;

/// A row of the customers csv. Only `email` is read back by the importer.
#[derive(Debug, Clone, PartialEq, Serialize, Dummy)]
pub struct Customer {
    #[dummy(faker = "FirstName()")]
    pub first_name: String,
    #[dummy(faker = "LastName()")]
    pub last_name: String,
    #[dummy(faker = "SafeEmail()")]
    pub email: String,
    #[dummy(faker = "IPv4()")]
    pub ip_address: String,
}

/// Returns the part of `email` after the first '@'.
///
/// None if there is no '@', or if the local or domain part would be empty. Everything after the
/// first '@' is kept as-is, so "a@b@c" yields "b@c".
pub fn extract_domain(email: &str) -> Option<&str> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Some(domain),
        _ => None,
    }
}
