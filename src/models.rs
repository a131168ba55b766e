use serde::{Deserialize, Serialize};

/// Postal address of a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Employer of a user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Business summary
    pub bs: String,
}

/// A user record as served by `GET /users`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl User {
    /// Street and city joined the way the list and detail views show them
    pub fn address_line(&self) -> String {
        format!("{} {}", self.address.street, self.address.city)
    }
}

#[cfg(test)]
pub(crate) fn sample_user(n: usize) -> User {
    User {
        name: format!("User {}", n),
        username: format!("user{}", n),
        email: format!("user{}@example.com", n),
        phone: format!("555-010{}", n),
        website: format!("user{}.example.com", n),
        address: Address {
            street: format!("{} Main St", n),
            city: String::from("Springfield"),
        },
        company: Company {
            name: format!("Company {}", n),
            catch_phrase: String::from("Synergize everything"),
            bs: String::from("e-enable markets"),
        },
    }
}
