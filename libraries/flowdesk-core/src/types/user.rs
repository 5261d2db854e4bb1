/// User domain types
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A directory user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Full display name
    pub name: String,

    /// Login handle
    pub username: String,

    pub email: String,

    pub phone: String,

    /// Homepage URL
    pub website: String,

    /// Postal address (empty when the directory omits it)
    #[serde(default)]
    pub address: Address,

    /// Employer (empty when the directory omits it)
    #[serde(default)]
    pub company: Company,
}

/// Postal address of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Geographic coordinates, kept as the directory's decimal strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Company a user works for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// Editable subset of a user, submitted on create
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserData {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Partial form of [`CreateUserData`], submitted on update
///
/// Absent fields are left out of the request body entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Field-level changes to a user record
///
/// This is what the directory echoes back from an update: any subset of the
/// user's fields. Applying it overwrites exactly the fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl User {
    /// Build a record from submitted form data
    ///
    /// Address and company start out empty.
    pub fn from_submission(id: UserId, data: CreateUserData) -> Self {
        Self {
            id,
            name: data.name,
            username: data.username,
            email: data.email,
            phone: data.phone,
            website: data.website,
            address: Address::default(),
            company: Company::default(),
        }
    }

    /// Shallow-merge `changes` over this record. The id never changes.
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(username) = &changes.username {
            self.username.clone_from(username);
        }
        if let Some(email) = &changes.email {
            self.email.clone_from(email);
        }
        if let Some(phone) = &changes.phone {
            self.phone.clone_from(phone);
        }
        if let Some(website) = &changes.website {
            self.website.clone_from(website);
        }
        if let Some(address) = &changes.address {
            self.address.clone_from(address);
        }
        if let Some(company) = &changes.company {
            self.company.clone_from(company);
        }
    }

    /// Case-insensitive substring match on name, email or username.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.username.to_lowercase().contains(needle)
    }
}

impl From<&User> for CreateUserData {
    /// Pre-fill an edit form from an existing record
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
        }
    }
}

impl From<CreateUserData> for UserPatch {
    fn from(data: CreateUserData) -> Self {
        Self {
            name: Some(data.name),
            username: Some(data.username),
            email: Some(data.email),
            phone: Some(data.phone),
            website: Some(data.website),
        }
    }
}

impl From<&UserPatch> for UserChanges {
    fn from(patch: &UserPatch) -> Self {
        Self {
            name: patch.name.clone(),
            username: patch.username.clone(),
            email: patch.email.clone(),
            phone: patch.phone.clone(),
            website: patch.website.clone(),
            address: None,
            company: None,
        }
    }
}

impl UserPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.website.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leanne() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_directory_record() {
        let user = leanne();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn missing_address_and_company_default_to_empty() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 11,
            "name": "Bob",
            "username": "bobby",
            "email": "bob@example.com",
            "phone": "555",
            "website": "https://bob.dev"
        }))
        .unwrap();

        assert_eq!(user.address, Address::default());
        assert_eq!(user.company, Company::default());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut user = leanne();
        let before = user.clone();

        user.apply(&UserChanges {
            email: Some("new@x.com".to_string()),
            ..UserChanges::default()
        });

        assert_eq!(user.email, "new@x.com");
        assert_eq!(user.name, before.name);
        assert_eq!(user.address, before.address);
        assert_eq!(user.company, before.company);
        assert_eq!(user.id, before.id);
    }

    #[test]
    fn patch_skips_absent_fields_when_serialized() {
        let patch = UserPatch {
            email: Some("new@x.com".to_string()),
            ..UserPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "new@x.com" }));
    }

    #[test]
    fn form_prefill_copies_editable_fields() {
        let user = leanne();
        let form = CreateUserData::from(&user);
        assert_eq!(form.name, "Leanne Graham");
        assert_eq!(form.username, "Bret");
        assert_eq!(form.website, "hildegard.org");
    }

    #[test]
    fn matches_any_of_name_email_username() {
        let user = leanne();
        assert!(user.matches_lowercase("leanne"));
        assert!(user.matches_lowercase("april.biz"));
        assert!(user.matches_lowercase("bret"));
        assert!(!user.matches_lowercase("gwenborough"));
    }
}
