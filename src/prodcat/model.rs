use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_type!(
    /// Identifies a [`User`].
    UserId
);
id_type!(
    /// Identifies a [`Category`].
    CategoryId
);
id_type!(
    /// Identifies a [`Product`].
    ProductId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id: UserId(id),
            name: name.into(),
            sex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }

    /// The `"{icon} - {title}"` label shown in the category column.
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category_id: CategoryId(category_id),
        }
    }
}
