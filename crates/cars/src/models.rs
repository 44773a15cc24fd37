use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::StoreError;

/// Primary key of a car row.
///
/// Catalog records carry numeric ids while the table is keyed by text, so the
/// conversion goes through this type: `CarKey::from(7)` is the key `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarKey(String);

impl CarKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for CarKey {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CarKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for CarKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl fmt::Display for CarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declares a text-backed enum: stored by its display name, parsed back on read.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(StoreError::InvalidValue(format!(
                        "unknown {}: {other}",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = StoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

text_enum!(
    /// Listing status of a car.
    CarStatus {
        Available => "AVAILABLE",
        Unavailable => "UNAVAILABLE",
        Sold => "SOLD",
    }
);

impl Default for CarStatus {
    fn default() -> Self {
        CarStatus::Available
    }
}

text_enum!(
    /// Fuel the car runs on.
    FuelType {
        Petrol => "Petrol",
        Diesel => "Diesel",
        Electric => "Electric",
        Hybrid => "Hybrid",
        PlugInHybrid => "Plug-in Hybrid",
    }
);

text_enum!(
    /// Gearbox type.
    Transmission {
        Automatic => "Automatic",
        Manual => "Manual",
        SemiAutomatic => "Semi-Automatic",
    }
);

text_enum!(
    /// Body style shown in the catalog filters.
    BodyType {
        Suv => "SUV",
        Sedan => "Sedan",
        Hatchback => "Hatchback",
        Convertible => "Convertible",
        Coupe => "Coupe",
        Wagon => "Wagon",
        Pickup => "Pickup",
    }
);

/// Descriptive fields shared by the create and update halves of an upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetails {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i32,
    pub color: String,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub body_type: BodyType,
    pub images: Vec<String>,
}

/// Field set written when a car is inserted for the first time.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDraft {
    pub details: CarDetails,
    pub description: String,
    pub status: CarStatus,
    pub featured: bool,
}

impl CarDraft {
    /// A featured draft with an empty description and `AVAILABLE` status.
    pub fn featured(details: CarDetails) -> Self {
        Self {
            details,
            description: String::new(),
            status: CarStatus::Available,
            featured: true,
        }
    }
}

/// Field set written when the car already exists.
///
/// There is deliberately no `description` or `status` here: once a row is
/// created those two columns are only ever changed outside the seeder. Whether
/// that is meant to protect edits made in the app or is an omission has never
/// been settled, so the behavior is kept as is.
#[derive(Debug, Clone, PartialEq)]
pub struct CarUpdate {
    pub details: CarDetails,
    pub featured: bool,
}

impl CarUpdate {
    pub fn featured(details: CarDetails) -> Self {
        Self {
            details,
            featured: true,
        }
    }
}

/// A row of the `"Car"` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub mileage: i32,
    pub color: String,
    #[sqlx(try_from = "String")]
    pub fuel_type: FuelType,
    #[sqlx(try_from = "String")]
    pub transmission: Transmission,
    #[sqlx(try_from = "String")]
    pub body_type: BodyType,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: CarStatus,
    pub featured: bool,
    pub images: Vec<String>,
}

impl Car {
    /// Builds a fresh row from a draft.
    pub fn from_draft(key: &CarKey, draft: &CarDraft) -> Self {
        let d = &draft.details;
        Self {
            id: key.as_str().to_string(),
            make: d.make.clone(),
            model: d.model.clone(),
            year: d.year,
            price: d.price,
            mileage: d.mileage,
            color: d.color.clone(),
            fuel_type: d.fuel_type,
            transmission: d.transmission,
            body_type: d.body_type,
            description: draft.description.clone(),
            status: draft.status,
            featured: draft.featured,
            images: d.images.clone(),
        }
    }

    /// Applies an update in place. `description` and `status` are left alone.
    pub fn apply_update(&mut self, update: &CarUpdate) {
        let d = &update.details;
        self.make = d.make.clone();
        self.model = d.model.clone();
        self.year = d.year;
        self.price = d.price;
        self.mileage = d.mileage;
        self.color = d.color.clone();
        self.fuel_type = d.fuel_type;
        self.transmission = d.transmission;
        self.body_type = d.body_type;
        self.featured = update.featured;
        self.images = d.images.clone();
    }

    /// The descriptive half of the row.
    pub fn details(&self) -> CarDetails {
        CarDetails {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            price: self.price,
            mileage: self.mileage,
            color: self.color.clone(),
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            body_type: self.body_type,
            images: self.images.clone(),
        }
    }
}
