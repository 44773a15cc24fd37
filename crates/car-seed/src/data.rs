//! The featured-car catalog that gets seeded.

use cars::models::{BodyType, CarDetails, CarKey, FuelType, Transmission};

/// One catalog entry, keyed by a numeric id.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCar {
    pub id: u32,
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

impl SeedCar {
    /// The table key for this entry: the id in decimal form.
    pub fn key(&self) -> CarKey {
        CarKey::from(self.id)
    }

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

#[allow(clippy::too_many_arguments)]
fn car(
    id: u32,
    make: &str,
    model: &str,
    year: i32,
    price: f64,
    mileage: i32,
    color: &str,
    fuel_type: FuelType,
    transmission: Transmission,
    body_type: BodyType,
    images: &[&str],
) -> SeedCar {
    SeedCar {
        id,
        make: make.to_string(),
        model: model.to_string(),
        year,
        price,
        mileage,
        color: color.to_string(),
        fuel_type,
        transmission,
        body_type,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

/// Returns the featured cars in display order.
pub fn featured_cars() -> Vec<SeedCar> {
    vec![
        car(
            1,
            "Toyota",
            "Camry",
            2023,
            28500.0,
            15000,
            "White",
            FuelType::Hybrid,
            Transmission::Automatic,
            BodyType::Sedan,
            &["/cars/1.png"],
        ),
        car(
            2,
            "Honda",
            "Civic",
            2023,
            26000.0,
            12000,
            "Blue",
            FuelType::Petrol,
            Transmission::Manual,
            BodyType::Sedan,
            &["/cars/2.webp"],
        ),
        car(
            3,
            "Tesla",
            "Model 3",
            2022,
            42000.0,
            8000,
            "Red",
            FuelType::Electric,
            Transmission::Automatic,
            BodyType::Sedan,
            &["/cars/3.jpg"],
        ),
        car(
            4,
            "Ford",
            "Bronco",
            2021,
            39500.0,
            27000,
            "Green",
            FuelType::Petrol,
            Transmission::Automatic,
            BodyType::Suv,
            &["/cars/4.jpg", "/cars/4-interior.jpg"],
        ),
        car(
            5,
            "Volkswagen",
            "Golf",
            2020,
            18900.0,
            41000,
            "Grey",
            FuelType::Diesel,
            Transmission::Manual,
            BodyType::Hatchback,
            &["/cars/5.jpg"],
        ),
        car(
            6,
            "BMW",
            "330e",
            2022,
            45900.0,
            9500,
            "Black",
            FuelType::PlugInHybrid,
            Transmission::Automatic,
            BodyType::Sedan,
            &["/cars/6.jpg"],
        ),
    ]
}
