use crate::component::Component;
use serde::{Deserialize, Serialize};

/// The computer brands that ship with a fixed model name and base price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Brand {
    A,
    B,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::A, Brand::B];

    pub fn name(self) -> &'static str {
        match self {
            Brand::A => "Brand A",
            Brand::B => "Brand B",
        }
    }

    pub fn base_price(self) -> u64 {
        match self {
            Brand::A => 1000,
            Brand::B => 2200,
        }
    }
}

/// A base component: the innermost, undecorated value of every chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    model: String,
    price: u64,
}

impl Computer {
    pub fn new<S: Into<String>>(model: S, price: u64) -> Self {
        Self { model: model.into(), price }
    }

    pub fn from_brand(brand: Brand) -> Self {
        Self::new(brand.name(), brand.base_price())
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl From<Brand> for Computer {
    fn from(brand: Brand) -> Self {
        Self::from_brand(brand)
    }
}

impl Component for Computer {
    fn description(&self) -> String {
        format!("{} Computer", self.model)
    }

    fn price(&self) -> u64 {
        self.price
    }
}
