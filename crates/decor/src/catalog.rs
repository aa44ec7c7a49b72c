//! Data-driven assembly of decoration chains.
//!
//! A [`Catalog`] lists the base computers and add-ons on offer. It is plain serde data, so it can
//! be shipped as JSON:
//!
//! ```json
//! {
//!   "computers": [{ "model": "Brand A", "price": 1000 }],
//!   "add_ons": [{ "name": "monitor", "suffix": " and a 23 inch monitor", "price": 280 }]
//! }
//! ```

use crate::add_on::{CustomAddOn, ExternalHdd, Monitor};
use crate::chain::Chain;
use crate::component::Component;
use crate::computer::{Brand, Computer};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use tracing::debug;

const COMPUTER: &str = "computer";
const ADD_ON: &str = "add-on";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    computers: Vec<Computer>,
    #[serde(default)]
    add_ons: Vec<CustomAddOn>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            computers: Brand::ALL.into_iter().map(Computer::from_brand).collect(),
            add_ons: vec![
                CustomAddOn::from_add_on("external_hdd", &ExternalHdd),
                CustomAddOn::from_add_on("monitor", &Monitor),
            ],
        }
    }
}

impl Catalog {
    pub fn new(computers: Vec<Computer>, add_ons: Vec<CustomAddOn>) -> Result<Self, CatalogError> {
        let catalog = Self { computers, add_ons };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// every model and add-on name must be non-empty and unique within its own list
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_names(COMPUTER, self.computers.iter().map(Computer::model))?;
        check_names(ADD_ON, self.add_ons.iter().map(CustomAddOn::name))
    }

    pub fn computers(&self) -> &[Computer] {
        &self.computers
    }

    pub fn add_ons(&self) -> &[CustomAddOn] {
        &self.add_ons
    }

    pub fn computer(&self, model: &str) -> Option<&Computer> {
        self.computers.iter().find(|computer| computer.model() == model)
    }

    pub fn add_on(&self, name: &str) -> Option<&CustomAddOn> {
        self.add_ons.iter().find(|add_on| add_on.name() == name)
    }

    /// Builds a chain around `model`, applying `add_ons` in order (the first one is innermost).
    ///
    /// Every name is resolved before anything is built, so an unknown add-on never yields a
    /// partially decorated chain.
    pub fn assemble(&self, model: &str, add_ons: &[&str]) -> Result<Chain, CatalogError> {
        let computer = self.computer(model).ok_or_else(|| CatalogError::unknown_computer(model))?;

        let resolved = add_ons
            .iter()
            .map(|&name| self.add_on(name).ok_or_else(|| CatalogError::unknown_add_on(name)))
            .collect::<Result<Vec<_>, _>>()?;

        let chain = resolved
            .into_iter()
            .fold(Chain::builder().base(computer.clone()), |builder, add_on| builder.add_on(add_on.clone()))
            .build()?;

        debug!(model, ?add_ons, price = chain.price(), "assembled chain");
        Ok(chain)
    }
}

fn check_names<'a, I>(kind: &'static str, names: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(CatalogError::empty_name(kind));
        }
        if !seen.insert(name) {
            return Err(CatalogError::duplicate_entry(kind, name));
        }
    }
    debug!(kind, count = seen.len(), "catalog entries checked");
    Ok(())
}
