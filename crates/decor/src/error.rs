use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainBuildError {
    #[error("invalid argument: base component must be set")]
    MissingBase,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid catalog: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("unknown computer: {model}")]
    UnknownComputer { model: String },

    #[error("unknown add-on: {name}")]
    UnknownAddOn { name: String },

    #[error("duplicate {kind} entry: {name}")]
    DuplicateEntry { kind: &'static str, name: String },

    #[error("{kind} entry has an empty name")]
    EmptyName { kind: &'static str },

    #[error("chain build error: {source}")]
    Build {
        #[from]
        source: ChainBuildError,
    },
}

impl CatalogError {
    pub fn unknown_computer<S: ToString>(model: S) -> Self {
        Self::UnknownComputer { model: model.to_string() }
    }

    pub fn unknown_add_on<S: ToString>(name: S) -> Self {
        Self::UnknownAddOn { name: name.to_string() }
    }

    pub fn duplicate_entry<S: ToString>(kind: &'static str, name: S) -> Self {
        Self::DuplicateEntry { kind, name: name.to_string() }
    }

    pub fn empty_name(kind: &'static str) -> Self {
        Self::EmptyName { kind }
    }
}
