use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Could not parse \"{value}\" as a date for attribute `{attribute}`")]
    Parse { attribute: String, value: String },

    #[error("Malformed JSON for attribute `{attribute}`: {source}")]
    Decode {
        attribute: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Calling unknown method: {model}::{name}()")]
    UnknownOperation { model: String, name: String },

    #[error("Unknown model class: {0}")]
    UnknownModel(String),

    #[error("Record `{table}` has no relation named `{name}`")]
    UnknownRelation { table: String, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
