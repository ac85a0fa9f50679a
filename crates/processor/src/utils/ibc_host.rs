//! ICS-24 host requirements: identifier validation and store path parsing.

use crate::consts::{KEY_CHANNEL_PREFIX, KEY_PORT_PREFIX};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref VALID_ID: Regex =
        Regex::new(r"^[a-zA-Z0-9._+\-#\[\]<>]+$").expect("identifier pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier cannot be blank")]
    Blank,

    #[error("identifier {0} cannot contain separator '/'")]
    ContainsSeparator(String),

    #[error("identifier {id} has invalid length: {len}, must be between {min}-{max} characters")]
    InvalidLength {
        id: String,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error(
        "identifier {0} must contain only alphanumeric or the following characters: '.', '_', '+', '-', '#', '[', ']', '<', '>'"
    )]
    InvalidCharacters(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("cannot parse channel path {0}")]
    InvalidChannelPath(String),
}

fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), IdentifierError> {
    if id.trim().is_empty() {
        return Err(IdentifierError::Blank);
    }
    if id.contains('/') {
        return Err(IdentifierError::ContainsSeparator(id.to_string()));
    }
    if id.len() < min || id.len() > max {
        return Err(IdentifierError::InvalidLength {
            id: id.to_string(),
            len: id.len(),
            min,
            max,
        });
    }
    if !VALID_ID.is_match(id) {
        return Err(IdentifierError::InvalidCharacters(id.to_string()));
    }
    Ok(())
}

pub fn validate_client_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier(id, 9, 64)
}

pub fn validate_connection_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier(id, 10, 64)
}

pub fn validate_channel_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier(id, 8, 64)
}

pub fn validate_port_identifier(id: &str) -> Result<(), IdentifierError> {
    validate_identifier(id, 2, 128)
}

/// Parse `channelEnds/ports/{port}/channels/{channel}` into `(port, channel)`.
pub fn parse_channel_path(path: &str) -> Result<(String, String), PathError> {
    let split: Vec<&str> = path.split('/').collect();
    if split.len() < 5 || split[1] != KEY_PORT_PREFIX || split[3] != KEY_CHANNEL_PREFIX {
        return Err(PathError::InvalidChannelPath(path.to_string()));
    }
    Ok((split[2].to_string(), split[4].to_string()))
}
