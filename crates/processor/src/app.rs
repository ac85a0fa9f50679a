// Copyright (C) 2026 Tendermint Labs
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch driver: reads one JSON trace batch, decodes it with the processor
//! operation for the requested record kind and renders the output as JSON.

use crate::codec::{AddressCodec, ProtoCodec};
use crate::handlers::{BatchOutput, Processor};
use crate::types::TraceBatch;
use anyhow::{Context, Result};
use config::{Args, RecordKind, TracelistenerConfig};
use serde::Serialize;
use std::io::Read;
use std::sync::Arc;

/// Build a processor with the default type registrations for the configured chain.
pub fn build_processor(config: &TracelistenerConfig) -> Result<Processor> {
    let addresses = AddressCodec::new(&config.chain.bech32_prefix)
        .with_context(|| format!("invalid bech32 prefix {}", config.chain.bech32_prefix))?;
    Ok(Processor::new(Arc::new(ProtoCodec::new()), addresses))
}

pub fn run(args: &Args, config: &TracelistenerConfig) -> Result<String> {
    let processor = build_processor(config)?;

    let raw = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read batch from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read batch from {}", args.input))?
    };

    decode(&processor, args.kind, &raw)
}

/// Decode a JSON encoded [`TraceBatch`] of the given kind.
pub fn decode(processor: &Processor, kind: RecordKind, raw: &str) -> Result<String> {
    let batch: TraceBatch = serde_json::from_str(raw).context("malformed trace batch")?;
    tracing::info!(kind = ?kind, entries = batch.len(), "decoding trace batch");

    match kind {
        RecordKind::Auth => render(&processor.auth(&batch)),
        RecordKind::Bank => render(&processor.bank(&batch)),
        RecordKind::Delegation => render(&processor.delegation(&batch)),
        RecordKind::IbcChannel => render(&processor.ibc_channel(&batch)),
        RecordKind::IbcClientState => render(&processor.ibc_client_state(&batch)),
        RecordKind::IbcConnection => render(&processor.ibc_connection(&batch)),
        RecordKind::IbcDenomTrace => render(&processor.ibc_denom_trace(&batch)),
    }
}

fn render<T: Serialize>(output: &BatchOutput<T>) -> Result<String> {
    if let Some(error) = &output.error {
        tracing::warn!(
            failures = output.failure_count(),
            errors = error.errors.len(),
            "batch decoded with errors"
        );
    }
    Ok(serde_json::to_string_pretty(output)?)
}
