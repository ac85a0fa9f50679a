// Copyright (C) 2026 Tendermint Labs
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod codec;
pub mod consts;
pub mod handlers;
pub mod logging;
pub mod proto;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod test_fixtures;
