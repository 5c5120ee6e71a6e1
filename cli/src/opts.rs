// Command-line client for an on-chain to-do list
//
// SPDX-License-Identifier: Apache-2.0
//
// Written in 2025 by the Todochain Contributors
//
// Copyright (C) 2025 Todochain Contributors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use clap::ValueHint;
use todochain::{AccountAddress, Config};

use crate::Command;

pub const TODOCHAIN_CONF_ENV: &str = "TODOCHAIN_CONF";
pub const TODOCHAIN_RPC_ENV: &str = "TODOCHAIN_RPC";
pub const TODOCHAIN_OWNER_ENV: &str = "TODOCHAIN_OWNER";

pub const DEFAULT_CONF: &str = "~/.todochain/config.yaml";

/// Command-line arguments
#[derive(Parser, Clone, PartialEq, Eq, Debug)]
#[command(author, version, about)]
pub struct Opts {
    /// Set verbosity level; can be used multiple times to increase verbosity
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_CONF,
        env = TODOCHAIN_CONF_ENV,
        value_hint = ValueHint::FilePath
    )]
    pub config: String,

    /// Node RPC endpoint, overriding the configured one
    #[arg(
        short,
        long,
        global = true,
        env = TODOCHAIN_RPC_ENV,
        value_name = "HOST:PORT"
    )]
    pub rpc: Option<String>,

    /// Account whose to-do objects are listed
    #[arg(long, global = true, env = TODOCHAIN_OWNER_ENV)]
    pub owner: Option<AccountAddress>,

    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

impl Opts {
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let path = shellexpand::tilde(&self.config);
        let mut config = Config::load(path.as_ref())
            .with_context(|| format!("Unable to read configuration from `{path}`"))?;
        if let Some(rpc) = &self.rpc {
            config.rpc = rpc.clone();
        }
        Ok(config)
    }

    pub fn owner(&self) -> anyhow::Result<AccountAddress> {
        self.owner.clone().context(
            "an owner account is required; provide it with `--owner` or the TODOCHAIN_OWNER \
             environment variable",
        )
    }
}
