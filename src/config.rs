// Wallet runtime for an on-chain to-do list
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

use std::fs::File;
use std::io;
use std::path::Path;

use amplify::IoError;

use crate::ObjectId;

/// Sentinel package id shipped in the default configuration.
///
/// A deployment keeping this value has not been published yet; the runtime
/// refuses to build mutating transactions against it.
pub const PACKAGE_ID_PLACEHOLDER: &str = "0x0";

pub const DEFAULT_RPC: &str = "127.0.0.1:9123";

/// Deployment configuration for the runtime.
///
/// Passed explicitly into [`crate::TodoBuilder`] and [`crate::TodoRuntime`]
/// constructors; no part of the library reads it from a global.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Node RPC endpoint, `host:port`.
    pub rpc: String,
    /// Id of the published to-do package.
    pub package_id: ObjectId,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rpc: DEFAULT_RPC.to_owned(),
            package_id: PACKAGE_ID_PLACEHOLDER
                .parse()
                .expect("placeholder id is a valid object id"),
        }
    }
}

impl Config {
    /// Whether the package id was changed from the placeholder.
    pub fn is_configured(&self) -> bool {
        self.package_id.as_str() != PACKAGE_ID_PLACEHOLDER
    }

    /// Loads configuration from a YAML file; an absent file yields the
    /// default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}

#[derive(Debug, Display, Error, From)]
#[display(inner)]
pub enum ConfigError {
    #[from]
    #[from(io::Error)]
    Io(IoError),

    #[from]
    Yaml(serde_yaml::Error),
}
