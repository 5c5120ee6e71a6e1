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

use crate::{AccountAddress, TransactionBlock};

/// Execution detail flags passed along with a submitted transaction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOptions {
    pub show_effects: bool,
    pub show_object_changes: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        ExecuteOptions {
            show_effects: true,
            show_object_changes: true,
        }
    }
}

/// Final status of an executed transaction as reported by the chain.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TxStatus {
    Success,
    Failure { error: String },
}

impl TxStatus {
    pub fn is_success(&self) -> bool { matches!(self, TxStatus::Success) }
}

/// Result of signing and executing a transaction.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponse {
    pub digest: String,
    pub status: TxStatus,
}

/// Failures on the write path.
///
/// Unlike read failures, these always propagate to the caller with a
/// human-readable message; no retry happens at this layer.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ExecuteError {
    /// the configured package id is still the placeholder; deploy the
    /// to-do package and update the configuration before mutating.
    Unconfigured,

    /// transaction was rejected by the chain: {0}
    Rejected(String),

    /// wallet was unable to sign or submit the transaction: {0}
    #[from(String)]
    Wallet(String),
}

/// Seam for the external signing component.
///
/// Implementations own key management, user confirmation, submission and
/// whatever retry policy they choose; the runtime only hands over a built
/// transaction description and inspects the reported status. The
/// description is taken by value and consumed exactly once.
pub trait WalletProvider {
    /// Account whose objects the wallet controls.
    fn address(&self) -> AccountAddress;

    fn sign_and_execute(
        &mut self,
        tx: TransactionBlock,
        options: ExecuteOptions,
    ) -> Result<ExecuteResponse, ExecuteError>;
}

/// Read-only stand-in used when no signing component is connected.
///
/// Queries work as usual; any attempt to execute a transaction fails.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NoWallet {
    account: AccountAddress,
}

impl NoWallet {
    pub fn with(account: AccountAddress) -> Self { NoWallet { account } }
}

impl WalletProvider for NoWallet {
    fn address(&self) -> AccountAddress { self.account.clone() }

    fn sign_and_execute(
        &mut self,
        _tx: TransactionBlock,
        _options: ExecuteOptions,
    ) -> Result<ExecuteResponse, ExecuteError> {
        Err(ExecuteError::Wallet(s!("no signing wallet is connected")))
    }
}
