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

use std::thread;
use std::time::Duration;

use crate::{
    AccountAddress, Config, ExecuteError, ExecuteOptions, ExecuteResponse, ObjectId, Resolver,
    ResolverError, Todo, TodoBuilder, TransactionBlock, TxStatus, WalletProvider,
    PACKAGE_ID_PLACEHOLDER,
};

/// Fixed delay between a successful mutation and the one-shot refetch
/// confirming it.
pub const MUTATION_REFRESH_DELAY: Duration = Duration::from_millis(1000);

/// Fixed period for periodic refetches.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Ties together the transaction builders, the signing wallet and the
/// read-only resolver.
///
/// Mutations are serialized by the wallet and the chain, not here: every
/// to-do is an independently addressed object, so the runtime needs no
/// locking of its own. A refetch scheduled right after a mutation may
/// still observe pre-mutation state if the chain has not finalized it yet;
/// that staleness is accepted and resolved by the next poll.
pub struct TodoRuntime<W: WalletProvider, R: Resolver> {
    builder: TodoBuilder,
    wallet: W,
    resolver: R,
    options: ExecuteOptions,
}

impl<W: WalletProvider, R: Resolver> TodoRuntime<W, R> {
    pub fn with(config: &Config, wallet: W, resolver: R) -> Self {
        TodoRuntime {
            builder: TodoBuilder::new(config.package_id.clone()),
            wallet,
            resolver,
            options: ExecuteOptions::default(),
        }
    }

    pub fn builder(&self) -> &TodoBuilder { &self.builder }

    pub fn wallet(&self) -> &W { &self.wallet }

    pub fn resolver(&self) -> &R { &self.resolver }

    pub fn address(&self) -> AccountAddress { self.wallet.address() }

    /// Whether the runtime targets a real deployment rather than the
    /// placeholder package id. Mutations are refused while unconfigured.
    pub fn is_configured(&self) -> bool {
        self.builder.package().as_str() != PACKAGE_ID_PLACEHOLDER
    }

    fn submit(&mut self, tx: TransactionBlock) -> Result<ExecuteResponse, ExecuteError> {
        if !self.is_configured() {
            return Err(ExecuteError::Unconfigured);
        }
        let response = self.wallet.sign_and_execute(tx, self.options)?;
        match response.status {
            TxStatus::Success => {
                debug!("transaction {} executed successfully", response.digest);
                Ok(response)
            }
            TxStatus::Failure { error } => Err(ExecuteError::Rejected(error)),
        }
    }

    pub fn create(&mut self, content: &str) -> Result<ExecuteResponse, ExecuteError> {
        let tx = self.builder.create(content);
        self.submit(tx)
    }

    pub fn toggle(&mut self, id: &ObjectId) -> Result<ExecuteResponse, ExecuteError> {
        let tx = self.builder.toggle(id);
        self.submit(tx)
    }

    pub fn update(
        &mut self,
        id: &ObjectId,
        new_content: &str,
    ) -> Result<ExecuteResponse, ExecuteError> {
        let tx = self.builder.update(id, new_content);
        self.submit(tx)
    }

    pub fn delete(&mut self, id: &ObjectId) -> Result<ExecuteResponse, ExecuteError> {
        let tx = self.builder.delete(id);
        self.submit(tx)
    }

    /// Fetches all to-dos owned by an address, reporting read failures to
    /// the caller.
    ///
    /// Individual objects failing the typed decode are skipped with a
    /// warning; ordering follows the node response. Idempotent and safe to
    /// call repeatedly.
    pub fn fetch(&self, owner: &AccountAddress) -> Result<Vec<Todo>, ResolverError> {
        let type_filter = self.builder.todo_type();
        let objects = self.resolver.owned_objects(owner, &type_filter)?;
        let todos = objects
            .iter()
            .filter_map(|object| {
                let todo = Todo::decode(object, &type_filter);
                if todo.is_none() {
                    warn!("object {} doesn't decode as a to-do item", object.object_id);
                }
                todo
            })
            .collect();
        Ok(todos)
    }

    /// Fetches all to-dos owned by an address, resolving to an empty list
    /// on any read failure.
    ///
    /// This preserves the no-throw contract UI callers rely on; use
    /// [`Self::fetch`] where an error must stay distinguishable from a
    /// genuinely empty list.
    pub fn todos(&self, owner: &AccountAddress) -> Vec<Todo> {
        match self.fetch(owner) {
            Ok(todos) => todos,
            Err(err) => {
                error!("unable to fetch the to-do list: {err}");
                Vec::new()
            }
        }
    }

    /// Waits the post-mutation refresh delay, then fetches once.
    pub fn confirm(&self, owner: &AccountAddress) -> Result<Vec<Todo>, ResolverError> {
        thread::sleep(MUTATION_REFRESH_DELAY);
        self.fetch(owner)
    }
}
