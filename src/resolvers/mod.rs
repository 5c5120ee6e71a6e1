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

mod rpc;

use std::io;

use amplify::IoError;
pub use rpc::RpcResolver;

use crate::{AccountAddress, OwnedObject, StructTag};

/// Read-only access to the chain.
///
/// The single operation lists all objects of a given type currently owned
/// by an address, with full content materialized. Implementations must
/// return objects in whatever order the node reports them.
pub trait Resolver {
    fn owned_objects(
        &self,
        owner: &AccountAddress,
        type_filter: &StructTag,
    ) -> Result<Vec<OwnedObject>, ResolverError>;
}

#[derive(Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum ResolverError {
    /// I/O error talking to the node: {0}
    #[from]
    #[from(io::Error)]
    Io(IoError),

    /// cannot connect to the node.
    Connectivity,

    /// node response violates the protocol.
    Protocol,

    /// the node has returned an error "{0}"
    ServerSide(String),
}
