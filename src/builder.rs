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

use std::fmt::{self, Display, Formatter};

use crate::{ObjectId, StructTag, TODO_MODULE, TODO_TYPE_NAME};

pub const CREATE_FN: &str = "create_todo";
pub const TOGGLE_FN: &str = "toggle_todo";
pub const UPDATE_FN: &str = "update_todo";
pub const DELETE_FN: &str = "delete_todo";

/// Single argument of an on-chain call: either an inline value or a
/// reference to an existing on-chain object.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CallArg {
    Pure(String),
    Object(ObjectId),
}

/// Fully-qualified name of an on-chain entry function.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallTarget {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
}

impl Display for CallTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.function)
    }
}

/// One invocation of a published on-chain function.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCall {
    pub target: CallTarget,
    pub arguments: Vec<CallArg>,
}

/// Unsigned bundle of on-chain calls, handed to a wallet for signing and
/// execution.
///
/// Immutable once built; the signing seam takes it by value, so each
/// description is consumed exactly once.
#[derive(Clone, PartialEq, Eq, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    pub calls: Vec<MoveCall>,
}

impl TransactionBlock {
    fn single(call: MoveCall) -> Self { TransactionBlock { calls: vec![call] } }
}

/// Constructs transaction descriptions for the four to-do mutations.
///
/// The target deployment is provided explicitly at construction; there is
/// no global package id. Construction is pure: no validation, trimming or
/// escaping is applied to arguments — callers validate before building.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TodoBuilder {
    package: ObjectId,
}

impl TodoBuilder {
    pub fn new(package: ObjectId) -> Self { TodoBuilder { package } }

    pub fn package(&self) -> &ObjectId { &self.package }

    /// Type of the to-do objects published by this deployment, used as
    /// the owned-objects query filter.
    pub fn todo_type(&self) -> StructTag {
        StructTag::with(self.package.clone(), TODO_MODULE, TODO_TYPE_NAME)
    }

    fn call(&self, function: &str, arguments: Vec<CallArg>) -> TransactionBlock {
        TransactionBlock::single(MoveCall {
            target: CallTarget {
                package: self.package.clone(),
                module: TODO_MODULE.to_owned(),
                function: function.to_owned(),
            },
            arguments,
        })
    }

    pub fn create(&self, content: &str) -> TransactionBlock {
        self.call(CREATE_FN, vec![CallArg::Pure(content.to_owned())])
    }

    pub fn toggle(&self, id: &ObjectId) -> TransactionBlock {
        self.call(TOGGLE_FN, vec![CallArg::Object(id.clone())])
    }

    pub fn update(&self, id: &ObjectId, new_content: &str) -> TransactionBlock {
        self.call(UPDATE_FN, vec![
            CallArg::Object(id.clone()),
            CallArg::Pure(new_content.to_owned()),
        ])
    }

    pub fn delete(&self, id: &ObjectId) -> TransactionBlock {
        self.call(DELETE_FN, vec![CallArg::Object(id.clone())])
    }
}
