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

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use serde_json::{json, Value};

use super::{Resolver, ResolverError};
use crate::{AccountAddress, OwnedObject, StructTag};

/// Blocking JSON-RPC 2.0 client speaking line-delimited JSON over TCP.
///
/// A fresh connection is opened per request; the node serializes
/// concurrent requests on its side, so the client keeps no state beyond
/// the address.
pub struct RpcResolver {
    addr: String,
}

impl RpcResolver {
    pub fn new(addr: &str) -> Self { RpcResolver { addr: addr.to_owned() } }

    fn request(&self, method: &str, params: Value) -> Result<Value, ResolverError> {
        let mut stream =
            TcpStream::connect(&self.addr).map_err(|_| ResolverError::Connectivity)?;
        let req = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        stream.write_all(req.to_string().as_bytes())?;
        stream.write_all(b"\n")?;

        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let response: Value =
            serde_json::from_str(&line).map_err(|_| ResolverError::Protocol)?;

        if let Some(error) = response.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unspecified error")
                .to_owned();
            return Err(ResolverError::ServerSide(message));
        }
        response
            .get("result")
            .cloned()
            .ok_or(ResolverError::Protocol)
    }
}

impl Resolver for RpcResolver {
    fn owned_objects(
        &self,
        owner: &AccountAddress,
        type_filter: &StructTag,
    ) -> Result<Vec<OwnedObject>, ResolverError> {
        let result = self.request("listOwnedObjects", json!({
            "owner": owner,
            "type": type_filter.to_string(),
            "options": {
                "showContent": true,
                "showType": true,
            },
        }))?;
        let list = result
            .get("data")
            .and_then(Value::as_array)
            .ok_or(ResolverError::Protocol)?;

        let mut objects = Vec::with_capacity(list.len());
        for item in list {
            match serde_json::from_value::<OwnedObject>(item.clone()) {
                Ok(object) => objects.push(object),
                // a single malformed object must not poison the whole read
                Err(err) => warn!("skipping malformed object in node response: {err}"),
            }
        }
        Ok(objects)
    }
}
