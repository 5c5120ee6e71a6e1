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
use std::str::FromStr;

/// Errors parsing on-chain identifiers.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, Error)]
#[display(doc_comments)]
pub enum IdParseError {
    /// identifier must start with a `0x` prefix.
    NoPrefix,

    /// identifier contains no hexadecimal digits.
    Empty,

    /// identifier contains non-hexadecimal character '{0}'.
    InvalidChar(char),
}

fn parse_hex_id(s: &str) -> Result<String, IdParseError> {
    let digits = s.strip_prefix("0x").ok_or(IdParseError::NoPrefix)?;
    if digits.is_empty() {
        return Err(IdParseError::Empty);
    }
    if let Some(wrong) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(IdParseError::InvalidChar(wrong));
    }
    Ok(format!("0x{}", digits.to_ascii_lowercase()))
}

/// Identifier of an addressable on-chain object.
///
/// Treated as an opaque `0x`-prefixed hex string assigned by the chain;
/// normalized to lowercase on parsing. Deserialization goes through the
/// same validation, so an id coming off the wire is normalized too.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct ObjectId(String);

impl ObjectId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl FromStr for ObjectId {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex_id(s).map(Self) }
}

impl TryFrom<String> for ObjectId {
    type Error = IdParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Identifier of an account controlling on-chain objects.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for AccountAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl FromStr for AccountAddress {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex_id(s).map(Self) }
}

impl TryFrom<String> for AccountAddress {
    type Error = IdParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl AsRef<str> for AccountAddress {
    fn as_ref(&self) -> &str { &self.0 }
}

/// Fully-qualified name of an on-chain type, used as the type filter in
/// owned-object queries.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructTag {
    pub package: ObjectId,
    pub module: String,
    pub name: String,
}

impl StructTag {
    pub fn with(package: ObjectId, module: &str, name: &str) -> Self {
        StructTag {
            package,
            module: module.to_owned(),
            name: name.to_owned(),
        }
    }

    /// Checks whether a type string reported by a node names this type.
    ///
    /// The package segment is parsed through [`ObjectId`], so hex case
    /// variations coming from the node do not cause a mismatch.
    pub fn matches(&self, type_str: &str) -> bool {
        let mut segments = type_str.splitn(3, "::");
        let (Some(package), Some(module), Some(name)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return false;
        };
        let Ok(package) = ObjectId::from_str(package) else {
            return false;
        };
        package == self.package && module == self.module && name == self.name
    }
}

impl Display for StructTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.package, self.module, self.name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_roundtrip() {
        let id = ObjectId::from_str("0x4701DD624A570585").unwrap();
        assert_eq!(id.to_string(), "0x4701dd624a570585");
    }

    #[test]
    fn id_rejects_garbage() {
        assert_eq!(ObjectId::from_str("4701dd"), Err(IdParseError::NoPrefix));
        assert_eq!(ObjectId::from_str("0x"), Err(IdParseError::Empty));
        assert_eq!(
            ObjectId::from_str("0x12zz"),
            Err(IdParseError::InvalidChar('z'))
        );
    }

    #[test]
    fn id_deserialization_validates() {
        let id: ObjectId = serde_json::from_str("\"0xABC\"").unwrap();
        assert_eq!(id.as_str(), "0xabc");
        assert!(serde_json::from_str::<ObjectId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<AccountAddress>("\"0x12zz\"").is_err());
    }

    #[test]
    fn struct_tag_display() {
        let tag = StructTag::with("0xabc".parse().unwrap(), "todo", "Todo");
        assert_eq!(tag.to_string(), "0xabc::todo::Todo");
        assert!(tag.matches("0xabc::todo::Todo"));
        assert!(!tag.matches("0xabc::todo::Other"));
    }

    #[test]
    fn struct_tag_matches_ignores_hex_case() {
        let tag = StructTag::with("0xabc".parse().unwrap(), "todo", "Todo");
        assert!(tag.matches("0xABC::todo::Todo"));
        assert!(!tag.matches("0xABC::Todo::todo"));
        assert!(!tag.matches("0xabc::todo"));
        assert!(!tag.matches("not-a-type"));
    }
}
