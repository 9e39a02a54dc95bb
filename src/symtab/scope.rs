// MiniC - Semantic analysis and three-address code generation for a small C-like language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! A single scope's hash table.
//!
//! Names are hashed by summing their byte values modulo the bucket
//! count; colliding records live in the same bucket in insertion order.

use super::symbol::SymbolInfo;
use crate::error::{Result, SymbolError};
use std::io::{self, Write};

/// One lexical scope's symbol storage.
#[derive(Debug, Clone)]
pub struct ScopeTable {
    /// The scope's unique id, assigned by the symbol table at entry.
    id: u32,
    bucket_count: usize,
    /// Bucketed records; within a bucket, insertion order is kept.
    buckets: Vec<Vec<SymbolInfo>>,
}

impl ScopeTable {
    /// Create an empty scope table with the given bucket count.
    pub fn new(bucket_count: usize, id: u32) -> Self {
        // The hash is a modulo over the bucket count, so zero buckets
        // would be undefined; use at least one.
        let bucket_count = bucket_count.max(1);
        Self {
            id,
            bucket_count,
            buckets: vec![Vec::new(); bucket_count],
        }
    }

    /// Get the scope's unique id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Compute the bucket a name hashes to: the sum of the name's byte
    /// values modulo the bucket count.
    pub fn bucket_index(&self, name: &str) -> usize {
        let sum: u64 = name.bytes().map(u64::from).sum();
        (sum % self.bucket_count as u64) as usize
    }

    /// Look up a record by name in this scope only.
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        let index = self.bucket_index(name);
        self.buckets[index].iter().find(|s| s.name() == name)
    }

    /// Look up a record by name in this scope only (mutable).
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut SymbolInfo> {
        let index = self.bucket_index(name);
        self.buckets[index].iter_mut().find(|s| s.name() == name)
    }

    /// Insert a record into this scope.
    ///
    /// Fails with [`SymbolError::Duplicate`] if the name is already
    /// present; the existing record is left untouched.
    pub fn insert(&mut self, symbol: SymbolInfo) -> Result<()> {
        if self.lookup(symbol.name()).is_some() {
            return Err(SymbolError::Duplicate {
                name: symbol.name().to_string(),
            });
        }
        let index = self.bucket_index(symbol.name());
        self.buckets[index].push(symbol);
        Ok(())
    }

    /// Remove a record by name from this scope.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let index = self.bucket_index(name);
        match self.buckets[index].iter().position(|s| s.name() == name) {
            Some(pos) => {
                self.buckets[index].remove(pos);
                Ok(())
            }
            None => Err(SymbolError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Get the number of records stored in this scope.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Check if this scope holds no records.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Write this scope's diagnostic dump: the header line, then every
    /// non-empty bucket with its records in insertion order.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "ScopeTable # {}", self.id)?;
        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            writeln!(out, "{} --> ", index)?;
            for symbol in bucket {
                writeln!(out, "{}", symbol)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
