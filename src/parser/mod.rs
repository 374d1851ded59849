//! Keyed singleton cache for SQL statement parser engines.
//!
//! One engine per database type, shared across the process. Requesting an
//! engine with cache options different from the cached one replaces the
//! entry under the map's entry lock, so concurrent callers observe either
//! the old or the new engine, never a half-built one. SQL parsing itself
//! lives outside this crate; the engine value here is the cache payload.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Sizing of one statement/parse-tree cache inside a parser engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOption {
    initial_capacity: usize,
    maximum_size: u64,
}

impl CacheOption {
    pub fn new(
        initial_capacity: usize,
        maximum_size: u64,
    ) -> Self {
        Self {
            initial_capacity,
            maximum_size,
        }
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn maximum_size(&self) -> u64 {
        self.maximum_size
    }
}

impl Default for CacheOption {
    fn default() -> Self {
        Self::new(128, 1024)
    }
}

/// Parser engine bound to one database type and one set of cache options.
#[derive(Debug)]
pub struct SqlParserEngine {
    database_type: String,
    sql_statement_cache_option: CacheOption,
    parse_tree_cache_option: CacheOption,
    parse_comment: bool,
}

impl SqlParserEngine {
    fn new(
        database_type: &str,
        sql_statement_cache_option: &CacheOption,
        parse_tree_cache_option: &CacheOption,
        parse_comment: bool,
    ) -> Self {
        Self {
            database_type: database_type.to_owned(),
            sql_statement_cache_option: sql_statement_cache_option.clone(),
            parse_tree_cache_option: parse_tree_cache_option.clone(),
            parse_comment,
        }
    }

    pub fn database_type(&self) -> &str {
        &self.database_type
    }

    pub fn sql_statement_cache_option(&self) -> &CacheOption {
        &self.sql_statement_cache_option
    }

    pub fn parse_tree_cache_option(&self) -> &CacheOption {
        &self.parse_tree_cache_option
    }

    pub fn parse_comment(&self) -> bool {
        self.parse_comment
    }

    fn matches(
        &self,
        sql_statement_cache_option: &CacheOption,
        parse_tree_cache_option: &CacheOption,
        parse_comment: bool,
    ) -> bool {
        self.sql_statement_cache_option == *sql_statement_cache_option
            && self.parse_tree_cache_option == *parse_tree_cache_option
            && self.parse_comment == parse_comment
    }
}

/// Concurrent database-type → engine cache with replace-on-option-change.
#[derive(Debug, Default)]
pub struct ParserEngineCache {
    engines: DashMap<String, Arc<SqlParserEngine>>,
}

impl ParserEngineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine cached for `database_type`, building one when
    /// absent and replacing the cached one when its options differ from
    /// those requested.
    pub fn get_or_create(
        &self,
        database_type: &str,
        sql_statement_cache_option: &CacheOption,
        parse_tree_cache_option: &CacheOption,
        parse_comment: bool,
    ) -> Arc<SqlParserEngine> {
        match self.engines.entry(database_type.to_owned()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().matches(
                    sql_statement_cache_option,
                    parse_tree_cache_option,
                    parse_comment,
                ) {
                    occupied.get().clone()
                } else {
                    let replacement = Arc::new(SqlParserEngine::new(
                        database_type,
                        sql_statement_cache_option,
                        parse_tree_cache_option,
                        parse_comment,
                    ));
                    occupied.insert(replacement.clone());
                    replacement
                }
            }
            Entry::Vacant(vacant) => {
                let engine = Arc::new(SqlParserEngine::new(
                    database_type,
                    sql_statement_cache_option,
                    parse_tree_cache_option,
                    parse_comment,
                ));
                vacant.insert(engine.clone());
                engine
            }
        }
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
