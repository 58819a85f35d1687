#![allow(dead_code)]

use std::{collections::HashMap, path::PathBuf};

use iconlookup::resolver::Resolver;

/// In-memory resolver used to test the lookup service without a real icon
/// theme installed.
pub struct FakeResolver {
    icons: HashMap<String, PathBuf>,
}

impl FakeResolver {
    pub fn new() -> FakeResolver {
        FakeResolver {
            icons: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, path: &str) {
        self.icons.insert(name.to_string(), PathBuf::from(path));
    }
}

impl Resolver for FakeResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.icons.get(name).cloned()
    }
}
