//! Common test utilities and fixtures

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test configuration builder
pub struct TestConfigBuilder {
    document: Value,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            document: json!({
                "email": {"user": "verify@example.com", "pass": "smtp-app-password"},
                "redis": {"host": "127.0.0.1", "port": 6379, "passwd": "redis-password"}
            }),
        }
    }

    pub fn with_redis_port(mut self, port: Value) -> Self {
        self.document["redis"]["port"] = port;
        self
    }

    pub fn with_redis_host(mut self, host: &str) -> Self {
        self.document["redis"]["host"] = json!(host);
        self
    }

    pub fn with_mysql(mut self) -> Self {
        self.document["mysql"] = json!({
            "host": "127.0.0.1",
            "port": 3306,
            "user": "root",
            "passwd": "mysql-password"
        });
        self
    }

    /// Drop a whole group (`key == None`) or a single key from a group
    pub fn without(mut self, group: &str, key: Option<&str>) -> Self {
        if let Some(object) = self.document.as_object_mut() {
            match key {
                Some(key) => {
                    if let Some(section) = object.get_mut(group).and_then(Value::as_object_mut) {
                        section.remove(key);
                    }
                }
                None => {
                    object.remove(group);
                }
            }
        }
        self
    }

    pub fn build(self) -> String {
        serde_json::to_string_pretty(&self.document).expect("fixture serializes")
    }

    /// Write the fixture as `config.json` into a fresh temp dir
    pub fn write(self) -> (TempDir, PathBuf) {
        write_raw(&self.build())
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write_raw(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}
