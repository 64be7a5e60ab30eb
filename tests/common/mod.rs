//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `site_navigation`: a small Spring Cloud Alibaba style docs menu with
//!   decorated, mixed-language group titles
//! - `nav_state`: `site_navigation` wrapped in a [`NavState`] with a Ctrl+K shortcut
//! - `large_navigation`: one group holding more matching pages than the result cap
//!
//! [`TempWorkspace`] provides a temp directory for tests that load files, and
//! [`RecordingHost`] records every call the overlay makes into the host.

#![allow(dead_code)] // Items used across different integration test crates

use quicknav::overlay::Modifier;
use quicknav::{Host, NavState, NavigationData, NavigationEntry, NavigationGroup, Shortcut};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[fixture]
pub fn site_navigation() -> NavigationData {
    NavigationData::new(vec![
        NavigationGroup::new(
            "🚀 快速开始",
            vec![
                NavigationEntry::new("项目介绍", "/intro"),
                NavigationEntry::new("环境搭建", "/setup"),
            ],
        ),
        NavigationGroup::new(
            "🧩 核心组件",
            vec![
                NavigationEntry::new("Nacos 服务发现", "/nacos-discovery"),
                NavigationEntry::new("Nacos 配置中心", "/nacos-config"),
                NavigationEntry::new("Sentinel 流量控制", "/sentinel"),
                NavigationEntry::new("Redis 分布式缓存", "/redis"),
            ],
        ),
        NavigationGroup::new(
            "⚙️ Gateway & Routing",
            vec![
                NavigationEntry::new("Spring Cloud Gateway", "/gateway"),
                NavigationEntry::new("Route predicates", "/gateway/predicates"),
            ],
        ),
    ])
}

#[fixture]
pub fn nav_state(site_navigation: NavigationData) -> NavState {
    NavState::new(site_navigation, ctrl_k())
}

#[fixture]
pub fn large_navigation() -> NavigationData {
    let entries = (1..=15)
        .map(|i| NavigationEntry::new(format!("Chapter {i}"), format!("/chapter-{i}")))
        .collect();
    NavigationData::new(vec![NavigationGroup::new("📖 Handbook", entries)])
}

pub fn ctrl_k() -> Shortcut {
    Shortcut::new(Modifier::Control, 'k').expect("ctrl+k is not reserved")
}

/// Host that records every call the overlay makes.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub navigated: Vec<String>,
    pub closed: usize,
    pub focused: usize,
    pub listening: bool,
    pub listen_calls: usize,
}

impl Host for RecordingHost {
    fn navigate(&mut self, path: &str) {
        self.navigated.push(path.to_string());
    }

    fn close_overlay(&mut self) {
        self.closed += 1;
    }

    fn focus_input(&mut self) {
        self.focused += 1;
    }

    fn listen_global_keys(&mut self) {
        self.listening = true;
        self.listen_calls += 1;
    }

    fn unlisten_global_keys(&mut self) {
        self.listening = false;
    }
}

/// A temporary directory that is removed when dropped.
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

impl TempWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content and returns its full path.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
