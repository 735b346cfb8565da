//! Integration tests for pacfresh
//!
//! These tests verify:
//! - Package list loading from disk
//! - The full check pipeline against mock registry servers
//! - Failure isolation and report ordering end to end

use mockito::{Matcher, Mock, Server, ServerGuard};
use pacfresh::config::load_package_list;
use pacfresh::local::LocalState;
use pacfresh::orchestrator::Orchestrator;
use pacfresh::progress::Progress;
use pacfresh::reconcile::Reconciler;
use pacfresh::registry::{AurAdapter, HttpClient, OfficialRepoAdapter};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Local state backed by a fixed table of installed packages
struct InstalledTable(HashMap<String, String>);

impl InstalledTable {
    fn new(installed: &[(&str, &str)]) -> Self {
        Self(
            installed
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl LocalState for InstalledTable {
    fn installed_version(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Write a package list into a fresh temp directory
fn write_list(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("package-list.yml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn orchestrator_for(
    official: &ServerGuard,
    aur: &ServerGuard,
    installed: &[(&str, &str)],
) -> Orchestrator<InstalledTable> {
    let client = HttpClient::new().unwrap();
    let reconciler = Reconciler::with_adapters(
        Arc::new(OfficialRepoAdapter::with_base_url(client.clone(), official.url())),
        Arc::new(AurAdapter::with_base_url(client, aur.url())),
    );
    Orchestrator::with_parts(InstalledTable::new(installed), reconciler)
}

async fn mock_official(server: &mut ServerGuard, name: &str, pkgver: &str, pkgrel: &str) -> Mock {
    server
        .mock("GET", "/packages/search/json/")
        .match_query(Matcher::UrlEncoded("name".into(), name.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"results": [{{"pkgname": "{}", "pkgver": "{}", "pkgrel": "{}"}}]}}"#,
            name, pkgver, pkgrel
        ))
        .create_async()
        .await
}

async fn mock_aur(server: &mut ServerGuard, name: &str, version: &str) -> Mock {
    server
        .mock("GET", "/rpc/")
        .match_query(Matcher::UrlEncoded("arg".into(), name.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"resultcount": 1, "results": [{{"Name": "{}", "Version": "{}"}}]}}"#,
            name, version
        ))
        .create_async()
        .await
}

mod pipeline {
    use super::*;

    /// One outdated official package, one current AUR package
    #[tokio::test]
    async fn test_reports_only_differing_versions() {
        let (_dir, path) = write_list(
            "base:\n  - pkgA\nextra:\n  - name: pkgB\n    useSecondarySource: true\n",
        );
        let list = load_package_list(&path).unwrap();

        let mut official = Server::new_async().await;
        let mut aur = Server::new_async().await;
        let official_mock = mock_official(&mut official, "pkgA", "1.1", "1").await;
        let aur_mock = mock_aur(&mut aur, "pkgB", "2.0-1").await;

        let orch = orchestrator_for(&official, &aur, &[("pkgA", "1.0-1"), ("pkgB", "2.0-1")]);
        let report = orch.run(&list, &mut Progress::disabled()).await;

        official_mock.assert_async().await;
        aur_mock.assert_async().await;
        assert_eq!(report.pending.len(), 1);
        assert_eq!(report.pending[0].name, "pkgA");
        assert_eq!(report.pending[0].group, "base");
        assert_eq!(report.pending[0].remote_version.as_deref(), Some("1.1-1"));
    }

    /// A package that is not installed is never looked up remotely
    #[tokio::test]
    async fn test_not_installed_is_never_queried() {
        let (_dir, path) = write_list("base:\n  - pkgA\n  - pkgC\n");
        let list = load_package_list(&path).unwrap();

        let mut official = Server::new_async().await;
        let aur = Server::new_async().await;
        let _pkg_a = mock_official(&mut official, "pkgA", "1.0", "1").await;
        let pkg_c = official
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::UrlEncoded("name".into(), "pkgC".into()))
            .expect(0)
            .create_async()
            .await;

        let orch = orchestrator_for(&official, &aur, &[("pkgA", "1.0-1")]);
        let report = orch.run(&list, &mut Progress::disabled()).await;

        pkg_c.assert_async().await;
        assert_eq!(report.installed, 1);
        assert_eq!(report.listed, 2);
        assert!(report.pending.is_empty());
    }

    /// Registry failures drop the package without affecting the others
    #[tokio::test]
    async fn test_failed_lookups_are_isolated() {
        let (_dir, path) = write_list(
            "base:\n  - pkgD\n  - pkgE\naur:\n  - { name: pkgD, aur: true }\n  - { name: pkgF, aur: true }\n",
        );
        let list = load_package_list(&path).unwrap();

        let mut official = Server::new_async().await;
        let mut aur = Server::new_async().await;
        let _d_official = official
            .mock("GET", "/packages/search/json/")
            .match_query(Matcher::UrlEncoded("name".into(), "pkgD".into()))
            .with_status(500)
            .create_async()
            .await;
        let _e = mock_official(&mut official, "pkgE", "3.1", "2").await;
        let _d_aur = aur
            .mock("GET", "/rpc/")
            .match_query(Matcher::UrlEncoded("arg".into(), "pkgD".into()))
            .with_status(503)
            .create_async()
            .await;
        let _f = mock_aur(&mut aur, "pkgF", "0.9-1").await;

        let orch = orchestrator_for(
            &official,
            &aur,
            &[("pkgD", "1.0-1"), ("pkgE", "3.0-1"), ("pkgF", "0.8-1")],
        );
        let report = orch.run(&list, &mut Progress::disabled()).await;

        let names: Vec<(&str, &str)> = report
            .pending
            .iter()
            .map(|d| (d.group.as_str(), d.name.as_str()))
            .collect();
        assert_eq!(names, vec![("aur", "pkgF"), ("base", "pkgE")]);
    }

    /// Running twice against unchanged state gives the same report
    #[tokio::test]
    async fn test_report_is_deterministic() {
        let (_dir, path) = write_list(
            "tools:\n  - zoxide\n  - { name: yay, aur: true }\n  - bat\nbase:\n  - linux\n",
        );
        let list = load_package_list(&path).unwrap();

        let mut official = Server::new_async().await;
        let mut aur = Server::new_async().await;
        let _m1 = mock_official(&mut official, "zoxide", "0.9.4", "1").await;
        let _m2 = mock_official(&mut official, "bat", "0.24.0", "2").await;
        let _m3 = mock_official(&mut official, "linux", "6.7.arch1", "1").await;
        let _m4 = mock_aur(&mut aur, "yay", "12.3.5-1").await;

        let installed = [
            ("zoxide", "0.9.3-1"),
            ("yay", "12.3.4-1"),
            ("bat", "0.24.0-1"),
            ("linux", "6.6.arch1-1"),
        ];
        let orch = orchestrator_for(&official, &aur, &installed);

        let first = orch.run(&list, &mut Progress::disabled()).await;
        let second = orch.run(&list, &mut Progress::disabled()).await;

        assert_eq!(first, second);
        let order: Vec<&str> = first.pending.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(order, vec!["linux", "bat", "zoxide", "yay"]);
    }
}

mod package_list {
    use super::*;

    /// TOML lists go through the same pipeline
    #[test]
    fn test_load_toml_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("packages.toml");
        fs::write(
            &path,
            "base = [\"linux\", \"git\"]\naur = [{ name = \"yay\", aur = true }]\n",
        )
        .unwrap();

        let list = load_package_list(&path).unwrap();
        assert_eq!(list.entry_count(), 3);
        let groups: Vec<&str> = list.groups().map(|(g, _)| g).collect();
        assert_eq!(groups, vec!["base", "aur"]);
    }

    /// Missing file is reported as an error, not an empty list
    #[test]
    fn test_missing_list_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_package_list(&dir.path().join("package-list.yml")).is_err());
    }
}
