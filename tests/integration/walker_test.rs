use pkgtree::{
    core::{TraversalSink, Visit},
    GoListResolver, PackageResolver, Result, SnapshotResolver, VisitRegistry, WalkPolicy, Walker,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/app_deps.json");

/// Collects `(path, id, depth)` for every arrival
#[derive(Default)]
struct Trace(Vec<(String, usize, usize)>);

impl TraversalSink for Trace {
    type Node = ();

    fn visit(&mut self, visit: &Visit<'_>) -> Result<()> {
        self.0.push((visit.package.path.clone(), visit.id, visit.depth));
        Ok(())
    }

    fn finish(&mut self, _: &Visit<'_>, _: (), _: Vec<()>) -> Option<()> {
        Some(())
    }
}

#[test]
fn test_snapshot_graph_shape() {
    let graph = SnapshotResolver::new(FIXTURE).resolve("example.com/app").unwrap();

    assert_eq!(graph.package_count(), 8);
    assert_eq!(graph.import_count(), 16);

    let fmt = graph.package(graph.find("fmt").unwrap());
    assert!(fmt.is_standard_library());
    let config = graph.package(graph.find("example.com/app/internal/config").unwrap());
    assert!(config.is_internal());
    assert!(!config.is_standard_library());
}

#[test]
fn test_walk_assigns_ids_in_preorder() {
    let graph = SnapshotResolver::new(FIXTURE).resolve("example.com/app").unwrap();
    let mut registry = VisitRegistry::new();
    let mut trace = Trace::default();
    Walker::new(&graph, WalkPolicy::default())
        .walk_with(&mut trace, &mut registry)
        .unwrap();

    assert_eq!(
        registry.paths(),
        vec![
            "example.com/app",
            "example.com/app/internal/config",
            "os",
            "errors",
            "io",
            "fmt",
            "example.com/app/server",
            "github.com/pkg/log",
        ]
    );
    // 8 first visits plus every revisit leaf
    assert_eq!(trace.0.len(), 17);
    assert_eq!(trace.0.last().unwrap(), &("io".to_string(), 4, 3));
}

#[test]
fn test_walk_subpackage_as_root() {
    let graph = SnapshotResolver::new(FIXTURE).resolve("github.com/pkg/log").unwrap();
    let mut registry = VisitRegistry::new();
    Walker::new(&graph, WalkPolicy::default())
        .walk_with(&mut Trace::default(), &mut registry)
        .unwrap();

    // Only what log reaches gets an id
    assert_eq!(registry.paths(), vec!["github.com/pkg/log", "fmt", "errors", "io", "os"]);
    assert_eq!(registry.get("example.com/app"), None);
}

#[test]
fn test_unknown_package_in_snapshot() {
    let err = SnapshotResolver::new(FIXTURE)
        .resolve("example.com/other")
        .unwrap_err();
    assert!(err.to_string().contains("example.com/other"));
}

#[test]
fn test_go_list_resolver_reports_missing_binary() {
    let err = GoListResolver::new("pkgtree-test-no-such-go")
        .resolve("example.com/app")
        .unwrap_err();
    assert!(err.user_message().contains("pkgtree-test-no-such-go"));
}
