use pkgtree::{
    output::render_to_string, DependencyTree, OutputFormat, PackageResolver, PkgTreeError,
    SnapshotResolver, WalkPolicy,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/app_deps.json");

const FULL_TREE: &str = "\
example.com/app #=0
  example.com/app/internal/config #=1
    os #=2
      errors #=3
      io #=4
        errors #=3
  fmt #=5
    errors #=3
    io #=4
    os #=2
  os #=2
  example.com/app/server #=6
    example.com/app/internal/config #=1
    fmt #=5
    github.com/pkg/log #=7
      fmt #=5
      io #=4
";

fn render(policy: WalkPolicy, format: OutputFormat) -> Result<String, PkgTreeError> {
    let graph = SnapshotResolver::new(FIXTURE).resolve("example.com/app")?;
    render_to_string(&graph, policy, format, false)
}

#[test]
fn test_full_text_tree() {
    let output = render(WalkPolicy::default(), OutputFormat::Text).unwrap();
    assert_eq!(output, FULL_TREE);
}

#[test]
fn test_text_tree_without_std_and_internal() {
    let policy = WalkPolicy {
        ignore_std_pkg: true,
        ignore_internal_pkg: true,
        ..Default::default()
    };
    let output = render(policy, OutputFormat::Text).unwrap();
    assert_eq!(
        output,
        "example.com/app #=0\n  example.com/app/server #=6\n    github.com/pkg/log #=7\n"
    );
}

#[test]
fn test_json_tree_without_std_and_ids() {
    let policy = WalkPolicy {
        ignore_std_pkg: true,
        disable_show_id: true,
        ..Default::default()
    };
    let output = render(policy, OutputFormat::Json).unwrap();
    let expected = r#"{
  "pkg": "example.com/app",
  "dependencies": [
    {
      "pkg": "example.com/app/internal/config",
      "dependencies": []
    },
    {
      "pkg": "example.com/app/server",
      "dependencies": [
        {
          "pkg": "example.com/app/internal/config",
          "dependencies": []
        },
        {
          "pkg": "github.com/pkg/log",
          "dependencies": []
        }
      ]
    }
  ]
}
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_json_mirrors_text_visits() {
    let output = render(WalkPolicy::default(), OutputFormat::Json).unwrap();
    let tree: DependencyTree = serde_json::from_str(&output).unwrap();

    let from_json: Vec<String> = tree
        .iter()
        .map(|node| format!("{} #={}", node.pkg, node.id.unwrap()))
        .collect();
    let from_text: Vec<String> = FULL_TREE
        .lines()
        .map(|line| line.trim_start().to_string())
        .collect();

    assert_eq!(from_json, from_text);
}

#[test]
fn test_rendering_twice_is_identical() {
    for format in [OutputFormat::Text, OutputFormat::Json] {
        let first = render(WalkPolicy::default(), format).unwrap();
        let second = render(WalkPolicy::default(), format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_std_root_in_json_is_not_found() {
    let graph = SnapshotResolver::new(FIXTURE).resolve("fmt").unwrap();
    let policy = WalkPolicy {
        ignore_std_pkg: true,
        ..Default::default()
    };

    let err = render_to_string(&graph, policy, OutputFormat::Json, false).unwrap_err();
    assert!(matches!(err, PkgTreeError::NotFound { .. }));

    let text = render_to_string(&graph, policy, OutputFormat::Text, false).unwrap();
    assert!(text.is_empty());
}
