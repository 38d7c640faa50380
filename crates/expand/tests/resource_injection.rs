//! End-to-end resource injection: settings file -> configuration ->
//! resolved mapping -> expansion into a build output directory.

use denv_config::ProjectTree;
use denv_env::{DotEnv, FakeEnvProvider, DotEnvResolver};
use denv_expand::ResourceExpander;
use std::path::Path;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, contents).expect("write fixture file");
}

#[test]
fn replaces_placeholders_in_resource_files() {
    let project = tempfile::tempdir().expect("create project dir");
    write(&project.path().join("config/.env.example"), "FOO=foo\nBAR=bar\n");
    write(
        &project.path().join("build.properties"),
        "dotenv.filename=config/.env.example\n",
    );
    write(
        &project.path().join("src/main/resources/test.yml"),
        "FOO=${BAR}\nBAR=${FOO}\n",
    );
    write(
        &project.path().join("src/main/resources/test.properties"),
        "FOO=${FOO}\nBAR=${BAR}\n",
    );

    let tree = ProjectTree::load(project.path()).expect("load tree");
    let provider = FakeEnvProvider::new();
    let mut resolver = DotEnvResolver::new(&tree, &provider);
    let mapping = resolver.resolve(tree.root()).expect("resolve mapping");
    let configuration = resolver.configuration(tree.root());

    let out = project.path().join("build/resources/main");
    let expander =
        ResourceExpander::new(&mapping, &configuration.resources_pattern).expect("compile pattern");
    let report = expander
        .expand_roots(&[project.path().join("src/main/resources")], &out)
        .expect("expand resources");

    assert_eq!(report.expanded, 2);
    assert_eq!(
        std::fs::read_to_string(out.join("test.yml")).expect("read output"),
        "FOO=bar\nBAR=foo\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("test.properties")).expect("read output"),
        "FOO=foo\nBAR=bar\n"
    );
}

#[test]
fn replaces_placeholders_only_in_files_matching_the_pattern() {
    let project = tempfile::tempdir().expect("create project dir");
    write(&project.path().join(".env.example"), "FOO=foo\nBAR=bar\n");
    write(
        &project.path().join("build.properties"),
        "dotenv.filename=.env.example\ndotenv.resources.pattern=**/*.properties\n",
    );
    write(
        &project.path().join("src/main/resources/test.yml"),
        "FOO=${BAR}\nBAR=${FOO}\n",
    );
    write(
        &project.path().join("src/main/resources/test.properties"),
        "FOO=${FOO}\nBAR=${BAR}\n",
    );

    let tree = ProjectTree::load(project.path()).expect("load tree");
    let provider = FakeEnvProvider::new();
    let mut resolver = DotEnvResolver::new(&tree, &provider);
    let mapping = resolver.resolve(tree.root()).expect("resolve mapping");
    let configuration = resolver.configuration(tree.root());
    assert_eq!(configuration.resources_pattern, "**/*.properties");

    let out = project.path().join("build/resources/main");
    let expander =
        ResourceExpander::new(&mapping, &configuration.resources_pattern).expect("compile pattern");
    expander
        .expand_roots(&[project.path().join("src/main/resources")], &out)
        .expect("expand resources");

    assert_eq!(
        std::fs::read_to_string(out.join("test.yml")).expect("read output"),
        "FOO=${BAR}\nBAR=${FOO}\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("test.properties")).expect("read output"),
        "FOO=foo\nBAR=bar\n"
    );
}

#[test]
fn merges_resources_from_multiple_source_roots() {
    let project = tempfile::tempdir().expect("create project dir");
    write(&project.path().join(".env.example"), "FOO=foo\nBAR=bar\n");
    write(
        &project.path().join("build.properties"),
        "dotenv.filename=.env.example\ndotenv.resources.pattern=**/*.properties\n",
    );
    write(
        &project.path().join("src/main/resources/test.yml"),
        "FOO=${BAR}\nBAR=${FOO}\n",
    );
    write(
        &project.path().join("config/foobar/test.properties"),
        "FOO=${FOO}\nBAR=${BAR}\n",
    );

    let tree = ProjectTree::load(project.path()).expect("load tree");
    let provider = FakeEnvProvider::new();
    let dotenv = DotEnv::apply(&tree, tree.root(), &provider).expect("apply at root");
    let mapping = dotenv.mapping(tree.root()).expect("root mapping");
    let resolver = DotEnvResolver::new(&tree, &provider);
    let configuration = resolver.configuration(tree.root());

    let out = project.path().join("build/resources/main");
    let expander =
        ResourceExpander::new(mapping, &configuration.resources_pattern).expect("compile pattern");
    let report = expander
        .expand_roots(
            &[
                project.path().join("src/main/resources"),
                project.path().join("config/foobar"),
            ],
            &out,
        )
        .expect("expand resources");

    assert_eq!(report.expanded, 1);
    assert_eq!(report.copied, 1);
    assert_eq!(
        std::fs::read_to_string(out.join("test.yml")).expect("read output"),
        "FOO=${BAR}\nBAR=${FOO}\n"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("test.properties")).expect("read output"),
        "FOO=foo\nBAR=bar\n"
    );
}
