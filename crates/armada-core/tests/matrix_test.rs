use armada_core::{BaseFlavor, BuildMatrix, MatrixConfig};

fn default_matrix() -> BuildMatrix {
    BuildMatrix::from_config(&MatrixConfig::default()).unwrap()
}

#[test]
fn default_matrix_enumerates_all_variants() {
    let matrix = default_matrix();

    // 5 versions x 3 flavors + latest
    assert_eq!(matrix.variants().len(), 16);

    let names: Vec<&str> = matrix.variants().iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"latest"));
    assert!(names.contains(&"python3.11"));
    assert!(names.contains(&"python3.11-slim"));
    assert!(names.contains(&"python3.11-alpine"));
    assert!(names.contains(&"python3.7-alpine"));
}

#[test]
fn latest_is_first_in_publish_order() {
    let matrix = default_matrix();
    assert_eq!(matrix.variants()[0].name, "latest");
}

#[test]
fn latest_aliases_python311_dockerfile() {
    let matrix = default_matrix();
    let latest = matrix.resolve("latest").unwrap();

    assert_eq!(latest.dockerfile_name(), "python3.11.dockerfile");
    assert_eq!(latest.python_version, "3.11");
    assert_eq!(latest.flavor, BaseFlavor::Full);
    // The alias keeps its own published tag
    assert_eq!(latest.image_ref("acme/base"), "acme/base:latest");
}

#[test]
fn non_alias_variants_use_their_own_dockerfile() {
    let matrix = default_matrix();
    let slim = matrix.resolve("python3.9-slim").unwrap();

    assert_eq!(slim.dockerfile_name(), "python3.9-slim.dockerfile");
    assert_eq!(slim.base_image(), "python:3.9-slim");
    assert_eq!(slim.flavor, BaseFlavor::Slim);
}

#[test]
fn alpine_variants_use_alpine_base() {
    let matrix = default_matrix();
    let alpine = matrix.resolve("python3.10-alpine").unwrap();

    assert_eq!(alpine.base_image(), "python:3.10-alpine");
    assert!(alpine.flavor.is_alpine());
}

#[test]
fn resolve_unknown_name_lists_known_variants() {
    let matrix = default_matrix();
    let err = matrix.resolve("python2.7").unwrap_err().to_string();

    assert!(err.contains("unknown image 'python2.7'"));
    assert!(err.contains("python3.11"));
}

#[test]
fn dangling_latest_alias_is_rejected() {
    let config = MatrixConfig {
        python_versions: vec!["3.11".to_owned()],
        flavors: vec!["full".to_owned()],
        latest: "python3.12".to_owned(),
    };

    let err = BuildMatrix::from_config(&config).unwrap_err().to_string();
    assert!(err.contains("'latest' aliases 'python3.12'"));
}

#[test]
fn duplicate_flavor_is_rejected() {
    let config = MatrixConfig {
        python_versions: vec!["3.11".to_owned()],
        flavors: vec!["slim".to_owned(), "slim".to_owned()],
        latest: "python3.11-slim".to_owned(),
    };

    let err = BuildMatrix::from_config(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate image name"));
}

#[test]
fn unknown_flavor_is_rejected() {
    let config = MatrixConfig {
        python_versions: vec!["3.11".to_owned()],
        flavors: vec!["distroless".to_owned()],
        latest: "python3.11".to_owned(),
    };

    let err = BuildMatrix::from_config(&config).unwrap_err().to_string();
    assert!(err.contains("unknown base flavor 'distroless'"));
}

#[test]
fn dockerfile_names_are_deduplicated() {
    let matrix = default_matrix();
    let files = matrix.dockerfile_names();

    // latest shares python3.11.dockerfile, so one fewer file than variants
    assert_eq!(files.len(), matrix.variants().len() - 1);
    assert_eq!(
        files.iter().filter(|f| *f == "python3.11.dockerfile").count(),
        1
    );
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resolve_never_panics(name in "\\PC*") {
            let matrix = default_matrix();
            let _ = matrix.resolve(&name);
        }

        #[test]
        fn every_enumerated_name_resolves(index in 0usize..16) {
            let matrix = default_matrix();
            let name = matrix.variants()[index].name.clone();
            prop_assert!(matrix.resolve(&name).is_ok());
        }
    }
}
