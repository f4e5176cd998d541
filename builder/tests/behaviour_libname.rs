//! Behaviour-driven tests for shared library naming.
//!
//! Scenarios follow the rstest-bdd v0.5.0 mutable world pattern.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use shlib_builder::error::BuildError;
use shlib_builder::libname::{LibName, derive_lib_name};
use shlib_builder::naming::{LibraryNaming, TargetTriple};
use shlib_builder::package::Package;

// ---------------------------------------------------------------------------
// World types
// ---------------------------------------------------------------------------

#[derive(Default)]
struct NamingWorld {
    args: Vec<String>,
    packages: Vec<Package>,
    outcome: Option<Result<LibName, BuildError>>,
    file_name: Option<String>,
}

impl NamingWorld {
    fn derive(&self) -> Result<LibName, BuildError> {
        derive_lib_name(self.args.as_slice(), &self.packages)
    }

    fn error(&self) -> &BuildError {
        match self.outcome.as_ref().expect("name derived") {
            Err(err) => err,
            Ok(name) => panic!("expected naming to fail but got {name}"),
        }
    }
}

#[fixture]
fn world() -> NamingWorld {
    NamingWorld::default()
}

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

#[given("the command-line patterns \"{patterns}\"")]
fn given_patterns(world: &mut NamingWorld, patterns: String) {
    world.args = patterns.split_whitespace().map(str::to_owned).collect();
}

#[given("no command-line patterns")]
fn given_no_patterns(world: &mut NamingWorld) {
    world.args.clear();
}

#[given("the resolved packages \"{paths}\"")]
fn given_packages(world: &mut NamingWorld, paths: String) {
    world.packages = paths.split_whitespace().map(Package::new).collect();
}

#[given("no resolved packages")]
fn given_no_packages(world: &mut NamingWorld) {
    world.packages.clear();
}

#[when("the shared library name is derived")]
fn when_name_derived(world: &mut NamingWorld) {
    world.outcome = Some(world.derive());
}

#[when("the shared library file name is composed for target \"{triple}\"")]
fn when_file_name_composed(world: &mut NamingWorld, triple: String) {
    let target = TargetTriple::try_from(triple).expect("test triple");
    let name = world.derive().expect("derivable name");
    world.file_name = Some(LibraryNaming::for_target(&target).file_name(&name));
}

#[then("the name is \"{expected}\"")]
fn then_name_is(world: &mut NamingWorld, expected: String) {
    match world.outcome.as_ref().expect("name derived") {
        Ok(name) => assert_eq!(name.as_str(), expected),
        Err(err) => panic!("expected a name but naming failed: {err}"),
    }
}

#[then("the selectors are reported as conflicting")]
fn then_conflicting(world: &mut NamingWorld) {
    let expected_args = world.args.clone();
    assert_eq!(
        world.error(),
        &BuildError::ConflictingSelectors {
            args: expected_args
        }
    );
}

#[then("an empty selection is reported")]
fn then_no_selection(world: &mut NamingWorld) {
    assert_eq!(world.error(), &BuildError::NoSelection);
}

#[then("the file name is \"{expected}\"")]
fn then_file_name_is(world: &mut NamingWorld, expected: String) {
    assert_eq!(world.file_name.as_deref(), Some(expected.as_str()));
}

// ---------------------------------------------------------------------------
// Scenario bindings
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "A single meta-pattern names the library"
)]
fn scenario_single_meta_pattern(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "Meta-patterns are joined in order"
)]
fn scenario_joined_meta_patterns(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "A single resolved package names the library"
)]
fn scenario_single_package(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "Repeated patterns resolving to one package are deduplicated"
)]
fn scenario_deduplicated_packages(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "Separate patterns keep every package in the name"
)]
fn scenario_separate_packages(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "A local wildcard collapses to the common root"
)]
fn scenario_wildcard_root(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "Meta-patterns cannot be mixed with concrete patterns"
)]
fn scenario_conflicting_selectors(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "Nothing selected cannot be named"
)]
fn scenario_no_selection(world: NamingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_library_naming.feature",
    name = "The file name follows the target platform"
)]
fn scenario_target_file_name(world: NamingWorld) {
    let _ = world;
}
