//! End-to-end pipeline test over the in-memory engine: resolve → discover →
//! aggregate → markup → snapshot.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use slnprobe_adapters::{FixedSdkLister, MemoryEngine, ScriptedProject, SolpSolutionGrammar};
use slnprobe_core::application::{
    EvaluationPool, ProjectDiscovery, ProjectEvaluator, ToolchainResolver, collect_markup_files,
};
use slnprobe_core::domain::Snapshot;

const SOLUTION: &str = "\r
Microsoft Visual Studio Solution File, Format Version 12.00\r
# Visual Studio Version 17\r
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"A\\A.csproj\", \"{11111111-1111-1111-1111-111111111111}\"\r
EndProject\r
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"B\", \"B\\B.csproj\", \"{22222222-2222-2222-2222-222222222222}\"\r
EndProject\r
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Solution Items\", \"Solution Items\", \"{33333333-3333-3333-3333-333333333333}\"\r
EndProject\r
Global\r
EndGlobal\r
";

fn write_solution(dir: &std::path::Path) -> PathBuf {
    fs::create_dir_all(dir.join("A")).unwrap();
    fs::create_dir_all(dir.join("B")).unwrap();
    fs::write(dir.join("A/A.csproj"), "<Project/>").unwrap();
    fs::write(dir.join("B/B.csproj"), "<Project/>").unwrap();
    let sln = dir.join("All.sln");
    fs::write(&sln, SOLUTION).unwrap();
    sln
}

#[test]
fn two_project_solution_with_one_markup_file() {
    let dir = tempfile::tempdir().unwrap();
    let sln = write_solution(dir.path());
    let a_path = dir.path().join("A/A.csproj");
    let b_path = dir.path().join("B/B.csproj");

    // Toolchain resolution happens first; the in-memory engine does not
    // consume the context, but the phase ordering matches production.
    let toolchain = ToolchainResolver::new(Box::new(FixedSdkLister::new(
        "8.0.204 [/usr/share/dotnet/sdk]\n",
    )))
    .resolve(None, false)
    .unwrap();
    assert_eq!(toolchain.version, "8.0.204");

    let mut engine = MemoryEngine::new();
    engine.insert(
        &a_path,
        ScriptedProject::new()
            .with_property("TargetPath", dir.path().join("A/bin/A.dll").to_string_lossy())
            .with_property("OutputType", "WinExe")
            .with_property("TargetFramework", "net8.0")
            .with_property("IntermediateOutputPath", r"obj\Debug\net8.0\")
            .with_items("ProjectReference", [r"..\B\B.csproj"])
            .with_items("Xaml", [r"Views\MainWindow.xaml"]),
    );
    engine.insert(
        &b_path,
        ScriptedProject::new()
            .with_property("TargetPath", dir.path().join("B/bin/B.dll").to_string_lossy())
            .with_property("OutputType", "Library")
            .with_property("TargetFramework", "net8.0"),
    );

    let references = ProjectDiscovery::new(Box::new(SolpSolutionGrammar::new()))
        .discover(&sln)
        .unwrap();
    // The solution-folder entry must not survive discovery.
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].name, "A");

    let evaluator = ProjectEvaluator::new(Arc::new(engine));
    let outcome = EvaluationPool::new(Some(2))
        .evaluate_all(&evaluator, &references)
        .unwrap();
    assert!(outcome.failures.is_empty());

    let files = collect_markup_files(&outcome.records);
    let snapshot = Snapshot::new(&sln, outcome.records, files);

    assert_eq!(snapshot.projects.len(), 2);
    assert_eq!(snapshot.files.len(), 1);
    assert_eq!(snapshot.files[0].project_path, a_path);
    assert_eq!(
        snapshot.files[0].source_path,
        dir.path().join("A/Views/MainWindow.xaml")
    );

    // Reference resolution is anchored at A's directory.
    assert_eq!(
        snapshot.projects[0].project_references,
        vec![dir.path().join("A/../B/B.csproj")]
    );
    // Relative intermediate output is re-rooted under A.
    assert_eq!(
        snapshot.projects[0].intermediate_output_path,
        dir.path().join("A/obj/Debug/net8.0/previewer/references")
    );

    // The emitted document survives a round trip.
    let json = snapshot.to_json_pretty().unwrap();
    let parsed: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn failing_project_is_excluded_from_projects_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let sln = write_solution(dir.path());
    let a_path = dir.path().join("A/A.csproj");
    let b_path = dir.path().join("B/B.csproj");

    let mut engine = MemoryEngine::new();
    engine.insert(
        &b_path,
        ScriptedProject::new().with_property("OutputType", "Library"),
    );
    engine.fail(&a_path);

    let references = ProjectDiscovery::new(Box::new(SolpSolutionGrammar::new()))
        .discover(&sln)
        .unwrap();
    let evaluator = ProjectEvaluator::new(Arc::new(engine));
    let outcome = EvaluationPool::new(None)
        .evaluate_all(&evaluator, &references)
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "B");
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].project, "A");

    let files = collect_markup_files(&outcome.records);
    assert!(files.is_empty());
}
