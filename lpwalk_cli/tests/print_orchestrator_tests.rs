//! Print orchestrator scenarios against the mock spooler

use lpwalk_cli::orchestrators::{PrintOrchestrator, PrintOutcome, PrintRequest};
use lpwalk_core::{Error, NonDefaultKeyword, TraversalOptions};
use lpwalk_test_utils::{MockPrompt, MockSpooler, SpoolerCall, TestTree};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const STAPLES: &str = "Staples/Stapling:*None left right";

fn spooler() -> MockSpooler {
    MockSpooler::new()
        .with_printers(["Office", "Lab"])
        .with_options("Office", [STAPLES])
}

fn request(resource: &Path) -> PrintRequest {
    PrintRequest {
        resource: resource.to_path_buf(),
        printer: Some("Office".to_string()),
        ..Default::default()
    }
}

fn run(spooler: &MockSpooler, request: &PrintRequest) -> lpwalk_core::Result<PrintOutcome> {
    let prompt = MockPrompt::refusing();
    let policy = NonDefaultKeyword::top_left();
    PrintOrchestrator::new(spooler, &prompt, &policy, "lp")
        .with_traversal(TraversalOptions::new().with_sort_by_name(true))
        .run(request)
}

fn operands(files: &[OsString]) -> Vec<PathBuf> {
    files.iter().map(PathBuf::from).collect()
}

#[test]
fn test_dry_run_never_submits() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").file("b.txt").build();
    let request = PrintRequest {
        dry_run: true,
        ..request(tree.path())
    };

    match run(&spooler, &request).unwrap() {
        PrintOutcome::DryRun { printer, command } => {
            assert_eq!(printer, "Office");
            assert_eq!(
                operands(command.files()),
                vec![tree.path().join("a.txt"), tree.path().join("b.txt")]
            );
        }
        other => panic!("Expected DryRun, got {other:?}"),
    }

    assert!(spooler.submitted().is_empty());
}

#[test]
fn test_submit_sends_one_command() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").build();

    let outcome = run(&spooler, &request(tree.path())).unwrap();

    assert!(matches!(outcome, PrintOutcome::Submitted { .. }));
    assert_eq!(
        spooler.calls(),
        vec![
            SpoolerCall::ListPrinters,
            SpoolerCall::ListOptions("Office".to_string()),
            SpoolerCall::Submit(spooler.submitted()[0].clone()),
        ]
    );
}

#[test]
fn test_hidden_and_pattern_scenario() {
    let spooler = spooler();
    let tree = TestTree::new()
        .file("a.txt")
        .file(".hidden/x.txt")
        .file("b.log")
        .build();
    let request = PrintRequest {
        pattern: Some(r"\.txt$".to_string()),
        dry_run: true,
        ..request(tree.path())
    };

    let PrintOutcome::DryRun { command, .. } = run(&spooler, &request).unwrap() else {
        panic!("Expected DryRun");
    };
    assert_eq!(operands(command.files()), vec![tree.path().join("a.txt")]);

    let request = PrintRequest {
        include_hidden: true,
        ..request
    };
    let PrintOutcome::DryRun { command, .. } = run(&spooler, &request).unwrap() else {
        panic!("Expected DryRun");
    };
    assert_eq!(
        operands(command.files()),
        vec![tree.path().join("a.txt"), tree.path().join(".hidden/x.txt")]
    );
}

#[test]
fn test_empty_directory_dry_run_reports_nothing() {
    let spooler = spooler();
    let tree = TestTree::new().dir("sub").build();
    let request = PrintRequest {
        dry_run: true,
        ..request(tree.path())
    };

    let outcome = run(&spooler, &request).unwrap();

    assert!(matches!(outcome, PrintOutcome::NothingToPrint { .. }));
    // Stapling is still negotiated so capability problems surface
    assert!(spooler
        .calls()
        .contains(&SpoolerCall::ListOptions("Office".to_string())));
}

#[test]
fn test_empty_directory_submit_is_error_without_submission() {
    let spooler = spooler();
    let tree = TestTree::new().file(".hidden").build();

    let result = run(&spooler, &request(tree.path()));

    assert!(matches!(result, Err(Error::NoMatchingFiles { .. })));
    assert!(spooler.submitted().is_empty());
}

#[test]
fn test_single_file_ignores_pattern_and_hidden_rules() {
    let spooler = spooler();
    let tree = TestTree::new().file(".secret.pdf").build();
    let file = tree.path().join(".secret.pdf");
    let request = PrintRequest {
        pattern: Some("(".to_string()),
        dry_run: true,
        ..request(&file)
    };

    let PrintOutcome::DryRun { command, .. } = run(&spooler, &request).unwrap() else {
        panic!("Expected DryRun");
    };
    assert_eq!(operands(command.files()), vec![file]);
}

#[test]
fn test_invalid_pattern_on_directory() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").build();
    let request = PrintRequest {
        pattern: Some("(".to_string()),
        dry_run: true,
        ..request(tree.path())
    };

    assert!(matches!(
        run(&spooler, &request),
        Err(Error::InvalidPattern { .. })
    ));
}

#[test]
fn test_missing_resource() {
    let spooler = spooler();
    let tree = TestTree::new().build();

    let result = run(&spooler, &request(&tree.path().join("missing")));

    assert!(matches!(result, Err(Error::ResourceNotFound { .. })));
}

#[test]
fn test_staple_option_reaches_command() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").build();
    let request = PrintRequest {
        staple: true,
        ..request(tree.path())
    };

    run(&spooler, &request).unwrap();

    let submitted = spooler.submitted();
    assert_eq!(submitted.len(), 1);
    assert!(submitted[0].options().contains(&std::ffi::OsStr::new("Staples=left")));
}

#[test]
fn test_staple_unsupported_stops_before_submission() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").build();
    let request = PrintRequest {
        printer: Some("Lab".to_string()),
        staple: true,
        ..request(tree.path())
    };

    let result = run(&spooler, &request);

    assert!(matches!(result, Err(Error::StaplingUnsupported { .. })));
    assert!(spooler.submitted().is_empty());
}

#[test]
fn test_submission_failure_is_an_outcome() {
    let spooler = spooler().failing_submission("'lp' exited with exit status: 1");
    let tree = TestTree::new().file("a.txt").build();

    let outcome = run(&spooler, &request(tree.path())).unwrap();

    match outcome {
        PrintOutcome::SubmissionFailed { error, .. } => {
            assert_eq!(
                error.to_string(),
                "Printing failed: 'lp' exited with exit status: 1"
            );
        }
        other => panic!("Expected SubmissionFailed, got {other:?}"),
    }
}

#[test]
fn test_prompt_chooses_printer() {
    let spooler = spooler();
    let tree = TestTree::new().file("a.txt").build();
    let prompt = MockPrompt::choosing(1);
    let policy = NonDefaultKeyword::top_left();
    let request = PrintRequest {
        printer: None,
        dry_run: true,
        ..request(tree.path())
    };

    let outcome = PrintOrchestrator::new(&spooler, &prompt, &policy, "lp")
        .run(&request)
        .unwrap();

    assert!(matches!(outcome, PrintOutcome::DryRun { ref printer, .. } if printer == "Lab"));
    assert_eq!(prompt.shown(), vec![vec!["Office".to_string(), "Lab".to_string()]]);
}
