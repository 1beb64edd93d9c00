mod common;
use common::cli::{CircWorkspace, run_circ};

fn setup_loan(workspace: &CircWorkspace) {
    run_circ(workspace, ["init"], "init");
    run_circ(
        workspace,
        ["add-member", "Ann", "1 Oak St", "555-0100"],
        "add_m1",
    );
    run_circ(
        workspace,
        ["add-member", "Bob", "2 Elm St", "555-0101"],
        "add_m2",
    );
    run_circ(workspace, ["add-book", "Dune", "Herbert", "b1"], "add_book");
    let output = run_circ(workspace, ["issue", "m-1", "b1"], "issue");
    assert!(output.status.success(), "issue failed: {}", output.stderr);
}

#[test]
fn test_hold_blocks_return_until_processed() {
    let workspace = CircWorkspace::new();
    setup_loan(&workspace);

    let output = run_circ(
        &workspace,
        ["hold", "place", "m-2", "b1", "--days", "7"],
        "place_hold",
    );
    assert!(output.status.success(), "place failed: {}", output.stderr);

    // Plain return refused while the hold is pending.
    let output = run_circ(&workspace, ["return", "b1"], "return_held");
    assert!(!output.status.success());
    assert!(output.stderr.contains("has a hold"), "stderr: {}", output.stderr);

    // Renewal refused too, even for the current borrower.
    let output = run_circ(&workspace, ["renew", "b1", "m-1"], "renew_held");
    assert!(!output.status.success());
    assert!(output.stderr.contains("has a hold"), "stderr: {}", output.stderr);

    // Processing the hold hands the book to the holder.
    let output = run_circ(&workspace, ["hold", "process", "b1"], "process_hold");
    assert!(output.status.success(), "process failed: {}", output.stderr);
    assert!(output.stdout.contains("m-2"), "stdout: {}", output.stdout);

    let output = run_circ(&workspace, ["books"], "books");
    assert!(output.stdout.contains("out to m-2"), "stdout: {}", output.stdout);
}

#[test]
fn test_removed_hold_is_never_served() {
    let workspace = CircWorkspace::new();
    setup_loan(&workspace);
    run_circ(
        &workspace,
        ["add-member", "Cat", "3 Fir St", "555-0102"],
        "add_m3",
    );

    run_circ(&workspace, ["hold", "place", "m-2", "b1"], "hold_m2");
    run_circ(&workspace, ["hold", "place", "m-3", "b1"], "hold_m3");
    let output = run_circ(&workspace, ["hold", "remove", "m-2", "b1"], "remove_m2");
    assert!(output.status.success(), "remove failed: {}", output.stderr);

    let output = run_circ(&workspace, ["hold", "process", "b1"], "process");
    assert!(output.status.success());
    assert!(
        output.stdout.contains("m-3") && !output.stdout.contains("m-2"),
        "stdout: {}",
        output.stdout
    );
}

#[test]
fn test_hold_on_available_book_refused() {
    let workspace = CircWorkspace::new();
    run_circ(&workspace, ["init"], "init");
    run_circ(
        &workspace,
        ["add-member", "Ann", "1 Oak St", "555-0100"],
        "add_m1",
    );
    run_circ(&workspace, ["add-book", "Dune", "Herbert", "b1"], "add_book");

    let output = run_circ(&workspace, ["hold", "place", "m-1", "b1"], "hold_available");
    assert!(!output.status.success());
    assert!(
        output.stderr.contains("not checked out"),
        "stderr: {}",
        output.stderr
    );
}

#[test]
fn test_process_hold_with_empty_queue() {
    let workspace = CircWorkspace::new();
    setup_loan(&workspace);

    let output = run_circ(&workspace, ["hold", "process", "b1"], "process_empty");
    assert!(output.status.success(), "process failed: {}", output.stderr);
    assert!(
        output.stdout.contains("No valid holds left"),
        "stdout: {}",
        output.stdout
    );
}
