// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ENTRYPOINT` text resolved and executed.

use similar_asserts::assert_eq;

use crate::prelude::*;

#[test]
fn exec_form_runs_program_directly() {
    let out = run_entrypoint(r#"["echo", "hello  world"]"#);
    out.passes();
    assert_eq!(out.stdout, "hello  world\n");
}

#[test]
fn exec_form_does_not_expand_variables() {
    let out = run_entrypoint(r#"["echo", "$HOME"]"#);
    out.passes();
    assert_eq!(out.stdout, "$HOME\n");
}

#[test]
fn shell_form_runs_under_sh() {
    let out = run_entrypoint("echo hi&&echo there");
    out.passes();
    assert_eq!(out.stdout, "hi\nthere\n");
}

#[test]
fn shell_form_keeps_quoted_whitespace() {
    let out = run_entrypoint(r#"echo "a  b"    c"#);
    out.passes();
    assert_eq!(out.stdout, "a  b c\n");
}

#[test]
fn shell_form_sees_environment() {
    let argv = resolve_entrypoint("echo $GREETING").unwrap();
    let out = run(Executor::new(argv).env("GREETING", "from kiln"));
    out.passes();
    assert_eq!(out.stdout, "from kiln\n");
}

#[test]
fn pipeline_in_shell_form() {
    let out = run_entrypoint("printf 'b\\na\\n'|sort");
    out.passes();
    assert_eq!(out.stdout, "a\nb\n");
}

#[test]
fn failing_entrypoint_reports_exit_code() {
    let out = run_entrypoint(r#"["sh", "-c", "echo oops >&2; exit 3"]"#);
    assert_eq!(out.exit_code(), Some(3));
    assert_eq!(out.stderr, "oops\nCommand exited with 3\n");
    assert_eq!(out.stdout, "");
}

#[test]
fn failing_shell_form() {
    let out = run_entrypoint("echo partial; exit 4");
    assert_eq!(out.exit_code(), Some(4));
    assert_eq!(out.stdout, "partial\n");
    assert_eq!(out.stderr, "Command exited with 4\n");
}

#[test]
fn unterminated_quote_is_rejected_before_running() {
    let input = r#"echo "never closed"#;
    let err = resolve_entrypoint(input).unwrap_err();
    assert!(matches!(err, FormError::Split(_)));
    assert!(err.to_string().contains("missing closing quote"), "{err}");
    assert!(err.diagnostic(input).contains("line 1"), "{}", err.diagnostic(input));
}

#[test]
fn stage_records_both_directives() {
    let mut stage: Vec<Directive> = Vec::new();
    EntrypointDirective::new(r#"["/bin/echo"]"#).unwrap().update(&mut stage);
    CmdDirective::new("hello from cmd").unwrap().update(&mut stage);

    let argv: Vec<String> = stage.iter().flat_map(|d| d.argv().iter().cloned()).collect();
    let out = run(Executor::new(argv));
    out.passes();
    assert_eq!(out.stdout, "/bin/sh -c hello from cmd\n");

    let json = serde_json::to_string(&stage).unwrap();
    assert_eq!(
        json,
        r#"[{"directive":"ENTRYPOINT","args":"[\"/bin/echo\"]","entrypoint":["/bin/echo"]},{"directive":"CMD","args":"hello from cmd","cmd":["/bin/sh","-c","hello from cmd"]}]"#
    );
}
