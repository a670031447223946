use kittest::Queryable;
use sneat_business::{LoginInput, SinkEvent};

use crate::common::TestCtx;

mod common;

/// Tests that the login form is the first page with all expected elements.
#[test]
fn test_login_form_displayed() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("Sneat Admin").is_some(),
        "Sneat Admin heading should be displayed"
    );
    assert!(
        harness.query_by_label("Username or email:").is_some(),
        "Identifier label should be displayed"
    );
    assert!(
        harness.query_by_label("Password:").is_some(),
        "Password label should be displayed"
    );
    assert!(
        harness.query_by_label("Remember me").is_some(),
        "Remember me checkbox should be displayed"
    );
    assert!(
        harness.query_by_label("Sign in").is_some(),
        "Sign in button should be displayed"
    );
}

/// Tests that clicking Sign in hands the typed values to the sink.
#[test]
fn test_sign_in_submits_credentials() {
    let mut ctx = TestCtx::new_app();

    {
        let harness = ctx.harness_mut();
        harness.step();
        harness.state_mut().state.ctx.update::<LoginInput>(|input| {
            input.identifier = "jane.smith@example.com".to_owned();
            input.password = "hunter2".to_owned();
            input.remember_me = true;
        });
        harness.step();

        harness.get_by_label("Sign in").click();
        harness.run();

        assert!(
            harness
                .query_by_label_contains("Login submitted for jane.smith@example.com")
                .is_some(),
            "Submission should be acknowledged"
        );
        assert!(
            harness
                .state()
                .state
                .ctx
                .state::<LoginInput>()
                .password
                .is_empty(),
            "Password should be cleared after submission"
        );
    }

    assert_eq!(
        ctx.sink().events(),
        vec![SinkEvent::Login {
            identifier: "jane.smith@example.com".to_owned(),
            password: "hunter2".to_owned(),
            remember_me: true,
        }]
    );
}

/// Tests that the Show button reveals the password and turns into Hide.
#[test]
fn test_password_visibility_toggle() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();
    assert!(!harness.state().state.ctx.state::<LoginInput>().show_password);

    harness.get_by_label("Show").click();
    harness.run();

    assert!(
        harness.state().state.ctx.state::<LoginInput>().show_password,
        "Password should be visible after clicking Show"
    );
    assert!(
        harness.query_by_label("Hide").is_some(),
        "Toggle should now offer to hide the password"
    );
}
