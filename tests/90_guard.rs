mod common;

use anyhow::Result;
use litea_client::nav::{Decision, Guard, Route};

// `/auth/status` is the one endpoint that answers bare, without the
// `data` envelope.
fn auth_enabled_body(enabled: bool) -> String {
    serde_json::json!({"auth_enabled": enabled}).to_string()
}

#[tokio::test]
async fn anonymous_visitor_is_sent_to_login() -> Result<()> {
    let mut env = common::env().await?;
    env.server
        .mock("GET", "/api/auth/status")
        .with_status(200)
        .with_body(auth_enabled_body(true))
        .create_async()
        .await;

    let guard = Guard::new(env.auth());
    assert_eq!(guard.before_each(&Route::home()).await, Decision::RedirectToLogin);
    // The login page itself stays reachable.
    assert_eq!(guard.before_each(&Route::login()).await, Decision::Proceed);

    Ok(())
}

#[tokio::test]
async fn authenticated_visitor_proceeds_and_skips_login() -> Result<()> {
    let mut env = common::env().await?;
    env.server
        .mock("GET", "/api/auth/status")
        .with_status(200)
        .with_body(auth_enabled_body(true))
        .create_async()
        .await;
    env.server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"access_token": "tok", "token_type": "bearer", "username": "alice"}"#)
        .create_async()
        .await;

    let auth = env.auth();
    auth.login("alice", "x").await?;

    let guard = Guard::new(auth);
    assert_eq!(guard.before_each(&Route::home()).await, Decision::Proceed);
    assert_eq!(guard.before_each(&Route::login()).await, Decision::RedirectToHome);

    Ok(())
}

#[tokio::test]
async fn disabled_auth_opens_everything_except_login() -> Result<()> {
    let mut env = common::env().await?;
    let probe = env
        .server
        .mock("GET", "/api/auth/status")
        .with_status(200)
        .with_body(auth_enabled_body(false))
        .expect(1)
        .create_async()
        .await;

    let guard = Guard::new(env.auth());
    assert_eq!(guard.before_each(&Route::home()).await, Decision::Proceed);
    assert_eq!(
        guard.before_each(&Route::new("documents", true)).await,
        Decision::Proceed
    );
    assert_eq!(guard.before_each(&Route::login()).await, Decision::RedirectToHome);
    // The capability is cached after the first probe.
    probe.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn unreachable_probe_fails_closed() -> Result<()> {
    let env = common::env().await?;

    // No status mock: the probe comes back 501 and the guard must treat
    // auth as required.
    let guard = Guard::new(env.auth());
    assert_eq!(guard.before_each(&Route::home()).await, Decision::RedirectToLogin);

    Ok(())
}
