//! Bundled example suite: a search test and a sign-in test.
//!
//! Useful as a smoke test for the recorder and as a template for new scripts.
use crate::config::GeneratorConfig;
use crate::credentials::{Env, RuntimeCredentials, TestUrl, User};
use crate::model::Sequence;
use crate::script::ScriptBuilder;
use anyhow::{anyhow, Result};

pub const DEMO_SUITE_NAME: &str = "SearchDemoSuite";
pub const DEMO_USER: &str = "demoUser";

const SEARCH_TEXTFIELD: &str = "//input[@title='Search']";
const SEARCH_BUTTON: &str = "//input[@value='Search']";
const USER_FIELD: &str = "id=username";
const PASSWORD_FIELD: &str = "id=password";
const SIGN_IN_BUTTON: &str = "css=button[type=submit]";

fn app_urls() -> TestUrl {
    TestUrl::new()
        .add_url(Env::Lcl, "http://localhost:8080/search")
        .add_url(Env::Dev, "https://dev.search.example.com")
        .add_url(Env::Test, "https://test.search.example.com")
        .add_url(Env::Prod, "https://search.example.com")
}

fn demo_user(runtime: &RuntimeCredentials) -> User {
    User::new(DEMO_USER, Some("pwSetInTheCode"), runtime)
        .add_password(Env::Dev, "devPwSetInCode", runtime)
        .add_password(Env::Prod, "prodPwSetInCode", runtime)
}

/// Build the example suite for `env`, resolving the demo user's password.
pub fn build_demo(
    config: &GeneratorConfig,
    runtime: &RuntimeCredentials,
    env: Env,
) -> Result<Sequence> {
    let urls = app_urls();
    let url = urls
        .url(env)
        .ok_or_else(|| anyhow!("no demo URL configured for env {env}"))?;
    let user = demo_user(runtime);
    let password = user
        .password_for(env)
        .ok_or_else(|| anyhow!("no password for {} in env {env}", user.name()))?;

    let mut script = ScriptBuilder::new(config.clone());
    script.open_suite(DEMO_SUITE_NAME);

    script
        .open_test("Search - recorder")
        .comment_dashed()
        .comment("Search for 'recorder'")
        .open(url)
        .wait_for_text_present("Search")
        .short_pause()
        .highlight_and_type(SEARCH_TEXTFIELD, "recorder")
        .short_pause()
        .comment("Highlight the search button twice.")
        .highlight_twice_and_click(SEARCH_BUTTON)
        .wait_for_text_present("results")
        .assert_text_present("results")
        .comment_dashed()
        .close_test();

    script
        .open_test("Sign in")
        .comment_block("Sign in with the demo account.")
        .open(&format!("{url}/login"))
        .highlight_and_type(USER_FIELD, user.name())
        .type_text(PASSWORD_FIELD, password)
        .highlight_and_click(SIGN_IN_BUTTON)
        .long_pause()
        .highlight_and_assert_text("css=.greeting", &format!("Hello, {}", user.name()))
        .close_test();

    script.close_suite();
    let sequence = script.finish();
    tracing::debug!(env = %env, steps = sequence.len(), "built demo suite");
    Ok(sequence)
}
