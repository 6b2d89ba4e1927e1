use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_login_page_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/login"))
        .expect("Failed to navigate");

    assert!(page.find_element("input[name='email']").is_ok(), "Email input should exist");
    assert!(page.find_element("input[name='password']").is_ok(), "Password input should exist");
    assert!(page.find_element("button[type='submit']").is_ok(), "Submit button should exist");
    assert_eq!(page.count(".role_tab").expect("count role tabs"), 3);
}

#[tokio::test]
async fn test_student_signup_has_cv_picker() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/signup/student"))
        .expect("Failed to navigate");

    let accept = page
        .attribute("input#cvFile", "accept")
        .expect("CV input should exist");
    assert_eq!(accept.as_deref(), Some(".pdf,.doc,.docx"));
    assert!(page.find_element("input[name='confirmPassword']").is_ok());
}

#[tokio::test]
async fn test_company_signup_fields() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/signup/company"))
        .expect("Failed to navigate");

    for name in ["email", "companyName", "industry", "location", "webSite", "address"] {
        assert!(
            page.find_element(&format!("input[name='{name}']")).is_ok(),
            "{name} input should exist"
        );
    }
    assert!(page.find_element("textarea[name='description']").is_ok());
}

#[tokio::test]
async fn test_reset_page_without_link_disables_submit() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&server.page_url("/resetPassword"))
        .expect("Failed to navigate");
    assert!(page.url().expect("page url").contains("/resetPassword"));

    let disabled = page
        .attribute("button[type='submit']", "disabled")
        .expect("Submit button should exist");
    assert!(disabled.is_some(), "Submit should be disabled without a token");
}
