use e2e::test_server::TestServer;

const PAGES: [&str; 13] = [
    "/",
    "/selectRole",
    "/login",
    "/signup/student",
    "/signup/mentor",
    "/signup/company",
    "/forgotPassword",
    "/resetPassword?token=abc&email=a%40b.co",
    "/student/dashboard",
    "/student/internships",
    "/student/mentorships",
    "/student/sessions",
    "/mentor/dashboard",
];

#[tokio::test]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("InternWay") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
async fn test_every_route_renders() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for path in PAGES {
        let response = reqwest::get(server.page_url(path))
            .await
            .unwrap_or_else(|e| panic!("Failed to fetch {path}: {e}"));
        assert_eq!(response.status(), 200, "{path} should return 200 OK");
    }
}

#[tokio::test]
async fn test_landing_defaults_to_english_copy() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("Find Your Perfect Internship Match"));
    assert!(body.contains("/selectRole"), "Signup CTA should link to role selection");
}
