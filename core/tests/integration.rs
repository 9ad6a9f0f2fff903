//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! build/parse pair over real HTTP using ureq. Validates that request
//! building and response parsing work end-to-end with the actual server.

use posts_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, PostClient, PostId, PostInput, PostPatch};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.unwrap_or_default();
    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
        HttpMethod::Delete => agent.delete(&req.path).call(),
        HttpMethod::Post => agent.post(&req.path).content_type("application/json").send(body.as_bytes()),
        HttpMethod::Put => agent.put(&req.path).content_type("application/json").send(body.as_bytes()),
        HttpMethod::Patch => agent.patch(&req.path).content_type("application/json").send(body.as_bytes()),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn crud_lifecycle() {
    let addr = start_server();
    let client = PostClient::new(&format!("http://{addr}"));

    // Step 1: list - should be empty.
    let posts = client.parse_list_posts(execute(client.build_list_posts())).unwrap();
    assert!(posts.is_empty(), "expected empty list");

    // Step 2: create a post.
    let input = PostInput {
        title: "Integration".to_string(),
        description: "first".to_string(),
    };
    let req = client.build_create_post(&input).unwrap();
    let created = client.parse_create_post(execute(req)).unwrap();
    assert_eq!(created.title, "Integration");
    assert_eq!(created.id, PostId::from(1));
    let id = created.id.clone();

    // Step 3: replace both fields.
    let input = PostInput {
        title: "Replaced".to_string(),
        description: "second".to_string(),
    };
    let req = client.build_replace_post(&id, &input).unwrap();
    let replaced = client.parse_replace_post(execute(req)).unwrap();
    assert_eq!(replaced.title, "Replaced");
    assert_eq!(replaced.description, "second");

    // Step 4: patch only the description.
    let patch = PostPatch {
        title: None,
        description: Some("third".to_string()),
    };
    let req = client.build_patch_post(&id, &patch).unwrap();
    let patched = client.parse_patch_post(execute(req)).unwrap();
    assert_eq!(patched.title, "Replaced");
    assert_eq!(patched.description, "third");

    // Step 5: list - should hold the patched post.
    let posts = client.parse_list_posts(execute(client.build_list_posts())).unwrap();
    assert_eq!(posts, vec![patched]);

    // Step 6: delete.
    client.parse_delete_post(execute(client.build_delete_post(&id))).unwrap();

    // Step 7: delete again - should be NotFound.
    let err = client
        .parse_delete_post(execute(client.build_delete_post(&id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 8: replace after delete - should be NotFound.
    let req = client.build_replace_post(&id, &input).unwrap();
    let err = client.parse_replace_post(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 9: list - should be empty again.
    let posts = client.parse_list_posts(execute(client.build_list_posts())).unwrap();
    assert!(posts.is_empty(), "expected empty list after delete");
}
