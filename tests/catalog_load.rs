use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use vetrina::client::config::ClientConfig;
use vetrina::client::services::catalog_service::{CatalogError, CatalogService};
use vetrina::common::models::Product;

const SAMPLE_BODY: &str = r#"[{"id":1,"title":"Laptop X","category":"Laptops","price":999,"description":"d","image_url":"http://x/y"}]"#;

/// One-shot HTTP responder returning a canned status line and body.
async fn spawn_responder(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 2048];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

fn service_for(backend_url: String) -> CatalogService {
    CatalogService::new(&ClientConfig { backend_url })
}

#[tokio::test]
async fn loads_products_from_sample_endpoint() {
    let base = spawn_responder("HTTP/1.1 200 OK", SAMPLE_BODY).await;
    let svc = service_for(base);

    let (handle, fetch) = svc.fetch_sample();
    let outcome = fetch.await;

    assert!(!handle.is_cancelled());
    let products = outcome
        .expect("fetch was not cancelled")
        .expect("load should succeed");
    assert_eq!(
        products,
        vec![Product {
            id: 1,
            title: "Laptop X".to_string(),
            description: "d".to_string(),
            category: "Laptops".to_string(),
            price: 999.0,
            image_url: "http://x/y".to_string(),
        }]
    );
}

#[tokio::test]
async fn network_failure_yields_request_error() {
    // Reserve a port, then free it so the connection is refused
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let svc = service_for(format!("http://{}", addr));
    let (_handle, fetch) = svc.fetch_sample();

    match fetch.await {
        Some(Err(CatalogError::Request(_))) => {}
        other => panic!("expected a request error, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_body_yields_decode_error() {
    let base = spawn_responder("HTTP/1.1 200 OK", "<html>maintenance</html>").await;
    let svc = service_for(base);

    let (_handle, fetch) = svc.fetch_sample();
    match fetch.await {
        Some(Err(CatalogError::Decode(_))) => {}
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn cancelled_fetch_drops_its_outcome() {
    let base = spawn_responder("HTTP/1.1 200 OK", SAMPLE_BODY).await;
    let svc = service_for(base);

    let (handle, fetch) = svc.fetch_sample();
    handle.cancel();

    assert!(handle.is_cancelled());
    assert!(fetch.await.is_none());
}

// Pins the current contract: the status code is not inspected, so an error
// status carrying a decodable product list still loads.
#[tokio::test]
async fn error_status_with_product_body_still_loads() {
    let base = spawn_responder("HTTP/1.1 500 Internal Server Error", SAMPLE_BODY).await;
    let svc = service_for(base);

    let (_handle, fetch) = svc.fetch_sample();
    let products = fetch
        .await
        .expect("fetch was not cancelled")
        .expect("body decodes, so the load counts as success");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].category, "Laptops");
}
