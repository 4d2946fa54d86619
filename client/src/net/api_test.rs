use super::*;
use advice::Category;
use futures::executor::block_on;

#[test]
fn default_endpoint_is_chat_path() {
    assert_eq!(HttpAdviceApi::default().endpoint(), "/api/chat");
}

#[test]
fn network_error_keeps_transport_detail() {
    let err = network_error("TypeError: Failed to fetch");
    assert_eq!(err, ApiError::Network("TypeError: Failed to fetch".to_owned()));
    assert_eq!(err.to_string(), "Network error: TypeError: Failed to fetch");
}

#[cfg(not(feature = "csr"))]
#[test]
fn ask_outside_browser_is_network_error() {
    let api = HttpAdviceApi::new("/custom/chat");
    let request = ChatRequest { message: "rough idle".to_owned(), category: Category::Engine };
    let err = block_on(api.ask(&request)).expect_err("no fetch in tests");
    assert!(err.is_network());
}
