//! Integration tests for the MCP stdio server loop.

use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;

use templar_registry::TemplateRepository;
use templar_store_fs::FsTemplateRepository;
use templar_transport_stdio::{McpHandler, McpServer, StdioTransport};
use templar_types::TemplateDraft;

async fn make_handler() -> (TempDir, Arc<McpHandler>) {
    let tmp = tempfile::tempdir().expect("tmp");
    let repo = FsTemplateRepository::new(tmp.path());
    repo.create(&TemplateDraft::new(
        "Invoice Template",
        "Basic invoice",
        vec!["finance".into()],
        "<code/>",
    ))
    .await
    .expect("create");
    (tmp, Arc::new(McpHandler::new(Arc::new(repo))))
}

async fn run_lines(input: &str) -> Vec<Value> {
    let (_tmp, handler) = make_handler().await;
    let reader = tokio::io::BufReader::new(input.as_bytes());
    let mut output = Vec::new();
    let transport = StdioTransport::new(reader, &mut output);
    McpServer::new(transport, handler).run().await.expect("run");
    String::from_utf8(output)
        .expect("utf8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response json"))
        .collect()
}

#[tokio::test]
async fn server_handles_initialize() {
    let responses = run_lines("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n").await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "templar");
}

#[tokio::test]
async fn server_handles_notification_silently() {
    let responses =
        run_lines("{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n").await;
    assert!(responses.is_empty(), "notifications must not produce output");
}

#[tokio::test]
async fn server_returns_parse_error_on_garbage() {
    let responses = run_lines("not json at all\n").await;
    assert_eq!(responses[0]["error"]["code"], -32700);
}

#[tokio::test]
async fn server_rejects_request_without_method() {
    let responses = run_lines("{\"jsonrpc\":\"2.0\",\"id\":4}\n").await;
    assert_eq!(responses[0]["error"]["code"], -32600);
}

#[tokio::test]
async fn server_skips_empty_lines() {
    let responses =
        run_lines("\n\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n").await;
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], 2);
}

#[tokio::test]
async fn server_eof_shuts_down_cleanly() {
    assert!(run_lines("").await.is_empty());
}

#[tokio::test]
async fn full_session_answers_in_order() {
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\",\"params\":{\"protocolVersion\":\"2024-11-05\",\"capabilities\":{},\"clientInfo\":{\"name\":\"t\",\"version\":\"1\"}}}\n",
        "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/list\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/call\",\"params\":{\"name\":\"get_template\",\"arguments\":{\"template_id\":\"invoice_template\"}}}\n",
    );
    let responses = run_lines(input).await;
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[1]["result"]["tools"].as_array().expect("tools").len(), 3);
    let text = responses[2]["result"]["content"][0]["text"]
        .as_str()
        .expect("text");
    let doc: Value = serde_json::from_str(text).expect("doc");
    assert_eq!(doc["code"], "<code/>");
}

#[tokio::test]
async fn server_unknown_method_returns_error() {
    let responses = run_lines("{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"foo/bar\"}\n").await;
    assert!(responses[0]["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("method not found"));
}
