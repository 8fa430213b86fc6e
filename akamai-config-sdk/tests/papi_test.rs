//! Property Manager 集成测试（本地 mock server）
//!
//! 运行方式:
//! ```bash
//! cargo test -p akamai-config-sdk --test papi_test
//! ```

mod common;

use akamai_config_sdk::{ClientError, Contract};
use common::TestContext;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const CONTRACTS_BODY: &str = r#"{
    "accountId": "act_1-1TJZFB",
    "contracts": {
        "items": [
            {"contractId": "ctr_1-1TJZH5", "contractTypeName": "Direct Customer"},
            {"contractId": "ctr_1-1TJZFW", "contractTypeName": "Indirect Customer"}
        ]
    }
}"#;

const PRODUCTS_BODY: &str = r#"{
    "accountId": "act_1-1TJZFB",
    "contractId": "ctr_1-1TJZH5",
    "products": {
        "items": [
            {"productName": "Alta", "productId": "prd_Alta"},
            {"productName": "Fresca", "productId": "prd_Fresca"},
            {"productName": "Site Accel", "productId": "prd_Site_Accel"}
        ]
    }
}"#;

async fn mount_contracts(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/papi/v0/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CONTRACTS_BODY))
        .mount(&ctx.server)
        .await;
}

// ============ Contracts ============

#[tokio::test]
async fn test_fetch_contracts_links_parents() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    mount_contracts(&ctx).await;

    let contracts = require_ok!(ctx.papi().fetch_contracts().await, "fetch_contracts 调用失败");

    assert_eq!(contracts.account_id, "act_1-1TJZFB");
    assert_eq!(contracts.items().len(), 2);
    assert_eq!(contracts.items()[0].contract_id, "ctr_1-1TJZH5");
    assert_eq!(contracts.items()[1].contract_type_name, "Indirect Customer");
    for contract in contracts.items() {
        assert_eq!(
            contract.account_id(),
            Some("act_1-1TJZFB"),
            "合同 {} 未关联账户",
            contract.contract_id
        );
    }
}

#[tokio::test]
async fn test_fetch_contracts_is_signed() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    Mock::given(method("GET"))
        .and(path("/papi/v0/contracts"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CONTRACTS_BODY))
        .expect(1)
        .mount(&ctx.server)
        .await;

    require_ok!(ctx.papi().fetch_contracts().await);

    let headers = ctx.authorization_headers().await;
    assert_eq!(headers.len(), 1);
    let auth = &headers[0];
    assert!(auth.starts_with("EG1-HMAC-SHA256 "), "unexpected header: {auth}");
    assert!(auth.contains("client_token=akab-client-token;"));
    assert!(auth.contains("access_token=akab-access-token;"));
    assert!(auth.contains(";signature="));
}

#[tokio::test]
async fn test_fetch_contract_by_id() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    mount_contracts(&ctx).await;

    let contract = require_ok!(ctx.papi().fetch_contract("ctr_1-1TJZFW").await);
    assert_eq!(contract.contract_type_name, "Indirect Customer");
    assert_eq!(contract.account_id(), Some("act_1-1TJZFB"));
}

#[tokio::test]
async fn test_fetch_contract_not_found() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    mount_contracts(&ctx).await;

    let result = ctx.papi().fetch_contract("ctr_C-0N7RAC7").await;
    assert_eq!(
        result,
        Err(ClientError::ContractNotFound {
            contract_id: "ctr_C-0N7RAC7".to_string()
        })
    );
}

#[tokio::test]
async fn test_fetch_contracts_malformed_body() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    Mock::given(method("GET"))
        .and(path("/papi/v0/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"accountId": 42}"#))
        .mount(&ctx.server)
        .await;

    let result = ctx.papi().fetch_contracts().await;
    assert!(
        matches!(result, Err(ClientError::ParseError { .. })),
        "expected ParseError, got {result:?}"
    );
}

// ============ Products ============

#[tokio::test]
async fn test_fetch_products_for_contract() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    Mock::given(method("GET"))
        .and(path("/papi/v0/products"))
        .and(query_param("contractId", "ctr_1-1TJZH5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCTS_BODY))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let contract = Contract::new("ctr_1-1TJZH5", "Direct Customer");
    let products = require_ok!(ctx.papi().fetch_products(&contract).await);

    assert_eq!(products.contract_id, "ctr_1-1TJZH5");
    let names: Vec<&str> = products
        .items()
        .iter()
        .map(|p| p.product_name.as_str())
        .collect();
    assert_eq!(names, ["Alta", "Fresca", "Site Accel"]);
    assert!(
        products
            .items()
            .iter()
            .all(|p| p.contract_id() == Some("ctr_1-1TJZH5"))
    );
}

#[tokio::test]
async fn test_fetch_products_forbidden() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    Mock::given(method("GET"))
        .and(path("/papi/v0/products"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("Content-Type", "application/problem+json")
                .set_body_string(
                    r#"{
                        "type": "https://problems.luna.akamaiapis.net/papi/v0/unauthorized",
                        "title": "Unauthorized",
                        "detail": "The client is not authorized to access this contract",
                        "status": 403
                    }"#,
                ),
        )
        .mount(&ctx.server)
        .await;

    let contract = Contract::new("ctr_1-1TJZFW", "Indirect Customer");
    let result = ctx.papi().fetch_products(&contract).await;

    assert!(
        matches!(result, Err(ClientError::ApiError { status: 403, .. })),
        "expected 403 ApiError, got {result:?}"
    );
    let Err(err) = result else {
        return;
    };
    assert!(err.is_expected());
    assert_eq!(
        err.to_string(),
        "API error (HTTP 403): Unauthorized: The client is not authorized to access this contract"
    );
}

#[tokio::test]
async fn test_fetch_products_server_error() {
    let ctx = require_some!(TestContext::start().await, "创建测试上下文失败");
    Mock::given(method("GET"))
        .and(path("/papi/v0/products"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let contract = Contract::new("ctr_1-1TJZH5", "Direct Customer");
    let result = ctx.papi().fetch_products(&contract).await;

    assert!(
        matches!(result, Err(ClientError::ApiError { status: 503, .. })),
        "expected 503 ApiError, got {result:?}"
    );
}
