//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use akamai_config_sdk::{
    ConfigDnsApi, DEFAULT_SECTION, EdgeGridClient, EdgeGridCredentials, PapiApi,
};
use wiremock::MockServer;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const TEST_HOST: &str = "akab-test-host.luna.akamaiapis.net";

/// 测试用凭据（签名仍针对 `TEST_HOST`）
pub fn test_credentials() -> EdgeGridCredentials {
    EdgeGridCredentials::new(
        TEST_HOST,
        "akab-client-token",
        "client-secret",
        "akab-access-token",
    )
}

/// 测试上下文 - 本地 mock server 及指向它的客户端
pub struct TestContext {
    pub server: MockServer,
    pub client: Arc<EdgeGridClient>,
}

impl TestContext {
    pub async fn start() -> Option<Self> {
        let server = MockServer::start().await;
        let client = EdgeGridClient::builder(test_credentials())
            .base_url(server.uri())
            .build()
            .ok()?;

        Some(Self {
            server,
            client: Arc::new(client),
        })
    }

    /// 连接真实 API（凭据来自 `AKAMAI_*` 环境变量）
    pub fn live() -> Option<(ConfigDnsApi, PapiApi)> {
        let credentials = EdgeGridCredentials::from_env(DEFAULT_SECTION).ok()?;
        let client = Arc::new(EdgeGridClient::new(credentials).ok()?);
        Some((ConfigDnsApi::new(client.clone()), PapiApi::new(client)))
    }

    pub fn dns(&self) -> ConfigDnsApi {
        ConfigDnsApi::new(self.client.clone())
    }

    pub fn papi(&self) -> PapiApi {
        PapiApi::new(self.client.clone())
    }

    /// 返回 mock server 收到的所有请求的 `Authorization` 头
    pub async fn authorization_headers(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|req| req.headers.get("authorization"))
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}

/// 读取 `tests/fixtures` 下的 JSON 样例
pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_default()
}
