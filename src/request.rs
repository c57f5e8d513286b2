use crate::error::{MenuError, MenuResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::rc::Rc;

pub use wavescan_shared::protocol::HttpMethod;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> MenuResult<T> {
        serde_json::from_str(&self.body).map_err(|e| MenuError::decode(self.status, &e))
    }
}

/// HTTP 客户端特性 (Trait)
///
/// (?Send) 是因为浏览器环境下 fetch 相关类型不是 Send 的。
/// 传输层失败必须映射为 `MenuError::Network`，状态码的解释交给调用方。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> MenuResult<HttpResponse>;
}

// 共享同一个客户端实例（测试里需要在外部检查请求记录）
#[async_trait::async_trait(?Send)]
impl<T: HttpClient + ?Sized> HttpClient for Rc<T> {
    async fn send(&self, req: HttpRequest) -> MenuResult<HttpResponse> {
        (**self).send(req).await
    }
}

// =========================================================
// 实现层: reqwest 客户端 (非 wasm 目标)
// =========================================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> MenuResult<HttpResponse> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| MenuError::network(format!("reqwest: {}", e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| MenuError::network(format!("reqwest body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    type Key = (HttpMethod, String);

    /// 记录下来的请求
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: HttpMethod,
        pub url: String,
        pub headers: HashMap<String, String>,
        pub body: Option<String>,
    }

    pub struct MockHttpClient {
        // (Method, URL) -> (Status, Response Body)
        responses: RefCell<HashMap<Key, (u16, String)>>,
        // 需要手动放行的响应，按发出顺序消费
        gates: RefCell<HashMap<Key, VecDeque<oneshot::Receiver<(u16, String)>>>>,
        unreachable: RefCell<Vec<Key>>,
        pub requests: RefCell<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self {
                responses: RefCell::new(HashMap::new()),
                gates: RefCell::new(HashMap::new()),
                unreachable: RefCell::new(Vec::new()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn mock_response(
            &self,
            method: HttpMethod,
            url: &str,
            status: u16,
            body: serde_json::Value,
        ) {
            self.responses
                .borrow_mut()
                .insert((method, url.to_string()), (status, body.to_string()));
        }

        /// 下一次对该地址的请求会挂起，直到返回的 Sender 被调用
        pub fn gate(&self, method: HttpMethod, url: &str) -> oneshot::Sender<(u16, String)> {
            let (tx, rx) = oneshot::channel();
            self.gates
                .borrow_mut()
                .entry((method, url.to_string()))
                .or_default()
                .push_back(rx);
            tx
        }

        pub fn mock_network_error(&self, method: HttpMethod, url: &str) {
            self.unreachable
                .borrow_mut()
                .push((method, url.to_string()));
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn count(&self, method: HttpMethod, url: &str) -> usize {
            self.requests
                .borrow()
                .iter()
                .filter(|r| r.method == method && r.url == url)
                .count()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl HttpClient for MockHttpClient {
        async fn send(&self, req: HttpRequest) -> MenuResult<HttpResponse> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: req.method,
                url: req.url.clone(),
                headers: req.headers.clone(),
                body: req.body.clone(),
            });

            let key = (req.method, req.url.clone());

            if self.unreachable.borrow().contains(&key) {
                return Err(MenuError::network("connection refused"));
            }

            let gate = self
                .gates
                .borrow_mut()
                .get_mut(&key)
                .and_then(|q| q.pop_front());
            if let Some(rx) = gate {
                return match rx.await {
                    Ok((status, body)) => Ok(HttpResponse { status, body }),
                    Err(_) => Err(MenuError::network("request dropped")),
                };
            }

            let responses = self.responses.borrow();
            if let Some((status, body)) = responses.get(&key) {
                Ok(HttpResponse {
                    status: *status,
                    body: body.clone(),
                })
            } else {
                Ok(HttpResponse {
                    status: 404,
                    body: "Not Found".to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let bad = HttpResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }

    #[test]
    fn test_json_decode_failure_is_server_error() {
        let resp = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let err = resp.json::<Vec<String>>().unwrap_err();
        assert!(matches!(err, MenuError::Server { status: 200, .. }));
    }
}
