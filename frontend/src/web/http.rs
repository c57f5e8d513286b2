//! 浏览器 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心库的 [`HttpClient`] 接口。

use gloo_net::http::{Method, RequestBuilder};
use wavescan::{HttpClient, HttpMethod, HttpRequest, HttpResponse, MenuError, MenuResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> MenuResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (k, v) in &req.headers {
            builder = builder.header(k, v);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| MenuError::network(format!("build request: {}", e)))?;

        // fetch 只在网络层失败时 reject，4xx/5xx 照常返回
        let resp = request
            .send()
            .await
            .map_err(|e| MenuError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MenuError::network(format!("read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
