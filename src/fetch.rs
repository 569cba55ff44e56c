use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// GET `url` and return the body as text. No timeout: a stalled request
/// simply never resolves.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!(format!("fetch {url}: {:?}", e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }

    let body = resp
        .text()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("response body is not text"))
}
