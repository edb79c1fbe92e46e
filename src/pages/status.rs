use crate::html;
use crate::http::response::Response;
use crate::pool::SharedPool;

/// Landing page: the state summary, one fact per line.
pub async fn render(pool: &SharedPool) -> anyhow::Result<Response> {
    let pool = pool.read().await;

    let mut page = html::header(&[&pool.title], Some("/css/phone.css"), None);
    page.push_str("<body><p>\n");
    page.push_str(&pool.summary("<br>\n"));
    page.push_str("</p></body>\n");
    page.push_str(html::trailer());

    Ok(Response::html(page))
}
