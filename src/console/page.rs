//! HTML shell of the operator page. Element content is pre-filled from the
//! current document; the inline script then follows `/api/live`.

use crate::render::document::{escape_html, Content, Document};
use crate::render::ids;

/// `<tag id=".." class="..">content</tag>` seeded from the document.
fn slot(doc: &Document, tag: &str, id: &str, default_class: &str, default_text: &str) -> String {
    let element = doc.element(id);
    let class = element
        .and_then(|e| e.class.as_deref())
        .unwrap_or(default_class);
    let inner = match element.and_then(|e| e.content.as_ref()) {
        Some(Content::Text(text)) => escape_html(text),
        Some(Content::Html(html)) => html.clone(),
        None => escape_html(default_text),
    };
    format!(
        r#"<{tag} id="{id}" class="{class}">{inner}</{tag}>"#,
        tag = tag,
        id = id,
        class = escape_html(class),
        inner = inner
    )
}

pub fn render_page(doc: &Document) -> String {
    let cards = format!(
        r#"<section class="cards">
<div class="stat-card"><div class="stat-label">Total packets</div>{total}{total_trend}</div>
{arp_card_open}<div class="stat-label">ARP packets</div>{arp}{arp_trend}</div>
{mac_card_open}<div class="stat-label">Unique source MACs</div>{macs}{mac_trend}</div>
</section>"#,
        total = slot(doc, "div", ids::TOTAL_PACKETS, "stat-value", "0"),
        total_trend = slot(doc, "div", ids::TOTAL_TREND, "stat-trend normal", "—"),
        arp_card_open = card_open(doc, ids::ARP_CARD),
        arp = slot(doc, "div", ids::ARP_PACKETS, "stat-value", "0"),
        arp_trend = slot(doc, "div", ids::ARP_TREND, "stat-trend normal", "—"),
        mac_card_open = card_open(doc, ids::MAC_CARD),
        macs = slot(doc, "div", ids::UNIQUE_MACS, "stat-value", "0"),
        mac_trend = slot(doc, "div", ids::MAC_TREND, "stat-trend normal", "—"),
    );

    let header = format!(
        r#"<header>{dot}{text}{notice}</header>"#,
        dot = slot(doc, "span", ids::STATUS_DOT, "status-dot", ""),
        text = slot(doc, "span", ids::STATUS_TEXT, "status-text", "Connecting…"),
        notice = slot(doc, "div", ids::NOTICE, "notice hidden", ""),
    );

    let ai = format!(
        r#"<section id="{box_id}" class="{box_class}"><h2>AI classifier</h2>
<div>Prediction: {prediction}</div><div>Confidence: {confidence}</div><div>Source: {source}</div></section>"#,
        box_id = ids::AI_BOX,
        box_class = escape_html(doc.class(ids::AI_BOX).unwrap_or("ai-box normal")),
        prediction = slot(doc, "span", ids::AI_PREDICTION, "", "—"),
        confidence = slot(doc, "span", ids::AI_CONFIDENCE, "", "—"),
        source = slot(doc, "span", ids::AI_SOURCE, "", "—"),
    );

    let thresholds = format!(
        r#"<section class="thresholds"><h2>Thresholds</h2>
<div>ARP: {arp} for {arp_consec}</div><div>MAC: {mac} for {mac_consec}</div></section>"#,
        arp = slot(doc, "span", ids::THRESHOLD_ARP, "", "—"),
        arp_consec = slot(doc, "span", ids::THRESHOLD_ARP_CONSEC, "", "—"),
        mac = slot(doc, "span", ids::THRESHOLD_MAC, "", "—"),
        mac_consec = slot(doc, "span", ids::THRESHOLD_MAC_CONSEC, "", "—"),
    );

    let lists = format!(
        r#"<section class="alerts"><h2>Alerts {alert_count}</h2>
<button id="clear-alerts" class="clear-btn">Clear</button>{alert_list}</section>
<section class="blocked"><h2>Blocked MACs {blocked_count}</h2>{blocked_list}</section>"#,
        alert_count = slot(doc, "span", ids::ALERT_COUNT, "badge", "0"),
        alert_list = slot(doc, "div", ids::ALERT_LIST, "alert-list", ""),
        blocked_count = slot(doc, "span", ids::BLOCKED_COUNT, "badge", "0"),
        blocked_list = slot(doc, "div", ids::BLOCKED_LIST, "blocked-list", ""),
    );

    let initial = serde_json::to_string(doc)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>switchwatch</title>
<script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
{header}
{cards}
<section class="chart"><canvas id="traffic-chart"></canvas></section>
{ai}
{thresholds}
{lists}
<script>const INITIAL_VIEW = {initial};</script>
<script>{script}</script>
</body>
</html>
"#,
        header = header,
        cards = cards,
        ai = ai,
        thresholds = thresholds,
        lists = lists,
        initial = initial,
        script = PAGE_SCRIPT,
    )
}

fn card_open(doc: &Document, id: &str) -> String {
    format!(
        r#"<div id="{}" class="{}">"#,
        id,
        escape_html(doc.class(id).unwrap_or("stat-card"))
    )
}

const PAGE_SCRIPT: &str = r#"
let chart = null;
function drawChart(series) {
  if (!series || typeof Chart === 'undefined') return;
  const data = {
    labels: series.labels,
    datasets: [series.total, series.arp, series.unique_macs].map((values, i) => ({
      label: series.datasets[i].label,
      data: values,
      borderColor: series.datasets[i].border_color,
      backgroundColor: series.datasets[i].background_color,
      fill: true,
      tension: 0.4,
    })),
  };
  if (chart === null) {
    chart = new Chart(document.getElementById('traffic-chart'), {
      type: 'line', data: data, options: { animation: false, scales: { y: { beginAtZero: true } } },
    });
  } else {
    chart.data = data;
    chart.update('none');
  }
}
function applyView(view) {
  for (const [id, el] of Object.entries(view.elements || {})) {
    const node = document.getElementById(id);
    if (!node) continue;
    if (el.content && 'text' in el.content) node.textContent = el.content.text;
    if (el.content && 'html' in el.content) node.innerHTML = el.content.html;
    if (el.class !== undefined) node.className = el.class;
  }
  drawChart(view.chart);
}
async function post(path, body) {
  const res = await fetch(path, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: body === undefined ? undefined : JSON.stringify(body),
  });
  return res.json().catch(() => ({}));
}
document.addEventListener('click', async (ev) => {
  const button = ev.target.closest('[data-action="unblock"]');
  if (button) {
    const result = await post('/api/unblock', { mac: button.dataset.mac });
    if (!result.success) alert(result.error || 'Unblock failed');
  } else if (ev.target.id === 'clear-alerts') {
    await post('/api/clear_alerts');
  }
});
function connect() {
  const scheme = location.protocol === 'https:' ? 'wss' : 'ws';
  const ws = new WebSocket(`${scheme}://${location.host}/api/live`);
  ws.onmessage = (msg) => applyView(JSON.parse(msg.data));
  ws.onclose = () => setTimeout(connect, 1000);
}
applyView(INITIAL_VIEW);
connect();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::alerts::render_alerts;
    use crate::render::document::Fragment;

    #[test]
    fn test_page_seeds_current_content() {
        let mut doc = Document::new();
        doc.apply(&Fragment::new().text(ids::TOTAL_PACKETS, "42").class(ids::ARP_CARD, "stat-card alert"));
        doc.apply(&render_alerts(&[]).fragment);

        let page = render_page(&doc);
        assert!(page.contains(r#"<div id="total-packets" class="stat-value">42</div>"#));
        assert!(page.contains(r#"<div id="arp-card" class="stat-card alert">"#));
        assert!(page.contains("No active alerts"));
        assert!(page.contains(r#"id="blocked-list""#));
    }

    #[test]
    fn test_initial_view_cannot_close_script() {
        let mut doc = Document::new();
        doc.apply(&Fragment::new().text(ids::AI_SOURCE, "</script><script>x()</script>"));
        let page = render_page(&doc);
        assert!(!page.contains("</script><script>x()"));
    }
}
