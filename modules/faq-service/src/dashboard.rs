//! Dashboard HTML page handler for the FAQ service.
//!
//! Lists stored answers and lets an operator answer queued questions.

use crate::routes::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

pub async fn dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let faq = state.store.list_faq();
    let unanswered = state.store.list_unanswered();
    let uptime = state.start_time.elapsed().as_secs();

    let stats_html = format!(
        r#"<div class="stats">
                <div class="stat"><span class="val">{}</span><span class="lbl">Answered</span></div>
                <div class="stat yellow"><span class="val">{}</span><span class="lbl">Unanswered</span></div>
            </div>"#,
        faq.len(),
        unanswered.len()
    );

    let mut faq_rows = String::new();
    for entry in &faq {
        faq_rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&entry.question),
            escape_html(&entry.answer),
        ));
    }
    if faq_rows.is_empty() {
        faq_rows = "<tr><td colspan=\"2\">No answers stored yet.</td></tr>".to_string();
    }

    let mut unanswered_cards = String::new();
    for (i, question) in unanswered.iter().enumerate() {
        unanswered_cards.push_str(&format!(
            r#"<div class="card">
      <p class="q" id="q{i}">{q}</p>
      <textarea id="a{i}" rows="3" placeholder="Answer..."></textarea>
      <button onclick="submitAnswer({i})">Save answer</button>
    </div>
"#,
            i = i,
            q = escape_html(question),
        ));
    }
    if unanswered_cards.is_empty() {
        unanswered_cards = "<p class=\"meta\">No questions.</p>".to_string();
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>FAQ Dashboard</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0f1117; color: #e0e0e0; padding: 20px; }}
  h1 {{ color: #58a6ff; margin-bottom: 8px; }}
  .meta {{ color: #8b949e; font-size: 0.85em; margin-bottom: 20px; }}
  .stats {{ display: flex; gap: 16px; margin-bottom: 24px; flex-wrap: wrap; }}
  .stat {{ background: #161b22; border: 1px solid #30363d; border-radius: 8px; padding: 16px 24px; text-align: center; min-width: 140px; }}
  .stat .val {{ display: block; font-size: 2em; font-weight: bold; color: #3fb950; }}
  .stat.yellow .val {{ color: #d29922; }}
  .stat .lbl {{ display: block; font-size: 0.85em; color: #8b949e; margin-top: 4px; }}
  table {{ width: 100%; border-collapse: collapse; margin-bottom: 24px; }}
  th {{ background: #161b22; color: #8b949e; text-align: left; padding: 8px 12px; font-size: 0.85em; text-transform: uppercase; border-bottom: 1px solid #30363d; }}
  td {{ padding: 8px 12px; border-bottom: 1px solid #21262d; font-size: 0.9em; vertical-align: top; }}
  tr:hover {{ background: #161b22; }}
  h2 {{ color: #c9d1d9; margin-bottom: 12px; font-size: 1.1em; }}
  .section {{ margin-bottom: 28px; }}
  .card {{ background: #161b22; border: 1px solid #30363d; border-radius: 8px; padding: 12px 16px; margin-bottom: 12px; }}
  .card .q {{ margin-bottom: 8px; }}
  textarea {{ width: 100%; background: #0d1117; color: #e0e0e0; border: 1px solid #30363d; border-radius: 6px; padding: 8px; font: inherit; margin-bottom: 8px; }}
  button {{ background: #238636; color: #fff; border: none; border-radius: 6px; padding: 6px 14px; cursor: pointer; }}
</style>
</head>
<body>
  <h1>FAQ</h1>
  <p class="meta">Storage: {storage} &middot; Uptime: {uptime_str}</p>

  {stats_html}

  <div class="section">
    <h2>Answered Questions</h2>
    <table>
      <thead><tr><th>Question</th><th>Answer</th></tr></thead>
      <tbody>{faq_rows}</tbody>
    </table>
  </div>

  <div class="section">
    <h2>Unanswered Questions</h2>
    {unanswered_cards}
  </div>

  <script>
    async function submitAnswer(i) {{
      const question = document.getElementById('q' + i).textContent;
      const answer = document.getElementById('a' + i).value.trim();
      if (!answer) {{ alert('Insert an answer.'); return; }}
      const res = await fetch('/answer', {{
        method: 'POST',
        headers: {{ 'Content-Type': 'application/json' }},
        body: JSON.stringify({{ question, answer }}),
      }});
      if (res.ok) {{ location.reload(); }} else {{ alert('Error saving answer.'); }}
    }}
  </script>
</body>
</html>"#,
        storage = state.store.storage_kind(),
        uptime_str = format_uptime(uptime),
        stats_html = stats_html,
        faq_rows = faq_rows,
        unanswered_cards = unanswered_cards,
    );

    ([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
