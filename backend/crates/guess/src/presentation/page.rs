//! HTML Rendering
//!
//! The game is a single page; the stylesheet is served from `/style.css`.

use crate::application::session::GameView;
use crate::application::submit_guess::Feedback;

pub const STYLESHEET: &str = r#"*{box-sizing:border-box}
body{
  font-family: 'Nunito', system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', Arial;
  background: linear-gradient(135deg,#ffeef8 0%, #fff9f0 100%);
  margin:0;
  padding:40px 16px;
  display:flex;
  align-items:center;
  justify-content:center;
  min-height:100vh;
  color:#2b2b2b;
}
.card{
  width:100%;
  max-width:440px;
  background:linear-gradient(180deg, rgba(255,255,255,0.95), rgba(255,255,255,0.9));
  border-radius:14px;
  padding:28px;
  box-shadow:0 10px 30px rgba(17,17,17,0.08);
  text-align:center;
}
h1{margin:0 0 8px;font-size:1.6rem}
.lead{margin:0 0 18px;color:#555}
input[type=number]{
  width:100%;
  padding:12px 14px;
  font-size:1rem;
  border-radius:8px;
  border:1px solid #e5d6e0;
  margin-bottom:12px;
}
.controls{display:flex;gap:8px;align-items:center;justify-content:center}
.btn{
  background:#ff4fa3;
  color:white;
  border:none;
  padding:10px 14px;
  border-radius:10px;
  cursor:pointer;
  font-weight:600;
  text-decoration:none;
}
.btn.ghost{background:transparent;color:#ff4fa3;border:1px solid rgba(255,79,163,0.15)}
.small{color:#777}
.message{padding:10px;border-radius:8px;margin-bottom:12px}
.message.hint{background:#fff7e6;border:1px solid #ffe5b2;color:#8a6d1a}
.message.error{background:#ffecec;border:1px solid #f5c6cb;color:#7a1e1e}
.message.success{background:#e8fff0;border:1px solid #c8f7d8;color:#145a2a}
footer{margin-top:16px}
"#;

/// Escape text for HTML element and attribute content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Render the game page for `view`, with an optional feedback message
pub fn render_page(view: &GameView, feedback: Option<&Feedback>) -> String {
    let min = view.range.min();
    let max = view.range.max();

    let message = feedback
        .map(|f| {
            format!(
                "    <div class=\"message {}\">{}</div>\n",
                f.kind.as_str(),
                escape_html(&f.message)
            )
        })
        .unwrap_or_default();

    let body = if view.won {
        format!(
            r#"    <p>You got it in <strong>{attempts}</strong> attempt(s)!</p>
    <form method="post" action="/reset">
      <button class="btn" type="submit">Play again</button>
    </form>
"#,
            attempts = view.attempts
        )
    } else {
        format!(
            r#"    <form method="post" action="/guess">
      <input autofocus name="guess" type="number" min="{min}" max="{max}" required placeholder="Your guess">
      <div class="controls">
        <button class="btn" type="submit">Submit guess</button>
        <a class="btn ghost" href="/reset">Restart game</a>
      </div>
    </form>
    <p class="small">Attempts: <strong>{attempts}</strong></p>
"#,
            attempts = view.attempts
        )
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <title>Guess the Number</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <div class="card">
    <h1>Guess the Number</h1>
    <p class="lead">Try to guess a number between <strong>{min}</strong> and <strong>{max}</strong>.</p>
{message}{body}    <footer>
      <small>Secret between {min} and {max}. Good luck!</small>
    </footer>
  </div>
</body>
</html>
"#
    )
}
