//! src/routes/landing.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use htmlescape::encode_attribute;

use crate::controller::SignupState;
use crate::domain::{FormField, SubmissionStatus};

const CHROME_WEB_STORE_URL: &str =
    "https://chromewebstore.google.com/detail/listentothisbro/ijmjmpinhlkcddmoibheifpkclcccook";

const SUCCESS_MESSAGE: &str = "Thank you for signing up! We'll be in touch soon.";
const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Locks the form on its first submit: later submits are swallowed and the
/// button shows "Sending..." until the response page replaces it.
const SUBMIT_GUARD: &str = r#"<script>
    function lockSignupForm(form) {
      if (form.dataset.submitting === "true") {
        return false;
      }
      form.dataset.submitting = "true";
      var button = form.querySelector('button[type="submit"]');
      button.disabled = true;
      button.textContent = "Sending...";
      return true;
    }
  </script>"#;

/// Extra line shown under the submit button, on top of the status message.
pub enum Notice<'a> {
    None,
    Invalid(&'a str),
}

pub async fn landing_page() -> HttpResponse {
    page_response(StatusCode::OK, &SignupState::default(), Notice::None)
}

pub fn page_response(
    status: StatusCode,
    state: &SignupState,
    notice: Notice<'_>,
) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(render_landing_page(state, notice))
}

fn text_input(
    state: &SignupState,
    field: FormField,
    label: &str,
    kind: &str,
    required: bool,
) -> String {
    let name = field.as_str();
    format!(
        r#"<div class="field">
            <label for="{name}">{label}</label>
            <input id="{name}" name="{name}" type="{kind}" value="{value}"{required}>
          </div>"#,
        name = name,
        label = label,
        kind = kind,
        value = encode_attribute(state.form.get(field)),
        required = if required { " required" } else { "" },
    )
}

fn status_html(state: &SignupState, notice: Notice<'_>) -> String {
    let mut html = String::new();
    if let Notice::Invalid(message) = notice {
        html.push_str(&format!(
            r#"<p class="status error">{}</p>"#,
            htmlescape::encode_minimal(message)
        ));
    }
    match state.status {
        SubmissionStatus::Success => html.push_str(&format!(
            r#"<p class="status success">{}</p>"#,
            htmlescape::encode_minimal(SUCCESS_MESSAGE)
        )),
        SubmissionStatus::Error => html.push_str(&format!(
            r#"<p class="status error">{}</p>"#,
            htmlescape::encode_minimal(ERROR_MESSAGE)
        )),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
    }
    html
}

pub fn render_landing_page(state: &SignupState, notice: Notice<'_>) -> String {
    let submitting = state.status.is_submitting();
    let button = if submitting {
        r#"<button type="submit" disabled>Sending...</button>"#
    } else {
        r#"<button type="submit">Sign Up</button>"#
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>listentothis,bro</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 2rem 1rem; }}
    header {{ text-align: center; }}
    .brand {{ display: flex; align-items: center; justify-content: center; gap: 1rem; }}
    .grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2rem; }}
    .card {{ border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1.5rem; }}
    .field {{ display: flex; flex-direction: column; margin-bottom: 0.75rem; }}
    button {{ width: 100%; padding: 0.6rem; }}
    .status {{ text-align: center; font-size: 0.9rem; }}
    .success {{ color: #16a34a; }}
    .error {{ color: #dc2626; }}
    .screenshots img {{ width: 100%; border-radius: 0.5rem; }}
  </style>
  {guard}
</head>
<body>
  <header>
    <div class="brand">
      <img src="/static/logo.png" alt="listentothis,bro logo" width="100" height="100">
      <h1>listentothis,bro</h1>
    </div>
    <p>Instantly share Spotify songs to custom playlists <br> on your friends' accounts directly from your Chrome browser.</p>
  </header>

  <main>
    <div class="grid">
      <section>
        <h2>Share Music, Skip the Chat</h2>
        <p>Tired of cluttering your chats with Spotify links? <strong>listentothis,bro</strong> revolutionizes how you share music with friends. This sleek Chrome extension turns song recommendations into a seamless experience:</p>
        <h2>How It Works</h2>
        <p>1. Install our Chrome extension <a href="{store}" target="_blank" rel="noopener noreferrer">here</a></p>
        <p>2. Connect your Spotify account</p>
        <p>3. Copy any Spotify song link</p>
        <p>4. Click the extension icon</p>
        <p>5. Choose a friend from your Spotify follower list, who also has the extension installed</p>
        <p><strong>Boom! The song lands in a personalized "Recommended by You" playlist on their Spotify</strong></p>
      </section>

      <section class="card">
        <h2>Get Access</h2>
        <p>While we wait for Spotify to approve our extended quota, get access by entering your details below.</p>
        <form action="/signup" method="post" onsubmit="return lockSignupForm(this)">
          {name}
          {email}
          <p>You can only share songs with friends who have access, so it's better if your friend has access too!</p>
          {friend_name}
          {friend_email}
          {button}
          {status}
        </form>
      </section>
    </div>

    <section class="screenshots">
      <h2>Screenshots</h2>
      <div class="grid">
        <figure class="card">
          <img src="/static/screenshot-1.png" alt="Extension Interface">
          <figcaption>Share music directly from Chrome</figcaption>
        </figure>
        <figure class="card">
          <img src="/static/screenshot-2.png" alt="Notification Interface">
          <figcaption>Send music to a custom playlist on your friend's Spotify</figcaption>
        </figure>
      </div>
    </section>
  </main>
</body>
</html>
"#,
        guard = SUBMIT_GUARD,
        store = CHROME_WEB_STORE_URL,
        name = text_input(state, FormField::SenderName, "Your Name", "text", true),
        email = text_input(state, FormField::SenderEmail, "Your Spotify Email", "email", true),
        friend_name = text_input(
            state,
            FormField::FriendName,
            "Friend's Name (Optional)",
            "text",
            false
        ),
        friend_email = text_input(
            state,
            FormField::FriendEmail,
            "Friend's Spotify Email (Optional)",
            "email",
            false
        ),
        button = button,
        status = status_html(state, notice),
    )
}
