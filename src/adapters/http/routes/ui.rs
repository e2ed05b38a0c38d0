//! Server-rendered site routes: the landing page, the auth screens and
//! the not-found fallback. All pages are plain HTML with inline CSS and
//! small scripts; no frontend framework.

use axum::{Router, extract::State, http::StatusCode, response::Html, routing::get};

use crate::adapters::http::app_state::AppState;

use super::{auth_pages, sections};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/auth/login", get(login_page))
        .route("/auth/register", get(register_page))
        .route("/auth/verification/otp", get(verification_page))
        .fallback(not_found_page)
}

async fn landing_page() -> Html<String> {
    Html(site_shell(
        "Giftseon — Make Every Celebration Unforgettable",
        &sections::landing_body(),
    ))
}

async fn login_page(State(app_state): State<AppState>) -> Html<String> {
    Html(auth_shell(
        "Sign in — Giftseon",
        &auth_pages::login_body(app_state.config.auth_api_origin.as_str()),
    ))
}

async fn register_page(State(app_state): State<AppState>) -> Html<String> {
    Html(auth_shell(
        "Create your account — Giftseon",
        &auth_pages::register_body(app_state.config.auth_api_origin.as_str()),
    ))
}

async fn verification_page() -> Html<String> {
    Html(auth_shell(
        "Verify your email — Giftseon",
        &auth_pages::verification_body(),
    ))
}

async fn not_found_page() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(site_shell("Page not found — Giftseon", NOT_FOUND_BODY)),
    )
}

/// Full page shell with header navigation and footer.
fn site_shell(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(32768);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(title);
    html.push_str("</title>\n");
    html.push_str(SITE_CSS);
    html.push_str("</head>\n<body>\n");
    html.push_str(HEADER_NAV);
    html.push_str(body);
    html.push_str(FOOTER);
    html.push_str("\n</body>\n</html>");
    html
}

/// Centered standalone shell for the auth screens (no site chrome).
fn auth_shell(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(16384);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(title);
    html.push_str("</title>\n");
    html.push_str(SITE_CSS);
    html.push_str("</head>\n<body class=\"auth-body\">\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>");
    html
}

const HEADER_NAV: &str = r##"
<header class="site-header">
  <nav class="nav">
    <a class="brand" href="/">Gift<span>seon</span></a>
    <div class="nav-links">
      <a href="/#how-it-works">How it Works</a>
      <a href="/#features">Features</a>
      <a href="/#stories">Stories</a>
    </div>
    <div class="nav-actions">
      <a class="btn-ghost" href="/auth/login">Login</a>
      <a class="btn-primary" href="/auth/register">Get Started</a>
    </div>
  </nav>
</header>
"##;

const FOOTER: &str = r##"
<footer class="site-footer">
  <div class="footer-grid">
    <div class="footer-brand">
      <a class="brand" href="/">Gift<span>seon</span></a>
      <p>Craft elegant moments, gather meaningful gifts, and unite loved ones in celebration of life's most cherished events.</p>
    </div>
    <div class="footer-col">
      <h4>Product</h4>
      <a href="/#features">Features</a>
      <a href="#">Templates</a>
      <a href="#">Mobile App</a>
    </div>
    <div class="footer-col">
      <h4>Support</h4>
      <a href="#">Help Center</a>
      <a href="#">Contact Us</a>
      <a href="#">Safety</a>
    </div>
    <div class="footer-col">
      <h4>Company</h4>
      <a href="#">About Us</a>
      <a href="#">Careers</a>
    </div>
  </div>
  <p class="footer-note">© Giftseon. Celebrating life's special moments.</p>
</footer>
"##;

const NOT_FOUND_BODY: &str = r##"
<main class="not-found">
  <p class="nf-code">404</p>
  <h1>Page not found</h1>
  <p>The page you're looking for doesn't exist or has been moved.</p>
  <div class="nf-actions">
    <a class="btn-primary" href="/">Go Home</a>
    <a class="btn-ghost" href="javascript:history.back()">Go Back</a>
  </div>
</main>
"##;

const SITE_CSS: &str = r##"<style>
:root{
  --ink:#111827;--muted:#4b5563;--soft:#6b7280;--line:#f3f4f6;
  --orange:#ea580c;--pink:#db2777;--purple:#9333ea;
  --grad:linear-gradient(90deg,#f97316,#ec4899);
}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:'Segoe UI',system-ui,-apple-system,sans-serif;color:var(--ink);background:#fff;line-height:1.6}
a{color:inherit;text-decoration:none}
h1,h2{line-height:1.2}
.site-header{position:sticky;top:0;background:rgba(255,255,255,.9);backdrop-filter:blur(8px);border-bottom:1px solid var(--line);z-index:10}
.nav{max-width:1100px;margin:0 auto;display:flex;align-items:center;justify-content:space-between;padding:14px 24px}
.brand{font-size:1.3rem;font-weight:700}
.brand span{background:var(--grad);-webkit-background-clip:text;background-clip:text;color:transparent}
.nav-links{display:flex;gap:24px;color:var(--muted)}
.nav-links a:hover{color:var(--orange)}
.nav-actions{display:flex;gap:12px;align-items:center}
.btn-primary{background:var(--grad);color:#fff;padding:10px 22px;border-radius:999px;font-weight:600;border:none;cursor:pointer;display:inline-block}
.btn-primary:disabled{opacity:.5;cursor:not-allowed}
.btn-ghost{padding:10px 18px;border-radius:999px;border:1px solid var(--line);color:var(--muted);display:inline-block;cursor:pointer;background:#fff}
.section{max-width:1100px;margin:0 auto;padding:64px 24px}
.badge{display:inline-block;background:linear-gradient(90deg,#ffedd5,#fce7f3);color:#9a3412;padding:7px 16px;border-radius:999px;font-size:.85rem;font-weight:500;margin-bottom:20px}
.grad-text{background:linear-gradient(90deg,var(--orange),var(--pink),var(--purple));-webkit-background-clip:text;background-clip:text;color:transparent}
.hero{display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center}
.hero h1{font-size:3rem;margin-bottom:18px}
.hero p.lead{color:var(--muted);font-size:1.15rem;margin-bottom:26px}
.hero-actions{display:flex;gap:14px;margin-bottom:28px}
.avatar-row{display:flex;align-items:center;gap:14px;color:var(--muted);font-size:.9rem}
.avatars{display:flex}
.avatar{width:32px;height:32px;border-radius:50%;border:2px solid #fff;color:#fff;font-size:.75rem;font-weight:600;display:flex;align-items:center;justify-content:center;margin-left:-8px}
.avatar:first-child{margin-left:0}
.preview-card{background:#fff;border:1px solid var(--line);border-radius:24px;box-shadow:0 24px 60px rgba(17,24,39,.12);padding:28px}
.preview-card h3{margin-bottom:2px}
.preview-card .loc{color:var(--soft);font-size:.85rem;margin-bottom:18px}
.goal-bar{background:var(--line);border-radius:999px;height:10px;overflow:hidden;margin:8px 0 4px}
.goal-bar div{background:var(--grad);height:100%;width:85%}
.goal-amount{font-weight:600;font-size:.95rem}
.preview-stats{display:flex;gap:28px;margin-top:18px}
.preview-stats b{display:block;font-size:1.4rem}
.preview-stats span{color:var(--soft);font-size:.8rem}
.stats-band{display:grid;grid-template-columns:repeat(4,1fr);gap:24px;text-align:center}
.stats-band b{display:block;font-size:2rem;background:var(--grad);-webkit-background-clip:text;background-clip:text;color:transparent}
.stats-band span{color:var(--muted)}
.tile-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(230px,1fr));gap:22px;margin-top:34px}
.tile{border:1px solid var(--line);border-radius:18px;padding:24px;box-shadow:0 8px 24px rgba(17,24,39,.05)}
.tile .tile-icon{width:44px;height:44px;border-radius:12px;color:#fff;display:flex;align-items:center;justify-content:center;font-size:1.2rem;margin-bottom:14px}
.tile h3{margin-bottom:8px;font-size:1.05rem}
.tile p{color:var(--muted);font-size:.92rem}
.section-head{text-align:center;max-width:640px;margin:0 auto 14px}
.section-head p{color:var(--muted)}
.steps{display:grid;grid-template-columns:repeat(3,1fr);gap:26px;margin-top:38px}
.step{text-align:center;padding:0 10px}
.step-num{width:52px;height:52px;border-radius:50%;background:var(--grad);color:#fff;font-weight:700;font-size:1.2rem;display:flex;align-items:center;justify-content:center;margin:0 auto 16px}
.step h3{margin-bottom:8px}
.step p{color:var(--muted);font-size:.92rem}
.carousel{position:relative;max-width:720px;margin:36px auto 0;text-align:center}
.testimonial{display:none}
.testimonial.active{display:block}
.testimonial blockquote{font-size:1.15rem;color:var(--ink);margin-bottom:18px}
.testimonial .who{color:var(--muted);font-size:.9rem}
.testimonial .who b{color:var(--ink)}
.carousel-dots{display:flex;justify-content:center;gap:8px;margin-top:22px}
.carousel-dot{width:9px;height:9px;border-radius:50%;border:none;background:var(--line);cursor:pointer}
.carousel-dot.active{background:var(--orange)}
.waitlist-section{background:linear-gradient(135deg,#fff7ed,#fdf2f8,#faf5ff);border-radius:28px;text-align:center;padding:64px 24px}
.waitlist-section h2{font-size:2.4rem;margin-bottom:16px}
.waitlist-section .lead{color:var(--muted);max-width:560px;margin:0 auto 26px}
.perks{display:flex;justify-content:center;gap:26px;flex-wrap:wrap;color:var(--muted);margin-bottom:30px;font-size:.95rem}
.waitlist-form{display:flex;max-width:440px;margin:0 auto;background:#fff;border:1px solid var(--line);border-radius:18px;box-shadow:0 12px 34px rgba(17,24,39,.08);overflow:hidden}
.waitlist-form input{flex:1;border:none;outline:none;padding:16px 18px;font-size:1rem}
.waitlist-form button{border-radius:0}
.form-message{margin-top:14px;font-size:.9rem;min-height:1.2em}
.form-message.success{color:#16a34a}
.form-message.error{color:#dc2626}
.privacy-note{color:var(--soft);font-size:.78rem;margin-top:14px}
.social-proof{margin-top:34px;display:flex;justify-content:center;align-items:center;gap:14px;color:var(--muted);font-size:.9rem}
.social-proof b{color:var(--orange)}
.cta-section{background:#111827;color:#fff;text-align:center;border-radius:28px;padding:72px 24px}
.cta-section h2{font-size:2.2rem;margin-bottom:14px}
.cta-section p{color:#d1d5db;max-width:520px;margin:0 auto 28px}
.cta-actions{display:flex;justify-content:center;gap:14px}
.site-footer{border-top:1px solid var(--line);margin-top:40px}
.footer-grid{max-width:1100px;margin:0 auto;display:grid;grid-template-columns:2fr 1fr 1fr 1fr;gap:32px;padding:48px 24px}
.footer-brand p{color:var(--muted);font-size:.9rem;margin-top:10px}
.footer-col h4{margin-bottom:12px}
.footer-col a{display:block;color:var(--muted);font-size:.92rem;margin-bottom:8px}
.footer-note{text-align:center;color:var(--soft);font-size:.8rem;padding:18px 0 28px}
.auth-body{min-height:100vh;display:flex;align-items:center;justify-content:center;background:linear-gradient(135deg,#fff7ed,#fdf2f8,#faf5ff);padding:24px}
.auth-card{background:#fff;border:1px solid var(--line);border-radius:24px;box-shadow:0 24px 60px rgba(17,24,39,.12);padding:40px;width:100%;max-width:420px;text-align:center}
.auth-card h1{font-size:1.6rem;margin-bottom:8px}
.auth-card .sub{color:var(--muted);font-size:.95rem;margin-bottom:24px}
.auth-card form{display:flex;flex-direction:column;gap:14px;text-align:left}
.auth-card label{font-size:.85rem;color:var(--muted)}
.auth-card input[type=text],.auth-card input[type=email]{width:100%;border:1px solid var(--line);border-radius:12px;padding:12px 14px;font-size:1rem;outline:none}
.auth-card input:focus{border-color:var(--orange)}
.auth-error{color:#dc2626;font-size:.88rem;min-height:1.1em;text-align:center}
.otp-row{display:flex;justify-content:center;gap:10px;margin:18px 0}
.otp-box{width:48px;height:56px;border:1px solid var(--line);border-radius:12px;text-align:center;font-size:1.4rem;outline:none}
.otp-box:focus{border-color:var(--orange)}
.countdown{color:var(--soft);font-size:.88rem;margin-top:14px}
.linklike{background:none;border:none;color:var(--orange);font-weight:600;cursor:pointer;font-size:.9rem}
.linklike:disabled{color:var(--soft);cursor:not-allowed;font-weight:400}
.method-card{display:flex;gap:14px;align-items:center;border:1px solid var(--line);border-radius:14px;padding:16px;cursor:pointer;text-align:left;background:#fff;width:100%;margin-bottom:12px}
.method-card.selected{border-color:var(--orange);box-shadow:0 0 0 2px #ffedd5}
.method-card b{display:block}
.method-card span{color:var(--muted);font-size:.85rem}
.success-icon{width:64px;height:64px;border-radius:50%;background:#dcfce7;color:#16a34a;font-size:1.8rem;display:flex;align-items:center;justify-content:center;margin:0 auto 18px}
.not-found{max-width:520px;margin:0 auto;text-align:center;padding:96px 24px}
.nf-code{font-size:4.5rem;font-weight:700;background:var(--grad);-webkit-background-clip:text;background-clip:text;color:transparent}
.not-found h1{margin-bottom:10px}
.not-found p{color:var(--muted)}
.nf-actions{display:flex;justify-content:center;gap:14px;margin-top:26px}
@media (max-width:800px){
  .hero{grid-template-columns:1fr}
  .stats-band{grid-template-columns:repeat(2,1fr)}
  .steps{grid-template-columns:1fr}
  .footer-grid{grid-template-columns:1fr 1fr}
  .nav-links{display:none}
}
</style>
"##;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::test_utils::{InMemoryWaitlistRepo, test_app_state};

    use super::*;

    fn test_server() -> TestServer {
        let state = test_app_state(Arc::new(InMemoryWaitlistRepo::new()));
        TestServer::new(router().with_state(state)).unwrap()
    }

    #[tokio::test]
    async fn landing_page_renders_all_sections() {
        let server = test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        for anchor in ["id=\"how-it-works\"", "id=\"features\"", "id=\"stories\"", "id=\"waitlist\""] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert!(html.contains("Join Waitlist"));
        assert!(html.contains("/api/waitlist"));
    }

    #[tokio::test]
    async fn auth_screens_render() {
        let server = test_server();

        let login = server.get("/auth/login").await;
        login.assert_status_ok();
        let login_html = login.text();
        assert!(login_html.contains("id=\"verify-step\""));
        // Six code boxes on the login screen.
        assert!(login_html.matches("class=\"otp-box\"").count() >= 6);

        let register = server.get("/auth/register").await;
        register.assert_status_ok();
        assert!(register.text().contains("id=\"register-form\""));

        let verification = server.get("/auth/verification/otp").await;
        verification.assert_status_ok();
        assert!(verification.text().contains("id=\"method-step\""));
    }

    #[tokio::test]
    async fn auth_pages_embed_the_external_auth_origin() {
        let server = test_server();

        let html = server.get("/auth/login").await.text();
        assert!(html.contains("http://localhost:8000"));
    }

    #[tokio::test]
    async fn unmatched_routes_render_the_not_found_page() {
        let server = test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
        assert!(response.text().contains("Go Home"));
    }
}
