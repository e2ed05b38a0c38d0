//! Landing-page sections. Copy and structure follow the marketing
//! site: hero, stats band, feature tiles, how-it-works, testimonial
//! carousel, waitlist capture and closing call-to-action.

use crate::flows::waitlist_form;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "James Oduya",
        role: "Content Creator",
        quote: "Giftseon has transformed how I connect with my audience. It's not just about gifts - it's about building a real community around my creative work.",
    },
    Testimonial {
        name: "Sarah Adebayo",
        role: "Event Planner",
        quote: "Planning celebrations became so much easier with Giftseon. My clients love how their guests can contribute meaningfully to special moments.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Entrepreneur",
        quote: "We used Giftseon for our startup launch party. The community response was incredible - it felt like everyone was truly part of our journey.",
    },
    Testimonial {
        name: "Aisha Mohammed",
        role: "Teacher",
        quote: "My students surprised me with a Giftseon page for Teacher's Day. The heartfelt messages and support meant more than any gift ever could.",
    },
];

const STATS: [(&str, &str); 4] = [
    ("50K+", "Celebrations Created"),
    ("₦2.5B+", "Gifts Shared"),
    ("200K+", "Happy Users"),
    ("99.9%", "Uptime"),
];

const FEATURES: [(&str, &str, &str, &str); 4] = [
    (
        "🎂",
        "linear-gradient(90deg,#ec4899,#f43f5e)",
        "Birthday Celebrations",
        "Create memorable birthday experiences with personalized gift collections",
    ),
    (
        "💍",
        "linear-gradient(90deg,#a855f7,#6366f1)",
        "Weddings & Anniversaries",
        "Perfect for couples planning their special day or milestone celebrations",
    ),
    (
        "🎓",
        "linear-gradient(90deg,#3b82f6,#06b6d4)",
        "Graduations",
        "Celebrate academic achievements and support new graduates' next steps",
    ),
    (
        "🎨",
        "linear-gradient(90deg,#f97316,#eab308)",
        "Creative Projects",
        "Support artists, creators, and entrepreneurs launching new ventures",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Create Your Page",
        "Choose from beautiful templates and personalize with photos, stories, and gift preferences. Set up takes just minutes.",
    ),
    (
        "Share & Invite",
        "Share your celebration page across social media, messaging apps, or generate QR codes for easy access.",
    ),
    (
        "Collect & Celebrate",
        "Receive gifts, messages, and well-wishes in real-time. Track progress and thank contributors personally.",
    ),
];

const CAPABILITIES: [(&str, &str); 6] = [
    (
        "Easy Celebration Setup",
        "Create beautiful, personalized celebration pages in minutes with our intuitive templates",
    ),
    (
        "Social Sharing",
        "Share your celebration across all platforms with QR codes and optimized social links",
    ),
    (
        "Secure Payments",
        "Safe, fast payment processing with multiple options for contributors worldwide",
    ),
    (
        "Personal Messages",
        "Collect heartfelt messages, photos, and videos from friends and family",
    ),
    (
        "Mobile-First Design",
        "Perfectly optimized experience across all devices and screen sizes",
    ),
    (
        "Global Reach",
        "Connect with friends and family anywhere in the world, regardless of location",
    ),
];

pub fn landing_body() -> String {
    let mut body = String::with_capacity(24576);
    body.push_str(HERO);
    body.push_str(&stats_and_features());
    body.push_str(&how_it_works());
    body.push_str(&testimonials());
    body.push_str(&waitlist());
    body.push_str(CTA);
    body
}

const HERO: &str = r##"
<main class="section hero">
  <div>
    <span class="badge">✨ Celebrating Life's Special Moments</span>
    <h1>Make Every <span class="grad-text">Celebration</span> Unforgettable</h1>
    <p class="lead">Craft elegant moments, gather meaningful gifts, and unite loved ones in celebration of life's most cherished events.</p>
    <div class="hero-actions">
      <a class="btn-primary" href="#waitlist">Start Your Celebration →</a>
      <a class="btn-ghost" href="#how-it-works">Watch Demo</a>
    </div>
    <div class="avatar-row">
      <div class="avatars">
        <span class="avatar" style="background:#a855f7">S</span>
        <span class="avatar" style="background:#3b82f6">K</span>
        <span class="avatar" style="background:#06b6d4">C</span>
        <span class="avatar" style="background:#22c55e">J</span>
        <span class="avatar" style="background:#f97316">M</span>
      </div>
      <span>★★★★★ Trusted by 200k+ users</span>
    </div>
  </div>
  <div class="preview-card">
    <h3>Sarah's 28th Birthday</h3>
    <p class="loc">Lagos, Nigeria</p>
    <span class="goal-amount">₦85,000 / ₦100,000</span>
    <div class="goal-bar"><div></div></div>
    <div class="preview-stats">
      <div><b>24</b><span>Contributors</span></div>
      <div><b>48</b><span>Messages</span></div>
    </div>
  </div>
</main>
"##;

fn stats_and_features() -> String {
    let mut out = String::from("\n<section class=\"section\" id=\"features\">\n<div class=\"stats-band\">\n");
    for (value, label) in STATS {
        out.push_str(&format!("  <div><b>{value}</b><span>{label}</span></div>\n"));
    }
    out.push_str("</div>\n<div class=\"tile-grid\">\n");
    for (icon, gradient, title, description) in FEATURES {
        out.push_str(&format!(
            "  <div class=\"tile\"><div class=\"tile-icon\" style=\"background:{gradient}\">{icon}</div><h3>{title}</h3><p>{description}</p></div>\n"
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn how_it_works() -> String {
    let mut out = String::from(
        "\n<section class=\"section\" id=\"how-it-works\">\n<div class=\"section-head\"><h2>How It <span class=\"grad-text\">Works</span></h2><p>Simple steps to create memorable celebrations</p></div>\n<div class=\"steps\">\n",
    );
    for (i, (title, description)) in STEPS.iter().enumerate() {
        out.push_str(&format!(
            "  <div class=\"step\"><div class=\"step-num\">{}</div><h3>{title}</h3><p>{description}</p></div>\n",
            i + 1
        ));
    }
    out.push_str("</div>\n<div class=\"tile-grid\">\n");
    for (title, description) in CAPABILITIES {
        out.push_str(&format!(
            "  <div class=\"tile\"><h3>{title}</h3><p>{description}</p></div>\n"
        ));
    }
    out.push_str("</div>\n</section>\n");
    out
}

fn testimonials() -> String {
    let mut out = String::from(
        "\n<section class=\"section\" id=\"stories\">\n<div class=\"section-head\"><h2>Loved by <span class=\"grad-text\">Celebrants</span></h2><p>Stories from people who made their moments count</p></div>\n<div class=\"carousel\">\n",
    );
    for (i, t) in TESTIMONIALS.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        out.push_str(&format!(
            "  <div class=\"testimonial{active}\"><blockquote>“{}”</blockquote><p class=\"who\"><b>{}</b> · {}</p></div>\n",
            t.quote, t.name, t.role
        ));
    }
    out.push_str("  <div class=\"carousel-dots\">\n");
    for i in 0..TESTIMONIALS.len() {
        let active = if i == 0 { " active" } else { "" };
        out.push_str(&format!(
            "    <button class=\"carousel-dot{active}\" aria-label=\"Show testimonial {}\"></button>\n",
            i + 1
        ));
    }
    out.push_str("  </div>\n</div>\n");
    out.push_str(CAROUSEL_SCRIPT);
    out.push_str("</section>\n");
    out
}

fn waitlist() -> String {
    let mut out = String::from(
        r##"
<section class="section" id="waitlist">
<div class="waitlist-section">
  <span class="badge">✨ Coming Soon</span>
  <h2>Be the First to <span class="grad-text">Celebrate</span></h2>
  <p class="lead">Join our waitlist to get early access to Giftseon and be among the first to create unforgettable celebrations with your loved ones.</p>
  <div class="perks">
    <span>👥 Join 1,000+ early users</span>
    <span>🔔 Get notified first</span>
    <span>✨ Early access perks</span>
  </div>
  <form id="waitlist-form">
    <div class="waitlist-form">
      <input id="waitlist-email" type="email" placeholder="Enter your email address">
      <button id="waitlist-submit" class="btn-primary" type="submit">Join Waitlist</button>
    </div>
    <p id="waitlist-message" class="form-message"></p>
  </form>
  <p class="privacy-note">We respect your privacy. Unsubscribe at any time.</p>
  <div class="social-proof">
    <div class="avatars">
      <span class="avatar" style="background:#a855f7">A</span>
      <span class="avatar" style="background:#3b82f6">B</span>
      <span class="avatar" style="background:#06b6d4">C</span>
      <span class="avatar" style="background:#22c55e">D</span>
      <span class="avatar" style="background:#f97316">E</span>
      <span class="avatar" style="background:#ec4899">F</span>
      <span class="avatar" style="background:#f3f4f6;color:#6b7280">+</span>
    </div>
    <span><b>1,000+</b> people already joined</span>
  </div>
</div>
"##,
    );
    out.push_str(&waitlist_script());
    out.push_str("</section>\n");
    out
}

const CTA: &str = r##"
<section class="section">
<div class="cta-section">
  <h2>Ready to Create Something Beautiful?</h2>
  <p>Join thousands of people who've made their celebrations unforgettable with Giftseon</p>
  <div class="cta-actions">
    <a class="btn-primary" href="#waitlist">Start Your Celebration</a>
    <a class="btn-ghost" href="#how-it-works">Learn More</a>
  </div>
</div>
</section>
"##;

const CAROUSEL_SCRIPT: &str = r##"<script>
(function(){
  var slides=document.querySelectorAll('.testimonial');
  var dots=document.querySelectorAll('.carousel-dot');
  var active=0;
  function show(i){
    active=i;
    slides.forEach(function(el,j){el.classList.toggle('active',i===j);});
    dots.forEach(function(el,j){el.classList.toggle('active',i===j);});
  }
  dots.forEach(function(el,i){el.addEventListener('click',function(){show(i);});});
  setInterval(function(){show((active+1)%slides.length);},5000);
})();
</script>
"##;

/// The form script mirrors [`crate::flows::waitlist_form::WaitlistForm`];
/// the delay and messages come from that module so page and model cannot
/// drift apart.
fn waitlist_script() -> String {
    format!(
        "<script>\nvar RESET_DELAY_MS={};\nvar EMPTY_EMAIL_MESSAGE={:?};\nvar NETWORK_FAILURE_MESSAGE={:?};\n{}",
        waitlist_form::RESET_DELAY_MS,
        waitlist_form::EMPTY_EMAIL_MESSAGE,
        waitlist_form::NETWORK_FAILURE_MESSAGE,
        WAITLIST_SCRIPT_BODY,
    )
}

const WAITLIST_SCRIPT_BODY: &str = r##"
(function(){
  var form=document.getElementById('waitlist-form');
  var input=document.getElementById('waitlist-email');
  var button=document.getElementById('waitlist-submit');
  var banner=document.getElementById('waitlist-message');
  var status='idle';
  function render(message){
    button.disabled=(status==='loading'||status==='success');
    button.textContent=status==='loading'?'…':(status==='success'?'✓':'Join Waitlist');
    banner.textContent=message||'';
    banner.className='form-message '+status;
  }
  function settle(message){
    render(message);
    setTimeout(function(){status='idle';render('');},RESET_DELAY_MS);
  }
  form.addEventListener('submit',function(e){
    e.preventDefault();
    if(status==='loading'||status==='success')return;
    if(!input.value){status='error';settle(EMPTY_EMAIL_MESSAGE);return;}
    status='loading';render('');
    fetch('/api/waitlist',{
      method:'POST',
      headers:{'Content-Type':'application/json'},
      body:JSON.stringify({email:input.value})
    })
      .then(function(r){return r.json().then(function(d){return {ok:r.ok,data:d};});})
      .then(function(res){
        if(res.ok&&res.data.success){status='success';input.value='';settle(res.data.message);}
        else{status='error';settle(res.data.error||NETWORK_FAILURE_MESSAGE);}
      })
      .catch(function(){status='error';settle(NETWORK_FAILURE_MESSAGE);});
  });
})();
</script>
"##;
